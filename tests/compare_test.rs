// Integration tests for the streaming comparator
// Tests cover: fixture table, chunk-boundary independence, early exit,
// length mismatch, failure precedence, readers, files, concurrency

use std::io::{self, Cursor, Read, Write};

use streameq::{
    ByteSource, Comparator, CompareConfig, CompareError, Outcome, ReadSource, ScriptedSource,
    Side, compare, compare_readers, files_equal, files_equal_with,
};

const MUL: u64 = 6364136223846793005;
const INC: u64 = 1442695040888963407;

fn v(n: usize) -> Vec<u8> {
    vec![b'v'; n]
}

fn test_err() -> io::Error {
    io::Error::other("test IO error")
}

/// Deterministic pseudo-random bytes.
fn noise(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed.wrapping_mul(MUL).wrapping_add(INC);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(MUL).wrapping_add(INC);
            (state >> 33) as u8
        })
        .collect()
}

/// Deterministic read sizes in `0..=max`, zero included.
fn partition(seed: u64, max: usize) -> Vec<usize> {
    noise(64, seed)
        .iter()
        .map(|&b| b as usize % (max + 1))
        .collect()
}

/// `data` delivered in pseudo-random read sizes of at most `max` bytes.
fn split(data: &[u8], seed: u64, max: usize) -> ScriptedSource {
    ScriptedSource::chunked(data.to_vec(), &partition(seed, max))
}

// ============================================================================
// Fixture Table
// ============================================================================

struct Case {
    name: &'static str,
    left: ScriptedSource,
    right: ScriptedSource,
    buffer_size: usize,
    want: Result<bool, Side>,
}

fn cases() -> Vec<Case> {
    vec![
        Case {
            name: "single read, eq",
            left: ScriptedSource::new().then_end(v(100)),
            right: ScriptedSource::new().then_end(v(100)),
            buffer_size: 8192,
            want: Ok(true),
        },
        Case {
            name: "single read, left err",
            left: ScriptedSource::new().then_fail(v(100), test_err()),
            right: ScriptedSource::new().then_end(v(100)),
            buffer_size: 8192,
            want: Err(Side::Left),
        },
        Case {
            name: "single read, right err",
            left: ScriptedSource::new().then_end(v(100)),
            right: ScriptedSource::new().then_fail(v(100), test_err()),
            buffer_size: 8192,
            want: Err(Side::Right),
        },
        Case {
            name: "single read, same size, neq",
            left: ScriptedSource::new().then_end(vec![b'x'; 100]),
            right: ScriptedSource::new().then_end(v(100)),
            buffer_size: 8192,
            want: Ok(false),
        },
        Case {
            name: "single read, left shorter, neq",
            left: ScriptedSource::new().then_end(v(80)),
            right: ScriptedSource::new().then_end(v(100)),
            buffer_size: 8192,
            want: Ok(false),
        },
        Case {
            name: "single read, right shorter, neq",
            left: ScriptedSource::new().then_end(v(100)),
            right: ScriptedSource::new().then_end(v(80)),
            buffer_size: 8192,
            want: Ok(false),
        },
        Case {
            name: "multi read, eq",
            left: ScriptedSource::new().then_end(v(128)),
            right: ScriptedSource::new().then_end(v(128)),
            buffer_size: 64,
            want: Ok(true),
        },
        Case {
            name: "multi read, left with late end, eq",
            left: ScriptedSource::new().then(v(128)).then_end(Vec::new()),
            right: ScriptedSource::new().then_end(v(128)),
            buffer_size: 64,
            want: Ok(true),
        },
        Case {
            name: "multi read, right with late end, eq",
            left: ScriptedSource::new().then_end(v(128)),
            right: ScriptedSource::new().then(v(128)).then_end(Vec::new()),
            buffer_size: 64,
            want: Ok(true),
        },
        Case {
            name: "multi read, diff short, eq",
            left: ScriptedSource::new()
                .then(v(45))
                .then(v(100))
                .then_end(v(51)),
            right: ScriptedSource::new()
                .then(v(31))
                .then(v(27))
                .then(v(138))
                .then_end(Vec::new()),
            buffer_size: 64,
            want: Ok(true),
        },
        Case {
            name: "multi read, diff short, left shorter, neq",
            left: ScriptedSource::new()
                .then(v(45))
                .then(v(100))
                .then_end(v(51)),
            right: ScriptedSource::new()
                .then(v(31))
                .then(v(27))
                .then(v(139))
                .then_end(Vec::new()),
            buffer_size: 64,
            want: Ok(false),
        },
        Case {
            name: "multi read, diff short, left err",
            left: ScriptedSource::new()
                .then(v(45))
                .then(v(100))
                .then_fail(v(51), test_err()),
            right: ScriptedSource::new()
                .then(v(31))
                .then(v(27))
                .then(v(138))
                .then_end(Vec::new()),
            buffer_size: 64,
            want: Err(Side::Left),
        },
        Case {
            name: "multi read, diff short, right err",
            left: ScriptedSource::new()
                .then(v(45))
                .then(v(100))
                .then_end(v(51)),
            right: ScriptedSource::new()
                .then(v(31))
                .then(v(27))
                .then(v(138))
                .then_fail(Vec::new(), test_err()),
            buffer_size: 64,
            want: Err(Side::Right),
        },
    ]
}

#[test]
fn test_fixture_table() {
    for mut case in cases() {
        let got = compare(&mut case.left, &mut case.right, case.buffer_size);
        match (got, case.want) {
            (Ok(got), Ok(want)) => assert_eq!(got, want, "{}", case.name),
            (Err(err), Err(side)) => {
                assert_eq!(err.side(), Some(side), "{}", case.name);
                assert_eq!(
                    err.io_error().map(|e| e.to_string()),
                    Some("test IO error".to_string()),
                    "{}: cause must be passed through",
                    case.name
                );
            }
            (got, want) => panic!("{}: got {:?}, want {:?}", case.name, got, want),
        }
    }
}

#[test]
fn test_fixture_table_swapped_sides() {
    for mut case in cases() {
        let got = compare(&mut case.right, &mut case.left, case.buffer_size);
        match case.want {
            Ok(want) => assert_eq!(got.unwrap(), want, "{}", case.name),
            Err(_) => assert!(got.is_err(), "{}", case.name),
        }
    }
}

// ============================================================================
// Reflexivity and Chunk-Boundary Independence
// ============================================================================

#[test]
fn test_reflexive_for_every_buffer_size() {
    let data = noise(1000, 7);
    for buffer_size in (1..=70).chain([128, 999, 1000, 1001, 8192]) {
        let mut a = ScriptedSource::new().then_end(data.clone());
        let mut b = ScriptedSource::new().then_end(data.clone());
        let equal = compare(&mut a, &mut b, buffer_size).unwrap();
        assert!(equal, "buffer size {}", buffer_size);
    }
}

#[test]
fn test_chunking_never_changes_equal_verdict() {
    let data = noise(3000, 42);
    for seed in 0..40u64 {
        for buffer_size in [1, 7, 64, 4096] {
            let mut a = split(&data, seed, 200);
            let mut b = split(&data, seed + 1000, 90);
            let equal = compare(&mut a, &mut b, buffer_size).unwrap();
            assert!(equal, "seed {} buffer {}", seed, buffer_size);
        }
    }
}

#[test]
fn test_chunking_never_changes_not_equal_verdict() {
    let data = noise(3000, 42);
    let mut changed = data.clone();
    changed[2999] ^= 0xFF;

    for seed in 0..40u64 {
        for buffer_size in [1, 7, 64, 4096] {
            let mut a = split(&data, seed, 200);
            let mut b = split(&changed, seed + 1000, 90);
            assert!(!compare(&mut a, &mut b, buffer_size).unwrap());

            let mut a = split(&data, seed, 200);
            let mut b = split(&data[..2999], seed + 500, 90);
            assert!(!compare(&mut a, &mut b, buffer_size).unwrap());
        }
    }
}

#[test]
fn test_trailing_zero_byte_end_read() {
    let mut a = ScriptedSource::new().then(v(196)).then_end(Vec::new());
    let mut b = ScriptedSource::new().then_end(v(196));
    assert!(compare(&mut a, &mut b, 64).unwrap());
}

#[test]
fn test_empty_reads_interleaved() {
    let mut a = ScriptedSource::new()
        .then(Vec::new())
        .then(v(10))
        .then(Vec::new())
        .then(Vec::new())
        .then(v(10))
        .then_end(Vec::new());
    let mut b = ScriptedSource::new().then(v(20));
    assert!(compare(&mut a, &mut b, 4).unwrap());
}

#[test]
fn test_empty_against_non_empty() {
    let mut a = ScriptedSource::new();
    let mut b = ScriptedSource::new().then(Vec::new()).then_end(vec![0u8]);
    assert!(!compare(&mut a, &mut b, 64).unwrap());

    let mut a = ScriptedSource::new().then_end(Vec::new());
    let mut b = ScriptedSource::new().then(Vec::new()).then_end(Vec::new());
    assert!(compare(&mut a, &mut b, 64).unwrap());
}

// ============================================================================
// Early Exit
// ============================================================================

#[test]
fn test_early_mismatch_bounds_reads() {
    let buffer_size = 64;
    for k in [0usize, 1, 63, 64, 100, 1000, 4095] {
        let left = noise(10_000, 3);
        let mut right = left.clone();
        right[k] ^= 0x01;

        for seed in 0..8u64 {
            let mut a = split(&left, seed, 150);
            let mut b = split(&right, seed + 99, 40);

            assert!(!compare(&mut a, &mut b, buffer_size).unwrap());

            let bound = (k + buffer_size) as u64;
            assert!(a.delivered() <= bound, "left, k {}", k);
            assert!(b.delivered() <= bound, "right, k {}", k);
        }
    }
}

#[test]
fn test_no_reads_after_mismatch() {
    let mut a = ScriptedSource::new()
        .then(&b"abc"[..])
        .then_end(v(1_000_000));
    let mut b = ScriptedSource::new()
        .then(&b"abX"[..])
        .then_end(v(1_000_000));

    assert!(!compare(&mut a, &mut b, 64).unwrap());
    assert_eq!(a.reads(), 1);
    assert_eq!(b.reads(), 1);
    assert!(!a.is_drained());
}

#[test]
fn test_length_mismatch_found_without_draining_longer_side() {
    let mut a = ScriptedSource::new().then_end(v(10));
    let mut b = ScriptedSource::chunked(v(1_000_000), &[]);

    assert!(!compare(&mut a, &mut b, 64).unwrap());
    assert!(b.delivered() <= 64);
}

// ============================================================================
// Length Mismatch
// ============================================================================

#[test]
fn test_length_mismatch_both_directions() {
    for (short, long) in [(0, 1), (80, 100), (64, 65), (128, 129), (195, 196)] {
        let mut a = ScriptedSource::chunked(v(short), &[31, 27]);
        let mut b = ScriptedSource::chunked(v(long), &[45, 100]);
        let equal = compare(&mut a, &mut b, 64).unwrap();
        assert!(!equal, "{} vs {}", short, long);

        let mut a = ScriptedSource::chunked(v(long), &[45, 100]);
        let mut b = ScriptedSource::chunked(v(short), &[31, 27]);
        let equal = compare(&mut a, &mut b, 64).unwrap();
        assert!(!equal, "{} vs {}", long, short);
    }
}

// ============================================================================
// Failure Precedence
// ============================================================================

#[test]
fn test_failure_where_content_would_match() {
    let mut a = ScriptedSource::new()
        .then(v(100))
        .then_fail(Vec::new(), test_err());
    let mut b = ScriptedSource::new().then_end(v(100));

    let err = compare(&mut a, &mut b, 64).unwrap_err();
    assert_eq!(err.side(), Some(Side::Left));
    assert!(matches!(err, CompareError::Read { .. }));
}

#[test]
fn test_failure_beats_mismatch_in_same_read() {
    let mut a = ScriptedSource::new().then_fail(vec![b'x'; 10], test_err());
    let mut b = ScriptedSource::new().then_end(v(10));

    let err = compare(&mut a, &mut b, 64).unwrap_err();
    assert_eq!(err.side(), Some(Side::Left));
    assert_eq!(b.reads(), 0, "right side read after left failed");
}

#[test]
fn test_failure_kind_is_preserved() {
    let eof = io::Error::new(io::ErrorKind::UnexpectedEof, "truncated");
    let mut a = ScriptedSource::new().then_end(v(10));
    let mut b = ScriptedSource::new().then(v(5)).then_fail(Vec::new(), eof);

    let err = compare(&mut a, &mut b, 64).unwrap_err();
    let io = err.into_io_error();
    assert_eq!(io.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(io.to_string(), "truncated");
}

// ============================================================================
// Outcomes via Comparator
// ============================================================================

#[test]
fn test_outcomes() {
    let comparator = Comparator::new(CompareConfig::new(64).unwrap());

    let mut a = ScriptedSource::chunked(v(196), &[45, 100]);
    let mut b = ScriptedSource::chunked(v(196), &[31, 27]);
    assert!(matches!(comparator.run(&mut a, &mut b), Outcome::Equal));

    let mut a = ScriptedSource::chunked(v(196), &[45, 100]);
    let mut b = ScriptedSource::chunked(v(197), &[31, 27]);
    assert!(matches!(comparator.run(&mut a, &mut b), Outcome::NotEqual));

    let mut a = ScriptedSource::new()
        .then(v(45))
        .then_fail(v(10), test_err());
    let mut b = ScriptedSource::chunked(v(196), &[31, 27]);
    let outcome = comparator.run(&mut a, &mut b);
    assert!(outcome.is_failed());
    assert!(outcome.into_result().is_err());
}

// ============================================================================
// Readers
// ============================================================================

/// Hands out `left` bytes of `v` in reads of at most 3 bytes, then fails.
struct FailingReader {
    left: usize,
}

impl Read for FailingReader {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.left == 0 {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "revoked"));
        }
        let n = self.left.min(buf.len()).min(3);
        buf[..n].fill(b'v');
        self.left -= n;
        Ok(n)
    }
}

#[test]
fn test_readers_with_different_shapes() {
    let data = noise(5000, 11);
    let (head, tail) = data.split_at(1234);
    assert!(compare_readers(&data[..], head.chain(tail), 100).unwrap());
}

#[test]
fn test_reader_failure() {
    let data = v(100);
    let reader = FailingReader { left: 50 };
    let err = compare_readers(&data[..], reader, 16).unwrap_err();
    assert_eq!(err.side(), Some(Side::Right));
    assert_eq!(
        err.io_error().map(|e| e.kind()),
        Some(io::ErrorKind::PermissionDenied)
    );
}

#[test]
fn test_mixed_source_kinds() {
    let data = noise(777, 5);
    let mut a = ReadSource::new(Cursor::new(data.clone()));
    let mut b = ScriptedSource::chunked(data, &[1, 2, 3, 500]);
    assert!(compare(&mut a, &mut b, 32).unwrap());

    let sources: Vec<Box<dyn ByteSource>> = vec![
        Box::new(ReadSource::new(&b"abc"[..])),
        Box::new(ScriptedSource::new().then_end(&b"abc"[..])),
    ];
    let mut it = sources.into_iter();
    let (mut a, mut b) = (it.next().unwrap(), it.next().unwrap());
    assert!(compare(&mut a, &mut b, 1).unwrap());
}

// ============================================================================
// Files
// ============================================================================

fn temp_with(content: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_files_equal_reflexive() {
    let file = temp_with(&noise(100_000, 1));
    assert!(files_equal(file.path(), file.path()).unwrap());
}

#[test]
fn test_files_differ_in_last_byte() {
    let mut content = vec![0u8; 300_000];
    let a = temp_with(&content);
    content[299_999] = 0x5A;
    let b = temp_with(&content);

    assert!(!files_equal(a.path(), b.path()).unwrap());
}

#[test]
fn test_files_differ_in_length() {
    let content = noise(20_000, 2);
    let a = temp_with(&content);
    let b = temp_with(&content[..19_999]);

    assert!(!files_equal(a.path(), b.path()).unwrap());
    assert!(!files_equal(b.path(), a.path()).unwrap());
}

#[test]
fn test_empty_files() {
    let a = temp_with(b"");
    let b = temp_with(b"");
    assert!(files_equal(a.path(), b.path()).unwrap());
}

#[test]
fn test_files_missing_left() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.bin");
    let b = temp_with(b"content");
    let err = files_equal(&missing, b.path()).unwrap_err();

    assert_eq!(err.side(), Some(Side::Left));
    assert!(matches!(err, CompareError::Open { .. }));
    let kind = err.io_error().map(|e| e.kind());
    assert_eq!(kind, Some(io::ErrorKind::NotFound));
}

#[test]
fn test_files_with_invalid_config() {
    let a = temp_with(b"content");
    let config = CompareConfig::default().with_buffer_size(0);
    let err = files_equal_with(a.path(), a.path(), &config).unwrap_err();
    assert!(matches!(err, CompareError::InvalidConfig { .. }));
}

// ============================================================================
// Concurrency
// ============================================================================

#[test]
fn test_concurrent_comparisons_share_nothing() {
    let comparator = Comparator::new(CompareConfig::new(33).unwrap());
    let data = noise(50_000, 9);

    std::thread::scope(|scope| {
        for seed in 0..8u64 {
            let data = &data;
            scope.spawn(move || {
                let mut a = split(data, seed, 500);
                let mut b = split(data, seed + 7, 60);
                assert!(comparator.compare(&mut a, &mut b).unwrap());
            });
        }
    });
}
