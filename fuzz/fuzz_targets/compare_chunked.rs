#![no_main]

use libfuzzer_sys::fuzz_target;
use streameq::{ScriptedSource, compare};

// Layout: [buffer size byte][split byte][left chunk sizes...]
// The rest of the input after the header is split into two streams.
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let buffer_size = data[0] as usize % 97 + 1;
    let body = &data[2..];
    let split = (data[1] as usize).min(body.len());

    // Same bytes on both sides, chunked differently.
    let left_sizes: Vec<usize> = body.iter().take(16).map(|b| *b as usize % 40).collect();
    let right_sizes: Vec<usize> = body
        .iter()
        .rev()
        .take(16)
        .map(|b| *b as usize % 23)
        .collect();

    let mut a = ScriptedSource::chunked(body.to_vec(), &left_sizes);
    let mut b = ScriptedSource::chunked(body.to_vec(), &right_sizes);
    assert!(compare(&mut a, &mut b, buffer_size).unwrap());

    // Two different streams must agree with slice equality.
    let (left, right) = body.split_at(split);
    let mut a = ScriptedSource::chunked(left.to_vec(), &left_sizes);
    let mut b = ScriptedSource::chunked(right.to_vec(), &right_sizes);
    let equal = compare(&mut a, &mut b, buffer_size).unwrap();
    assert_eq!(equal, left == right);

    // Never read further than one buffer past the shorter input.
    let bound = (left.len().min(right.len()) + buffer_size) as u64;
    assert!(a.delivered() <= bound);
    assert!(b.delivered() <= bound);
});
