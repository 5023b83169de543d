#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::{Cursor, Read};
use streameq::compare_readers;

fuzz_target!(|data: (Vec<u8>, Vec<u8>, u8)| {
    let (left, right, size) = data;
    let buffer_size = size as usize + 1;

    let equal = compare_readers(Cursor::new(&left), Cursor::new(&right), buffer_size).unwrap();
    assert_eq!(equal, left == right);

    // A reader split in two parts is the same stream.
    let mid = left.len() / 2;
    let chained = Cursor::new(&left[..mid]).chain(Cursor::new(&left[mid..]));
    assert!(compare_readers(chained, Cursor::new(&left), buffer_size).unwrap());
});
