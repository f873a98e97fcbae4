/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use compact_codec::{CompactDecodeErrors, CompactDecoder, CompactEncoder};
use compact_image::PixelGrid;

use crate::{entries_path, random_grid, Expected, TestEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_decode_entries() {
    let file = entries_path().join("decode.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();

    let mut failed = Vec::new();

    for entry in &entries {
        let result = CompactDecoder::new(entry.input.as_bytes()).decode();

        let passed = match (entry.expected, &result) {
            (Expected::Ok, Ok(grid)) => {
                Some(grid.width()) == entry.width && Some(grid.height()) == entry.height
            }
            (Expected::Empty, Err(CompactDecodeErrors::EmptyEncoding)) => true,
            (Expected::Malformed, Err(CompactDecodeErrors::MalformedEncoding(..))) => true,
            _ => false
        };
        if !passed {
            eprintln!(
                "Unexpected result for {}\nExpected {:?} but found {:?}\nConfig:{:#?}\n",
                entry.name, entry.expected, result, entry
            );
            failed.push(entry.name.clone());
        }
    }
    if !failed.is_empty() {
        panic!("Entries {:?} did not decode as expected", failed);
    }
}

#[test]
fn test_random_round_trip() {
    for (width, height) in [(1, 1), (3, 1), (1, 3), (31, 17), (64, 64)] {
        let grid = random_grid(width, height);
        let text = CompactEncoder::new(&grid).encode_to_vec().unwrap();

        let decoded = CompactDecoder::new(&text).decode().unwrap();

        assert_eq!(decoded, grid);
    }
}

#[test]
fn test_re_encode_is_stable() {
    let text = "1|2|3|4,5|6|7|8\n9|10|11|12,13|14|15|16\n";

    let grid = CompactDecoder::new(text.as_bytes()).decode().unwrap();
    let encoded = CompactEncoder::new(&grid).encode_to_string().unwrap();

    assert_eq!(encoded, text);
}

#[test]
fn test_error_names_the_line() {
    let text = "1|2|3|4\n5|6|7\n";
    let err = CompactDecoder::new(text.as_bytes()).decode().unwrap_err();

    match err {
        CompactDecodeErrors::MalformedEncoding(position, _) => assert_eq!(position.line, 2),
        err => panic!("Unexpected error {err:?}")
    }
}

#[test]
fn test_extreme_values() {
    let grid = PixelGrid::fill([0, 65535, 0, 65535], 2, 2);
    let text = CompactEncoder::new(&grid).encode_to_string().unwrap();

    assert_eq!(text, "0|65535|0|65535,0|65535|0|65535\n0|65535|0|65535,0|65535|0|65535\n");
    assert_eq!(CompactDecoder::new(text.as_bytes()).decode().unwrap(), grid);
}
