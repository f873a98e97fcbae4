/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::{read, read_dir, write};

use compact_codec::CompactEncodeErrors;
use compact_image::PixelGrid;
use compact_pipeline::codecs::farbfeld::FarbfeldDecoder;
use compact_pipeline::codecs::png::PngDecoder;
use compact_pipeline::codecs::ppm::PpmDecoder;
use compact_pipeline::codecs::ImageFormat;
use compact_pipeline::errors::CompactErrors;
use compact_pipeline::traits::DecoderTrait;
use compact_pipeline::{
    compress_as_to_path, compress_to_path, decompress_and_render, decompress_as_from_path,
    decompress_from_path, optimize, optimize_and_compress_as_to_path,
    optimize_and_compress_to_path, optimize_as
};

use crate::{random_grid, scratch_path};

#[test]
fn test_compress_then_decompress() {
    let dir = scratch_path("round-trip");
    let path = dir.join("grid.compact");
    let grid = PixelGrid::fill([65535, 0, 0, 65535], 3, 3);

    compress_to_path(&grid, &path).unwrap();

    let text = String::from_utf8(read(&path).unwrap()).unwrap();
    let line = "65535|0|0|65535,65535|0|0|65535,65535|0|0|65535\n";

    assert_eq!(text, line.repeat(3));
    assert_eq!(decompress_from_path(&path).unwrap(), grid);
}

#[test]
fn test_random_grids_on_disk() {
    let dir = scratch_path("random");

    for (i, mode) in ["simple", "experimental"].iter().enumerate() {
        let path = dir.join(format!("random-{i}.compact"));
        let grid = random_grid(13, 7);

        compress_as_to_path(&grid, mode, &path).unwrap();

        assert_eq!(decompress_as_from_path(&path, mode).unwrap(), grid);
    }
}

#[test]
fn test_overwrite_replaces_contents() {
    let dir = scratch_path("overwrite");
    let path = dir.join("grid.compact");

    compress_to_path(&random_grid(10, 10), &path).unwrap();

    let small = PixelGrid::fill([1, 2, 3, 4], 1, 1);
    compress_to_path(&small, &path).unwrap();

    assert_eq!(read(&path).unwrap(), b"1|2|3|4\n");
}

#[test]
fn test_unknown_names() {
    let dir = scratch_path("unknown");
    let path = dir.join("grid.compact");
    let grid = PixelGrid::fill([1, 2, 3, 4], 2, 2);

    assert!(matches!(
        compress_as_to_path(&grid, "zip", &path),
        Err(CompactErrors::UnsupportedStrategy(_))
    ));
    assert!(matches!(
        optimize_as(&grid, "television"),
        Err(CompactErrors::UnsupportedMedium(_))
    ));
    assert!(matches!(
        optimize_and_compress_as_to_path(&grid, "web", "zip", &path),
        Err(CompactErrors::UnsupportedStrategy(_))
    ));
    assert!(!path.exists());
}

#[test]
fn test_optimize_is_idempotent() {
    let grid = random_grid(9, 5);

    let once = optimize(&grid).unwrap();
    let twice = optimize(&once).unwrap();

    assert_eq!(once, twice);

    for medium in ["web", "print", "mobile"] {
        let optimized = optimize_as(&grid, medium).unwrap();
        assert_eq!(optimized.dimensions(), grid.dimensions());
    }
}

#[test]
fn test_optimize_and_compress() {
    let dir = scratch_path("optimize-compress");
    let path = dir.join("grid.compact");
    let grid = random_grid(4, 6);

    optimize_and_compress_to_path(&grid, &path).unwrap();

    assert_eq!(decompress_from_path(&path).unwrap(), optimize(&grid).unwrap());
}

#[test]
fn test_render_farbfeld() {
    let dir = scratch_path("render-farbfeld");
    let source = dir.join("grid.compact");
    let output = dir.join("grid.ff");
    let grid = random_grid(5, 3);

    compress_to_path(&grid, &source).unwrap();

    let decoded = decompress_and_render(&source, Some(&output)).unwrap();
    assert_eq!(decoded, grid);

    let bytes = read(&output).unwrap();
    let rendered = FarbfeldDecoder::new(Default::default())
        .decode_source(&bytes)
        .unwrap();

    assert_eq!(rendered, grid);
}

#[test]
fn test_render_pam() {
    let dir = scratch_path("render-pam");
    let source = dir.join("grid.compact");
    let output = dir.join("grid.pam");
    // multiples of 257 survive the trip through 8 bits
    let grid = PixelGrid::fill([257 * 10, 257 * 200, 0, 65535], 4, 2);

    compress_to_path(&grid, &source).unwrap();
    decompress_and_render(&source, Some(&output)).unwrap();

    let bytes = read(&output).unwrap();
    let rendered = PpmDecoder::new(Default::default())
        .decode_source(&bytes)
        .unwrap();

    assert_eq!(rendered, grid);
}

#[test]
fn test_render_png() {
    let dir = scratch_path("render-png");
    let source = dir.join("grid.compact");
    let output = dir.join("grid.png");
    let grid = PixelGrid::from_pixels(
        2,
        2,
        vec![
            [257 * 10, 257 * 200, 0, 65535],
            [0, 0, 0, 0],
            [257 * 255, 257 * 128, 257, 257 * 64],
            [65535, 65535, 65535, 65535]
        ]
    )
    .unwrap();

    compress_to_path(&grid, &source).unwrap();
    decompress_and_render(&source, Some(&output)).unwrap();

    let bytes = read(&output).unwrap();
    assert_eq!(ImageFormat::guess_format(&bytes), ImageFormat::PNG);

    let rendered = PngDecoder::new(Default::default())
        .decode_source(&bytes)
        .unwrap();

    assert_eq!(rendered, grid);
}

#[test]
fn test_render_unknown_extension() {
    let dir = scratch_path("render-unknown");
    let source = dir.join("grid.compact");
    let output = dir.join("grid.xyz");

    compress_to_path(&PixelGrid::fill([1, 2, 3, 4], 1, 1), &source).unwrap();

    assert!(matches!(
        decompress_and_render(&source, Some(&output)),
        Err(CompactErrors::CodecErrors(_))
    ));
    assert!(!output.exists());
}

#[test]
fn test_malformed_file() {
    let dir = scratch_path("malformed");
    let path = dir.join("broken.compact");

    write(&path, b"1|2|3\n").unwrap();

    assert!(matches!(
        decompress_from_path(&path),
        Err(CompactErrors::DecodeErrors(_))
    ));
}

#[test]
fn test_missing_file() {
    let dir = scratch_path("missing");

    assert!(matches!(
        decompress_from_path(dir.join("nothing.compact")),
        Err(CompactErrors::IoErrors(_))
    ));
}

#[test]
fn test_failed_compress_leaves_nothing() {
    let dir = scratch_path("failed-compress");
    let path = dir.join("empty.compact");

    assert!(matches!(
        compress_to_path(&PixelGrid::new(0, 0), &path),
        Err(CompactErrors::EncodeErrors(CompactEncodeErrors::EmptyImage(0, 0)))
    ));

    assert!(!path.exists());
    assert_eq!(read_dir(&dir).unwrap().count(), 0);
}
