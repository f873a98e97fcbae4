/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Entry points composing the optimizer, the compression strategies and
//! persistence
//!
//! Forward: `grid -> optimize -> compress -> persist`.
//! Reverse: `load -> decompress -> render (optional)`.
//!
//! Each stage is strict, the first failing stage aborts the call and its
//! error is returned unchanged. Persistence is all or nothing.
use std::path::Path;
use std::str::FromStr;

use compact_codec::DecoderOptions;
use compact_image::PixelGrid;
use log::info;

use crate::codecs::ImageFormat;
use crate::compressor::{select, CompressionMode};
use crate::errors::CompactErrors;
use crate::optimizer::Medium;
use crate::persist;

/// Return a copy of `grid` optimized for the web
pub fn optimize(grid: &PixelGrid) -> Result<PixelGrid, CompactErrors> {
    optimize_as(grid, Medium::Web.name())
}

/// Return a copy of `grid` optimized for `medium`
///
/// # Errors
/// [`CompactErrors::UnsupportedMedium`] if `medium` is not one of `web`,`print` or `mobile`
pub fn optimize_as(grid: &PixelGrid, medium: &str) -> Result<PixelGrid, CompactErrors> {
    let medium = Medium::from_str(medium)?;
    crate::optimizer::optimize(grid, medium)
}

/// Compress `grid` with the simple strategy and write it to `path`
pub fn compress_to_path<P: AsRef<Path>>(grid: &PixelGrid, path: P) -> Result<(), CompactErrors> {
    compress_as_to_path(grid, CompressionMode::Simple.name(), path)
}

/// Compress `grid` with the strategy named `mode` and write it to `path`
///
/// `path` is fully rewritten, or left untouched on failure.
pub fn compress_as_to_path<P: AsRef<Path>>(
    grid: &PixelGrid, mode: &str, path: P
) -> Result<(), CompactErrors> {
    let strategy = select(mode)?;
    let encoding = strategy.compress(grid)?;

    persist::write_compact(&encoding, path)
}

/// Read the compact file at `path` back into a grid
pub fn decompress_from_path<P: AsRef<Path>>(path: P) -> Result<PixelGrid, CompactErrors> {
    decompress_as_from_path(path, CompressionMode::Simple.name())
}

/// Read the compact file at `path` with the strategy named `mode`
pub fn decompress_as_from_path<P: AsRef<Path>>(
    path: P, mode: &str
) -> Result<PixelGrid, CompactErrors> {
    decompress_with_options(path, mode, DecoderOptions::default())
}

/// Read the compact file at `path` with the strategy named `mode`,
/// honoring the limits in `options`
pub fn decompress_with_options<P: AsRef<Path>>(
    path: P, mode: &str, options: DecoderOptions
) -> Result<PixelGrid, CompactErrors> {
    let strategy = select(mode)?;
    let encoding = persist::read_compact(path, options, strategy.mode())?;

    strategy.decompress(encoding)
}

/// Read the compact file at `path` and, if `output` is given, render
/// the grid to it in the format its extension names
///
/// # Errors
/// Besides decompression errors, [`CompactErrors::CodecErrors`] if the
/// output extension names no raster format
pub fn decompress_and_render<P: AsRef<Path>>(
    path: P, output: Option<&Path>
) -> Result<PixelGrid, CompactErrors> {
    let grid = decompress_from_path(path)?;

    if let Some(output) = output {
        let mut encoder = ImageFormat::from_path(output).encoder()?;
        let bytes = encoder.encode_target(&grid)?;

        persist::write_bytes(output, &bytes)?;

        info!("Rendered {:?} with {}", output, encoder.name());
    }
    Ok(grid)
}

/// Optimize `grid` for the web, then compress it with the simple strategy
pub fn optimize_and_compress_to_path<P: AsRef<Path>>(
    grid: &PixelGrid, path: P
) -> Result<(), CompactErrors> {
    optimize_and_compress_as_to_path(
        grid,
        Medium::Web.name(),
        CompressionMode::Simple.name(),
        path
    )
}

/// Optimize `grid` for `medium`, then compress it with the strategy named `mode`
///
/// Both names are validated before any work is done.
pub fn optimize_and_compress_as_to_path<P: AsRef<Path>>(
    grid: &PixelGrid, medium: &str, mode: &str, path: P
) -> Result<(), CompactErrors> {
    CompressionMode::from_str(mode)?;

    let optimized = optimize_as(grid, medium)?;

    compress_as_to_path(&optimized, mode, path)
}
