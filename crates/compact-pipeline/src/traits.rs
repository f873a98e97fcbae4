/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Traits the pipeline is composed from
//!
//! Each stage of the pipeline is a trait object, new compression
//! strategies, optimizers or raster formats plug in by implementing
//! the matching trait.
use compact_image::PixelGrid;

use crate::codecs::ImageFormat;
use crate::compressor::{CompactEncoding, CompressionMode};
use crate::errors::CompactErrors;

/// Turns bytes of a standard raster format into a grid
pub trait DecoderTrait {
    /// Get the name of the decoder
    fn name(&self) -> &'static str;

    /// Decode `data` into a grid
    fn decode_source(&mut self, data: &[u8]) -> Result<PixelGrid, CompactErrors>;
}

/// Turns a grid into bytes of a standard raster format
pub trait EncoderTrait {
    /// Get the name of the encoder
    fn name(&self) -> &'static str;

    /// The format this encoder produces
    fn format(&self) -> ImageFormat;

    /// Encode `grid`, returning the encoded bytes
    fn encode_target(&mut self, grid: &PixelGrid) -> Result<Vec<u8>, CompactErrors>;
}

/// Prepares a grid for a given target
pub trait OptimizerTrait {
    /// Get the name of the optimizer
    fn name(&self) -> &'static str;

    /// Return an optimized copy of `grid`, `grid` itself is never modified
    fn optimize(&self, grid: &PixelGrid) -> Result<PixelGrid, CompactErrors>;
}

/// Translates between a grid and its compact encoding
///
/// Callers only ever see this trait, so strategies with a different
/// layout can be swapped in without touching them.
pub trait CompressionStrategy {
    /// The mode this strategy was selected by
    fn mode(&self) -> CompressionMode;

    fn compress<'a>(&self, grid: &'a PixelGrid) -> Result<CompactEncoding<'a>, CompactErrors>;

    fn decompress(&self, encoding: CompactEncoding<'_>) -> Result<PixelGrid, CompactErrors>;
}
