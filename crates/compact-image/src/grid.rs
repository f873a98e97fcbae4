/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! This module represents a single pixel grid
use std::fmt::{Debug, Display, Formatter};

use crate::depth::u16_to_u8;
use crate::errors::ImageErrors;
use crate::metadata::GridMetadata;
use crate::reader::RowStreamReader;

/// Maximum supported color channels
pub const MAX_CHANNELS: usize = 4;

/// A single pixel, samples in `R,G,B,A` order
///
/// Alpha is carried as supplied by whoever built the grid,
/// it is never premultiplied or un-premultiplied here.
pub type Rgba16 = [u16; MAX_CHANNELS];

/// An image held in a neutral intermediate form
///
/// Pixels are stored column-major, i.e. pixel `(x,y)` lives at
/// `x * height + y`. This is the canonical traversal order of the
/// [`RowStreamReader`] and of the compact text format.
#[derive(Clone, Eq, PartialEq)]
pub struct PixelGrid {
    width:  usize,
    height: usize,
    pixels: Vec<Rgba16>
}

impl PixelGrid {
    /// Create a new grid with every sample set to zero
    ///
    /// # Panics
    /// If `width*height` overflows a `usize`
    pub fn new(width: usize, height: usize) -> PixelGrid {
        PixelGrid::fill([0; MAX_CHANNELS], width, height)
    }

    /// Create a new grid with every pixel set to `pixel`
    ///
    /// # Panics
    /// If `width*height` overflows a `usize`, see [`PixelGrid::try_fill`]
    /// for a non-panicking version
    pub fn fill(pixel: Rgba16, width: usize, height: usize) -> PixelGrid {
        match PixelGrid::try_fill(pixel, width, height) {
            Ok(grid) => grid,
            Err(err) => panic!("{err:?}")
        }
    }

    /// Create a new grid with every pixel set to `pixel`
    ///
    /// # Errors
    /// [`ImageErrors::TooLargeDimensions`] if `width*height` overflows a `usize`
    pub fn try_fill(pixel: Rgba16, width: usize, height: usize) -> Result<PixelGrid, ImageErrors> {
        let size = checked_size(width, height)?;

        Ok(PixelGrid {
            width,
            height,
            pixels: vec![pixel; size]
        })
    }

    /// Create a grid from pixels already laid out in column-major order
    ///
    /// # Errors
    /// If `pixels.len()` is not `width*height`
    pub fn from_pixels(
        width: usize, height: usize, pixels: Vec<Rgba16>
    ) -> Result<PixelGrid, ImageErrors> {
        let expected = checked_size(width, height)?;

        if pixels.len() != expected {
            return Err(ImageErrors::DimensionsMismatch(expected, pixels.len()));
        }
        Ok(PixelGrid {
            width,
            height,
            pixels
        })
    }

    /// Create a grid from row-major interleaved RGBA samples
    ///
    /// This is the layout most raster codecs hand out, e.g `[R,G,B,A,R,G,B,A..]`
    /// for the first row, then the second row and so on.
    ///
    /// # Errors
    /// If `data.len()` is not `width*height*4`
    pub fn from_u16(data: &[u16], width: usize, height: usize) -> Result<PixelGrid, ImageErrors> {
        let expected = checked_size(width, height)?
            .checked_mul(MAX_CHANNELS)
            .ok_or(ImageErrors::TooLargeDimensions(width, height))?;

        if data.len() != expected {
            return Err(ImageErrors::DimensionsMismatch(expected, data.len()));
        }
        let mut grid = PixelGrid::new(width, height);

        if grid.is_empty() {
            return Ok(grid);
        }
        for (y, row) in data.chunks_exact(width * MAX_CHANNELS).enumerate() {
            for (x, pix) in row.chunks_exact(MAX_CHANNELS).enumerate() {
                grid.pixels[x * height + y] = [pix[0], pix[1], pix[2], pix[3]];
            }
        }
        Ok(grid)
    }

    /// Return an independent deep copy of this grid
    ///
    /// The copy owns its storage, writes to it are never visible in `self`
    pub fn copy(&self) -> PixelGrid {
        self.clone()
    }

    /// Get grid dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// Return true if the grid holds no pixel at all
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// All pixels in column-major order
    pub fn pixels(&self) -> &[Rgba16] {
        &self.pixels
    }

    /// Pixels of column `x`, top to bottom
    pub fn column(&self, x: usize) -> Option<&[Rgba16]> {
        if x >= self.width {
            return None;
        }
        let start = x * self.height;
        Some(&self.pixels[start..start + self.height])
    }

    /// Return the pixel at `(x,y)`
    ///
    /// # Errors
    /// [`ImageErrors::IndexOutOfRange`] if the coordinate lies outside the grid
    pub fn sample_at(&self, x: usize, y: usize) -> Result<Rgba16, ImageErrors> {
        let index = self.index(x, y)?;
        Ok(self.pixels[index])
    }

    /// Overwrite the pixel at `(x,y)`
    ///
    /// # Errors
    /// [`ImageErrors::IndexOutOfRange`] if the coordinate lies outside the grid
    pub fn set_sample(&mut self, x: usize, y: usize, pixel: Rgba16) -> Result<(), ImageErrors> {
        let index = self.index(x, y)?;
        self.pixels[index] = pixel;
        Ok(())
    }

    /// Create a reader walking this grid in traversal order
    pub fn reader(&self) -> RowStreamReader<'_> {
        RowStreamReader::new(self)
    }

    /// Interleave pixels row by row into a single vector
    pub fn flatten_to_u16(&self) -> Vec<u16> {
        let mut out = Vec::with_capacity(self.pixels.len() * MAX_CHANNELS);

        for y in 0..self.height {
            for x in 0..self.width {
                out.extend_from_slice(&self.pixels[x * self.height + y]);
            }
        }
        out
    }

    /// Interleave pixels row by row into a single 8 bit vector
    ///
    /// Each sample keeps its high byte, see [`crate::depth`]
    pub fn flatten_to_u8(&self) -> Vec<u8> {
        self.flatten_to_u16().into_iter().map(u16_to_u8).collect()
    }

    /// Return information describing this grid
    pub fn metadata(&self) -> GridMetadata {
        GridMetadata::new(self.width, self.height)
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, ImageErrors> {
        if x >= self.width || y >= self.height {
            return Err(ImageErrors::IndexOutOfRange(
                x,
                y,
                self.width,
                self.height
            ));
        }
        Ok(x * self.height + y)
    }
}

fn checked_size(width: usize, height: usize) -> Result<usize, ImageErrors> {
    width
        .checked_mul(height)
        .ok_or(ImageErrors::TooLargeDimensions(width, height))
}

impl Debug for PixelGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "PixelGrid({}x{})", self.width, self.height)
    }
}

/// Debug rendering of the grid, dimensions then the raw sample dump
/// column by column. Not meant for persistence.
impl Display for PixelGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[{} x {}]:", self.width, self.height)?;

        for x in 0..self.width {
            let start = x * self.height;
            writeln!(f, "{:?}", &self.pixels[start..start + self.height])?;
        }
        Ok(())
    }
}
