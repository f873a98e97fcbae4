/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Grid metadata
//!
//! Describes a grid without carrying its pixels, useful for probing
//! files and logging

/// Bit depth every grid sample is carried at
pub const GRID_BIT_DEPTH: usize = 16;

/// Channel layout of every grid pixel
pub const GRID_COLORSPACE: &str = "RGBA";

/// Information about a grid
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct GridMetadata {
    // REMEMBER: If you add a field here add it's serialization
    // to the serde module
    pub(crate) width:  usize,
    pub(crate) height: usize
}

impl GridMetadata {
    pub const fn new(width: usize, height: usize) -> GridMetadata {
        GridMetadata { width, height }
    }
    /// Get grid dimensions as a tuple of (width,height)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }
    /// Total number of pixels described
    pub const fn pixels(&self) -> usize {
        self.width.saturating_mul(self.height)
    }
    pub const fn depth(&self) -> usize {
        GRID_BIT_DEPTH
    }
    pub const fn colorspace(&self) -> &'static str {
        GRID_COLORSPACE
    }
}
