/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Compression strategy selection
//!
//! A [`CompressionMode`] names a strategy, [`select`] validates a mode name
//! and returns the strategy implementing it. Unknown names are an error,
//! there is no fallback to a default mode.
use std::borrow::Cow;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use compact_image::PixelGrid;
use log::debug;

use crate::errors::CompactErrors;
use crate::traits::CompressionStrategy;

/// Version of the on-disk layout produced by the current strategies
pub const FORMAT_VERSION: u8 = 1;

/// Supported compression modes
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum CompressionMode {
    /// Grid is persisted unchanged
    #[default]
    Simple,
    /// Reserved for a strategy with a different on-disk layout.
    ///
    /// Currently behaves like [`Simple`](Self::Simple)
    Experimental
}

impl CompressionMode {
    /// All modes, in the order they are documented
    pub const fn all() -> &'static [CompressionMode] {
        &[CompressionMode::Simple, CompressionMode::Experimental]
    }

    pub const fn name(self) -> &'static str {
        match self {
            CompressionMode::Simple => "simple",
            CompressionMode::Experimental => "experimental"
        }
    }

    /// Return the strategy implementing this mode
    pub fn strategy(self) -> Box<dyn CompressionStrategy> {
        match self {
            CompressionMode::Simple | CompressionMode::Experimental => {
                Box::new(IdentityStrategy::new(self))
            }
        }
    }
}

impl Display for CompressionMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CompressionMode {
    type Err = CompactErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CompressionMode::all()
            .iter()
            .find(|mode| mode.name() == s)
            .copied()
            .ok_or_else(|| CompactErrors::UnsupportedStrategy(s.to_string()))
    }
}

/// Return the strategy named `mode`
///
/// # Errors
/// [`CompactErrors::UnsupportedStrategy`] if no strategy is called `mode`
///
/// # Example
/// ```
/// use compact_pipeline::compressor::{select, CompressionMode};
///
/// assert_eq!(select("simple").unwrap().mode(), CompressionMode::Simple);
/// assert!(select("zip").is_err());
/// ```
pub fn select(mode: &str) -> Result<Box<dyn CompressionStrategy>, CompactErrors> {
    let mode = CompressionMode::from_str(mode)?;
    debug!("Selected `{mode}` compression strategy");
    Ok(mode.strategy())
}

/// A grid on its way to, or back from, persistence
///
/// Carries the strategy and layout version next to the grid so
/// strategies can attach information without changing the grid.
#[derive(Clone, Debug)]
pub struct CompactEncoding<'a> {
    grid:    Cow<'a, PixelGrid>,
    mode:    CompressionMode,
    version: u8
}

impl<'a> CompactEncoding<'a> {
    /// Wrap a borrowed grid
    pub fn borrowed(grid: &'a PixelGrid, mode: CompressionMode) -> CompactEncoding<'a> {
        CompactEncoding {
            grid: Cow::Borrowed(grid),
            mode,
            version: FORMAT_VERSION
        }
    }

    /// Wrap an owned grid, e.g one that was just decoded
    pub fn owned(grid: PixelGrid, mode: CompressionMode) -> CompactEncoding<'static> {
        CompactEncoding {
            grid: Cow::Owned(grid),
            mode,
            version: FORMAT_VERSION
        }
    }

    pub fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Unwrap the grid, cloning it only if it was borrowed
    pub fn into_grid(self) -> PixelGrid {
        self.grid.into_owned()
    }

    pub const fn mode(&self) -> CompressionMode {
        self.mode
    }

    pub const fn version(&self) -> u8 {
        self.version
    }
}

/// Pass-through strategy, the encoding holds the grid unchanged
#[derive(Copy, Clone, Debug)]
pub struct IdentityStrategy {
    mode: CompressionMode
}

impl IdentityStrategy {
    pub const fn new(mode: CompressionMode) -> IdentityStrategy {
        IdentityStrategy { mode }
    }
}

impl CompressionStrategy for IdentityStrategy {
    fn mode(&self) -> CompressionMode {
        self.mode
    }

    fn compress<'a>(&self, grid: &'a PixelGrid) -> Result<CompactEncoding<'a>, CompactErrors> {
        Ok(CompactEncoding::borrowed(grid, self.mode))
    }

    fn decompress(&self, encoding: CompactEncoding<'_>) -> Result<PixelGrid, CompactErrors> {
        Ok(encoding.into_grid())
    }
}
