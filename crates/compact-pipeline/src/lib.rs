/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Optimize images for a target medium and persist them in the compact format
//!
//! # Example
//! ```no_run
//! use compact_image::PixelGrid;
//!
//! let grid = PixelGrid::fill([65535, 0, 0, 65535], 64, 64);
//!
//! compact_pipeline::optimize_and_compress_to_path(&grid, "red.compact").unwrap();
//! let decoded = compact_pipeline::decompress_from_path("red.compact").unwrap();
//!
//! assert_eq!(decoded, grid);
//! ```
#![forbid(unsafe_code)]

pub mod codecs;
pub mod compressor;
pub mod errors;
pub mod optimizer;
pub mod options;
pub mod persist;
mod pipeline;
pub mod traits;
pub mod workflow;

pub use pipeline::*;

/// Current version of the compact library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Return the current version of the library
pub const fn version() -> &'static str {
    VERSION
}
