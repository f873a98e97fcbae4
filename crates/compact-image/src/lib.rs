/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Intermediate image representation used by the compact family of crates
//!
//! An image is represented as
//!
//! - a grid of `width` by `height` pixels
//!     - each pixel holding four 16 bit samples in `R,G,B,A` order
//!         - stored column by column (x outer, y inner)
//!
//! The column-major order is not an implementation detail, the compact text
//! format carries no coordinates and relies on it to rebuild the grid,
//! see [`reader::RowStreamReader`].
#![forbid(unsafe_code)]

pub mod depth;
pub mod errors;
pub mod grid;
pub mod metadata;
pub mod reader;
mod serde;

pub use grid::{PixelGrid, Rgba16, MAX_CHANNELS};
pub use reader::RowStreamReader;
