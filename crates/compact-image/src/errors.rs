/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible when manipulating a pixel grid
use std::fmt::{Debug, Display, Formatter};

/// Errors that may occur when accessing or building a [`PixelGrid`](crate::PixelGrid)
#[derive(Clone, Eq, PartialEq)]
pub enum ImageErrors {
    /// A coordinate outside of the grid was requested.
    ///
    /// Fields are `(x, y, width, height)`
    IndexOutOfRange(usize, usize, usize, usize),
    /// Pixel storage does not match the declared dimensions
    ///
    /// Fields are `(expected, found)`
    DimensionsMismatch(usize, usize),
    /// `width * height` does not fit in memory addressing
    TooLargeDimensions(usize, usize)
}

impl Debug for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange(x, y, width, height) => {
                write!(
                    f,
                    "Index ({x},{y}) out of range for a {width}x{height} grid"
                )
            }
            Self::DimensionsMismatch(expected, found) => {
                write!(
                    f,
                    "Dimensions mismatch, expected {expected} pixels but found {found}"
                )
            }
            Self::TooLargeDimensions(width, height) => {
                write!(f, "Too large dimensions {width}x{height}")
            }
        }
    }
}

impl Display for ImageErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for ImageErrors {}
