/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fmt::{Debug, Display, Formatter};
use std::io;

use compact_image::errors::ImageErrors;

/// Where in a compact file decoding failed
///
/// Lines and samples are counted from one, `sample` is absent when
/// the whole line is at fault.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Position {
    pub line:   usize,
    pub sample: Option<usize>
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.sample {
            Some(sample) => write!(f, "line {}, sample {}", self.line, sample),
            None => write!(f, "line {}", self.line)
        }
    }
}

/// Errors possible during decoding
pub enum CompactDecodeErrors {
    /// The input contains no line at all
    EmptyEncoding,
    /// Structure or number parsing failed, the file is corrupt or truncated
    MalformedEncoding(Position, String),
    /// Decoded dimensions exceed the configured limits
    ///
    /// Fields are `(limit, found)`
    TooLargeDimensions(usize, usize),
    /// The decoded pixels could not be turned into a grid
    ImageErrors(ImageErrors)
}

impl CompactDecodeErrors {
    pub(crate) fn malformed(line: usize, sample: Option<usize>, reason: String) -> Self {
        CompactDecodeErrors::MalformedEncoding(Position { line, sample }, reason)
    }
}

impl Debug for CompactDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyEncoding => {
                write!(f, "Empty encoding, no line found")
            }
            Self::MalformedEncoding(position, reason) => {
                write!(f, "Malformed encoding at {position}: {reason}")
            }
            Self::TooLargeDimensions(limit, found) => {
                write!(
                    f,
                    "Too large dimensions, expected a value less than {limit} but found {found}"
                )
            }
            Self::ImageErrors(err) => {
                write!(f, "{err:?}")
            }
        }
    }
}

impl Display for CompactDecodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CompactDecodeErrors {}

impl From<ImageErrors> for CompactDecodeErrors {
    fn from(value: ImageErrors) -> Self {
        CompactDecodeErrors::ImageErrors(value)
    }
}

/// Errors possible during encoding
pub enum CompactEncodeErrors {
    /// The grid holds no pixels, the result would not be decodable
    EmptyImage(usize, usize),
    IoErrors(io::Error)
}

impl Debug for CompactEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyImage(width, height) => {
                write!(f, "Cannot encode a {width}x{height} grid, it has no pixels")
            }
            Self::IoErrors(err) => {
                write!(f, "I/O error {err}")
            }
        }
    }
}

impl Display for CompactEncodeErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CompactEncodeErrors {}

impl From<io::Error> for CompactEncodeErrors {
    fn from(value: io::Error) -> Self {
        CompactEncodeErrors::IoErrors(value)
    }
}
