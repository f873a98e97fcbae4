/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Errors possible during pipeline operations
//!
//! Every stage error is carried unchanged inside [`CompactErrors`]
use std::fmt::{Debug, Display, Formatter};
use std::io;

use compact_codec::{CompactDecodeErrors, CompactEncodeErrors};
use compact_image::errors::ImageErrors;

use crate::codecs::CodecErrors;

/// All possible errors that can occur while optimizing,
/// compressing or decompressing an image
pub enum CompactErrors {
    /// Grid access or construction failed
    ImageErrors(ImageErrors),
    /// A compact file could not be decoded
    DecodeErrors(CompactDecodeErrors),
    /// A grid could not be encoded into the compact format
    EncodeErrors(CompactEncodeErrors),
    /// Reading or writing a standard raster format failed
    CodecErrors(CodecErrors),
    /// Unknown compression mode name
    UnsupportedStrategy(String),
    /// Unknown optimization medium name
    UnsupportedMedium(String),
    /// Scale factor outside of `(0.0, 1.0]`
    InvalidScale(f64),
    /// Reading or writing persisted data failed
    IoErrors(io::Error),
    /// The workflow reached a stage that needs a grid but none was produced
    NoImageForOperations,
    /// The workflow has a decoder but no bytes to feed it
    NoImageBuffer,
    GenericString(String)
}

impl Debug for CompactErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ImageErrors(err) => write!(f, "{err:?}"),
            Self::DecodeErrors(err) => write!(f, "Could not decode compact file: {err:?}"),
            Self::EncodeErrors(err) => write!(f, "Could not encode compact file: {err:?}"),
            Self::CodecErrors(err) => write!(f, "{err:?}"),
            Self::UnsupportedStrategy(name) => {
                write!(
                    f,
                    "Unsupported compression mode `{name}`, supported modes are simple and experimental"
                )
            }
            Self::UnsupportedMedium(name) => {
                write!(
                    f,
                    "Unsupported medium `{name}`, supported media are web, print and mobile"
                )
            }
            Self::InvalidScale(scale) => {
                write!(f, "Invalid scale {scale}, expected a value in (0.0, 1.0]")
            }
            Self::IoErrors(err) => write!(f, "I/O error: {err}"),
            Self::NoImageForOperations => write!(f, "No image found for operations"),
            Self::NoImageBuffer => write!(f, "No buffer to decode an image from"),
            Self::GenericString(err) => write!(f, "{err}")
        }
    }
}

impl Display for CompactErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl std::error::Error for CompactErrors {}

impl From<ImageErrors> for CompactErrors {
    fn from(value: ImageErrors) -> Self {
        CompactErrors::ImageErrors(value)
    }
}

impl From<CompactDecodeErrors> for CompactErrors {
    fn from(value: CompactDecodeErrors) -> Self {
        CompactErrors::DecodeErrors(value)
    }
}

impl From<CompactEncodeErrors> for CompactErrors {
    fn from(value: CompactEncodeErrors) -> Self {
        match value {
            CompactEncodeErrors::IoErrors(err) => CompactErrors::IoErrors(err),
            other => CompactErrors::EncodeErrors(other)
        }
    }
}

impl From<CodecErrors> for CompactErrors {
    fn from(value: CodecErrors) -> Self {
        CompactErrors::CodecErrors(value)
    }
}

impl From<io::Error> for CompactErrors {
    fn from(value: io::Error) -> Self {
        CompactErrors::IoErrors(value)
    }
}
