/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Standard raster formats grids are loaded from and rendered to
//!
//! These are the source and target of the pipeline, the compact format
//! itself lives in `compact-codec`. Decoding and encoding is done by the
//! zune codec crates, this module only adapts their pixels to grids.
//!
//! - Farbfeld stores 16 bit RGBA, grids pass through it losslessly.
//! - PPM/PAM is written as `P7` at 8 or 16 bits.
//! - PNG is written at 8 bits.
//!
//! At 8 bits every sample keeps its high byte.
use std::ffi::OsStr;
use std::fmt::{Debug, Display, Formatter};
use std::path::Path;

use compact_codec::DecoderOptions;
use compact_image::depth::u8_to_u16;
use compact_image::{PixelGrid, MAX_CHANNELS};
use zune_core::bit_depth::BitDepth;
use zune_core::colorspace::ColorSpace;
use zune_core::options::EncoderOptions;
use zune_core::result::DecodingResult;

use crate::errors::CompactErrors;
use crate::traits::{DecoderTrait, EncoderTrait};

pub mod farbfeld;
pub mod png;
pub mod ppm;

/// Errors raised by the raster codecs
pub enum CodecErrors {
    Static(&'static str),
    /// An error reported by one of the underlying codecs
    Generic(String),
    /// Pixels come in a layout that has no RGBA equivalent
    UnsupportedColorspace(ColorSpace),
    /// Samples are neither 8 nor 16 bit integers
    UnsupportedDepth(BitDepth),
    /// The format cannot be decoded or encoded as a raster
    UnsupportedFormat(ImageFormat)
}

impl Debug for CodecErrors {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Static(err) => write!(f, "{err}"),
            Self::Generic(err) => write!(f, "{err}"),
            Self::UnsupportedColorspace(colorspace) => {
                write!(f, "Unsupported colorspace {colorspace:?}")
            }
            Self::UnsupportedDepth(depth) => write!(f, "Unsupported bit depth {depth:?}"),
            Self::UnsupportedFormat(format) => {
                write!(f, "No raster codec for {format:?}")
            }
        }
    }
}

/// All formats the library knows about
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ImageFormat {
    /// Farbfeld, 16 bit RGBA
    Farbfeld,
    /// Portable Pixmap family, PAM included
    PPM,
    /// Portable Network Graphics
    PNG,
    /// The compact text format
    Compact,
    /// Any unknown format
    Unknown
}

impl ImageFormat {
    /// Guess the format of `data` from its first bytes
    pub fn guess_format(data: &[u8]) -> ImageFormat {
        match data {
            [b'f', b'a', b'r', b'b', b'f', b'e', b'l', b'd', ..] => ImageFormat::Farbfeld,
            [137, 80, 78, 71, 13, 10, 26, 10, ..] => ImageFormat::PNG,
            [b'P', b'5' | b'6' | b'7', ..] => ImageFormat::PPM,
            [first, ..] if first.is_ascii_digit() => ImageFormat::Compact,
            _ => ImageFormat::Unknown
        }
    }

    /// Pick a format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> ImageFormat {
        match path.as_ref().extension().and_then(OsStr::to_str) {
            Some("ff" | "farbfeld") => ImageFormat::Farbfeld,
            Some("pam" | "ppm" | "pgm" | "pnm") => ImageFormat::PPM,
            Some("png") => ImageFormat::PNG,
            Some("compact") => ImageFormat::Compact,
            _ => ImageFormat::Unknown
        }
    }

    /// Return true if grids can be loaded from this format
    pub fn has_decoder(self) -> bool {
        self.decoder(DecoderOptions::default()).is_ok()
    }

    /// Return true if grids can be rendered to this format
    pub fn has_encoder(self) -> bool {
        self.encoder().is_ok()
    }

    /// Return a decoder loading grids from this format
    pub fn decoder(self, options: DecoderOptions) -> Result<Box<dyn DecoderTrait>, CompactErrors> {
        match self {
            ImageFormat::Farbfeld => Ok(Box::new(farbfeld::FarbfeldDecoder::new(options))),
            ImageFormat::PPM => Ok(Box::new(ppm::PpmDecoder::new(options))),
            ImageFormat::PNG => Ok(Box::new(png::PngDecoder::new(options))),
            _ => Err(CodecErrors::UnsupportedFormat(self).into())
        }
    }

    /// Return an encoder rendering grids to this format
    ///
    /// PPM output is 8 bit, see [`ppm::PpmEncoder`] for 16 bit output
    pub fn encoder(self) -> Result<Box<dyn EncoderTrait>, CompactErrors> {
        match self {
            ImageFormat::Farbfeld => Ok(Box::new(farbfeld::FarbfeldEncoder::new())),
            ImageFormat::PPM => Ok(Box::new(ppm::PpmEncoder::new(BitDepth::Eight))),
            ImageFormat::PNG => Ok(Box::new(png::PngEncoder::new())),
            _ => Err(CodecErrors::UnsupportedFormat(self).into())
        }
    }
}

impl Display for ImageFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

/// Carry our decoding limits over to the zune decoders
pub(crate) fn zune_options(options: DecoderOptions) -> zune_core::options::DecoderOptions {
    zune_core::options::DecoderOptions::default()
        .set_max_width(options.max_width())
        .set_max_height(options.max_height())
}

/// Options describing `grid` rendered as RGBA at `depth`
pub(crate) fn encoder_options(grid: &PixelGrid, depth: BitDepth) -> EncoderOptions {
    let (width, height) = grid.dimensions();

    EncoderOptions::default()
        .set_width(width)
        .set_height(height)
        .set_depth(depth)
        .set_colorspace(ColorSpace::RGBA)
}

/// Build a grid from row-major pixels handed out by a zune decoder
///
/// 8 bit samples are widened, images without alpha come out opaque and
/// grayscale is replicated across the color channels.
pub(crate) fn grid_from_decoded(
    pixels: DecodingResult, width: usize, height: usize, colorspace: ColorSpace
) -> Result<PixelGrid, CompactErrors> {
    let samples: Vec<u16> = match pixels {
        DecodingResult::U8(data) => data.into_iter().map(u8_to_u16).collect(),
        DecodingResult::U16(data) => data,
        _ => return Err(CodecErrors::Static("Floating point images are not supported").into())
    };
    let rgba = expand_to_rgba(samples, colorspace)?;

    Ok(PixelGrid::from_u16(&rgba, width, height)?)
}

fn expand_to_rgba(samples: Vec<u16>, colorspace: ColorSpace) -> Result<Vec<u16>, CodecErrors> {
    if colorspace == ColorSpace::RGBA {
        return Ok(samples);
    }
    let pixels = samples.len() / colorspace.num_components().max(1);
    let mut out = Vec::with_capacity(pixels * MAX_CHANNELS);

    match colorspace {
        ColorSpace::RGB => {
            for pix in samples.chunks_exact(3) {
                out.extend_from_slice(&[pix[0], pix[1], pix[2], u16::MAX]);
            }
        }
        ColorSpace::LumaA => {
            for pix in samples.chunks_exact(2) {
                out.extend_from_slice(&[pix[0], pix[0], pix[0], pix[1]]);
            }
        }
        ColorSpace::Luma => {
            for luma in samples {
                out.extend_from_slice(&[luma, luma, luma, u16::MAX]);
            }
        }
        other => return Err(CodecErrors::UnsupportedColorspace(other))
    }
    Ok(out)
}
