/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Portable Network Graphics support through `zune-png`
//!
//! Rendering is done at 8 bits, every sample keeps its high byte.
//! Any PNG `zune-png` understands can be loaded, 16 bit ones losslessly.
use compact_codec::DecoderOptions;
use compact_image::PixelGrid;
use log::info;
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;

use crate::codecs::{encoder_options, grid_from_decoded, zune_options, CodecErrors, ImageFormat};
use crate::errors::CompactErrors;
use crate::traits::{DecoderTrait, EncoderTrait};

/// A PNG decoder
pub struct PngDecoder {
    options: DecoderOptions
}

impl PngDecoder {
    pub fn new(options: DecoderOptions) -> PngDecoder {
        PngDecoder { options }
    }
}

impl DecoderTrait for PngDecoder {
    fn name(&self) -> &'static str {
        "png-decoder"
    }

    fn decode_source(&mut self, data: &[u8]) -> Result<PixelGrid, CompactErrors> {
        let mut decoder =
            zune_png::PngDecoder::new_with_options(ZCursor::new(data), zune_options(self.options));

        let pixels = decoder
            .decode()
            .map_err(|e| CodecErrors::Generic(format!("png: {e:?}")))?;

        let (width, height) = decoder
            .dimensions()
            .ok_or(CodecErrors::Static("png: no dimensions after decoding"))?;
        let colorspace = decoder
            .colorspace()
            .ok_or(CodecErrors::Static("png: no colorspace after decoding"))?;

        info!("Decoded {width}x{height} {colorspace:?} png image");

        grid_from_decoded(pixels, width, height, colorspace)
    }
}

/// An 8 bit RGBA PNG encoder
#[derive(Copy, Clone, Debug, Default)]
pub struct PngEncoder;

impl PngEncoder {
    pub fn new() -> PngEncoder {
        PngEncoder
    }
}

impl EncoderTrait for PngEncoder {
    fn name(&self) -> &'static str {
        "png-encoder"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::PNG
    }

    fn encode_target(&mut self, grid: &PixelGrid) -> Result<Vec<u8>, CompactErrors> {
        let options = encoder_options(grid, BitDepth::Eight);
        let data = grid.flatten_to_u8();

        let mut out = Vec::new();

        zune_png::PngEncoder::new(&data, options)
            .encode(&mut out)
            .map_err(|e| CodecErrors::Generic(format!("png: {e:?}")))?;

        Ok(out)
    }
}
