/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Portable Pixmap support through `zune-ppm`
//!
//! Grids are written as PAM (`P7`, `RGB_ALPHA`), anything `zune-ppm`
//! reads can be loaded. Images without alpha are loaded as fully opaque.
use compact_codec::DecoderOptions;
use compact_image::PixelGrid;
use log::info;
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;
use zune_ppm::PPMDecoder;

use crate::codecs::{encoder_options, grid_from_decoded, zune_options, CodecErrors, ImageFormat};
use crate::errors::CompactErrors;
use crate::traits::{DecoderTrait, EncoderTrait};

/// A PPM encoder writing at a fixed depth
#[derive(Copy, Clone, Debug)]
pub struct PpmEncoder {
    depth: BitDepth
}

impl PpmEncoder {
    /// Create an encoder writing `depth` samples
    ///
    /// Only [`BitDepth::Eight`] and [`BitDepth::Sixteen`] can be encoded
    pub fn new(depth: BitDepth) -> PpmEncoder {
        PpmEncoder { depth }
    }
}

impl EncoderTrait for PpmEncoder {
    fn name(&self) -> &'static str {
        "ppm-encoder"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::PPM
    }

    fn encode_target(&mut self, grid: &PixelGrid) -> Result<Vec<u8>, CompactErrors> {
        let options = encoder_options(grid, self.depth);

        let data = match self.depth {
            BitDepth::Eight => grid.flatten_to_u8(),
            // native endian, the encoder swaps to big endian
            BitDepth::Sixteen => bytemuck::cast_slice::<u16, u8>(&grid.flatten_to_u16()).to_vec(),
            depth => return Err(CodecErrors::UnsupportedDepth(depth).into())
        };
        let mut out = Vec::new();

        zune_ppm::PPMEncoder::new(&data, options)
            .encode(&mut out)
            .map_err(|e| CodecErrors::Generic(format!("ppm: {e:?}")))?;

        Ok(out)
    }
}

/// A PPM decoder
pub struct PpmDecoder {
    options: DecoderOptions
}

impl PpmDecoder {
    pub fn new(options: DecoderOptions) -> PpmDecoder {
        PpmDecoder { options }
    }
}

impl DecoderTrait for PpmDecoder {
    fn name(&self) -> &'static str {
        "ppm-decoder"
    }

    fn decode_source(&mut self, data: &[u8]) -> Result<PixelGrid, CompactErrors> {
        let mut decoder =
            PPMDecoder::new_with_options(ZCursor::new(data), zune_options(self.options));

        let pixels = decoder
            .decode()
            .map_err(|e| CodecErrors::Generic(format!("ppm: {e:?}")))?;

        let (width, height) = decoder
            .dimensions()
            .ok_or(CodecErrors::Static("ppm: no dimensions after decoding"))?;
        let colorspace = decoder
            .colorspace()
            .ok_or(CodecErrors::Static("ppm: no colorspace after decoding"))?;

        info!("Decoded {width}x{height} {colorspace:?} ppm image");

        grid_from_decoded(pixels, width, height, colorspace)
    }
}
