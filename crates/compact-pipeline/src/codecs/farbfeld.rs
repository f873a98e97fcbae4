/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Farbfeld support through `zune-farbfeld`
//!
//! Farbfeld samples are 16 bit RGBA, they map one to one onto grid samples.
use compact_codec::DecoderOptions;
use compact_image::PixelGrid;
use log::info;
use zune_core::bit_depth::BitDepth;
use zune_core::bytestream::ZCursor;

use crate::codecs::{encoder_options, zune_options, CodecErrors, ImageFormat};
use crate::errors::CompactErrors;
use crate::traits::{DecoderTrait, EncoderTrait};

/// A Farbfeld decoder
pub struct FarbfeldDecoder {
    options: DecoderOptions
}

impl FarbfeldDecoder {
    pub fn new(options: DecoderOptions) -> FarbfeldDecoder {
        FarbfeldDecoder { options }
    }
}

impl DecoderTrait for FarbfeldDecoder {
    fn name(&self) -> &'static str {
        "farbfeld-decoder"
    }

    fn decode_source(&mut self, data: &[u8]) -> Result<PixelGrid, CompactErrors> {
        let mut decoder = zune_farbfeld::FarbFeldDecoder::new_with_options(
            ZCursor::new(data),
            zune_options(self.options)
        );
        let pixels = decoder
            .decode()
            .map_err(|e| CodecErrors::Generic(format!("farbfeld: {e:?}")))?;

        let (width, height) = decoder
            .dimensions()
            .ok_or(CodecErrors::Static("farbfeld: no dimensions after decoding"))?;

        info!("Decoded {width}x{height} farbfeld image");

        Ok(PixelGrid::from_u16(&pixels, width, height)?)
    }
}

/// A Farbfeld encoder
#[derive(Copy, Clone, Debug, Default)]
pub struct FarbfeldEncoder;

impl FarbfeldEncoder {
    pub fn new() -> FarbfeldEncoder {
        FarbfeldEncoder
    }
}

impl EncoderTrait for FarbfeldEncoder {
    fn name(&self) -> &'static str {
        "farbfeld-encoder"
    }

    fn format(&self) -> ImageFormat {
        ImageFormat::Farbfeld
    }

    fn encode_target(&mut self, grid: &PixelGrid) -> Result<Vec<u8>, CompactErrors> {
        let options = encoder_options(grid, BitDepth::Sixteen);
        // the encoder expects native endian samples
        let samples = grid.flatten_to_u16();
        let data: &[u8] = bytemuck::cast_slice(&samples);

        let mut out = Vec::new();

        zune_farbfeld::FarbFeldEncoder::new(data, options)
            .encode(&mut out)
            .map_err(|e| CodecErrors::Generic(format!("farbfeld: {e:?}")))?;

        Ok(out)
    }
}
