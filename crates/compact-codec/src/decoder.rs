/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use compact_image::{PixelGrid, Rgba16, MAX_CHANNELS};
use log::{info, trace};

use crate::errors::CompactDecodeErrors;
use crate::options::DecoderOptions;
use crate::{CHANNEL_DELIMITER, LINE_DELIMITER, SAMPLE_DELIMITER};

/// A compact format decoder
///
/// Width and height are not stored in the file, they are inferred from
/// the number of non-empty lines and the number of samples in the first one.
pub struct CompactDecoder<'a> {
    data:    &'a [u8],
    width:   usize,
    height:  usize,
    decoded: bool,
    options: DecoderOptions
}

impl<'a> CompactDecoder<'a> {
    /// Create a new decoder with default options
    ///
    /// # Example
    /// ```
    /// use compact_codec::CompactDecoder;
    /// let mut decoder = CompactDecoder::new(b"NOT VALID COMPACT");
    ///
    /// assert!(decoder.decode().is_err());
    /// ```
    pub fn new(data: &'a [u8]) -> CompactDecoder<'a> {
        CompactDecoder::new_with_options(DecoderOptions::default(), data)
    }

    /// Create a new decoder with the specified options
    pub fn new_with_options(options: DecoderOptions, data: &'a [u8]) -> CompactDecoder<'a> {
        CompactDecoder {
            data,
            width: 0,
            height: 0,
            decoded: false,
            options
        }
    }

    /// Decode the data into a grid
    ///
    /// # Errors
    /// - [`CompactDecodeErrors::EmptyEncoding`] if there is no line to decode
    /// - [`CompactDecodeErrors::MalformedEncoding`] naming the offending line,
    ///   and sample where applicable, for any structural or numeric error
    /// - [`CompactDecodeErrors::TooLargeDimensions`] if the grid exceeds the
    ///   configured limits
    pub fn decode(&mut self) -> Result<PixelGrid, CompactDecodeErrors> {
        let body = strip_trailing_newlines(self.data);

        if body.is_empty() {
            return Err(CompactDecodeErrors::EmptyEncoding);
        }
        let mut pixels = Vec::new();
        let mut height = None;
        let mut width = 0;

        for (pos, line) in body.split(|x| *x == LINE_DELIMITER).enumerate() {
            // positions count physical lines, blank ones included
            let line_no = pos + 1;

            if line.is_empty() {
                trace!("Skipping empty line {line_no}");
                continue;
            }
            if width + 1 > self.options.max_width() {
                return Err(CompactDecodeErrors::TooLargeDimensions(
                    self.options.max_width(),
                    width + 1
                ));
            }
            let start = pixels.len();

            for (sample_pos, sample) in line.split(|x| *x == SAMPLE_DELIMITER).enumerate() {
                pixels.push(parse_sample(sample, line_no, sample_pos + 1)?);

                let count = pixels.len() - start;

                if height.is_none() && count > self.options.max_height() {
                    return Err(CompactDecodeErrors::TooLargeDimensions(
                        self.options.max_height(),
                        count
                    ));
                }
            }
            let count = pixels.len() - start;

            match height {
                None => height = Some(count),
                Some(expected) if expected != count => {
                    let msg =
                        format!("expected {expected} samples as in the first line, found {count}");
                    return Err(CompactDecodeErrors::malformed(line_no, None, msg));
                }
                Some(_) => ()
            }
            trace!("Decoded line {line_no} with {count} samples");
            width += 1;
        }
        let height = height.unwrap_or(0);

        info!("Image width: {}", width);
        info!("Image height: {}", height);

        let grid = PixelGrid::from_pixels(width, height, pixels)?;

        self.width = width;
        self.height = height;
        self.decoded = true;

        Ok(grid)
    }

    /// Return the width and height of the image, once decoded
    pub const fn dimensions(&self) -> Option<(usize, usize)> {
        if self.decoded {
            return Some((self.width, self.height));
        }
        None
    }
}

fn strip_trailing_newlines(data: &[u8]) -> &[u8] {
    let mut end = data.len();

    while end > 0 && data[end - 1] == LINE_DELIMITER {
        end -= 1;
    }
    &data[..end]
}

fn parse_sample(
    sample: &[u8], line: usize, sample_no: usize
) -> Result<Rgba16, CompactDecodeErrors> {
    let mut pixel = [0; MAX_CHANNELS];
    let mut channels = 0;

    for token in sample.split(|x| *x == CHANNEL_DELIMITER) {
        if channels < MAX_CHANNELS {
            pixel[channels] = parse_channel(token)
                .map_err(|msg| CompactDecodeErrors::malformed(line, Some(sample_no), msg))?;
        }
        channels += 1;
    }
    if channels != MAX_CHANNELS {
        let msg = format!("expected {MAX_CHANNELS} channels, found {channels}");
        return Err(CompactDecodeErrors::malformed(line, Some(sample_no), msg));
    }
    Ok(pixel)
}

fn parse_channel(token: &[u8]) -> Result<u16, String> {
    if token.is_empty() {
        return Err("empty channel value".to_string());
    }
    let mut value: u32 = 0;

    for byte in token {
        if !byte.is_ascii_digit() {
            return Err(format!(
                "invalid channel value `{}`",
                String::from_utf8_lossy(token)
            ));
        }
        value = value * 10 + u32::from(byte - b'0');

        if value > u32::from(u16::MAX) {
            return Err(format!(
                "channel value `{}` is larger than {}",
                String::from_utf8_lossy(token),
                u16::MAX
            ));
        }
    }
    Ok(value as u16)
}
