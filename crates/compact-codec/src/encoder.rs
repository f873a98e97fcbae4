/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Encoding support for the compact format
use std::io;
use std::io::Write;

use compact_image::{PixelGrid, Rgba16};
use log::{debug, info};

use crate::errors::CompactEncodeErrors;
use crate::{CHANNEL_DELIMITER, LINE_DELIMITER, SAMPLE_DELIMITER};

/// Longest rendering of a single sample, `65535|65535|65535|65535,`
const MAX_SAMPLE_LENGTH: usize = 4 * 6;

/// A compact format encoder
///
/// The encoder reads the grid one column at a time through a
/// [`RowStreamReader`](compact_image::RowStreamReader) and writes each line
/// as soon as it is rendered, so at most one line is held in memory
/// besides the grid itself.
///
/// # Example
/// ```
/// use compact_codec::CompactEncoder;
/// use compact_image::PixelGrid;
///
/// let grid = PixelGrid::from_pixels(1, 2, vec![[0, 1, 2, 3], [256, 255, 254, 253]]).unwrap();
///
/// let mut out = vec![];
/// CompactEncoder::new(&grid).encode(&mut out).unwrap();
/// assert_eq!(out, b"0|1|2|3,256|255|254|253\n");
/// ```
pub struct CompactEncoder<'a> {
    grid: &'a PixelGrid
}

impl<'a> CompactEncoder<'a> {
    /// Create a new encoder which will encode `grid`
    pub fn new(grid: &'a PixelGrid) -> CompactEncoder<'a> {
        CompactEncoder { grid }
    }

    /// Encode the grid into `sink`, returning the number of bytes written
    ///
    /// # Errors
    /// - [`CompactEncodeErrors::EmptyImage`] if the grid has no pixels
    /// - [`CompactEncodeErrors::IoErrors`] if writing to the sink fails
    pub fn encode<W: Write>(&self, mut sink: W) -> Result<usize, CompactEncodeErrors> {
        self.check_not_empty()?;

        let height = self.grid.height();
        let mut reader = self.grid.reader();
        // reused for every line, cleared before each batch
        let mut line = Vec::with_capacity(height * MAX_SAMPLE_LENGTH);
        let mut written = 0;
        let mut lines = 0;

        loop {
            let (batch, done) = reader.read_batch(height);

            if !batch.is_empty() {
                line.clear();
                scompact(batch, &mut line);
                sink.write_all(&line)?;

                written += line.len();
                lines += 1;
            }
            if done {
                break;
            }
        }
        sink.flush()?;

        info!("Number of pixels read: {}", lines * height);
        debug!("Wrote {lines} lines, {written} bytes");

        Ok(written)
    }

    /// Encode the grid into a newly allocated vector
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, CompactEncodeErrors> {
        let mut out = Vec::new();
        self.encode(&mut out)?;
        Ok(out)
    }

    /// Encode the grid into a string
    pub fn encode_to_string(&self) -> Result<String, CompactEncodeErrors> {
        into_string(self.encode_to_vec()?)
    }

    /// Render every column of the grid into one buffer without going
    /// through the reader
    ///
    /// Memory grows with the whole image, prefer [`encode`](Self::encode)
    /// for anything but small grids. Output is byte identical.
    pub fn encode_all_at_once(&self) -> Result<String, CompactEncodeErrors> {
        self.check_not_empty()?;

        let mut out = Vec::with_capacity(self.grid.pixels().len() * MAX_SAMPLE_LENGTH);

        for column in self.grid.pixels().chunks_exact(self.grid.height()) {
            scompact(column, &mut out);
        }
        into_string(out)
    }

    fn check_not_empty(&self) -> Result<(), CompactEncodeErrors> {
        if self.grid.is_empty() {
            let (width, height) = self.grid.dimensions();
            return Err(CompactEncodeErrors::EmptyImage(width, height));
        }
        Ok(())
    }
}

/// Render one line of samples into `out`, terminating newline included
pub fn scompact(samples: &[Rgba16], out: &mut Vec<u8>) {
    for (i, pixel) in samples.iter().enumerate() {
        if i != 0 {
            out.push(SAMPLE_DELIMITER);
        }
        for (c, channel) in pixel.iter().enumerate() {
            if c != 0 {
                out.push(CHANNEL_DELIMITER);
            }
            push_decimal(*channel, out);
        }
    }
    out.push(LINE_DELIMITER);
}

fn push_decimal(mut value: u16, out: &mut Vec<u8>) {
    let mut digits = [0_u8; 5];
    let mut pos = digits.len();

    loop {
        pos -= 1;
        digits[pos] = b'0' + (value % 10) as u8;
        value /= 10;

        if value == 0 {
            break;
        }
    }
    out.extend_from_slice(&digits[pos..]);
}

fn into_string(bytes: Vec<u8>) -> Result<String, CompactEncodeErrors> {
    String::from_utf8(bytes)
        .map_err(|e| CompactEncodeErrors::IoErrors(io::Error::new(io::ErrorKind::InvalidData, e)))
}
