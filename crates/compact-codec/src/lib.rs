/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! The compact format is a human inspectable text encoding of a pixel grid:
//! ```text
//! ╔══════════╤════════════════════════════════════════════════════════╗
//! ║ Item     │ Description                                            ║
//! ╠══════════╪════════════════════════════════════════════════════════╣
//! ║ <line>   │ <sample>("," <sample>)* followed by "\n"               ║
//! ╟──────────┼────────────────────────────────────────────────────────╢
//! ║ <sample> │ <R>"|"<G>"|"<B>"|"<A>, decimal integers in 0..=65535   ║
//! ╚══════════╧════════════════════════════════════════════════════════╝
//!```
//! One line is written per grid column (fixed x, y going from `0` to `height-1`),
//! lines are ordered by increasing x.
//!
//! There is no header, the width is the number of lines and the height is the
//! number of samples in the first line. A trailing newline is permitted.
//!
//! # Example
//! ```
//! use compact_codec::{CompactDecoder, CompactEncoder};
//! use compact_image::PixelGrid;
//!
//! let grid = PixelGrid::fill([1, 2, 3, 4], 2, 1);
//! let text = CompactEncoder::new(&grid).encode_to_string().unwrap();
//! assert_eq!(text, "1|2|3|4\n1|2|3|4\n");
//!
//! let decoded = CompactDecoder::new(text.as_bytes()).decode().unwrap();
//! assert_eq!(decoded, grid);
//! ```
#![forbid(unsafe_code)]

pub use decoder::*;
pub use encoder::*;
pub use errors::*;
pub use options::DecoderOptions;

mod decoder;
mod encoder;
mod errors;
mod options;

/// Separates the four channels of a sample
pub const CHANNEL_DELIMITER: u8 = b'|';
/// Separates samples in a line
pub const SAMPLE_DELIMITER: u8 = b',';
/// Terminates a line
pub const LINE_DELIMITER: u8 = b'\n';
