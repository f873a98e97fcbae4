/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

/// Options influencing how compact files are decoded
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DecoderOptions {
    max_width:  usize,
    max_height: usize
}

impl DecoderOptions {
    /// Options suited for command line use, no dimension limits
    pub fn new_cmd() -> DecoderOptions {
        DecoderOptions {
            max_width:  usize::MAX,
            max_height: usize::MAX
        }
    }
    /// Set the maximum number of lines (grid width) accepted
    #[must_use]
    pub fn set_max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }
    /// Set the maximum number of samples per line (grid height) accepted
    #[must_use]
    pub fn set_max_height(mut self, height: usize) -> Self {
        self.max_height = height;
        self
    }
    pub const fn max_width(&self) -> usize {
        self.max_width
    }
    pub const fn max_height(&self) -> usize {
        self.max_height
    }
}

impl Default for DecoderOptions {
    fn default() -> Self {
        Self {
            max_height: 1 << 17,
            max_width:  1 << 17
        }
    }
}
