/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use compact_codec::DecoderOptions;

use crate::compressor::CompressionMode;
use crate::optimizer::Medium;

/// Options shared by every stage of a pipeline run
#[derive(Copy, Clone, Debug, Default)]
pub struct PipelineOptions {
    mode:            CompressionMode,
    medium:          Medium,
    optimize:        bool,
    decoder_options: DecoderOptions
}

impl PipelineOptions {
    /// Set the compression mode used to compress and decompress
    #[must_use]
    pub fn set_mode(mut self, mode: CompressionMode) -> Self {
        self.mode = mode;
        self
    }
    /// Set the medium grids are optimized for
    #[must_use]
    pub fn set_medium(mut self, medium: Medium) -> Self {
        self.medium = medium;
        self
    }
    /// Whether grids are optimized before being compressed
    #[must_use]
    pub fn set_optimize(mut self, optimize: bool) -> Self {
        self.optimize = optimize;
        self
    }
    /// Limits used when decoding compact files or source images
    #[must_use]
    pub fn set_decoder_options(mut self, options: DecoderOptions) -> Self {
        self.decoder_options = options;
        self
    }
    pub const fn mode(&self) -> CompressionMode {
        self.mode
    }
    pub const fn medium(&self) -> Medium {
        self.medium
    }
    pub const fn optimize(&self) -> bool {
        self.optimize
    }
    pub const fn decoder_options(&self) -> DecoderOptions {
        self.decoder_options
    }
}
