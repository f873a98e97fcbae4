/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! A forward pipeline run broken into stages
//!
//! The workflow advance is as follows
//!
//! 1. Decode the source bytes into a grid (skipped if a grid was given)
//! 2. Optimize the grid, if an optimizer was added
//! 3. Compress the grid and persist it, if a destination was set
//! 4. Finish
//!
//! A failing stage stops the workflow, the error is returned unchanged.
use std::path::{Path, PathBuf};
use std::time::Instant;

use compact_image::PixelGrid;
use log::{info, trace};

use crate::compressor::CompressionMode;
use crate::errors::CompactErrors;
use crate::optimizer::MediaOptimizer;
use crate::options::PipelineOptions;
use crate::persist;
use crate::traits::{CompressionStrategy, DecoderTrait, OptimizerTrait};

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum WorkFlowState {
    Initialized,
    Decode,
    Optimize,
    Compress,
    Finished
}

impl WorkFlowState {
    fn next(self) -> Option<Self> {
        match self {
            WorkFlowState::Initialized => Some(WorkFlowState::Decode),
            WorkFlowState::Decode => Some(WorkFlowState::Optimize),
            WorkFlowState::Optimize => Some(WorkFlowState::Compress),
            WorkFlowState::Compress => Some(WorkFlowState::Finished),
            WorkFlowState::Finished => None
        }
    }
}

pub struct WorkFlow<'a> {
    buf:         Option<&'a [u8]>,
    state:       Option<WorkFlowState>,
    decoder:     Option<Box<dyn DecoderTrait>>,
    optimizer:   Option<Box<dyn OptimizerTrait>>,
    strategy:    Box<dyn CompressionStrategy>,
    destination: Option<PathBuf>,
    grid:        Option<PixelGrid>
}

impl<'a> WorkFlow<'a> {
    /// Create a new workflow compressing with the simple strategy
    /// and no optimizer
    #[allow(clippy::new_without_default)]
    pub fn new() -> WorkFlow<'a> {
        WorkFlow {
            buf:         None,
            state:       Some(WorkFlowState::Initialized),
            decoder:     None,
            optimizer:   None,
            strategy:    CompressionMode::Simple.strategy(),
            destination: None,
            grid:        None
        }
    }

    /// Create a workflow configured from `options`
    pub fn new_with_options(options: PipelineOptions) -> WorkFlow<'a> {
        let mut workflow = WorkFlow::new();

        workflow.set_strategy(options.mode().strategy());

        if options.optimize() {
            workflow.add_optimizer(Box::new(MediaOptimizer::new(options.medium())));
        }
        workflow
    }

    /// Add the decoder turning the buffer into a grid
    pub fn add_decoder(&mut self, decoder: Box<dyn DecoderTrait>) {
        self.decoder = Some(decoder);
    }

    pub fn add_buffer(&mut self, buffer: &'a [u8]) {
        self.buf = Some(buffer);
    }

    /// Start from an already decoded grid, the decode stage is skipped
    pub fn add_grid(&mut self, grid: PixelGrid) {
        self.grid = Some(grid);
    }

    pub fn add_optimizer(&mut self, optimizer: Box<dyn OptimizerTrait>) {
        self.optimizer = Some(optimizer);
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn CompressionStrategy>) {
        self.strategy = strategy;
    }

    /// Set where the compact file is written
    pub fn set_destination<P: AsRef<Path>>(&mut self, path: P) {
        self.destination = Some(path.as_ref().to_path_buf());
    }

    pub fn chain_decoder(&mut self, decoder: Box<dyn DecoderTrait>) -> &mut WorkFlow<'a> {
        self.add_decoder(decoder);
        self
    }

    pub fn chain_optimizer(&mut self, optimizer: Box<dyn OptimizerTrait>) -> &mut WorkFlow<'a> {
        self.add_optimizer(optimizer);
        self
    }

    pub fn get_image(&self) -> Option<&PixelGrid> {
        self.grid.as_ref()
    }

    /// Return true once every stage ran
    pub fn is_finished(&self) -> bool {
        self.state.is_none()
    }

    /// Advance the workflow one state forward
    pub fn advance(&mut self) -> Result<(), CompactErrors> {
        let Some(state) = self.state else {
            return Ok(());
        };
        trace!("Current state: {:?}", state);

        match state {
            WorkFlowState::Decode => {
                if self.grid.is_none() {
                    let start = Instant::now();

                    let decoder = self
                        .decoder
                        .as_mut()
                        .ok_or(CompactErrors::NoImageForOperations)?;
                    let buf = self.buf.ok_or(CompactErrors::NoImageBuffer)?;

                    info!("Decoding with {}", decoder.name());

                    self.grid = Some(decoder.decode_source(buf)?);

                    info!("Finished decoding in {} ms", start.elapsed().as_millis());
                }
            }
            WorkFlowState::Optimize => {
                if let Some(optimizer) = &self.optimizer {
                    let grid = self.grid.as_ref().ok_or(CompactErrors::NoImageForOperations)?;
                    let start = Instant::now();

                    let optimized = optimizer.optimize(grid)?;
                    self.grid = Some(optimized);

                    info!(
                        "Finished optimizing for `{}` in {} ms",
                        optimizer.name(),
                        start.elapsed().as_millis()
                    );
                }
            }
            WorkFlowState::Compress => {
                let grid = self.grid.as_ref().ok_or(CompactErrors::NoImageForOperations)?;
                let start = Instant::now();

                let encoding = self.strategy.compress(grid)?;

                if let Some(destination) = &self.destination {
                    persist::write_compact(&encoding, destination)?;
                }
                info!(
                    "Finished `{}` compression in {} ms",
                    self.strategy.mode(),
                    start.elapsed().as_millis()
                );
            }
            WorkFlowState::Finished => {
                info!("Finished operations for this workflow");
            }
            WorkFlowState::Initialized => ()
        }
        self.state = state.next();

        Ok(())
    }

    /// Advance the workflow up until it finishes
    pub fn advance_to_end(&mut self) -> Result<(), CompactErrors> {
        while self.state.is_some() {
            self.advance()?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use compact_image::PixelGrid;

    use crate::codecs::farbfeld::{FarbfeldDecoder, FarbfeldEncoder};
    use crate::errors::CompactErrors;
    use crate::optimizer::{MediaOptimizer, Medium};
    use crate::traits::EncoderTrait;
    use crate::workflow::WorkFlow;

    #[test]
    fn test_decode_and_optimize() {
        let grid = PixelGrid::fill([7, 8, 9, 10], 3, 4);
        let bytes = FarbfeldEncoder::new().encode_target(&grid).unwrap();

        let mut workflow = WorkFlow::new();
        workflow
            .chain_decoder(Box::new(FarbfeldDecoder::new(Default::default())))
            .chain_optimizer(Box::new(MediaOptimizer::new(Medium::Mobile)));
        workflow.add_buffer(&bytes);

        workflow.advance_to_end().unwrap();

        assert!(workflow.is_finished());
        assert_eq!(workflow.get_image(), Some(&grid));
    }

    #[test]
    fn test_missing_decoder() {
        let mut workflow = WorkFlow::new();

        assert!(matches!(
            workflow.advance_to_end(),
            Err(CompactErrors::NoImageForOperations)
        ));
        assert!(!workflow.is_finished());
    }

    #[test]
    fn test_missing_buffer() {
        let mut workflow = WorkFlow::new();
        workflow.add_decoder(Box::new(FarbfeldDecoder::new(Default::default())));

        assert!(matches!(
            workflow.advance_to_end(),
            Err(CompactErrors::NoImageBuffer)
        ));
    }

    #[test]
    fn test_decode_failure_stops() {
        let mut workflow = WorkFlow::new();
        workflow.add_decoder(Box::new(FarbfeldDecoder::new(Default::default())));
        workflow.add_buffer(b"not farbfeld");

        assert!(matches!(
            workflow.advance_to_end(),
            Err(CompactErrors::CodecErrors(_))
        ));
        assert!(workflow.get_image().is_none());
    }
}
