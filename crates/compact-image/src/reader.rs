/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Batched reading of grid pixels
//!
//! The reader walks a grid in its canonical traversal order, x outer and
//! y inner, handing out bounded batches of pixels. Because grids are
//! stored in that same order a batch is a borrowed slice of the grid,
//! nothing is copied.
use log::trace;

use crate::grid::{PixelGrid, Rgba16};

/// A cursor over a [`PixelGrid`]
///
/// There is no indication of where a column ends or starts in a batch,
/// callers wanting one column per batch request `height` pixels at a time.
pub struct RowStreamReader<'a> {
    grid: &'a PixelGrid,
    x:    usize,
    y:    usize
}

impl<'a> RowStreamReader<'a> {
    /// Create a new reader positioned at `(0,0)`
    pub fn new(grid: &'a PixelGrid) -> RowStreamReader<'a> {
        // a grid without rows can never advance x by walking y
        let x = if grid.height() == 0 { grid.width() } else { 0 };

        RowStreamReader { grid, x, y: 0 }
    }

    /// Read up to `max_count` pixels
    ///
    /// # Returns
    /// - The pixels read, possibly fewer than `max_count` (or none) when
    ///   the end of the grid was hit
    /// - `true` if the reader is exhausted, subsequent calls will return
    ///   an empty batch and `true`
    pub fn read_batch(&mut self, max_count: usize) -> (&'a [Rgba16], bool) {
        if self.is_done() {
            return (&[], true);
        }
        let pixels: &'a [Rgba16] = self.grid.pixels();
        let height = self.grid.height();

        let start = self.x * height + self.y;
        let end = start + max_count.min(pixels.len() - start);

        self.x = end / height;
        self.y = end % height;

        trace!("Read pixels {start}..{end}, cursor at ({},{})", self.x, self.y);

        (&pixels[start..end], self.is_done())
    }

    /// Current cursor position as `(x,y)`
    pub const fn cursor(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Number of pixels not yet handed out
    pub fn remaining(&self) -> usize {
        if self.is_done() {
            return 0;
        }
        self.grid.pixels().len() - (self.x * self.grid.height() + self.y)
    }

    /// Return true once the cursor moved past the last column
    pub fn is_done(&self) -> bool {
        self.x >= self.grid.width()
    }
}

#[cfg(test)]
mod tests {
    use nanorand::Rng;

    use crate::grid::PixelGrid;
    use crate::reader::RowStreamReader;

    fn numbered(width: usize, height: usize) -> PixelGrid {
        let pixels = (0..width * height)
            .map(|i| [i as u16, 0, 0, u16::MAX])
            .collect();
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_batch_of_height_is_one_column() {
        let grid = numbered(3, 2);
        let mut reader = RowStreamReader::new(&grid);

        let (batch, done) = reader.read_batch(2);
        assert_eq!(batch, grid.column(0).unwrap());
        assert!(!done);
        assert_eq!(reader.cursor(), (1, 0));

        let (batch, done) = reader.read_batch(2);
        assert_eq!(batch, grid.column(1).unwrap());
        assert!(!done);

        // the last full batch also reports exhaustion
        let (batch, done) = reader.read_batch(2);
        assert_eq!(batch, grid.column(2).unwrap());
        assert!(done);

        let (batch, done) = reader.read_batch(2);
        assert!(batch.is_empty());
        assert!(done);
    }

    #[test]
    fn test_partial_batch_at_end() {
        let grid = numbered(2, 3);
        let mut reader = grid.reader();

        let (batch, done) = reader.read_batch(4);
        assert_eq!(batch.len(), 4);
        assert!(!done);
        assert_eq!(reader.cursor(), (1, 1));
        assert_eq!(reader.remaining(), 2);

        let (batch, done) = reader.read_batch(4);
        assert_eq!(batch.iter().map(|p| p[0]).collect::<Vec<_>>(), [4, 5]);
        assert!(done);
        assert_eq!(reader.remaining(), 0);
    }

    #[test]
    fn test_batches_cover_traversal_order() {
        let grid = numbered(5, 7);
        let mut reader = grid.reader();
        let mut seen = Vec::new();

        loop {
            let (batch, done) = reader.read_batch(3);
            seen.extend_from_slice(batch);
            if done {
                break;
            }
        }
        assert_eq!(seen, grid.pixels());
    }

    #[test]
    fn test_random_batch_sizes() {
        let mut rng = nanorand::WyRand::new();

        for _ in 0..50 {
            let width = rng.generate_range(1_usize..=24);
            let height = rng.generate_range(1_usize..=24);
            let batch_size = rng.generate_range(1_usize..=64);

            let grid = numbered(width, height);
            let mut reader = grid.reader();
            let mut seen = Vec::new();
            let mut calls = 0;

            loop {
                let (batch, done) = reader.read_batch(batch_size);
                calls += 1;

                assert!(batch.len() <= batch_size);
                seen.extend_from_slice(batch);

                if done {
                    break;
                }
            }
            let total = width * height;

            assert_eq!(seen, grid.pixels(), "{width}x{height} in batches of {batch_size}");
            assert_eq!(calls, (total + batch_size - 1) / batch_size);
            assert_eq!(reader.remaining(), 0);
        }
    }

    #[test]
    fn test_degenerate_grids_are_exhausted() {
        for (width, height) in [(0, 0), (0, 4), (4, 0)] {
            let grid = PixelGrid::new(width, height);
            let mut reader = grid.reader();

            assert!(reader.is_done());
            let (batch, done) = reader.read_batch(10);
            assert!(batch.is_empty());
            assert!(done);
        }
    }

    #[test]
    fn test_zero_sized_request() {
        let grid = numbered(1, 1);
        let mut reader = grid.reader();

        let (batch, done) = reader.read_batch(0);
        assert!(batch.is_empty());
        assert!(!done);
        assert_eq!(reader.read_batch(1).0.len(), 1);
    }
}
