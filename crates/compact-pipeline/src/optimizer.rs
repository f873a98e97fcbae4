/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Media specific optimization
//!
//! Each [`Medium`] maps to a scaling factor in `(0.0, 1.0]`, an optimized
//! grid is a copy of the source shrunk by that factor. All media currently
//! use a factor of `1.0`, so optimizing returns an identical copy.
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use compact_image::PixelGrid;
use log::{debug, info};

use crate::errors::CompactErrors;
use crate::traits::OptimizerTrait;

/// Media an image can be optimized for
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Medium {
    #[default]
    Web,
    Print,
    Mobile
}

impl Medium {
    pub const fn all() -> &'static [Medium] {
        &[Medium::Web, Medium::Print, Medium::Mobile]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Medium::Web => "web",
            Medium::Print => "print",
            Medium::Mobile => "mobile"
        }
    }

    /// Factor image dimensions are multiplied by for this medium
    pub const fn scaling_factor(self) -> f64 {
        match self {
            Medium::Web | Medium::Print | Medium::Mobile => 1.0
        }
    }
}

impl Display for Medium {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Medium {
    type Err = CompactErrors;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Medium::all()
            .iter()
            .find(|medium| medium.name() == s)
            .copied()
            .ok_or_else(|| CompactErrors::UnsupportedMedium(s.to_string()))
    }
}

/// Optimizer scaling grids by a medium's factor
#[derive(Copy, Clone, Debug, Default)]
pub struct MediaOptimizer {
    medium: Medium
}

impl MediaOptimizer {
    pub const fn new(medium: Medium) -> MediaOptimizer {
        MediaOptimizer { medium }
    }

    pub const fn medium(&self) -> Medium {
        self.medium
    }
}

impl OptimizerTrait for MediaOptimizer {
    fn name(&self) -> &'static str {
        self.medium.name()
    }

    fn optimize(&self, grid: &PixelGrid) -> Result<PixelGrid, CompactErrors> {
        optimize(grid, self.medium)
    }
}

/// Return a copy of `grid` optimized for `medium`
pub fn optimize(grid: &PixelGrid, medium: Medium) -> Result<PixelGrid, CompactErrors> {
    let copy = grid.copy();
    let factor = medium.scaling_factor();

    info!("Optimizing for {medium}, scaling factor {factor}");

    shrink(copy, factor)
}

/// Reduce the size of `grid` by `scale`
///
/// Output dimensions are `ceil(width*scale) x ceil(height*scale)`, each output
/// pixel is copied from the nearest source pixel so channel values are never
/// blended.
///
/// # Errors
/// [`CompactErrors::InvalidScale`] if `scale` is outside `(0.0, 1.0]`
pub fn shrink(grid: PixelGrid, scale: f64) -> Result<PixelGrid, CompactErrors> {
    if !(scale > 0.0 && scale <= 1.0) {
        return Err(CompactErrors::InvalidScale(scale));
    }
    if scale == 1.0 {
        return Ok(grid);
    }
    let (width, height) = grid.dimensions();
    let out_width = scaled_dimension(width, scale);
    let out_height = scaled_dimension(height, scale);

    debug!("Shrinking {width}x{height} to {out_width}x{out_height}");

    let mut pixels = Vec::with_capacity(out_width * out_height);

    for x in 0..out_width {
        let src_x = nearest(x, width, out_width);
        let column = &grid.pixels()[src_x * height..(src_x + 1) * height];

        for y in 0..out_height {
            pixels.push(column[nearest(y, height, out_height)]);
        }
    }
    Ok(PixelGrid::from_pixels(out_width, out_height, pixels)?)
}

fn scaled_dimension(dimension: usize, scale: f64) -> usize {
    (dimension as f64 * scale).ceil() as usize
}

/// Map an output coordinate back to the source coordinate it samples
fn nearest(out: usize, in_dimension: usize, out_dimension: usize) -> usize {
    ((out * in_dimension) / out_dimension).min(in_dimension - 1)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use compact_image::PixelGrid;
    use nanorand::Rng;

    use crate::errors::CompactErrors;
    use crate::optimizer::{optimize, shrink, MediaOptimizer, Medium};
    use crate::traits::OptimizerTrait;

    fn numbered(width: usize, height: usize) -> PixelGrid {
        let pixels = (0..width * height)
            .map(|i| [i as u16, 1, 2, 3])
            .collect();
        PixelGrid::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_media_names() {
        for medium in Medium::all() {
            assert_eq!(Medium::from_str(medium.name()).unwrap(), *medium);
            assert_eq!(medium.scaling_factor(), 1.0);
        }
        assert!(matches!(
            Medium::from_str("unknown"),
            Err(CompactErrors::UnsupportedMedium(_))
        ));
    }

    #[test]
    fn test_optimize_is_idempotent() {
        let grid = numbered(4, 3);
        let once = optimize(&grid, Medium::Web).unwrap();
        let twice = optimize(&once, Medium::Web).unwrap();

        assert_eq!(once, grid);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_optimizer_trait() {
        let grid = numbered(2, 2);
        let optimizer = MediaOptimizer::new(Medium::Print);

        assert_eq!(optimizer.name(), "print");
        assert_eq!(optimizer.optimize(&grid).unwrap(), grid);
    }

    #[test]
    fn test_shrink_dimensions_round_up() {
        let out = shrink(numbered(5, 3), 0.5).unwrap();
        assert_eq!(out.dimensions(), (3, 2));

        let out = shrink(numbered(1, 1), 0.01).unwrap();
        assert_eq!(out.dimensions(), (1, 1));
    }

    #[test]
    fn test_shrink_random_grids() {
        let mut rng = nanorand::WyRand::new();

        for _ in 0..50 {
            let width = rng.generate_range(1_usize..=40);
            let height = rng.generate_range(1_usize..=40);
            let scale = f64::from(rng.generate_range(1_u32..=100)) / 100.0;

            let out = shrink(numbered(width, height), scale).unwrap();
            let (out_width, out_height) = out.dimensions();

            assert_eq!(out_width, (width as f64 * scale).ceil() as usize);
            assert_eq!(out_height, (height as f64 * scale).ceil() as usize);
            assert!(out_width >= 1 && out_height >= 1);

            // sampling is monotonic, so source indices never go backwards
            let indices: Vec<u16> = out.pixels().iter().map(|p| p[0]).collect();

            assert_eq!(indices[0], 0);
            assert!(indices.windows(2).all(|w| w[0] <= w[1]));
            assert!(out.pixels().iter().all(|p| p[1..] == [1, 2, 3]));
        }
    }

    #[test]
    fn test_shrink_keeps_channel_values() {
        let grid = numbered(4, 4);
        let out = shrink(grid.clone(), 0.5).unwrap();

        for pixel in out.pixels() {
            assert!(grid.pixels().contains(pixel));
        }
        assert_eq!(out.sample_at(0, 0).unwrap(), grid.sample_at(0, 0).unwrap());
        assert_eq!(out.sample_at(1, 1).unwrap(), grid.sample_at(2, 2).unwrap());
    }

    #[test]
    fn test_invalid_scale() {
        for scale in [0.0, -1.0, 1.5, f64::NAN] {
            assert!(matches!(
                shrink(numbered(2, 2), scale),
                Err(CompactErrors::InvalidScale(_))
            ));
        }
    }

    #[test]
    fn test_shrink_empty_grid() {
        let out = shrink(PixelGrid::new(0, 4), 0.5).unwrap();
        assert_eq!(out.dimensions(), (0, 2));
    }
}
