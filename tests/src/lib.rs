/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![allow(unused_imports, unused)]

use std::fs::create_dir_all;
use std::path::{Path, PathBuf};

use compact_image::PixelGrid;
use nanorand::Rng;
use serde::Deserialize;

mod codec;
mod pipeline;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expected {
    Ok,
    Empty,
    Malformed
}

#[derive(Clone, Deserialize, Debug)]
pub struct TestEntry {
    pub name:     String,
    pub input:    String,
    pub expected: Expected,
    pub width:    Option<usize>,
    pub height:   Option<usize>,
    pub comment:  Option<String>
}

pub fn entries_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests")
}

/// A fresh directory for files written by the test `name`
pub fn scratch_path(name: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("compact-tests-{}-{name}", std::process::id()));
    create_dir_all(&path).unwrap();
    path
}

/// A grid of `width` x `height` random pixels
pub fn random_grid(width: usize, height: usize) -> PixelGrid {
    let mut rng = nanorand::WyRand::new();
    let mut data = vec![0_u16; width * height * 4];

    rng.fill(&mut data);

    PixelGrid::from_u16(&data, width, height).unwrap()
}
