/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs;
use std::path::Path;

use clap::ArgMatches;
use compact_pipeline::errors::CompactErrors;
use compact_pipeline::options::PipelineOptions;
use log::warn;

use crate::serde::Metadata;

/// Probe compact files, and print their metadata to standard output.
pub fn probe_input_files(args: &ArgMatches, options: &PipelineOptions) -> Result<(), CompactErrors> {
    let Some(inputs) = args.get_raw("in") else {
        return Ok(());
    };

    for in_file in inputs {
        let path = Path::new(in_file);

        if !path.is_file() {
            warn!("Skipping {:?}, not a file", path);
            continue;
        }
        let size = fs::metadata(path)?.len();

        let grid = compact_pipeline::decompress_with_options(
            path,
            options.mode().name(),
            options.decoder_options()
        )?;
        let metadata = Metadata::new(in_file.to_os_string(), size, grid.metadata());

        let json = serde_json::to_string_pretty(&metadata)
            .map_err(|e| CompactErrors::GenericString(e.to_string()))?;

        println!("{json}");
    }
    Ok(())
}
