/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsStr;
use std::fs;
use std::io::{stdin, BufRead};
use std::path::Path;

use clap::ArgMatches;
use compact_pipeline::codecs::ImageFormat;
use compact_pipeline::errors::CompactErrors;
use compact_pipeline::persist;
use compact_pipeline::workflow::WorkFlow;
use log::{debug, info};

use crate::cmd_parsers::global_options::{parse_options, CmdOptions};
use crate::probe_files::probe_input_files;

pub(crate) fn create_and_exec_workflow_from_cmd(args: &ArgMatches) -> Result<(), CompactErrors> {
    let Some((name, sub_args)) = args.subcommand() else {
        return Err(CompactErrors::GenericString("No subcommand given".to_string()));
    };
    let options = parse_options(sub_args)?;

    match name {
        "compress" => compress_files(sub_args, &options),
        "decompress" => decompress_files(sub_args, &options),
        "probe" => probe_input_files(sub_args, &options.pipeline),
        _ => Err(CompactErrors::GenericString(format!(
            "Unknown subcommand {name}"
        )))
    }
}

fn compress_files(args: &ArgMatches, options: &CmdOptions) -> Result<(), CompactErrors> {
    info!("Creating workflows from input");

    let (Some(inputs), Some(outputs)) = (args.get_raw("in"), args.get_raw("out")) else {
        return Err(CompactErrors::GenericString(
            "Both input and output files are required".to_string()
        ));
    };

    for (in_file, out_file) in inputs.zip(outputs) {
        verify_file_paths(in_file, out_file, options)?;

        info!("Reading {:?} to memory", in_file);
        let data = fs::read(in_file)?;

        let format = ImageFormat::guess_format(&data);
        debug!("Treating {:?} as a {} file", in_file, format);

        let decoder = format.decoder(options.pipeline.decoder_options())?;

        let mut workflow = WorkFlow::new_with_options(options.pipeline);

        workflow.add_decoder(decoder);
        workflow.add_buffer(&data);
        workflow.set_destination(out_file);

        workflow.advance_to_end()?;

        info!("Wrote {:?}", out_file);
    }
    Ok(())
}

fn decompress_files(args: &ArgMatches, options: &CmdOptions) -> Result<(), CompactErrors> {
    let Some(inputs) = args.get_raw("in") else {
        return Err(CompactErrors::GenericString("No input files given".to_string()));
    };
    let mut outputs = args.get_raw("out").into_iter().flatten();

    for in_file in inputs {
        let grid = compact_pipeline::decompress_with_options(
            in_file,
            options.pipeline.mode().name(),
            options.pipeline.decoder_options()
        )?;
        info!("Decompressed {:?} into a {:?}", in_file, grid);

        if let Some(out_file) = outputs.next() {
            verify_file_paths(in_file, out_file, options)?;

            let mut encoder = ImageFormat::from_path(out_file).encoder()?;
            let bytes = encoder.encode_target(&grid)?;

            persist::write_bytes(out_file, &bytes)?;

            info!("Rendered {:?} with {}", out_file, encoder.name());
        }
    }
    Ok(())
}

fn verify_file_paths(p0: &OsStr, p1: &OsStr, options: &CmdOptions) -> Result<(), CompactErrors> {
    if p0 == p1 {
        return Err(CompactErrors::GenericString(format!(
            "Cannot use {:?} as both input and output",
            p0
        )));
    }
    let in_path = Path::new(p0);
    let out_path = Path::new(p1);

    if !in_path.exists() {
        return Err(CompactErrors::GenericString(format!(
            "Path {:?}, does not exist",
            in_path
        )));
    }

    if !in_path.is_file() {
        return Err(CompactErrors::GenericString(format!(
            "Path {:?} is not a file",
            in_path
        )));
    }

    if out_path.exists() {
        if options.override_files {
            info!("Overwriting path {:?} ", p1);
        } else {
            println!("File {:?} exists, overwrite [y/N]", out_path);
            let mut result = String::new();

            stdin().lock().read_line(&mut result)?;

            if result.trim() != "y" {
                return Err(CompactErrors::GenericString(format!(
                    "Not overwriting file {:?}",
                    out_path
                )));
            }
        }
    }
    Ok(())
}
