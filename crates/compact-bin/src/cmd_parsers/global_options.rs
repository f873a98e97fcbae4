/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::str::FromStr;

use clap::parser::ValueSource;
use clap::ArgMatches;
use compact_pipeline::compressor::CompressionMode;
use compact_pipeline::errors::CompactErrors;
use compact_pipeline::optimizer::Medium;
use compact_pipeline::options::PipelineOptions;
use log::{info, Level};

use crate::cmd_parsers::get_decoder_options;

#[derive(Debug, Copy, Clone)]
pub struct CmdOptions {
    pub pipeline:       PipelineOptions,
    pub override_files: bool
}

impl CmdOptions {
    pub fn new() -> CmdOptions {
        CmdOptions {
            pipeline:       PipelineOptions::default(),
            override_files: false
        }
    }
}

fn flag_set(options: &ArgMatches, id: &str) -> bool {
    options.try_get_one::<bool>(id).ok().flatten().copied().unwrap_or(false)
}

fn string_arg<'a>(options: &'a ArgMatches, id: &str) -> Option<&'a str> {
    options
        .try_get_one::<String>(id)
        .ok()
        .flatten()
        .map(String::as_str)
}

/// Turn the matches of a subcommand into options
pub fn parse_options(options: &ArgMatches) -> Result<CmdOptions, CompactErrors> {
    let mut cmd_options = CmdOptions::new();
    let mut pipeline = PipelineOptions::default().set_decoder_options(get_decoder_options(options));

    if let Some(mode) = string_arg(options, "mode") {
        let mode = CompressionMode::from_str(mode)?;
        info!("Compression mode: {mode}");
        pipeline = pipeline.set_mode(mode);
    }
    if let Some(medium) = string_arg(options, "medium") {
        pipeline = pipeline.set_medium(Medium::from_str(medium)?);

        if options.value_source("medium") == Some(ValueSource::CommandLine) {
            info!("Optimizing for {medium}");
            pipeline = pipeline.set_optimize(true);
        }
    }
    if flag_set(options, "optimize") {
        info!("Optimizing for {}", pipeline.medium());
        pipeline = pipeline.set_optimize(true);
    }
    if flag_set(options, "all-yes") {
        info!("Setting all commands to yes");
        cmd_options.override_files = true;
    }
    cmd_options.pipeline = pipeline;

    Ok(cmd_options)
}

/// Set up logging options
pub fn setup_logger(options: &ArgMatches) {
    let log_level = if flag_set(options, "debug") {
        Level::Debug
    } else if flag_set(options, "trace") {
        Level::Trace
    } else if flag_set(options, "warn") {
        Level::Warn
    } else if flag_set(options, "info") {
        Level::Info
    } else {
        Level::Warn
    };

    if let Err(err) = simple_logger::init_with_level(log_level) {
        eprintln!("Could not initialize logger: {err}");
        return;
    }

    info!("Initialized logger");
    info!("Log level :{}", log_level);
}

#[cfg(test)]
mod tests {
    use compact_pipeline::compressor::CompressionMode;
    use compact_pipeline::optimizer::Medium;

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::parse_options;

    fn parse(args: &[&str]) -> crate::cmd_parsers::global_options::CmdOptions {
        let matches = create_cmd_args().try_get_matches_from(args).unwrap();
        let (_, sub) = matches.subcommand().unwrap();
        parse_options(sub).unwrap()
    }

    #[test]
    fn test_defaults() {
        let options = parse(&["compact", "compress", "-i", "a.ff", "-o", "a.compact"]);

        assert_eq!(options.pipeline.mode(), CompressionMode::Simple);
        assert_eq!(options.pipeline.medium(), Medium::Web);
        assert!(!options.pipeline.optimize());
        assert!(!options.override_files);
    }

    #[test]
    fn test_medium_implies_optimize() {
        let options = parse(&[
            "compact", "compress", "-i", "a.ff", "-o", "a.compact", "--medium", "mobile", "-y",
        ]);

        assert_eq!(options.pipeline.medium(), Medium::Mobile);
        assert!(options.pipeline.optimize());
        assert!(options.override_files);
    }

    #[test]
    fn test_decoder_limits() {
        let options = parse(&["compact", "probe", "-i", "a.compact", "--max-width", "12"]);
        assert_eq!(options.pipeline.decoder_options().max_width(), 12);
    }
}
