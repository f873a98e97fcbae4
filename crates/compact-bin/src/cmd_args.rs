/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::builder::PossibleValuesParser;
use clap::{value_parser, Arg, ArgAction, Command};
use compact_pipeline::compressor::CompressionMode;
use compact_pipeline::optimizer::Medium;

fn mode_names() -> Vec<&'static str> {
    CompressionMode::all().iter().map(|x| x.name()).collect()
}

fn medium_names() -> Vec<&'static str> {
    Medium::all().iter().map(|x| x.name()).collect()
}

#[rustfmt::skip]
fn compress_cmd() -> Command {
    Command::new("compress")
        .about("Load standard images and persist them in the compact format")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Farbfeld, PPM/PAM or PNG file to read pixels from")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Compact file to write, one per input")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("mode")
            .long("mode")
            .help_heading("COMPRESSION")
            .help("Compression strategy to use")
            .default_value(CompressionMode::default().name())
            .value_parser(PossibleValuesParser::new(mode_names())))
        .arg(Arg::new("optimize")
            .long("optimize")
            .help_heading("OPTIMIZATION")
            .action(ArgAction::SetTrue)
            .help("Optimize the image for a medium before compressing"))
        .arg(Arg::new("medium")
            .long("medium")
            .help_heading("OPTIMIZATION")
            .help("Medium to optimize for, implies --optimize")
            .default_value(Medium::default().name())
            .value_parser(PossibleValuesParser::new(medium_names())))
}

#[rustfmt::skip]
fn decompress_cmd() -> Command {
    Command::new("decompress")
        .about("Read compact files back and optionally render them")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Compact file to read")
            .action(ArgAction::Append)
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Farbfeld (.ff), PAM (.pam) or PNG (.png) file to render to, one per input")
            .action(ArgAction::Append))
        .arg(Arg::new("mode")
            .long("mode")
            .help_heading("COMPRESSION")
            .help("Compression strategy the files were written with")
            .default_value(CompressionMode::default().name())
            .value_parser(PossibleValuesParser::new(mode_names())))
}

#[rustfmt::skip]
fn probe_cmd() -> Command {
    Command::new("probe")
        .about("Print information about compact files as json")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Compact file to inspect")
            .action(ArgAction::Append)
            .required(true))
}

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("compact")
        .version(compact_pipeline::version())
        .about("Optimize images and store them in a simple, inspectable text format")
        .subcommand_required(true)
        .subcommand(compress_cmd())
        .subcommand(decompress_cmd())
        .subcommand(probe_cmd())
        .arg(Arg::new("debug")
            .long("debug")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .global(true)
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the pipeline stages"))
        .arg(Arg::new("max-width")
            .long("max-width")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum width of images to decode")
            .default_value("65536")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("max-height")
            .long("max-height")
            .global(true)
            .help_heading("ADVANCED")
            .help("Maximum height of images to decode")
            .default_value("65536")
            .value_parser(value_parser!(usize)))
        .arg(Arg::new("all-yes")
            .long("yes")
            .short('y')
            .global(true)
            .action(ArgAction::SetTrue)
            .help("Overwrite output files that already exist"))
}

#[cfg(test)]
mod tests {
    use crate::cmd_args::create_cmd_args;

    #[test]
    fn test_cmd_definition() {
        create_cmd_args().debug_assert();
    }

    #[test]
    fn test_parse_compress() {
        let matches = create_cmd_args()
            .try_get_matches_from([
                "compact", "compress", "-i", "a.ff", "-o", "a.compact", "--medium", "print",
                "--info",
            ])
            .unwrap();
        let (name, sub) = matches.subcommand().unwrap();

        assert_eq!(name, "compress");
        assert_eq!(sub.get_one::<String>("medium").unwrap(), "print");
        assert_eq!(sub.get_one::<String>("mode").unwrap(), "simple");
        assert!(*sub.get_one::<bool>("info").unwrap());
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        let result = create_cmd_args().try_get_matches_from([
            "compact", "compress", "-i", "a.ff", "-o", "a.compact", "--mode", "zip",
        ]);
        assert!(result.is_err());
    }
}
