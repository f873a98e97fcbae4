/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Reading and writing persisted data
//!
//! Writes never touch the destination until all bytes are on disk: output
//! goes to a temporary file next to the destination which is then renamed
//! over it. A failed write leaves the destination as it was.
use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::{fs, io};

use compact_codec::{CompactDecoder, CompactEncoder, DecoderOptions};
use log::{debug, info, warn};

use crate::compressor::{CompactEncoding, CompressionMode};
use crate::errors::CompactErrors;

/// Return the temporary path used while writing `path`
pub fn temporary_path(path: &Path) -> Result<PathBuf, CompactErrors> {
    let file_name = path.file_name().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{path:?} does not name a file")
        )
    })?;
    let mut temp_name = OsString::from(".");
    temp_name.push(file_name);
    temp_name.push(".compact-tmp");

    Ok(path.with_file_name(temp_name))
}

/// Fully rewrite `path` with whatever `write` produces
///
/// # Errors
/// Any error from `write` or from the filesystem, in which case
/// `path` is left untouched
pub fn write_atomic<P, F>(path: P, write: F) -> Result<(), CompactErrors>
where
    P: AsRef<Path>,
    F: FnOnce(&mut BufWriter<File>) -> Result<(), CompactErrors>
{
    let path = path.as_ref();
    let temp_path = temporary_path(path)?;

    debug!("Writing {:?} through {:?}", path, temp_path);

    let result = write_and_rename(path, &temp_path, write);

    if result.is_err() && temp_path.exists() {
        if let Err(err) = fs::remove_file(&temp_path) {
            warn!("Could not remove temporary file {:?}: {}", temp_path, err);
        }
    }
    result
}

fn write_and_rename<F>(path: &Path, temp_path: &Path, write: F) -> Result<(), CompactErrors>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<(), CompactErrors>
{
    let file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .create(true)
        .open(temp_path)?;

    let mut writer = BufWriter::new(file);

    write(&mut writer)?;

    writer.flush()?;
    writer.get_ref().sync_all()?;
    drop(writer);

    fs::rename(temp_path, path)?;
    Ok(())
}

/// Write `bytes` to `path` atomically
pub fn write_bytes<P: AsRef<Path>>(path: P, bytes: &[u8]) -> Result<(), CompactErrors> {
    write_atomic(path, |writer| Ok(writer.write_all(bytes)?))
}

/// Persist `encoding` in the compact format at `path`
pub fn write_compact<P: AsRef<Path>>(
    encoding: &CompactEncoding<'_>, path: P
) -> Result<(), CompactErrors> {
    let path = path.as_ref();

    write_atomic(path, |writer| {
        let written = CompactEncoder::new(encoding.grid()).encode(writer)?;
        info!("Wrote {written} bytes to {:?}", path);
        Ok(())
    })
}

/// Load a compact file, tagging the result with `mode`
pub fn read_compact<P: AsRef<Path>>(
    path: P, options: DecoderOptions, mode: CompressionMode
) -> Result<CompactEncoding<'static>, CompactErrors> {
    let path = path.as_ref();
    let data = fs::read(path)?;

    info!("Read {} bytes from {:?}", data.len(), path);

    let grid = CompactDecoder::new_with_options(options, &data).decode()?;

    Ok(CompactEncoding::owned(grid, mode))
}
