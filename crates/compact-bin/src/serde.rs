/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::ffi::OsString;

use compact_image::metadata::GridMetadata;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

pub struct Metadata {
    file:     OsString,
    size:     u64,
    metadata: GridMetadata
}

impl Metadata {
    pub fn new(file: OsString, size: u64, metadata: GridMetadata) -> Metadata {
        Metadata {
            file,
            size,
            metadata
        }
    }
}

impl Serialize for Metadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut state = serializer.serialize_struct("CompactMetadata", 3)?;

        state.serialize_field("file", &self.file.to_string_lossy())?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("metadata", &self.metadata)?;

        state.end()
    }
}

#[cfg(test)]
mod tests {
    use compact_image::metadata::GridMetadata;

    use crate::serde::Metadata;

    #[test]
    fn test_metadata_json() {
        let metadata = Metadata::new("a.compact".into(), 42, GridMetadata::new(2, 3));
        let json = serde_json::to_value(&metadata).unwrap();

        assert_eq!(json["file"], "a.compact");
        assert_eq!(json["size"], 42);
        assert_eq!(json["metadata"]["width"], 2);
        assert_eq!(json["metadata"]["height"], 3);
        assert_eq!(json["metadata"]["pixels"], 6);
        assert_eq!(json["metadata"]["colorspace"], "RGBA");
        assert_eq!(json["metadata"]["depth"], 16);
    }
}
