/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

#![cfg(feature = "serde-support")]

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::metadata::GridMetadata;

impl Serialize for GridMetadata {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        const STRUCT_FIELDS: usize = 5;
        let mut state = serializer.serialize_struct("Metadata", STRUCT_FIELDS)?;

        state.serialize_field("width", &self.width)?;
        state.serialize_field("height", &self.height)?;
        state.serialize_field("pixels", &self.pixels())?;
        state.serialize_field("colorspace", self.colorspace())?;
        state.serialize_field("depth", &self.depth())?;

        state.end()
    }
}
