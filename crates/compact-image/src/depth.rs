/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

//! Sample depth conversions
//!
//! Grids carry samples at 16 bits. Converting down to 8 bits keeps the
//! most significant byte, converting up replicates the byte so that
//! `0xFF` maps to `0xFFFF`.

/// Convert a 16 bit sample to 8 bits by keeping its high byte
#[inline(always)]
pub const fn u16_to_u8(sample: u16) -> u8 {
    (sample >> 8) as u8
}

/// Expand an 8 bit sample to the full 16 bit range
#[inline(always)]
pub const fn u8_to_u16(sample: u8) -> u16 {
    (sample as u16) * 257
}

#[cfg(test)]
mod tests {
    use crate::depth::{u16_to_u8, u8_to_u16};

    #[test]
    fn test_high_values_are_not_truncated() {
        // keeping the low byte would give 0x34
        assert_eq!(u16_to_u8(0x1234), 0x12);
        assert_eq!(u16_to_u8(256), 1);
        assert_eq!(u16_to_u8(u16::MAX), u8::MAX);
        assert_eq!(u16_to_u8(255), 0);
    }

    #[test]
    fn test_eight_bit_survives_expansion() {
        for value in 0..=u8::MAX {
            assert_eq!(u16_to_u8(u8_to_u16(value)), value);
        }
        assert_eq!(u8_to_u16(255), 65535);
    }
}
