/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use num_enum::{IntoPrimitive, TryFromPrimitive, TryFromPrimitiveError};
use strum_macros::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum MediaType {
    #[default]
    Unknown,
    Photo,
    Video,
}

/// Photo safety level as reported by the read API (`photos.getInfo`).
///
/// Flickr numbers this differently on the two sides of the API: the read
/// side is 0-indexed (0 = safe, 1 = moderate, 2 = restricted) while the
/// upload/write side is 1-indexed (1 = safe, 2 = moderate, 3 = restricted).
/// The conversion is never applied implicitly; use [`SafetyLevel::upload_level`]
/// and [`SafetyLevel::from_upload_level`] when round-tripping a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum SafetyLevel {
    Safe = 0,
    Moderate = 1,
    Restricted = 2,
}

impl SafetyLevel {
    /// Interprets a `safety_level` attribute from a read response.
    pub fn from_info_level(level: u8) -> Result<Self, TryFromPrimitiveError<Self>> {
        Self::try_from(level)
    }

    /// The 1-indexed value the upload/write API expects for this level.
    pub fn upload_level(self) -> u8 {
        u8::from(self) + 1
    }

    /// Interprets a 1-indexed value from the upload/write API.
    pub fn from_upload_level(level: u8) -> Result<Self, TryFromPrimitiveError<Self>> {
        Self::try_from(level.wrapping_sub(1))
    }
}
