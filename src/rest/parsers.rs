/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::{MediaType, Stat};
use serde::Deserialize;
use std::str::FromStr;

// Parses the stat attribute of the response envelope
pub fn from_stat<'de, D>(deserializer: D) -> Result<Stat, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Stat::from_str(&s).map_err(serde::de::Error::custom)
}

// Parses Flickr's "0"/"1" boolean attributes
pub fn from_flickr_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    Ok(matches!(s.as_str(), "1" | "true"))
}

// Parses the media attribute
pub fn from_media<'de, D>(deserializer: D) -> Result<MediaType, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    MediaType::from_str(&s).or(Ok(MediaType::Unknown))
}
