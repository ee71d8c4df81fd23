/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::{ApiErrorCodes, FlickrError};
use crate::rest::macros::impl_response_status;
use crate::rest::parsers::from_stat;
use num_enum::TryFromPrimitiveError;
use serde::Deserialize;
use strum_macros::{EnumString, IntoStaticStr};

/// Overall outcome reported in the `stat` attribute of every `<rsp>` envelope.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Stat {
    Ok,
    #[default]
    Fail,
}

/// The `<err>` block Flickr includes when `stat="fail"`.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ApiError {
    #[serde(rename = "@code")]
    pub code: u32,

    #[serde(default, rename = "@msg")]
    pub msg: String,
}

impl ApiError {
    /// Maps the numeric code onto the codes shared by the photo methods.
    pub fn kind(&self) -> Result<ApiErrorCodes, TryFromPrimitiveError<ApiErrorCodes>> {
        ApiErrorCodes::try_from(self.code)
    }
}

/// Status envelope shared by every response type.
///
/// A transport-level `Ok` from the client does not mean the call succeeded:
/// Flickr reports logical failure with `stat="fail"` on an HTTP 200. Inspect
/// [`ResponseStatus::is_ok`] (or use [`ResponseStatus::check`]) before
/// trusting the payload.
pub trait ResponseStatus {
    fn stat(&self) -> Stat;
    fn err(&self) -> Option<&ApiError>;

    fn is_ok(&self) -> bool {
        self.stat() == Stat::Ok
    }

    /// Convenience that turns a `stat="fail"` envelope into
    /// [`FlickrError::ApiResponse`].
    fn check(self) -> Result<Self, FlickrError>
    where
        Self: Sized,
    {
        if self.is_ok() {
            return Ok(self);
        }
        let (code, msg) = self
            .err()
            .map(|e| (e.code, e.msg.clone()))
            .unwrap_or_default();
        Err(FlickrError::ApiResponse(code, msg))
    }
}

/// Response for methods that return nothing beyond the envelope
/// (`photos.delete`, `photos.setDates`).
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BasicResponse {
    #[serde(rename = "@stat", deserialize_with = "from_stat")]
    pub stat: Stat,

    #[serde(default, rename = "err")]
    pub err: Option<ApiError>,
}

impl_response_status!(BasicResponse);
