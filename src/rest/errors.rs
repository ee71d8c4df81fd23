/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

use crate::rest::properties::SafetyLevel;
use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
use std::io;
use thiserror::Error;

/// Error conditions that can be returned
#[derive(Error, Debug)]
pub enum FlickrError {
    #[error("I/O error")]
    Io(#[from] io::Error),

    #[error("Request network error")]
    Request(#[from] reqwest::Error),

    #[error("Request signing error")]
    Signing(#[from] hmac::digest::InvalidLength),

    #[error("Deserialization error")]
    Deserialization(#[from] serde_xml_rs::Error),

    #[error("URL Parse error")]
    UrlParsing(#[from] url::ParseError),

    #[error("API Response was error: {0}, msg: {1}")]
    ApiResponse(u32, String),

    #[error("API Response error code is invalid")]
    ApiResponseCode(#[from] TryFromPrimitiveError<ApiErrorCodes>),

    #[error("Safety level out of range")]
    SafetyLevel(#[from] TryFromPrimitiveError<SafetyLevel>),
}

/// Error codes Flickr reports inside a `stat="fail"` envelope.
///
/// Only the codes shared by the photo methods are listed; method-specific
/// codes surface through [`FlickrError::ApiResponseCode`].
#[derive(Debug, TryFromPrimitive)]
#[repr(u32)]
pub enum ApiErrorCodes {
    PhotoNotFound = 1,
    SslRequired = 95,
    InvalidSignature = 96,
    MissingSignature = 97,
    LoginFailed = 98,
    InsufficientPermissions = 99,
    InvalidApiKey = 100,
    ServiceUnavailable = 105,
    WriteOperationFailed = 106,
    FormatNotFound = 111,
    MethodNotFound = 112,
    BadUrlFound = 116,
}
