/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::auth;
use crate::rest::client::{API_ENDPOINT, Creds};
use crate::rest::errors::FlickrError;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

// Layout Flickr expects for upload-date bounds (MySQL datetime, seconds
// precision, no timezone conversion).
pub(crate) const MYSQL_LAYOUT: &str = "%Y-%m-%d %H:%M:%S";

/// Which signature scheme a request is signed with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// Legacy `api_key`/`api_sig` signing, for unauthenticated reads.
    ApiKey,
    /// Three-legged OAuth 1.0a signing.
    OAuth,
}

/// One REST call in the making: a fixed Flickr method name plus its
/// argument set.
///
/// Every request is built fresh per call and owned by it, so nothing leaks
/// between calls and a [`Client`](crate::rest::Client) can be shared across
/// tasks freely. Signing happens once the full argument set is populated,
/// right before submission.
#[derive(Debug, Clone)]
pub struct Request {
    method: &'static str,
    auth: AuthMode,
    params: BTreeMap<String, String>,
}

impl Request {
    pub fn new(method: &'static str, auth: AuthMode) -> Self {
        let mut params = BTreeMap::new();
        params.insert("method".to_string(), method.to_string());
        Self {
            method,
            auth,
            params,
        }
    }

    pub fn param(mut self, name: &str, value: impl Into<String>) -> Self {
        self.params.insert(name.to_string(), value.into());
        self
    }

    /// Optional argument. `None` leaves the argument out entirely; Flickr
    /// reads omission, not an empty value, as "unset". An empty string is
    /// treated the same as `None`.
    pub fn opt_param(self, name: &str, value: Option<&str>) -> Self {
        match value.filter(|v| !v.is_empty()) {
            Some(v) => self.param(name, v),
            None => self,
        }
    }

    /// Optional upload-date bound, serialized in the MySQL layout when
    /// present.
    pub fn date_param(self, name: &str, value: Option<DateTime<Utc>>) -> Self {
        match value {
            Some(v) => self.param(name, v.format(MYSQL_LAYOUT).to_string()),
            None => self,
        }
    }

    pub fn method(&self) -> &'static str {
        self.method
    }

    pub fn auth(&self) -> AuthMode {
        self.auth
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    // Applies the signature over the full argument set and yields the form
    // body to post.
    pub(crate) fn sign(mut self, creds: &Creds) -> Result<Vec<(String, String)>, FlickrError> {
        match self.auth {
            AuthMode::OAuth => auth::oauth_sign(creds, "POST", API_ENDPOINT, &mut self.params)?,
            AuthMode::ApiKey => auth::api_sign(creds, &mut self.params),
        }
        Ok(self.params.into_iter().collect())
    }
}
