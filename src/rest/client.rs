/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::errors::FlickrError;
use crate::rest::request::Request;
use serde::de::DeserializeOwned;

/// Flickr REST endpoint every method is posted against.
pub const API_ENDPOINT: &str = "https://api.flickr.com/services/rest";

/// Credentials used for request signing.
///
/// The API key/secret come from your Flickr app registration. The access
/// token/secret are obtained through the OAuth 1.0a dance, which is left to
/// the consumer of this library; key-only credentials are enough for
/// unauthenticated reads.
#[derive(Default, Clone)]
pub struct Creds {
    api_key: String,
    api_secret: Option<String>,
    access_token: Option<String>,
    token_secret: Option<String>,
}

impl Creds {
    pub fn from_tokens(
        api_key: &str,
        api_secret: Option<&str>,
        access_token: Option<&str>,
        token_secret: Option<&str>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.map(Into::into),
            access_token: access_token.map(Into::into),
            token_secret: token_secret.map(Into::into),
        }
    }

    pub(crate) fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> Option<&str> {
        self.api_secret.as_deref()
    }

    pub(crate) fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub(crate) fn token_secret(&self) -> Option<&str> {
        self.token_secret.as_deref()
    }
}

impl std::fmt::Debug for Creds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Creds")
            .field("api_key", &"xxx")
            .field("api_secret", &"xxx")
            .field("access_token", &"xxx")
            .field("token_secret", &"xxx")
            .finish()
    }
}

/// Directly communicates with the API.
///
/// Holds no per-request state, so it is cheap to clone and safe to share
/// across concurrent calls.
#[derive(Default, Clone)]
pub struct Client {
    creds: Creds,
    https_client: reqwest::Client,
}

impl Client {
    pub fn new(creds: Creds) -> Self {
        Self {
            creds,
            https_client: reqwest::Client::new(),
        }
    }

    /// Signs the request, posts it as a form body, and parses the XML
    /// response into the expected type.
    ///
    /// A successful return only means transport and parsing succeeded;
    /// Flickr reports logical failure inside the response envelope.
    pub async fn post<T: DeserializeOwned>(&self, request: Request) -> Result<T, FlickrError> {
        let method = request.method();
        let form = request.sign(&self.creds)?;
        log::debug!("POST {} method={}", API_ENDPOINT, method);
        let resp = self
            .https_client
            .post(API_ENDPOINT)
            .form(&form)
            .send()
            .await?;
        let body = resp.text().await?;
        log::trace!("{} response: {}", method, body);
        Ok(serde_xml_rs::from_str(&body)?)
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client").finish()
    }
}
