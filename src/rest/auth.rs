/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::client::Creds;
use crate::rest::errors::FlickrError;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use rand::{RngExt, distr::Alphanumeric};
use sha1::Sha1;
use std::collections::BTreeMap;

type HmacSha1 = Hmac<Sha1>;

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 16;

// OAuth 1.0a requires the RFC 3986 unreserved set; urlencoding leaves
// exactly [A-Za-z0-9-_.~] unescaped.
fn percent_encode(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

fn nonce() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect()
}

// Signature base string per RFC 5849 §3.4.1. The BTreeMap keeps the
// parameters in the bytewise order the normalization step requires.
fn signature_base_string(http_method: &str, url: &str, params: &BTreeMap<String, String>) -> String {
    let normalized = params
        .iter()
        .map(|(k, v)| format!("{}={}", percent_encode(k), percent_encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        http_method,
        percent_encode(url),
        percent_encode(&normalized)
    )
}

/// Signs the argument set with Flickr's OAuth 1.0a HMAC-SHA1 scheme,
/// inserting the `oauth_*` protocol parameters and the signature.
///
/// Must run after every request argument is set; the signature covers the
/// full parameter set.
pub(crate) fn oauth_sign(
    creds: &Creds,
    http_method: &str,
    url: &str,
    params: &mut BTreeMap<String, String>,
) -> Result<(), FlickrError> {
    params.insert("oauth_consumer_key".into(), creds.api_key().into());
    params.insert("oauth_nonce".into(), nonce());
    params.insert(
        "oauth_timestamp".into(),
        chrono::Utc::now().timestamp().to_string(),
    );
    params.insert("oauth_signature_method".into(), SIGNATURE_METHOD.into());
    params.insert("oauth_version".into(), OAUTH_VERSION.into());
    if let Some(token) = creds.access_token() {
        params.insert("oauth_token".into(), token.into());
    }

    let base = signature_base_string(http_method, url, params);
    let key = format!(
        "{}&{}",
        percent_encode(creds.api_secret().unwrap_or_default()),
        percent_encode(creds.token_secret().unwrap_or_default())
    );
    let mut mac = HmacSha1::new_from_slice(key.as_bytes())?;
    mac.update(base.as_bytes());
    let signature = STANDARD.encode(mac.finalize().into_bytes());
    params.insert("oauth_signature".into(), signature);
    Ok(())
}

/// Signs the argument set with the legacy API-key scheme: `api_key` plus
/// `api_sig`, the MD5 of the shared secret followed by the sorted
/// name/value concatenation.
///
/// Without an API secret only `api_key` is added, which is enough for
/// unauthenticated reads.
pub(crate) fn api_sign(creds: &Creds, params: &mut BTreeMap<String, String>) {
    params.insert("api_key".into(), creds.api_key().into());
    if let Some(secret) = creds.api_secret() {
        let digest = md5::compute(api_sig_preimage(secret, params));
        params.insert("api_sig".into(), format!("{:x}", digest));
    }
}

fn api_sig_preimage(secret: &str, params: &BTreeMap<String, String>) -> String {
    let mut preimage = String::from(secret);
    for (k, v) in params {
        preimage.push_str(k);
        preimage.push_str(v);
    }
    preimage
}
