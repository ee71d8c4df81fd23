/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! # Flickr
//!
//! This library was created for working with a subset of the Flickr REST
//! API's photo methods.
//!
//! For further details on the Rest API refer to the [Flickr API Docs](https://www.flickr.com/services/api/)
//!
//! ## Features
//!
//! - Photo search by user, optionally bounded by upload date
//! - Photo metadata (`photos.getInfo`)
//! - Set membership (`photos.getAllContexts`)
//! - Photo deletion
//! - Setting posted/taken dates
//! - Lower level interface for signing and posting other REST methods
//!
//! *The Flickr API uses OAuth 1.0a. This library handles the request
//! signing (both the OAuth scheme and the legacy `api_sig` scheme).
//! Getting the Access Token/Secret is left up to the consumer of this
//! library*
//!
//! *If you need a Flickr method that is not implemented here, the
//! [`rest::Client`] and [`rest::Request`] pair is a way to make
//! request/responses in a more direct way*
//!
//! ## Usage
//!
//! **You will need to acquire an API key/secret from Flickr prior to using the API**
//!
//! ```no_run
//! use flickr::rest::{photos, Client, Creds, ResponseStatus};
//!
//! async fn list_photos(
//!     api_key: &str,
//!     api_secret: &str,
//!     access_token: &str,
//!     token_secret: &str,
//!     user_id: &str,
//! ) -> anyhow::Result<()> {
//!     // The API key/secret is obtained from your Flickr app registration
//!     // The Access Token/Secret is obtained via the OAuth1 process external to this
//!     let client = Client::new(Creds::from_tokens(
//!         api_key,
//!         Some(api_secret),
//!         Some(access_token),
//!         Some(token_secret),
//!     ));
//!
//!     // Search this user's photos; the envelope must be checked before
//!     // trusting the payload
//!     let found = photos::search(&client, true, user_id, None, None)
//!         .await?
//!         .check()?;
//!
//!     for photo in &found.photo_list.photos {
//!         let info = photos::get_info(&client, &photo.id, None).await?.check()?;
//!         println!("{}: {} views", info.photo.title, info.photo.views);
//!     }
//!     Ok(())
//! }
//! ```
//!
pub mod rest;
