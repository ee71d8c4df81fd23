/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use crate::rest::client::Client;
use crate::rest::errors::FlickrError;
use crate::rest::macros::impl_response_status;
use crate::rest::parsers::{from_flickr_bool, from_media, from_stat};
use crate::rest::request::{AuthMode, Request};
use crate::rest::response::{ApiError, BasicResponse, Stat};
use crate::rest::MediaType;
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Holds a photo's metadata as returned by `flickr.photos.getInfo` and, with
/// fewer fields populated, by `flickr.photos.search`.
///
/// Fields mirror Flickr's attribute names; nested blocks that are absent
/// from a response stay at their zero values.
///
/// See the [Flickr API Docs](https://www.flickr.com/services/api/flickr.photos.getInfo.html)
/// for more details on the individual fields.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PhotoInfo {
    #[serde(rename = "@id")]
    pub id: String,

    #[serde(default, rename = "@secret")]
    pub secret: String,

    #[serde(default, rename = "@server")]
    pub server: String,

    #[serde(default, rename = "@farm")]
    pub farm: String,

    #[serde(default, rename = "@dateuploaded")]
    pub date_uploaded: String,

    #[serde(default, rename = "@isfavorite", deserialize_with = "from_flickr_bool")]
    pub is_favorite: bool,

    #[serde(default, rename = "@license")]
    pub license: String,

    /// 0-indexed on the read side; see
    /// [`SafetyLevel`](crate::rest::SafetyLevel) for the upload-side
    /// conversion.
    #[serde(default, rename = "@safety_level")]
    pub safety_level: u8,

    #[serde(default, rename = "@rotation")]
    pub rotation: i32,

    #[serde(default, rename = "@originalsecret")]
    pub original_secret: String,

    #[serde(default, rename = "@originalformat")]
    pub original_format: String,

    #[serde(default, rename = "@views")]
    pub views: u64,

    #[serde(default, rename = "@media", deserialize_with = "from_media")]
    pub media: MediaType,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub visibility: Visibility,

    #[serde(default)]
    pub dates: Dates,

    #[serde(default)]
    pub permissions: Permissions,

    #[serde(default)]
    pub editability: Editability,

    #[serde(default, rename = "publiceditability")]
    pub public_editability: Editability,

    #[serde(default)]
    pub usage: Usage,

    #[serde(default)]
    pub comments: u32,
}

impl PhotoInfo {
    /// The static CDN URL of the photo, assembled from the farm, server, id
    /// and secret identity fields.
    pub fn source_url(&self) -> Result<url::Url, FlickrError> {
        let raw = format!(
            "https://farm{}.staticflickr.com/{}/{}_{}.jpg",
            self.farm, self.server, self.id, self.secret
        );
        Ok(url::Url::parse(&raw)?)
    }
}

#[derive(Debug, Default, Clone, Deserialize)]
pub struct Visibility {
    #[serde(default, rename = "@ispublic", deserialize_with = "from_flickr_bool")]
    pub is_public: bool,

    #[serde(default, rename = "@isfriend", deserialize_with = "from_flickr_bool")]
    pub is_friend: bool,

    #[serde(default, rename = "@isfamily", deserialize_with = "from_flickr_bool")]
    pub is_family: bool,
}

/// Date block from `getInfo`. `posted` and `lastupdate` are unix
/// timestamps, `taken` is a MySQL datetime; all are carried verbatim.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Dates {
    #[serde(default, rename = "@posted")]
    pub posted: String,

    #[serde(default, rename = "@taken")]
    pub taken: String,

    #[serde(default, rename = "@takengranularity")]
    pub taken_granularity: String,

    #[serde(default, rename = "@takenunknown")]
    pub taken_unknown: String,

    #[serde(default, rename = "@lastupdate")]
    pub last_update: String,
}

/// Who may comment or add metadata, as permission levels 0-3.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Permissions {
    #[serde(default, rename = "@permcomment")]
    pub perm_comment: u8,

    #[serde(default, rename = "@permaddmeta")]
    pub perm_add_meta: u8,
}

/// Whether the calling (or public, for `publiceditability`) user may
/// comment or add metadata.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Editability {
    #[serde(default, rename = "@cancomment", deserialize_with = "from_flickr_bool")]
    pub can_comment: bool,

    #[serde(default, rename = "@canaddmeta", deserialize_with = "from_flickr_bool")]
    pub can_add_meta: bool,
}

/// Content-usage permissions for the photo.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Usage {
    #[serde(default, rename = "@candownload", deserialize_with = "from_flickr_bool")]
    pub can_download: bool,

    #[serde(default, rename = "@canblog", deserialize_with = "from_flickr_bool")]
    pub can_blog: bool,

    #[serde(default, rename = "@canprint", deserialize_with = "from_flickr_bool")]
    pub can_print: bool,

    #[serde(default, rename = "@canshare", deserialize_with = "from_flickr_bool")]
    pub can_share: bool,
}

/// Expected response for a `photos.getInfo` request
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PhotoInfoResponse {
    #[serde(rename = "@stat", deserialize_with = "from_stat")]
    pub stat: Stat,

    #[serde(default, rename = "err")]
    pub err: Option<ApiError>,

    #[serde(default)]
    pub photo: PhotoInfo,
}

/// Expected response for a `photos.search` request
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PhotoSearchResponse {
    #[serde(rename = "@stat", deserialize_with = "from_stat")]
    pub stat: Stat,

    #[serde(default, rename = "err")]
    pub err: Option<ApiError>,

    #[serde(default, rename = "photos")]
    pub photo_list: PhotoPage,
}

/// One page of search results, in the order Flickr returned them.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PhotoPage {
    #[serde(default, rename = "@page")]
    pub page: u32,

    #[serde(default, rename = "@pages")]
    pub pages: u32,

    #[serde(default, rename = "@perpage")]
    pub per_page: u32,

    #[serde(default, rename = "@total")]
    pub total: u32,

    #[serde(default, rename = "photo")]
    pub photos: Vec<PhotoInfo>,
}

/// One set (album) a photo belongs to.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PhotoSet {
    #[serde(default, rename = "@id")]
    pub id: u64,

    #[serde(default, rename = "@title")]
    pub title: String,
}

/// Expected response for a `photos.getAllContexts` request
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PhotoAllContextsResponse {
    #[serde(rename = "@stat", deserialize_with = "from_stat")]
    pub stat: Stat,

    #[serde(default, rename = "err")]
    pub err: Option<ApiError>,

    #[serde(default, rename = "set")]
    pub sets: Vec<PhotoSet>,
}

impl_response_status!(PhotoInfoResponse, PhotoSearchResponse, PhotoAllContextsResponse);

fn delete_request(photo_id: &str) -> Request {
    Request::new("flickr.photos.delete", AuthMode::OAuth).param("photo_id", photo_id)
}

fn search_request(
    authenticate: bool,
    user_id: &str,
    min_upload_date: Option<DateTime<Utc>>,
    max_upload_date: Option<DateTime<Utc>>,
) -> Request {
    let auth = if authenticate {
        AuthMode::OAuth
    } else {
        AuthMode::ApiKey
    };
    Request::new("flickr.photos.search", auth)
        .param("user_id", user_id)
        .date_param("min_upload_date", min_upload_date)
        .date_param("max_upload_date", max_upload_date)
}

fn get_info_request(photo_id: &str, secret: Option<&str>) -> Request {
    Request::new("flickr.photos.getInfo", AuthMode::OAuth)
        .param("photo_id", photo_id)
        .opt_param("secret", secret)
}

fn get_all_contexts_request(photo_id: &str, secret: Option<&str>) -> Request {
    Request::new("flickr.photos.getAllContexts", AuthMode::OAuth)
        .param("photo_id", photo_id)
        .opt_param("secret", secret)
}

fn set_dates_request(
    photo_id: &str,
    date_posted: Option<&str>,
    date_taken: Option<&str>,
) -> Request {
    Request::new("flickr.photos.setDates", AuthMode::OAuth)
        .param("photo_id", photo_id)
        .opt_param("date_posted", date_posted)
        .opt_param("date_taken", date_taken)
}

/// Deletes a photo.
///
/// Requires authentication with delete permission.
pub async fn delete(client: &Client, photo_id: &str) -> Result<BasicResponse, FlickrError> {
    client.post(delete_request(photo_id)).await
}

/// Searches the photos of a user, optionally bounded by upload date.
///
/// `None` bounds are omitted from the request. With `authenticate` the call
/// is OAuth signed and can see non-public photos; otherwise it is signed
/// with the API key only.
pub async fn search(
    client: &Client,
    authenticate: bool,
    user_id: &str,
    min_upload_date: Option<DateTime<Utc>>,
    max_upload_date: Option<DateTime<Utc>>,
) -> Result<PhotoSearchResponse, FlickrError> {
    client
        .post(search_request(
            authenticate,
            user_id,
            min_upload_date,
            max_upload_date,
        ))
        .await
}

/// Gets the metadata of a photo. The secret, when supplied, skips
/// permission checks.
pub async fn get_info(
    client: &Client,
    photo_id: &str,
    secret: Option<&str>,
) -> Result<PhotoInfoResponse, FlickrError> {
    client.post(get_info_request(photo_id, secret)).await
}

/// Gets every set a photo belongs to.
pub async fn get_all_contexts(
    client: &Client,
    photo_id: &str,
    secret: Option<&str>,
) -> Result<PhotoAllContextsResponse, FlickrError> {
    client.post(get_all_contexts_request(photo_id, secret)).await
}

/// Sets the posted and/or taken dates on a photo. Dates left as `None` are
/// not touched.
pub async fn set_dates(
    client: &Client,
    photo_id: &str,
    date_posted: Option<&str>,
    date_taken: Option<&str>,
) -> Result<BasicResponse, FlickrError> {
    client
        .post(set_dates_request(photo_id, date_posted, date_taken))
        .await
}
