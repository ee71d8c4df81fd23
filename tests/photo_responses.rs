/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Deserialization tests against Flickr's stock XML response schemas.

use flickr::rest::{
    BasicResponse, FlickrError, MediaType, PhotoAllContextsResponse, PhotoInfoResponse,
    PhotoSearchResponse, ResponseStatus, SafetyLevel, Stat,
};

const GET_INFO_OK: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
  <photo id="2733" secret="123456" server="12" farm="1" dateuploaded="1100897479"
         isfavorite="0" license="3" safety_level="0" rotation="90"
         originalsecret="1bc09ce34a" originalformat="png" views="112" media="photo">
    <title>listing monitor</title>
    <description>A picture of the listing monitor</description>
    <visibility ispublic="1" isfriend="0" isfamily="0" />
    <dates posted="1100897479" taken="2004-11-19 12:51:19" takengranularity="0"
           takenunknown="0" lastupdate="1093022469" />
    <permissions permcomment="3" permaddmeta="2" />
    <editability cancomment="1" canaddmeta="1" />
    <publiceditability cancomment="1" canaddmeta="0" />
    <usage candownload="1" canblog="0" canprint="0" canshare="1" />
    <comments>1</comments>
  </photo>
</rsp>"#;

const SEARCH_OK: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
  <photos page="2" pages="5" perpage="100" total="450">
    <photo id="2636" owner="47058503995@N01" secret="a123456" server="2" farm="1"
           title="test_04" ispublic="1" isfriend="0" isfamily="0" />
    <photo id="2635" owner="47058503995@N01" secret="b123456" server="2" farm="1"
           title="test_03" ispublic="0" isfriend="1" isfamily="1" />
    <photo id="2633" owner="47058503995@N01" secret="c123456" server="2" farm="1"
           title="test_01" ispublic="1" isfriend="0" isfamily="0" />
  </photos>
</rsp>"#;

const ALL_CONTEXTS_OK: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="ok">
  <set id="595" title="Recent" />
  <set id="5932" title="Archive" />
</rsp>"#;

const FAIL: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<rsp stat="fail">
  <err code="1" msg="Photo not found" />
</rsp>"#;

#[test]
fn get_info_response_deserializes() {
    let resp: PhotoInfoResponse = serde_xml_rs::from_str(GET_INFO_OK).unwrap();
    assert!(resp.is_ok());
    assert!(resp.err.is_none());

    let photo = &resp.photo;
    assert_eq!(photo.id, "2733");
    assert_eq!(photo.secret, "123456");
    assert_eq!(photo.server, "12");
    assert_eq!(photo.farm, "1");
    assert_eq!(photo.date_uploaded, "1100897479");
    assert!(!photo.is_favorite);
    assert_eq!(photo.license, "3");
    assert_eq!(photo.safety_level, 0);
    assert_eq!(photo.rotation, 90);
    assert_eq!(photo.original_secret, "1bc09ce34a");
    assert_eq!(photo.original_format, "png");
    assert_eq!(photo.views, 112);
    assert_eq!(photo.media, MediaType::Photo);
    assert_eq!(photo.title, "listing monitor");
    assert_eq!(photo.description, "A picture of the listing monitor");

    assert!(photo.visibility.is_public);
    assert!(!photo.visibility.is_friend);
    assert!(!photo.visibility.is_family);

    assert_eq!(photo.dates.posted, "1100897479");
    assert_eq!(photo.dates.taken, "2004-11-19 12:51:19");
    assert_eq!(photo.dates.last_update, "1093022469");

    assert_eq!(photo.permissions.perm_comment, 3);
    assert_eq!(photo.permissions.perm_add_meta, 2);
    assert!(photo.editability.can_comment);
    assert!(photo.editability.can_add_meta);
    assert!(photo.public_editability.can_comment);
    assert!(!photo.public_editability.can_add_meta);
    assert!(photo.usage.can_download);
    assert!(!photo.usage.can_blog);
    assert!(!photo.usage.can_print);
    assert!(photo.usage.can_share);

    assert_eq!(photo.comments, 1);
    assert_eq!(
        photo.source_url().unwrap().as_str(),
        "https://farm1.staticflickr.com/12/2733_123456.jpg"
    );
}

#[test]
fn read_safety_level_converts_to_upload_level() {
    let resp: PhotoInfoResponse = serde_xml_rs::from_str(GET_INFO_OK).unwrap();
    let level = SafetyLevel::from_info_level(resp.photo.safety_level).unwrap();
    assert_eq!(level, SafetyLevel::Safe);
    // The write/upload API is 1-indexed
    assert_eq!(level.upload_level(), 1);
}

#[test]
fn search_response_preserves_page_counts_and_order() {
    let resp: PhotoSearchResponse = serde_xml_rs::from_str(SEARCH_OK).unwrap();
    assert!(resp.is_ok());

    let list = &resp.photo_list;
    assert_eq!(list.page, 2);
    assert_eq!(list.pages, 5);
    assert_eq!(list.per_page, 100);
    assert_eq!(list.total, 450);

    let ids: Vec<&str> = list.photos.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["2636", "2635", "2633"]);
    assert_eq!(list.photos[1].secret, "b123456");
    // getInfo-only blocks stay at their zero values in search results
    assert!(!list.photos[0].visibility.is_public);
    assert_eq!(list.photos[0].comments, 0);
}

#[test]
fn all_contexts_response_lists_sets() {
    let resp: PhotoAllContextsResponse = serde_xml_rs::from_str(ALL_CONTEXTS_OK).unwrap();
    assert!(resp.is_ok());
    assert_eq!(resp.sets.len(), 2);
    assert_eq!(resp.sets[0].id, 595);
    assert_eq!(resp.sets[0].title, "Recent");
    assert_eq!(resp.sets[1].id, 5932);
    assert_eq!(resp.sets[1].title, "Archive");
}

#[test]
fn failure_envelope_leaves_payload_at_defaults() {
    let resp: PhotoInfoResponse = serde_xml_rs::from_str(FAIL).unwrap();
    assert_eq!(resp.stat, Stat::Fail);
    assert!(!resp.is_ok());

    let err = resp.err.as_ref().unwrap();
    assert_eq!(err.code, 1);
    assert_eq!(err.msg, "Photo not found");
    assert!(matches!(
        err.kind(),
        Ok(flickr::rest::ApiErrorCodes::PhotoNotFound)
    ));

    // no garbage in the payload
    assert_eq!(resp.photo.id, "");
    assert_eq!(resp.photo.views, 0);
    assert!(resp.photo.dates.posted.is_empty());

    match resp.check() {
        Err(FlickrError::ApiResponse(code, msg)) => {
            assert_eq!(code, 1);
            assert_eq!(msg, "Photo not found");
        }
        other => panic!("expected ApiResponse error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn basic_response_roundtrips_both_outcomes() {
    let ok: BasicResponse = serde_xml_rs::from_str(r#"<rsp stat="ok" />"#).unwrap();
    assert!(ok.is_ok());
    assert!(ok.err.is_none());

    let fail: BasicResponse = serde_xml_rs::from_str(FAIL).unwrap();
    assert!(!fail.is_ok());
    assert!(fail.check().is_err());
}
