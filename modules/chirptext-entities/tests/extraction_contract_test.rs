//! Extraction contract tests.
//!
//! These verify the cross-cutting guarantees of the extraction surface:
//! - Absent text is a valid input yielding empty results, never an error
//! - Returned results and visitor calls share one left-to-right order
//! - Extractors are pure: re-running one yields identical results
//! - Media classification is a re-scan of the URL extractor's own output
//! - Service keys serialize with stable snake_case wire names
//! - A panicking visitor aborts enumeration without a partial batch

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Mutex;

use chirptext_entities::{
    extract_composite_hashtags, extract_composite_hashtags_with, extract_hashtags,
    extract_hashtags_with, extract_image_media_urls, extract_image_media_urls_with,
    extract_mentions, extract_mentions_with, extract_reply_screen_name, extract_urls,
    extract_urls_with, MediaService,
};
use serde_json::json;

// =========================================================================
// Absent input
// =========================================================================

#[test]
fn absent_text_yields_empty_everywhere() {
    assert!(extract_mentions(None).is_empty());
    assert_eq!(extract_reply_screen_name(None), None);
    assert!(extract_urls(None).is_empty());
    assert!(extract_hashtags(None, false).is_empty());
    assert!(extract_hashtags(None, true).is_empty());
    assert!(extract_composite_hashtags(None, true).is_empty());
    assert!(extract_image_media_urls(None).is_empty());
}

// =========================================================================
// Order: returned sequence == visitor sequence, left to right
// =========================================================================

const MIXED_TEXT: &str =
    "@ann check #rust and #async at http://example.com plus www.example.org and http://twitpic.com/p1";

#[test]
fn mention_visitor_order_matches_returned_order() {
    let mut visited = Vec::new();
    let returned = extract_mentions_with(Some(MIXED_TEXT), |n| visited.push(n.to_string()));
    assert_eq!(returned, visited);
    assert_eq!(returned, vec!["ann"]);
}

#[test]
fn hashtag_visitor_order_matches_returned_order() {
    let mut visited = Vec::new();
    let returned = extract_hashtags_with(Some(MIXED_TEXT), false, |t| visited.push(t.to_string()));
    assert_eq!(returned, visited);
    assert_eq!(returned, vec!["rust", "async"]);
}

#[test]
fn composite_visitor_sees_flattened_tags_in_returned_order() {
    let mut visited = Vec::new();
    let returned = extract_composite_hashtags_with(Some("#a.b then #c"), true, |t| {
        visited.push(t.to_string())
    });
    assert_eq!(returned, visited);
    assert_eq!(returned, vec!["#a", "#b", "#c"]);
}

#[test]
fn url_visitor_order_matches_returned_order() {
    let mut visited = Vec::new();
    let returned = extract_urls_with(Some(MIXED_TEXT), |u| visited.push(u.to_string()));
    assert_eq!(returned, visited);
    assert_eq!(
        returned,
        vec![
            "http://example.com",
            "http://www.example.org",
            "http://twitpic.com/p1"
        ]
    );
}

// =========================================================================
// Purity: identical results across runs
// =========================================================================

#[test]
fn extraction_is_idempotent() {
    let text = Some(MIXED_TEXT);
    assert_eq!(extract_mentions(text), extract_mentions(text));
    assert_eq!(extract_reply_screen_name(text), extract_reply_screen_name(text));
    assert_eq!(extract_urls(text), extract_urls(text));
    assert_eq!(extract_hashtags(text, true), extract_hashtags(text, true));
    assert_eq!(
        extract_composite_hashtags(text, false),
        extract_composite_hashtags(text, false)
    );
    assert_eq!(extract_image_media_urls(text), extract_image_media_urls(text));
}

// =========================================================================
// Media classification layers on URL extraction
// =========================================================================

#[test]
fn media_urls_are_a_subset_of_extracted_urls() {
    let urls = extract_urls(Some(MIXED_TEXT));
    for media_url in extract_image_media_urls(Some(MIXED_TEXT)) {
        assert!(urls.contains(&media_url));
    }
}

#[test]
fn media_visitor_receives_url_id_and_service() {
    let mut triples = Vec::new();
    extract_image_media_urls_with(Some(MIXED_TEXT), |m| {
        triples.push((m.url.clone(), m.media_id.clone(), m.service))
    });
    assert_eq!(
        triples,
        vec![(
            "http://twitpic.com/p1".to_string(),
            "p1".to_string(),
            MediaService::TwitPic
        )]
    );
}

// =========================================================================
// Wire names
// =========================================================================

#[test]
fn media_service_wire_names_are_stable() {
    assert_eq!(
        serde_json::to_value(MediaService::TwitPic).unwrap(),
        json!("twit_pic")
    );
    assert_eq!(
        serde_json::to_value(MediaService::TweetPhoto).unwrap(),
        json!("tweet_photo")
    );
    assert_eq!(
        serde_json::from_value::<MediaService>(json!("tweet_photo")).unwrap(),
        MediaService::TweetPhoto
    );
}

// =========================================================================
// Visitor failure propagates
// =========================================================================

#[test]
fn panicking_visitor_aborts_enumeration() {
    let visited = Mutex::new(Vec::new());
    let result = catch_unwind(AssertUnwindSafe(|| {
        extract_mentions_with(Some("@a then @b then @c"), |name| {
            visited.lock().unwrap().push(name.to_string());
            if name == "a" {
                panic!("visitor failure");
            }
        })
    }));
    assert!(result.is_err(), "visitor panic must reach the caller");
    assert_eq!(*visited.lock().unwrap(), vec!["a"]);
}
