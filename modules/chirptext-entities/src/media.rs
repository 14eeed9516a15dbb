use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::extract::extract_urls;

/// Image-hosting services recognized by [`extract_image_media_urls`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaService {
    TwitPic,
    TweetPhoto,
}

/// A URL classified as pointing at a known image host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaMatch {
    pub url: String,
    /// Per-service photo identifier, e.g. `abc123` in `http://twitpic.com/abc123`.
    pub media_id: String,
    pub service: MediaService,
}

/// Known image hosts. Each extracted URL is tried against every entry, in
/// declaration order.
static IMAGE_SERVICES: LazyLock<[(MediaService, Regex); 2]> = LazyLock::new(|| {
    [
        (
            MediaService::TwitPic,
            Regex::new(r"(?i)^http://twitpic\.com/(.*)").expect("valid regex"),
        ),
        (
            MediaService::TweetPhoto,
            Regex::new(r"(?i)^http://tweetphoto\.com/(.*)").expect("valid regex"),
        ),
    ]
});

/// Extract the URLs in `text` that point at a known image host, in input
/// order. A URL appears once per service it matches.
pub fn extract_image_media_urls(text: Option<&str>) -> Vec<String> {
    extract_image_media_urls_with(text, |_| {})
}

/// Like [`extract_image_media_urls`], additionally calling `visitor` with a
/// [`MediaMatch`] per classification, the only channel carrying the media
/// id and service key.
pub fn extract_image_media_urls_with(
    text: Option<&str>,
    mut visitor: impl FnMut(&MediaMatch),
) -> Vec<String> {
    let mut media_urls = Vec::new();
    for url in extract_urls(text) {
        for (service, pattern) in IMAGE_SERVICES.iter() {
            let Some(caps) = pattern.captures(&url) else {
                continue;
            };
            trace!(url = %url, service = ?service, "image media url matched");
            media_urls.push(url.clone());
            visitor(&MediaMatch {
                url: url.clone(),
                media_id: caps[1].to_string(),
                service: *service,
            });
        }
    }
    media_urls
}
