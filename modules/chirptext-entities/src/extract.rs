use crate::patterns::{
    AT_SIGNS_RE, COMPOSITE_HASHTAG_RE, HASHTAG_RE, MENTION_RE, REPLY_RE, URL_RE,
};

/// Extract every `@username` mentioned in `text`. Returns screen names
/// without the leading marker, in input order, duplicates preserved.
/// Absent text yields an empty list.
pub fn extract_mentions(text: Option<&str>) -> Vec<String> {
    extract_mentions_with(text, |_| {})
}

/// Like [`extract_mentions`], additionally calling `visitor` once per name,
/// in result order.
pub fn extract_mentions_with(text: Option<&str>, mut visitor: impl FnMut(&str)) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut screen_names = Vec::new();
    for caps in MENTION_RE.captures_iter(text) {
        let end = caps.get(0).unwrap().end();
        // A name running straight into another @ is part of a chain
        // (@a@b, user@host@x), not a standalone mention.
        if AT_SIGNS_RE.is_match(char_after(text, end)) {
            continue;
        }
        screen_names.push(caps[2].to_string());
    }

    for name in &screen_names {
        visitor(name);
    }
    screen_names
}

/// The screen name this text replies to: a mention at the very start,
/// with only whitespace allowed before it. `None` when the text is absent
/// or does not open with a mention.
pub fn extract_reply_screen_name(text: Option<&str>) -> Option<String> {
    extract_reply_screen_name_with(text, |_| {})
}

/// Like [`extract_reply_screen_name`], calling `visitor` with the name when
/// one is found.
pub fn extract_reply_screen_name_with(
    text: Option<&str>,
    mut visitor: impl FnMut(&str),
) -> Option<String> {
    let caps = REPLY_RE.captures(text?)?;
    let screen_name = caps[1].to_string();
    visitor(&screen_name);
    Some(screen_name)
}

/// Extract every URL in `text`, in input order. Bare `www.` domains gain an
/// explicit `http://` scheme; everything else is returned exactly as
/// written.
pub fn extract_urls(text: Option<&str>) -> Vec<String> {
    extract_urls_with(text, |_| {})
}

/// Like [`extract_urls`], additionally calling `visitor` once per URL.
pub fn extract_urls_with(text: Option<&str>, mut visitor: impl FnMut(&str)) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut urls = Vec::new();
    for caps in URL_RE.captures_iter(text) {
        let url = &caps[2];
        if &caps[3] == "www." {
            urls.push(format!("http://{url}"));
        } else {
            urls.push(url.to_string());
        }
    }

    for url in &urls {
        visitor(url);
    }
    urls
}

/// Extract every `#hashtag` in `text`, in input order. With
/// `leading_character` set, each tag keeps its matched marker character.
pub fn extract_hashtags(text: Option<&str>, leading_character: bool) -> Vec<String> {
    extract_hashtags_with(text, leading_character, |_| {})
}

/// Like [`extract_hashtags`], additionally calling `visitor` once per tag.
pub fn extract_hashtags_with(
    text: Option<&str>,
    leading_character: bool,
    mut visitor: impl FnMut(&str),
) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    for caps in HASHTAG_RE.captures_iter(text) {
        if leading_character {
            tags.push(format!("{}{}", &caps[2], &caps[3]));
        } else {
            tags.push(caps[3].to_string());
        }
    }

    for tag in &tags {
        visitor(tag);
    }
    tags
}

/// Extract hashtags like [`extract_hashtags`], but decompose dotted tags:
/// `#this.is.a.tag` yields four tags. The result is one flat ordered
/// sequence, and `leading_character` applies to every sub-tag.
pub fn extract_composite_hashtags(text: Option<&str>, leading_character: bool) -> Vec<String> {
    extract_composite_hashtags_with(text, leading_character, |_| {})
}

/// Like [`extract_composite_hashtags`], additionally calling `visitor` once
/// per flattened tag, in result order.
pub fn extract_composite_hashtags_with(
    text: Option<&str>,
    leading_character: bool,
    mut visitor: impl FnMut(&str),
) -> Vec<String> {
    let Some(text) = text else {
        return Vec::new();
    };

    let mut tags = Vec::new();
    for caps in COMPOSITE_HASHTAG_RE.captures_iter(text) {
        let marker = &caps[2];
        let body = &caps[3];
        // Same rule the plain hashtag pattern encodes: a body of nothing
        // but digits and separators is a numeric anchor, not a hashtag.
        if body.chars().all(|c| c.is_ascii_digit() || c == '.') {
            continue;
        }
        for sub_tag in body.split('.') {
            if leading_character {
                tags.push(format!("{marker}{sub_tag}"));
            } else {
                tags.push(sub_tag.to_string());
            }
        }
    }

    for tag in &tags {
        visitor(tag);
    }
    tags
}

/// The single character starting at byte `idx`, as a subslice. Empty when
/// `idx` is the end of the text.
fn char_after(text: &str, idx: usize) -> &str {
    let rest = &text[idx..];
    match rest.chars().next() {
        Some(c) => &rest[..c.len_utf8()],
        None => "",
    }
}
