use std::sync::LazyLock;

use regex::Regex;

/// `@username` anywhere in text. The marker must sit at the start of text or
/// after a non-word character, so `user@host` never yields `host`.
/// Captures: (before, screen_name). The character *after* the name is not a
/// capture; extractors inspect it against `AT_SIGNS_RE` to reject chains.
pub(crate) static MENTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^0-9A-Za-z_])[@＠]([0-9A-Za-z_]+)").expect("valid regex")
});

/// One or more consecutive at marks. Applied to the single character right
/// after a mention match to detect chained forms like `@a@b`.
pub(crate) static AT_SIGNS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[@＠]+").expect("valid regex"));

/// A mention at the very start of text, with only whitespace allowed before
/// it. Anchored to text start, not line start: a mention opening a later
/// line is not a reply.
pub(crate) static REPLY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[@＠]([0-9A-Za-z_]+)").expect("valid regex"));

/// URL shapes: scheme-qualified (`http://`, `https://`), protocol-relative
/// (`//`), or bare `www.` domains. The domain needs at least one
/// dot-separated label ending in a 2+ letter TLD; path and query are
/// optional trailing components. Captures:
/// (before, url, protocol, domain, path, query).
pub(crate) static URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r#"(?i)([^/"':!=]|^|:)"#,                                // before
        r"((https?://|//|www\.)",                                // protocol or www.
        r"((?:[0-9a-z_-]+\.)+[a-z]{2,}(?::[0-9]+)?)",            // domain, optional port
        r"(/[-0-9a-z!*'();:&=+$/%#\[\]_.,~]*)?",                 // path
        r"(\?[-0-9a-z!*'();:&=+$/%#\[\]_.,~?]*[0-9a-z_&=#])?)",  // query
    ))
    .expect("valid regex")
});

/// `#tag` tokens. The marker must not follow a word character or `&`
/// (identifiers like `color#ff0000`, entities like `&#123;`), and the body
/// needs at least one letter or underscore so bare numeric anchors are
/// skipped. Captures: (before, hash_marker, body).
pub(crate) static HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^&0-9A-Za-z_])([#＃])([0-9]*[A-Za-z_][0-9A-Za-z_]*)").expect("valid regex")
});

/// Like the hashtag pattern, but the body may be several word-character runs
/// joined by single `.` separators, so `#this.is.a.tag` matches as one
/// token. Leading, trailing, or doubled dots never join. Digits-only bodies
/// are filtered by the extractor, not the pattern.
pub(crate) static COMPOSITE_HASHTAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(^|[^&0-9A-Za-z_])([#＃])([0-9A-Za-z_]+(?:\.[0-9A-Za-z_]+)*)")
        .expect("valid regex")
});
