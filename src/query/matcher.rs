use regex::Regex;
use std::sync::LazyLock;

/// USB `vendor:device` id form: four lowercase hex digits, a colon,
/// four lowercase hex digits, anywhere in the query.
static VID_PID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[0-9a-f]{4}:[0-9a-f]{4}").unwrap());

/// Case-insensitive substring match, lowercasing both operands.
pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Case-insensitive exact match, lowercasing both operands.
pub(crate) fn equals_ci(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

/// Extract a `vid:pid` pair from a search query.
///
/// The pair may appear anywhere in the query; the ids are sliced from
/// the regex's matched span, so leading text cannot shift the
/// extraction.
pub(crate) fn parse_vid_pid(query: &str) -> Option<(&str, &str)> {
    let matched = VID_PID.find(query)?;
    let pair = matched.as_str();
    Some((&pair[..4], &pair[5..]))
}
