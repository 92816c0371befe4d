use url::Url;

/// Query parameters stripped from displayed URLs
const TRACKING_PARAMS: &[&str] = &[
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
    "gclid",
    "fbclid",
];

/// Removes tracking query parameters from a URL for display
///
/// The query string is re-serialized only when at least one parameter was
/// actually removed, so untouched URLs come back byte-for-byte identical
/// (no reordering, no re-escaping). Inputs that fail to parse are also
/// returned verbatim; this function never fails.
///
/// Sanitization is idempotent: a second pass finds nothing left to remove
/// and returns its input unchanged.
///
/// # Example
///
/// ```
/// use matcha::sanitize_url;
///
/// let clean = sanitize_url("https://example.com/a?id=7&utm_source=mail");
/// assert_eq!(clean, "https://example.com/a?id=7");
/// assert_eq!(sanitize_url(&clean), clean);
/// ```
pub fn sanitize_url(raw: &str) -> String {
    let Ok(mut url) = Url::parse(raw) else {
        return raw.to_string();
    };

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let kept: Vec<&(String, String)> = pairs
        .iter()
        .filter(|(key, _)| !TRACKING_PARAMS.contains(&key.as_str()))
        .collect();

    if kept.len() == pairs.len() {
        return raw.to_string();
    }

    if kept.is_empty() {
        url.set_query(None);
    } else {
        let mut serializer = url.query_pairs_mut();
        serializer.clear();
        for (key, value) in kept {
            serializer.append_pair(key, value);
        }
    }

    url.to_string()
}
