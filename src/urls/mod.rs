//! URL handling module for matcha
//!
//! Tracking-parameter sanitization plus the omnibar's small heuristics
//! for telling URLs apart from search queries.

mod sanitize;

pub use sanitize::sanitize_url;

/// Returns true if omnibar input looks like a URL rather than a search
/// query: an explicit HTTP(S) scheme, or a dotted token without spaces
pub fn is_url_like(input: &str) -> bool {
    let lower = input.trim().to_lowercase();
    if lower.starts_with("http:") || lower.starts_with("https:") {
        return true;
    }
    if input.contains(' ') {
        return false;
    }
    input.contains('.')
}

/// Prefixes `http://` when the input carries no HTTP(S) scheme
///
/// Plain `http` rather than `https` on purpose: servers that care
/// redirect to HTTPS themselves, ones that don't would break outright.
pub fn ensure_scheme(input: &str) -> String {
    let lower = input.to_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        input.to_string()
    } else {
        format!("http://{}", input)
    }
}
