//! Search-result extraction
//!
//! This module mines a search engine's results page for title/URL pairs:
//! every anchor in document order is considered, redirect wrappers are
//! unwrapped, tracking parameters stripped, duplicates dropped, and the
//! survivors ranked so genuine destinations sort above the engine's own
//! internal links.

use crate::urls::sanitize_url;
use ego_tree::NodeRef;
use scraper::node::Element;
use scraper::{Html, Node};
use std::collections::HashSet;
use url::Url;

/// Maximum number of search results kept from one extraction
pub const RESULT_CAP: usize = 200;

/// Hosts belonging to search engines themselves; links into these are
/// ranked below real destination links
const SEARCH_ENGINE_HOSTS: &[&str] = &["duckduckgo.com", "google.com", "bing.com"];

/// One parsed search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Visible anchor text, or the URL itself when the anchor was bare
    pub title: String,

    /// Absolute, tracking-sanitized destination URL; unique within one
    /// extracted sequence
    pub url: String,
}

/// Extracts search results from a parsed results page
///
/// Walks every node in document order (no subtree is exempt; result
/// anchors regularly sit inside containers the text extractor would
/// skip). For each `<a>` with a non-blank `href`:
///
/// 1. unwrap the engine's `/l/?uddg=` redirect wrapper if present,
/// 2. absolutize against `search_origin` when the href is site-relative,
/// 3. drop `javascript:` and bare-fragment links,
/// 4. strip tracking parameters,
/// 5. fall back to the URL as title when the anchor has no visible text,
/// 6. keep only the first occurrence of each URL.
///
/// The sequence is then stably sorted (HTTPS destinations first, search
/// engine self-links last) and truncated to `cap` entries.
pub fn extract_results(document: &Html, search_origin: &str, cap: usize) -> Vec<SearchResult> {
    let base = Url::parse(search_origin).ok();
    let mut results: Vec<SearchResult> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for node in document.tree.root().descendants() {
        let Node::Element(element) = node.value() else {
            continue;
        };
        if element.name() != "a" {
            continue;
        }
        let Some(href) = anchor_href(element) else {
            continue;
        };

        let mut href = href;
        if let Some(destination) = unwrap_redirect(&href, base.as_ref()) {
            href = destination;
        }

        if href.starts_with('/') {
            href = format!("{}{}", search_origin.trim_end_matches('/'), href);
        }

        if href.to_lowercase().starts_with("javascript:") || href.starts_with('#') {
            continue;
        }

        let href = sanitize_url(&href);

        let text = anchor_text(node);
        let title = if text.is_empty() { href.clone() } else { text };

        if seen.insert(href.clone()) {
            results.push(SearchResult { title, url: href });
        }
    }

    rank_results(&mut results);
    results.truncate(cap);
    results
}

/// Finds the anchor's href by case-insensitive attribute lookup, trimmed;
/// None when absent or blank
fn anchor_href(element: &Element) -> Option<String> {
    element
        .attrs()
        .find(|(key, _)| key.eq_ignore_ascii_case("href"))
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// Collects the anchor's visible text: all descendant text nodes with
/// whitespace runs collapsed to single spaces
fn anchor_text(node: NodeRef<'_, Node>) -> String {
    let mut text = String::new();
    for descendant in node.descendants() {
        if let Node::Text(t) = descendant.value() {
            text.push_str(&t.text);
        }
    }
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Unwraps DuckDuckGo-style redirect links
///
/// An href of the form `/l/?uddg=<escaped destination>` (or any href
/// carrying a `uddg` parameter) is replaced by the percent-decoded
/// destination, when that decodes to something non-empty. Anything else
/// returns None and the href is used as-is.
fn unwrap_redirect(href: &str, base: Option<&Url>) -> Option<String> {
    if !href.starts_with("/l/?") && !href.contains("uddg=") {
        return None;
    }

    let parsed = match base {
        Some(base) => base.join(href).ok()?,
        None => Url::parse(href).ok()?,
    };

    let (_, value) = parsed
        .query_pairs()
        .find(|(key, _)| key.as_ref() == "uddg")?;

    if value.is_empty() {
        None
    } else {
        Some(value.into_owned())
    }
}

/// Scores a link for ranking: search engine self-links score 0, HTTPS
/// destinations 2, plain HTTP 1, anything else 0
fn link_score(url: &str) -> u8 {
    let Ok(parsed) = Url::parse(url) else {
        return 0;
    };

    if let Some(host) = parsed.host_str() {
        if SEARCH_ENGINE_HOSTS
            .iter()
            .any(|engine| host.contains(engine))
        {
            return 0;
        }
    }

    match parsed.scheme() {
        "https" => 2,
        "http" => 1,
        _ => 0,
    }
}

/// Stable descending sort by score; ties keep their first-seen order
fn rank_results(results: &mut [SearchResult]) {
    results.sort_by_key(|result| std::cmp::Reverse(link_score(&result.url)));
}
