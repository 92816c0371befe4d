//! Content extraction module for matcha
//!
//! This module turns parsed HTML trees into display-ready data: plain text
//! for single documents and title/URL pairs for search-result pages. It
//! only reads the tree the parser built; nothing here mutates the DOM.

mod results;
mod text;

pub use results::{extract_results, SearchResult, RESULT_CAP};
pub use text::{extract_text, extract_title, strip_tags, text_from_html};
