//! Browser module for matcha
//!
//! The sequencing around the core extractors: an HTTP fetcher and the
//! interactive omnibar session that wires fetching, extraction, and
//! pagination together.

mod fetcher;
mod session;

pub use fetcher::{build_http_client, fetch_page, FetchedPage};
pub use session::{parse_command, render_page, Command, Session};
