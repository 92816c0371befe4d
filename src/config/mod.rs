//! Configuration module for matcha
//!
//! Matcha runs fine with no configuration file at all; every setting has a
//! default matching the stock terminal-browser behavior. A TOML file can
//! override the fetch limits and the search engine endpoint.

mod parser;
mod types;

pub use parser::{load_config, load_config_or_default};
pub use types::{Config, FetchConfig, SearchConfig};
