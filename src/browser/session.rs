//! Interactive omnibar session
//!
//! The read-dispatch loop of the browser: one prompt, six kinds of input.
//! URL-like input fetches a document, anything else becomes a search, and
//! `F`/`B`/`open N` drive the pager over the most recent result set.
//! Everything user-facing is printed in green; errors go to stderr and
//! never end the session.

use crate::browser::fetcher::{build_http_client, fetch_page};
use crate::config::Config;
use crate::extract::{extract_results, extract_text, extract_title};
use crate::pager::{PageView, ResultPager};
use crate::urls::{ensure_scheme, is_url_like};
use crate::{ConfigError, MatchaError};
use scraper::Html;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};
use url::form_urlencoded;

const GREEN: &str = "\x1b[32m";
const RESET: &str = "\x1b[0m";

/// Rendered document text is cut off after this many characters
const MAX_RENDERED_CHARS: usize = 20_000;

/// One line of omnibar input, parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `exit` or `quit`
    Quit,

    /// `F`: next result page
    Forward,

    /// `B`: previous result page
    Back,

    /// `open N`: open the Nth result on the current page
    Open(usize),

    /// An `open` with a missing or non-positive argument
    Usage,

    /// URL-like input: fetch and render the document
    Fetch(String),

    /// Anything else: run a search
    Search(String),
}

/// Parses one line of omnibar input; None for blank lines
pub fn parse_command(input: &str) -> Option<Command> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let lower = input.to_lowercase();
    if lower == "exit" || lower == "quit" {
        return Some(Command::Quit);
    }
    if lower == "f" {
        return Some(Command::Forward);
    }
    if lower == "b" {
        return Some(Command::Back);
    }

    let parts: Vec<&str> = input.split_whitespace().collect();
    if parts.len() == 2 && parts[0].eq_ignore_ascii_case("open") {
        return match parts[1].parse::<usize>() {
            Ok(n) if n > 0 => Some(Command::Open(n)),
            _ => Some(Command::Usage),
        };
    }

    if is_url_like(input) {
        return Some(Command::Fetch(ensure_scheme(input)));
    }

    Some(Command::Search(input.to_string()))
}

/// Renders one page of search results with its header and navigation tips
pub fn render_page(view: &PageView<'_>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{GREEN}Search results — Page {}/{}  (showing results {}..{} of {})\n{RESET}\n",
        view.page + 1,
        view.last_page + 1,
        view.start,
        view.end,
        view.total,
    ));

    for (row, result) in view.items.iter().enumerate() {
        out.push_str(&format!(
            "{GREEN}{}) {}\n   {}\n{RESET}\n",
            row + 1,
            result.title,
            result.url,
        ));
    }

    let mut tips = vec!["Type 'open N' to open the Nth item on this page."];
    if view.page > 0 {
        tips.push("B to go Back");
    }
    if view.page < view.last_page {
        tips.push("F to go Forward");
    }
    tips.push("Or paste a URL at the omnibar.");
    out.push_str(&format!("{GREEN}{}{RESET}\n", tips.join(" | ")));

    out
}

/// An interactive browsing session: owns the HTTP client, configuration,
/// and the pager over the most recent search
pub struct Session {
    client: reqwest::Client,
    config: Config,
    origin: String,
    pager: ResultPager,
}

impl Session {
    /// Builds a session from a validated configuration
    pub fn new(config: Config) -> Result<Self, MatchaError> {
        let client = build_http_client(&config.fetch)?;
        // Validation guarantees the engine URL has a real origin
        let origin = config.search.origin().ok_or_else(|| {
            ConfigError::Validation("search.engine-url has no usable origin".to_string())
        })?;

        Ok(Self {
            client,
            config,
            origin,
            pager: ResultPager::new(),
        })
    }

    /// Runs the omnibar loop until EOF or an exit command
    pub async fn run(&mut self) -> Result<(), MatchaError> {
        print_header();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("{GREEN}omnibar> {RESET}");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                println!("\nbye.");
                return Ok(());
            };

            match parse_command(&line) {
                None => continue,
                Some(Command::Quit) => {
                    println!("Goodbye.");
                    return Ok(());
                }
                Some(Command::Forward) => self.page_forward(),
                Some(Command::Back) => self.page_back(),
                Some(Command::Usage) => {
                    eprintln!("Usage: open <N>   (N must be a positive integer)");
                }
                Some(Command::Open(n)) => {
                    if let Err(e) = self.open_result(n).await {
                        eprintln!("open error: {e}");
                    }
                }
                Some(Command::Fetch(url)) => {
                    if let Err(e) = self.fetch_document(&url).await {
                        eprintln!("fetch error: {e}");
                    }
                }
                Some(Command::Search(query)) => {
                    if let Err(e) = self.search(&query).await {
                        eprintln!("search error: {e}");
                    }
                }
            }
        }
    }

    fn page_forward(&mut self) {
        match self.pager.forward() {
            Ok(view) => println!("\n{}", render_page(&view)),
            Err(e) => eprintln!("{e}"),
        }
    }

    fn page_back(&mut self) {
        match self.pager.back() {
            Ok(view) => println!("\n{}", render_page(&view)),
            Err(e) => eprintln!("{e}"),
        }
    }

    async fn open_result(&mut self, n: usize) -> Result<(), MatchaError> {
        let target = ensure_scheme(&self.pager.resolve_index(n)?.url);
        self.fetch_document(&target).await
    }

    /// Fetches a document and renders it as green plain text
    async fn fetch_document(&mut self, url: &str) -> Result<(), MatchaError> {
        println!("\n{GREEN}Fetching: {url}{RESET}");
        tracing::info!("fetching {}", url);

        let page = fetch_page(
            &self.client,
            url,
            self.config.fetch.max_page_bytes,
        )
        .await?;

        println!("{GREEN}HTTP {}\n{RESET}", page.status);

        let document = Html::parse_document(&page.body);

        if let Some(title) = extract_title(&document) {
            println!("{GREEN}Title: {RESET}{title}\n");
        }

        let text = extract_text(&document);
        println!("{GREEN}{}{RESET}\n", truncate_for_display(&text));
        Ok(())
    }

    /// Runs a search, loads the pager, and prints the first page
    async fn search(&mut self, query: &str) -> Result<(), MatchaError> {
        println!("\n{GREEN}Searching for: {RESET}{query}");

        let escaped: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        let search_url = format!("{}{}", self.config.search.engine_url, escaped);
        tracing::info!("search request to {}", search_url);

        let page = fetch_page(
            &self.client,
            &search_url,
            self.config.fetch.max_search_bytes,
        )
        .await?;

        if page.status != 200 {
            return Err(MatchaError::HttpStatus {
                url: search_url,
                status: page.status,
            });
        }

        let document = Html::parse_document(&page.body);
        let results = extract_results(&document, &self.origin, self.config.search.max_results);
        tracing::debug!("extracted {} results", results.len());

        if results.is_empty() {
            self.pager.load(Vec::new());
            println!("{GREEN}[no results found]{RESET}");
            return Ok(());
        }

        self.pager.load(results);
        println!("\n{}", render_page(&self.pager.current_slice()?));
        Ok(())
    }
}

fn print_header() {
    println!("{GREEN}matcha — omnibar (enter URL or search). Type 'exit' to quit.{RESET}");
    println!("{GREEN}Search results are paginated: 10 rows per page. Use 'F' for forward, 'B' for back.{RESET}");
    println!("{GREEN}Use 'open N' to open the Nth result on the current page.{RESET}");
    println!();
}

/// Cuts rendered text at the display cap, on a character boundary
fn truncate_for_display(text: &str) -> String {
    match text.char_indices().nth(MAX_RENDERED_CHARS) {
        Some((cut, _)) => format!("{}\n\n[output truncated]", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::SearchResult;

    #[test]
    fn test_parse_quit_commands() {
        assert_eq!(parse_command("exit"), Some(Command::Quit));
        assert_eq!(parse_command("QUIT"), Some(Command::Quit));
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!(parse_command("f"), Some(Command::Forward));
        assert_eq!(parse_command("F"), Some(Command::Forward));
        assert_eq!(parse_command("b"), Some(Command::Back));
        assert_eq!(parse_command("B"), Some(Command::Back));
    }

    #[test]
    fn test_parse_open() {
        assert_eq!(parse_command("open 3"), Some(Command::Open(3)));
        assert_eq!(parse_command("OPEN 10"), Some(Command::Open(10)));
    }

    #[test]
    fn test_parse_open_bad_argument() {
        assert_eq!(parse_command("open zero"), Some(Command::Usage));
        assert_eq!(parse_command("open 0"), Some(Command::Usage));
        assert_eq!(parse_command("open -2"), Some(Command::Usage));
    }

    #[test]
    fn test_parse_blank_line() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
    }

    #[test]
    fn test_url_like_input_becomes_fetch() {
        assert_eq!(
            parse_command("example.com"),
            Some(Command::Fetch("http://example.com".to_string()))
        );
        assert_eq!(
            parse_command("https://example.com/x"),
            Some(Command::Fetch("https://example.com/x".to_string()))
        );
    }

    #[test]
    fn test_everything_else_becomes_search() {
        assert_eq!(
            parse_command("rust pagination engine"),
            Some(Command::Search("rust pagination engine".to_string()))
        );
        // "open" with the wrong arity is a search, same as the original
        assert_eq!(
            parse_command("open the pod bay doors"),
            Some(Command::Search("open the pod bay doors".to_string()))
        );
    }

    #[test]
    fn test_render_page_shows_bounds_and_rows() {
        let results: Vec<SearchResult> = (0..25)
            .map(|i| SearchResult {
                title: format!("title {i}"),
                url: format!("https://example.com/{i}"),
            })
            .collect();
        let mut pager = ResultPager::new();
        pager.load(results);
        pager.forward().unwrap();

        let rendered = render_page(&pager.current_slice().unwrap());
        assert!(rendered.contains("Page 2/3"));
        assert!(rendered.contains("showing results 11..20 of 25"));
        assert!(rendered.contains("1) title 10"));
        assert!(rendered.contains("10) title 19"));
        assert!(rendered.contains("B to go Back"));
        assert!(rendered.contains("F to go Forward"));
    }

    #[test]
    fn test_render_first_page_has_no_back_tip() {
        let results = vec![SearchResult {
            title: "only".to_string(),
            url: "https://example.com/".to_string(),
        }];
        let mut pager = ResultPager::new();
        pager.load(results);

        let rendered = render_page(&pager.current_slice().unwrap());
        assert!(!rendered.contains("B to go Back"));
        assert!(!rendered.contains("F to go Forward"));
    }

    #[test]
    fn test_truncate_for_display_respects_char_boundaries() {
        let text = "é".repeat(MAX_RENDERED_CHARS + 5);
        let cut = truncate_for_display(&text);
        assert!(cut.ends_with("[output truncated]"));
        assert_eq!(cut.chars().filter(|&c| c == 'é').count(), MAX_RENDERED_CHARS);
    }

    #[test]
    fn test_truncate_for_display_leaves_short_text() {
        assert_eq!(truncate_for_display("short"), "short");
    }
}
