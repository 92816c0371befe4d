//! Pagination engine for search results
//!
//! A [`ResultPager`] owns the most recently loaded result sequence and a
//! zero-based page cursor over fixed ten-row windows. Loading a new
//! sequence replaces the old one wholesale; there is no history of prior
//! sets. All navigation failures are recoverable conditions reported to
//! the caller, and a failed operation never moves the cursor.

use crate::extract::SearchResult;
use thiserror::Error;

/// Rows per page
pub const PAGE_SIZE: usize = 10;

/// Recoverable pagination failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PagerError {
    #[error("No search results to navigate. Run a search first.")]
    Empty,

    #[error("Already on the first page. Cannot go back.")]
    AtFirstPage,

    #[error("Already on the last page. Cannot go forward.")]
    AtLastPage,

    #[error(
        "Invalid choice. On this page choose N between 1 and {max} \
         (showing results {start}..{end} of {total})."
    )]
    OutOfRange {
        /// Number of items on the current page; valid choices are 1..=max
        max: usize,
        /// 1-based global index of the first item on the current page
        start: usize,
        /// 1-based global index of the last item on the current page
        end: usize,
        /// Total number of loaded results
        total: usize,
    },
}

/// One page of results, ready for rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView<'a> {
    /// The results in the current window, at most [`PAGE_SIZE`] of them
    pub items: &'a [SearchResult],

    /// Zero-based index of the current page
    pub page: usize,

    /// Zero-based index of the last page
    pub last_page: usize,

    /// 1-based global index of the first item shown
    pub start: usize,

    /// 1-based global index of the last item shown
    pub end: usize,

    /// Total number of loaded results
    pub total: usize,
}

/// Holds the current result set and page cursor for one session
///
/// # Example
///
/// ```
/// use matcha::{ResultPager, SearchResult};
///
/// let results = (0..25)
///     .map(|i| SearchResult {
///         title: format!("result {i}"),
///         url: format!("https://example.com/{i}"),
///     })
///     .collect();
///
/// let mut pager = ResultPager::new();
/// pager.load(results);
///
/// let view = pager.forward().unwrap();
/// assert_eq!(view.page, 1);
/// assert_eq!((view.start, view.end), (11, 20));
/// assert_eq!(pager.resolve_index(3).unwrap().title, "result 12");
/// ```
#[derive(Debug, Default)]
pub struct ResultPager {
    results: Vec<SearchResult>,
    page: usize,
}

impl ResultPager {
    /// Creates an empty pager; every navigation op fails until a
    /// non-empty set is loaded
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the result set and resets the cursor to the first page
    ///
    /// Loading an empty sequence is allowed; callers should report it as
    /// "no results" rather than paginate it.
    pub fn load(&mut self, results: Vec<SearchResult>) {
        self.results = results;
        self.page = 0;
    }

    /// Returns true when no results are loaded
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Number of loaded results
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Zero-based index of the current page
    pub fn current_page(&self) -> usize {
        self.page
    }

    fn last_page(&self) -> usize {
        // Only meaningful for a non-empty set
        (self.results.len().saturating_sub(1)) / PAGE_SIZE
    }

    /// Returns the current page's window
    pub fn current_slice(&self) -> Result<PageView<'_>, PagerError> {
        if self.results.is_empty() {
            return Err(PagerError::Empty);
        }

        let start = self.page * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(self.results.len());

        Ok(PageView {
            items: &self.results[start..end],
            page: self.page,
            last_page: self.last_page(),
            start: start + 1,
            end,
            total: self.results.len(),
        })
    }

    /// Advances one page and returns the new window
    ///
    /// Fails without moving the cursor when already on the last page or
    /// when nothing is loaded.
    pub fn forward(&mut self) -> Result<PageView<'_>, PagerError> {
        if self.results.is_empty() {
            return Err(PagerError::Empty);
        }
        if self.page >= self.last_page() {
            return Err(PagerError::AtLastPage);
        }

        self.page += 1;
        self.current_slice()
    }

    /// Steps back one page and returns the new window
    ///
    /// Fails without moving the cursor when already on the first page or
    /// when nothing is loaded.
    pub fn back(&mut self) -> Result<PageView<'_>, PagerError> {
        if self.results.is_empty() {
            return Err(PagerError::Empty);
        }
        if self.page == 0 {
            return Err(PagerError::AtFirstPage);
        }

        self.page -= 1;
        self.current_slice()
    }

    /// Resolves a 1-based row number on the current page to its result
    ///
    /// `n` counts within the window the user is looking at, so `open 3`
    /// on page two addresses the thirteenth result overall. Out-of-range
    /// requests fail with the page's valid bounds for a precise hint.
    pub fn resolve_index(&self, n: usize) -> Result<&SearchResult, PagerError> {
        let view = self.current_slice()?;

        if n == 0 || n > view.items.len() {
            return Err(PagerError::OutOfRange {
                max: view.items.len(),
                start: view.start,
                end: view.end,
                total: view.total,
            });
        }

        let global = self.page * PAGE_SIZE + (n - 1);
        Ok(&self.results[global])
    }
}
