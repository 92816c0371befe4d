//! HTML-to-text conversion
//!
//! This module renders a parsed document as readable plain text. Script,
//! style and similar subtrees are dropped entirely, block-level elements
//! become line breaks, and adjacent inline text nodes are joined with a
//! single space. A character-level tag stripper is kept as the fallback
//! for callers that never obtained a tree.

use ego_tree::NodeRef;
use scraper::{Html, Node, Selector};

/// Tags whose entire subtree is excluded from text output
const SKIP_TAGS: &[&str] = &["script", "style", "noscript", "iframe", "svg"];

/// Tags that separate blocks of text with a line break
const BLOCK_TAGS: &[&str] = &[
    "p", "div", "section", "article", "header", "footer", "aside", "h1", "h2", "h3", "h4", "h5",
    "h6", "br", "li", "tr", "table",
];

/// Converts a parsed HTML document into readable plain text
///
/// Traversal starts at the first `<body>` element when one exists,
/// otherwise at the document root. Block-level tags contribute line
/// breaks (never more than one in a row), inline text is joined with
/// single spaces, and the skip-tag subtrees contribute nothing at all.
/// Entity decoding already happened during parsing.
///
/// # Example
///
/// ```
/// use scraper::Html;
/// use matcha::extract_text;
///
/// let document = Html::parse_document("<body><p>A</p><p>B</p></body>");
/// assert_eq!(extract_text(&document), "A\nB");
/// ```
pub fn extract_text(document: &Html) -> String {
    let mut out = String::new();

    let body = Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next());

    match body {
        Some(element) => render(*element, &mut out),
        None => render(document.tree.root(), &mut out),
    }

    tidy(out)
}

/// Parses raw HTML and extracts its text
///
/// Never fails: html5ever recovers from arbitrary input, so the tree path
/// is total. Callers that have no parser at all can use [`strip_tags`]
/// instead.
pub fn text_from_html(raw: &str) -> String {
    extract_text(&Html::parse_document(raw))
}

/// Extracts the first non-empty `<title>` text from the document
pub fn extract_title(document: &Html) -> Option<String> {
    let selector = Selector::parse("title").ok()?;

    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty())
}

/// Depth-first renderer over one node
fn render(node: NodeRef<'_, Node>, out: &mut String) {
    match node.value() {
        Node::Text(text) => {
            let text = text.text.trim();
            if !text.is_empty() {
                if let Some(last) = out.chars().last() {
                    if last != '\n' && last != ' ' {
                        out.push(' ');
                    }
                }
                out.push_str(text);
            }
        }
        Node::Element(element) => {
            let tag = element.name();
            if SKIP_TAGS.contains(&tag) {
                return;
            }

            let block = BLOCK_TAGS.contains(&tag);
            if block {
                push_block_break(out);
            }

            for child in node.children() {
                render(child, out);
            }

            // <br> is a line break on its own; it gets no closing break
            if block && tag != "br" {
                push_block_break(out);
            }
        }
        // The document node and fragments are transparent wrappers
        Node::Document | Node::Fragment => {
            for child in node.children() {
                render(child, out);
            }
        }
        // Comments, doctypes and processing instructions contribute nothing
        _ => {}
    }
}

/// Appends a line break unless the buffer is empty or already ends in one
fn push_block_break(out: &mut String) {
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
}

/// Final cleanup: CRLF normalization, paragraph-spacing collapse, edge trim
fn tidy(mut text: String) -> String {
    if text.contains("\r\n") {
        text = text.replace("\r\n", "\n");
    }

    while text.contains("\n\n\n") {
        text = text.replace("\n\n\n", "\n\n");
    }

    text.trim().to_string()
}

/// Strips markup from raw HTML without parsing it
///
/// Scans character by character, tracking an inside-tag flag that turns on
/// at `<` and off at `>`, then decodes HTML entities in whatever is left.
/// This is the guaranteed-output fallback for malformed input: it never
/// fails, at the cost of none of the block-structure niceties of
/// [`extract_text`].
pub fn strip_tags(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut in_tag = false;

    for c in raw.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => out.push(c),
            _ => {}
        }
    }

    decode_entities(&out)
}

/// Decodes the common named HTML entities and all numeric character
/// references
///
/// Only used on the no-parser path; html5ever handles entities when a
/// real tree is built. Unknown entities are passed through untouched.
fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(pos) = rest.find('&') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        // Entity names are short; give up quickly when no ';' is close by
        let end = tail[1..]
            .char_indices()
            .take(32)
            .find(|&(_, c)| c == ';')
            .map(|(i, _)| i);

        match end.and_then(|i| decode_entity(&tail[1..1 + i]).map(|c| (i, c))) {
            Some((i, decoded)) => {
                out.push(decoded);
                rest = &tail[i + 2..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    if let Some(number) = name.strip_prefix('#') {
        let code = match number.strip_prefix(['x', 'X']) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => number.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }

    let c = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        "copy" => '\u{a9}',
        "reg" => '\u{ae}',
        "trade" => '\u{2122}',
        _ => return None,
    };
    Some(c)
}
