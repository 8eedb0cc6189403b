//! Documentation text extraction using Markdown parsing
//!
//! Converts Markdown into plain text suitable for downstream analysis:
//! - Renders the document to HTML
//! - Drops code blocks and inline code spans
//! - Concatenates the remaining text nodes in document order

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use once_cell::sync::Lazy;
use pulldown_cmark::{html, Options, Parser};
use regex::Regex;

/// Fenced and indented code blocks, possibly spanning many lines
static PRE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)<pre>(.*?)</pre>").unwrap());

/// Inline code spans; the closing tag may carry trailing whitespace
static INLINE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)<code>(.*?)</code\s*>").unwrap());

/// Convert a Markdown document to plain text
///
/// Code is removed entirely: every `<pre>` block and `<code>` span in the
/// rendered HTML is replaced by a single space before text collection.
pub fn markdown_to_text(markdown: &str) -> String {
    let html = render_html(markdown);
    let html = strip_code(&html);
    collect_text(&html)
}

/// Render Markdown to an HTML fragment
pub fn render_html(markdown: &str) -> String {
    let parser = Parser::new_ext(markdown, Options::empty());
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

/// Replace code blocks and inline code spans with a single space
pub fn strip_code(html: &str) -> String {
    let without_blocks = PRE_BLOCK.replace_all(html, " ");
    INLINE_CODE.replace_all(&without_blocks, " ").into_owned()
}

/// Parse HTML and concatenate all text nodes in document order
pub fn collect_text(html: &str) -> String {
    // Opening in body mode keeps leading whitespace as text
    let html = format!("<body>{}", html);
    let dom = parse_document(RcDom::default(), Default::default()).one(html.as_str());

    let mut text = String::new();
    let mut stack: Vec<Handle> = vec![dom.document.clone()];

    while let Some(node) = stack.pop() {
        if let NodeData::Text { ref contents } = node.data {
            text.push_str(&contents.borrow());
        }

        // Reverse so the first child is visited next
        for child in node.children.borrow().iter().rev() {
            stack.push(child.clone());
        }
    }

    text
}
