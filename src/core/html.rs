// src/core/html.rs
//
// Visible-text extraction. The document is parsed with `scraper` (html5ever),
// so entities are already decoded and broken markup is tolerated.

use scraper::{Html, Node};

/// Elements whose text never reaches the reader.
const HIDDEN: &[&str] = &["script", "style", "noscript", "template", "head", "svg", "iframe"];

/// Elements that start a new line when rendered. Text on either side of
/// them must not run together; text inside inline elements must.
const BLOCK: &[&str] = &[
    "address", "article", "aside", "blockquote", "body", "br", "caption", "dd", "details", "dialog",
    "div", "dl", "dt", "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4",
    "h5", "h6", "header", "hr", "li", "main", "nav", "ol", "option", "p", "pre", "section",
    "summary", "table", "tbody", "td", "tfoot", "th", "thead", "tr", "ul",
];

fn is_hidden(name: &str) -> bool {
    HIDDEN.iter().any(|h| h.eq_ignore_ascii_case(name))
}

fn is_block(name: &str) -> bool {
    BLOCK.iter().any(|b| b.eq_ignore_ascii_case(name))
}

/// Plain text of every visible text node in document order. Block
/// boundaries become a space, inline markup joins directly.
/// Whitespace is collapsed; punctuation is left for the cleaner.
pub fn extract_text(html: &str) -> String {
    let doc = Html::parse_document(html);
    let mut out = String::with_capacity(html.len() / 4);

    // (node, closing): closing entries mark the end of a block element
    let mut stack = vec![(doc.tree.root(), false)];
    while let Some((node, closing)) = stack.pop() {
        if closing {
            out.push(' ');
            continue;
        }
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if is_hidden(el.name()) => {}
            Node::Element(el) => {
                if is_block(el.name()) {
                    out.push(' ');
                    stack.push((node, true));
                }
                stack.extend(node.children().rev().map(|c| (c, false)));
            }
            Node::Document | Node::Fragment => {
                stack.extend(node.children().rev().map(|c| (c, false)));
            }
            _ => {}
        }
    }

    super::sanitize::normalize_ws(&out)
}

/// `<title>` text, if the page has one.
pub fn page_title(html: &str) -> Option<String> {
    let doc = Html::parse_document(html);
    let sel = scraper::Selector::parse("title").ok()?;
    let title = doc.select(&sel).next()?.text().collect::<String>();
    let title = super::sanitize::normalize_ws(&title);
    if title.is_empty() { None } else { Some(title) }
}
