//! Step markup handling
//!
//! The backend may wrap part of a step in a single `<strong>` pair. Rendering
//! keeps exactly that emphasis and escapes everything else; plain-text
//! derivation drops the emphasis tags.

use once_cell::sync::Lazy;
use regex::Regex;

static EMPHASIS_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)<(/?)strong>").expect("emphasis pattern is valid"));

/// Render a service-provided step as an HTML fragment.
///
/// Only bare `<strong>` / `</strong>` survive, without nesting; an unclosed
/// emphasis is closed at the end of the fragment. All other markup is
/// entity-escaped.
pub fn sanitize_step(raw: &str) -> String {
    let mut html = String::with_capacity(raw.len());
    let mut emphasis_open = false;
    let mut cursor = 0;

    for captures in EMPHASIS_TAG.captures_iter(raw) {
        let Some(tag) = captures.get(0) else {
            continue;
        };
        html.push_str(&escape_html(&raw[cursor..tag.start()]));
        cursor = tag.end();

        let closing = captures.get(1).is_some_and(|slash| !slash.as_str().is_empty());
        match (closing, emphasis_open) {
            (false, false) => {
                html.push_str("<strong>");
                emphasis_open = true;
            }
            (true, true) => {
                html.push_str("</strong>");
                emphasis_open = false;
            }
            // Nested opening or stray closing tag
            _ => html.push_str(&escape_html(tag.as_str())),
        }
    }

    html.push_str(&escape_html(&raw[cursor..]));
    if emphasis_open {
        html.push_str("</strong>");
    }
    html
}

/// Remove emphasis tags, leaving everything else untouched
pub fn strip_emphasis(raw: &str) -> String {
    EMPHASIS_TAG.replace_all(raw, "").into_owned()
}

/// Escape the five HTML-significant characters
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}

/// Flatten an HTML fragment to readable text for terminal output.
///
/// Tags are dropped, block elements become line breaks, whitespace is
/// normalized and the entities produced by [`escape_html`] are decoded.
pub fn html_to_text(html: &str) -> String {
    let mut result = String::new();
    let mut in_tag = false;
    let mut tag_name = String::new();

    for ch in html.chars() {
        match ch {
            '<' => {
                in_tag = true;
                tag_name.clear();
            }
            '>' if in_tag => {
                let name = tag_name
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_lowercase();
                if matches!(
                    name.as_str(),
                    "p" | "/p" | "br" | "div" | "/div" | "li" | "/li" | "h1" | "/h1" | "h2" | "/h2"
                ) {
                    result.push('\n');
                }
                in_tag = false;
            }
            _ if in_tag => tag_name.push(ch),
            _ if ch.is_whitespace() => {
                if !result.ends_with(' ') && !result.ends_with('\n') {
                    result.push(' ');
                }
            }
            _ => result.push(ch),
        }
    }

    let text = result
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n");
    decode_entities(&text)
}
