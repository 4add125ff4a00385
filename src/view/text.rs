//! Inline markup in content strings.
//!
//! Content documents sometimes carry `<br>` or `<strong>` inside text
//! fields. The painter draws plain text, so fragments are flattened here.

use scraper::{ElementRef, Html, Node};

/// Tags that end a line when flattened.
const LINE_BREAKING: &[&str] = &["br", "p", "div", "li", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Tags whose content is dropped entirely.
const SKIP_CHILDREN: &[&str] = &["script", "style", "noscript"];

/// Flatten an HTML fragment to plain text. Whitespace runs collapse to one
/// space, line-breaking tags become '\n', and lines are trimmed.
pub fn plain_text(fragment: &str) -> String {
    if !fragment.contains('<') && !fragment.contains('&') {
        return collapse(fragment);
    }

    let html = Html::parse_fragment(fragment);
    let mut raw = String::new();
    walk(html.root_element(), &mut raw);
    collapse(&raw)
}

fn walk(el: ElementRef<'_>, out: &mut String) {
    for child in el.children() {
        match child.value() {
            Node::Text(t) => out.push_str(&t.text),
            Node::Element(_) => {
                if let Some(child_el) = ElementRef::wrap(child) {
                    let tag = child_el.value().name();
                    if SKIP_CHILDREN.contains(&tag) {
                        continue;
                    }
                    walk(child_el, out);
                    if LINE_BREAKING.contains(&tag) {
                        out.push('\n');
                    }
                }
            }
            _ => {}
        }
    }
}

fn collapse(text: &str) -> String {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_strings_pass_through() {
        assert_eq!(plain_text("  Hello   world "), "Hello world");
    }

    #[test]
    fn strips_inline_tags() {
        assert_eq!(plain_text("I build <strong>fast</strong> things"), "I build fast things");
    }

    #[test]
    fn br_becomes_newline() {
        assert_eq!(plain_text("first<br>second<br/>third"), "first\nsecond\nthird");
    }

    #[test]
    fn decodes_entities_and_drops_scripts() {
        assert_eq!(plain_text("R&amp;D<script>alert(1)</script>"), "R&D");
    }
}
