pub mod render;
pub mod text;

/// What a view node draws as
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewKind {
    /// Grouping node; `class` names its role (card, grid, section)
    Container,
    Heading(u8),
    Paragraph,
    /// Inline text that is not a paragraph (captions, badges)
    Text,
    Link { href: String },
    /// Icon-font class name carried in `text`, e.g. "fab fa-github"
    Icon,
    Image { src: String },
    /// Embedded or direct video; `text` is its title
    Video { src: String },
    /// Collapsible item: first child is the body, `text` is the header
    AccordionItem { index: usize, open: bool },
}

/// Node of a rendered page. Trees are rebuilt on every render and never
/// patched in place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewNode {
    pub kind: ViewKind,
    pub class: &'static str,
    pub text: String,
    pub children: Vec<ViewNode>,
}

impl ViewNode {
    pub fn container(class: &'static str, children: Vec<ViewNode>) -> Self {
        Self {
            kind: ViewKind::Container,
            class,
            text: String::new(),
            children,
        }
    }

    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Self::leaf(ViewKind::Heading(level), "", text)
    }

    pub fn paragraph(class: &'static str, text: impl Into<String>) -> Self {
        Self::leaf(ViewKind::Paragraph, class, text)
    }

    pub fn text(class: &'static str, text: impl Into<String>) -> Self {
        Self::leaf(ViewKind::Text, class, text)
    }

    pub fn link(class: &'static str, href: impl Into<String>, text: impl Into<String>) -> Self {
        Self::leaf(ViewKind::Link { href: href.into() }, class, text)
    }

    pub fn icon(name: impl Into<String>) -> Self {
        Self::leaf(ViewKind::Icon, "icon", name)
    }

    pub fn image(class: &'static str, src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::leaf(ViewKind::Image { src: src.into() }, class, alt)
    }

    pub fn video(src: impl Into<String>, title: impl Into<String>) -> Self {
        Self::leaf(ViewKind::Video { src: src.into() }, "video", title)
    }

    pub fn accordion_item(
        index: usize,
        open: bool,
        header: impl Into<String>,
        body: ViewNode,
    ) -> Self {
        Self {
            kind: ViewKind::AccordionItem { index, open },
            class: "accordion-item",
            text: header.into(),
            children: vec![body],
        }
    }

    fn leaf(kind: ViewKind, class: &'static str, text: impl Into<String>) -> Self {
        Self {
            kind,
            class,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Attach children to an existing node.
    pub fn with_children(mut self, children: Vec<ViewNode>) -> Self {
        self.children = children;
        self
    }

    /// Recursively count all nodes in this subtree
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(|c| c.node_count()).sum::<usize>()
    }

    /// Collect all text content recursively, icons excluded
    pub fn collect_text(&self) -> String {
        let mut buf = String::new();
        self.collect_text_inner(&mut buf);
        buf
    }

    fn collect_text_inner(&self, buf: &mut String) {
        if !self.text.is_empty() && self.kind != ViewKind::Icon {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(self.text.trim());
        }
        for child in &self.children {
            child.collect_text_inner(buf);
        }
    }

    /// First node in depth-first order with the given class
    pub fn find_class(&self, class: &str) -> Option<&ViewNode> {
        if self.class == class {
            return Some(self);
        }
        self.children.iter().find_map(|c| c.find_class(class))
    }

    /// All nodes with the given class, depth-first
    pub fn find_all_class<'a>(&'a self, class: &str) -> Vec<&'a ViewNode> {
        let mut out = Vec::new();
        collect_class(self, class, &mut out);
        out
    }

    /// Link targets in this subtree, depth-first
    pub fn links(&self) -> Vec<&str> {
        let mut out = Vec::new();
        collect_links(self, &mut out);
        out
    }
}

fn collect_class<'a>(node: &'a ViewNode, class: &str, out: &mut Vec<&'a ViewNode>) {
    if node.class == class {
        out.push(node);
    }
    for child in &node.children {
        collect_class(child, class, out);
    }
}

fn collect_links<'a>(node: &'a ViewNode, out: &mut Vec<&'a str>) {
    if let ViewKind::Link { href } = &node.kind {
        out.push(href.as_str());
    }
    for child in &node.children {
        collect_links(child, out);
    }
}

/// Indented plain-text outline of a view tree, used by `--dump`.
/// Closed accordion bodies are left out, matching what is visible.
pub fn outline(node: &ViewNode) -> String {
    let mut out = String::new();
    outline_inner(node, 0, &mut out);
    out
}

fn outline_inner(node: &ViewNode, depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);
    let line = match &node.kind {
        ViewKind::Container => Some(format!("[{}]", node.class)),
        ViewKind::Heading(level) => Some(format!("{} {}", "#".repeat(*level as usize), node.text)),
        ViewKind::Paragraph | ViewKind::Text => {
            Some(node.text.replace('\n', &format!("\n{}", indent)))
        }
        ViewKind::Link { href } => Some(format!("-> {} <{}>", node.text, href)),
        ViewKind::Icon => None,
        ViewKind::Image { src } => Some(format!("image: {} <{}>", node.text, src)),
        ViewKind::Video { src } => Some(format!("video: {} <{}>", node.text, src)),
        ViewKind::AccordionItem { open, .. } => {
            Some(format!("{} {}", if *open { "v" } else { ">" }, node.text))
        }
    };
    if let Some(line) = line {
        out.push_str(&indent);
        out.push_str(&line);
        out.push('\n');
    }

    if let ViewKind::AccordionItem { open: false, .. } = node.kind {
        return;
    }
    for child in &node.children {
        outline_inner(child, depth + 1, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ViewNode {
        ViewNode::container(
            "card",
            vec![
                ViewNode::heading(3, "Title"),
                ViewNode::icon("fab fa-github"),
                ViewNode::link("project-link", "https://example.com", "Visit"),
                ViewNode::accordion_item(
                    0,
                    false,
                    "Closed",
                    ViewNode::paragraph("", "hidden body"),
                ),
            ],
        )
    }

    #[test]
    fn counts_and_collects() {
        let node = sample();
        assert_eq!(node.node_count(), 6);
        let text = node.collect_text();
        assert!(text.contains("Title"));
        assert!(text.contains("Visit"));
        assert!(!text.contains("fa-github"));
    }

    #[test]
    fn finds_by_class_and_links() {
        let node = sample();
        assert!(node.find_class("project-link").is_some());
        assert!(node.find_class("nope").is_none());
        assert_eq!(node.links(), vec!["https://example.com"]);
    }

    #[test]
    fn outline_hides_closed_accordion_bodies() {
        let text = outline(&sample());
        assert!(text.contains("### Title"));
        assert!(text.contains("> Closed"));
        assert!(!text.contains("hidden body"));
    }
}
