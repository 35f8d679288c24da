//! Minimal HTML element builder.
//!
//! Text and attribute values are escaped when they enter an [`Element`];
//! children added with [`Element::child`] are already-rendered markup.

use regex::Regex;
use std::sync::OnceLock;

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn strong_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid regex"))
}

/// Escape `text`, then turn `**run**` into `<strong>run</strong>`.
pub fn inline(text: &str) -> String {
    strong_pattern()
        .replace_all(&escape(text), "<strong>$1</strong>")
        .into_owned()
}

const VOID_TAGS: &[&str] = &["img", "meta", "link", "br"];

#[derive(Debug, Clone)]
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<String>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn attr(mut self, name: &'static str, value: &str) -> Self {
        self.attrs.push((name, escape(value)));
        self
    }

    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    /// Anchor attributes for a link that opens in a new browsing context.
    pub fn external_link(self, href: &str) -> Self {
        self.attr("href", href)
            .attr("target", "_blank")
            .attr("rel", "noopener noreferrer")
    }

    pub fn text(mut self, text: &str) -> Self {
        self.children.push(escape(text));
        self
    }

    pub fn child(mut self, markup: impl Into<String>) -> Self {
        self.children.push(markup.into());
        self
    }

    pub fn children<I>(mut self, markup: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        self.children.extend(markup);
        self
    }

    pub fn render(&self) -> String {
        let mut out = format!("<{}", self.tag);
        for (name, value) in &self.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, value));
        }
        out.push('>');

        if VOID_TAGS.contains(&self.tag) {
            return out;
        }

        for child in &self.children {
            out.push_str(child);
        }
        out.push_str(&format!("</{}>", self.tag));
        out
    }
}

impl From<Element> for String {
    fn from(element: Element) -> Self {
        element.render()
    }
}
