//! Host page abstraction.
//!
//! The gallery only needs two things from its surroundings: element lookup
//! by CSS selector and atomic replacement of that element's content. The
//! [`Page`] trait captures exactly that, and [`StaticPage`] is the bundled
//! implementation over an in-memory HTML document. A host application with
//! a real DOM can supply its own implementation instead.

use std::collections::HashMap;

use scraper::{Html, Node, Selector};

use crate::markup::escape_html;
use crate::{Error, Result};

/// Elements that never carry content and take no closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Elements whose text children are emitted verbatim.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

/// Minimal page surface the renderer writes to.
pub trait Page {
    /// Whether the selector matches at least one element.
    fn has_element(&self, selector: &str) -> bool;

    /// Replaces the content of the first element matching `selector` in one
    /// step. A selector with no match is a no-op.
    fn set_content(&mut self, selector: &str, html: &str);

    /// Current content of the first element matching `selector`.
    fn content(&self, selector: &str) -> Option<String>;
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector)
        .map_err(|e| Error::PageError(format!("Invalid selector {:?}: {:?}", selector, e)))
}

/// An HTML document held in memory, with per-selector content overrides.
///
/// The original document text is kept as parsed; replaced regions are
/// stored aside and spliced in when the document is serialized, so a
/// replacement is atomic and repeatable.
pub struct StaticPage {
    document: Html,
    overrides: HashMap<String, String>,
}

impl StaticPage {
    /// Parses a full HTML document.
    pub fn new(html: &str) -> Self {
        Self {
            document: Html::parse_document(html),
            overrides: HashMap::new(),
        }
    }

    /// Reads and parses a document from disk.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let html = std::fs::read_to_string(path)
            .map_err(|e| Error::PageError(format!("Failed to read {}: {}", path.display(), e)))?;
        Ok(Self::new(&html))
    }

    /// Serializes the document with all content overrides applied.
    ///
    /// Output is the parser's normalized form of the input, not a
    /// byte-for-byte copy of the original text.
    pub fn to_html(&self) -> String {
        // Resolve each override selector to its target node id up front.
        let mut targets: HashMap<ego_tree::NodeId, &str> = HashMap::new();
        for (selector, content) in &self.overrides {
            if let Ok(parsed) = parse_selector(selector) {
                if let Some(element) = self.document.select(&parsed).next() {
                    targets.insert(element.id(), content.as_str());
                }
            }
        }

        let mut out = String::new();
        serialize_node(&mut out, self.document.tree.root(), &targets, false);
        out
    }
}

impl Page for StaticPage {
    fn has_element(&self, selector: &str) -> bool {
        match parse_selector(selector) {
            Ok(parsed) => self.document.select(&parsed).next().is_some(),
            Err(e) => {
                log::debug!("{}", e);
                false
            }
        }
    }

    fn set_content(&mut self, selector: &str, html: &str) {
        if !self.has_element(selector) {
            log::debug!("set_content: no element matches {:?}", selector);
            return;
        }
        self.overrides.insert(selector.to_string(), html.to_string());
    }

    fn content(&self, selector: &str) -> Option<String> {
        if let Some(content) = self.overrides.get(selector) {
            return Some(content.clone());
        }
        let parsed = parse_selector(selector).ok()?;
        self.document
            .select(&parsed)
            .next()
            .map(|element| element.inner_html())
    }
}

fn serialize_node(
    out: &mut String,
    node: ego_tree::NodeRef<'_, Node>,
    targets: &HashMap<ego_tree::NodeId, &str>,
    raw_text: bool,
) {
    match node.value() {
        Node::Document | Node::Fragment => {
            for child in node.children() {
                serialize_node(out, child, targets, false);
            }
        }
        Node::Doctype(doctype) => {
            out.push_str("<!DOCTYPE ");
            out.push_str(&doctype.name());
            out.push('>');
        }
        Node::Comment(comment) => {
            out.push_str("<!--");
            out.push_str(comment);
            out.push_str("-->");
        }
        Node::Text(text) => {
            if raw_text {
                out.push_str(text);
            } else {
                out.push_str(&escape_html(text));
            }
        }
        Node::Element(element) => {
            let name = element.name();
            out.push('<');
            out.push_str(name);
            for (key, value) in element.attrs() {
                out.push(' ');
                out.push_str(key);
                out.push_str("=\"");
                out.push_str(&escape_html(value));
                out.push('"');
            }
            out.push('>');

            if VOID_ELEMENTS.contains(&name) {
                return;
            }

            if let Some(replacement) = targets.get(&node.id()) {
                out.push_str(replacement);
            } else {
                let raw = RAW_TEXT_ELEMENTS.contains(&name);
                for child in node.children() {
                    serialize_node(out, child, targets, raw);
                }
            }

            out.push_str("</");
            out.push_str(name);
            out.push('>');
        }
        Node::ProcessingInstruction(_) => {}
    }
}
