//! HTML to visible text.
//!
//! Markup is parsed into a DOM with `scraper` (html5ever), so nesting,
//! attributes containing `>`, raw-text elements and character references are
//! handled the way a browser handles them.

use std::collections::HashSet;

use scraper::{ElementRef, Html, Node, Selector};

use super::TextExtractor;
use crate::error::{Result, SeokitError};

/// Elements whose whole subtree is dropped before extraction.
pub const DEFAULT_REMOVED_ELEMENTS: &[&str] = &["script", "style", "nav", "header", "footer"];

/// Elements tried, in order, as the content container.
pub const CONTENT_CONTAINERS: &[&str] = &["main", "article", "body"];

/// Phrasing elements whose text runs on into the surrounding text. Every
/// other element boundary separates words.
const INLINE_ELEMENTS: &[&str] = &[
    "a", "abbr", "b", "bdi", "bdo", "cite", "code", "data", "dfn", "em", "i", "kbd", "mark", "q",
    "s", "samp", "small", "span", "strong", "sub", "sup", "time", "u", "var",
];

/// Extracts the visible body text of an HTML document.
///
/// Comments and the subtrees of navigation, boilerplate and script elements
/// are dropped, the first of `main`, `article` or `body` that is not itself
/// inside a dropped element is used as the content container, and the
/// remaining text nodes are joined with whitespace collapsed.
#[derive(Clone, Debug)]
pub struct HtmlTextExtractor {
    removed: HashSet<String>,
    containers: Vec<Selector>,
}

impl HtmlTextExtractor {
    /// Create an extractor that removes [`DEFAULT_REMOVED_ELEMENTS`].
    pub fn new() -> Result<Self> {
        Self::with_removed_elements(DEFAULT_REMOVED_ELEMENTS)
    }

    /// Create an extractor that removes the given elements.
    pub fn with_removed_elements<I, S>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let removed = elements
            .into_iter()
            .map(|element| element.as_ref().trim().to_ascii_lowercase())
            .filter(|element| !element.is_empty())
            .collect();
        let containers = CONTENT_CONTAINERS
            .iter()
            .map(|element| {
                Selector::parse(element).map_err(|e| {
                    SeokitError::extraction(format!("invalid container selector {element}: {e:?}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(HtmlTextExtractor {
            removed,
            containers,
        })
    }

    fn is_removed(&self, element: &ElementRef<'_>) -> bool {
        self.removed.contains(element.value().name())
    }

    fn inside_removed(&self, element: &ElementRef<'_>) -> bool {
        element
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|ancestor| self.is_removed(&ancestor))
    }

    fn content_container<'a>(&self, document: &'a Html) -> ElementRef<'a> {
        self.containers
            .iter()
            .find_map(|selector| {
                document
                    .select(selector)
                    .find(|element| !self.is_removed(element) && !self.inside_removed(element))
            })
            .unwrap_or_else(|| document.root_element())
    }

    fn collect_text(&self, element: ElementRef<'_>, out: &mut String) {
        for child in element.children() {
            match child.value() {
                Node::Text(text) => out.push_str(text),
                Node::Element(_) => {
                    let Some(child) = ElementRef::wrap(child) else {
                        continue;
                    };
                    if self.is_removed(&child) {
                        continue;
                    }
                    let separated = !INLINE_ELEMENTS.contains(&child.value().name());
                    if separated {
                        out.push(' ');
                    }
                    self.collect_text(child, out);
                    if separated {
                        out.push(' ');
                    }
                }
                _ => {}
            }
        }
    }
}

impl TextExtractor for HtmlTextExtractor {
    fn extract_visible_text(&self, markup: &str) -> Result<String> {
        let document = Html::parse_document(markup);
        let container = self.content_container(&document);

        let mut raw = String::with_capacity(markup.len() / 2);
        self.collect_text(container, &mut raw);

        Ok(raw.split_whitespace().collect::<Vec<_>>().join(" "))
    }

    fn name(&self) -> &'static str {
        "html"
    }
}
