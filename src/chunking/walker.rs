//! Document walk over block-level elements

use crate::types::ContentElement;
use scraper::html::Select;
use scraper::{ElementRef, Html, Selector};

/// Elements the walker yields. Everything else is skipped, though the text of
/// a skipped node still shows up inside any matching ancestor.
pub const BLOCK_SELECTOR: &str = "h1, h2, h3, h4, h5, h6, p, li, blockquote, table";

/// Lazy, single-pass walk over a parsed document.
///
/// Matches come out in pre-order document order, so a `table` is yielded
/// before any `p` nested in one of its cells.
pub struct DocumentWalker<'a> {
    matches: Select<'a, 'a>,
}

impl<'a> DocumentWalker<'a> {
    /// Walk `document` using a selector from [`DocumentWalker::selector`]
    pub fn new(document: &'a Html, selector: &'a Selector) -> Self {
        Self {
            matches: document.select(selector),
        }
    }

    /// Compile the block selector
    pub fn selector() -> Selector {
        Selector::parse(BLOCK_SELECTOR).expect("block selector is a valid CSS selector list")
    }

    fn classify(element: ElementRef<'a>) -> Option<ContentElement> {
        let text: String = element.text().collect();
        ContentElement::from_tag(element.value().name(), text.trim().to_string())
    }
}

impl Iterator for DocumentWalker<'_> {
    type Item = ContentElement;

    fn next(&mut self) -> Option<Self::Item> {
        for element in self.matches.by_ref() {
            if let Some(classified) = Self::classify(element) {
                return Some(classified);
            }
        }
        None
    }
}
