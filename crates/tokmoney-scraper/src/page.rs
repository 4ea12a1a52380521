//! In-memory page snapshot and element helpers.

use std::path::Path;

use scraper::{ElementRef, Html, Selector};

use crate::ScraperError;

/// A parsed HTML document or fragment.
pub struct Page {
    html: Html,
}

impl Page {
    #[must_use]
    pub fn parse(html: &str) -> Self {
        Self {
            html: Html::parse_document(html),
        }
    }

    /// Parses markup inserted into an existing page, e.g. a batch of newly
    /// loaded video tiles.
    #[must_use]
    pub fn fragment(html: &str) -> Self {
        Self {
            html: Html::parse_fragment(html),
        }
    }

    /// Reads and parses a saved page.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::PageIo`] if the file cannot be read.
    pub fn from_file(path: &Path) -> Result<Self, ScraperError> {
        let content = std::fs::read_to_string(path).map_err(|e| ScraperError::PageIo {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(Self::parse(&content))
    }

    /// The synthetic `<html>` root every search is scoped to.
    #[must_use]
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }

    /// Top-level elements of a fragment (children of the synthetic root).
    pub fn top_level(&self) -> impl Iterator<Item = ElementRef<'_>> {
        self.root().children().filter_map(ElementRef::wrap)
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("errors", &self.html.errors.len())
            .finish_non_exhaustive()
    }
}

/// Trimmed text content of `element` and all its descendants.
#[must_use]
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Descendants of `scope` matching `selector`, in document order.
///
/// `scope` itself is never yielded.
pub fn descendants<'a, 'b>(
    scope: ElementRef<'a>,
    selector: &'b Selector,
) -> impl Iterator<Item = ElementRef<'a>> + 'b
where
    'a: 'b,
{
    let scope_id = scope.id();
    scope.select(selector).filter(move |el| el.id() != scope_id)
}

/// True for a creator profile URL (`https://www.tiktok.com/@handle`).
#[must_use]
pub fn is_profile_url(url: &str) -> bool {
    url.contains("tiktok.com/@")
}
