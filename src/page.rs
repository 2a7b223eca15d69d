//! Host page surface.
//!
//! The view updater does not own the page markup, it only reads template
//! sources out of it and swaps rendered fragments back in. That boundary is
//! this trait.

use eyre::{eyre, Result};
use std::collections::HashMap;

/// ID of the element that receives the rendered listing.
pub const TORRENT_LIST: &str = "torrent-list";

/// What the view updater needs from the page it lives in.
pub trait Page {
    /// Returns the markup held by the element `element_id`.
    fn template_markup(&self, element_id: &str) -> Result<String>;

    /// Replaces the content of the element `element_id` with `markup`.
    fn replace_content(&mut self, element_id: &str, markup: &str);
}

/// An in-memory page: element IDs mapped to their current content.
#[derive(Debug, Default)]
pub struct StaticPage {
    elements: HashMap<String, String>,
}

impl StaticPage {
    /// Initializes an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the content of an element, creating it if needed.
    pub fn set_element(&mut self, element_id: &str, content: &str) {
        self.elements
            .insert(element_id.to_owned(), content.to_owned());
    }

    /// Returns the current content of an element.
    #[must_use]
    pub fn element(&self, element_id: &str) -> Option<&str> {
        self.elements.get(element_id).map(String::as_str)
    }
}

impl Page for StaticPage {
    fn template_markup(&self, element_id: &str) -> Result<String> {
        self.elements
            .get(element_id)
            .cloned()
            .ok_or_else(|| eyre!("no element #{element_id} in page"))
    }

    fn replace_content(&mut self, element_id: &str, markup: &str) {
        self.set_element(element_id, markup);
    }
}
