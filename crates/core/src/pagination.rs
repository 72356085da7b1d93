//! Client-side paging over an already-fetched gallery.
//!
//! The full list is loaded once; a growing prefix of it is shown. Reaching
//! the last rendered item advances the page ("infinite scroll").

/// Artworks revealed per page.
pub const ITEMS_PER_PAGE: usize = 12;

/// Cursor over a fully fetched list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryFeed {
    page: usize,
    page_size: usize,
}

impl GalleryFeed {
    pub fn new() -> Self {
        Self::with_page_size(ITEMS_PER_PAGE)
    }

    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Start at `page` (values below 1 are treated as 1).
    pub fn at_page(page: usize) -> Self {
        Self {
            page: page.max(1),
            ..Self::new()
        }
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of items shown for the current page.
    pub fn end(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }

    /// The visible prefix of `items`.
    pub fn visible<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.end().min(items.len())]
    }

    pub fn has_more(&self, total: usize) -> bool {
        self.end() < total
    }

    /// Called when the last rendered item scrolls into view. Advances the
    /// page while more items remain and reports whether it did.
    pub fn on_last_item_visible(&mut self, total: usize) -> bool {
        if self.has_more(total) {
            self.page += 1;
            true
        } else {
            false
        }
    }
}

impl Default for GalleryFeed {
    fn default() -> Self {
        Self::new()
    }
}
