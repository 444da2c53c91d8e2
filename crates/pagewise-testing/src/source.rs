//! Fixed in-memory [`PageSource`] for tests.

use pagewise_core::{PageContent, PageSource, PageView};

/// A source serving a fixed list of views as raw page content.
pub struct StaticSource<V> {
    items: Vec<V>,
}

impl<V> StaticSource<V> {
    pub fn new(items: Vec<V>) -> Self {
        Self { items }
    }
}

impl<V: Clone + 'static> PageSource<V> for StaticSource<V> {
    fn count(&self, _page_view: &PageView<V>) -> usize {
        self.items.len()
    }

    fn view_for_item(&self, _page_view: &PageView<V>, index: usize) -> PageContent<V> {
        PageContent::Raw(self.items[index].clone())
    }
}

/// A source serving a fixed list of views as complete page units.
pub struct StaticUnitSource<V> {
    items: Vec<V>,
}

impl<V> StaticUnitSource<V> {
    pub fn new(items: Vec<V>) -> Self {
        Self { items }
    }
}

impl<V: Clone + 'static> PageSource<V> for StaticUnitSource<V> {
    fn count(&self, _page_view: &PageView<V>) -> usize {
        self.items.len()
    }

    fn view_for_item(&self, _page_view: &PageView<V>, index: usize) -> PageContent<V> {
        PageContent::Unit(self.items[index].clone())
    }
}
