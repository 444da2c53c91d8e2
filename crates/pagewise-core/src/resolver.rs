//! Page resolution: turning source content into displayable, index-tagged pages.
//!
//! A [`PageHandle`] ties a resolved page to the index it was created for, so
//! the container can later ask "what index is this displayed page?" without
//! keeping a parallel index table. Handles are created when a page is
//! resolved and dropped when the host stops displaying them.

use std::rc::Rc;

use crate::page_view::PageView;
use crate::source::{PageContent, PageSource};

/// A resolved page, distinguishing content that was already a full page unit
/// from raw content wrapped to fill the page bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResolvedPage<V> {
    /// The source supplied a complete page unit.
    Unit(V),
    /// Raw content hosted in a generic bounds-filling page.
    Filled(V),
}

impl<V> ResolvedPage<V> {
    /// The underlying content view, whichever form it arrived in.
    pub fn view(&self) -> &V {
        match self {
            ResolvedPage::Unit(view) | ResolvedPage::Filled(view) => view,
        }
    }
}

/// A rendered page together with its originating index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageHandle<V> {
    index: usize,
    page: ResolvedPage<V>,
}

impl<V> PageHandle<V> {
    /// Index this page was resolved for.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The resolved page itself.
    pub fn page(&self) -> &ResolvedPage<V> {
        &self.page
    }

    /// The underlying content view.
    pub fn view(&self) -> &V {
        self.page.view()
    }
}

/// What the hosting renderer is currently showing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DisplayedPage<V> {
    /// Blank page shown while no source is bound or the source is empty.
    Placeholder,
    /// An indexed page produced by [`resolve`].
    Page(PageHandle<V>),
}

impl<V> DisplayedPage<V> {
    /// The index of the displayed page, or `None` for the placeholder.
    pub fn index(&self) -> Option<usize> {
        match self {
            DisplayedPage::Placeholder => None,
            DisplayedPage::Page(handle) => Some(handle.index()),
        }
    }
}

/// Resolves the page for `index` from `source`, attaching the index.
///
/// The caller guarantees a bound source; a missing source is a programming
/// error surfaced before this point.
pub(crate) fn resolve<V: 'static>(
    source: &Rc<dyn PageSource<V>>,
    page_view: &PageView<V>,
    index: usize,
) -> PageHandle<V> {
    let page = match source.view_for_item(page_view, index) {
        PageContent::Unit(view) => ResolvedPage::Unit(view),
        PageContent::Raw(view) => ResolvedPage::Filled(view),
    };
    PageHandle { index, page }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_displayed_page_index() {
        let displayed: DisplayedPage<&str> = DisplayedPage::Placeholder;
        assert_eq!(displayed.index(), None);

        let displayed = DisplayedPage::Page(PageHandle {
            index: 4,
            page: ResolvedPage::Unit("page"),
        });
        assert_eq!(displayed.index(), Some(4));
    }

    #[test]
    fn test_resolved_page_view() {
        assert_eq!(ResolvedPage::Unit("a").view(), &"a");
        assert_eq!(ResolvedPage::Filled("b").view(), &"b");
    }
}
