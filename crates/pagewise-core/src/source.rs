//! Capability traits connecting a page container to its host application.
//!
//! [`PageSource`] is the inbound data contract ("how many items, and what
//! does item `i` look like"), [`PageDelegate`] is the outbound notification
//! contract. Both are modeled as plain traits with all methods required;
//! the container holds the delegate non-owningly (via `Weak`) and tolerates
//! it going away.

use crate::page_view::PageView;

/// Content returned by a [`PageSource`] for a single item.
///
/// The two forms mirror what a data source may reasonably hand back: either
/// a complete, self-contained page unit, or a raw content view that the
/// resolver wraps in a generic page filling the page bounds. The closed enum
/// makes an unrecognized content shape unrepresentable; sources pick a
/// variant instead of relying on runtime type inspection.
pub enum PageContent<V> {
    /// A complete page unit, displayed as-is.
    Unit(V),
    /// Raw content that must be laid out to fill the page bounds.
    Raw(V),
}

/// Supplies page content to a [`PageView`].
///
/// Implementations are queried lazily: `view_for_item` is only called for
/// indices the container is about to display. Both methods receive the
/// querying page view so shared sources can serve several containers.
pub trait PageSource<V: 'static> {
    /// Total number of items available.
    fn count(&self, page_view: &PageView<V>) -> usize;

    /// Returns the content for the item at `index`.
    ///
    /// Only called with `index < count`; called at most once per displayed
    /// page per navigation.
    fn view_for_item(&self, page_view: &PageView<V>, index: usize) -> PageContent<V>;
}

/// Receives position notifications from a [`PageView`].
///
/// `on_position_changed` fires exactly once per finalized navigation that
/// lands on a recognized indexed page; it never fires for the empty
/// placeholder.
pub trait PageDelegate {
    fn on_position_changed(&self, index: usize);
}
