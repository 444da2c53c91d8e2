//! Hosting-renderer interface.
//!
//! The container never renders or animates; it hands pages to a [`PageHost`]
//! and commits its own state when the transition outcome is known. Hosts
//! that animate asynchronously are responsible for collapsing their
//! mechanism into exactly one completion report per navigation, either by
//! returning it from [`PageHost::present`] or by calling
//! [`PageView::finalize_transition`] once a gesture-driven transition
//! settles.
//!
//! [`PageView::finalize_transition`]: crate::page_view::PageView::finalize_transition

use crate::resolver::DisplayedPage;

/// The rendering collaborator a [`PageView`](crate::page_view::PageView)
/// pushes pages into.
pub trait PageHost<V> {
    /// Replaces the visible page with `page`.
    ///
    /// `animated` is a rendering hint only; the container treats the
    /// transition as finished when this returns. Returns `true` when the
    /// transition ran to completion, `false` when it was superseded (for
    /// example by a concurrent re-layout).
    fn present(&mut self, page: DisplayedPage<V>, animated: bool) -> bool;

    /// Re-presents the currently displayed page without animation.
    ///
    /// Called after a superseded transition to avoid a torn visual state.
    fn reassert(&mut self);

    /// The page currently on screen, or `None` before anything was presented.
    fn displayed(&self) -> Option<&DisplayedPage<V>>;
}
