//! Page container state machine.
//!
//! [`PageView`] owns the current position, delegates neighbor decisions to
//! the [`navigator`](crate::navigator) and content queries to the resolver,
//! and commits state through a single finalize path shared by programmatic
//! moves and host-driven swipes.
//!
//! The state object follows the cloneable-handle pattern: `PageView` is a
//! cheap `Clone` over shared interior state, so the data source, the host,
//! and reactive bindings can all hold it. Everything is single-threaded and
//! UI-thread-affine; borrows are never held across calls into the source,
//! factory, host, or delegate.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{trace, warn};
use smallvec::SmallVec;

use crate::host::PageHost;
use crate::navigator::{next_position, previous_position};
use crate::resolver::{resolve, DisplayedPage, PageHandle};
use crate::source::{PageDelegate, PageSource};

/// Axis along which pages are arranged. A rendering hint for the host; the
/// navigation logic is axis-agnostic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

/// How the user may drive navigation.
///
/// `None` suppresses paging entirely: neighbor queries return no pages and
/// the host is told both edges are unavailable. `EdgePan` and `Scroll` both
/// enable neighbor queries; which gesture initiates navigation is a host
/// rendering concern.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionMode {
    None,
    EdgePan,
    #[default]
    Scroll,
}

/// Construction-time configuration for a [`PageView`].
#[derive(Clone, Debug)]
pub struct PageViewSpec {
    /// Axis along which pages are arranged.
    pub direction: Direction,
    /// Spacing between adjacent pages, forwarded to the host.
    pub interitem_spacing: f32,
    /// Whether navigation wraps past the first/last page.
    pub carousel_enabled: bool,
    /// Initial interaction mode.
    pub interaction_mode: InteractionMode,
}

impl Default for PageViewSpec {
    fn default() -> Self {
        Self {
            direction: Direction::Horizontal,
            interitem_spacing: 0.0,
            carousel_enabled: false,
            interaction_mode: InteractionMode::Scroll,
        }
    }
}

impl PageViewSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn interitem_spacing(mut self, spacing: f32) -> Self {
        self.interitem_spacing = spacing;
        self
    }

    pub fn carousel_enabled(mut self, enabled: bool) -> Self {
        self.carousel_enabled = enabled;
        self
    }

    pub fn interaction_mode(mut self, mode: InteractionMode) -> Self {
        self.interaction_mode = mode;
        self
    }
}

struct Inner<V: 'static> {
    host: Rc<RefCell<dyn PageHost<V>>>,

    /// Bound data source. Absent until [`PageView::bind_source`] is called.
    source: Option<Rc<dyn PageSource<V>>>,

    /// Non-owning delegate reference; the delegate's lifetime is independent
    /// and notifications are dropped once it is gone.
    delegate: Option<Weak<dyn PageDelegate>>,

    /// Index of the currently displayed page. Stays at its last value while
    /// the source is empty.
    position: usize,

    direction: Direction,
    interitem_spacing: f32,
    carousel_enabled: bool,
    interaction_mode: InteractionMode,

    /// Position-changed callbacks, keyed for removal.
    position_callbacks: SmallVec<[(u64, Rc<dyn Fn(usize)>); 2]>,
    next_callback_id: u64,
}

/// A paged container: swipeable horizontally or vertically, one page at a
/// time, with optional carousel wraparound.
///
/// # Example
///
/// ```rust,ignore
/// let page_view = PageView::new(host, PageViewSpec::new().carousel_enabled(true));
/// page_view.bind_source(Rc::new(my_source));
/// page_view.move_to(3, true);
/// ```
pub struct PageView<V: 'static> {
    inner: Rc<RefCell<Inner<V>>>,
}

impl<V: 'static> Clone for PageView<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<V: 'static> PageView<V> {
    /// Creates a page view pushing pages into `host`.
    pub fn new(host: Rc<RefCell<dyn PageHost<V>>>, spec: PageViewSpec) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                host,
                source: None,
                delegate: None,
                position: 0,
                direction: spec.direction,
                interitem_spacing: spec.interitem_spacing,
                carousel_enabled: spec.carousel_enabled,
                interaction_mode: spec.interaction_mode,
                position_callbacks: SmallVec::new(),
                next_callback_id: 1,
            })),
        }
    }

    /// Index of the currently displayed page.
    pub fn position(&self) -> usize {
        self.inner.borrow().position
    }

    /// Number of items in the bound source, or 0 while no source is bound.
    pub fn count(&self) -> usize {
        match self.source() {
            Some(source) => source.count(self),
            None => 0,
        }
    }

    pub fn direction(&self) -> Direction {
        self.inner.borrow().direction
    }

    pub fn interitem_spacing(&self) -> f32 {
        self.inner.borrow().interitem_spacing
    }

    pub fn is_carousel_enabled(&self) -> bool {
        self.inner.borrow().carousel_enabled
    }

    pub fn set_carousel_enabled(&self, enabled: bool) {
        self.inner.borrow_mut().carousel_enabled = enabled;
    }

    pub fn interaction_mode(&self) -> InteractionMode {
        self.inner.borrow().interaction_mode
    }

    pub fn set_interaction_mode(&self, mode: InteractionMode) {
        self.inner.borrow_mut().interaction_mode = mode;
    }

    /// Installs the delegate. The container does not own it; once the last
    /// strong reference elsewhere is dropped, notifications stop.
    pub fn set_delegate<D: PageDelegate + 'static>(&self, delegate: Rc<D>) {
        let delegate: Rc<dyn PageDelegate> = delegate;
        self.inner.borrow_mut().delegate = Some(Rc::downgrade(&delegate));
    }

    pub fn clear_delegate(&self) {
        self.inner.borrow_mut().delegate = None;
    }

    /// Binds a data source and reloads from the first page.
    pub fn bind_source<S: PageSource<V> + 'static>(&self, source: Rc<S>) {
        let source: Rc<dyn PageSource<V>> = source;
        self.inner.borrow_mut().source = Some(source);
        self.reload(false);
    }

    /// Removes the bound source and presents the empty placeholder.
    pub fn clear_source(&self) {
        self.inner.borrow_mut().source = None;
        self.reload(false);
    }

    /// Re-evaluates content from index 0, regardless of the previous position.
    pub fn reload(&self, animated: bool) {
        self.set_position(0, animated);
    }

    /// Navigates to `target`. A no-op when `target` is already displayed.
    pub fn move_to(&self, target: usize, animated: bool) {
        if target == self.position() {
            return;
        }
        self.set_position(target, animated);
    }

    /// Unconditionally re-presents the page at `target`, even when the index
    /// matches the current position.
    ///
    /// Reactive bindings use this after a snapshot change: the preserved
    /// selection may keep its index while the content behind it changed.
    pub fn set_position(&self, target: usize, animated: bool) {
        let host = self.host();
        let Some(source) = self.source() else {
            trace!("page view has no source; presenting placeholder");
            host.borrow_mut().present(DisplayedPage::Placeholder, false);
            return;
        };
        if source.count(self) == 0 {
            trace!("page view source is empty; presenting placeholder");
            host.borrow_mut().present(DisplayedPage::Placeholder, false);
            return;
        }

        trace!("presenting page {target} (animated: {animated})");
        let handle = resolve(&source, self, target);
        let completed = host.borrow_mut().present(DisplayedPage::Page(handle), animated);
        self.finalize_transition(completed);
    }

    /// Commits the outcome of a transition.
    ///
    /// Programmatic moves call this internally; hosts call it once per
    /// gesture-driven transition. A superseded transition re-asserts the
    /// displayed page without touching state, unless the displayed content is
    /// not a recognizable indexed page, in which case the container fails to
    /// the safe known state: position 0, reported as a normal transition.
    pub fn finalize_transition(&self, completed: bool) {
        let host = self.host();
        if !completed {
            host.borrow_mut().reassert();
            let recognized = self.displayed_index().is_some();
            if !recognized {
                warn!("superseded transition left unrecognized content; resetting to first page");
                self.commit(0);
            }
            return;
        }
        match self.displayed_index() {
            Some(index) => self.commit(index),
            None => {
                warn!("completed transition shows no indexed page; resetting to first page");
                self.commit(0);
            }
        }
    }

    /// The page the host should show after the one holding `from`, or `None`
    /// when navigation stops in that direction.
    pub fn page_after(&self, from: &PageHandle<V>) -> Option<PageHandle<V>> {
        self.neighbor(from, next_position)
    }

    /// The page the host should show before the one holding `from`, or
    /// `None` when navigation stops in that direction.
    pub fn page_before(&self, from: &PageHandle<V>) -> Option<PageHandle<V>> {
        self.neighbor(from, previous_position)
    }

    /// Whether a forward swipe from the current position has a destination.
    pub fn supports_forward_neighbor(&self) -> bool {
        self.supports_neighbor(next_position)
    }

    /// Whether a backward swipe from the current position has a destination.
    pub fn supports_backward_neighbor(&self) -> bool {
        self.supports_neighbor(previous_position)
    }

    /// The currently displayed page, or `None` while the placeholder is up.
    pub fn current_page(&self) -> Option<PageHandle<V>>
    where
        V: Clone,
    {
        let host = self.host();
        let guard = host.borrow();
        match guard.displayed() {
            Some(DisplayedPage::Page(handle)) => Some(handle.clone()),
            _ => None,
        }
    }

    /// Registers a position-changed callback, returning its removal key.
    ///
    /// Callbacks fire after the delegate, with the same once-per-finalized-
    /// transition guarantee.
    pub fn add_position_callback(&self, callback: Rc<dyn Fn(usize)>) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_callback_id;
        inner.next_callback_id += 1;
        inner.position_callbacks.push((id, callback));
        id
    }

    /// Removes a previously registered position-changed callback.
    pub fn remove_position_callback(&self, id: u64) {
        self.inner
            .borrow_mut()
            .position_callbacks
            .retain(|(callback_id, _)| *callback_id != id);
    }

    fn neighbor(
        &self,
        from: &PageHandle<V>,
        step: fn(usize, usize, bool) -> Option<usize>,
    ) -> Option<PageHandle<V>> {
        let (source, carousel) = {
            let inner = self.inner.borrow();
            if inner.interaction_mode == InteractionMode::None {
                return None;
            }
            (inner.source.clone()?, inner.carousel_enabled)
        };
        let count = source.count(self);
        let target = step(from.index(), count, carousel)?;
        trace!("resolving neighbor page {target} of {}", from.index());
        Some(resolve(&source, self, target))
    }

    fn supports_neighbor(&self, step: fn(usize, usize, bool) -> Option<usize>) -> bool {
        let (source, carousel, position) = {
            let inner = self.inner.borrow();
            if inner.interaction_mode == InteractionMode::None {
                return false;
            }
            let Some(source) = inner.source.clone() else {
                return false;
            };
            (source, inner.carousel_enabled, inner.position)
        };
        step(position, source.count(self), carousel).is_some()
    }

    fn commit(&self, index: usize) {
        self.inner.borrow_mut().position = index;
        self.notify_position_changed(index);
    }

    fn notify_position_changed(&self, index: usize) {
        let (delegate, callbacks) = {
            let inner = self.inner.borrow();
            let delegate = inner.delegate.as_ref().and_then(Weak::upgrade);
            let callbacks: Vec<Rc<dyn Fn(usize)>> = inner
                .position_callbacks
                .iter()
                .map(|(_, callback)| Rc::clone(callback))
                .collect();
            (delegate, callbacks)
        };
        if let Some(delegate) = delegate {
            delegate.on_position_changed(index);
        }
        for callback in callbacks {
            callback(index);
        }
    }

    fn host(&self) -> Rc<RefCell<dyn PageHost<V>>> {
        Rc::clone(&self.inner.borrow().host)
    }

    fn source(&self) -> Option<Rc<dyn PageSource<V>>> {
        self.inner.borrow().source.clone()
    }

    fn displayed_index(&self) -> Option<usize> {
        let host = self.host();
        let guard = host.borrow();
        guard.displayed().and_then(DisplayedPage::index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_defaults() {
        let spec = PageViewSpec::new();
        assert_eq!(spec.direction, Direction::Horizontal);
        assert_eq!(spec.interitem_spacing, 0.0);
        assert!(!spec.carousel_enabled);
        assert_eq!(spec.interaction_mode, InteractionMode::Scroll);
    }

    #[test]
    fn test_spec_builder() {
        let spec = PageViewSpec::new()
            .direction(Direction::Vertical)
            .interitem_spacing(8.0)
            .carousel_enabled(true)
            .interaction_mode(InteractionMode::EdgePan);
        assert_eq!(spec.direction, Direction::Vertical);
        assert_eq!(spec.interitem_spacing, 8.0);
        assert!(spec.carousel_enabled);
        assert_eq!(spec.interaction_mode, InteractionMode::EdgePan);
    }
}
