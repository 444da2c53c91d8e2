//! Reactive bindings for pagewise.
//!
//! Bridges an observable sequence of model values into the
//! [`PageSource`](pagewise_core::PageSource) contract so a stream of
//! snapshots can drive a [`PageView`](pagewise_core::PageView)
//! declaratively, and exposes derived streams over the position-changed
//! channel (progress, indicator state).
//!
//! # Example
//!
//! ```rust,ignore
//! let items: Subject<Vec<String>> = Subject::new();
//! let binding = bind_items(&page_view, &items, |_, _, title| {
//!     PageContent::Raw(make_page(title))
//! });
//! items.on_next(vec!["a".into(), "b".into(), "c".into()]);
//! ```

mod items;
mod stream;
mod subject;
mod subscription;

pub use items::{bind_items, bind_items_resetting, ReactiveItemsSource};
pub use stream::{
    displaced_progress, indicator_state, nonlinear_progress, position_changes, progress,
    EventStream,
};
pub use subject::Subject;
pub use subscription::Subscription;
