//! Testing utilities and doubles for pagewise.
//!
//! Provides a recording [`TestHost`], a recording [`TestDelegate`], fixed
//! in-memory sources, and a one-call harness for wiring them to a
//! [`PageView`](pagewise_core::PageView).

mod delegate;
mod host;
mod source;

pub use delegate::TestDelegate;
pub use host::{Presented, TestHost};
pub use source::{StaticSource, StaticUnitSource};

use std::cell::RefCell;
use std::rc::Rc;

use pagewise_core::{PageView, PageViewSpec};

/// Creates a [`PageView`] wired to a fresh [`TestHost`], returning both.
pub fn test_page_view<V: 'static>(spec: PageViewSpec) -> (PageView<V>, Rc<RefCell<TestHost<V>>>) {
    let host = Rc::new(RefCell::new(TestHost::new()));
    let page_view = PageView::new(host.clone(), spec);
    (page_view, host)
}
