//! Paged-scrolling container core.
//!
//! A page view shows one page at a time and lets the host swipe between
//! neighbors, with optional carousel wraparound. This crate holds the
//! navigation and state logic only; rendering, gestures, and animation
//! belong to a [`PageHost`] implementation.
//!
//! # Architecture
//!
//! - [`navigator`] - pure next/previous index computation
//! - [`PageSource`] / [`PageDelegate`] - inbound data and outbound
//!   notification contracts
//! - [`PageHandle`] / [`resolver`] - index-tagged resolved pages
//! - [`PageView`] - the container state machine
//!
//! # Example
//!
//! ```rust,ignore
//! let page_view = PageView::new(host, PageViewSpec::new().carousel_enabled(true));
//! page_view.bind_source(Rc::new(my_source));
//! page_view.move_to(3, true);
//! assert_eq!(page_view.position(), 3);
//! ```

pub mod host;
pub mod navigator;
pub mod page_view;
pub mod resolver;
pub mod source;

pub use host::PageHost;
pub use page_view::{Direction, InteractionMode, PageView, PageViewSpec};
pub use resolver::{DisplayedPage, PageHandle, ResolvedPage};
pub use source::{PageContent, PageDelegate, PageSource};
