//! Recording [`PageHost`] double.

use pagewise_core::{DisplayedPage, PageHost};

/// One recorded `present` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Presented {
    /// Index of the presented page, or `None` for the placeholder.
    pub index: Option<usize>,
    pub animated: bool,
}

/// A [`PageHost`] that records every presentation and lets tests script
/// transition outcomes.
///
/// Like a real renderer, a superseded transition (scripted with
/// [`TestHost::fail_next_transition`]) leaves the previously displayed page
/// in place.
pub struct TestHost<V> {
    displayed: Option<DisplayedPage<V>>,
    complete_next: bool,
    presentations: Vec<Presented>,
    reassert_count: usize,
}

impl<V> TestHost<V> {
    pub fn new() -> Self {
        Self {
            displayed: None,
            complete_next: true,
            presentations: Vec::new(),
            reassert_count: 0,
        }
    }

    /// Scripts the next `present` call to report a superseded transition.
    pub fn fail_next_transition(&mut self) {
        self.complete_next = false;
    }

    /// Every `present` call so far, oldest first.
    pub fn presentations(&self) -> &[Presented] {
        &self.presentations
    }

    /// Number of re-assertions after superseded transitions.
    pub fn reassert_count(&self) -> usize {
        self.reassert_count
    }
}

impl<V> Default for TestHost<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> PageHost<V> for TestHost<V> {
    fn present(&mut self, page: DisplayedPage<V>, animated: bool) -> bool {
        self.presentations.push(Presented {
            index: page.index(),
            animated,
        });
        if self.complete_next {
            self.displayed = Some(page);
            true
        } else {
            // Superseded: the old page stays on screen.
            self.complete_next = true;
            false
        }
    }

    fn reassert(&mut self) {
        self.reassert_count += 1;
    }

    fn displayed(&self) -> Option<&DisplayedPage<V>> {
        self.displayed.as_ref()
    }
}
