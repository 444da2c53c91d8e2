//! Recording [`PageDelegate`] double.

use std::cell::RefCell;

use pagewise_core::PageDelegate;

/// A [`PageDelegate`] that records every position notification.
#[derive(Default)]
pub struct TestDelegate {
    positions: RefCell<Vec<usize>>,
}

impl TestDelegate {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notified positions, oldest first.
    pub fn positions(&self) -> Vec<usize> {
        self.positions.borrow().clone()
    }
}

impl PageDelegate for TestDelegate {
    fn on_position_changed(&self, index: usize) {
        self.positions.borrow_mut().push(index);
    }
}
