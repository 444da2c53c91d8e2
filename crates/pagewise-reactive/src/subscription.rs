//! Disposal handles for reactive bindings.

/// Owns the teardown of one active binding or stream subscription.
///
/// Disposal runs exactly once, either through [`Subscription::dispose`] or
/// when the handle is dropped. Bindings that tear down several things return
/// a composite built with [`Subscription::join`].
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a subscription running `teardown` on disposal.
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    /// A subscription with nothing to tear down.
    pub fn empty() -> Self {
        Self { teardown: None }
    }

    /// Tears the subscription down now.
    pub fn dispose(mut self) {
        self.run();
    }

    /// Combines two subscriptions into one disposing both.
    pub fn join(self, other: Subscription) -> Subscription {
        Subscription::new(move || {
            drop(self);
            drop(other);
        })
    }

    fn run(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.run();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn test_dispose_runs_teardown_once() {
        let count = Rc::new(Cell::new(0));
        let count_clone = Rc::clone(&count);
        let subscription = Subscription::new(move || count_clone.set(count_clone.get() + 1));

        subscription.dispose();
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_drop_runs_teardown() {
        let count = Rc::new(Cell::new(0));
        let count_clone = Rc::clone(&count);
        {
            let _subscription = Subscription::new(move || count_clone.set(count_clone.get() + 1));
        }
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn test_join_disposes_both() {
        let count = Rc::new(Cell::new(0));
        let a = {
            let count = Rc::clone(&count);
            Subscription::new(move || count.set(count.get() + 1))
        };
        let b = {
            let count = Rc::clone(&count);
            Subscription::new(move || count.set(count.get() + 1))
        };

        a.join(b).dispose();
        assert_eq!(count.get(), 2);
    }
}
