//! Push stream used as the upstream observable sequence.

use std::cell::RefCell;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::subscription::Subscription;

struct Subscribers<T: 'static> {
    callbacks: FxHashMap<u64, Rc<dyn Fn(&T)>>,
    next_id: u64,
}

/// A multicasting push stream.
///
/// Emissions are delivered serially, in call order, on the caller's thread;
/// the reactive adapter relies on this serialization and performs no locking
/// of its own. `Subject` is a cheap `Clone` over shared subscriber state.
pub struct Subject<T: 'static> {
    subscribers: Rc<RefCell<Subscribers<T>>>,
}

impl<T: 'static> Clone for Subject<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Rc::clone(&self.subscribers),
        }
    }
}

impl<T: 'static> Subject<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Rc::new(RefCell::new(Subscribers {
                callbacks: FxHashMap::default(),
                next_id: 1,
            })),
        }
    }

    /// Registers `observer` for future emissions.
    ///
    /// The observer is removed when the returned [`Subscription`] is
    /// disposed or dropped.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        let id = {
            let mut subscribers = self.subscribers.borrow_mut();
            let id = subscribers.next_id;
            subscribers.next_id += 1;
            subscribers.callbacks.insert(id, Rc::new(observer));
            id
        };
        let subscribers = Rc::downgrade(&self.subscribers);
        Subscription::new(move || {
            if let Some(subscribers) = subscribers.upgrade() {
                subscribers.borrow_mut().callbacks.remove(&id);
            }
        })
    }

    /// Delivers `value` to every current subscriber.
    pub fn on_next(&self, value: T) {
        // Snapshot the callbacks so observers may subscribe or dispose
        // while the emission is in flight.
        let callbacks: Vec<Rc<dyn Fn(&T)>> = {
            let subscribers = self.subscribers.borrow();
            subscribers.callbacks.values().map(Rc::clone).collect()
        };
        for callback in callbacks {
            callback(&value);
        }
    }
}

impl<T: 'static> Default for Subject<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_delivers_to_subscribers() {
        let subject: Subject<i32> = Subject::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let _subscription = subject.subscribe(move |value| seen_clone.borrow_mut().push(*value));

        subject.on_next(1);
        subject.on_next(2);

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_dispose_stops_delivery() {
        let subject: Subject<i32> = Subject::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let subscription = subject.subscribe(move |value| seen_clone.borrow_mut().push(*value));

        subject.on_next(1);
        subscription.dispose();
        subject.on_next(2);

        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn test_dropped_subscription_stops_delivery() {
        let subject: Subject<i32> = Subject::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        {
            let seen = Rc::clone(&seen);
            let _subscription = subject.subscribe(move |value| seen.borrow_mut().push(*value));
        }
        subject.on_next(1);

        assert!(seen.borrow().is_empty());
    }
}
