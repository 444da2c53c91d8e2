//! Derived streams over a page view's position changes.
//!
//! All streams are lazily computed: nothing is observed until `subscribe`,
//! and every stream built with [`EventStream::start_with`] replays the
//! current value to each new subscriber.

use std::rc::Rc;

use pagewise_core::PageView;

use crate::subscription::Subscription;

type Observer<T> = Rc<dyn Fn(&T)>;
type SubscribeFn<T> = dyn Fn(Observer<T>) -> Subscription;

/// A lazily evaluated stream of values.
///
/// Holds only a subscribe function; each `subscribe` call sets up an
/// independent pipeline, torn down through the returned [`Subscription`].
pub struct EventStream<T: 'static> {
    subscribe_fn: Rc<SubscribeFn<T>>,
}

impl<T: 'static> Clone for EventStream<T> {
    fn clone(&self) -> Self {
        Self {
            subscribe_fn: Rc::clone(&self.subscribe_fn),
        }
    }
}

impl<T: 'static> EventStream<T> {
    /// Creates a stream from its subscribe function.
    pub fn new(subscribe_fn: impl Fn(Observer<T>) -> Subscription + 'static) -> Self {
        Self {
            subscribe_fn: Rc::new(subscribe_fn),
        }
    }

    /// Starts observing the stream.
    pub fn subscribe(&self, observer: impl Fn(&T) + 'static) -> Subscription {
        (self.subscribe_fn)(Rc::new(observer))
    }

    /// Transforms each value with `transform`.
    pub fn map<U: 'static>(&self, transform: impl Fn(&T) -> U + 'static) -> EventStream<U> {
        let source = Rc::clone(&self.subscribe_fn);
        let transform = Rc::new(transform);
        EventStream::new(move |observer: Observer<U>| {
            let transform = Rc::clone(&transform);
            source(Rc::new(move |value: &T| observer(&transform(value))))
        })
    }

    /// Prefixes the stream with a value computed at subscription time.
    pub fn start_with(&self, initial: impl Fn() -> T + 'static) -> EventStream<T> {
        let source = Rc::clone(&self.subscribe_fn);
        let initial = Rc::new(initial);
        EventStream::new(move |observer: Observer<T>| {
            observer(&initial());
            source(observer)
        })
    }
}

/// The raw stream of committed positions; does not replay on subscription.
pub fn position_changes<V: 'static>(page_view: &PageView<V>) -> EventStream<usize> {
    let page_view = page_view.clone();
    EventStream::new(move |observer: Observer<usize>| {
        let registered = page_view.clone();
        let id = page_view.add_position_callback(Rc::new(move |index| observer(&index)));
        Subscription::new(move || registered.remove_position_callback(id))
    })
}

/// Linear progress through the pages: `position / count`, replaying the
/// current value on subscription. Defined as 0 while the source is empty.
pub fn progress<V: 'static>(page_view: &PageView<V>) -> EventStream<f32> {
    let for_map = page_view.clone();
    let for_start = page_view.clone();
    position_changes(page_view)
        .map(move |&index| ratio(index, for_map.count()))
        .start_with(move || ratio(for_start.position(), for_start.count()))
}

/// Progress displaced into `[0.05, 1.0]`, useful for indicators that should
/// never be entirely empty.
pub fn displaced_progress<V: 'static>(page_view: &PageView<V>) -> EventStream<f32> {
    progress(page_view).map(|&progress| 0.05 + progress * 0.95)
}

/// Square-root progress displaced into `[0.05, 1.0]`; grows fastest at the
/// start.
pub fn nonlinear_progress<V: 'static>(page_view: &PageView<V>) -> EventStream<f32> {
    progress(page_view).map(|&progress| 0.05 + progress.sqrt() * 0.95)
}

/// `(position, count)` pairs for page indicators, replaying the current pair
/// on subscription.
pub fn indicator_state<V: 'static>(page_view: &PageView<V>) -> EventStream<(usize, usize)> {
    let for_map = page_view.clone();
    let for_start = page_view.clone();
    position_changes(page_view)
        .map(move |&index| (index, for_map.count()))
        .start_with(move || (for_start.position(), for_start.count()))
}

fn ratio(position: usize, count: usize) -> f32 {
    if count == 0 {
        0.0
    } else {
        position as f32 / count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_map_and_start_with() {
        let base: EventStream<usize> = EventStream::new(|observer| {
            observer(&3);
            Subscription::empty()
        });
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);

        let _subscription = base
            .map(|&value| value * 2)
            .start_with(|| 1)
            .subscribe(move |&value| seen_clone.borrow_mut().push(value));

        assert_eq!(*seen.borrow(), vec![1, 6]);
    }

    #[test]
    fn test_ratio_of_empty_is_zero() {
        assert_eq!(ratio(0, 0), 0.0);
        assert_eq!(ratio(3, 0), 0.0);
        assert_eq!(ratio(1, 4), 0.25);
    }
}
