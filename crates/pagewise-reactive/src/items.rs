//! Reactive sequence adapter: binds an observable sequence of model
//! elements to a [`PageView`] through the [`PageSource`] contract.
//!
//! Each emission replaces the adapter's snapshot atomically and then decides
//! between a selection-preserving update (re-find the previously selected
//! element in the new snapshot and move there) and a reset to the first
//! page. Element types without equality cannot be re-found, so those
//! bindings reload on every emission; a documented limitation, not a defect.

use std::cell::RefCell;
use std::rc::Rc;

use log::debug;

use pagewise_core::{PageContent, PageSource, PageView};

use crate::subject::Subject;
use crate::subscription::Subscription;

type PageFactory<V, E> = Box<dyn Fn(&PageView<V>, usize, &E) -> PageContent<V>>;
type Locator<E> = Box<dyn Fn(&[E], &E) -> Option<usize>>;

/// A [`PageSource`] fed by sequence emissions.
///
/// Holds the last-seen snapshot; `count` is 0 until the first emission.
/// The page factory must not re-enter the binding (emit upstream or mutate
/// the snapshot) while producing content.
pub struct ReactiveItemsSource<V: 'static, E: 'static> {
    items: RefCell<Option<Vec<E>>>,
    factory: PageFactory<V, E>,
    locate: Option<Locator<E>>,
}

impl<V: 'static, E: 'static> ReactiveItemsSource<V, E> {
    /// Creates an adapter that preserves the current selection across
    /// emissions by re-finding the selected element in the new snapshot.
    pub fn preserving(
        factory: impl Fn(&PageView<V>, usize, &E) -> PageContent<V> + 'static,
    ) -> Self
    where
        E: PartialEq,
    {
        Self {
            items: RefCell::new(None),
            factory: Box::new(factory),
            locate: Some(Box::new(|items, selected| {
                items.iter().position(|item| item == selected)
            })),
        }
    }

    /// Creates an adapter for element types without equality; every emission
    /// resets the page view to the first page.
    pub fn resetting(
        factory: impl Fn(&PageView<V>, usize, &E) -> PageContent<V> + 'static,
    ) -> Self {
        Self {
            items: RefCell::new(None),
            factory: Box::new(factory),
            locate: None,
        }
    }

    /// Applies a newly observed snapshot and reconciles the position.
    pub fn apply(&self, page_view: &PageView<V>, new_items: Vec<E>) {
        let previous = self.items.borrow_mut().replace(new_items);

        let target = match (&self.locate, previous) {
            (Some(locate), Some(previous)) if !previous.is_empty() => {
                // Selection captured against the snapshot that was live when
                // the position was last committed.
                let selected = previous.get(page_view.position());
                let items = self.items.borrow();
                match (selected, items.as_deref()) {
                    (Some(selected), Some(current)) => locate(current, selected),
                    _ => None,
                }
            }
            _ => None,
        };

        match target {
            Some(index) => {
                debug!("selection preserved at index {index} after snapshot change");
                page_view.set_position(index, false);
            }
            None => {
                debug!("selection lost after snapshot change; reloading");
                page_view.reload(false);
            }
        }
    }
}

impl<V: 'static, E: 'static> PageSource<V> for ReactiveItemsSource<V, E> {
    fn count(&self, _page_view: &PageView<V>) -> usize {
        self.items
            .borrow()
            .as_ref()
            .map(Vec::len)
            .unwrap_or_default()
    }

    fn view_for_item(&self, page_view: &PageView<V>, index: usize) -> PageContent<V> {
        let items = self.items.borrow();
        let items = items
            .as_deref()
            .expect("page content requested before the first sequence emission");
        (self.factory)(page_view, index, &items[index])
    }
}

/// Binds an observable sequence of equality-comparable elements to
/// `page_view`, preserving the current selection across emissions where
/// possible.
///
/// The returned [`Subscription`] owns the whole binding: disposing it stops
/// upstream delivery and unbinds the page view's source.
pub fn bind_items<V, E>(
    page_view: &PageView<V>,
    items: &Subject<Vec<E>>,
    factory: impl Fn(&PageView<V>, usize, &E) -> PageContent<V> + 'static,
) -> Subscription
where
    V: 'static,
    E: PartialEq + Clone + 'static,
{
    bind(page_view, items, Rc::new(ReactiveItemsSource::preserving(factory)))
}

/// Binds an observable sequence of non-comparable elements to `page_view`;
/// every emission resets to the first page.
pub fn bind_items_resetting<V, E>(
    page_view: &PageView<V>,
    items: &Subject<Vec<E>>,
    factory: impl Fn(&PageView<V>, usize, &E) -> PageContent<V> + 'static,
) -> Subscription
where
    V: 'static,
    E: Clone + 'static,
{
    bind(page_view, items, Rc::new(ReactiveItemsSource::resetting(factory)))
}

fn bind<V, E>(
    page_view: &PageView<V>,
    items: &Subject<Vec<E>>,
    source: Rc<ReactiveItemsSource<V, E>>,
) -> Subscription
where
    V: 'static,
    E: Clone + 'static,
{
    page_view.bind_source(Rc::clone(&source));

    let bound = page_view.clone();
    let upstream = items.subscribe(move |new_items: &Vec<E>| {
        source.apply(&bound, new_items.clone());
    });

    let bound = page_view.clone();
    upstream.join(Subscription::new(move || bound.clear_source()))
}
