//! Reactive sequence binding scenarios: snapshot reconciliation and
//! selection preservation.

use std::rc::Rc;

use pagewise_core::{PageContent, PageView, PageViewSpec};
use pagewise_reactive::{bind_items, bind_items_resetting, Subject, Subscription};
use pagewise_testing::{test_page_view, TestDelegate, TestHost};

use std::cell::RefCell;

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn bound_page_view() -> (
    PageView<String>,
    Rc<RefCell<TestHost<String>>>,
    Subject<Vec<String>>,
    Subscription,
) {
    let (page_view, host) = test_page_view::<String>(PageViewSpec::new());
    let items: Subject<Vec<String>> = Subject::new();
    let binding = bind_items(&page_view, &items, |_, _, element: &String| {
        PageContent::Raw(element.clone())
    });
    (page_view, host, items, binding)
}

#[test]
fn first_emission_reloads_to_first_page() {
    let (page_view, _host, items, _binding) = bound_page_view();
    let delegate = Rc::new(TestDelegate::new());
    page_view.set_delegate(Rc::clone(&delegate));

    items.on_next(strings(&["a", "b", "c"]));

    assert_eq!(page_view.count(), 3);
    assert_eq!(page_view.position(), 0);
    assert_eq!(delegate.positions(), vec![0]);
}

#[test]
fn selection_preserved_at_same_index() {
    let (page_view, host, items, _binding) = bound_page_view();
    items.on_next(strings(&["a", "b", "c"]));
    page_view.move_to(1, false);

    let presented_before = host.borrow().presentations().len();
    items.on_next(strings(&["x", "b", "y"]));

    assert_eq!(page_view.position(), 1);
    // Same index, but the page is re-presented: content behind it changed.
    let host = host.borrow();
    assert_eq!(host.presentations().len(), presented_before + 1);
    assert_eq!(host.presentations().last().unwrap().index, Some(1));
}

#[test]
fn selection_follows_element_to_new_index() {
    let (page_view, _host, items, _binding) = bound_page_view();
    items.on_next(strings(&["a", "b", "c"]));
    page_view.move_to(1, false);

    items.on_next(strings(&["z", "y", "b"]));

    assert_eq!(page_view.position(), 2);
    assert_eq!(page_view.current_page().unwrap().view(), "b");
}

#[test]
fn selection_lost_resets_to_first_page() {
    let (page_view, _host, items, _binding) = bound_page_view();
    items.on_next(strings(&["a", "b"]));
    page_view.move_to(1, false);

    items.on_next(strings(&["c", "d"]));

    assert_eq!(page_view.position(), 0);
    assert_eq!(page_view.current_page().unwrap().view(), "c");
}

#[test]
fn empty_previous_snapshot_counts_as_no_selection() {
    let (page_view, _host, items, _binding) = bound_page_view();
    items.on_next(Vec::new());
    assert_eq!(page_view.count(), 0);

    items.on_next(strings(&["a", "b"]));

    assert_eq!(page_view.count(), 2);
    assert_eq!(page_view.position(), 0);
}

#[test]
fn resetting_binding_reloads_on_every_emission() {
    let (page_view, _host) = test_page_view::<String>(PageViewSpec::new());
    let items: Subject<Vec<String>> = Subject::new();
    let _binding = bind_items_resetting(&page_view, &items, |_, _, element: &String| {
        PageContent::Raw(element.clone())
    });

    items.on_next(strings(&["a", "b", "c"]));
    page_view.move_to(1, false);
    items.on_next(strings(&["a", "b", "c"]));

    assert_eq!(page_view.position(), 0);
}

#[test]
fn disposing_the_binding_detaches_the_source() {
    let (page_view, _host, items, binding) = bound_page_view();
    items.on_next(strings(&["a", "b", "c"]));
    page_view.move_to(2, false);

    binding.dispose();

    assert_eq!(page_view.count(), 0);
    items.on_next(strings(&["x", "y"]));
    assert_eq!(page_view.count(), 0);
    assert_eq!(page_view.position(), 2);
}
