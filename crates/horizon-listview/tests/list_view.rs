//! Integration tests for the list widget, driven through its public API with
//! recording collaborators.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use horizon_listview::prelude::*;
use parking_lot::Mutex;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("horizon_listview=trace")
        .with_test_writer()
        .try_init();
}

#[derive(Debug)]
struct Row {
    label: &'static str,
    classes: Vec<String>,
    activatable: bool,
}

impl Row {
    fn new(label: &'static str) -> Self {
        Self {
            label,
            classes: Vec::new(),
            activatable: true,
        }
    }

    fn inert(label: &'static str) -> Self {
        Self {
            activatable: false,
            ..Self::new(label)
        }
    }

    fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

impl StyleClasses for Row {
    fn add_class(&mut self, class: &str) {
        self.classes.push(class.to_string());
    }

    fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }
}

impl ListPayload for Row {
    fn natural_size(&self) -> ItemSize {
        ItemSize::new(320.0, 40.0)
    }

    fn style_classes(&mut self) -> Option<&mut dyn StyleClasses> {
        Some(self)
    }

    fn is_activatable(&self) -> bool {
        self.activatable
    }
}

/// A list wired to a [`Tweener`] and recording collaborators.
struct Harness {
    list: ListView<Row>,
    tweener: Tweener,
    views: Rc<RefCell<Vec<ContentView>>>,
    sequences: Rc<RefCell<Vec<Vec<ItemHandle>>>>,
    inserts: Arc<Mutex<Vec<InsertEvent>>>,
    removes: Arc<Mutex<Vec<RemoveEvent>>>,
    selections: Arc<Mutex<Vec<SelectionEvent>>>,
}

impl Harness {
    fn new(options: ListViewOptions) -> Self {
        init_tracing();

        let tweener = Tweener::new();
        let views = Rc::new(RefCell::new(Vec::new()));
        let sequences = Rc::new(RefCell::new(Vec::new()));

        let list = {
            let views = views.clone();
            let sequences = sequences.clone();
            ListView::new(
                options,
                Box::new(tweener.clone()),
                Box::new(move |handles: &[ItemHandle]| sequences.borrow_mut().push(handles.to_vec())),
                Box::new(move |view: ContentView, _: &TransitionSpec| views.borrow_mut().push(view)),
            )
            .unwrap()
        };

        let inserts = Arc::new(Mutex::new(Vec::new()));
        let removes = Arc::new(Mutex::new(Vec::new()));
        let selections = Arc::new(Mutex::new(Vec::new()));
        {
            let inserts = inserts.clone();
            list.inserted.connect(move |event| inserts.lock().push(*event));
            let removes = removes.clone();
            list.removed.connect(move |event| removes.lock().push(*event));
            let selections = selections.clone();
            list.selection_changed
                .connect(move |event| selections.lock().push(event.clone()));
        }

        Self {
            list,
            tweener,
            views,
            sequences,
            inserts,
            removes,
            selections,
        }
    }

    fn labels(&self) -> Vec<&'static str> {
        self.list.iter().map(|row| row.label).collect()
    }

    fn assert_boundaries(&self) {
        let count = self.list.count();
        for index in 0..count {
            let state = self.list.item_state(index).unwrap();
            assert_eq!(state.first, index == 0, "first flag at {index} of {count}");
            assert_eq!(state.last, index == count - 1, "last flag at {index} of {count}");
            let row = self.list.get(index).unwrap();
            assert_eq!(row.has_class("first"), state.first);
            assert_eq!(row.has_class("last"), state.last);
        }
    }
}

fn counter() -> (Rc<Cell<usize>>, CompletionCallback) {
    let count = Rc::new(Cell::new(0));
    let inner = count.clone();
    (count, Box::new(move || inner.set(inner.get() + 1)))
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn test_insert_into_empty_list() {
    let mut h = Harness::new(ListViewOptions::default());
    assert!(h.list.is_placeholder_visible());

    assert_eq!(h.list.insert(0, Row::new("x")).unwrap(), 0);

    assert_eq!(h.list.count(), 1);
    let state = h.list.item_state(0).unwrap();
    assert!(state.first && state.last && !state.selected);
    assert!(!h.list.is_placeholder_visible());
    assert_eq!(*h.views.borrow(), vec![ContentView::Placeholder, ContentView::Content]);
    assert_eq!(*h.inserts.lock(), vec![InsertEvent { index: 0, count: 1 }]);
}

#[test]
fn test_append_moves_last_flag() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list.insert(0, Row::new("x")).unwrap();

    assert_eq!(h.list.insert(-1, Row::new("y")).unwrap(), 1);

    assert_eq!(h.labels(), vec!["x", "y"]);
    assert!(h.list.item_state(1).unwrap().last);
    assert!(!h.list.item_state(0).unwrap().last);
    assert!(h.list.item_state(0).unwrap().first);
    assert!(!h.list.get(0).unwrap().has_class("last"));
    assert_eq!(h.inserts.lock().last(), Some(&InsertEvent { index: 1, count: 1 }));
}

#[test]
fn test_remove_last_with_negative_index() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list.insert_many(0, vec![Row::new("x"), Row::new("y")]).unwrap();

    let removed = h.list.remove(-1).unwrap();

    assert_eq!(removed.label, "y");
    assert_eq!(h.list.count(), 1);
    assert!(h.list.item_state(0).unwrap().last);
    assert_eq!(*h.removes.lock(), vec![RemoveEvent { index: 1, count: 1 }]);
}

#[test]
fn test_single_selection_moves() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list.insert_many(0, vec![Row::new("a"), Row::new("b")]).unwrap();

    h.list.set_selection(0, 1, true).unwrap();
    h.list.set_selection(1, 1, true).unwrap();

    let events = h.selections.lock();
    assert_eq!(events.len(), 2);
    assert_eq!(events[1], SelectionEvent { select: vec![1], deselect: vec![0] });
    assert!(h.list.get(1).unwrap().has_class("selected"));
    assert!(!h.list.get(0).unwrap().has_class("selected"));
}

#[test]
fn test_multiple_mode_activation_toggles() {
    let mut h = Harness::new(ListViewOptions::default().with_selection(SelectionMode::Multiple));
    h.list
        .insert_many(0, vec![Row::new("a"), Row::new("b"), Row::new("c"), Row::new("d")])
        .unwrap();
    h.list.select(0).unwrap();
    h.selections.lock().clear();

    let handle = h.list.handle_at(2).unwrap();
    let first = h.list.activate(handle);
    assert_eq!(first.select, vec![2]);
    assert!(h.list.is_selected(2));

    let second = h.list.activate(handle);
    assert_eq!(second.deselect, vec![2]);
    assert!(!h.list.is_selected(2));

    assert_eq!(h.selections.lock().len(), 2);
    assert_eq!(h.list.selected_indices(), vec![0]);
}

#[test]
fn test_insert_past_end_leaves_list_untouched() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list
        .insert_many(0, vec![Row::new("a"), Row::new("b"), Row::new("c")])
        .unwrap();
    let sequences_before = h.sequences.borrow().len();

    let err = h.list.insert(5, Row::new("x")).unwrap_err();

    assert!(matches!(err, ListViewError::Range(RangeError::InsertIndex { index: 5, len: 3 })));
    assert_eq!(h.list.count(), 3);
    assert_eq!(h.inserts.lock().len(), 1);
    assert_eq!(h.sequences.borrow().len(), sequences_before);
    h.assert_boundaries();
}

#[test]
fn test_empty_insert_past_end_is_noop() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list
        .insert_many(0, vec![Row::new("a"), Row::new("b"), Row::new("c")])
        .unwrap();
    let sequences_before = h.sequences.borrow().len();
    let (fired, callback) = counter();

    assert_eq!(h.list.insert_with(99, Vec::new(), None, Some(callback)).unwrap(), 3);

    assert_eq!(h.labels(), vec!["a", "b", "c"]);
    assert_eq!(h.inserts.lock().len(), 1);
    assert_eq!(h.sequences.borrow().len(), sequences_before);
    h.assert_boundaries();

    assert_eq!(fired.get(), 0);
    h.tweener.advance(Duration::ZERO);
    assert_eq!(fired.get(), 1);
}

// =============================================================================
// Invariants
// =============================================================================

#[test]
fn test_boundary_flags_hold_through_mutations() {
    let mut h = Harness::new(ListViewOptions::unanimated());

    h.list.insert_many(0, vec![Row::new("c"), Row::new("d")]).unwrap();
    h.assert_boundaries();
    h.list.insert_many(0, vec![Row::new("a"), Row::new("b")]).unwrap();
    h.assert_boundaries();
    h.list.insert(2, Row::new("m")).unwrap();
    h.assert_boundaries();
    h.list.insert_many(-1, vec![Row::new("y"), Row::new("z")]).unwrap();
    h.assert_boundaries();
    assert_eq!(h.labels(), vec!["a", "b", "m", "c", "d", "y", "z"]);

    h.list.remove_range(0, 2).unwrap();
    h.assert_boundaries();
    h.list.remove_range(3, 2).unwrap();
    h.assert_boundaries();
    h.list.remove(1).unwrap();
    h.assert_boundaries();
    assert_eq!(h.labels(), vec!["m", "d"]);

    let rest = h.list.remove_range(0, 2).unwrap();
    assert_eq!(rest.len(), 2);
    assert!(h.list.is_empty());
    assert!(h.list.remove(0).is_err());
}

#[test]
fn test_single_mode_never_has_two_selected() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list
        .insert_many(0, (0..5).map(|_| Row::new("row")).collect())
        .unwrap();

    h.list.set_selection(0, 3, true).unwrap();
    assert_eq!(h.list.selected_indices(), vec![2]);
    h.list.set_selection(1, -1, true).unwrap();
    assert_eq!(h.list.selected_indices(), vec![4]);
    h.list.select(0).unwrap();
    assert_eq!(h.list.selected_indices(), vec![0]);
    h.list.insert(0, Row::new("new")).unwrap();
    h.list.select(3).unwrap();
    assert_eq!(h.list.selected_indices(), vec![3]);
}

#[test]
fn test_repeated_selection_is_silent() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list.insert_many(0, vec![Row::new("a"), Row::new("b")]).unwrap();

    assert!(!h.list.set_selection(1, 1, true).unwrap().is_empty());
    assert!(h.list.set_selection(1, 1, true).unwrap().is_empty());
    assert_eq!(h.selections.lock().len(), 1);
}

#[test]
fn test_none_mode_ignores_selection() {
    let mut h = Harness::new(ListViewOptions::default().with_selection(SelectionMode::None));
    h.list.insert(0, Row::new("a")).unwrap();

    assert!(h.list.set_selection(0, 1, true).unwrap().is_empty());
    assert!(h.list.set_selection(9, 1, true).unwrap().is_empty());
    let handle = h.list.handle_at(0).unwrap();
    assert!(h.list.activate(handle).is_empty());
    assert!(h.list.selection().is_empty());
    assert!(h.selections.lock().is_empty());
}

#[test]
fn test_selection_range_error() {
    let mut h = Harness::new(ListViewOptions::default().with_selection(SelectionMode::Multiple));
    h.list.insert_many(0, vec![Row::new("a"), Row::new("b")]).unwrap();

    let err = h.list.set_selection(1, 3, true).unwrap_err();
    assert!(matches!(err, ListViewError::Range(RangeError::SelectionRange { .. })));
    assert!(h.list.selected_indices().is_empty());
}

#[test]
fn test_selection_follows_removal() {
    let mut h = Harness::new(ListViewOptions::default().with_selection(SelectionMode::Multiple));
    h.list
        .insert_many(0, vec![Row::new("a"), Row::new("b"), Row::new("c")])
        .unwrap();
    h.list.set_selection(1, 2, true).unwrap();
    h.selections.lock().clear();

    h.list.remove(1).unwrap();

    assert_eq!(h.list.selected_indices(), vec![1]);
    assert_eq!(h.list.selection()[0].label, "c");
    assert!(h.selections.lock().is_empty());
}

#[test]
fn test_activation_ignores_inert_and_stale_items() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list.insert_many(0, vec![Row::inert("a"), Row::new("b")]).unwrap();

    let inert = h.list.handle_at(0).unwrap();
    assert!(h.list.activate(inert).is_empty());

    let stale = h.list.handle_at(1).unwrap();
    h.list.remove(1).unwrap();
    assert_eq!(h.list.index_of(stale), None);
    assert!(h.list.activate(stale).is_empty());
    assert!(h.selections.lock().is_empty());
}

// =============================================================================
// Animation and callbacks
// =============================================================================

#[test]
fn test_batch_callback_fires_once() {
    let mut h = Harness::new(ListViewOptions::default());
    let (fired, callback) = counter();

    let rows = vec![Row::new("a"), Row::new("b"), Row::new("c")];
    h.list.insert_with(0, rows, None, Some(callback)).unwrap();
    assert_eq!(fired.get(), 0);

    h.tweener.advance(Duration::from_millis(500));
    assert_eq!(fired.get(), 0);
    h.tweener.advance(Duration::from_millis(600));
    assert_eq!(fired.get(), 1);
    h.tweener.advance(Duration::from_secs(5));
    assert_eq!(fired.get(), 1);
    assert_eq!(h.tweener.active_transitions(), 0);
}

#[test]
fn test_batch_remove_callback_fires_once() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list
        .insert_many(0, vec![Row::new("a"), Row::new("b"), Row::new("c")])
        .unwrap();
    let (fired, callback) = counter();

    let removed = h.list.remove_with(0, 3, None, Some(callback)).unwrap();
    assert_eq!(removed.len(), 3);
    assert_eq!(fired.get(), 0);

    h.tweener.advance(Duration::from_millis(100));
    assert_eq!(fired.get(), 0);
    h.tweener.advance(Duration::from_millis(200));
    assert_eq!(fired.get(), 1);
    h.tweener.advance(Duration::from_secs(5));
    assert_eq!(fired.get(), 1);
    assert_eq!(h.tweener.tracked_nodes(), 0);
}

#[test]
fn test_enter_animation_reaches_natural_values() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list.insert(0, Row::new("a")).unwrap();
    let handle = h.list.handle_at(0).unwrap();

    assert_eq!(
        h.tweener.value(handle, AnimatedProperty::Size),
        Some(AnimatedValue::Size(ItemSize::height(0.0)))
    );
    h.tweener.advance(Duration::from_millis(1000));
    assert_eq!(
        h.tweener.value(handle, AnimatedProperty::Size),
        Some(AnimatedValue::Size(ItemSize::new(320.0, 40.0)))
    );
    assert_eq!(
        h.tweener.value(handle, AnimatedProperty::Opacity),
        Some(AnimatedValue::Opacity(1.0))
    );
}

#[test]
fn test_zero_scale_transform_stays_finite() {
    let collapsed = Some(Transform::scale(0.0));
    let mut h = Harness::new(
        ListViewOptions::default()
            .with_insert_transform(collapsed)
            .with_remove_transform(collapsed),
    );
    h.list.insert(0, Row::new("a")).unwrap();
    let handle = h.list.handle_at(0).unwrap();

    let transform = |h: &Harness| match h.tweener.value(handle, AnimatedProperty::Transform) {
        Some(AnimatedValue::Transform(transform)) => transform,
        other => panic!("expected a transform, got {other:?}"),
    };

    h.tweener.advance(Duration::from_millis(50));
    assert!(transform(&h).is_finite());
    h.tweener.advance(Duration::from_millis(1000));
    assert_eq!(transform(&h), Transform::IDENTITY);

    h.list.remove(0).unwrap();
    h.tweener.advance(Duration::from_millis(50));
    assert!(transform(&h).is_finite());
}

#[test]
fn test_transition_override() {
    let mut h = Harness::new(ListViewOptions::default());
    let (fired, callback) = counter();

    let fast = TransitionSpec::millis(10);
    h.list
        .insert_with(0, vec![Row::new("a")], Some(&fast), Some(callback))
        .unwrap();
    h.tweener.advance(Duration::from_millis(10));
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_callback_deferred_when_nothing_animates() {
    let mut h = Harness::new(ListViewOptions::unanimated());
    let (fired, callback) = counter();

    h.list.insert_with(0, vec![Row::new("a")], None, Some(callback)).unwrap();
    assert_eq!(fired.get(), 0, "never invoked synchronously");

    h.tweener.advance(Duration::ZERO);
    assert_eq!(fired.get(), 1);
}

#[test]
fn test_empty_calls_still_complete() {
    let mut h = Harness::new(ListViewOptions::default());
    let (inserted, on_insert) = counter();
    let (removed, on_remove) = counter();

    h.list.insert_with(0, Vec::new(), None, Some(on_insert)).unwrap();
    h.list.remove_with(0, 0, None, Some(on_remove)).unwrap();
    h.tweener.advance(Duration::ZERO);

    assert_eq!((inserted.get(), removed.get()), (1, 1));
    assert!(h.inserts.lock().is_empty());
    assert!(h.removes.lock().is_empty());
    assert!(h.list.is_placeholder_visible());
}

#[test]
fn test_removal_preempts_enter_callback() {
    let mut h = Harness::new(ListViewOptions::default());
    let (entered, on_enter) = counter();
    let (exited, on_exit) = counter();

    h.list.insert_with(0, vec![Row::new("a")], None, Some(on_enter)).unwrap();
    let handle = h.list.handle_at(0).unwrap();
    h.tweener.advance(Duration::from_millis(100));

    h.list.remove_with(0, 1, None, Some(on_exit)).unwrap();
    assert!(h.tweener.is_animating(handle));

    h.tweener.advance(Duration::from_secs(2));
    assert_eq!(entered.get(), 0);
    assert_eq!(exited.get(), 1);
    assert_eq!(h.tweener.tracked_nodes(), 0);
}

#[test]
fn test_callback_may_insert_again() {
    let h = Harness::new(ListViewOptions::default());
    let tweener = h.tweener.clone();
    let list = Rc::new(RefCell::new(h.list));

    let reentrant = list.clone();
    let on_complete: CompletionCallback = Box::new(move || {
        reentrant.borrow_mut().insert(-1, Row::new("second")).unwrap();
    });
    list.borrow_mut()
        .insert_with(0, vec![Row::new("first")], None, Some(on_complete))
        .unwrap();

    tweener.advance(Duration::from_millis(1000));

    let list = list.borrow();
    assert_eq!(list.count(), 2);
    assert_eq!(list.get(1).unwrap().label, "second");
    assert!(list.item_state(1).unwrap().last);
    assert!(!list.item_state(0).unwrap().last);
}

#[test]
fn test_callback_may_remove_again() {
    let h = Harness::new(ListViewOptions::default());
    let tweener = h.tweener.clone();
    let list = Rc::new(RefCell::new(h.list));
    list.borrow_mut()
        .insert_many(0, vec![Row::new("a"), Row::new("b"), Row::new("c")])
        .unwrap();

    let reentrant = list.clone();
    let on_complete: CompletionCallback = Box::new(move || {
        let removed = reentrant.borrow_mut().remove(-1).unwrap();
        assert_eq!(removed.label, "c");
    });
    list.borrow_mut().remove_with(0, 1, None, Some(on_complete)).unwrap();

    tweener.advance(Duration::from_millis(200));

    let list = list.borrow();
    assert_eq!(list.count(), 1);
    assert_eq!(list.get(0).unwrap().label, "b");
    let state = list.item_state(0).unwrap();
    assert!(state.first && state.last);
    assert_eq!(
        *h.removes.lock(),
        vec![RemoveEvent { index: 0, count: 1 }, RemoveEvent { index: 1, count: 1 }]
    );
}

// =============================================================================
// Collaborators
// =============================================================================

#[test]
fn test_placeholder_switches_only_on_change() {
    let mut h = Harness::new(ListViewOptions::default());

    h.list.insert(0, Row::new("a")).unwrap();
    h.list.insert(0, Row::new("b")).unwrap();
    h.list.remove(0).unwrap();
    h.list.remove(0).unwrap();
    h.list.remove_range(0, 0).unwrap();
    h.list.insert_many(0, Vec::new()).unwrap();

    assert_eq!(
        *h.views.borrow(),
        vec![ContentView::Placeholder, ContentView::Content, ContentView::Placeholder]
    );
    assert!(h.list.is_placeholder_visible());
}

#[test]
fn test_viewport_sees_display_order() {
    let mut h = Harness::new(ListViewOptions::default());
    h.list.insert_many(0, vec![Row::new("a"), Row::new("c")]).unwrap();
    h.list.insert(1, Row::new("b")).unwrap();

    let expected: Vec<ItemHandle> = (0..3).map(|i| h.list.handle_at(i).unwrap()).collect();
    assert_eq!(h.sequences.borrow().last(), Some(&expected));

    h.list.remove(0).unwrap();
    assert_eq!(h.sequences.borrow().last(), Some(&expected[1..].to_vec()));
    assert_eq!(h.sequences.borrow().len(), 3);
}

#[test]
fn test_custom_presenter() {
    let mut h = Harness::new(ListViewOptions::default());
    let log = Rc::new(RefCell::new(Vec::new()));
    let recorded = log.clone();
    h.list.set_state_presenter(Box::new(
        move |index: usize, _: &mut Row, flag: StateFlag, value: bool| {
            recorded.borrow_mut().push((index, flag, value));
        },
    ));

    h.list.insert(0, Row::new("a")).unwrap();

    assert_eq!(
        *log.borrow(),
        vec![(0, StateFlag::First, true), (0, StateFlag::Last, true)]
    );
    assert!(h.list.get(0).unwrap().classes.is_empty());
}

#[test]
fn test_options_file_configures_list() {
    let options = ListViewOptions::from_toml_str(
        r#"
        selection = 2
        selected_class = "active"
        "#,
    )
    .unwrap();
    let mut h = Harness::new(options);
    h.list.insert_many(0, vec![Row::new("a"), Row::new("b")]).unwrap();
    h.list.set_selection(0, -1, true).unwrap();

    assert_eq!(h.list.selection_mode(), SelectionMode::Multiple);
    assert!(h.list.get(1).unwrap().has_class("active"));
    assert_eq!(h.list.options().selected_class.as_deref(), Some("active"));
}
