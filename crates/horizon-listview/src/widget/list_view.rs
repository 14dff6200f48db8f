//! The animated list widget.
//!
//! [`ListView`] ties the model together: it owns the [`ItemStore`], keeps the
//! first/last/selected flags current, schedules enter and exit animations
//! through an [`Animator`], tells a [`Viewport`] which item nodes to lay out,
//! and switches between content and placeholder as the list fills and
//! empties.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_listview::prelude::*;
//!
//! struct Row(&'static str);
//!
//! impl ListPayload for Row {
//!     fn natural_size(&self) -> ItemSize {
//!         ItemSize::height(32.0)
//!     }
//! }
//!
//! let tweener = Tweener::new();
//! let mut list = ListView::new(
//!     ListViewOptions::default(),
//!     Box::new(tweener.clone()),
//!     Box::new(|_: &[ItemHandle]| {}),
//!     Box::new(|_: ContentView, _: &TransitionSpec| {}),
//! )
//! .unwrap();
//!
//! list.insert_many(0, vec![Row("a"), Row("b")]).unwrap();
//! list.select(1).unwrap();
//! assert_eq!(list.selected_indices(), vec![1]);
//!
//! // Frame loop.
//! tweener.advance(Duration::from_millis(16));
//! ```
//!
//! # Reentrancy
//!
//! Completion callbacks run from the animator, after the call that scheduled
//! them has returned. A callback may therefore capture the list (e.g. through
//! `Rc<RefCell<ListView<_>>>`) and insert or remove more items.

use std::fmt;

use horizon_listview_core::logging::targets;
use horizon_listview_core::Signal;

use super::options::ListViewOptions;
use super::placeholder::{ContentSwitcher, ContentView, PlaceholderSwitch};
use super::transitions::{EnterPlan, ExitPlan, TransitionCoordinator};
use crate::animation::{Animator, CompletionCallback, TransitionSpec};
use crate::error::{RangeError, Result};
use crate::model::{
    ItemHandle, ItemState, ItemStore, ListPayload, SelectionController, SelectionEvent, SelectionMode,
    StatePresenter, StateTracker,
};

/// Host-side layout of item nodes.
pub trait Viewport {
    /// The item nodes to lay out, in display order. Called after every
    /// insert or remove that changed the list.
    fn set_sequence(&mut self, handles: &[ItemHandle]);
}

impl<F> Viewport for F
where
    F: FnMut(&[ItemHandle]),
{
    fn set_sequence(&mut self, handles: &[ItemHandle]) {
        self(handles)
    }
}

/// Items were inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertEvent {
    /// Normalized index of the first new item.
    pub index: usize,
    /// Number of items inserted.
    pub count: usize,
}

/// Items were removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveEvent {
    /// Normalized index the removed range started at.
    pub index: usize,
    /// Number of items removed.
    pub count: usize,
}

/// An ordered, animated list of `P` payloads.
///
/// All operations run on the UI thread. Failing operations leave the list,
/// its flags, the placeholder and the signals untouched.
pub struct ListView<P: ListPayload> {
    store: ItemStore<P>,
    selection: SelectionController,
    presenter: Box<dyn StatePresenter<P>>,
    transitions: TransitionCoordinator,
    viewport: Box<dyn Viewport>,
    switcher: Box<dyn ContentSwitcher>,
    placeholder: PlaceholderSwitch,
    enter_plan: EnterPlan,
    exit_plan: ExitPlan,
    options: ListViewOptions,

    /// Emitted after items were inserted.
    pub inserted: Signal<InsertEvent>,
    /// Emitted after items were removed.
    pub removed: Signal<RemoveEvent>,
    /// Emitted once per call that changed the selection.
    pub selection_changed: Signal<SelectionEvent>,
}

impl<P: ListPayload> ListView<P> {
    /// Create an empty list.
    ///
    /// Fails with a configuration error if `options` do not validate. The
    /// placeholder is shown immediately, without animation.
    pub fn new(
        options: ListViewOptions,
        animator: Box<dyn Animator>,
        viewport: Box<dyn Viewport>,
        mut switcher: Box<dyn ContentSwitcher>,
    ) -> Result<Self> {
        options.validate()?;
        tracing::debug!(
            target: targets::LIST_VIEW,
            selection = %options.selection,
            "creating list view"
        );

        switcher.show(ContentView::Placeholder, &TransitionSpec::instant());

        Ok(Self {
            store: ItemStore::new(),
            selection: SelectionController::new(options.selection),
            presenter: Box::new(options.class_presenter()),
            transitions: TransitionCoordinator::new(animator),
            viewport,
            switcher,
            placeholder: PlaceholderSwitch::new(),
            enter_plan: options.enter_plan(),
            exit_plan: options.exit_plan(),
            options,
            inserted: Signal::new(),
            removed: Signal::new(),
            selection_changed: Signal::new(),
        })
    }

    /// Replace the presenter that reflects flag changes on payloads.
    ///
    /// The default presenter toggles the configured style classes.
    pub fn set_state_presenter(&mut self, presenter: Box<dyn StatePresenter<P>>) {
        self.presenter = presenter;
    }

    /// The options the list was created with.
    pub fn options(&self) -> &ListViewOptions {
        &self.options
    }

    /// The selection mode.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    // =========================================================================
    // Insertion
    // =========================================================================

    /// Insert one payload at `index` (negative appends).
    ///
    /// Returns the normalized index.
    pub fn insert(&mut self, index: isize, payload: P) -> Result<usize> {
        self.insert_with(index, vec![payload], None, None)
    }

    /// Insert a batch of payloads at `index` (negative appends), preserving
    /// their order.
    pub fn insert_many(&mut self, index: isize, payloads: Vec<P>) -> Result<usize> {
        self.insert_with(index, payloads, None, None)
    }

    /// Insert with an optional transition override and completion callback.
    ///
    /// The whole batch enters together; `on_complete` runs once, later, from
    /// the animator. An empty batch inserts nothing and emits no event, but
    /// still runs `on_complete`.
    #[tracing::instrument(skip(self, payloads, transition, on_complete), target = "horizon_listview::list_view", level = "debug")]
    pub fn insert_with(
        &mut self,
        index: isize,
        payloads: Vec<P>,
        transition: Option<&TransitionSpec>,
        on_complete: Option<CompletionCallback>,
    ) -> Result<usize> {
        let previous_len = self.store.len();
        let range = self.store.insert(index, payloads)?;
        let start = range.start;
        let count = range.len();

        StateTracker::after_insert(&mut self.store, self.presenter.as_mut(), start, count, previous_len);

        let items: Vec<_> = range
            .filter_map(|i| self.store.get(i))
            .map(|item| (item.handle(), item.payload().natural_size()))
            .collect();
        if count > 0 {
            self.viewport.set_sequence(self.store.handles());
        }

        let transition = transition.unwrap_or(&self.options.insert_transition);
        self.transitions.enter(items, &self.enter_plan, transition, on_complete);
        self.evaluate_placeholder();

        if count > 0 {
            tracing::debug!(target: targets::LIST_VIEW, index = start, count, len = self.store.len(), "inserted");
            self.inserted.emit(InsertEvent { index: start, count });
        }
        Ok(start)
    }

    // =========================================================================
    // Removal
    // =========================================================================

    /// Remove the item at `index` (negative means the last item).
    ///
    /// Returns the removed payload.
    pub fn remove(&mut self, index: isize) -> Result<P> {
        let mut removed = self.remove_with(index, 1, None, None)?;
        // One item was requested and the range check passed.
        removed
            .pop()
            .ok_or_else(|| RangeError::RemoveRange { index, count: 1, len: self.store.len() }.into())
    }

    /// Remove `count` items starting at `index` (negative means the last
    /// item).
    pub fn remove_range(&mut self, index: isize, count: usize) -> Result<Vec<P>> {
        self.remove_with(index, count, None, None)
    }

    /// Remove with an optional transition override and completion callback.
    ///
    /// The removed items leave the list at once and their nodes animate out;
    /// their payloads are handed back. A zero `count` removes nothing and
    /// emits no event, but still runs `on_complete`.
    #[tracing::instrument(skip(self, transition, on_complete), target = "horizon_listview::list_view", level = "debug")]
    pub fn remove_with(
        &mut self,
        index: isize,
        count: usize,
        transition: Option<&TransitionSpec>,
        on_complete: Option<CompletionCallback>,
    ) -> Result<Vec<P>> {
        let (start, removed) = self.store.remove(index, count)?;
        let removed_count = removed.len();

        if removed_count > 0 && !self.store.is_empty() {
            StateTracker::after_remove(&mut self.store, self.presenter.as_mut(), start);
        }
        if removed_count > 0 {
            self.viewport.set_sequence(self.store.handles());
        }

        let transition = transition.unwrap_or(&self.options.remove_transition);
        let handles: Vec<ItemHandle> = removed.iter().map(|item| item.handle()).collect();
        self.transitions.exit(handles, &self.exit_plan, transition, on_complete);
        self.evaluate_placeholder();

        if removed_count > 0 {
            tracing::debug!(
                target: targets::LIST_VIEW,
                index = start,
                count = removed_count,
                len = self.store.len(),
                "removed"
            );
            self.removed.emit(RemoveEvent {
                index: start,
                count: removed_count,
            });
        }
        Ok(removed.into_iter().map(|item| item.into_payload()).collect())
    }

    fn evaluate_placeholder(&mut self) {
        self.placeholder.evaluate(
            self.store.len(),
            self.switcher.as_mut(),
            &self.options.show_placeholder_transition,
            &self.options.hide_placeholder_transition,
        );
    }

    // =========================================================================
    // Access
    // =========================================================================

    /// Number of items.
    pub fn count(&self) -> usize {
        self.store.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Payload at `index`.
    pub fn get(&self, index: usize) -> Result<&P> {
        self.store
            .get(index)
            .map(|item| item.payload())
            .ok_or_else(|| self.index_error(index))
    }

    /// Mutable payload at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut P> {
        let len = self.store.len();
        self.store
            .get_mut(index)
            .map(|item| item.payload_mut())
            .ok_or_else(|| RangeError::Index { index, len }.into())
    }

    /// Visual handle of the item at `index`.
    pub fn handle_at(&self, index: usize) -> Result<ItemHandle> {
        self.store
            .get(index)
            .map(|item| item.handle())
            .ok_or_else(|| self.index_error(index))
    }

    /// Current index of `handle`, or `None` once the item has left the list.
    pub fn index_of(&self, handle: ItemHandle) -> Option<usize> {
        self.store.index_of(handle)
    }

    /// Flags of the item at `index`.
    pub fn item_state(&self, index: usize) -> Result<ItemState> {
        self.store
            .get(index)
            .map(|item| item.state())
            .ok_or_else(|| self.index_error(index))
    }

    /// Payloads in display order.
    pub fn iter(&self) -> impl Iterator<Item = &P> + '_ {
        self.store.iter().map(|item| item.payload())
    }

    /// Whether the placeholder is currently shown.
    pub fn is_placeholder_visible(&self) -> bool {
        self.placeholder.is_visible()
    }

    fn index_error(&self, index: usize) -> crate::error::ListViewError {
        RangeError::Index {
            index,
            len: self.store.len(),
        }
        .into()
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Select or deselect `count` items from `index` (`count < 0` runs to the
    /// end of the list).
    ///
    /// Emits [`selection_changed`](Self::selection_changed) once if any flag
    /// changed. Ignored entirely in [`SelectionMode::None`].
    pub fn set_selection(&mut self, index: usize, count: isize, selected: bool) -> Result<SelectionEvent> {
        let event = self
            .selection
            .set_selection(&mut self.store, self.presenter.as_mut(), index, count, selected)?;
        self.emit_selection(&event);
        Ok(event)
    }

    /// Select the item at `index`.
    pub fn select(&mut self, index: usize) -> Result<SelectionEvent> {
        self.set_selection(index, 1, true)
    }

    /// Deselect the item at `index`.
    pub fn deselect(&mut self, index: usize) -> Result<SelectionEvent> {
        self.set_selection(index, 1, false)
    }

    /// Deselect every item.
    pub fn clear_selection(&mut self) -> SelectionEvent {
        // The whole-list range is always in bounds.
        self.set_selection(0, -1, false).unwrap_or_default()
    }

    /// Selected payloads, in list order.
    pub fn selection(&self) -> Vec<&P> {
        SelectionController::selected_payloads(&self.store)
    }

    /// Indices of selected items, ascending.
    pub fn selected_indices(&self) -> Vec<usize> {
        SelectionController::selected_indices(&self.store)
    }

    /// Whether the item at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.store.get(index).is_some_and(|item| item.state().selected)
    }

    /// React to an activation (tap, click) of the item behind `handle`.
    ///
    /// Single mode selects it, multiple mode toggles it. Items whose payload
    /// is not activatable, and handles of items that left the list, are
    /// ignored.
    pub fn activate(&mut self, handle: ItemHandle) -> SelectionEvent {
        let Some(index) = self.store.index_of(handle) else {
            tracing::debug!(target: targets::LIST_VIEW, ?handle, "ignoring activation of removed item");
            return SelectionEvent::default();
        };
        if !self.store.get(index).is_some_and(|item| item.payload().is_activatable()) {
            tracing::debug!(target: targets::LIST_VIEW, index, "item is not activatable");
            return SelectionEvent::default();
        }

        match self.selection.activate(&mut self.store, self.presenter.as_mut(), index) {
            Ok(event) => {
                self.emit_selection(&event);
                event
            }
            Err(error) => {
                tracing::debug!(target: targets::LIST_VIEW, %error, "activation out of range");
                SelectionEvent::default()
            }
        }
    }

    fn emit_selection(&self, event: &SelectionEvent) {
        if !event.is_empty() {
            self.selection_changed.emit(event.clone());
        }
    }
}

impl<P: ListPayload> fmt::Debug for ListView<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListView")
            .field("count", &self.store.len())
            .field("selection", &self.selection.mode())
            .field("placeholder_visible", &self.placeholder.is_visible())
            .field("transitions", &self.transitions)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::{ItemSize, Tweener};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Row(u32);

    impl ListPayload for Row {
        fn natural_size(&self) -> ItemSize {
            ItemSize::height(20.0)
        }
    }

    fn list(options: ListViewOptions) -> (ListView<Row>, Rc<RefCell<Vec<ContentView>>>) {
        let views = Rc::new(RefCell::new(Vec::new()));
        let recorded = views.clone();
        let list = ListView::new(
            options,
            Box::new(Tweener::new()),
            Box::new(|_: &[ItemHandle]| {}),
            Box::new(move |view: ContentView, _: &TransitionSpec| recorded.borrow_mut().push(view)),
        )
        .unwrap();
        (list, views)
    }

    #[test]
    fn test_new_shows_placeholder() {
        let (list, views) = list(ListViewOptions::default());
        assert!(list.is_placeholder_visible());
        assert_eq!(*views.borrow(), vec![ContentView::Placeholder]);
    }

    #[test]
    fn test_invalid_options_rejected() {
        let result = ListView::<Row>::new(
            ListViewOptions::default().with_show_opacity(Some(2.0)),
            Box::new(Tweener::new()),
            Box::new(|_: &[ItemHandle]| {}),
            Box::new(|_: ContentView, _: &TransitionSpec| {}),
        );
        assert!(matches!(result, Err(crate::error::ListViewError::Configuration(_))));
    }

    #[test]
    fn test_get_out_of_range() {
        let (mut list, _) = list(ListViewOptions::default());
        list.insert(0, Row(7)).unwrap();
        assert_eq!(list.get(0).unwrap().0, 7);
        assert!(matches!(
            list.get(1),
            Err(crate::error::ListViewError::Range(RangeError::Index { index: 1, len: 1 }))
        ));
        list.get_mut(0).unwrap().0 = 8;
        assert_eq!(list.iter().map(|row| row.0).collect::<Vec<_>>(), vec![8]);
    }

    #[test]
    fn test_remove_single_returns_payload() {
        let (mut list, _) = list(ListViewOptions::default());
        list.insert_many(-1, vec![Row(1), Row(2)]).unwrap();
        assert_eq!(list.remove(0).unwrap().0, 1);
        assert!(list.remove(4).is_err());
        assert_eq!(list.count(), 1);
    }

    #[test]
    fn test_clear_selection() {
        let (mut list, _) = list(ListViewOptions::default().with_selection(SelectionMode::Multiple));
        list.insert_many(0, vec![Row(1), Row(2), Row(3)]).unwrap();
        list.set_selection(0, -1, true).unwrap();
        let event = list.clear_selection();
        assert_eq!(event.deselect, vec![0, 1, 2]);
        assert!(list.selected_indices().is_empty());
    }

    #[test]
    fn test_default_payload_is_activatable() {
        let (mut list, _) = list(ListViewOptions::default().with_selection(SelectionMode::Single));
        list.insert_many(0, vec![Row(1), Row(2)]).unwrap();
        let handle = list.handle_at(1).unwrap();
        let event = list.activate(handle);
        assert_eq!(event.select, vec![1]);
        assert_eq!(list.selected_indices(), vec![1]);
    }
}
