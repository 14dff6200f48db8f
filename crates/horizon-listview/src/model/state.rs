//! First/last/selected flag tracking.
//!
//! [`StateTracker`] owns no state of its own: it operates on the flags stored
//! in each [`Item`](super::Item) and reports every actual change to a
//! [`StatePresenter`], exactly once per change.

use horizon_listview_core::logging::targets;

use super::item::{ListPayload, StateFlag};
use super::store::ItemStore;

/// Receives flag changes so they can be reflected visually.
///
/// Any `FnMut(usize, &mut P, StateFlag, bool)` closure is a presenter.
pub trait StatePresenter<P> {
    /// `flag` of the item at `index` changed to `value`.
    fn present(&mut self, index: usize, payload: &mut P, flag: StateFlag, value: bool);
}

impl<P, F> StatePresenter<P> for F
where
    F: FnMut(usize, &mut P, StateFlag, bool),
{
    fn present(&mut self, index: usize, payload: &mut P, flag: StateFlag, value: bool) {
        self(index, payload, flag, value)
    }
}

/// Presenter that mirrors flags as style classes on payloads that support
/// [`StyleClasses`](super::StyleClasses).
///
/// A flag whose class name is `None` is tracked but not presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPresenter {
    /// Class for [`StateFlag::First`].
    pub first_class: Option<String>,
    /// Class for [`StateFlag::Last`].
    pub last_class: Option<String>,
    /// Class for [`StateFlag::Selected`].
    pub selected_class: Option<String>,
}

impl Default for ClassPresenter {
    fn default() -> Self {
        Self {
            first_class: Some("first".to_string()),
            last_class: Some("last".to_string()),
            selected_class: Some("selected".to_string()),
        }
    }
}

impl ClassPresenter {
    /// Class name used for `flag`, if any.
    pub fn class_for(&self, flag: StateFlag) -> Option<&str> {
        match flag {
            StateFlag::First => self.first_class.as_deref(),
            StateFlag::Last => self.last_class.as_deref(),
            StateFlag::Selected => self.selected_class.as_deref(),
        }
    }
}

impl<P: ListPayload> StatePresenter<P> for ClassPresenter {
    fn present(&mut self, _index: usize, payload: &mut P, flag: StateFlag, value: bool) {
        let Some(class) = self.class_for(flag) else {
            return;
        };
        let Some(classes) = payload.style_classes() else {
            return;
        };
        if value {
            classes.add_class(class);
        } else {
            classes.remove_class(class);
        }
    }
}

/// Stateless operator that keeps first/last flags consistent with the
/// store order and applies individual flag changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateTracker;

impl StateTracker {
    /// Set `flag` on the item at `index`.
    ///
    /// Calls the presenter and returns `true` only if the flag changed.
    /// Setting a flag to the value it already has, or addressing an index
    /// outside the store, does nothing.
    pub fn set_flag<P>(
        store: &mut ItemStore<P>,
        presenter: &mut dyn StatePresenter<P>,
        index: usize,
        flag: StateFlag,
        value: bool,
    ) -> bool {
        let Some(item) = store.get_mut(index) else {
            return false;
        };
        if !item.state.set(flag, value) {
            return false;
        }
        tracing::trace!(target: targets::STATE, index, ?flag, value, "flag changed");
        presenter.present(index, &mut item.payload, flag, value);
        true
    }

    /// Update boundary flags after `inserted` items were spliced in at
    /// `index` into a store that previously held `previous_len` items.
    pub fn after_insert<P>(
        store: &mut ItemStore<P>,
        presenter: &mut dyn StatePresenter<P>,
        index: usize,
        inserted: usize,
        previous_len: usize,
    ) {
        if inserted == 0 {
            return;
        }

        if index == 0 {
            Self::set_flag(store, presenter, 0, StateFlag::First, true);
            if previous_len > 0 {
                Self::set_flag(store, presenter, inserted, StateFlag::First, false);
            }
        }

        if index == previous_len {
            let new_last = previous_len + inserted - 1;
            Self::set_flag(store, presenter, new_last, StateFlag::Last, true);
            if previous_len > 0 {
                // Appending does not shift the old tail.
                Self::set_flag(store, presenter, previous_len - 1, StateFlag::Last, false);
            }
        }
    }

    /// Update boundary flags after items were removed starting at `index`.
    ///
    /// The idempotent setter makes it safe to re-assert a flag the
    /// surviving boundary item already carries.
    pub fn after_remove<P>(store: &mut ItemStore<P>, presenter: &mut dyn StatePresenter<P>, index: usize) {
        let len = store.len();
        if len == 0 {
            return;
        }

        if index == 0 {
            Self::set_flag(store, presenter, 0, StateFlag::First, true);
        }
        if index == len {
            Self::set_flag(store, presenter, len - 1, StateFlag::Last, true);
        }
    }
}
