//! Selection handling for the list.
//!
//! [`SelectionController`] implements the selection-mode state machine on
//! top of the `selected` flag each item carries. It records the net effect of
//! a call so the list can emit one [`SelectionEvent`] per call.
//!
//! # Example
//!
//! ```ignore
//! use horizon_listview::model::SelectionMode;
//!
//! let mut list = ListView::new(
//!     ListViewOptions::default().with_selection(SelectionMode::Multiple),
//!     animator, viewport, switcher,
//! )?;
//!
//! list.selection_changed.connect(|event| {
//!     println!("Selection changed: +{:?} -{:?}", event.select, event.deselect);
//! });
//!
//! list.set_selection(0, -1, true)?; // select everything
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use horizon_listview_core::logging::targets;
use serde::{Deserialize, Serialize};

use super::item::StateFlag;
use super::state::{StatePresenter, StateTracker};
use super::store::ItemStore;
use crate::error::{ConfigurationError, RangeError};

/// Selection behavior mode for the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// No items can be selected.
    None,
    /// Only one item can be selected at a time (default).
    #[default]
    Single,
    /// Any subset of items can be selected.
    Multiple,
}

impl SelectionMode {
    /// Look up a mode by its numeric code (0 = none, 1 = single, 2 = multiple).
    pub fn from_code(code: i64) -> Result<Self, ConfigurationError> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Single),
            2 => Ok(Self::Multiple),
            other => Err(ConfigurationError::InvalidSelectionMode(other.to_string())),
        }
    }
}

impl FromStr for SelectionMode {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "single" => Ok(Self::Single),
            "multiple" => Ok(Self::Multiple),
            _ => Err(ConfigurationError::InvalidSelectionMode(s.to_string())),
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Multiple => "multiple",
        };
        f.write_str(name)
    }
}

/// Net selection change produced by one call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionEvent {
    /// Indices that became selected, ascending.
    pub select: Vec<usize>,
    /// Indices that became deselected, ascending.
    pub deselect: Vec<usize>,
}

impl SelectionEvent {
    /// True when nothing changed.
    pub fn is_empty(&self) -> bool {
        self.select.is_empty() && self.deselect.is_empty()
    }
}

/// Collects flag changes during a call and reduces them to net changes.
#[derive(Debug, Default)]
struct ChangeRecord {
    /// Index -> value before the call, for every index touched.
    before: BTreeMap<usize, bool>,
}

impl ChangeRecord {
    fn note(&mut self, index: usize, new_value: bool) {
        self.before.entry(index).or_insert(!new_value);
    }

    fn into_event<P>(self, store: &ItemStore<P>) -> SelectionEvent {
        let mut event = SelectionEvent::default();
        for (index, was_selected) in self.before {
            let now_selected = store.get(index).is_some_and(|item| item.state.selected);
            match (was_selected, now_selected) {
                (false, true) => event.select.push(index),
                (true, false) => event.deselect.push(index),
                _ => {}
            }
        }
        event
    }
}

/// Selection-mode state machine over the items' `selected` flags.
///
/// The mode is fixed when the controller is created.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionController {
    mode: SelectionMode,
}

impl SelectionController {
    /// Create a controller for `mode`.
    pub fn new(mode: SelectionMode) -> Self {
        Self { mode }
    }

    /// The selection mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Select or deselect `count` items starting at `index`.
    ///
    /// A negative `count` extends the range to the end of the list. In
    /// [`SelectionMode::None`] the call is ignored entirely. Otherwise the
    /// range must lie inside the store; if it does not, nothing changes.
    ///
    /// Returns the net change, which is empty when no flag actually changed.
    pub fn set_selection<P>(
        &self,
        store: &mut ItemStore<P>,
        presenter: &mut dyn StatePresenter<P>,
        index: usize,
        count: isize,
        selected: bool,
    ) -> Result<SelectionEvent, RangeError> {
        if self.mode == SelectionMode::None {
            tracing::trace!(target: targets::SELECTION, index, count, "selection disabled, ignoring");
            return Ok(SelectionEvent::default());
        }

        let len = store.len();
        let error = RangeError::SelectionRange { index, count, len };
        if index > len {
            return Err(error);
        }
        let span = if count < 0 { len - index } else { count as usize };
        let end = match index.checked_add(span) {
            Some(end) if end <= len => end,
            _ => return Err(error),
        };

        let mut record = ChangeRecord::default();
        for target in index..end {
            if !selected || self.mode == SelectionMode::Multiple {
                if StateTracker::set_flag(store, presenter, target, StateFlag::Selected, selected) {
                    record.note(target, selected);
                }
                continue;
            }

            // Single: the target wins, everything else in the list is cleared.
            for other in 0..len {
                let value = other == target;
                if StateTracker::set_flag(store, presenter, other, StateFlag::Selected, value) {
                    record.note(other, value);
                }
            }
        }

        let event = record.into_event(store);
        if !event.is_empty() {
            tracing::debug!(
                target: targets::SELECTION,
                select = ?event.select,
                deselect = ?event.deselect,
                "selection changed"
            );
        }
        Ok(event)
    }

    /// React to an activation of the item at `index`.
    ///
    /// Single mode selects the item, multiple mode toggles it, none ignores it.
    pub fn activate<P>(
        &self,
        store: &mut ItemStore<P>,
        presenter: &mut dyn StatePresenter<P>,
        index: usize,
    ) -> Result<SelectionEvent, RangeError> {
        match self.mode {
            SelectionMode::None => Ok(SelectionEvent::default()),
            SelectionMode::Single => self.set_selection(store, presenter, index, 1, true),
            SelectionMode::Multiple => {
                let currently = store
                    .get(index)
                    .map(|item| item.state.selected)
                    .ok_or(RangeError::Index { index, len: store.len() })?;
                self.set_selection(store, presenter, index, 1, !currently)
            }
        }
    }

    /// Indices of selected items, ascending.
    pub fn selected_indices<P>(store: &ItemStore<P>) -> Vec<usize> {
        store
            .iter()
            .enumerate()
            .filter(|(_, item)| item.state.selected)
            .map(|(index, _)| index)
            .collect()
    }

    /// Selected payloads, in list order.
    pub fn selected_payloads<P>(store: &ItemStore<P>) -> Vec<&P> {
        store
            .iter()
            .filter(|item| item.state.selected)
            .map(|item| &item.payload)
            .collect()
    }
}
