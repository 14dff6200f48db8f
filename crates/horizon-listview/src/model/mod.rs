//! Item model for the list: items, ordered storage, flag tracking and
//! selection.
//!
//! - [`ItemStore`] - ordered items with index normalization
//! - [`StateTracker`] - first/last bookkeeping and idempotent flag changes
//! - [`SelectionController`] - none/single/multiple selection
//! - [`ListPayload`] - the capability interface payloads implement

mod item;
mod selection;
mod state;
mod store;

pub use item::{Item, ItemHandle, ItemState, ListPayload, StateFlag, StyleClasses};
pub use selection::{SelectionController, SelectionEvent, SelectionMode};
pub use state::{ClassPresenter, StatePresenter, StateTracker};
pub use store::ItemStore;
