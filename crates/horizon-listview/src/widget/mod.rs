//! The list widget and its collaborators.
//!
//! - [`ListView`] - the facade hosts drive
//! - [`ListViewOptions`] - configuration, in code or loaded from TOML/JSON
//! - [`TransitionCoordinator`] - enter/exit animation scheduling
//! - [`PlaceholderSwitch`] - content/placeholder switching
//!
//! The host supplies three collaborators: an [`Animator`](crate::animation::Animator)
//! for item nodes, a [`Viewport`] that lays the nodes out, and a
//! [`ContentSwitcher`] that shows either the items or the placeholder.

mod list_view;
mod options;
mod placeholder;
mod settings;
mod transitions;

pub use list_view::{InsertEvent, ListView, RemoveEvent, Viewport};
pub use options::ListViewOptions;
pub use placeholder::{ContentSwitcher, ContentView, PlaceholderSwitch};
pub use transitions::{EnterPlan, ExitPlan, TransitionCoordinator};
