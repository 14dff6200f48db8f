//! Prelude module for Horizon ListView.
//!
//! ```ignore
//! use horizon_listview::prelude::*;
//! ```

// ============================================================================
// List Widget
// ============================================================================

pub use crate::widget::{
    ContentSwitcher, ContentView, InsertEvent, ListView, ListViewOptions, RemoveEvent, Viewport,
};

// ============================================================================
// Items and Selection
// ============================================================================

pub use crate::model::{
    ItemHandle, ItemState, ListPayload, SelectionEvent, SelectionMode, StateFlag, StatePresenter,
    StyleClasses,
};

// ============================================================================
// Animation
// ============================================================================

pub use crate::animation::{
    AnimatedProperty, AnimatedValue, Animator, CompletionCallback, Easing, ItemSize, Transform,
    TransitionSpec, Tweener,
};

// ============================================================================
// Signals and Errors
// ============================================================================

pub use crate::error::{ConfigurationError, ListViewError, RangeError};
pub use horizon_listview_core::{ConnectionId, Signal};
