//! Core systems for Horizon ListView.
//!
//! This crate provides the foundational pieces shared by the list widget:
//!
//! - **Signal/Slot System**: Type-safe notification of inserts, removals and
//!   selection changes
//! - **Logging**: `tracing` target names used across the workspace
//!
//! # Signal/Slot Example
//!
//! ```
//! use horizon_listview_core::Signal;
//!
//! let count_changed = Signal::<usize>::new();
//!
//! let conn_id = count_changed.connect(|count| {
//!     println!("Count changed to: {}", count);
//! });
//!
//! count_changed.emit(42);
//! count_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use signal::{ConnectionGuard, ConnectionId, Signal};
