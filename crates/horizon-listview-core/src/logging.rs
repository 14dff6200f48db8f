//! Logging facilities for Horizon ListView.
//!
//! Horizon ListView uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter("horizon_listview=debug")
//!         .init();
//!
//!     // Your application code...
//! }
//! ```
//!
//! Every event is emitted with one of the [`targets`] below, so a subscriber
//! can filter by subsystem.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "horizon_listview_core::signal";
    /// List facade target (insert/remove/selection entry points).
    pub const LIST_VIEW: &str = "horizon_listview::list_view";
    /// Item store mutations.
    pub const STORE: &str = "horizon_listview::store";
    /// First/last/selected flag changes.
    pub const STATE: &str = "horizon_listview::state";
    /// Selection controller.
    pub const SELECTION: &str = "horizon_listview::selection";
    /// Enter/exit transition scheduling.
    pub const TRANSITION: &str = "horizon_listview::transition";
    /// Placeholder visibility switching.
    pub const PLACEHOLDER: &str = "horizon_listview::placeholder";
    /// Reference tween engine.
    pub const TWEEN: &str = "horizon_listview::tween";
    /// Options loading and validation.
    pub const CONFIG: &str = "horizon_listview::config";
}
