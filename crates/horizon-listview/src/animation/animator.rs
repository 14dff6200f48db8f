//! The interface to the animation engine.

use super::transition::TransitionSpec;
use super::value::AnimatedValue;
use crate::model::ItemHandle;

/// Called once when an insert/remove call's animation completes.
///
/// Not `Send`: callbacks run on the UI thread and may capture the list
/// itself (e.g. through `Rc<RefCell<..>>`) to issue further calls.
pub type CompletionCallback = Box<dyn FnOnce()>;

/// The animation engine the list drives.
///
/// Implementations interpolate properties of item visual nodes over time.
/// All callbacks handed to an animator must be invoked from the animator's
/// own scheduling (typically its frame tick), never synchronously from
/// within one of these methods, and never while the animator is borrowed.
pub trait Animator {
    /// Stop every transition in flight on `handle`, leaving each property at
    /// its current value. Pending completion callbacks of those transitions
    /// are dropped without being called.
    fn halt(&mut self, handle: ItemHandle);

    /// Snap a property to `value` with no animation.
    fn set_value(&mut self, handle: ItemHandle, value: AnimatedValue);

    /// Animate a property from its current value to `value`.
    ///
    /// Starting a transition on a property that already has one in flight
    /// preempts the old one, dropping its callback.
    fn animate(
        &mut self,
        handle: ItemHandle,
        value: AnimatedValue,
        transition: &TransitionSpec,
        on_complete: Option<CompletionCallback>,
    );

    /// Invoke `callback` on the next tick.
    fn defer(&mut self, callback: CompletionCallback);

    /// `handle` has left the list. State kept for it may be released once
    /// its transitions have finished.
    fn retire(&mut self, handle: ItemHandle);
}
