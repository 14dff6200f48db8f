//! A small frame-driven [`Animator`] implementation.
//!
//! [`Tweener`] interpolates item properties as the host feeds it frame time
//! through [`Tweener::advance`]. It is a cheap handle around shared state:
//! keep one clone for the frame loop and hand another to the list.
//!
//! Completion callbacks run after the shared state is released, so a
//! callback may call back into the list (which in turn calls the animator).
//!
//! ```ignore
//! let tweener = Tweener::new();
//! let list = Rc::new(RefCell::new(ListView::new(
//!     options,
//!     Box::new(tweener.clone()),
//!     viewport,
//!     switcher,
//! )?));
//!
//! // every frame:
//! tweener.advance(frame_delta);
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use horizon_listview_core::logging::targets;
use slotmap::SecondaryMap;

use super::animator::{Animator, CompletionCallback};
use super::transition::{TransitionSpec, Tween, TweenState};
use super::value::{AnimatedProperty, AnimatedValue};
use crate::model::ItemHandle;

/// One property transition in flight.
struct Track {
    from: AnimatedValue,
    to: AnimatedValue,
    tween: Tween,
    on_complete: Option<CompletionCallback>,
}

/// Animation state of one item node.
#[derive(Default)]
struct Node {
    values: HashMap<AnimatedProperty, AnimatedValue>,
    tracks: HashMap<AnimatedProperty, Track>,
    retired: bool,
}

#[derive(Default)]
struct TweenerState {
    nodes: SecondaryMap<ItemHandle, Node>,
    deferred: Vec<CompletionCallback>,
}

impl TweenerState {
    fn node(&mut self, handle: ItemHandle) -> &mut Node {
        if !self.nodes.contains_key(handle) {
            self.nodes.insert(handle, Node::default());
        }
        &mut self.nodes[handle]
    }

    /// Advance every track and collect the callbacks that are now due.
    fn step(&mut self, dt: Duration) -> Vec<CompletionCallback> {
        let mut due = std::mem::take(&mut self.deferred);

        for (_, node) in self.nodes.iter_mut() {
            let mut finished = Vec::new();
            for (&property, track) in node.tracks.iter_mut() {
                match track.tween.advance(dt) {
                    TweenState::Running { progress } => {
                        node.values.insert(property, track.from.lerp(track.to, progress));
                    }
                    TweenState::Finished | TweenState::Idle => {
                        node.values.insert(property, track.to);
                        finished.push(property);
                    }
                }
            }
            for property in finished {
                if let Some(callback) = node.tracks.remove(&property).and_then(|t| t.on_complete) {
                    due.push(callback);
                }
            }
        }

        self.nodes.retain(|_, node| !(node.retired && node.tracks.is_empty()));
        due
    }
}

/// Frame-driven reference animator.
#[derive(Clone, Default)]
pub struct Tweener {
    state: Rc<RefCell<TweenerState>>,
}

impl Tweener {
    /// Create an animator with nothing in flight.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance all transitions by `dt` and run the callbacks that became due
    /// (deferred callbacks first, then finished transitions).
    ///
    /// Returns the number of callbacks invoked.
    pub fn advance(&self, dt: Duration) -> usize {
        let due = self.state.borrow_mut().step(dt);
        let fired = due.len();
        for callback in due {
            callback();
        }
        fired
    }

    /// Current value of `property` on `handle`, if it was ever set.
    pub fn value(&self, handle: ItemHandle, property: AnimatedProperty) -> Option<AnimatedValue> {
        self.state
            .borrow()
            .nodes
            .get(handle)
            .and_then(|node| node.values.get(&property).copied())
    }

    /// Whether `handle` has any transition in flight.
    pub fn is_animating(&self, handle: ItemHandle) -> bool {
        self.state
            .borrow()
            .nodes
            .get(handle)
            .is_some_and(|node| !node.tracks.is_empty())
    }

    /// Number of transitions in flight across all nodes.
    pub fn active_transitions(&self) -> usize {
        self.state.borrow().nodes.values().map(|node| node.tracks.len()).sum()
    }

    /// Number of callbacks waiting for a tick, attached or deferred.
    pub fn pending_callbacks(&self) -> usize {
        let state = self.state.borrow();
        let attached: usize = state
            .nodes
            .values()
            .flat_map(|node| node.tracks.values())
            .filter(|track| track.on_complete.is_some())
            .count();
        attached + state.deferred.len()
    }

    /// Number of nodes the animator still holds state for.
    pub fn tracked_nodes(&self) -> usize {
        self.state.borrow().nodes.len()
    }
}

impl fmt::Debug for Tweener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tweener")
            .field("tracked_nodes", &self.tracked_nodes())
            .field("active_transitions", &self.active_transitions())
            .field("pending_callbacks", &self.pending_callbacks())
            .finish()
    }
}

impl Animator for Tweener {
    fn halt(&mut self, handle: ItemHandle) {
        let mut state = self.state.borrow_mut();
        if let Some(node) = state.nodes.get_mut(handle) {
            if !node.tracks.is_empty() {
                tracing::trace!(target: targets::TWEEN, tracks = node.tracks.len(), "halting node");
            }
            node.tracks.clear();
        }
    }

    fn set_value(&mut self, handle: ItemHandle, value: AnimatedValue) {
        let mut state = self.state.borrow_mut();
        let node = state.node(handle);
        node.tracks.remove(&value.property());
        node.values.insert(value.property(), value);
    }

    fn animate(
        &mut self,
        handle: ItemHandle,
        value: AnimatedValue,
        transition: &TransitionSpec,
        on_complete: Option<CompletionCallback>,
    ) {
        let mut state = self.state.borrow_mut();
        let node = state.node(handle);
        let property = value.property();
        let from = node.values.get(&property).copied().unwrap_or(value);
        let track = Track {
            from,
            to: value,
            tween: Tween::start(*transition),
            on_complete,
        };
        if node.tracks.insert(property, track).is_some() {
            tracing::trace!(target: targets::TWEEN, ?property, "preempted running transition");
        }
    }

    fn defer(&mut self, callback: CompletionCallback) {
        self.state.borrow_mut().deferred.push(callback);
    }

    fn retire(&mut self, handle: ItemHandle) {
        let mut state = self.state.borrow_mut();
        let idle = match state.nodes.get_mut(handle) {
            Some(node) => {
                node.retired = true;
                node.tracks.is_empty()
            }
            None => return,
        };
        if idle {
            state.nodes.remove(handle);
        }
    }
}
