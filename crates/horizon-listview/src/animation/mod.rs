//! Animation support for list items.
//!
//! This module provides easing curves, transition descriptions, the
//! animatable item properties, the [`Animator`] interface the list drives,
//! and [`Tweener`], a frame-driven implementation of it.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! ```
//! use horizon_listview::animation::{ease, Easing};
//!
//! let eased = ease(Easing::EaseInOut, 0.5);
//! assert_eq!(eased, 0.5);
//! ```

mod animator;
mod easing;
mod transition;
mod tweener;
mod value;

pub use animator::{Animator, CompletionCallback};
pub use easing::{ease, lerp_eased, Easing};
pub use transition::{TransitionSpec, Tween, TweenState};
pub use tweener::Tweener;
pub use value::{AnimatedProperty, AnimatedValue, ItemSize, Transform};
