//! Transition descriptions and tween progress tracking.
//!
//! A [`TransitionSpec`] describes *how* a property change is animated
//! (duration and easing curve). A [`Tween`] tracks the progress of one such
//! change as frame time is fed into it.

use std::time::Duration;

use super::easing::{ease, Easing};

/// Duration plus easing curve for an animated property change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionSpec {
    /// How long the change takes.
    pub duration: Duration,
    /// Easing curve applied to the progress.
    pub curve: Easing,
}

impl TransitionSpec {
    /// Create a transition with the given duration and curve.
    pub const fn new(duration: Duration, curve: Easing) -> Self {
        Self { duration, curve }
    }

    /// Create a linear transition lasting `millis` milliseconds.
    pub const fn millis(millis: u64) -> Self {
        Self::new(Duration::from_millis(millis), Easing::Linear)
    }

    /// A zero-length transition: the change applies on the next frame.
    pub const fn instant() -> Self {
        Self::new(Duration::ZERO, Easing::Linear)
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::millis(250)
    }
}

/// Current state of a tween.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TweenState {
    /// Not started, halted, or already finished.
    #[default]
    Idle,
    /// Running.
    Running {
        /// Eased progress from 0.0 to 1.0.
        progress: f32,
    },
    /// Reached the end during the last advance.
    Finished,
}

impl TweenState {
    /// Check if the tween is still in progress.
    pub fn is_running(&self) -> bool {
        matches!(self, TweenState::Running { .. })
    }

    /// Eased progress: `Some(1.0)` when finished, `None` when idle.
    pub fn progress(&self) -> Option<f32> {
        match self {
            TweenState::Running { progress } => Some(*progress),
            TweenState::Finished => Some(1.0),
            TweenState::Idle => None,
        }
    }
}

/// Progress of a single transition, advanced by explicit frame deltas.
#[derive(Debug, Clone)]
pub struct Tween {
    spec: TransitionSpec,
    elapsed: Duration,
    running: bool,
}

impl Tween {
    /// Start a tween for the given transition.
    pub fn start(spec: TransitionSpec) -> Self {
        Self {
            spec,
            elapsed: Duration::ZERO,
            running: true,
        }
    }

    /// The transition being played.
    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    /// Check if the tween is still running.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Eased progress at the current elapsed time.
    pub fn progress(&self) -> f32 {
        ease(self.spec.curve, self.raw_progress())
    }

    fn raw_progress(&self) -> f32 {
        if self.spec.duration.is_zero() {
            1.0
        } else {
            (self.elapsed.as_secs_f32() / self.spec.duration.as_secs_f32()).min(1.0)
        }
    }

    /// Advance by `dt` and return the resulting state.
    ///
    /// Returns [`TweenState::Finished`] exactly once, on the advance that
    /// reaches the end; afterwards the tween reports `Idle`.
    pub fn advance(&mut self, dt: Duration) -> TweenState {
        if !self.running {
            return TweenState::Idle;
        }

        self.elapsed = self.elapsed.saturating_add(dt);
        if self.raw_progress() >= 1.0 {
            self.running = false;
            return TweenState::Finished;
        }

        TweenState::Running {
            progress: self.progress(),
        }
    }
}
