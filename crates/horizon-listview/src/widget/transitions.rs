//! Enter/exit animation scheduling for inserted and removed items.

use std::fmt;

use horizon_listview_core::logging::targets;

use crate::animation::{
    AnimatedProperty, AnimatedValue, Animator, CompletionCallback, ItemSize, Transform, TransitionSpec,
};
use crate::model::ItemHandle;

/// Starting values for items entering the list.
///
/// Each configured property snaps to its start value and animates to the
/// item's natural value. `None` leaves the property alone.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct EnterPlan {
    /// Size the item grows from, towards its natural size.
    pub size_from: Option<ItemSize>,
    /// Opacity `(from, to)`.
    pub opacity: Option<(f32, f32)>,
    /// Transform the item moves from, towards identity.
    pub transform_from: Option<Transform>,
}

impl EnterPlan {
    fn values(&self, natural: ItemSize) -> impl Iterator<Item = (AnimatedValue, AnimatedValue)> + '_ {
        AnimatedProperty::PRIORITY.into_iter().filter_map(move |property| match property {
            AnimatedProperty::Size => self
                .size_from
                .map(|from| (AnimatedValue::Size(from), AnimatedValue::Size(natural))),
            AnimatedProperty::Opacity => self
                .opacity
                .map(|(from, to)| (AnimatedValue::Opacity(from), AnimatedValue::Opacity(to))),
            AnimatedProperty::Transform => self.transform_from.map(|from| {
                (
                    AnimatedValue::Transform(from),
                    AnimatedValue::Transform(Transform::IDENTITY),
                )
            }),
        })
    }
}

/// Target values for items leaving the list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExitPlan {
    /// Size the item shrinks to.
    pub size_to: Option<ItemSize>,
    /// Opacity the item fades to.
    pub opacity_to: Option<f32>,
    /// Transform the item moves to.
    pub transform_to: Option<Transform>,
}

impl ExitPlan {
    fn values(&self) -> impl Iterator<Item = AnimatedValue> + '_ {
        AnimatedProperty::PRIORITY.into_iter().filter_map(move |property| match property {
            AnimatedProperty::Size => self.size_to.map(AnimatedValue::Size),
            AnimatedProperty::Opacity => self.opacity_to.map(AnimatedValue::Opacity),
            AnimatedProperty::Transform => self.transform_to.map(AnimatedValue::Transform),
        })
    }
}

/// Issues the animation requests for one insert or remove call.
///
/// A call carries at most one completion callback. It is attached to the
/// first transition the call schedules; when the call schedules none, it is
/// handed to [`Animator::defer`]. Either way it runs exactly once, from the
/// animator, after the call has returned.
pub struct TransitionCoordinator {
    animator: Box<dyn Animator>,
}

impl TransitionCoordinator {
    /// Drive `animator`.
    pub fn new(animator: Box<dyn Animator>) -> Self {
        Self { animator }
    }

    /// Animate `items` (handle plus natural size) into the list.
    ///
    /// Returns the number of transitions scheduled.
    pub fn enter(
        &mut self,
        items: impl IntoIterator<Item = (ItemHandle, ItemSize)>,
        plan: &EnterPlan,
        transition: &TransitionSpec,
        on_complete: Option<CompletionCallback>,
    ) -> usize {
        let mut callback = on_complete;
        let mut scheduled = 0;

        for (handle, natural) in items {
            self.animator.halt(handle);
            for (from, to) in plan.values(natural) {
                self.animator.set_value(handle, from);
                self.animator.animate(handle, to, transition, callback.take());
                scheduled += 1;
            }
        }

        self.finish(scheduled, callback);
        scheduled
    }

    /// Animate `handles` out of the list and retire them.
    ///
    /// Returns the number of transitions scheduled.
    pub fn exit(
        &mut self,
        handles: impl IntoIterator<Item = ItemHandle>,
        plan: &ExitPlan,
        transition: &TransitionSpec,
        on_complete: Option<CompletionCallback>,
    ) -> usize {
        let mut callback = on_complete;
        let mut scheduled = 0;

        for handle in handles {
            self.animator.halt(handle);
            for to in plan.values() {
                self.animator.animate(handle, to, transition, callback.take());
                scheduled += 1;
            }
            self.animator.retire(handle);
        }

        self.finish(scheduled, callback);
        scheduled
    }

    fn finish(&mut self, scheduled: usize, callback: Option<CompletionCallback>) {
        tracing::trace!(target: targets::TRANSITION, scheduled, "transitions scheduled");
        if let Some(callback) = callback {
            tracing::trace!(target: targets::TRANSITION, "nothing to animate, deferring completion");
            self.animator.defer(callback);
        }
    }
}

impl fmt::Debug for TransitionCoordinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionCoordinator").finish_non_exhaustive()
    }
}
