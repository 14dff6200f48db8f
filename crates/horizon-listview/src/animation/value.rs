//! Animatable item properties and their values.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Size of an item's visual node.
///
/// `None` on an axis means "unconstrained": the renderer uses the item's own
/// extent on that axis. The default insert/remove size is `[None, Some(0.0)]`,
/// collapsing the item vertically while keeping its width.
///
/// Serialized as a two-element array, e.g. `[null, 0]` in JSON.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "[Option<f32>; 2]", into = "[Option<f32>; 2]")]
pub struct ItemSize {
    /// Width, or `None` for unconstrained.
    pub width: Option<f32>,
    /// Height, or `None` for unconstrained.
    pub height: Option<f32>,
}

impl ItemSize {
    /// Both axes unconstrained.
    pub const UNCONSTRAINED: Self = Self {
        width: None,
        height: None,
    };

    /// A fully specified size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Only the height is constrained.
    pub const fn height(height: f32) -> Self {
        Self {
            width: None,
            height: Some(height),
        }
    }

    /// Only the width is constrained.
    pub const fn width(width: f32) -> Self {
        Self {
            width: Some(width),
            height: None,
        }
    }

    /// Interpolate axis-wise. An axis that is unconstrained at either end
    /// jumps straight to the target.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        let axis = |a: Option<f32>, b: Option<f32>| match (a, b) {
            (Some(a), Some(b)) => Some(a + (b - a) * t),
            (_, b) => b,
        };
        Self {
            width: axis(self.width, to.width),
            height: axis(self.height, to.height),
        }
    }

    /// True when every constrained axis is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.width, self.height]
            .into_iter()
            .flatten()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

impl From<[Option<f32>; 2]> for ItemSize {
    fn from([width, height]: [Option<f32>; 2]) -> Self {
        Self { width, height }
    }
}

impl From<ItemSize> for [Option<f32>; 2] {
    fn from(size: ItemSize) -> Self {
        [size.width, size.height]
    }
}

/// Spatial transform of an item's visual node.
///
/// Serialized as 16 floats in column-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Transform(pub Mat4);

impl Transform {
    /// The identity transform: the item's natural placement.
    pub const IDENTITY: Self = Self(Mat4::IDENTITY);

    /// A pure translation.
    pub fn translation(x: f32, y: f32, z: f32) -> Self {
        Self(Mat4::from_translation(Vec3::new(x, y, z)))
    }

    /// A uniform scale around the origin.
    pub fn scale(factor: f32) -> Self {
        Self(Mat4::from_scale(Vec3::splat(factor)))
    }

    /// A rotation around the z axis, in radians.
    pub fn rotation_z(radians: f32) -> Self {
        Self(Mat4::from_rotation_z(radians))
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> Mat4 {
        self.0
    }

    /// Interpolate by decomposing into scale, rotation and translation.
    ///
    /// A degenerate end (e.g. `scale(0.0)`) has no rotation to recover, so
    /// those pairs are interpolated element-wise instead.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        if self.is_degenerate() || to.is_degenerate() {
            let (a, b) = (self.0, to.0);
            return Self(Mat4::from_cols(
                a.x_axis.lerp(b.x_axis, t),
                a.y_axis.lerp(b.y_axis, t),
                a.z_axis.lerp(b.z_axis, t),
                a.w_axis.lerp(b.w_axis, t),
            ));
        }

        let (s0, r0, t0) = self.0.to_scale_rotation_translation();
        let (s1, r1, t1) = to.0.to_scale_rotation_translation();
        Self(Mat4::from_scale_rotation_translation(
            s0.lerp(s1, t),
            Quat::slerp(r0, r1, t),
            t0.lerp(t1, t),
        ))
    }

    fn is_degenerate(&self) -> bool {
        self.0.determinant().abs() <= f32::EPSILON
    }

    /// True when every matrix element is finite.
    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The properties an item can animate, in scheduling priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnimatedProperty {
    /// Size of the node; collapsing it lets neighbours slide into place.
    Size,
    /// Opacity of the node.
    Opacity,
    /// Spatial transform of the node.
    Transform,
}

impl AnimatedProperty {
    /// All properties, in the order the transition coordinator schedules them.
    pub const PRIORITY: [AnimatedProperty; 3] = [Self::Size, Self::Opacity, Self::Transform];
}

/// A value for one [`AnimatedProperty`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnimatedValue {
    /// Node size.
    Size(ItemSize),
    /// Node opacity, 0.0 to 1.0.
    Opacity(f32),
    /// Node transform.
    Transform(Transform),
}

impl AnimatedValue {
    /// The property this value belongs to.
    pub fn property(&self) -> AnimatedProperty {
        match self {
            AnimatedValue::Size(_) => AnimatedProperty::Size,
            AnimatedValue::Opacity(_) => AnimatedProperty::Opacity,
            AnimatedValue::Transform(_) => AnimatedProperty::Transform,
        }
    }

    /// Interpolate towards `to`. Values of different properties do not mix;
    /// the target is returned unchanged in that case.
    pub fn lerp(self, to: Self, t: f32) -> Self {
        match (self, to) {
            (AnimatedValue::Size(a), AnimatedValue::Size(b)) => AnimatedValue::Size(a.lerp(b, t)),
            (AnimatedValue::Opacity(a), AnimatedValue::Opacity(b)) => {
                AnimatedValue::Opacity(a + (b - a) * t)
            }
            (AnimatedValue::Transform(a), AnimatedValue::Transform(b)) => {
                AnimatedValue::Transform(a.lerp(b, t))
            }
            (_, to) => to,
        }
    }
}
