//! Configuration for [`ListView`](super::ListView).
//!
//! Every option has a default matching the stock list behavior and can be
//! overridden on its own with a `with_*` builder method:
//!
//! ```
//! use std::time::Duration;
//! use horizon_listview::animation::{Easing, TransitionSpec};
//! use horizon_listview::model::SelectionMode;
//! use horizon_listview::widget::ListViewOptions;
//!
//! let options = ListViewOptions::default()
//!     .with_selection(SelectionMode::Multiple)
//!     .with_insert_opacity(None)
//!     .with_insert_transition(TransitionSpec::new(
//!         Duration::from_millis(300),
//!         Easing::EaseOutCubic,
//!     ));
//! assert!(options.validate().is_ok());
//! ```

use std::time::Duration;

use crate::animation::{Easing, ItemSize, Transform, TransitionSpec};
use crate::error::ConfigurationError;
use crate::model::{ClassPresenter, SelectionMode};

use super::transitions::{EnterPlan, ExitPlan};

/// Options recognized by the list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListViewOptions {
    /// Selection mode (default: single).
    pub selection: SelectionMode,
    /// Style class for the selected state (default: `"selected"`).
    pub selected_class: Option<String>,
    /// Style class for the first item (default: `"first"`).
    pub first_class: Option<String>,
    /// Style class for the last item (default: `"last"`).
    pub last_class: Option<String>,
    /// Size an inserted item grows from (default: `[None, 0]`).
    pub insert_size: Option<ItemSize>,
    /// Size a removed item shrinks to (default: `[None, 0]`).
    pub remove_size: Option<ItemSize>,
    /// Opacity an inserted item fades in from (default: 0).
    pub insert_opacity: Option<f32>,
    /// Opacity a removed item fades out to (default: 0).
    pub remove_opacity: Option<f32>,
    /// Opacity of a fully shown item (default: 1).
    pub show_opacity: Option<f32>,
    /// Transform an inserted item moves in from (default: none).
    pub insert_transform: Option<Transform>,
    /// Transform a removed item moves out to (default: none).
    pub remove_transform: Option<Transform>,
    /// Transition for inserts (default: 1000 ms, ease-out-expo).
    pub insert_transition: TransitionSpec,
    /// Transition for removals (default: 200 ms, ease-out-expo).
    pub remove_transition: TransitionSpec,
    /// Transition when the placeholder appears (default: 500 ms).
    pub show_placeholder_transition: TransitionSpec,
    /// Transition when the placeholder gives way to content (default: 500 ms).
    pub hide_placeholder_transition: TransitionSpec,
}

impl Default for ListViewOptions {
    fn default() -> Self {
        Self {
            selection: SelectionMode::Single,
            selected_class: Some("selected".to_string()),
            first_class: Some("first".to_string()),
            last_class: Some("last".to_string()),
            insert_size: Some(ItemSize::height(0.0)),
            remove_size: Some(ItemSize::height(0.0)),
            insert_opacity: Some(0.0),
            remove_opacity: Some(0.0),
            show_opacity: Some(1.0),
            insert_transform: None,
            remove_transform: None,
            insert_transition: TransitionSpec::new(Duration::from_millis(1000), Easing::EaseOutExpo),
            remove_transition: TransitionSpec::new(Duration::from_millis(200), Easing::EaseOutExpo),
            show_placeholder_transition: TransitionSpec::millis(500),
            hide_placeholder_transition: TransitionSpec::millis(500),
        }
    }
}

impl ListViewOptions {
    /// Options with every enter/exit property disabled: items appear and
    /// disappear without animation.
    pub fn unanimated() -> Self {
        Self {
            insert_size: None,
            remove_size: None,
            insert_opacity: None,
            remove_opacity: None,
            ..Self::default()
        }
    }

    // =========================================================================
    // Builder
    // =========================================================================

    /// Set the selection mode.
    pub fn with_selection(mut self, selection: SelectionMode) -> Self {
        self.selection = selection;
        self
    }

    /// Set the selected-state class.
    pub fn with_selected_class(mut self, class: Option<&str>) -> Self {
        self.selected_class = class.map(str::to_string);
        self
    }

    /// Set the first-item class.
    pub fn with_first_class(mut self, class: Option<&str>) -> Self {
        self.first_class = class.map(str::to_string);
        self
    }

    /// Set the last-item class.
    pub fn with_last_class(mut self, class: Option<&str>) -> Self {
        self.last_class = class.map(str::to_string);
        self
    }

    /// Set the size inserted items grow from.
    pub fn with_insert_size(mut self, size: Option<ItemSize>) -> Self {
        self.insert_size = size;
        self
    }

    /// Set the size removed items shrink to.
    pub fn with_remove_size(mut self, size: Option<ItemSize>) -> Self {
        self.remove_size = size;
        self
    }

    /// Set the opacity inserted items fade in from.
    pub fn with_insert_opacity(mut self, opacity: Option<f32>) -> Self {
        self.insert_opacity = opacity;
        self
    }

    /// Set the opacity removed items fade out to.
    pub fn with_remove_opacity(mut self, opacity: Option<f32>) -> Self {
        self.remove_opacity = opacity;
        self
    }

    /// Set the opacity of a shown item.
    pub fn with_show_opacity(mut self, opacity: Option<f32>) -> Self {
        self.show_opacity = opacity;
        self
    }

    /// Set the transform inserted items move in from.
    pub fn with_insert_transform(mut self, transform: Option<Transform>) -> Self {
        self.insert_transform = transform;
        self
    }

    /// Set the transform removed items move out to.
    pub fn with_remove_transform(mut self, transform: Option<Transform>) -> Self {
        self.remove_transform = transform;
        self
    }

    /// Set the insert transition.
    pub fn with_insert_transition(mut self, transition: TransitionSpec) -> Self {
        self.insert_transition = transition;
        self
    }

    /// Set the remove transition.
    pub fn with_remove_transition(mut self, transition: TransitionSpec) -> Self {
        self.remove_transition = transition;
        self
    }

    /// Set the placeholder show transition.
    pub fn with_show_placeholder_transition(mut self, transition: TransitionSpec) -> Self {
        self.show_placeholder_transition = transition;
        self
    }

    /// Set the placeholder hide transition.
    pub fn with_hide_placeholder_transition(mut self, transition: TransitionSpec) -> Self {
        self.hide_placeholder_transition = transition;
        self
    }

    // =========================================================================
    // Validation and derived values
    // =========================================================================

    /// Check every value for range and finiteness.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let opacities = [
            ("insert_opacity", self.insert_opacity),
            ("remove_opacity", self.remove_opacity),
            ("show_opacity", self.show_opacity),
        ];
        for (name, opacity) in opacities {
            if let Some(value) = opacity {
                if !(0.0..=1.0).contains(&value) {
                    return Err(ConfigurationError::value(
                        name,
                        format!("opacity must be between 0 and 1 (got {value})"),
                    ));
                }
            }
        }

        for (name, size) in [("insert_size", self.insert_size), ("remove_size", self.remove_size)] {
            if size.is_some_and(|size| !size.is_valid()) {
                return Err(ConfigurationError::value(
                    name,
                    "sizes must be finite and non-negative",
                ));
            }
        }

        for (name, transform) in [
            ("insert_transform", self.insert_transform),
            ("remove_transform", self.remove_transform),
        ] {
            if transform.is_some_and(|transform| !transform.is_finite()) {
                return Err(ConfigurationError::value(name, "transform must be finite"));
            }
        }

        for (name, class) in [
            ("selected_class", &self.selected_class),
            ("first_class", &self.first_class),
            ("last_class", &self.last_class),
        ] {
            if class.as_deref().is_some_and(|class| class.trim().is_empty()) {
                return Err(ConfigurationError::value(name, "class name must not be blank"));
            }
        }

        Ok(())
    }

    /// The enter sequence these options describe.
    pub fn enter_plan(&self) -> EnterPlan {
        EnterPlan {
            size_from: self.insert_size,
            opacity: self.insert_opacity.zip(self.show_opacity),
            transform_from: self.insert_transform,
        }
    }

    /// The exit sequence these options describe.
    pub fn exit_plan(&self) -> ExitPlan {
        ExitPlan {
            size_to: self.remove_size,
            opacity_to: self.remove_opacity,
            transform_to: self.remove_transform,
        }
    }

    /// The class presenter for the configured class names.
    pub fn class_presenter(&self) -> ClassPresenter {
        ClassPresenter {
            first_class: self.first_class.clone(),
            last_class: self.last_class.clone(),
            selected_class: self.selected_class.clone(),
        }
    }
}
