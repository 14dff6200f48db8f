//! Loading [`ListViewOptions`] from TOML or JSON documents.
//!
//! Every key is optional; missing keys keep their default. A property that
//! can be switched off (opacities, sizes, transforms, class names) is
//! disabled with `false`.
//!
//! ```toml
//! selection = "multiple"        # or 0, 1, 2
//! selected_class = "active"
//! last_class = false
//! insert_size = { height = 0 }  # or [width, height] in JSON, with null
//! remove_opacity = false
//!
//! [insert_transition]
//! duration_ms = 300
//! curve = "ease_out_cubic"
//! ```

use std::path::Path;
use std::time::Duration;

use horizon_listview_core::logging::targets;
use serde::{Deserialize, Serialize};

use super::options::ListViewOptions;
use crate::animation::{Easing, ItemSize, Transform, TransitionSpec};
use crate::error::ConfigurationError;
use crate::model::SelectionMode;

/// A value that can also be switched off with `false`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum Toggle<T> {
    Off(bool),
    Value(T),
}

impl<T> Toggle<T> {
    fn resolve(self, property: &str) -> Result<Option<T>, ConfigurationError> {
        match self {
            Toggle::Value(value) => Ok(Some(value)),
            Toggle::Off(false) => Ok(None),
            Toggle::Off(true) => Err(ConfigurationError::value(
                property,
                "expected a value, or false to disable",
            )),
        }
    }

    fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Toggle::Value(value),
            None => Toggle::Off(false),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum SelectionSetting {
    Code(i64),
    Name(String),
}

impl SelectionSetting {
    fn resolve(self) -> Result<SelectionMode, ConfigurationError> {
        match self {
            SelectionSetting::Code(code) => SelectionMode::from_code(code),
            SelectionSetting::Name(name) => name.parse(),
        }
    }
}

/// Either `[width, height]` (JSON, with `null` for unconstrained) or a
/// `{ width, height }` table with missing axes unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
enum SizeSetting {
    Pair(ItemSize),
    Axes {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        width: Option<f32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        height: Option<f32>,
    },
}

impl SizeSetting {
    fn into_size(self) -> ItemSize {
        match self {
            SizeSetting::Pair(size) => size,
            SizeSetting::Axes { width, height } => ItemSize { width, height },
        }
    }

    fn from_size(size: ItemSize) -> Self {
        SizeSetting::Axes {
            width: size.width,
            height: size.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct TransitionSetting {
    duration_ms: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    curve: Option<String>,
}

impl TransitionSetting {
    fn resolve(self, name: &str) -> Result<TransitionSpec, ConfigurationError> {
        if !self.duration_ms.is_finite() || self.duration_ms < 0.0 {
            return Err(ConfigurationError::transition(
                name,
                format!("duration must be a non-negative number of milliseconds (got {})", self.duration_ms),
            ));
        }
        let curve = match self.curve {
            Some(curve) => curve.parse::<Easing>().map_err(|_| {
                ConfigurationError::transition(name, format!("unknown easing curve '{curve}'"))
            })?,
            None => Easing::default(),
        };
        let nanos = (self.duration_ms * 1_000_000.0).round() as u64;
        Ok(TransitionSpec::new(Duration::from_nanos(nanos), curve))
    }

    fn from_spec(spec: &TransitionSpec) -> Result<Self, ConfigurationError> {
        let curve = serde_json::to_value(spec.curve)
            .map_err(|e| ConfigurationError::Parse(e.to_string()))?
            .as_str()
            .map(str::to_string);
        Ok(Self {
            duration_ms: spec.duration.as_nanos() as f64 / 1_000_000.0,
            curve,
        })
    }
}

/// On-disk form of [`ListViewOptions`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OptionsFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    selection: Option<SelectionSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected_class: Option<Toggle<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_class: Option<Toggle<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    last_class: Option<Toggle<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insert_size: Option<Toggle<SizeSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remove_size: Option<Toggle<SizeSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insert_opacity: Option<Toggle<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remove_opacity: Option<Toggle<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_opacity: Option<Toggle<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insert_transform: Option<Toggle<Transform>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remove_transform: Option<Toggle<Transform>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    insert_transition: Option<TransitionSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    remove_transition: Option<TransitionSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_placeholder_transition: Option<TransitionSetting>,
    #[serde(skip_serializing_if = "Option::is_none")]
    hide_placeholder_transition: Option<TransitionSetting>,
}

/// Overwrite each listed field of `$target` that the file sets.
macro_rules! apply_settings {
    ($file:ident, $target:ident, $($field:ident),+ $(,)?) => {
        $(
            if let Some(setting) = $file.$field {
                $target.$field = setting.resolve(stringify!($field))?;
            }
        )+
    };
}

impl OptionsFile {
    fn into_options(self) -> Result<ListViewOptions, ConfigurationError> {
        let file = self;
        let mut options = ListViewOptions::default();

        if let Some(selection) = file.selection {
            options.selection = selection.resolve()?;
        }

        apply_settings!(
            file,
            options,
            selected_class,
            first_class,
            last_class,
            insert_opacity,
            remove_opacity,
            show_opacity,
            insert_transform,
            remove_transform,
        );

        if let Some(size) = file.insert_size {
            options.insert_size = size.resolve("insert_size")?.map(SizeSetting::into_size);
        }
        if let Some(size) = file.remove_size {
            options.remove_size = size.resolve("remove_size")?.map(SizeSetting::into_size);
        }

        apply_settings!(
            file,
            options,
            insert_transition,
            remove_transition,
            show_placeholder_transition,
            hide_placeholder_transition,
        );

        options.validate()?;
        Ok(options)
    }

    fn from_options(options: &ListViewOptions) -> Result<Self, ConfigurationError> {
        Ok(Self {
            selection: Some(SelectionSetting::Name(options.selection.to_string())),
            selected_class: Some(Toggle::from_option(options.selected_class.clone())),
            first_class: Some(Toggle::from_option(options.first_class.clone())),
            last_class: Some(Toggle::from_option(options.last_class.clone())),
            insert_size: Some(Toggle::from_option(options.insert_size.map(SizeSetting::from_size))),
            remove_size: Some(Toggle::from_option(options.remove_size.map(SizeSetting::from_size))),
            insert_opacity: Some(Toggle::from_option(options.insert_opacity)),
            remove_opacity: Some(Toggle::from_option(options.remove_opacity)),
            show_opacity: Some(Toggle::from_option(options.show_opacity)),
            insert_transform: Some(Toggle::from_option(options.insert_transform)),
            remove_transform: Some(Toggle::from_option(options.remove_transform)),
            insert_transition: Some(TransitionSetting::from_spec(&options.insert_transition)?),
            remove_transition: Some(TransitionSetting::from_spec(&options.remove_transition)?),
            show_placeholder_transition: Some(TransitionSetting::from_spec(
                &options.show_placeholder_transition,
            )?),
            hide_placeholder_transition: Some(TransitionSetting::from_spec(
                &options.hide_placeholder_transition,
            )?),
        })
    }
}

impl ListViewOptions {
    /// Parse options from a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigurationError> {
        let file: OptionsFile =
            toml::from_str(content).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        file.into_options()
    }

    /// Parse options from a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self, ConfigurationError> {
        let file: OptionsFile =
            serde_json::from_str(content).map_err(|e| ConfigurationError::Parse(e.to_string()))?;
        file.into_options()
    }

    /// Load options from a `.toml` or `.json` file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigurationError::Parse(format!("{}: {e}", path.display())))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        tracing::debug!(target: targets::CONFIG, path = %path.display(), "loading list options");

        match extension.as_deref() {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(ConfigurationError::Parse(format!(
                "{}: unsupported options format (expected .toml or .json)",
                path.display()
            ))),
        }
    }

    /// Serialize to a TOML document that [`from_toml_str`](Self::from_toml_str)
    /// reads back.
    pub fn to_toml_string(&self) -> Result<String, ConfigurationError> {
        let file = OptionsFile::from_options(self)?;
        toml::to_string_pretty(&file).map_err(|e| ConfigurationError::Parse(e.to_string()))
    }
}
