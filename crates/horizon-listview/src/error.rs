//! Error types for the list widget.

/// Result type alias for list operations.
pub type Result<T> = std::result::Result<T, ListViewError>;

/// Errors surfaced by [`ListView`](crate::widget::ListView) operations.
///
/// Every failing operation leaves the list exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ListViewError {
    /// An index or count was outside the bounds of the current list.
    #[error(transparent)]
    Range(#[from] RangeError),

    /// The widget options were rejected.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Index/count outside the valid bounds for the current store size.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Insertion point past the end of the list.
    #[error("insert index {index} out of range for list of {len} items")]
    InsertIndex { index: usize, len: usize },

    /// Removal range not contained in the list (includes removing from an empty list).
    #[error("cannot remove {count} items at index {index} from list of {len} items")]
    RemoveRange { index: isize, count: usize, len: usize },

    /// Single-item access past the end of the list.
    #[error("index {index} out of range for list of {len} items")]
    Index { index: usize, len: usize },

    /// Selection range not contained in the list.
    #[error("cannot change selection of {count} items at index {index} in list of {len} items")]
    SelectionRange { index: usize, count: isize, len: usize },
}

/// Invalid widget configuration, detected when options are built or loaded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    /// Selection mode name or code not recognized.
    #[error("invalid selection mode '{0}' (expected none, single, multiple or 0..=2)")]
    InvalidSelectionMode(String),

    /// A transition has an unusable duration or curve.
    #[error("invalid transition '{name}': {reason}")]
    InvalidTransition { name: String, reason: String },

    /// A property value is out of range or not finite.
    #[error("invalid value for '{property}': {reason}")]
    InvalidValue { property: String, reason: String },

    /// The options document could not be parsed or read.
    #[error("failed to parse list options: {0}")]
    Parse(String),
}

impl ConfigurationError {
    /// Create an invalid-transition error.
    pub fn transition(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidTransition {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-value error.
    pub fn value(property: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            property: property.into(),
            reason: reason.into(),
        }
    }
}
