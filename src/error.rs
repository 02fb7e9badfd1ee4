//! Error types for treeselect
//!
//! Uses `thiserror` for library errors. Construction errors (`InvalidPath`,
//! `DuplicateValue`) abort the whole build; toggle errors (`NotFound`,
//! `Frozen`, `BatchSelectionDisabled`) are reported to the caller and leave
//! the selection untouched.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for treeselect operations
pub type TreeSelectResult<T> = Result<T, TreeSelectError>;

/// What a failed lookup was looking for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotFoundTarget {
    /// A leaf addressed by its option value
    Value(String),
    /// A section, as its delimiter-joined path
    Section(String),
}

impl fmt::Display for NotFoundTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(value) => write!(f, "option '{}'", value),
            Self::Section(path) => write!(f, "section '{}'", path),
        }
    }
}

/// Main error type for treeselect operations
#[derive(Error, Debug)]
pub enum TreeSelectError {
    /// Section path is empty or contains an empty segment
    #[error("invalid section path '{path}' for option '{value}'")]
    InvalidPath { value: String, path: String },

    /// Two options share the same value
    #[error("duplicate option value '{value}'")]
    DuplicateValue { value: String },

    /// Toggle referenced an unknown leaf or section
    #[error("{target} not found")]
    NotFound { target: NotFoundTarget },

    /// Section-level toggles require batch selection
    #[error("batch selection is disabled")]
    BatchSelectionDisabled,

    /// Widget was built with `freeze = true`
    #[error("selection is frozen")]
    Frozen,

    /// Configuration file could not be parsed or failed validation
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Options document could not be parsed
    #[error("invalid options document {file}: {message}")]
    InvalidDocument { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TreeSelectError {
    pub(crate) fn value_not_found(value: &str) -> Self {
        Self::NotFound {
            target: NotFoundTarget::Value(value.to_string()),
        }
    }

    pub(crate) fn section_not_found(joined_path: impl Into<String>) -> Self {
        Self::NotFound {
            target: NotFoundTarget::Section(joined_path.into()),
        }
    }

    /// True for errors that leave existing state intact and can be skipped
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::BatchSelectionDisabled | Self::Frozen
        )
    }
}
