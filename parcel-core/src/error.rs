/// Error types for resolution and selection
use thiserror::Error;

use crate::selection::Phase;

/// Invalid resolver settings
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("threshold must be between 0.0 and 1.0, got {0}")]
    InvalidThreshold(f64),

    #[error("suggestion limit must be at least 1")]
    InvalidSuggestionLimit,

    #[error("failed to parse resolver config: {0}")]
    Parse(String),
}

/// Failures of the commit-mode address lookup.
///
/// "No entry above the threshold" is not an error; it resolves to the
/// fallback parcel instead.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveError {
    /// The query was empty or whitespace only
    #[error("no query text")]
    NoQueryText,

    /// There is no parcel to fall back to
    #[error("the parcel catalog is empty")]
    EmptyCatalog,
}

/// Failures of selection state operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no query text")]
    NoQueryText,

    #[error("the parcel catalog is empty")]
    EmptyCatalog,

    /// Caller passed an index outside `[0, size)`; never clamped
    #[error("parcel index {index} out of range (catalog has {size} parcels)")]
    OutOfRange { index: usize, size: usize },

    /// Operation called in a phase that does not allow it
    #[error("{operation} is not allowed while {phase}")]
    InvalidPhase {
        operation: &'static str,
        phase: Phase,
    },
}

impl From<ResolveError> for SelectionError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::NoQueryText => SelectionError::NoQueryText,
            ResolveError::EmptyCatalog => SelectionError::EmptyCatalog,
        }
    }
}
