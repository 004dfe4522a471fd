//! Request validation error types.

/// Specific validation failures caught before the generation backend is invoked.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ValidationErrorKind {
    /// A required text field is missing or blank
    #[display("Required field '{}' is missing or blank", _0)]
    BlankField(String),
    /// Requested scene count falls outside the supported range
    #[display("Scene count {} is out of range ({}..={})", given, min, max)]
    SceneCountOutOfRange {
        /// Value the caller asked for
        given: u32,
        /// Lowest accepted count
        min: u32,
        /// Highest accepted count
        max: u32,
    },
    /// A scene request must involve at least one character
    #[display("Character count must be at least 1")]
    CharacterCountZero,
    /// A refine request carried no scenes
    #[display("Scene list cannot be empty")]
    EmptyScenes,
    /// The edited scene index does not point into the scene list
    #[display("Edited scene index {} is out of bounds for {} scenes", index, len)]
    EditIndexOutOfBounds {
        /// Index the caller supplied
        index: usize,
        /// Number of scenes in the request
        len: usize,
    },
    /// Regeneration was requested with no edits to reconcile
    #[display("No edits to reconcile")]
    NoPendingEdits,
}

/// Validation error with location tracking.
///
/// # Examples
///
/// ```
/// use storycraft_error::{ValidationError, ValidationErrorKind};
///
/// let err = ValidationError::new(ValidationErrorKind::NoPendingEdits);
/// assert!(format!("{}", err).contains("No edits"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} at line {} in {}", kind, line, file)]
pub struct ValidationError {
    /// The kind of error that occurred
    pub kind: ValidationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new validation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ValidationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for the blank-field case, the most common rejection.
    #[track_caller]
    pub fn blank_field(name: impl Into<String>) -> Self {
        Self::new(ValidationErrorKind::BlankField(name.into()))
    }
}
