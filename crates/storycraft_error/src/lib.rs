//! Error types for the StoryCraft screenwriting engine.
//!
//! This crate provides the foundation error types used throughout the
//! StoryCraft workspace. Each domain (validation, generation, storage,
//! export, configuration) carries its own kind enum and location-tracked
//! error struct; everything aggregates into [`StorycraftError`].

mod config;
mod export;
mod generation;
mod storage;
mod validation;

pub use config::ConfigError;
pub use export::{ExportError, ExportErrorKind};
pub use generation::{GenerationError, GenerationErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use validation::{ValidationError, ValidationErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum StorycraftErrorKind {
    /// Request validation failed before the backend was called
    Validation(ValidationError),
    /// The generation backend failed
    Generation(GenerationError),
    /// The persistence layer failed
    Storage(StorageError),
    /// PDF export failed
    Export(ExportError),
    /// Configuration could not be loaded
    Config(ConfigError),
}

impl std::fmt::Display for StorycraftErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorycraftErrorKind::Validation(e) => write!(f, "{}", e),
            StorycraftErrorKind::Generation(e) => write!(f, "{}", e),
            StorycraftErrorKind::Storage(e) => write!(f, "{}", e),
            StorycraftErrorKind::Export(e) => write!(f, "{}", e),
            StorycraftErrorKind::Config(e) => write!(f, "{}", e),
        }
    }
}

/// StoryCraft error with kind discrimination.
#[derive(Debug)]
pub struct StorycraftError(Box<StorycraftErrorKind>);

impl StorycraftError {
    /// Create a new error from a kind.
    pub fn new(kind: StorycraftErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &StorycraftErrorKind {
        &self.0
    }

    /// Plain-language message suitable for surfacing to the user.
    ///
    /// Drops the source-location suffix the `Display` impls carry, since
    /// that detail belongs in logs rather than toasts.
    pub fn user_message(&self) -> String {
        match self.kind() {
            StorycraftErrorKind::Validation(e) => e.kind.to_string(),
            StorycraftErrorKind::Generation(e) => e.kind.to_string(),
            StorycraftErrorKind::Storage(e) => e.kind.to_string(),
            StorycraftErrorKind::Export(e) => e.kind.to_string(),
            StorycraftErrorKind::Config(e) => e.message.clone(),
        }
    }
}

impl std::fmt::Display for StorycraftError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StoryCraft Error: {}", self.0)
    }
}

impl std::error::Error for StorycraftError {}

// Generic From implementation for any type that converts to StorycraftErrorKind
impl<T> From<T> for StorycraftError
where
    T: Into<StorycraftErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for StoryCraft operations.
pub type StorycraftResult<T> = std::result::Result<T, StorycraftError>;
