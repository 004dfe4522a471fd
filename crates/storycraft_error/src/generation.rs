//! Generation backend error types.

/// Kinds of failures surfaced by the generation backend.
///
/// The backend is an opaque collaborator; these variants only discriminate
/// between the failure modes callers may want to message differently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum GenerationErrorKind {
    /// The backend did not respond in time
    #[display("Generation timed out: {}", _0)]
    Timeout(String),
    /// The backend declined to produce content
    #[display("Generation refused: {}", _0)]
    Refused(String),
    /// The backend responded with output that does not match the contract
    #[display("Malformed generation output: {}", _0)]
    Malformed(String),
    /// Any other provider-side failure
    #[display("Provider error: {}", _0)]
    Provider(String),
    /// A second call was attempted while one was already in flight
    #[display("A generation call is already in flight")]
    Busy,
}

/// Generation error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Generation Error: {} at line {} in {}", kind, line, file)]
pub struct GenerationError {
    /// The kind of error that occurred
    pub kind: GenerationErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl GenerationError {
    /// Create a new generation error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: GenerationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
