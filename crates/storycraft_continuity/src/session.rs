//! Per-document generation session state.

use storycraft_error::{GenerationError, GenerationErrorKind};

/// Where a document sits relative to the generation backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// No call in flight (default).
    #[default]
    Idle,
    /// A generation or regeneration call is outstanding.
    Generating,
}

/// Busy-state machine for a single document: `Idle -> Generating -> Idle`.
///
/// At most one call may be in `Generating` at a time; a second `begin` is
/// rejected rather than queued. Every call path must pair `begin` with
/// `finish` so the session can never be left stuck busy.
#[derive(Debug, Clone, Default)]
pub struct DocumentSession {
    state: SessionState,
}

impl DocumentSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Enter `Generating`, rejecting overlap with an outstanding call.
    pub fn begin(&mut self) -> Result<(), GenerationError> {
        match self.state {
            SessionState::Idle => {
                self.state = SessionState::Generating;
                Ok(())
            }
            SessionState::Generating => Err(GenerationError::new(GenerationErrorKind::Busy)),
        }
    }

    /// Return to `Idle`, whatever the call's outcome was.
    pub fn finish(&mut self) {
        self.state = SessionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_then_finish_round_trips() {
        let mut session = DocumentSession::new();
        assert_eq!(session.state(), SessionState::Idle);

        session.begin().expect("idle session accepts a call");
        assert_eq!(session.state(), SessionState::Generating);

        session.finish();
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn overlapping_begin_is_rejected() {
        let mut session = DocumentSession::new();
        session.begin().unwrap();
        assert!(session.begin().is_err());

        // Still generating; the rejected call must not corrupt the state.
        assert_eq!(session.state(), SessionState::Generating);
    }

    #[test]
    fn finish_always_restores_idle() {
        let mut session = DocumentSession::new();
        session.begin().unwrap();
        session.finish();
        assert!(session.begin().is_ok());
    }
}
