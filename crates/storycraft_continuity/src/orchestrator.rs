//! Continuity regeneration orchestration.
//!
//! When the user edits scenes by hand, everything *after* the earliest edit
//! is recomputed so the story stays consistent with the edit, without ever
//! touching the edited scene itself.

use crate::{DocumentSession, EditTracker, SessionState};
use serde::{Deserialize, Serialize};
use storycraft_core::{RefineRequest, RegenerateRequest, Script};
use storycraft_error::{StorycraftResult, ValidationError, ValidationErrorKind};
use storycraft_interface::ScreenwriterDriver;

/// Outcome of one refine pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefineReport {
    /// Earliest dirty index; scenes after it were regenerated
    pub anchor: usize,
    /// Revisions the backend was asked for
    pub requested: usize,
    /// Revisions actually merged (smaller on a degraded return)
    pub applied: usize,
}

/// Drives continuity regeneration against an injected backend.
///
/// Owns the per-document [`DocumentSession`], so a second call while one is
/// outstanding is rejected instead of interleaved.
pub struct ContinuityOrchestrator<D: ScreenwriterDriver> {
    driver: D,
    session: DocumentSession,
}

impl<D: ScreenwriterDriver> ContinuityOrchestrator<D> {
    /// Create an orchestrator around the given backend.
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            session: DocumentSession::new(),
        }
    }

    /// The underlying backend.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Current busy state of the document.
    pub fn session_state(&self) -> SessionState {
        self.session.state()
    }

    /// Regenerate every scene after the earliest hand-edit.
    ///
    /// On success the tracker clears and all merged scenes count as clean
    /// again. On failure nothing merges and the tracker survives for a
    /// retry. A backend that returns fewer revisions than asked for is a
    /// degraded success: the returned prefix is applied positionally and
    /// the remaining scenes keep their prior content.
    #[tracing::instrument(skip(self, script, tracker), fields(script_id = %script.id()))]
    pub async fn refine(
        &mut self,
        script: &mut Script,
        tracker: &mut EditTracker,
    ) -> StorycraftResult<RefineReport> {
        self.session.begin()?;
        let result = self.refine_inner(script, tracker).await;
        // Every path ends Idle; a stuck busy state would wedge the UI.
        self.session.finish();
        result
    }

    async fn refine_inner(
        &self,
        script: &mut Script,
        tracker: &mut EditTracker,
    ) -> StorycraftResult<RefineReport> {
        let Some(anchor) = tracker.anchor() else {
            return Err(ValidationError::new(ValidationErrorKind::NoPendingEdits).into());
        };
        let scene_count = script.scenes().len();
        if anchor >= scene_count {
            return Err(ValidationError::new(ValidationErrorKind::EditIndexOutOfBounds {
                index: anchor,
                len: scene_count,
            })
            .into());
        }

        let request = RefineRequest::from_script(script, anchor);
        request.validate()?;

        let requested = request.expected_revisions();
        if requested == 0 {
            // The last scene was edited; nothing downstream to recompute.
            tracker.clear();
            tracing::debug!(anchor, "Edit at final scene, nothing to regenerate");
            return Ok(RefineReport {
                anchor,
                requested: 0,
                applied: 0,
            });
        }

        let revisions = self.driver.refine_script(&request).await?;

        if revisions.len() != requested {
            tracing::warn!(
                returned = revisions.len(),
                requested,
                "Backend returned a different revision count than asked; merging positionally"
            );
        }

        let mut applied = 0;
        for (offset, revision) in revisions.iter().take(requested).enumerate() {
            if let Some(scene) = script.scene_at_mut(anchor + 1 + offset) {
                scene.apply_revision(revision);
                applied += 1;
            }
        }
        if applied > 0 {
            script.touch();
        }
        tracker.clear();

        tracing::info!(anchor, requested, applied, "Continuity refine merged");
        Ok(RefineReport {
            anchor,
            requested,
            applied,
        })
    }

    /// Regenerate a single scene in place, with neighbor context and an
    /// optional edit instruction.
    #[tracing::instrument(skip(self, script, edit_prompt), fields(script_id = %script.id()))]
    pub async fn regenerate_scene_at(
        &mut self,
        script: &mut Script,
        index: usize,
        edit_prompt: Option<String>,
    ) -> StorycraftResult<()> {
        self.session.begin()?;
        let result = self.regenerate_inner(script, index, edit_prompt).await;
        self.session.finish();
        result
    }

    async fn regenerate_inner(
        &self,
        script: &mut Script,
        index: usize,
        edit_prompt: Option<String>,
    ) -> StorycraftResult<()> {
        let Some(mut request) = RegenerateRequest::from_script(script, index) else {
            return Err(ValidationError::new(ValidationErrorKind::EditIndexOutOfBounds {
                index,
                len: script.scenes().len(),
            })
            .into());
        };
        if let Some(prompt) = edit_prompt {
            request = request.with_edit_prompt(prompt);
        }
        request.validate()?;

        let revision = self.driver.regenerate_scene(&request).await?;
        let scene = script
            .scene_at_mut(index)
            .expect("index was validated against the scene list");
        scene.apply_revision(&revision);
        script.touch();

        tracing::info!(index, "Scene regenerated in place");
        Ok(())
    }
}
