//! The uniform action boundary.
//!
//! Every UI-triggered operation resolves to an [`ActionOutcome`]: success
//! with data, or a plain-language error message. Nothing below this layer
//! propagates as an uncaught fault, and validation failures never reach the
//! backend.

use crate::{ContinuityOrchestrator, EditTracker, RefineReport};
use serde::Serialize;
use storycraft_core::{
    DialogueRequest, ImprovedDialogue, RegenerateRequest, RewriteRequest, SceneDraft,
    SceneRequest, SceneRevision, Script, ScriptRequest,
};
use storycraft_error::{StorycraftError, StorycraftErrorKind};
use storycraft_interface::ScreenwriterDriver;

/// Uniform `{ success, data?, error? }` envelope returned to the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionOutcome<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ActionOutcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Convert a failure into the message shown to the user.
///
/// Validation errors explain themselves; backend failures collapse to the
/// flow-specific fallback so provider internals never leak into a toast.
fn failure_message(error: &StorycraftError, fallback: &str) -> String {
    match error.kind() {
        StorycraftErrorKind::Validation(_) => error.user_message(),
        _ => fallback.to_string(),
    }
}

/// Draft one standalone scene.
pub async fn generate_scene<D: ScreenwriterDriver>(
    driver: &D,
    request: &SceneRequest,
) -> ActionOutcome<SceneDraft> {
    if let Err(e) = request.validate() {
        return ActionOutcome::err(e.kind.to_string());
    }
    match driver.generate_scene(request).await {
        Ok(draft) => ActionOutcome::ok(draft),
        Err(e) => {
            tracing::error!(error = %e, "Scene generation failed");
            ActionOutcome::err("Failed to generate scene.")
        }
    }
}

/// Draft a full script.
pub async fn generate_script<D: ScreenwriterDriver>(
    driver: &D,
    request: &ScriptRequest,
) -> ActionOutcome<Vec<SceneDraft>> {
    if let Err(e) = request.validate() {
        return ActionOutcome::err(e.kind.to_string());
    }
    match driver.generate_script(request).await {
        Ok(scenes) => ActionOutcome::ok(scenes),
        Err(e) => {
            tracing::error!(error = %e, "Full script generation failed");
            ActionOutcome::err(format!("Failed to generate script: {}", e.user_message()))
        }
    }
}

/// Regenerate one scene with neighbor context.
pub async fn regenerate_scene<D: ScreenwriterDriver>(
    driver: &D,
    request: &RegenerateRequest,
) -> ActionOutcome<SceneRevision> {
    if let Err(e) = request.validate() {
        return ActionOutcome::err(e.kind.to_string());
    }
    match driver.regenerate_scene(request).await {
        Ok(revision) => ActionOutcome::ok(revision),
        Err(e) => {
            tracing::error!(error = %e, "Scene regeneration failed");
            ActionOutcome::err("Failed to regenerate scene with continuity.")
        }
    }
}

/// Rewrite one scene without neighbor context.
pub async fn rewrite_scene<D: ScreenwriterDriver>(
    driver: &D,
    request: &RewriteRequest,
) -> ActionOutcome<SceneRevision> {
    if let Err(e) = request.validate() {
        return ActionOutcome::err(e.kind.to_string());
    }
    match driver.rewrite_scene(request).await {
        Ok(revision) => ActionOutcome::ok(revision),
        Err(e) => {
            tracing::error!(error = %e, "Scene rewrite failed");
            ActionOutcome::err("Failed to regenerate scene.")
        }
    }
}

/// Polish one scene's dialogue against preceding context.
pub async fn improve_dialogue<D: ScreenwriterDriver>(
    driver: &D,
    request: &DialogueRequest,
) -> ActionOutcome<ImprovedDialogue> {
    match driver.improve_dialogue(request).await {
        Ok(improved) => ActionOutcome::ok(improved),
        Err(e) => {
            tracing::error!(error = %e, "Dialogue improvement failed");
            ActionOutcome::err("Failed to improve dialogue.")
        }
    }
}

/// Run a continuity refine and fold the result into the uniform envelope.
pub async fn refine_script<D: ScreenwriterDriver>(
    orchestrator: &mut ContinuityOrchestrator<D>,
    script: &mut Script,
    tracker: &mut EditTracker,
) -> ActionOutcome<RefineReport> {
    match orchestrator.refine(script, tracker).await {
        Ok(report) => ActionOutcome::ok(report),
        Err(e) => {
            tracing::error!(error = %e, "Continuity refine failed");
            ActionOutcome::err(failure_message(&e, "Failed to re-align the story after your edit."))
        }
    }
}
