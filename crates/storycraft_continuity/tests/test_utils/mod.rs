//! Shared mock backend for continuity tests.

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use storycraft_core::{
    DialogueRequest, ImprovedDialogue, RefineRequest, RegenerateRequest, RewriteRequest,
    SceneDraft, SceneRequest, SceneRevision, ScriptRequest,
};
use storycraft_error::{GenerationError, GenerationErrorKind, StorycraftResult};
use storycraft_interface::ScreenwriterDriver;

/// Canned-response backend that counts refine calls.
pub struct MockDriver {
    revisions: Vec<SceneRevision>,
    fail: bool,
    refine_calls: Arc<AtomicUsize>,
}

impl MockDriver {
    /// Backend whose refine call returns the given revisions.
    pub fn returning(revisions: Vec<SceneRevision>) -> Self {
        Self {
            revisions,
            fail: false,
            refine_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Backend whose every call fails like a provider outage.
    pub fn failing() -> Self {
        Self {
            revisions: Vec::new(),
            fail: true,
            refine_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of refine calls the backend has seen.
    pub fn refine_calls(&self) -> usize {
        self.refine_calls.load(Ordering::SeqCst)
    }

    fn outage(&self) -> GenerationError {
        GenerationError::new(GenerationErrorKind::Provider("mock outage".to_string()))
    }
}

/// Revision with recognizable content.
pub fn revision(tag: &str) -> SceneRevision {
    SceneRevision {
        description: format!("Regenerated description ({tag})"),
        dialogue: format!("JANE\nRegenerated line ({tag})"),
    }
}

#[async_trait]
impl ScreenwriterDriver for MockDriver {
    async fn generate_scene(&self, request: &SceneRequest) -> StorycraftResult<SceneDraft> {
        if self.fail {
            return Err(self.outage().into());
        }
        Ok(SceneDraft {
            scene_number: 1,
            location: "INT. MOCK STAGE".to_string(),
            time_of_day: "Day".to_string(),
            description: format!("A scene about: {}", request.plot_idea),
            dialogue: "JANE\nHello.".to_string(),
        })
    }

    async fn generate_script(&self, request: &ScriptRequest) -> StorycraftResult<Vec<SceneDraft>> {
        if self.fail {
            return Err(self.outage().into());
        }
        Ok((1..=request.scene_count)
            .map(|n| SceneDraft {
                scene_number: n,
                location: format!("INT. MOCK STAGE {n}"),
                time_of_day: "Day".to_string(),
                description: format!("Scene {n} action."),
                dialogue: format!("JANE\nLine {n}."),
            })
            .collect())
    }

    async fn regenerate_scene(
        &self,
        _request: &RegenerateRequest,
    ) -> StorycraftResult<SceneRevision> {
        if self.fail {
            return Err(self.outage().into());
        }
        Ok(self
            .revisions
            .first()
            .cloned()
            .unwrap_or_else(|| revision("single")))
    }

    async fn rewrite_scene(&self, _request: &RewriteRequest) -> StorycraftResult<SceneRevision> {
        if self.fail {
            return Err(self.outage().into());
        }
        Ok(revision("rewrite"))
    }

    async fn refine_script(&self, _request: &RefineRequest) -> StorycraftResult<Vec<SceneRevision>> {
        self.refine_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(self.outage().into());
        }
        Ok(self.revisions.clone())
    }

    async fn improve_dialogue(
        &self,
        _request: &DialogueRequest,
    ) -> StorycraftResult<ImprovedDialogue> {
        if self.fail {
            return Err(self.outage().into());
        }
        Ok(ImprovedDialogue {
            dialogue: "JANE\nImproved line.".to_string(),
        })
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }

    fn model_name(&self) -> &str {
        "mock-model-v1"
    }
}
