//! The generation backend trait.

use async_trait::async_trait;
use storycraft_core::{
    DialogueRequest, ImprovedDialogue, RefineRequest, RegenerateRequest, RewriteRequest,
    SceneDraft, SceneRequest, SceneRevision, ScriptRequest,
};
use storycraft_error::StorycraftResult;

/// Opaque generation collaborator: typed request in, typed output or a
/// generation error out. Never panics, never throws past the boundary.
///
/// Implementations wrap a real LLM provider; the engine only ever sees this
/// trait, so orchestration logic is tested against canned in-process fakes.
///
/// Contracts per method:
/// - [`refine_script`](Self::refine_script) must return one revision per
///   scene after the edited index, positionally. Callers tolerate short
///   returns (a degraded merge) and ignore surplus entries.
/// - [`regenerate_scene`](Self::regenerate_scene) and
///   [`rewrite_scene`](Self::rewrite_scene) return exactly one revision.
#[async_trait]
pub trait ScreenwriterDriver: Send + Sync {
    /// Draft one standalone scene.
    async fn generate_scene(&self, request: &SceneRequest) -> StorycraftResult<SceneDraft>;

    /// Draft a full script with the requested number of scenes.
    async fn generate_script(&self, request: &ScriptRequest) -> StorycraftResult<Vec<SceneDraft>>;

    /// Regenerate one scene with neighbor context and an optional edit
    /// instruction.
    async fn regenerate_scene(
        &self,
        request: &RegenerateRequest,
    ) -> StorycraftResult<SceneRevision>;

    /// Rewrite one scene from its own fields, without neighbor context.
    async fn rewrite_scene(&self, request: &RewriteRequest) -> StorycraftResult<SceneRevision>;

    /// Regenerate every scene after the user's edit.
    async fn refine_script(&self, request: &RefineRequest) -> StorycraftResult<Vec<SceneRevision>>;

    /// Polish one scene's dialogue against preceding context.
    async fn improve_dialogue(
        &self,
        request: &DialogueRequest,
    ) -> StorycraftResult<ImprovedDialogue>;

    /// Stable name of the backing provider (e.g. "gemini", "mock").
    fn provider_name(&self) -> &'static str;

    /// Model tag recorded on generated scripts as provenance.
    fn model_name(&self) -> &str;
}
