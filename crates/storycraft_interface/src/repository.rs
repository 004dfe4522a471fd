//! The persistence collaborator trait.

use async_trait::async_trait;
use storycraft_core::{SceneSeed, SceneUpdate, Script, ScriptMeta, ScriptPatch};
use storycraft_error::StorycraftResult;
use uuid::Uuid;

/// Local key-value persistence for the script library.
///
/// Scene-level operations funnel through the document model, so the
/// contiguous-numbering invariant holds for every stored script. A missing
/// script or scene id is an explicit `None`/`false`, never an error; errors
/// are reserved for the storage medium itself (I/O, serialization).
#[async_trait]
pub trait ScriptRepository: Send + Sync {
    /// All stored scripts.
    async fn list(&self) -> StorycraftResult<Vec<Script>>;

    /// Look up one script by id.
    async fn get(&self, script_id: Uuid) -> StorycraftResult<Option<Script>>;

    /// Create a draft script from metadata and seed scenes.
    ///
    /// Seed scenes are numbered contiguously on entry.
    async fn create(&self, meta: ScriptMeta, scenes: Vec<SceneSeed>) -> StorycraftResult<Script>;

    /// Apply a script-level patch.
    async fn update(&self, script_id: Uuid, patch: ScriptPatch)
    -> StorycraftResult<Option<Script>>;

    /// Replace a stored script wholesale (the post-merge save path).
    ///
    /// Returns `false` when the id is unknown.
    async fn save(&self, script: &Script) -> StorycraftResult<bool>;

    /// Delete a script. Returns `false` when the id is unknown.
    async fn delete(&self, script_id: Uuid) -> StorycraftResult<bool>;

    /// Append a scene to a script.
    async fn add_scene(
        &self,
        script_id: Uuid,
        seed: SceneSeed,
    ) -> StorycraftResult<Option<Script>>;

    /// Apply a partial update to one scene.
    ///
    /// `None` when either the script or the scene id is unknown.
    async fn update_scene(
        &self,
        script_id: Uuid,
        scene_id: Uuid,
        update: SceneUpdate,
    ) -> StorycraftResult<Option<Script>>;

    /// Delete one scene and renumber the remainder.
    ///
    /// `None` when either the script or the scene id is unknown.
    async fn delete_scene(
        &self,
        script_id: Uuid,
        scene_id: Uuid,
    ) -> StorycraftResult<Option<Script>>;

    /// Persist any buffered state to the backing medium.
    ///
    /// In-memory implementations have nothing to do.
    async fn flush(&self) -> StorycraftResult<()> {
        Ok(())
    }
}
