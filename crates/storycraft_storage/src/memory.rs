//! In-memory implementation of ScriptRepository.
//!
//! A HashMap-based library useful for unit tests and as the default store
//! for throwaway sessions. All data is lost when the repository is dropped.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use storycraft_core::{SceneSeed, SceneUpdate, Script, ScriptMeta, ScriptPatch};
use storycraft_error::StorycraftResult;
use storycraft_interface::ScriptRepository;
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-memory script library.
///
/// Scripts live in a HashMap behind an RwLock for thread-safe access.
///
/// # Example
/// ```no_run
/// use storycraft_storage::MemoryScriptRepository;
/// use storycraft_interface::ScriptRepository;
///
/// #[tokio::main]
/// async fn main() {
///     let repo = MemoryScriptRepository::new();
///     // Use repo.create(), repo.get(), etc.
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryScriptRepository {
    scripts: Arc<RwLock<HashMap<Uuid, Script>>>,
}

impl MemoryScriptRepository {
    /// Create a new empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored scripts (for testing).
    pub async fn len(&self) -> usize {
        self.scripts.read().await.len()
    }

    /// Whether the repository is empty (for testing).
    pub async fn is_empty(&self) -> bool {
        self.scripts.read().await.is_empty()
    }

    /// Drop all stored scripts (for testing).
    pub async fn clear(&self) {
        self.scripts.write().await.clear();
    }
}

#[async_trait]
impl ScriptRepository for MemoryScriptRepository {
    async fn list(&self) -> StorycraftResult<Vec<Script>> {
        let scripts = self.scripts.read().await;
        let mut all: Vec<Script> = scripts.values().cloned().collect();
        // Sort by creation time for consistent ordering
        all.sort_by_key(|s| *s.created_at());
        Ok(all)
    }

    async fn get(&self, script_id: Uuid) -> StorycraftResult<Option<Script>> {
        Ok(self.scripts.read().await.get(&script_id).cloned())
    }

    async fn create(&self, meta: ScriptMeta, scenes: Vec<SceneSeed>) -> StorycraftResult<Script> {
        let script = Script::new(meta, scenes);
        self.scripts
            .write()
            .await
            .insert(*script.id(), script.clone());
        Ok(script)
    }

    async fn update(
        &self,
        script_id: Uuid,
        patch: ScriptPatch,
    ) -> StorycraftResult<Option<Script>> {
        let mut scripts = self.scripts.write().await;
        Ok(scripts.get_mut(&script_id).map(|script| {
            script.apply_patch(patch);
            script.clone()
        }))
    }

    async fn save(&self, script: &Script) -> StorycraftResult<bool> {
        let mut scripts = self.scripts.write().await;
        match scripts.get_mut(script.id()) {
            Some(stored) => {
                *stored = script.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, script_id: Uuid) -> StorycraftResult<bool> {
        Ok(self.scripts.write().await.remove(&script_id).is_some())
    }

    async fn add_scene(
        &self,
        script_id: Uuid,
        seed: SceneSeed,
    ) -> StorycraftResult<Option<Script>> {
        let mut scripts = self.scripts.write().await;
        Ok(scripts.get_mut(&script_id).map(|script| {
            script.add_scene(seed);
            script.clone()
        }))
    }

    async fn update_scene(
        &self,
        script_id: Uuid,
        scene_id: Uuid,
        update: SceneUpdate,
    ) -> StorycraftResult<Option<Script>> {
        let mut scripts = self.scripts.write().await;
        let Some(script) = scripts.get_mut(&script_id) else {
            return Ok(None);
        };
        if script.update_scene(scene_id, update).is_none() {
            return Ok(None);
        }
        Ok(Some(script.clone()))
    }

    async fn delete_scene(
        &self,
        script_id: Uuid,
        scene_id: Uuid,
    ) -> StorycraftResult<Option<Script>> {
        let mut scripts = self.scripts.write().await;
        let Some(script) = scripts.get_mut(&script_id) else {
            return Ok(None);
        };
        if !script.delete_scene(scene_id) {
            return Ok(None);
        }
        Ok(Some(script.clone()))
    }
}
