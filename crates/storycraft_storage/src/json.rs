//! File-backed implementation of ScriptRepository.
//!
//! The whole library lives in a single JSON file, rewritten after every
//! mutation; the file is the unit of persistence, mirroring a key-value
//! entry. A missing file is an empty library, not an error.

use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use storycraft_core::{SceneSeed, SceneUpdate, Script, ScriptMeta, ScriptPatch};
use storycraft_error::{StorageError, StorageErrorKind, StorycraftResult};
use storycraft_interface::ScriptRepository;
use tokio::sync::RwLock;
use uuid::Uuid;

/// File name of the script library inside the data directory.
pub const SCRIPTS_FILE: &str = "scripts.json";

/// Script library persisted to one JSON file.
pub struct JsonScriptRepository {
    path: PathBuf,
    scripts: Arc<RwLock<HashMap<Uuid, Script>>>,
}

impl JsonScriptRepository {
    /// Open the library at `path`, loading any existing contents.
    pub async fn open(path: impl Into<PathBuf>) -> StorycraftResult<Self> {
        let path = path.into();
        let scripts = load_library(&path).await?;
        tracing::debug!(path = %path.display(), scripts = scripts.len(), "Opened script library");
        Ok(Self {
            path,
            scripts: Arc::new(RwLock::new(scripts)),
        })
    }

    /// Platform default location: `<data dir>/storycraft/scripts.json`.
    pub fn default_path() -> StorycraftResult<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("storycraft").join(SCRIPTS_FILE))
            .ok_or_else(|| {
                StorageError::new(StorageErrorKind::Unavailable(
                    "no data directory on this platform".to_string(),
                ))
                .into()
            })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Apply a synchronous mutation to the library, then rewrite the file.
    async fn mutate<T>(
        &self,
        apply: impl FnOnce(&mut HashMap<Uuid, Script>) -> T,
    ) -> StorycraftResult<T> {
        let snapshot;
        let result;
        {
            let mut scripts = self.scripts.write().await;
            result = apply(&mut scripts);
            snapshot = sorted(&scripts);
        }
        self.write_snapshot(&snapshot).await?;
        Ok(result)
    }

    async fn write_snapshot(&self, snapshot: &[Script]) -> StorycraftResult<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())))?;
        }
        let json = serde_json::to_string_pretty(snapshot)
            .map_err(|e| StorageError::new(StorageErrorKind::Serde(e.to_string())))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StorageError::new(StorageErrorKind::Io(e.to_string())))?;
        tracing::debug!(path = %self.path.display(), scripts = snapshot.len(), "Persisted script library");
        Ok(())
    }
}

async fn load_library(path: &Path) -> StorycraftResult<HashMap<Uuid, Script>> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(contents) => contents,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
        Err(e) => return Err(StorageError::new(StorageErrorKind::Io(e.to_string())).into()),
    };
    let scripts: Vec<Script> = serde_json::from_str(&contents)
        .map_err(|e| StorageError::new(StorageErrorKind::Serde(e.to_string())))?;
    Ok(scripts.into_iter().map(|s| (*s.id(), s)).collect())
}

fn sorted(scripts: &HashMap<Uuid, Script>) -> Vec<Script> {
    let mut all: Vec<Script> = scripts.values().cloned().collect();
    all.sort_by_key(|s| *s.created_at());
    all
}

#[async_trait]
impl ScriptRepository for JsonScriptRepository {
    async fn list(&self) -> StorycraftResult<Vec<Script>> {
        Ok(sorted(&*self.scripts.read().await))
    }

    async fn get(&self, script_id: Uuid) -> StorycraftResult<Option<Script>> {
        Ok(self.scripts.read().await.get(&script_id).cloned())
    }

    async fn create(&self, meta: ScriptMeta, scenes: Vec<SceneSeed>) -> StorycraftResult<Script> {
        let script = Script::new(meta, scenes);
        let stored = script.clone();
        self.mutate(move |scripts| {
            scripts.insert(*stored.id(), stored);
        })
        .await?;
        Ok(script)
    }

    async fn update(
        &self,
        script_id: Uuid,
        patch: ScriptPatch,
    ) -> StorycraftResult<Option<Script>> {
        self.mutate(move |scripts| {
            scripts.get_mut(&script_id).map(|script| {
                script.apply_patch(patch);
                script.clone()
            })
        })
        .await
    }

    async fn save(&self, script: &Script) -> StorycraftResult<bool> {
        let replacement = script.clone();
        self.mutate(move |scripts| match scripts.get_mut(replacement.id()) {
            Some(stored) => {
                *stored = replacement;
                true
            }
            None => false,
        })
        .await
    }

    async fn delete(&self, script_id: Uuid) -> StorycraftResult<bool> {
        self.mutate(move |scripts| scripts.remove(&script_id).is_some())
            .await
    }

    async fn add_scene(
        &self,
        script_id: Uuid,
        seed: SceneSeed,
    ) -> StorycraftResult<Option<Script>> {
        self.mutate(move |scripts| {
            scripts.get_mut(&script_id).map(|script| {
                script.add_scene(seed);
                script.clone()
            })
        })
        .await
    }

    async fn update_scene(
        &self,
        script_id: Uuid,
        scene_id: Uuid,
        update: SceneUpdate,
    ) -> StorycraftResult<Option<Script>> {
        self.mutate(move |scripts| {
            let script = scripts.get_mut(&script_id)?;
            script.update_scene(scene_id, update)?;
            Some(script.clone())
        })
        .await
    }

    async fn delete_scene(
        &self,
        script_id: Uuid,
        scene_id: Uuid,
    ) -> StorycraftResult<Option<Script>> {
        self.mutate(move |scripts| {
            let script = scripts.get_mut(&script_id)?;
            if !script.delete_scene(scene_id) {
                return None;
            }
            Some(script.clone())
        })
        .await
    }

    async fn flush(&self) -> StorycraftResult<()> {
        let snapshot = sorted(&*self.scripts.read().await);
        self.write_snapshot(&snapshot).await
    }
}
