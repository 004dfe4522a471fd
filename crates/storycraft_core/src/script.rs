//! Script entity and the document model operations.

use crate::{Scene, SceneSeed, SceneUpdate, ScriptStatus};
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A screenplay: script-level metadata plus an ordered sequence of scenes.
///
/// Invariant: `scenes` is ordered by `scene_number`, contiguous starting at
/// 1. Every mutating operation renumbers the full sequence and refreshes
/// `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Script {
    /// Unique identifier
    id: Uuid,
    /// Title of the screenplay
    title: String,
    /// Genre, e.g. "Thriller"
    genre: String,
    /// Tone, e.g. "dramatic"
    tone: String,
    /// Language the screenplay is written in
    language: String,
    /// Type of script, e.g. "movie" or "TV episode"
    script_type: String,
    /// Attribution printed on the exported title page
    author: String,
    /// Provenance tag naming the model that generated the content
    ai_model_used: String,
    /// Lifecycle status
    status: ScriptStatus,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last modification timestamp
    updated_at: DateTime<Utc>,
    /// Ordered scenes, numbered contiguously from 1
    scenes: Vec<Scene>,
}

/// Script-level construction metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
pub struct ScriptMeta {
    pub title: String,
    pub genre: String,
    pub tone: String,
    pub language: String,
    pub script_type: String,
    pub author: String,
    pub ai_model_used: String,
}

/// Partial update for script-level fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option, into)]
pub struct ScriptPatch {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub tone: Option<String>,
    pub language: Option<String>,
    pub script_type: Option<String>,
    pub author: Option<String>,
    pub ai_model_used: Option<String>,
    pub status: Option<ScriptStatus>,
}

impl Script {
    /// Create a draft script, numbering the seed scenes on entry.
    pub fn new(meta: ScriptMeta, scenes: Vec<SceneSeed>) -> Self {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let scenes = scenes
            .into_iter()
            .enumerate()
            .map(|(index, seed)| Scene::from_seed(id, seed, index as u32 + 1))
            .collect();

        Self {
            id,
            title: meta.title,
            genre: meta.genre,
            tone: meta.tone,
            language: meta.language,
            script_type: meta.script_type,
            author: meta.author,
            ai_model_used: meta.ai_model_used,
            status: ScriptStatus::Draft,
            created_at: now,
            updated_at: now,
            scenes,
        }
    }

    /// Look up a scene by id.
    pub fn scene(&self, scene_id: Uuid) -> Option<&Scene> {
        self.scenes.iter().find(|s| *s.id() == scene_id)
    }

    /// Append a scene at the end of the sequence.
    ///
    /// The new scene is numbered `len + 1`; there is no mid-sequence
    /// insertion primitive. UI-level "insert" is append-then-reorder.
    pub fn add_scene(&mut self, seed: SceneSeed) -> &Scene {
        let number = self.scenes.len() as u32 + 1;
        let scene = Scene::from_seed(self.id, seed, number);
        self.scenes.push(scene);
        self.touch();
        self.scenes.last().expect("scene was just pushed")
    }

    /// Apply a partial update to the scene with the given id.
    ///
    /// Returns `None` when no scene carries the id, leaving the script
    /// untouched.
    pub fn update_scene(&mut self, scene_id: Uuid, update: SceneUpdate) -> Option<&Scene> {
        let index = self.scenes.iter().position(|s| *s.id() == scene_id)?;
        self.scenes[index].apply_update(update);
        self.touch();
        Some(&self.scenes[index])
    }

    /// Remove the scene with the given id and renumber the remainder.
    ///
    /// Returns `false` when no scene carries the id. Deleting shifts the
    /// `scene_number` of every scene after the removed one.
    pub fn delete_scene(&mut self, scene_id: Uuid) -> bool {
        let Some(index) = self.scenes.iter().position(|s| *s.id() == scene_id) else {
            return false;
        };
        self.scenes.remove(index);
        self.renumber();
        self.touch();
        true
    }

    /// Move the scene with the given id to `new_index` (clamped) and
    /// renumber.
    pub fn move_scene(&mut self, scene_id: Uuid, new_index: usize) -> bool {
        let Some(index) = self.scenes.iter().position(|s| *s.id() == scene_id) else {
            return false;
        };
        let scene = self.scenes.remove(index);
        let target = new_index.min(self.scenes.len());
        self.scenes.insert(target, scene);
        self.renumber();
        self.touch();
        true
    }

    /// Mutable access to a scene by position, for the merge path.
    ///
    /// Content-only merges go through
    /// [`Scene::apply_revision`], which leaves scene timestamps alone; the
    /// script-level timestamp is the caller's responsibility via
    /// [`Script::touch`].
    pub fn scene_at_mut(&mut self, index: usize) -> Option<&mut Scene> {
        self.scenes.get_mut(index)
    }

    /// Apply a partial update to script-level fields.
    pub fn apply_patch(&mut self, patch: ScriptPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(genre) = patch.genre {
            self.genre = genre;
        }
        if let Some(tone) = patch.tone {
            self.tone = tone;
        }
        if let Some(language) = patch.language {
            self.language = language;
        }
        if let Some(script_type) = patch.script_type {
            self.script_type = script_type;
        }
        if let Some(author) = patch.author {
            self.author = author;
        }
        if let Some(ai_model_used) = patch.ai_model_used {
            self.ai_model_used = ai_model_used;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        self.touch();
    }

    /// Mark the script completed.
    pub fn complete(&mut self) {
        self.status = ScriptStatus::Completed;
        self.touch();
    }

    /// Total whitespace-separated words across all scene dialogue.
    pub fn word_count(&self) -> usize {
        self.scenes
            .iter()
            .map(|s| s.dialogue().split_whitespace().count())
            .sum()
    }

    /// Refresh the script-level modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Restore the numbering invariant: `scene_number == index + 1`.
    fn renumber(&mut self) {
        for (index, scene) in self.scenes.iter_mut().enumerate() {
            scene.set_scene_number(index as u32 + 1);
        }
    }
}
