//! Scene entity and its construction/update payloads.

use crate::SceneRevision;
use chrono::{DateTime, Utc};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single scene in a screenplay.
///
/// Scenes are exclusively owned by their [`Script`](crate::Script); the
/// `script_id` field is a back-reference for storage lookups, not an
/// ownership edge. `scene_number` is derived from position and maintained by
/// the script, never set independently.
///
/// `description` and `dialogue` are always present (possibly empty) —
/// downstream consumers assume string input, never an absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct Scene {
    /// Unique identifier
    id: Uuid,
    /// Identifier of the owning script
    script_id: Uuid,
    /// 1-based position in the script, contiguous
    scene_number: u32,
    /// Short working title
    title: String,
    /// Slugline text, e.g. "INT. WAREHOUSE - NIGHT"
    location: String,
    /// Free-form label, commonly Day/Night/Dusk/Dawn
    time_of_day: String,
    /// Prose action text
    description: String,
    /// Raw multi-line dialogue text mixing cues, parentheticals, and lines
    dialogue: String,
    /// Whether the current content came from the generation backend
    ai_generated: bool,
    /// Creation timestamp
    created_at: DateTime<Utc>,
    /// Last modification timestamp
    updated_at: DateTime<Utc>,
}

impl Scene {
    /// Materialize a scene from a seed at the given position.
    pub(crate) fn from_seed(script_id: Uuid, seed: SceneSeed, scene_number: u32) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            script_id,
            scene_number,
            title: seed.title,
            location: seed.location,
            time_of_day: seed.time_of_day,
            description: seed.description,
            dialogue: seed.dialogue,
            ai_generated: seed.ai_generated,
            created_at: now,
            updated_at: now,
        }
    }

    pub(crate) fn set_scene_number(&mut self, scene_number: u32) {
        self.scene_number = scene_number;
    }

    /// Apply a partial user edit and refresh the scene timestamp.
    pub(crate) fn apply_update(&mut self, update: SceneUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(time_of_day) = update.time_of_day {
            self.time_of_day = time_of_day;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(dialogue) = update.dialogue {
            self.dialogue = dialogue;
        }
        if let Some(ai_generated) = update.ai_generated {
            self.ai_generated = ai_generated;
        }
        self.updated_at = Utc::now();
    }

    /// Overwrite only the regenerable content fields.
    ///
    /// This is the merge primitive used by continuity regeneration: location,
    /// time of day, title, scene number, ids, and timestamps stay untouched.
    pub fn apply_revision(&mut self, revision: &SceneRevision) {
        self.description = revision.description.clone();
        self.dialogue = revision.dialogue.clone();
    }
}

/// Construction payload for a new scene.
///
/// Identity, position, and timestamps are assigned by the owning script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", into)]
pub struct SceneSeed {
    pub title: String,
    pub location: String,
    pub time_of_day: String,
    pub description: String,
    pub dialogue: String,
    pub ai_generated: bool,
}

impl SceneSeed {
    /// Seed with the given slugline; remaining fields start empty.
    pub fn new(location: impl Into<String>, time_of_day: impl Into<String>) -> Self {
        Self {
            location: location.into(),
            time_of_day: time_of_day.into(),
            ..Self::default()
        }
    }
}

/// Partial update for an existing scene.
///
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option, into)]
pub struct SceneUpdate {
    pub title: Option<String>,
    pub location: Option<String>,
    pub time_of_day: Option<String>,
    pub description: Option<String>,
    pub dialogue: Option<String>,
    pub ai_generated: Option<bool>,
}
