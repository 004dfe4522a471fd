//! Output shapes returned by the generation backend.

use serde::{Deserialize, Serialize};

/// A fully drafted scene, as returned for single-scene and full-script
/// generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneDraft {
    /// 1-based scene number assigned by the backend
    pub scene_number: u32,
    /// Slugline text
    pub location: String,
    /// Time-of-day label
    pub time_of_day: String,
    /// Prose action text
    pub description: String,
    /// Raw dialogue text, character names in uppercase
    pub dialogue: String,
}

/// Regenerated content for an existing scene.
///
/// Carries only the two fields the backend is allowed to touch; everything
/// else on the scene is off limits to regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneRevision {
    pub description: String,
    pub dialogue: String,
}

/// Polished dialogue for a single scene.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImprovedDialogue {
    pub dialogue: String,
}
