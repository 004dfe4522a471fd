//! Generation request shapes and their validation.
//!
//! Each request is assembled fresh per call, validated at the boundary, and
//! discarded after the result is merged. Builders own no state and perform
//! no retries; retry policy belongs to the backend behind the driver trait.

use crate::{Scene, Script};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use storycraft_error::{ValidationError, ValidationErrorKind};

/// Inclusive bound on the number of scenes a full-script request may ask for.
pub const SCENE_COUNT_RANGE: RangeInclusive<u32> = 1..=10;

/// Neutral stand-in when a regeneration request has no preceding scenes.
pub const STORY_START_PLACEHOLDER: &str =
    "No previous scenes. This is the beginning of the script.";

fn require(name: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::blank_field(name))
    } else {
        Ok(())
    }
}

/// Render scenes into the plain-text context block regeneration prompts use.
///
/// One entry per scene (`SCENE n: LOCATION`, description, dialogue),
/// separated by `---` dividers. Empty input renders to an empty string.
pub fn scene_context_text(scenes: &[Scene]) -> String {
    scenes
        .iter()
        .map(|s| {
            format!(
                "SCENE {}: {}\n{}\n{}",
                s.scene_number(),
                s.location().to_uppercase(),
                s.description(),
                s.dialogue()
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n---\n\n")
}

/// Request for one standalone scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneRequest {
    pub title: String,
    pub genre: String,
    pub tone: String,
    pub language: String,
    pub script_type: String,
    pub character_count: u32,
    pub plot_idea: String,
}

impl SceneRequest {
    /// Check every required field before dispatch.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("genre", &self.genre)?;
        require("tone", &self.tone)?;
        require("language", &self.language)?;
        require("script_type", &self.script_type)?;
        require("plot_idea", &self.plot_idea)?;
        if self.character_count == 0 {
            return Err(ValidationError::new(ValidationErrorKind::CharacterCountZero));
        }
        Ok(())
    }
}

/// Request for a complete multi-scene script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptRequest {
    pub title: String,
    pub genre: String,
    pub tone: String,
    pub language: String,
    pub script_type: String,
    /// Free-text cast description: names, roles, personalities
    pub characters: String,
    pub plot_idea: String,
    /// Number of scenes to generate, bounded by [`SCENE_COUNT_RANGE`]
    pub scene_count: u32,
}

impl ScriptRequest {
    /// Check required fields and the scene-count bound before dispatch.
    ///
    /// Out-of-range counts are rejected here, client-side; they are never
    /// sent to the backend.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("genre", &self.genre)?;
        require("tone", &self.tone)?;
        require("language", &self.language)?;
        require("script_type", &self.script_type)?;
        require("characters", &self.characters)?;
        require("plot_idea", &self.plot_idea)?;
        if !SCENE_COUNT_RANGE.contains(&self.scene_count) {
            return Err(ValidationError::new(
                ValidationErrorKind::SceneCountOutOfRange {
                    given: self.scene_count,
                    min: *SCENE_COUNT_RANGE.start(),
                    max: *SCENE_COUNT_RANGE.end(),
                },
            ));
        }
        Ok(())
    }
}

/// Structured fields of the scene a regeneration request targets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneContext {
    pub title: String,
    pub location: String,
    pub time_of_day: String,
    pub description: String,
    pub dialogue: String,
}

impl From<&Scene> for SceneContext {
    fn from(scene: &Scene) -> Self {
        Self {
            title: scene.title().clone(),
            location: scene.location().clone(),
            time_of_day: scene.time_of_day().clone(),
            description: scene.description().clone(),
            dialogue: scene.dialogue().clone(),
        }
    }
}

/// Context-aware regeneration of a single scene.
///
/// The backend must return exactly one [`SceneRevision`](crate::SceneRevision).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegenerateRequest {
    /// Rendered text of the preceding scenes; never empty after construction
    pub previous_scenes: String,
    pub current: SceneContext,
    /// Rendered text of the following scenes, for forward continuity
    pub subsequent_scenes: Option<String>,
    /// Optional free-text instruction from the user
    pub edit_prompt: Option<String>,
}

impl RegenerateRequest {
    /// Build a request, substituting the story-start placeholder when there
    /// is nothing before the target scene.
    pub fn new(previous_scenes: impl Into<String>, current: SceneContext) -> Self {
        let previous_scenes = previous_scenes.into();
        let previous_scenes = if previous_scenes.trim().is_empty() {
            STORY_START_PLACEHOLDER.to_string()
        } else {
            previous_scenes
        };
        Self {
            previous_scenes,
            current,
            subsequent_scenes: None,
            edit_prompt: None,
        }
    }

    /// Build a request for the scene at `index`, rendering neighbor context
    /// from the script itself.
    pub fn from_script(script: &Script, index: usize) -> Option<Self> {
        let scene = script.scenes().get(index)?;
        let previous = scene_context_text(&script.scenes()[..index]);
        let subsequent = scene_context_text(&script.scenes()[index + 1..]);

        let mut request = Self::new(previous, SceneContext::from(scene));
        if !subsequent.is_empty() {
            request.subsequent_scenes = Some(subsequent);
        }
        Some(request)
    }

    pub fn with_subsequent(mut self, subsequent_scenes: impl Into<String>) -> Self {
        self.subsequent_scenes = Some(subsequent_scenes.into());
        self
    }

    pub fn with_edit_prompt(mut self, edit_prompt: impl Into<String>) -> Self {
        self.edit_prompt = Some(edit_prompt.into());
        self
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("current.location", &self.current.location)?;
        require("current.time_of_day", &self.current.time_of_day)?;
        Ok(())
    }
}

/// Standalone rewrite of a single scene, without neighbor context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteRequest {
    pub title: String,
    pub location: String,
    pub time_of_day: String,
    pub description: String,
    pub dialogue: String,
    pub genre: String,
    pub tone: String,
    pub script_type: String,
}

impl RewriteRequest {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("location", &self.location)?;
        require("time_of_day", &self.time_of_day)?;
        require("genre", &self.genre)?;
        require("tone", &self.tone)?;
        require("script_type", &self.script_type)?;
        Ok(())
    }
}

/// Continuity-aware polish of one scene's dialogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueRequest {
    pub previous_scenes: String,
    pub current_dialogue: String,
}

impl DialogueRequest {
    /// Build a request, substituting the story-start placeholder when there
    /// is no preceding content.
    pub fn new(previous_scenes: impl Into<String>, current_dialogue: impl Into<String>) -> Self {
        let previous_scenes = previous_scenes.into();
        let previous_scenes = if previous_scenes.trim().is_empty() {
            STORY_START_PLACEHOLDER.to_string()
        } else {
            previous_scenes
        };
        Self {
            previous_scenes,
            current_dialogue: current_dialogue.into(),
        }
    }
}

/// Snapshot of one scene inside a refine-from-edit request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneSnapshot {
    pub scene_number: u32,
    pub title: String,
    pub location: String,
    pub time_of_day: String,
    pub description: String,
    pub dialogue: String,
}

impl From<&Scene> for SceneSnapshot {
    fn from(scene: &Scene) -> Self {
        Self {
            scene_number: *scene.scene_number(),
            title: scene.title().clone(),
            location: scene.location().clone(),
            time_of_day: scene.time_of_day().clone(),
            description: scene.description().clone(),
            dialogue: scene.dialogue().clone(),
        }
    }
}

/// Refine-from-edit: the whole scene array plus the index the user edited.
///
/// The backend treats the edited scene as the new source of truth and
/// returns one [`SceneRevision`](crate::SceneRevision) per following scene,
/// positionally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefineRequest {
    pub title: String,
    pub genre: String,
    pub tone: String,
    pub scenes: Vec<SceneSnapshot>,
    pub edited_scene_index: usize,
}

impl RefineRequest {
    /// Snapshot a script for refinement anchored at `edited_scene_index`.
    pub fn from_script(script: &Script, edited_scene_index: usize) -> Self {
        Self {
            title: script.title().clone(),
            genre: script.genre().clone(),
            tone: script.tone().clone(),
            scenes: script.scenes().iter().map(SceneSnapshot::from).collect(),
            edited_scene_index,
        }
    }

    /// Number of revisions the backend is expected to return.
    pub fn expected_revisions(&self) -> usize {
        self.scenes.len().saturating_sub(self.edited_scene_index + 1)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("genre", &self.genre)?;
        require("tone", &self.tone)?;
        if self.scenes.is_empty() {
            return Err(ValidationError::new(ValidationErrorKind::EmptyScenes));
        }
        if self.edited_scene_index >= self.scenes.len() {
            return Err(ValidationError::new(
                ValidationErrorKind::EditIndexOutOfBounds {
                    index: self.edited_scene_index,
                    len: self.scenes.len(),
                },
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storycraft_error::ValidationErrorKind;

    fn scene_request() -> SceneRequest {
        SceneRequest {
            title: "Pilot".into(),
            genre: "Thriller".into(),
            tone: "tense".into(),
            language: "English".into(),
            script_type: "movie".into(),
            character_count: 2,
            plot_idea: "A detective finds a clue.".into(),
        }
    }

    fn script_request(scene_count: u32) -> ScriptRequest {
        ScriptRequest {
            title: "Pilot".into(),
            genre: "Thriller".into(),
            tone: "tense".into(),
            language: "English".into(),
            script_type: "movie".into(),
            characters: "JANE, a detective. MACK, her partner.".into(),
            plot_idea: "A heist goes wrong.".into(),
            scene_count,
        }
    }

    #[test]
    fn valid_scene_request_passes() {
        assert!(scene_request().validate().is_ok());
    }

    #[test]
    fn blank_field_is_rejected() {
        let mut request = scene_request();
        request.plot_idea = "   ".into();
        let err = request.validate().unwrap_err();
        assert!(matches!(err.kind, ValidationErrorKind::BlankField(ref f) if f == "plot_idea"));
    }

    #[test]
    fn zero_characters_is_rejected() {
        let mut request = scene_request();
        request.character_count = 0;
        let err = request.validate().unwrap_err();
        assert_eq!(err.kind, ValidationErrorKind::CharacterCountZero);
    }

    #[test]
    fn scene_count_bounds_are_inclusive() {
        assert!(script_request(1).validate().is_ok());
        assert!(script_request(10).validate().is_ok());
        assert!(script_request(0).validate().is_err());
        assert!(script_request(11).validate().is_err());
    }

    #[test]
    fn empty_previous_scenes_gets_the_placeholder() {
        let current = SceneContext {
            title: "Opening".into(),
            location: "INT. LAB".into(),
            time_of_day: "Night".into(),
            description: String::new(),
            dialogue: String::new(),
        };
        let request = RegenerateRequest::new("  \n", current);
        assert_eq!(request.previous_scenes, STORY_START_PLACEHOLDER);
    }

    #[test]
    fn nonempty_previous_scenes_is_kept_verbatim() {
        let current = SceneContext {
            title: "Opening".into(),
            location: "INT. LAB".into(),
            time_of_day: "Night".into(),
            description: String::new(),
            dialogue: String::new(),
        };
        let request = RegenerateRequest::new("SCENE 1: INT. LAB\n...", current);
        assert_eq!(request.previous_scenes, "SCENE 1: INT. LAB\n...");
    }

    #[test]
    fn refine_request_counts_expected_revisions() {
        let script = crate::Script::new(
            crate::ScriptMeta::default()
                .with_title("Pilot")
                .with_genre("Thriller")
                .with_tone("tense"),
            vec![
                crate::SceneSeed::new("INT. LAB", "Night"),
                crate::SceneSeed::new("EXT. STREET", "Day"),
                crate::SceneSeed::new("INT. BAR", "Night"),
            ],
        );
        let request = RefineRequest::from_script(&script, 1);
        assert_eq!(request.expected_revisions(), 1);
        assert!(request.validate().is_ok());

        let at_end = RefineRequest::from_script(&script, 2);
        assert_eq!(at_end.expected_revisions(), 0);
    }

    #[test]
    fn refine_request_rejects_out_of_bounds_index() {
        let script = crate::Script::new(
            crate::ScriptMeta::default()
                .with_title("Pilot")
                .with_genre("Thriller")
                .with_tone("tense"),
            vec![crate::SceneSeed::new("INT. LAB", "Night")],
        );
        let request = RefineRequest::from_script(&script, 3);
        let err = request.validate().unwrap_err();
        assert!(matches!(
            err.kind,
            ValidationErrorKind::EditIndexOutOfBounds { index: 3, len: 1 }
        ));
    }
}
