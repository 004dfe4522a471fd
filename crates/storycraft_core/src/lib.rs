//! Core data types for the StoryCraft screenwriting engine.
//!
//! This crate provides the screenplay document model (scripts owning
//! contiguously numbered scenes) and the typed request/output shapes
//! exchanged with the generation backend.

mod output;
mod request;
mod scene;
mod script;
mod status;

pub use output::{ImprovedDialogue, SceneDraft, SceneRevision};
pub use request::{
    DialogueRequest, RefineRequest, RegenerateRequest, RewriteRequest, SCENE_COUNT_RANGE,
    STORY_START_PLACEHOLDER, SceneContext, SceneRequest, SceneSnapshot, ScriptRequest,
    scene_context_text,
};
pub use scene::{Scene, SceneSeed, SceneUpdate};
pub use script::{Script, ScriptMeta, ScriptPatch};
pub use status::ScriptStatus;
