//! StoryCraft: an AI-assisted screenwriting engine.
//!
//! Users describe a story, a generation backend drafts scenes, users edit
//! them, and edited scenes trigger continuity-preserving regeneration of
//! everything that follows. Scripts persist to a local JSON library and
//! export to screenplay-formatted PDF.
//!
//! This facade crate re-exports the public surface of the workspace:
//!
//! - [`Script`]/[`Scene`] and the document model (`storycraft_core`)
//! - [`ScreenwriterDriver`]/[`ScriptRepository`] collaborator traits
//!   (`storycraft_interface`)
//! - [`ContinuityOrchestrator`], [`EditTracker`], and the action boundary
//!   (`storycraft_continuity`)
//! - [`export_script`] and the dialogue classifier (`storycraft_export`)
//! - [`MemoryScriptRepository`]/[`JsonScriptRepository`]
//!   (`storycraft_storage`)

pub mod cli;
mod config;
mod telemetry;

pub use config::StorycraftConfig;
pub use telemetry::init_tracing;

pub use storycraft_error::{
    ConfigError, ExportError, ExportErrorKind, GenerationError, GenerationErrorKind,
    StorageError, StorageErrorKind, StorycraftError, StorycraftErrorKind, StorycraftResult,
    ValidationError, ValidationErrorKind,
};

pub use storycraft_core::{
    DialogueRequest, ImprovedDialogue, RefineRequest, RegenerateRequest, RewriteRequest,
    SCENE_COUNT_RANGE, STORY_START_PLACEHOLDER, Scene, SceneContext, SceneDraft, SceneRequest,
    SceneRevision, SceneSeed, SceneSnapshot, SceneUpdate, Script, ScriptMeta, ScriptPatch,
    ScriptRequest, ScriptStatus, scene_context_text,
};

pub use storycraft_interface::{ScreenwriterDriver, ScriptRepository};

pub use storycraft_storage::{JsonScriptRepository, MemoryScriptRepository, SCRIPTS_FILE};

pub use storycraft_continuity::{
    ActionOutcome, ContinuityOrchestrator, DocumentSession, EditTracker, RefineReport,
    SessionState, generate_scene, generate_script, improve_dialogue, refine_script,
    regenerate_scene, rewrite_scene,
};

pub use storycraft_export::{
    ClassifiedLine, CueKind, LaidOutDocument, classify, classify_dialogue, export_file_name,
    export_script, lay_out_script, render_pdf, slugify_title,
};
