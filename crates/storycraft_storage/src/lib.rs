//! Script library persistence for StoryCraft.
//!
//! Two implementations of the
//! [`ScriptRepository`](storycraft_interface::ScriptRepository) trait: an
//! in-memory store for tests and throwaway sessions, and a single-file JSON
//! store for the local library.

mod json;
mod memory;

pub use json::{JsonScriptRepository, SCRIPTS_FILE};
pub use memory::MemoryScriptRepository;
