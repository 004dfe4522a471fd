//! Collaborator traits for the StoryCraft screenwriting engine.
//!
//! Two seams: [`ScreenwriterDriver`], the opaque generation backend, and
//! [`ScriptRepository`], the local persistence layer. Both are injected so
//! the engine's orchestration and merge logic can be tested against fakes.

mod driver;
mod repository;

pub use driver::ScreenwriterDriver;
pub use repository::ScriptRepository;
