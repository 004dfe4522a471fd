//! Script lifecycle status.

use serde::{Deserialize, Serialize};

/// Lifecycle state of a script.
///
/// Scripts are created as drafts on the first successful
/// generation-and-save and marked completed explicitly by the user.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ScriptStatus {
    /// Still being written or revised (default).
    #[default]
    Draft,
    /// The user has declared the script finished.
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ScriptStatus::Draft).unwrap(), "\"draft\"");
        assert_eq!(
            serde_json::from_str::<ScriptStatus>("\"completed\"").unwrap(),
            ScriptStatus::Completed
        );
    }

    #[test]
    fn displays_lowercase() {
        assert_eq!(ScriptStatus::Draft.to_string(), "draft");
        assert_eq!(ScriptStatus::Completed.to_string(), "completed");
    }
}
