//! Process lifecycle settings: what happens on quit and on load failure.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Response to a crash page that could not be loaded (production mode).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum LoadFailurePolicy {
    /// Exit with a non-zero status.
    #[default]
    Quit,
    /// Keep running with the window hidden until it is closed.
    StayHidden,
}

/// Relaunch and failure handling.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LifecycleConfig {
    pub on_load_failure: LoadFailurePolicy,
    /// The crashed application, started again on quit. Without one,
    /// quitting only terminates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relaunch_program: Option<PathBuf>,
    /// Arguments for the relaunched program.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub relaunch_args: Vec<String>,
}
