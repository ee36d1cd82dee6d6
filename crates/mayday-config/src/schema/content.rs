//! Crash page content location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Entry document of the bundled crash page.
pub const DEFAULT_ENTRY: &str = "mayday://localhost/crash/index.html";

/// Where the crash page is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// URL of the entry document.
    pub entry: String,
    /// On-disk root served under `mayday://localhost/`. The bundled crash
    /// page is served from memory when this is unset or lacks the file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            entry: DEFAULT_ENTRY.into(),
            base_dir: None,
        }
    }
}
