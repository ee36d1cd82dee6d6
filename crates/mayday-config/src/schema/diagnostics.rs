//! Diagnostic mode settings.

use serde::{Deserialize, Serialize};

/// Developer-facing recovery instead of production failure reporting.
///
/// When enabled, a crash page that fails to load is shown with devtools
/// open, and quitting from the crash page does not relaunch.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    pub enabled: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: cfg!(debug_assertions),
        }
    }
}
