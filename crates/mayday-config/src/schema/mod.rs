//! Configuration schema types for Mayday.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with sensible defaults.

mod content;
mod diagnostics;
mod lifecycle;
mod logging;
mod window;

pub use content::*;
pub use diagnostics::*;
pub use lifecycle::*;
pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Mayday.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MaydayConfig {
    pub diagnostics: DiagnosticsConfig,
    pub window: WindowConfig,
    pub content: ContentConfig,
    pub lifecycle: LifecycleConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
