//! Crash window configuration types.

use mayday_common::{Color, Size};
use serde::{Deserialize, Serialize};

/// Crash window appearance.
///
/// The window never opens smaller than 600x500 regardless of what is
/// configured here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Requested width in logical pixels (minimum 600).
    pub width: u32,
    /// Requested height in logical pixels (minimum 500).
    pub height: u32,
    /// `#RRGGBB` or `#RRGGBBAA`, painted before the page renders.
    pub background: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Crash Report".into(),
            width: 600,
            height: 500,
            background: "#ffffff".into(),
        }
    }
}

impl WindowConfig {
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Parsed background, falling back to white for malformed values.
    pub fn background_color(&self) -> Color {
        Color::from_hex(&self.background).unwrap_or(Color::WHITE)
    }
}

// =============================================================================
// Tests
// =============================================================================
