use serde::{Deserialize, Serialize};

/// Logical window size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum; used to clamp a requested size to a floor.
    pub fn at_least(self, floor: Size) -> Self {
        Self {
            width: self.width.max(floor.width),
            height: self.height.max(floor.height),
        }
    }
}

/// Host platform, as far as window chrome is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Darwin,
    Windows,
    Other,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(target_os = "macos") {
            Self::Darwin
        } else if cfg!(target_os = "windows") {
            Self::Windows
        } else {
            Self::Other
        }
    }

    pub fn is_darwin(self) -> bool {
        self == Self::Darwin
    }

    pub fn is_windows(self) -> bool {
        self == Self::Windows
    }
}
