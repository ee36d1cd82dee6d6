use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one content surface.
///
/// Every lifecycle event and inbound message carries the id of the surface it
/// came from, so a controller only reacts to its own window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SurfaceId(uuid::Uuid);

impl SurfaceId {
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
