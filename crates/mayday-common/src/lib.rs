pub mod errors;
pub mod id;
pub mod types;

pub use errors::{ConfigError, MaydayError, ReportError, SurfaceError};
pub use id::SurfaceId;
pub use types::{Color, Platform, Size};

pub type Result<T> = std::result::Result<T, MaydayError>;
