use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures reported by a content surface collaborator.
#[derive(Debug, thiserror::Error)]
pub enum SurfaceError {
    #[error("surface creation failed: {0}")]
    CreateFailed(String),

    #[error("content load failed: {0}")]
    LoadFailed(String),

    #[error("script evaluation failed: {0}")]
    ScriptFailed(String),

    #[error("message serialization failed: {0}")]
    Serialization(String),

    #[error("surface already destroyed")]
    Destroyed,
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("crash window could not be created: {0}")]
    Surface(#[from] SurfaceError),

    #[error("crash reporter already started")]
    AlreadyStarted,

    #[error("crash reporter surface has been destroyed")]
    Destroyed,
}

#[derive(Debug, thiserror::Error)]
pub enum MaydayError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Surface(#[from] SurfaceError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid report input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("window.width = 10".into());
        assert_eq!(err.to_string(), "config validation error: window.width = 10");
    }

    #[test]
    fn surface_error_display() {
        let err = SurfaceError::CreateFailed("no display".into());
        assert_eq!(err.to_string(), "surface creation failed: no display");

        let err = SurfaceError::Destroyed;
        assert_eq!(err.to_string(), "surface already destroyed");
    }

    #[test]
    fn report_error_from_surface() {
        let err: ReportError = SurfaceError::CreateFailed("gtk init".into()).into();
        assert!(matches!(err, ReportError::Surface(_)));
        assert!(err.to_string().contains("gtk init"));
    }

    #[test]
    fn mayday_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: MaydayError = config_err.into();
        assert!(matches!(err, MaydayError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn mayday_error_from_report() {
        let err: MaydayError = ReportError::AlreadyStarted.into();
        assert!(matches!(err, MaydayError::Report(_)));
        assert_eq!(err.to_string(), "crash reporter already started");
    }

    #[test]
    fn mayday_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: MaydayError = io_err.into();
        assert!(matches!(err, MaydayError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn mayday_error_other_variants() {
        let err = MaydayError::InvalidInput("missing --message".into());
        assert_eq!(err.to_string(), "invalid report input: missing --message");

        let err = MaydayError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
