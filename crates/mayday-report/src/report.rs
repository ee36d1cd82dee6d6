//! The crash report a controller is constructed with.

use std::backtrace::Backtrace;
use std::fmt;
use std::panic::PanicHookInfo;

use serde::{Deserialize, Serialize};

use crate::protocol::{ErrorPayload, ErrorReportPayload};

/// Classification of the failure being reported.
///
/// Opaque to the controller: it is copied into the outbound payload as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportKind(String);

impl ReportKind {
    /// The application failed to bring up its main window.
    pub const LAUNCH_ERROR: &'static str = "launchError";
    /// An error escaped to the top of the host process.
    pub const UNCAUGHT_EXCEPTION: &'static str = "uncaughtException";

    pub fn new(kind: impl Into<String>) -> Self {
        Self(kind.into())
    }

    pub fn launch_error() -> Self {
        Self::new(Self::LAUNCH_ERROR)
    }

    pub fn uncaught_exception() -> Self {
        Self::new(Self::UNCAUGHT_EXCEPTION)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A detached, serializable copy of an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportedError {
    pub name: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
}

impl ReportedError {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
            stack: None,
        }
    }

    pub fn with_stack(mut self, stack: impl Into<String>) -> Self {
        self.stack = Some(stack.into());
        self
    }

    /// Capture an error value.
    ///
    /// The name is the error's short type name, the message its `Display`
    /// output, and the stack lists the `source()` chain when there is one.
    pub fn from_error<E: std::error::Error>(err: &E) -> Self {
        let mut causes = Vec::new();
        let mut source = err.source();
        while let Some(cause) = source {
            causes.push(format!("caused by: {cause}"));
            source = cause.source();
        }

        Self {
            name: short_type_name::<E>().to_string(),
            message: err.to_string(),
            stack: (!causes.is_empty()).then(|| causes.join("\n")),
        }
    }

    /// Capture a panic from inside a panic hook. Never panics itself.
    pub fn from_panic(info: &PanicHookInfo<'_>) -> Self {
        let message = if let Some(s) = info.payload().downcast_ref::<&str>() {
            (*s).to_string()
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "unknown panic payload".to_string()
        };

        let mut stack = String::new();
        if let Some(loc) = info.location() {
            stack.push_str(&format!("at {}:{}:{}\n", loc.file(), loc.line(), loc.column()));
        }
        stack.push_str(&Backtrace::force_capture().to_string());

        Self {
            name: "panic".to_string(),
            message,
            stack: Some(stack),
        }
    }
}

impl<E: std::error::Error> From<&E> for ReportedError {
    fn from(err: &E) -> Self {
        Self::from_error(err)
    }
}

/// Last path segment of a type name, without generic arguments.
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Immutable input of one crash window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrashReport {
    kind: ReportKind,
    error: ReportedError,
}

impl CrashReport {
    pub fn new(kind: ReportKind, error: ReportedError) -> Self {
        Self { kind, error }
    }

    pub fn kind(&self) -> &ReportKind {
        &self.kind
    }

    pub fn error(&self) -> &ReportedError {
        &self.error
    }

    /// Build the outbound payload by copying the three error fields.
    pub fn to_payload(&self) -> ErrorReportPayload {
        ErrorReportPayload {
            kind: self.kind.clone(),
            error: ErrorPayload {
                stack: self.error.stack.clone(),
                message: self.error.message.clone(),
                name: self.error.name.clone(),
            },
        }
    }
}
