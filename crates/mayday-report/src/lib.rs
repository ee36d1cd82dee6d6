//! Crash report window controller.
//!
//! Coordinates the handshake between the host process that owns a crash
//! window and the web content rendered inside it:
//! - the content must finish loading AND announce `content-ready`
//!   before the `error-report` is sent, exactly once
//! - observers are told `ready` exactly once, regardless of signal order
//! - a failed content load is surfaced to the owner (or, in diagnostic
//!   mode, revealed with a debugging view)
//! - a quit request from the content becomes a [`LifecycleAction`]
//!
//! The windowing toolkit and the owning process are collaborators behind
//! the [`Surface`], [`SurfaceFactory`] and [`ProcessLifecycle`] traits.

pub mod controller;
mod handshake;
pub mod lifecycle;
pub mod observers;
pub mod protocol;
pub mod report;
pub mod surface;

pub use controller::{CrashReporter, ReporterSettings};
pub use lifecycle::{LifecycleAction, ProcessLifecycle};
pub use observers::Subscription;
pub use protocol::{ErrorPayload, ErrorReportPayload, InboundMessage, OutboundMessage};
pub use report::{CrashReport, ReportKind, ReportedError};
pub use surface::{
    ContentLocation, LoadFailure, Surface, SurfaceEvent, SurfaceEventKind, SurfaceFactory,
    SurfaceOptions, TitleBarStyle, MIN_HEIGHT, MIN_WIDTH,
};
