//! Messages exchanged between the controller and the crash window content.
//!
//! Two inbound kinds (content -> host) and one outbound kind
//! (host -> content). Inbound payloads are ignored.

use serde::{Deserialize, Serialize};

use crate::report::ReportKind;

/// Content is prepared to receive the error report.
pub const CONTENT_READY: &str = "content-ready";
/// Content asks the host process to quit.
pub const CONTENT_QUIT_REQUESTED: &str = "content-quit-requested";
/// Host delivers the error report to the content.
pub const ERROR_REPORT: &str = "error-report";

/// A message the content sent to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundMessage {
    ContentReady,
    QuitRequested,
}

impl InboundMessage {
    /// Map a wire message kind to a known inbound message.
    pub fn from_kind(kind: &str) -> Option<Self> {
        match kind {
            CONTENT_READY => Some(Self::ContentReady),
            CONTENT_QUIT_REQUESTED => Some(Self::QuitRequested),
            _ => None,
        }
    }

    pub fn kind(self) -> &'static str {
        match self {
            Self::ContentReady => CONTENT_READY,
            Self::QuitRequested => CONTENT_QUIT_REQUESTED,
        }
    }
}

/// Error fields as they travel over the channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    pub message: String,
    pub name: String,
}

/// Body of the `error-report` message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorReportPayload {
    #[serde(rename = "type")]
    pub kind: ReportKind,
    pub error: ErrorPayload,
}

/// A message the host sends to the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundMessage {
    ErrorReport(ErrorReportPayload),
}

impl OutboundMessage {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ErrorReport(_) => ERROR_REPORT,
        }
    }

    /// JSON payload to hand to the channel.
    pub fn payload(&self) -> Result<serde_json::Value, serde_json::Error> {
        match self {
            Self::ErrorReport(report) => serde_json::to_value(report),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inbound_kinds_are_recognized() {
        assert_eq!(
            InboundMessage::from_kind("content-ready"),
            Some(InboundMessage::ContentReady)
        );
        assert_eq!(
            InboundMessage::from_kind("content-quit-requested"),
            Some(InboundMessage::QuitRequested)
        );
    }

    #[test]
    fn inbound_kinds_are_case_sensitive() {
        assert_eq!(InboundMessage::from_kind("CONTENT-READY"), None);
        assert_eq!(InboundMessage::from_kind("error-report"), None);
        assert_eq!(InboundMessage::from_kind(""), None);
    }

    #[test]
    fn inbound_kind_round_trips() {
        for msg in [InboundMessage::ContentReady, InboundMessage::QuitRequested] {
            assert_eq!(InboundMessage::from_kind(msg.kind()), Some(msg));
        }
    }

    #[test]
    fn error_report_wire_shape() {
        let msg = OutboundMessage::ErrorReport(ErrorReportPayload {
            kind: ReportKind::launch_error(),
            error: ErrorPayload {
                stack: Some("at f()".into()),
                message: "boom".into(),
                name: "Error".into(),
            },
        });
        assert_eq!(msg.kind(), "error-report");
        assert_eq!(
            msg.payload().unwrap(),
            serde_json::json!({
                "type": "launchError",
                "error": { "stack": "at f()", "message": "boom", "name": "Error" }
            })
        );
    }

    #[test]
    fn missing_stack_is_omitted() {
        let msg = OutboundMessage::ErrorReport(ErrorReportPayload {
            kind: ReportKind::uncaught_exception(),
            error: ErrorPayload {
                stack: None,
                message: "m".into(),
                name: "n".into(),
            },
        });
        let value = msg.payload().unwrap();
        assert!(value["error"].get("stack").is_none());
    }
}
