//! WebView event types.

use mayday_common::SurfaceId;
use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    /// Navigation has started.
    Started,
    /// Page has fully loaded (DOMContentLoaded + resources).
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by a WebView instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebViewEvent {
    /// Page load state changed. Carries the URL.
    PageLoad {
        surface: SurfaceId,
        state: PageLoadState,
        url: String,
    },
    /// The main document could not be served.
    LoadFailed {
        surface: SurfaceId,
        url: String,
        reason: String,
    },
    /// An IPC message was received from JavaScript.
    IpcMessage { surface: SurfaceId, body: String },
    /// WebView was closed / destroyed.
    Closed { surface: SurfaceId },
}

impl WebViewEvent {
    /// The surface this event belongs to.
    pub fn surface(&self) -> SurfaceId {
        match self {
            Self::PageLoad { surface, .. }
            | Self::LoadFailed { surface, .. }
            | Self::IpcMessage { surface, .. }
            | Self::Closed { surface } => *surface,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_load_state_from_wry() {
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Started),
            PageLoadState::Started
        );
        assert_eq!(
            PageLoadState::from(wry::PageLoadEvent::Finished),
            PageLoadState::Finished
        );
    }

    #[test]
    fn every_event_reports_its_surface() {
        let id = SurfaceId::new();
        let events = [
            WebViewEvent::PageLoad {
                surface: id,
                state: PageLoadState::Finished,
                url: "mayday://localhost/crash/index.html".into(),
            },
            WebViewEvent::LoadFailed {
                surface: id,
                url: String::new(),
                reason: "404".into(),
            },
            WebViewEvent::IpcMessage {
                surface: id,
                body: "{}".into(),
            },
            WebViewEvent::Closed { surface: id },
        ];
        for event in &events {
            assert_eq!(event.surface(), id);
        }
    }
}
