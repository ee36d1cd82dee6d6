//! Translation of WebView events into crash window surface events.

use mayday_report::{InboundMessage, LoadFailure, SurfaceEvent, SurfaceEventKind};
use mayday_webview::{IpcMessage, PageLoadState, WebViewEvent};

/// Map a raw WebView event onto the controller's vocabulary.
///
/// IPC messages whose kind the crash window does not understand are
/// dropped here.
pub(super) fn surface_event(event: &WebViewEvent) -> Option<SurfaceEvent> {
    let kind = match event {
        WebViewEvent::PageLoad {
            state: PageLoadState::Started,
            ..
        } => SurfaceEventKind::StartLoading,
        WebViewEvent::PageLoad {
            state: PageLoadState::Finished,
            ..
        } => SurfaceEventKind::FinishLoading,
        WebViewEvent::LoadFailed { url, reason, .. } => SurfaceEventKind::FailLoad(LoadFailure {
            url: url.clone(),
            reason: reason.clone(),
        }),
        WebViewEvent::IpcMessage { surface, body } => {
            let Some(msg) = IpcMessage::from_json(body) else {
                tracing::warn!(
                    surface = %surface,
                    body_len = body.len(),
                    "IPC message rejected: failed to parse"
                );
                return None;
            };
            let Some(inbound) = InboundMessage::from_kind(&msg.kind) else {
                tracing::warn!(
                    surface = %surface,
                    kind = %msg.kind,
                    "IPC message rejected: unknown kind"
                );
                return None;
            };
            tracing::debug!(surface = %surface, kind = %msg.kind, "IPC message dispatched");
            SurfaceEventKind::Message(inbound)
        }
        WebViewEvent::Closed { .. } => SurfaceEventKind::Closed,
    };
    Some(SurfaceEvent::new(event.surface(), kind))
}
