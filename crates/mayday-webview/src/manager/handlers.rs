use mayday_common::SurfaceId;
use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::{push, EventSink, WebViewManager};

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// Allowed URL prefixes for webview navigation.
///
/// Only these origins are permitted. Everything else is blocked.
/// - `mayday://`: custom protocol for bundled crash page assets
/// - `about:blank`: default empty page (inline HTML)
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "mayday://",
    // WebView2 rewrites custom protocols on Windows:
    // mayday://localhost/… → http://mayday.localhost/…
    "http://mayday.localhost",
    "about:blank",
];

/// Check whether a URL is allowed by the navigation allowlist.
pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            // Validate that the IPC body is valid JSON before forwarding
            if serde_json::from_str::<serde_json::Value>(&body).is_err() {
                warn!(
                    surface = %surface,
                    body_len = body.len(),
                    "IPC message rejected: invalid JSON"
                );
                return;
            }

            debug!(surface = %surface, body_len = body.len(), "IPC message from JS");
            push(&events, WebViewEvent::IpcMessage { surface, body });
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
        surface: SurfaceId,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(surface = %surface, ?state, url = %url, "page load");
            push(&events, WebViewEvent::PageLoad { surface, state, url });
        })
    }

    pub(super) fn attach_navigation_handler(
        builder: WebViewBuilder<'_>,
        surface: SurfaceId,
    ) -> WebViewBuilder<'_> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(
                    surface = %surface,
                    url = %url,
                    "navigation blocked: URL not in allowlist"
                );
                return false;
            }
            debug!(surface = %surface, url = %url, "navigation allowed");
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================
