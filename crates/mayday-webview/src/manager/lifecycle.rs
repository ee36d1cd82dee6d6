use std::borrow::Cow;
use std::sync::Arc;

use mayday_common::SurfaceId;
use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, SCHEME};
use crate::events::WebViewEvent;
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::{push, EventSink, WebViewManager};

impl WebViewManager {
    /// Create a new WebView filling the given window.
    ///
    /// The `window` must implement `raw_window_handle::HasWindowHandle`.
    /// Every event the WebView produces is tagged with `surface_id`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        surface_id: SurfaceId,
        window: &W,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = Arc::clone(&self.events);

        let mut builder = WebViewBuilder::new()
            .with_background_color(config.background.to_tuple())
            .with_devtools(config.devtools)
            .with_hotkeys_zoom(config.zoom_hotkeys)
            .with_autoplay(config.autoplay)
            .with_back_forward_navigation_gestures(false)
            .with_focused(false);

        // Initialization script for IPC bridge
        builder = builder.with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&events), surface_id);
        builder = Self::attach_page_load_handler(builder, Arc::clone(&events), surface_id);
        builder = Self::attach_navigation_handler(builder, surface_id);

        // Custom protocol for bundled content
        let entry = config.url.as_deref().map(|url| request_path(url).to_string());
        builder = self.attach_custom_protocol(builder, Arc::clone(&events), surface_id, entry);

        let initial_url = config.initial_url().to_string();
        if let Some(url) = &config.url {
            builder = builder.with_url(url);
        } else if let Some(html) = &config.html {
            builder = builder.with_html(html);
        } else {
            builder = builder.with_html("<html><body></body></html>");
        }

        let webview = builder.build(window)?;

        debug!(surface = %surface_id, url = %initial_url, "WebView created");

        Ok(WebViewHandle {
            webview,
            surface_id,
        })
    }

    fn attach_custom_protocol<'a>(
        &self,
        builder: WebViewBuilder<'a>,
        events: EventSink,
        surface_id: SurfaceId,
        entry: Option<String>,
    ) -> WebViewBuilder<'a> {
        let cp = Arc::clone(&self.content_provider);
        builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = request_path(&uri);

            match cp.resolve(path) {
                Some((mime, data)) => respond(200, mime.as_ref(), data.into_owned()),
                None => {
                    warn!(surface = %surface_id, path = %path, "custom protocol: asset not found");
                    if entry.as_deref() == Some(path) {
                        push(
                            &events,
                            WebViewEvent::LoadFailed {
                                surface: surface_id,
                                url: uri.clone(),
                                reason: "document not found".to_string(),
                            },
                        );
                    }
                    respond(404, "text/plain", b"Not Found".to_vec())
                }
            }
        })
    }
}

fn respond(status: u16, mime: &str, body: Vec<u8>) -> Response<Cow<'static, [u8]>> {
    Response::builder()
        .status(status)
        .header("Content-Type", mime)
        .header("Access-Control-Allow-Origin", "mayday://localhost")
        .body(Cow::from(body))
        .unwrap_or_else(|_| Response::new(Cow::Borrowed(&[])))
}
