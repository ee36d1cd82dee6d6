use mayday_common::SurfaceId;
use tracing::debug;
use wry::WebView;

/// Handle to a managed WebView instance. Provides methods to interact
/// with the underlying WebView (navigate, send IPC, zoom, etc.).
pub struct WebViewHandle {
    /// The underlying wry WebView.
    pub(super) webview: WebView,
    /// The crash window this WebView fills.
    pub(super) surface_id: SurfaceId,
}

impl WebViewHandle {
    /// Navigate to a URL.
    pub fn load_url(&self, url: &str) -> Result<(), wry::Error> {
        debug!(surface = %self.surface_id, url = %url, "WebView navigating");
        self.webview.load_url(url)
    }

    /// Load raw HTML content.
    pub fn load_html(&self, html: &str) -> Result<(), wry::Error> {
        debug!(surface = %self.surface_id, bytes = html.len(), "WebView loading inline HTML");
        self.webview.load_html(html)
    }

    /// Send a typed IPC message to JavaScript.
    pub fn send_ipc(&self, kind: &str, payload: &serde_json::Value) -> Result<(), wry::Error> {
        let script = crate::ipc::js_dispatch_message(kind, payload);
        self.webview.evaluate_script(&script)
    }

    /// Focus the WebView.
    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// Open devtools (if enabled).
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    /// Set zoom level.
    pub fn zoom(&self, scale: f64) -> Result<(), wry::Error> {
        self.webview.zoom(scale)
    }
}
