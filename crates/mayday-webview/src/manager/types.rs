use mayday_common::Color;

/// Configuration for creating a new WebView instance.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL to load (mutually exclusive with `html`).
    pub url: Option<String>,
    /// Initial HTML content to render (mutually exclusive with `url`).
    pub html: Option<String>,
    /// Painted before the first frame of content.
    pub background: Color,
    /// Whether to enable dev tools.
    pub devtools: bool,
    /// Whether Ctrl/Cmd +/- zoom shortcuts are honoured.
    pub zoom_hotkeys: bool,
    /// Custom user agent string.
    pub user_agent: Option<String>,
    /// Whether to enable autoplay for media.
    pub autoplay: bool,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: None,
            html: None,
            background: Color::WHITE,
            devtools: false,
            zoom_hotkeys: false,
            user_agent: Some(format!("Mayday/{}", env!("CARGO_PKG_VERSION"))),
            autoplay: false,
        }
    }
}

impl WebViewConfig {
    /// The URL the WebView starts on.
    pub fn initial_url(&self) -> &str {
        match (&self.url, &self.html) {
            (Some(url), _) => url,
            _ => "about:blank",
        }
    }
}
