//! `Surface` implementation backed by a winit window and a wry WebView.

use std::sync::Arc;

use mayday_common::{SurfaceError, SurfaceId};
use mayday_report::{
    ContentLocation, OutboundMessage, Surface, SurfaceFactory, SurfaceOptions, TitleBarStyle,
};
use mayday_webview::{WebViewConfig, WebViewHandle, WebViewManager};
use winit::dpi::LogicalSize;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowAttributes, WindowId};

/// A crash window. The WebView is built when content is first loaded.
pub struct WrySurface {
    id: SurfaceId,
    window: Arc<Window>,
    manager: WebViewManager,
    webview_config: WebViewConfig,
    webview: Option<WebViewHandle>,
}

impl WrySurface {
    fn webview(&self) -> Result<&WebViewHandle, SurfaceError> {
        self.webview
            .as_ref()
            .ok_or_else(|| SurfaceError::ScriptFailed("no content loaded".into()))
    }
}

impl Surface for WrySurface {
    fn id(&self) -> SurfaceId {
        self.id
    }

    fn load_content(&mut self, location: &ContentLocation) -> Result<(), SurfaceError> {
        let load_failed = |e: wry::Error| SurfaceError::LoadFailed(e.to_string());

        if let Some(handle) = &self.webview {
            return match location {
                ContentLocation::Url(url) => handle.load_url(url).map_err(load_failed),
                ContentLocation::Html(html) => handle.load_html(html).map_err(load_failed),
            };
        }

        let mut config = self.webview_config.clone();
        match location {
            ContentLocation::Url(url) => config.url = Some(url.clone()),
            ContentLocation::Html(html) => config.html = Some(html.clone()),
        }
        let handle = self
            .manager
            .create(self.id, self.window.as_ref(), config)
            .map_err(load_failed)?;
        self.webview = Some(handle);
        Ok(())
    }

    fn send(&mut self, message: &OutboundMessage) -> Result<(), SurfaceError> {
        let payload = message
            .payload()
            .map_err(|e| SurfaceError::Serialization(e.to_string()))?;
        self.webview()?
            .send_ipc(message.kind(), &payload)
            .map_err(|e| SurfaceError::ScriptFailed(e.to_string()))
    }

    fn show(&mut self) -> Result<(), SurfaceError> {
        self.window.set_visible(true);
        Ok(())
    }

    fn focus(&mut self) -> Result<(), SurfaceError> {
        self.window.focus_window();
        match &self.webview {
            Some(handle) => handle
                .focus()
                .map_err(|e| SurfaceError::ScriptFailed(e.to_string())),
            None => Ok(()),
        }
    }

    fn disable_zoom(&mut self) -> Result<(), SurfaceError> {
        self.webview()?
            .zoom(1.0)
            .map_err(|e| SurfaceError::ScriptFailed(e.to_string()))
    }

    fn open_diagnostic_view(&mut self) {
        match &self.webview {
            Some(handle) => handle.open_devtools(),
            None => tracing::warn!(surface = %self.id, "no WebView to open devtools on"),
        }
    }

    fn destroy(self) {
        tracing::debug!(surface = %self.id, "releasing WebView and window");
        // WebView before the window that hosts it.
        drop(self.webview);
        drop(self.window);
    }
}

/// Creates crash windows on the running event loop.
pub struct WrySurfaceFactory<'a> {
    event_loop: &'a ActiveEventLoop,
    manager: &'a WebViewManager,
    last_window: Option<WindowId>,
}

impl<'a> WrySurfaceFactory<'a> {
    pub fn new(event_loop: &'a ActiveEventLoop, manager: &'a WebViewManager) -> Self {
        Self {
            event_loop,
            manager,
            last_window: None,
        }
    }

    /// The winit window of the most recently created surface.
    pub fn last_window(&self) -> Option<WindowId> {
        self.last_window
    }
}

impl SurfaceFactory for WrySurfaceFactory<'_> {
    type Surface = WrySurface;

    fn create(&mut self, options: &SurfaceOptions) -> Result<WrySurface, SurfaceError> {
        let window = self
            .event_loop
            .create_window(window_attributes(options))
            .map_err(|e| SurfaceError::CreateFailed(e.to_string()))?;
        let window = Arc::new(window);
        self.last_window = Some(window.id());

        Ok(WrySurface {
            id: SurfaceId::new(),
            window,
            manager: self.manager.clone(),
            webview_config: webview_config(options),
            webview: None,
        })
    }
}

pub(super) fn window_attributes(options: &SurfaceOptions) -> WindowAttributes {
    let attrs = Window::default_attributes()
        .with_title(options.title.clone())
        .with_inner_size(LogicalSize::new(
            f64::from(options.size.width),
            f64::from(options.size.height),
        ))
        .with_min_inner_size(LogicalSize::new(
            f64::from(options.min_size.width),
            f64::from(options.min_size.height),
        ))
        .with_visible(options.visible);

    match options.title_bar {
        TitleBarStyle::Default => attrs,
        TitleBarStyle::Frameless => attrs.with_decorations(false),
        TitleBarStyle::HiddenInset => {
            // macOS: transparent titlebar with content extending behind traffic lights
            #[cfg(target_os = "macos")]
            let attrs = {
                use winit::platform::macos::WindowAttributesExtMacOS;
                attrs
                    .with_titlebar_transparent(true)
                    .with_title_hidden(true)
                    .with_fullsize_content_view(true)
            };
            attrs
        }
    }
}

pub(super) fn webview_config(options: &SurfaceOptions) -> WebViewConfig {
    WebViewConfig {
        background: options.background,
        devtools: options.diagnostics,
        zoom_hotkeys: false,
        autoplay: false,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use mayday_common::{Color, Platform, Size};

    use super::*;

    fn options(platform: Platform, diagnostics: bool) -> SurfaceOptions {
        SurfaceOptions::crash_window(
            "Crash Report",
            Size::new(640, 480),
            Color::from_rgba(0x1e, 0x1e, 0x2e, 255),
            platform,
            diagnostics,
        )
    }

    #[test]
    fn window_starts_hidden_at_clamped_size() {
        let attrs = window_attributes(&options(Platform::Other, false));
        assert!(!attrs.visible);
        assert_eq!(attrs.title, "Crash Report");
        assert_eq!(
            attrs.inner_size,
            Some(LogicalSize::new(640.0, 500.0).into())
        );
        assert_eq!(
            attrs.min_inner_size,
            Some(LogicalSize::new(600.0, 500.0).into())
        );
        assert!(attrs.decorations);
    }

    #[test]
    fn windows_crash_window_is_frameless() {
        let attrs = window_attributes(&options(Platform::Windows, false));
        assert!(!attrs.decorations);
    }

    #[test]
    fn webview_devtools_follow_diagnostics() {
        assert!(!webview_config(&options(Platform::Other, false)).devtools);
        let config = webview_config(&options(Platform::Other, true));
        assert!(config.devtools);
        assert!(!config.zoom_hotkeys);
        assert_eq!(config.background, Color::from_rgba(0x1e, 0x1e, 0x2e, 255));
    }
}
