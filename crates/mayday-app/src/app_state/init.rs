//! Crash window creation and controller wiring.

use std::rc::Rc;

use mayday_config::schema::ContentConfig;
use mayday_config::MaydayConfig;
use mayday_common::ReportError;
use mayday_report::{ContentLocation, CrashReporter, ReporterSettings, Surface};
use mayday_webview::ContentProvider;
use winit::event_loop::ActiveEventLoop;

use super::core::{MaydayApp, Notice, NoticeQueue};
use super::surface::WrySurfaceFactory;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Request path of the bundled crash page.
pub(super) const CRASH_PAGE_PATH: &str = "crash/index.html";

const CRASH_PAGE: &str = include_str!("../../assets/crash/index.html");

// =============================================================================
// SETUP
// =============================================================================

/// Serve `base_dir` when configured, with the bundled page filling in for
/// a missing `crash/index.html`.
pub(super) fn content_provider(config: &ContentConfig) -> ContentProvider {
    let mut provider = match &config.base_dir {
        Some(dir) => ContentProvider::new(dir),
        None => ContentProvider::in_memory(),
    };
    if provider.resolve(CRASH_PAGE_PATH).is_none() {
        provider.add_override(CRASH_PAGE_PATH, "text/html", CRASH_PAGE.as_bytes());
    }
    provider
}

pub(super) fn reporter_settings(config: &MaydayConfig, diagnostic: bool) -> ReporterSettings {
    let mut settings = ReporterSettings::new(ContentLocation::Url(config.content.entry.clone()));
    settings.diagnostic_mode = diagnostic;
    settings.title = config.window.title.clone();
    settings.size = config.window.size();
    settings.background = config.window.background_color();
    settings
}

pub(super) fn observe<S: Surface>(reporter: &mut CrashReporter<S>, notices: &NoticeQueue) {
    let queue = Rc::clone(notices);
    reporter.on_ready(move || queue.borrow_mut().push_back(Notice::Ready));

    let queue = Rc::clone(notices);
    reporter.on_load_failed(move |failure| {
        queue
            .borrow_mut()
            .push_back(Notice::LoadFailed(failure.clone()))
    });

    let queue = Rc::clone(notices);
    reporter.on_closed(move || queue.borrow_mut().push_back(Notice::Closed));
}

// =============================================================================
// LAUNCH
// =============================================================================

impl MaydayApp {
    /// Create the hidden crash window and start loading its content.
    pub(super) fn launch(&mut self, event_loop: &ActiveEventLoop) -> Result<(), ReportError> {
        let settings = reporter_settings(&self.config, self.diagnostic);
        let mut factory = WrySurfaceFactory::new(event_loop, &self.manager);
        let mut reporter = CrashReporter::new(&mut factory, self.report.clone(), settings)?;
        self.window_id = factory.last_window();

        observe(&mut reporter, &self.notices);

        if let Err(e) = reporter.start() {
            reporter.destroy();
            return Err(e);
        }

        tracing::info!(surface = %reporter.surface_id(), "crash window launched");
        self.reporter = Some(reporter);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mayday_common::{Color, Size};

    use super::*;

    #[test]
    fn bundled_page_is_served_without_base_dir() {
        let provider = content_provider(&ContentConfig::default());
        let (mime, data) = provider.resolve(CRASH_PAGE_PATH).unwrap();
        assert_eq!(mime.as_ref(), "text/html");
        assert_eq!(data.as_ref(), CRASH_PAGE.as_bytes());
    }

    #[test]
    fn base_dir_page_wins_over_bundled_page() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("crash")).unwrap();
        std::fs::write(dir.path().join(CRASH_PAGE_PATH), "<p>custom</p>").unwrap();

        let config = ContentConfig {
            base_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let provider = content_provider(&config);
        let (_, data) = provider.resolve(CRASH_PAGE_PATH).unwrap();
        assert_eq!(data.as_ref(), b"<p>custom</p>");
    }

    #[test]
    fn base_dir_without_page_falls_back_to_bundled() {
        let dir = tempfile::tempdir().unwrap();
        let config = ContentConfig {
            base_dir: Some(PathBuf::from(dir.path())),
            ..Default::default()
        };
        let provider = content_provider(&config);
        assert!(provider.resolve(CRASH_PAGE_PATH).is_some());
    }

    #[test]
    fn bundled_page_speaks_the_protocol() {
        assert!(CRASH_PAGE.contains("content-ready"));
        assert!(CRASH_PAGE.contains("content-quit-requested"));
        assert!(CRASH_PAGE.contains("error-report"));
    }

    #[test]
    fn settings_follow_config() {
        let mut config = MaydayConfig::default();
        config.window.title = "It broke".into();
        config.window.width = 900;
        config.window.background = "#000000".into();

        let settings = reporter_settings(&config, true);
        assert!(settings.diagnostic_mode);
        assert_eq!(settings.title, "It broke");
        assert_eq!(settings.size, Size::new(900, 500));
        assert_eq!(settings.background, Color::from_rgba(0, 0, 0, 255));
        assert_eq!(
            settings.content,
            ContentLocation::Url("mayday://localhost/crash/index.html".into())
        );
    }
}
