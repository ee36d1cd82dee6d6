//! MaydayApp struct definition and constructor.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::process::ExitCode;
use std::rc::Rc;
use std::time::Instant;

use mayday_config::MaydayConfig;
use mayday_report::{CrashReport, CrashReporter, LoadFailure, Surface};
use mayday_webview::WebViewManager;
use winit::window::WindowId;

use super::init::content_provider;
use super::process::ProcessRelauncher;
use super::surface::WrySurface;

/// Controller notifications, queued by observers and handled once the
/// controller call that raised them has returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Notice {
    Ready,
    LoadFailed(LoadFailure),
    Closed,
}

pub(super) type NoticeQueue = Rc<RefCell<VecDeque<Notice>>>;

/// Top-level application state, generic over the crash window surface.
pub struct MaydayApp<S: Surface = WrySurface> {
    pub(super) config: MaydayConfig,
    pub(super) report: CrashReport,
    pub(super) diagnostic: bool,

    // Crash window
    pub(super) manager: WebViewManager,
    pub(super) reporter: Option<CrashReporter<S>>,
    pub(super) window_id: Option<WindowId>,
    pub(super) notices: NoticeQueue,

    pub(super) process: ProcessRelauncher,

    pub(super) launched: bool,
    pub(super) should_exit: bool,
    pub(super) exit_status: u8,
    pub(super) last_poll: Instant,
}

impl<S: Surface> MaydayApp<S> {
    pub fn new(config: MaydayConfig, report: CrashReport, diagnostic: bool) -> Self {
        let manager = WebViewManager::new(content_provider(&config.content));
        let process = ProcessRelauncher::from_config(&config.lifecycle);
        Self {
            config,
            report,
            diagnostic,
            manager,
            reporter: None,
            window_id: None,
            notices: Rc::new(RefCell::new(VecDeque::new())),
            process,
            launched: false,
            should_exit: false,
            exit_status: 0,
            last_poll: Instant::now(),
        }
    }

    /// Process exit status once the event loop has returned.
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status)
    }
}
