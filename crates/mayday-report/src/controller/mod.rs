//! The crash report controller.
//!
//! `CrashReporter` owns one crash window for one report. It creates the
//! surface at construction, starts loading content on [`CrashReporter::start`],
//! and is then driven by [`CrashReporter::handle_event`] with whatever the
//! surface reports, in whatever order it reports it.

use mayday_common::{Color, Platform, ReportError, Size, SurfaceId};
use tracing::{debug, error, info, trace, warn};

use crate::handshake::{Effect, Handshake, Signal};
use crate::lifecycle::LifecycleAction;
use crate::observers::{Observers, Subscription};
use crate::protocol::{InboundMessage, OutboundMessage};
use crate::report::CrashReport;
use crate::surface::{
    ContentLocation, LoadFailure, Surface, SurfaceEvent, SurfaceEventKind, SurfaceFactory,
    SurfaceOptions, MIN_HEIGHT, MIN_WIDTH,
};


/// How a crash window is set up and how it reacts to failure.
#[derive(Debug, Clone)]
pub struct ReporterSettings {
    /// Developer-facing recovery instead of production failure reporting.
    pub diagnostic_mode: bool,
    pub platform: Platform,
    pub content: ContentLocation,
    pub title: String,
    pub size: Size,
    pub background: Color,
}

impl ReporterSettings {
    pub fn new(content: ContentLocation) -> Self {
        Self {
            diagnostic_mode: false,
            platform: Platform::current(),
            content,
            title: "Crash Report".to_string(),
            size: Size::new(MIN_WIDTH, MIN_HEIGHT),
            background: Color::WHITE,
        }
    }

    fn surface_options(&self) -> SurfaceOptions {
        SurfaceOptions::crash_window(
            self.title.clone(),
            self.size,
            self.background,
            self.platform,
            self.diagnostic_mode,
        )
    }
}

/// Controller for one crash window.
pub struct CrashReporter<S: Surface> {
    surface: Option<S>,
    surface_id: SurfaceId,
    report: CrashReport,
    settings: ReporterSettings,
    handshake: Handshake,
    started: bool,
    saw_start_loading: bool,
    ready: Observers<()>,
    load_failed: Observers<LoadFailure>,
    closed: Observers<()>,
}

impl<S: Surface> CrashReporter<S> {
    /// Create the (hidden) crash window. Content is not loaded yet.
    pub fn new<F>(
        factory: &mut F,
        report: CrashReport,
        settings: ReporterSettings,
    ) -> Result<Self, ReportError>
    where
        F: SurfaceFactory<Surface = S>,
    {
        let surface = factory.create(&settings.surface_options())?;
        let surface_id = surface.id();
        debug!(surface = %surface_id, kind = %report.kind(), "crash window created");

        Ok(Self {
            surface: Some(surface),
            surface_id,
            report,
            settings,
            handshake: Handshake::Initial,
            started: false,
            saw_start_loading: false,
            ready: Observers::new(),
            load_failed: Observers::new(),
            closed: Observers::new(),
        })
    }

    pub fn surface_id(&self) -> SurfaceId {
        self.surface_id
    }

    pub fn report(&self) -> &CrashReport {
        &self.report
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_destroyed(&self) -> bool {
        self.surface.is_none()
    }

    /// Arm the handshake and begin loading the content.
    ///
    /// Call exactly once; a second call returns
    /// [`ReportError::AlreadyStarted`] and changes nothing.
    pub fn start(&mut self) -> Result<(), ReportError> {
        if self.started {
            return Err(ReportError::AlreadyStarted);
        }
        let surface = self.surface.as_mut().ok_or(ReportError::Destroyed)?;

        self.started = true;
        info!(
            surface = %self.surface_id,
            content = self.settings.content.describe(),
            "loading crash report content"
        );
        surface.load_content(&self.settings.content)?;
        Ok(())
    }

    /// Feed one surface event into the controller.
    ///
    /// Events from other surfaces, events before `start()`, and events
    /// after `destroy()` are ignored (except `Closed`, which is always
    /// forwarded). Returns the lifecycle action the owner should apply
    /// when the content asked to quit.
    pub fn handle_event(&mut self, event: &SurfaceEvent) -> Option<LifecycleAction> {
        if event.surface != self.surface_id {
            trace!(
                surface = %self.surface_id,
                from = %event.surface,
                "ignoring event for another surface"
            );
            return None;
        }

        if event.kind == SurfaceEventKind::Closed {
            debug!(surface = %self.surface_id, "crash window closed");
            self.closed.emit(&());
            return None;
        }

        if !self.started || self.surface.is_none() {
            debug!(
                surface = %self.surface_id,
                event = ?event.kind,
                started = self.started,
                "ignoring event outside of the handshake"
            );
            return None;
        }

        match &event.kind {
            SurfaceEventKind::StartLoading => {
                if !self.saw_start_loading {
                    self.saw_start_loading = true;
                    debug!(surface = %self.surface_id, "crash report content started loading");
                }
                None
            }
            SurfaceEventKind::FinishLoading => {
                self.advance(Signal::ContentLoaded, None);
                self.apply_display_policy();
                None
            }
            SurfaceEventKind::FailLoad(failure) => {
                self.advance(Signal::LoadFailed, Some(failure));
                None
            }
            SurfaceEventKind::Message(InboundMessage::ContentReady) => {
                self.advance(Signal::ContentReady, None);
                None
            }
            SurfaceEventKind::Message(InboundMessage::QuitRequested) => {
                let action = LifecycleAction::for_quit_request(self.settings.diagnostic_mode);
                info!(surface = %self.surface_id, ?action, "crash window requested quit");
                Some(action)
            }
            SurfaceEventKind::Closed => None,
        }
    }

    /// Register for the one-time `ready` notification.
    pub fn on_ready(&mut self, callback: impl FnMut() + 'static) -> Subscription {
        let mut callback = callback;
        self.ready.subscribe(move |_| callback())
    }

    /// Register for content load failures (production mode only).
    pub fn on_load_failed(&mut self, callback: impl FnMut(&LoadFailure) + 'static) -> Subscription {
        self.load_failed.subscribe(callback)
    }

    /// Register for the surface's close notification.
    pub fn on_closed(&mut self, callback: impl FnMut() + 'static) {
        let mut callback = callback;
        // Not individually revocable.
        let _ = self.closed.subscribe(move |_| callback());
    }

    pub fn show(&mut self) -> Result<(), ReportError> {
        let surface = self.surface.as_mut().ok_or(ReportError::Destroyed)?;
        surface.show()?;
        Ok(())
    }

    pub fn focus(&mut self) -> Result<(), ReportError> {
        let surface = self.surface.as_mut().ok_or(ReportError::Destroyed)?;
        surface.focus()?;
        Ok(())
    }

    /// Release the surface now, whatever the handshake state. Idempotent.
    pub fn destroy(&mut self) {
        if let Some(surface) = self.surface.take() {
            info!(surface = %self.surface_id, state = ?self.handshake, "destroying crash window");
            surface.destroy();
        }
    }

    fn advance(&mut self, signal: Signal, failure: Option<&LoadFailure>) {
        let (next, effects) = self.handshake.advance(signal);
        if next != self.handshake {
            debug!(
                surface = %self.surface_id,
                from = ?self.handshake,
                to = ?next,
                loaded = next.content_loaded(),
                ready = next.content_ready(),
                "handshake advanced"
            );
        }
        self.handshake = next;

        for effect in effects {
            match effect {
                Effect::SendReport => self.send_report(),
                Effect::NotifyReady => {
                    info!(surface = %self.surface_id, "crash window ready");
                    self.ready.emit(&());
                }
                Effect::NotifyLoadFailed => {
                    if let Some(failure) = failure {
                        self.handle_load_failure(failure);
                    }
                }
            }
        }
    }

    /// Sends the report once; only reachable from the content-ready transition.
    fn send_report(&mut self) {
        let message = OutboundMessage::ErrorReport(self.report.to_payload());
        let Some(surface) = self.surface.as_mut() else {
            return;
        };

        match surface.send(&message) {
            Ok(()) => info!(
                surface = %self.surface_id,
                kind = %self.report.kind(),
                "error report sent"
            ),
            Err(e) => error!(
                surface = %self.surface_id,
                error = %e,
                "failed to send error report"
            ),
        }
    }

    fn apply_display_policy(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            if let Err(e) = surface.disable_zoom() {
                warn!(surface = %self.surface_id, error = %e, "failed to disable zoom");
            }
        }
    }

    fn handle_load_failure(&mut self, failure: &LoadFailure) {
        if self.settings.diagnostic_mode {
            warn!(
                surface = %self.surface_id,
                url = %failure.url,
                reason = %failure.reason,
                "crash report content failed to load, opening diagnostic view"
            );
            if let Some(surface) = self.surface.as_mut() {
                if let Err(e) = surface.show() {
                    warn!(surface = %self.surface_id, error = %e, "failed to show crash window");
                }
                surface.open_diagnostic_view();
            }
        } else {
            error!(
                surface = %self.surface_id,
                url = %failure.url,
                reason = %failure.reason,
                "crash report content failed to load"
            );
            self.load_failed.emit(failure);
        }
    }
}
