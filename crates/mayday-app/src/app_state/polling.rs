//! WebView event polling and controller notice handling.

use std::time::{Duration, Instant};

use mayday_config::schema::LoadFailurePolicy;
use mayday_report::Surface;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use super::core::{MaydayApp, Notice};
use super::dispatch::surface_event;

/// How often the WebView event sink is drained.
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);

impl<S: Surface> MaydayApp<S> {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
        }

        if self.should_exit {
            self.shutdown();
            event_loop.exit();
            return;
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Feed pending WebView events to the crash reporter, stopping at the
    /// first one after which the app exits.
    pub(super) fn poll_webview_events(&mut self) {
        let events = self.manager.drain_events();
        let pending = events.len();
        for (handled, event) in events.into_iter().enumerate() {
            if self.should_exit {
                tracing::debug!(dropped = pending - handled, "exiting, dropping WebView events");
                break;
            }

            let Some(event) = surface_event(&event) else {
                continue;
            };
            let Some(reporter) = self.reporter.as_mut() else {
                tracing::debug!(surface = %event.surface, "no crash reporter for event");
                continue;
            };

            if let Some(action) = reporter.handle_event(&event) {
                action.apply(&mut self.process);
            }
            self.handle_notices();

            if self.process.terminated() {
                self.should_exit = true;
            }
        }
    }

    /// Act on whatever the reporter's observers queued.
    pub(super) fn handle_notices(&mut self) {
        loop {
            let next = self.notices.borrow_mut().pop_front();
            let Some(notice) = next else {
                break;
            };
            self.handle_notice(notice);
        }
    }

    fn handle_notice(&mut self, notice: Notice) {
        match notice {
            Notice::Ready => {
                let Some(reporter) = self.reporter.as_mut() else {
                    return;
                };
                if let Err(e) = reporter.show() {
                    tracing::warn!("Failed to show crash window: {e}");
                }
                if let Err(e) = reporter.focus() {
                    tracing::warn!("Failed to focus crash window: {e}");
                }
            }
            Notice::LoadFailed(failure) => match self.config.lifecycle.on_load_failure {
                LoadFailurePolicy::Quit => {
                    tracing::error!(
                        url = %failure.url,
                        reason = %failure.reason,
                        "Crash page unavailable, exiting"
                    );
                    self.exit_status = 1;
                    self.should_exit = true;
                }
                LoadFailurePolicy::StayHidden => {
                    tracing::warn!(
                        url = %failure.url,
                        reason = %failure.reason,
                        "Crash page unavailable, keeping window hidden"
                    );
                }
            },
            Notice::Closed => {
                tracing::info!("Crash window closed");
                self.should_exit = true;
            }
        }
    }
}
