//! Graceful shutdown: destroy the crash window, drop pending events.

use mayday_report::Surface;

use super::core::MaydayApp;

impl<S: Surface> MaydayApp<S> {
    /// Release the crash window. Safe to call more than once.
    pub(super) fn shutdown(&mut self) {
        if let Some(mut reporter) = self.reporter.take() {
            tracing::info!("Initiating graceful shutdown");
            reporter.destroy();
        }
        self.window_id = None;

        let dropped = self.manager.drain_events().len();
        if dropped > 0 {
            tracing::debug!(dropped, "discarded pending WebView events");
        }
        self.notices.borrow_mut().clear();
    }
}

// =============================================================================
// TESTS
// =============================================================================
