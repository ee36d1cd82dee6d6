//! `ApplicationHandler` implementation for the winit event loop.

use mayday_webview::WebViewEvent;
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowId;

use super::core::MaydayApp;

impl ApplicationHandler for MaydayApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.launched {
            return;
        }
        self.launched = true;

        if let Err(e) = self.launch(event_loop) {
            tracing::error!("Failed to open crash window: {e}");
            self.exit_status = 2;
            self.shutdown();
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        if Some(window_id) != self.window_id {
            return;
        }

        if let WindowEvent::CloseRequested = event {
            tracing::info!("Crash window close requested");
            if let Some(reporter) = &self.reporter {
                self.manager.push_event(WebViewEvent::Closed {
                    surface: reporter.surface_id(),
                });
            }
            self.poll_webview_events();
            if self.should_exit {
                self.shutdown();
                event_loop.exit();
            }
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.poll_and_schedule(event_loop);
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
