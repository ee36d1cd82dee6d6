//! WebView lifecycle management.
//!
//! `WebViewManager` creates `wry::WebView` instances, one per crash window,
//! and owns the event sink their handlers push into.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::WebViewHandle;
pub use types::WebViewConfig;

/// Shared sink that WebView handlers push events into.
pub type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

/// Creates WebViews and collects their events.
///
/// Clones share the same event sink and content provider.
#[derive(Clone)]
pub struct WebViewManager {
    /// Event sink. Events are pushed here for the main event loop to consume.
    pub(crate) events: EventSink,
    /// Content provider for the `mayday://` custom protocol.
    content_provider: Arc<ContentProvider>,
}

impl WebViewManager {
    /// Create a new WebView manager serving content from `provider`.
    pub fn new(provider: ContentProvider) -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: Arc::new(provider),
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Record an event on behalf of a WebView (e.g. `Closed` on destroy).
    pub fn push_event(&self, event: WebViewEvent) {
        push(&self.events, event);
    }
}

pub(crate) fn push(events: &EventSink, event: WebViewEvent) {
    if let Ok(mut evts) = events.lock() {
        evts.push(event);
    }
}
