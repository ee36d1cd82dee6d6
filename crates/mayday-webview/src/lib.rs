//! WebView bridge for the crash window.
//!
//! Wraps the `wry` crate to provide:
//! - A WebView per crash window, tagged with its `SurfaceId`
//! - Bidirectional IPC (Rust <-> JavaScript)
//! - A `mayday://` custom protocol for bundled content
//! - Page lifecycle events (start, finish, failed load) pushed to a shared sink

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use ipc::IpcMessage;
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
