//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop. Owns the crash reporter, its WebView events, and the
//! process lifecycle.

mod core;
mod dispatch;
mod event_handler;
mod init;
mod polling;
mod process;
mod shutdown;
mod surface;
#[cfg(test)]
mod testing;

pub use core::MaydayApp;
