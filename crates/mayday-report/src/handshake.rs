//! Handshake state machine.
//!
//! The error report may only be delivered once the content has both
//! finished loading and announced that it is ready. Both signals can
//! arrive in any order, more than once, or never.
//!
//! ```text
//!            finish-loading            content-ready
//! Initial ──────────────────> LoadedOnly ──────────────┐
//!    │                                                  v
//!    │ content-ready                                  Ready
//!    └────────────────────> ReadyOnly ─────────────────^
//!                                    finish-loading
//!
//! fail-load from Initial/LoadedOnly/ReadyOnly -> Failed
//! ```

/// Where the handshake stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Handshake {
    Initial,
    LoadedOnly,
    ReadyOnly,
    Ready,
    Failed,
}

/// An input to the handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Signal {
    /// First `finish-loading` of the content.
    ContentLoaded,
    /// Inbound `content-ready`.
    ContentReady,
    /// `fail-load` of the content.
    LoadFailed,
}

/// Side effect the controller must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Effect {
    SendReport,
    NotifyReady,
    NotifyLoadFailed,
}

impl Handshake {
    /// Single transition function. Duplicates and signals that arrive in a
    /// terminal state produce no effects.
    pub(crate) fn advance(self, signal: Signal) -> (Handshake, &'static [Effect]) {
        use Effect::*;
        use Handshake::*;

        match (self, signal) {
            (Ready, _) | (Failed, _) => (self, &[]),

            (Initial, Signal::LoadFailed)
            | (LoadedOnly, Signal::LoadFailed)
            | (ReadyOnly, Signal::LoadFailed) => (Failed, &[NotifyLoadFailed]),

            (Initial, Signal::ContentLoaded) => (LoadedOnly, &[]),
            (Initial, Signal::ContentReady) => (ReadyOnly, &[SendReport]),

            (LoadedOnly, Signal::ContentLoaded) => (LoadedOnly, &[]),
            (LoadedOnly, Signal::ContentReady) => (Ready, &[SendReport, NotifyReady]),

            (ReadyOnly, Signal::ContentReady) => (ReadyOnly, &[]),
            (ReadyOnly, Signal::ContentLoaded) => (Ready, &[NotifyReady]),
        }
    }

    pub(crate) fn content_loaded(self) -> bool {
        matches!(self, Self::LoadedOnly | Self::Ready)
    }

    pub(crate) fn content_ready(self) -> bool {
        matches!(self, Self::ReadyOnly | Self::Ready)
    }
}
