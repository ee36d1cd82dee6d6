//! Process lifecycle requests produced by the controller.

/// The owning process, as far as the crash window is concerned.
///
/// Both requests are fire-and-forget: implementors log their own failures.
pub trait ProcessLifecycle {
    fn relaunch(&mut self);
    fn terminate(&mut self);
}

/// What the owning process should do after the content asked to quit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use = "a lifecycle action does nothing until applied"]
pub enum LifecycleAction {
    /// Start a fresh instance, then exit.
    RelaunchAndTerminate,
    /// Exit without relaunching.
    Terminate,
}

impl LifecycleAction {
    /// Diagnostic builds never relaunch, so a broken build cannot loop.
    pub fn for_quit_request(diagnostic_mode: bool) -> Self {
        if diagnostic_mode {
            Self::Terminate
        } else {
            Self::RelaunchAndTerminate
        }
    }

    pub fn relaunches(self) -> bool {
        self == Self::RelaunchAndTerminate
    }

    /// Issue the requests, relaunch strictly before terminate.
    pub fn apply<P: ProcessLifecycle + ?Sized>(self, process: &mut P) {
        if self.relaunches() {
            process.relaunch();
        }
        process.terminate();
    }
}
