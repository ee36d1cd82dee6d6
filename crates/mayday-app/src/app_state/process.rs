//! Relaunch of the crashed application and termination of Mayday.

use std::path::{Path, PathBuf};
use std::process::Command;

use mayday_config::schema::LifecycleConfig;
use mayday_report::ProcessLifecycle;

/// Applies lifecycle requests from the crash window.
///
/// `relaunch` spawns a detached copy of the configured application;
/// `terminate` only flags the event loop to exit.
#[derive(Debug)]
pub struct ProcessRelauncher {
    program: Option<PathBuf>,
    args: Vec<String>,
    relaunched: bool,
    terminated: bool,
}

impl ProcessRelauncher {
    pub fn new(program: Option<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program,
            args,
            relaunched: false,
            terminated: false,
        }
    }

    pub fn from_config(config: &LifecycleConfig) -> Self {
        Self::new(config.relaunch_program.clone(), config.relaunch_args.clone())
    }

    /// The command `relaunch` would spawn, if any.
    ///
    /// Mayday itself is never a relaunch target: it would only show the
    /// same report again.
    pub fn command(&self) -> Option<Command> {
        let program = self.program.as_deref()?;
        if is_current_exe(program) {
            return None;
        }
        let mut command = Command::new(program);
        command.args(&self.args);
        Some(command)
    }

    #[cfg(test)]
    pub fn relaunched(&self) -> bool {
        self.relaunched
    }

    pub fn terminated(&self) -> bool {
        self.terminated
    }
}

fn is_current_exe(program: &Path) -> bool {
    let Ok(exe) = std::env::current_exe() else {
        return false;
    };
    match (program.canonicalize(), exe.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => program == exe,
    }
}

impl ProcessLifecycle for ProcessRelauncher {
    fn relaunch(&mut self) {
        if self.relaunched {
            return;
        }
        self.relaunched = true;

        let Some(mut command) = self.command() else {
            tracing::warn!(
                program = ?self.program,
                "no relaunch target configured, quitting without relaunch"
            );
            return;
        };
        match command.spawn() {
            Ok(child) => tracing::info!(pid = child.id(), "relaunched application"),
            Err(e) => tracing::error!(error = %e, "failed to relaunch application"),
        }
    }

    fn terminate(&mut self) {
        tracing::info!("termination requested");
        self.terminated = true;
    }
}
