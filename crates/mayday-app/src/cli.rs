use std::path::PathBuf;

use clap::Parser;
use mayday_common::MaydayError;
use mayday_config::schema::LifecycleConfig;
use mayday_report::{CrashReport, ReportKind, ReportedError};

/// Mayday: shows a crash report window for an application that failed.
#[derive(Parser, Debug)]
#[command(name = "mayday", version, about)]
pub struct Args {
    /// Report kind (launchError, uncaughtException, ...).
    #[arg(long, default_value = ReportKind::LAUNCH_ERROR)]
    pub kind: String,

    /// Error name, e.g. the exception class.
    #[arg(long, default_value = "Error")]
    pub name: String,

    /// Error message.
    #[arg(long, required_unless_present = "report")]
    pub message: Option<String>,

    /// Error stack trace.
    #[arg(long)]
    pub stack: Option<String>,

    /// Read the whole report from a JSON file instead.
    #[arg(long, conflicts_with_all = ["message", "stack"])]
    pub report: Option<PathBuf>,

    /// Developer-facing recovery: devtools on load failure, no relaunch on quit.
    #[arg(long)]
    pub diagnostic: bool,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level or filter directive override (debug, info, mayday=trace, ...).
    #[arg(long)]
    pub log_level: Option<String>,

    /// The crashed application, started again when the user quits.
    #[arg(long, value_name = "PROGRAM")]
    pub relaunch: Option<PathBuf>,

    /// Arguments for the relaunched application, after `--`.
    #[arg(last = true, requires = "relaunch", value_name = "ARGS")]
    pub relaunch_args: Vec<String>,
}

impl Args {
    /// Build the report this invocation describes.
    pub fn crash_report(&self) -> Result<CrashReport, MaydayError> {
        if let Some(path) = &self.report {
            let raw = std::fs::read_to_string(path)?;
            return serde_json::from_str(&raw).map_err(|e| {
                MaydayError::InvalidInput(format!("{}: {e}", path.display()))
            });
        }

        let message = self.message.clone().unwrap_or_default();
        let mut error = ReportedError::new(self.name.clone(), message);
        if let Some(stack) = &self.stack {
            error = error.with_stack(stack.clone());
        }
        Ok(CrashReport::new(ReportKind::new(self.kind.clone()), error))
    }

    /// A relaunch target on the command line replaces the configured one.
    pub fn apply_relaunch(&self, lifecycle: &mut LifecycleConfig) {
        if let Some(program) = &self.relaunch {
            lifecycle.relaunch_program = Some(program.clone());
            lifecycle.relaunch_args = self.relaunch_args.clone();
        }
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("mayday").chain(argv.iter().copied())).unwrap()
    }

    #[test]
    fn minimal_invocation_is_a_launch_error() {
        let args = args(&["--message", "boom"]);
        let report = args.crash_report().unwrap();
        assert_eq!(report.kind(), &ReportKind::launch_error());
        assert_eq!(report.error().name, "Error");
        assert_eq!(report.error().message, "boom");
        assert!(report.error().stack.is_none());
        assert!(!args.diagnostic);
    }

    #[test]
    fn all_fields_from_flags() {
        let args = args(&[
            "--kind",
            "uncaughtException",
            "--name",
            "TypeError",
            "--message",
            "x is undefined",
            "--stack",
            "at main.js:1",
            "--diagnostic",
        ]);
        let report = args.crash_report().unwrap();
        assert_eq!(report.kind(), &ReportKind::uncaught_exception());
        assert_eq!(report.error().name, "TypeError");
        assert_eq!(report.error().stack.as_deref(), Some("at main.js:1"));
        assert!(args.diagnostic);
    }

    #[test]
    fn message_is_required_without_report_file() {
        assert!(Args::try_parse_from(["mayday"]).is_err());
    }

    #[test]
    fn report_file_conflicts_with_message() {
        assert!(
            Args::try_parse_from(["mayday", "--report", "r.json", "--message", "m"]).is_err()
        );
    }

    #[test]
    fn report_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(
            &path,
            r#"{"kind":"launchError","error":{"name":"Error","message":"boom","stack":"s"}}"#,
        )
        .unwrap();

        let args = args(&["--report", path.to_str().unwrap()]);
        let report = args.crash_report().unwrap();
        assert_eq!(report.error().message, "boom");
        assert_eq!(report.error().stack.as_deref(), Some("s"));
    }

    #[test]
    fn malformed_report_file_is_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        std::fs::write(&path, "{").unwrap();

        let args = args(&["--report", path.to_str().unwrap()]);
        assert!(matches!(
            args.crash_report(),
            Err(MaydayError::InvalidInput(_))
        ));
    }

    #[test]
    fn relaunch_target_with_trailing_args() {
        let args = args(&[
            "--message",
            "boom",
            "--relaunch",
            "/opt/app/bin/app",
            "--",
            "--safe-mode",
            "--message",
        ]);
        assert_eq!(args.relaunch, Some(PathBuf::from("/opt/app/bin/app")));
        assert_eq!(args.relaunch_args, ["--safe-mode", "--message"]);
        assert_eq!(args.crash_report().unwrap().error().message, "boom");

        let mut lifecycle = LifecycleConfig {
            relaunch_program: Some(PathBuf::from("/configured")),
            relaunch_args: vec!["--old".into()],
            ..Default::default()
        };
        args.apply_relaunch(&mut lifecycle);
        assert_eq!(lifecycle.relaunch_program, Some(PathBuf::from("/opt/app/bin/app")));
        assert_eq!(lifecycle.relaunch_args, ["--safe-mode", "--message"]);
    }

    #[test]
    fn configured_relaunch_kept_without_flag() {
        let args = args(&["--message", "boom"]);
        let mut lifecycle = LifecycleConfig {
            relaunch_program: Some(PathBuf::from("/configured")),
            ..Default::default()
        };
        args.apply_relaunch(&mut lifecycle);
        assert_eq!(lifecycle.relaunch_program, Some(PathBuf::from("/configured")));
    }

    #[test]
    fn relaunch_args_require_a_program() {
        assert!(Args::try_parse_from(["mayday", "--message", "m", "--", "--safe-mode"]).is_err());
    }

    #[test]
    fn missing_report_file_is_io_error() {
        let args = args(&["--report", "/nonexistent/mayday/report.json"]);
        assert!(matches!(args.crash_report(), Err(MaydayError::Io(_))));
    }
}
