mod app_state;
mod cli;
mod logging;

use std::process::ExitCode;

use mayday_config::MaydayConfig;
use mayday_report::ReportedError;
use winit::event_loop::EventLoop;

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let report = ReportedError::from_panic(info);

        eprintln!("\n--- Mayday crashed ---");
        match serde_json::to_string(&report) {
            Ok(json) => eprintln!("{json}"),
            Err(_) => eprintln!("{}: {}", report.name, report.message),
        }
        eprintln!("----------------------\n");

        default_hook(info);
    }));
}

fn main() -> ExitCode {
    // Install panic hook for crash reports
    install_panic_hook();

    // Parse CLI arguments
    let args = cli::parse();

    // Load config, logging to a bootstrap subscriber until the level is known
    let bootstrap = logging::bootstrap(args.log_level.as_deref());
    let mut config = tracing::subscriber::with_default(bootstrap, || {
        if let Some(ref path) = args.config {
            tracing::info!("Using config override: {}", path.display());
        }
        mayday_config::load_config_from(args.config.as_deref()).unwrap_or_else(|e| {
            tracing::warn!("Config load failed, using defaults: {e}");
            MaydayConfig::default()
        })
    });
    args.apply_relaunch(&mut config.lifecycle);

    logging::init(args.log_level.as_deref(), config.logging.level);
    tracing::info!("Mayday v{} starting...", env!("CARGO_PKG_VERSION"));

    let report = match args.crash_report() {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("Cannot build crash report: {e}");
            return ExitCode::from(2);
        }
    };

    let diagnostic = args.diagnostic || config.diagnostics.enabled;
    tracing::info!(kind = %report.kind(), diagnostic, "Crash report prepared");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            return ExitCode::from(2);
        }
    };
    let mut app: app_state::MaydayApp = app_state::MaydayApp::new(config, report, diagnostic);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    app.exit_code()
}
