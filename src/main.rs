//! Appshell - reactive shell orchestration
//!
//! Headless entry point. It initializes:
//! - Logging infrastructure (file rotation + console output)
//! - Tokio async runtime (2 worker threads for the manager tasks)
//! - State management ([`StateManager`])
//! - Configuration loading ([`ConfigManager`])
//! - Shell controller ([`ShellController`] - wires the managers to the store)
//!
//! Without a UI toolkit attached, all surfaces render to the log through
//! [`HeadlessSurface`], and state transitions are driven from stdin:
//!
//! ```text
//! loading on        set the loading flag (opens the overlay)
//! loading off       clear the loading flag (closes the overlay)
//! error <message>   raise an application error
//! audio <code>      raise an audio error code (e.g. missingSpeaker)
//! quit              exit
//! ```
//!
//! # Configuration Files
//!
//! Expected in the `appshell-data/` directory:
//! - `appshell.yaml`: panel classes, notification duration, catalog path
//! - optionally a translation catalog referenced from `translation.catalog`

use anyhow::Result;
use appshell::metrics::shell_metrics;
use appshell::models::AudioError;
use appshell::state::Action;
use appshell::{
    APP_NAME, CatalogTranslator, ConfigManager, HeadlessSurface, ShellController, ShellSurfaces,
    StateManager, VERSION,
};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};

fn main() -> Result<()> {
    let config_manager = ConfigManager::new("appshell-data")?;
    let config = config_manager.load_shell_config()?;

    let _log_guard = appshell::logging::setup_logging(
        &config.logging.dir,
        &config.logging.prefix,
        config.logging.debug,
        config.logging.console,
    )?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .worker_threads(2)
        .thread_name("appshell-worker")
        .build()?;

    let store = StateManager::new();

    let translator = match &config.translation.catalog {
        Some(path) => Arc::new(CatalogTranslator::from_file(path)?),
        None => {
            tracing::info!("No translation catalog configured, using built-in defaults");
            Arc::new(CatalogTranslator::default())
        }
    };

    let surface = Arc::new(HeadlessSurface::new());
    let surfaces = ShellSurfaces {
        dialogs: surface.clone(),
        notifier: surface.clone(),
        translator,
    };

    let controller = {
        let _enter = runtime.enter();
        ShellController::spawn(store.clone(), surfaces, &config)
    };

    runtime.block_on(run_command_loop(store))?;

    runtime.block_on(controller.shutdown());
    shell_metrics().log_summary();
    runtime.shutdown_timeout(std::time::Duration::from_secs(5));

    tracing::info!("Application shutdown complete");
    Ok(())
}

/// Read state commands from stdin until EOF, `quit`, or ctrl-c.
async fn run_command_loop(store: StateManager) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("ctrl-c received, shutting down");
                return Ok(());
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(());
                };
                if !handle_command(&store, line.trim()) {
                    return Ok(());
                }
            }
        }
    }
}

/// Apply one stdin command. Returns false when the loop should exit.
fn handle_command(store: &StateManager, line: &str) -> bool {
    let (command, argument) = match line.split_once(' ') {
        Some((command, argument)) => (command, argument.trim()),
        None => (line, ""),
    };

    match (command, argument) {
        ("", _) => {}
        ("quit", _) | ("exit", _) => return false,
        ("loading", "on") => {
            store.dispatch(Action::SetLoading(true));
        }
        ("loading", "off") => {
            store.dispatch(Action::SetLoading(false));
        }
        ("error", message) if !message.is_empty() => {
            store.dispatch(Action::DisplayError(message.to_string()));
        }
        ("audio", code) if !code.is_empty() => {
            store.dispatch(Action::RaiseAudioError(AudioError::from_code(code)));
        }
        ("status", _) => {
            let state = store.snapshot();
            println!(
                "loading={} error={:?} audio_error={:?}",
                state.is_loading, state.error, state.audio_error
            );
        }
        _ => {
            eprintln!("commands: loading on|off, error <message>, audio <code>, status, quit");
        }
    }

    true
}
