// Courtside dashboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config (copying defaults on first run)
// 3. Load the player table; a bad file is fatal here
// 4. Create mpsc channels
// 5. Spawn the orchestrator task
// 6. Run the TUI until the user quits
// 7. Cleanup on exit

use std::path::Path;

use anyhow::Context;
use tokio::sync::mpsc;
use tracing::{error, info};

use courtside_core::config;
use courtside_core::data::load_players;
use courtside_tui::app::{self, AppState};
use courtside_tui::tui;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("Courtside starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: data={}, reload_on_input={}",
        config.data.path, config.data.reload_on_input
    );

    let dataset = load_players(Path::new(&config.data.path))
        .with_context(|| format!("failed to load player data from {}", config.data.path))?;
    info!(
        "Loaded {} players ({} extra columns)",
        dataset.len(),
        dataset.extra_columns.len()
    );

    let (cmd_tx, cmd_rx) = mpsc::channel(64);
    let (ui_tx, ui_rx) = mpsc::channel(16);

    let ui_config = config.ui.clone();
    let app_state = AppState::new(config, dataset);

    let app_handle = tokio::spawn(async move {
        if let Err(e) = app::run(cmd_rx, ui_tx, app_state).await {
            error!("Application loop error: {}", e);
        }
    });

    // Blocks until the user confirms quit or presses Ctrl+C.
    if let Err(e) = tui::run(ui_rx, cmd_tx, ui_config).await {
        error!("TUI error: {}", e);
    }

    let _ = tokio::time::timeout(std::time::Duration::from_secs(5), async {
        let _ = app_handle.await;
    })
    .await;

    info!("Courtside shut down cleanly");
    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("courtside.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("courtside=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
