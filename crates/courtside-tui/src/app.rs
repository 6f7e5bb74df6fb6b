// App orchestrator: owns the user's selections and re-runs the dashboard.
//
// Every `UserCommand` from the TUI updates `Selections`, re-reads the data
// file (unless reloading on input is disabled), calls the pure
// `view::render`, and pushes the result back as a `UiUpdate`.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use courtside_core::config::Config;
use courtside_core::data::{load_players, Dataset, LoadError};
use courtside_core::filter::distinct_teams;
use courtside_core::view::{render, Selections};

use crate::protocol::{UiUpdate, UserCommand};

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// State carried between re-runs: the selections and the last good load.
pub struct AppState {
    pub config: Config,
    pub selections: Selections,
    /// Most recent successfully loaded table.
    pub dataset: Dataset,
    pub loaded_at: DateTime<Local>,
}

impl AppState {
    pub fn new(config: Config, dataset: Dataset) -> Self {
        let selections = Selections::from_defaults(&config.filters);
        AppState {
            config,
            selections,
            dataset,
            loaded_at: Local::now(),
        }
    }

    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.config.data.path)
    }

    /// Apply a command to the selections. Returns true when the data file
    /// must be re-read regardless of the reload policy.
    pub fn apply_command(&mut self, cmd: UserCommand) -> bool {
        match cmd {
            UserCommand::ToggleTeam(team) => {
                let all = distinct_teams(&self.dataset.records);
                self.selections.toggle_team(&team, &all);
            }
            UserCommand::SelectAllTeams => self.selections.select_all_teams(),
            UserCommand::ClearTeams => self.selections.clear_teams(),
            UserCommand::SetMinGames(n) => self.selections.min_games = n,
            UserCommand::SetMetric(metric) => self.selections.metric = metric,
            UserCommand::SetPlayer { slot, name } => self.selections.set_player(slot, name),
            UserCommand::Reload => return true,
            UserCommand::Quit => {}
        }
        false
    }

    /// Re-read the data file into `dataset`. On failure the previous table
    /// is kept.
    pub fn reload(&mut self) -> Result<(), LoadError> {
        let dataset = load_players(&self.data_path())?;
        debug!("reloaded {} rows from {}", dataset.len(), dataset.source);
        self.dataset = dataset;
        self.loaded_at = Local::now();
        Ok(())
    }

    /// One full dashboard run. Yields `LoadFailed` if the re-read failed.
    pub fn rerun(&mut self, force_reload: bool) -> UiUpdate {
        if force_reload || self.config.data.reload_on_input {
            if let Err(e) = self.reload() {
                error!("failed to reload data: {}", e);
                return UiUpdate::LoadFailed(e.to_string());
            }
        }
        let view = render(&self.dataset, &self.selections);
        debug!(
            "rendered view: {} of {} rows, {} teams selected",
            view.rows.len(),
            view.total_rows,
            view.selections.teams.len()
        );
        UiUpdate::ViewReady {
            view: Box::new(view),
            loaded_at: self.loaded_at,
        }
    }

    /// Render from the in-memory table without touching the file.
    pub fn snapshot(&self) -> UiUpdate {
        UiUpdate::ViewReady {
            view: Box::new(render(&self.dataset, &self.selections)),
            loaded_at: self.loaded_at,
        }
    }
}

// ---------------------------------------------------------------------------
// Main event loop
// ---------------------------------------------------------------------------

/// Run the orchestrator until `Quit` arrives or the command channel closes.
///
/// Sends an initial view from the startup load before waiting for input.
pub async fn run(
    mut cmd_rx: mpsc::Receiver<UserCommand>,
    ui_tx: mpsc::Sender<UiUpdate>,
    mut state: AppState,
) -> anyhow::Result<()> {
    info!("Application event loop started");

    if ui_tx.send(state.snapshot()).await.is_err() {
        info!("UI channel closed before first render");
        return Ok(());
    }

    while let Some(cmd) = cmd_rx.recv().await {
        if cmd == UserCommand::Quit {
            info!("Quit command received, shutting down");
            break;
        }
        handle_user_command(&mut state, cmd, &ui_tx).await;
    }

    info!("Application event loop exiting");
    Ok(())
}

/// Apply one command and push the re-run result.
async fn handle_user_command(state: &mut AppState, cmd: UserCommand, ui_tx: &mpsc::Sender<UiUpdate>) {
    debug!("user command: {:?}", cmd);
    let force = state.apply_command(cmd);
    let update = state.rerun(force);
    if ui_tx.send(update).await.is_err() {
        debug!("UI channel closed, dropping update");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
