// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the latest `DashboardView` plus purely
// local presentation state (tab, focus, cursors, scroll). The orchestrator
// pushes `UiUpdate` messages over an mpsc channel; the TUI applies them and
// re-renders on a fixed tick.

pub mod input;
pub mod layout;
pub mod widgets;

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Local};
use crossterm::event::{Event, EventStream};
use futures_util::StreamExt;
use ratatui::Frame;
use tokio::sync::mpsc;
use tracing::{info, warn};

use courtside_core::config::UiConfig;
use courtside_core::view::{DashboardView, PlayerSlot};

use crate::protocol::{TabId, UiUpdate, UserCommand};
use layout::build_layout;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

/// Which control receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Teams,
    MinGames,
    Main,
}

impl Focus {
    pub fn next(self) -> Focus {
        match self {
            Focus::Teams => Focus::MinGames,
            Focus::MinGames => Focus::Main,
            Focus::Main => Focus::Teams,
        }
    }
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// TUI-local state for rendering.
pub struct ViewState {
    /// Latest dashboard render from the orchestrator.
    pub view: Option<DashboardView>,
    /// When the data behind `view` was read.
    pub loaded_at: Option<DateTime<Local>>,
    /// Most recent reload failure, cleared by the next good view.
    pub load_error: Option<String>,
    pub active_tab: TabId,
    pub focus: Focus,
    /// Highlighted row in the team multi-select.
    pub team_cursor: usize,
    /// Slider position; updated locally ahead of the orchestrator's reply.
    pub min_games: u32,
    /// Commands sent whose reply has not arrived yet. The orchestrator
    /// answers every command except `Quit` with exactly one update.
    pub pending_replies: usize,
    /// Player picker that the arrow keys drive on the comparison tab.
    pub active_slot: PlayerSlot,
    /// Whether the raw data preview pane is expanded.
    pub preview_open: bool,
    /// Maximum rows shown in the preview.
    pub preview_rows: usize,
    /// Per-widget scroll offsets (keyed by widget name).
    pub scroll_offset: HashMap<String, usize>,
    /// Quit confirmation prompt is showing.
    pub confirm_quit: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            view: None,
            loaded_at: None,
            load_error: None,
            active_tab: TabId::Summary,
            focus: Focus::Teams,
            team_cursor: 0,
            min_games: 0,
            pending_replies: 0,
            active_slot: PlayerSlot::First,
            preview_open: false,
            preview_rows: 200,
            scroll_offset: HashMap::new(),
            confirm_quit: false,
        }
    }
}

impl ViewState {
    pub fn with_config(ui: &UiConfig) -> Self {
        ViewState {
            preview_rows: ui.preview_rows,
            ..ViewState::default()
        }
    }

    /// Record a command handed to the orchestrator.
    pub fn command_sent(&mut self, cmd: &UserCommand) {
        if *cmd != UserCommand::Quit {
            self.pending_replies += 1;
        }
    }

    pub fn scroll(&self, key: &str) -> usize {
        self.scroll_offset.get(key).copied().unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// UiUpdate processing
// ---------------------------------------------------------------------------

/// Apply a single UiUpdate to the ViewState.
///
/// The slider only takes the orchestrator's value once every sent command
/// has been answered, so stale replies never pull it back.
pub fn apply_ui_update(state: &mut ViewState, update: UiUpdate) {
    state.pending_replies = state.pending_replies.saturating_sub(1);
    match update {
        UiUpdate::ViewReady { view, loaded_at } => {
            if state.pending_replies == 0 {
                state.min_games = view.selections.min_games;
            }
            let team_count = view.team_options.len();
            if team_count > 0 && state.team_cursor >= team_count {
                state.team_cursor = team_count - 1;
            }
            state.view = Some(*view);
            state.loaded_at = Some(loaded_at);
            state.load_error = None;
        }
        UiUpdate::LoadFailed(message) => {
            state.load_error = Some(message);
        }
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area(), state.preview_open);

    widgets::status_bar::render(frame, layout.status_bar, state);
    widgets::team_select::render(frame, layout.team_select, state, state.focus == Focus::Teams);
    widgets::games_slider::render(frame, layout.games_slider, state, state.focus == Focus::MinGames);

    let main_focused = state.focus == Focus::Main;
    match state.active_tab {
        TabId::Summary => widgets::summary::render(frame, layout.main_panel, state, main_focused),
        TabId::Visual => widgets::team_chart::render(frame, layout.main_panel, state, main_focused),
        TabId::Comparison => widgets::radar::render(frame, layout.main_panel, state, main_focused),
    }

    if let Some(area) = layout.preview {
        widgets::preview::render(frame, area, state);
    }

    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook that restores the terminal.
/// 3. Selects over UI updates, keyboard input and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(
    mut ui_rx: mpsc::Receiver<UiUpdate>,
    cmd_tx: mpsc::Sender<UserCommand>,
    ui_config: UiConfig,
) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::with_config(&ui_config);
    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(ui_config.frame_interval_ms));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            update = ui_rx.recv() => {
                match update {
                    Some(ui_update) => apply_ui_update(&mut view_state, ui_update),
                    None => {
                        info!("UI channel closed, leaving TUI");
                        break;
                    }
                }
            }

            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(cmd) = input::handle_key(key_event, &mut view_state) {
                            let quit = cmd == UserCommand::Quit;
                            view_state.command_sent(&cmd);
                            if cmd_tx.send(cmd).await.is_err() || quit {
                                break;
                            }
                        }
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("terminal input error: {}", e);
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state))?;
            }
        }
    }

    ratatui::restore();

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use courtside_core::data::load_from_reader;
    use courtside_core::view::{render, Selections};

    pub(crate) const SAMPLE_CSV: &str = "\
PLAYER_ID,PLAYER_NAME,TEAM_ABBREVIATION,AGE,GP,PTS,REB,AST,STL,BLK,TOV,PLUS_MINUS
1,Alpha Guard,LAL,27,70,20,8,4,1.2,0.4,2.0,3.0
2,Bravo Wing,BOS,25,65,10,4,6,0.8,0.9,1.5,-1.0
3,Charlie Big,LAL,31,5,30,6,2,1.6,0.2,3.0,5.0
4,Delta Forward,GSW,29,80,25,5,7,1.0,0.3,2.5,-2.0";

    /// A view rendered from `SAMPLE_CSV` with the given selections.
    pub(crate) fn sample_view(selections: &Selections) -> DashboardView {
        let dataset = load_from_reader(SAMPLE_CSV.as_bytes(), "sample.csv").unwrap();
        render(&dataset, selections)
    }

    /// ViewState holding a default-selection view of `SAMPLE_CSV`.
    pub(crate) fn loaded_state() -> ViewState {
        let mut state = ViewState::default();
        apply_ui_update(
            &mut state,
            UiUpdate::ViewReady {
                view: Box::new(sample_view(&Selections::default())),
                loaded_at: Local::now(),
            },
        );
        state
    }

    /// All symbols of a test terminal buffer joined into one string.
    pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content.iter().map(|c| c.symbol()).collect()
    }

    #[test]
    fn view_state_default_is_sensible() {
        let state = ViewState::default();
        assert!(state.view.is_none());
        assert!(state.loaded_at.is_none());
        assert!(state.load_error.is_none());
        assert_eq!(state.active_tab, TabId::Summary);
        assert_eq!(state.focus, Focus::Teams);
        assert_eq!(state.active_slot, PlayerSlot::First);
        assert!(!state.preview_open);
        assert!(!state.confirm_quit);
        assert!(state.scroll_offset.is_empty());
    }

    #[test]
    fn with_config_takes_preview_rows() {
        let ui = UiConfig {
            frame_interval_ms: 10,
            preview_rows: 7,
        };
        assert_eq!(ViewState::with_config(&ui).preview_rows, 7);
    }

    #[test]
    fn focus_cycles() {
        assert_eq!(Focus::Teams.next(), Focus::MinGames);
        assert_eq!(Focus::MinGames.next(), Focus::Main);
        assert_eq!(Focus::Main.next(), Focus::Teams);
    }

    #[test]
    fn view_ready_replaces_view_and_clears_error() {
        let mut state = ViewState::default();
        state.load_error = Some("boom".into());
        state.min_games = 99;
        let selections = Selections {
            min_games: 60,
            ..Selections::default()
        };
        apply_ui_update(
            &mut state,
            UiUpdate::ViewReady {
                view: Box::new(sample_view(&selections)),
                loaded_at: Local::now(),
            },
        );
        assert!(state.view.is_some());
        assert!(state.loaded_at.is_some());
        assert!(state.load_error.is_none());
        assert_eq!(state.min_games, 60);
    }

    #[test]
    fn stale_replies_do_not_move_slider() {
        let mut state = loaded_state();
        for n in [1, 2, 3] {
            state.min_games = n;
            state.command_sent(&UserCommand::SetMinGames(n));
        }
        for n in [1, 2] {
            let selections = Selections {
                min_games: n,
                ..Selections::default()
            };
            apply_ui_update(
                &mut state,
                UiUpdate::ViewReady {
                    view: Box::new(sample_view(&selections)),
                    loaded_at: Local::now(),
                },
            );
            assert_eq!(state.min_games, 3);
            assert_eq!(state.view.as_ref().unwrap().selections.min_games, n);
        }
        apply_ui_update(&mut state, UiUpdate::LoadFailed("gone".into()));
        assert_eq!(state.pending_replies, 0);
        assert_eq!(state.min_games, 3);

        state.command_sent(&UserCommand::SetMinGames(70));
        apply_ui_update(
            &mut state,
            UiUpdate::ViewReady {
                view: Box::new(sample_view(&Selections {
                    min_games: 70,
                    ..Selections::default()
                })),
                loaded_at: Local::now(),
            },
        );
        assert_eq!(state.min_games, 70);
    }

    #[test]
    fn quit_expects_no_reply() {
        let mut state = ViewState::default();
        state.command_sent(&UserCommand::Quit);
        assert_eq!(state.pending_replies, 0);
    }

    #[test]
    fn view_ready_clamps_team_cursor() {
        let mut state = ViewState::default();
        state.team_cursor = 10;
        apply_ui_update(
            &mut state,
            UiUpdate::ViewReady {
                view: Box::new(sample_view(&Selections::default())),
                loaded_at: Local::now(),
            },
        );
        assert_eq!(state.team_cursor, 2);
    }

    #[test]
    fn load_failed_keeps_previous_view() {
        let mut state = loaded_state();
        apply_ui_update(&mut state, UiUpdate::LoadFailed("data file not found".into()));
        assert!(state.view.is_some());
        assert_eq!(state.load_error.as_deref(), Some("data file not found"));
    }

    #[test]
    fn render_frame_every_tab_without_panic() {
        for tab in TabId::ALL {
            for preview_open in [false, true] {
                let backend = ratatui::backend::TestBackend::new(140, 40);
                let mut terminal = ratatui::Terminal::new(backend).unwrap();
                let mut state = loaded_state();
                state.active_tab = tab;
                state.preview_open = preview_open;
                state.confirm_quit = preview_open;
                terminal
                    .draw(|frame| render_frame(frame, &state))
                    .unwrap();
            }
        }
    }

    #[test]
    fn render_frame_before_first_view() {
        let backend = ratatui::backend::TestBackend::new(100, 30);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render_frame(frame, &state))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Loading"));
    }
}
