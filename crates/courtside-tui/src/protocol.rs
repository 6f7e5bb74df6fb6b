// Messages exchanged between the TUI loop and the app orchestrator.

use chrono::{DateTime, Local};

use courtside_core::metric::Metric;
use courtside_core::view::{DashboardView, PlayerSlot};

/// Main panel tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TabId {
    Summary,
    Visual,
    Comparison,
}

impl TabId {
    pub const ALL: [TabId; 3] = [TabId::Summary, TabId::Visual, TabId::Comparison];

    pub fn title(self) -> &'static str {
        match self {
            TabId::Summary => "Summary",
            TabId::Visual => "Visual Analysis",
            TabId::Comparison => "Player Comparison",
        }
    }
}

/// Input changes forwarded from the TUI to the orchestrator. Every command
/// except `Quit` triggers a full re-run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    ToggleTeam(String),
    SelectAllTeams,
    ClearTeams,
    SetMinGames(u32),
    SetMetric(Metric),
    SetPlayer { slot: PlayerSlot, name: String },
    /// Re-read the data file even when reloading on input is disabled.
    Reload,
    Quit,
}

/// Results pushed from the orchestrator to the TUI.
#[derive(Debug, Clone)]
pub enum UiUpdate {
    /// A fresh render of the dashboard.
    ViewReady {
        view: Box<DashboardView>,
        loaded_at: DateTime<Local>,
    },
    /// Reading the data file failed; the previous view stays on screen.
    LoadFailed(String),
}
