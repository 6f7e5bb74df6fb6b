// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +----------------+---------------------------------+
// | Teams (fill)   | Main Panel                      |
// |                | (Summary / Visual / Comparison) |
// +----------------+                                 |
// | Min games (3)  |                                 |
// +----------------+---------------------------------+
// | Data Preview (40%, only when expanded)            |
// +--------------------------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the filter sidebar in columns.
const SIDEBAR_WIDTH: u16 = 26;

/// Height of the games slider block.
const SLIDER_HEIGHT: u16 = 3;

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: data source, row counts, tab bar.
    pub status_bar: Rect,
    /// Sidebar top: team multi-select.
    pub team_select: Rect,
    /// Sidebar bottom: minimum games slider.
    pub games_slider: Rect,
    /// Tab-switched content area.
    pub main_panel: Rect,
    /// Raw data preview, present only when expanded.
    pub preview: Option<Rect>,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect, preview_open: bool) -> AppLayout {
    let mut constraints = vec![Constraint::Length(1), Constraint::Min(8)];
    if preview_open {
        constraints.push(Constraint::Percentage(40));
    }
    constraints.push(Constraint::Length(1));

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    let status_bar = vertical[0];
    let middle = vertical[1];
    let (preview, help_bar) = if preview_open {
        (Some(vertical[2]), vertical[3])
    } else {
        (None, vertical[2])
    };

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(middle);

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(SLIDER_HEIGHT)])
        .split(horizontal[0]);

    AppLayout {
        status_bar,
        team_select: sidebar[0],
        games_slider: sidebar[1],
        main_panel: horizontal[1],
        preview,
        help_bar,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
