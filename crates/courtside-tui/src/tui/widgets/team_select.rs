// Team multi-select: every team in the data with a checkbox.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::tui::ViewState;

/// Render the team list. The highlighted row follows `team_cursor`.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let Some(view) = &state.view else {
        super::render_message(frame, area, "Teams", "Loading...", focused);
        return;
    };

    let items: Vec<ListItem> = view
        .team_options
        .iter()
        .map(|team| {
            let selected = view.is_team_selected(team);
            let style = if selected {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::styled(team_label(team, selected), style))
        })
        .collect();

    let title = format!("Teams ({}/{})", view.selections.teams.len(), view.team_options.len());
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(super::focus_border(focused))
                .title(title),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if focused && !view.team_options.is_empty() {
        list_state.select(Some(state.team_cursor.min(view.team_options.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// "[x] LAL" or "[ ] LAL".
pub fn team_label(team: &str, selected: bool) -> String {
    let mark = if selected { 'x' } else { ' ' };
    format!("[{mark}] {team}")
}
