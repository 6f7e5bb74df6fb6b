// Help bar widget: key hints for the focused control.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::TabId;
use crate::tui::{Focus, ViewState};

/// Render the help bar into the given area.
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();
    for (key, action) in hints(state.focus, state.active_tab) {
        spans.push(Span::styled(format!(" {key}"), Style::default().fg(Color::Yellow)));
        spans.push(Span::styled(format!(":{action}"), Style::default().fg(Color::Gray)));
    }
    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Key hints: focus-specific ones first, then the global ones.
pub fn hints(focus: Focus, tab: TabId) -> Vec<(&'static str, &'static str)> {
    let mut hints = match (focus, tab) {
        (Focus::Teams, _) => vec![("↑↓", "Move"), ("Space", "Toggle"), ("a", "All"), ("n", "None")],
        (Focus::MinGames, _) => vec![("←→", "±1"), ("PgUp/PgDn", "±5"), ("Home/End", "Min/Max")],
        (Focus::Main, TabId::Summary) => vec![("↑↓", "Scroll")],
        (Focus::Main, TabId::Visual) => vec![("←→", "Metric"), ("↑↓", "Scroll")],
        (Focus::Main, TabId::Comparison) => vec![("↑↓", "Player"), ("p", "Switch slot")],
    };
    hints.extend([
        ("Tab", "Focus"),
        ("1-3", "Tabs"),
        ("d", "Data"),
        ("r", "Reload"),
        ("q", "Quit"),
    ]);
    hints
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_focus() {
        let teams = hints(Focus::Teams, TabId::Summary);
        assert_eq!(teams[0], ("↑↓", "Move"));
        let visual = hints(Focus::Main, TabId::Visual);
        assert_eq!(visual[0], ("←→", "Metric"));
        assert!(visual.contains(&("q", "Quit")));
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(60, 1);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &state))
            .unwrap();
    }
}
