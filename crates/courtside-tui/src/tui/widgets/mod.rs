// TUI widget modules for each dashboard panel.

pub mod games_slider;
pub mod help_bar;
pub mod preview;
pub mod quit_confirm;
pub mod radar;
pub mod status_bar;
pub mod summary;
pub mod team_chart;
pub mod team_select;

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Border style for a panel; cyan when it holds keyboard focus.
pub fn focus_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Bordered panel holding a single dimmed message.
pub fn render_message(frame: &mut Frame, area: Rect, title: &str, message: &str, focused: bool) {
    let paragraph = Paragraph::new(format!("  {message}"))
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(focus_border(focused))
                .title(title.to_string()),
        );
    frame.render_widget(paragraph, area);
}
