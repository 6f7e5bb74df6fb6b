// Status bar widget: data source, row counts, load time, tab indicator.

use chrono::{DateTime, Local};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::protocol::TabId;
use crate::tui::ViewState;

/// Render the status bar into the given area.
///
/// Layout: [source] [shown/total rows] [loaded at] | [tab bar] [error]
pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let mut spans = Vec::new();

    match &state.view {
        Some(view) => {
            spans.push(Span::styled(
                format!(" {} ", view.source),
                Style::default().fg(Color::Cyan),
            ));
            spans.push(Span::styled(
                row_counts(view.rows.len(), view.total_rows),
                Style::default().fg(Color::White),
            ));
            if let Some(loaded_at) = state.loaded_at {
                spans.push(Span::styled(
                    format!(" {}", loaded_label(loaded_at)),
                    Style::default().fg(Color::Gray),
                ));
            }
        }
        None => spans.push(Span::styled(
            " Loading data...",
            Style::default().fg(Color::Yellow),
        )),
    }

    spans.push(Span::styled(" | ", Style::default().fg(Color::Gray)));
    spans.extend(tab_spans(state.active_tab));

    if let Some(err) = &state.load_error {
        spans.push(Span::styled(
            format!(" ! {err}"),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// "12/530 rows"
pub fn row_counts(shown: usize, total: usize) -> String {
    format!("{shown}/{total} rows")
}

pub fn loaded_label(loaded_at: DateTime<Local>) -> String {
    format!("loaded {}", loaded_at.format("%H:%M:%S"))
}

/// Tab indicator spans with the active tab highlighted,
/// e.g. "[1:Summary] [2:Visual Analysis] [3:Player Comparison]".
pub fn tab_spans(active: TabId) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    for (i, tab) in TabId::ALL.into_iter().enumerate() {
        let style = if tab == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        spans.push(Span::styled(format!("[{}:{}]", i + 1, tab.title()), style));
        spans.push(Span::raw(" "));
    }
    spans
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
