// Raw data preview: the filtered rows as loaded, in input order.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use courtside_core::data::PLAYER_NAME;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let Some(view) = &state.view else {
        super::render_message(frame, area, "Data", "Loading...", false);
        return;
    };

    let header = Row::new(view.columns.iter().map(|c| Cell::from(c.clone())).collect::<Vec<_>>())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let shown = view.rows.len().min(state.preview_rows);
    let visible = (area.height as usize).saturating_sub(3);
    let offset = state.scroll("preview").min(shown.saturating_sub(visible));

    let rows: Vec<Row> = view.rows[..shown]
        .iter()
        .skip(offset)
        .take(visible.max(1))
        .map(|r| Row::new(view.preview_cells(r)))
        .collect();

    let table = Table::new(rows, column_widths(&view.columns)).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(preview_title(shown, view.rows.len(), offset, &view.dropped_columns)),
    );
    frame.render_widget(table, area);
}

/// Player names get room to breathe; every other column is as wide as its
/// header, with a floor for short numeric headers.
pub fn column_widths(columns: &[String]) -> Vec<Constraint> {
    columns
        .iter()
        .map(|c| {
            if c == PLAYER_NAME {
                Constraint::Min(18)
            } else {
                Constraint::Length(u16::try_from(c.len()).unwrap_or(u16::MAX).max(5))
            }
        })
        .collect()
}

pub fn preview_title(shown: usize, filtered: usize, offset: usize, dropped: &[String]) -> String {
    let mut title = format!("Data ({shown} of {filtered} filtered rows)");
    if offset > 0 {
        title.push_str(&format!(" +{offset}"));
    }
    if !dropped.is_empty() {
        title.push_str(&format!(" dropped: {}", dropped.join(", ")));
    }
    title.push_str("  [/]: scroll  d: hide");
    title
}
