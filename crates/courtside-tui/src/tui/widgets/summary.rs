// Summary tab: descriptive statistics of the filtered set.
//
// One row per summarized column, one column per statistic
// (count, mean, std, min, quartiles, max).

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table};
use ratatui::Frame;

use courtside_core::stats::summary::{ColumnSummary, STAT_LABELS};

use crate::tui::ViewState;

const TITLE: &str = "Summary";

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let Some(view) = &state.view else {
        super::render_message(frame, area, TITLE, "Loading...", focused);
        return;
    };

    let header = Row::new(
        std::iter::once("column")
            .chain(STAT_LABELS)
            .map(Cell::from)
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));

    let visible = (area.height as usize).saturating_sub(3);
    let total = view.summary.columns.len();
    let offset = state.scroll("summary").min(total.saturating_sub(visible));

    let rows: Vec<Row> = view
        .summary
        .columns
        .iter()
        .skip(offset)
        .map(|c| Row::new(summary_cells(c)))
        .collect();

    let mut widths = vec![Constraint::Length(12)];
    widths.extend(STAT_LABELS.iter().map(|_| Constraint::Length(9)));

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(super::focus_border(focused))
            .title(format!("{TITLE} ({} players)", view.rows.len())),
    );
    frame.render_widget(table, area);
}

/// Column name followed by each statistic in `STAT_LABELS` order.
pub fn summary_cells(summary: &ColumnSummary) -> Vec<String> {
    let mut cells = vec![summary.column.clone(), summary.stats.count.to_string()];
    for label in &STAT_LABELS[1..] {
        cells.push(format_stat(summary.stats.by_label(label).unwrap_or(f64::NAN)));
    }
    cells
}

/// Two decimals, or "NaN" for undefined statistics.
pub fn format_stat(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::{buffer_text, loaded_state, sample_view};
    use courtside_core::view::Selections;

    #[test]
    fn format_stat_handles_nan() {
        assert_eq!(format_stat(f64::NAN), "NaN");
        assert_eq!(format_stat(21.456), "21.46");
    }

    #[test]
    fn summary_cells_follow_stat_labels() {
        let state = loaded_state();
        let view = state.view.as_ref().unwrap();
        let pts = view.summary.columns.iter().find(|c| c.column == "PTS").unwrap();
        let cells = summary_cells(pts);
        assert_eq!(cells.len(), STAT_LABELS.len() + 1);
        assert_eq!(cells[0], "PTS");
        assert_eq!(cells[1], "4");
        assert_eq!(cells[2], "21.25");
        assert_eq!(cells[4], "10.00");
        assert_eq!(cells[8], "30.00");
    }

    #[test]
    fn empty_selection_renders_nan_row() {
        let backend = ratatui::backend::TestBackend::new(100, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = loaded_state();
        let mut selections = Selections::default();
        selections.clear_teams();
        state.view = Some(sample_view(&selections));
        terminal
            .draw(|frame| render(frame, frame.area(), &state, false))
            .unwrap();
        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("(0 players)"));
        assert!(text.contains("NaN"));
    }

    #[test]
    fn render_does_not_panic_scrolled_past_end() {
        let backend = ratatui::backend::TestBackend::new(100, 8);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = loaded_state();
        state.scroll_offset.insert("summary".into(), 500);
        terminal
            .draw(|frame| render(frame, frame.area(), &state, true))
            .unwrap();
    }
}
