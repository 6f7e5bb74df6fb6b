// Visual Analysis tab: bar chart of the selected metric's mean per team.
//
// Bars run horizontally, one row per team, so a full league fits the panel
// width; the rows scroll when there are more teams than lines. Each label
// carries the team code, its mean and the number of players behind it.

use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders};
use ratatui::Frame;

use courtside_core::data::format_number;
use courtside_core::stats::aggregate::TeamAggregate;

use crate::tui::ViewState;

/// Bars are integer lengths; means are drawn at tenth-of-a-unit resolution.
const BAR_SCALE: f64 = 10.0;

pub const SCROLL_KEY: &str = "team_chart";

/// Per-team colors, cycled in chart order.
const PALETTE: [Color; 8] = [
    Color::Cyan,
    Color::Yellow,
    Color::Green,
    Color::Magenta,
    Color::LightBlue,
    Color::LightRed,
    Color::LightGreen,
    Color::Blue,
];

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let Some(view) = &state.view else {
        super::render_message(frame, area, "Visual Analysis", "Loading...", focused);
        return;
    };

    let chart = &view.team_chart;
    let mut title = format!("{} ({})  ←/→ metric", chart.title(), chart.metric.label());
    if chart.teams.is_empty() {
        super::render_message(frame, area, &title, "No players match the current filters.", focused);
        return;
    }

    let total = chart.teams.len();
    let visible = (area.height as usize).saturating_sub(2).max(1);
    let offset = state.scroll(SCROLL_KEY).min(total.saturating_sub(visible));
    if total > visible {
        let last = (offset + visible).min(total);
        title.push_str(&format!("  [{}-{} of {}] ↑/↓", offset + 1, last, total));
    }

    // Fixed maximum so bar lengths do not change while scrolling.
    let max = chart.bar_heights(BAR_SCALE).into_iter().max().unwrap_or(1);
    let bars: Vec<Bar> = build_bars(chart).into_iter().skip(offset).take(visible).collect();

    let bar_chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(super::focus_border(focused))
                .title(title),
        )
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .max(max)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(bar_chart, area);
}

/// One bar per team, in chart order, colored by team.
pub fn build_bars(chart: &TeamAggregate) -> Vec<Bar<'static>> {
    chart
        .teams
        .iter()
        .zip(chart.bar_heights(BAR_SCALE))
        .zip(bar_labels(chart))
        .enumerate()
        .map(|(i, ((_, height), label))| {
            Bar::default()
                .value(height)
                .label(Line::from(label))
                .text_value(String::new())
                .style(Style::default().fg(team_color(i)))
        })
        .collect()
}

/// Aligned "CODE  mean (players)" labels, e.g. "CHA -6.5 (3)".
pub fn bar_labels(chart: &TeamAggregate) -> Vec<String> {
    let means: Vec<String> = chart.teams.iter().map(|t| format_number(t.mean)).collect();
    let team_width = chart.teams.iter().map(|t| t.team.len()).max().unwrap_or(0);
    let mean_width = means.iter().map(String::len).max().unwrap_or(0);
    chart
        .teams
        .iter()
        .zip(&means)
        .map(|(t, mean)| format!("{:<team_width$} {:>mean_width$} ({})", t.team, mean, t.players))
        .collect()
}

pub fn team_color(index: usize) -> Color {
    PALETTE[index % PALETTE.len()]
}
