// Player Comparison tab: two players on a six-axis radar.
//
// +-- players (slot pickers) ---------------------------+
// | radar canvas                 | raw / normalized table|
// +------------------------------+-----------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::{Line, Span};
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

use courtside_core::comparison::{axis_angle, polar_to_xy, RadarComparison};
use courtside_core::data::format_value;
use courtside_core::metric::RADAR_METRICS;
use courtside_core::view::{DashboardView, PlayerSlot};

use crate::tui::ViewState;

const TITLE: &str = "Player Comparison";

/// Trace colors for the first and second player.
const TRACE_COLORS: [Color; 2] = [Color::Cyan, Color::Magenta];

/// Grid rings drawn behind the traces, as fractions of the full radius.
const GRID_RINGS: [f64; 2] = [0.5, 1.0];

/// Axis labels sit just outside the outer ring.
const LABEL_RADIUS: f64 = 1.15;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let Some(view) = &state.view else {
        super::render_message(frame, area, TITLE, "Loading...", focused);
        return;
    };

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(area);

    render_pickers(frame, sections[0], view, state.active_slot, focused);

    match &view.comparison {
        Ok(cmp) => {
            let body = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(sections[1]);
            render_canvas(frame, body[0], cmp);
            render_table(frame, body[1], cmp);
        }
        Err(e) => super::render_message(frame, sections[1], "Radar", &e.to_string(), false),
    }
}

fn render_pickers(frame: &mut Frame, area: Rect, view: &DashboardView, active: PlayerSlot, focused: bool) {
    let mut spans = Vec::new();
    for (i, slot) in [PlayerSlot::First, PlayerSlot::Second].into_iter().enumerate() {
        let name = view.selections.player(slot).unwrap_or("-");
        let mut style = Style::default().fg(TRACE_COLORS[i]);
        if slot == active {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        spans.push(Span::raw(format!(" Player {}: ", i + 1)));
        spans.push(Span::styled(name.to_string(), style));
    }

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(super::focus_border(focused))
            .title(format!("{TITLE} ({} players)  p: switch slot", view.player_options.len())),
    );
    frame.render_widget(paragraph, area);
}

fn render_canvas(frame: &mut Frame, area: Rect, cmp: &RadarComparison) {
    let n = RADAR_METRICS.len();
    let canvas = Canvas::default()
        .block(Block::default().borders(Borders::ALL).title("Radar"))
        .marker(Marker::Braille)
        .x_bounds([-1.4, 1.4])
        .y_bounds([-1.3, 1.3])
        .paint(move |ctx| {
            for radius in GRID_RINGS {
                for ((x1, y1), (x2, y2)) in segments(&ring(radius, n)) {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, Color::DarkGray));
                }
            }
            for (i, metric) in RADAR_METRICS.iter().enumerate() {
                let (x, y) = polar_to_xy(1.0, axis_angle(i, n));
                ctx.draw(&CanvasLine::new(0.0, 0.0, x, y, Color::DarkGray));
                let (lx, ly) = polar_to_xy(LABEL_RADIUS, axis_angle(i, n));
                ctx.print(lx, ly, Span::styled(metric.column(), Style::default().fg(Color::Gray)));
            }
            ctx.layer();
            for (trace, color) in cmp.traces.iter().zip(TRACE_COLORS) {
                for ((x1, y1), (x2, y2)) in segments(&trace.polygon()) {
                    ctx.draw(&CanvasLine::new(x1, y1, x2, y2, color));
                }
            }
        });
    frame.render_widget(canvas, area);
}

fn render_table(frame: &mut Frame, area: Rect, cmp: &RadarComparison) {
    let header = Row::new(vec![
        Cell::from("Stat"),
        Cell::from(Span::styled(short_name(&cmp.traces[0].player), Style::default().fg(TRACE_COLORS[0]))),
        Cell::from("norm"),
        Cell::from(Span::styled(short_name(&cmp.traces[1].player), Style::default().fg(TRACE_COLORS[1]))),
        Cell::from("norm"),
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = cmp.traces[0]
        .axes
        .iter()
        .zip(&cmp.traces[1].axes)
        .map(|(a, b)| {
            let flat = cmp.flat_metrics.contains(&a.metric);
            let style = if flat {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            Row::new(vec![
                a.metric.column().to_string(),
                format_value(a.raw),
                format!("{:.2}", a.normalized),
                format_value(b.raw),
                format!("{:.2}", b.normalized),
            ])
            .style(style)
        })
        .collect();

    let mut title = String::from("Values");
    if !cmp.flat_metrics.is_empty() {
        let flat: Vec<&str> = cmp.flat_metrics.iter().map(|m| m.column()).collect();
        title.push_str(&format!(" (flat: {})", flat.join(", ")));
    }

    let widths = [
        Constraint::Length(5),
        Constraint::Min(6),
        Constraint::Length(5),
        Constraint::Min(6),
        Constraint::Length(5),
    ];
    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

/// Closed polygon of `n` vertices at `radius`, one per axis.
pub fn ring(radius: f64, n: usize) -> Vec<(f64, f64)> {
    let mut points: Vec<(f64, f64)> = (0..n).map(|i| polar_to_xy(radius, axis_angle(i, n))).collect();
    if let Some(&first) = points.first() {
        points.push(first);
    }
    points
}

/// Consecutive point pairs of a polyline.
pub fn segments(points: &[(f64, f64)]) -> Vec<((f64, f64), (f64, f64))> {
    points.windows(2).map(|w| (w[0], w[1])).collect()
}

/// Last name for narrow table headers.
pub fn short_name(name: &str) -> String {
    name.rsplit(' ').next().unwrap_or(name).to_string()
}
