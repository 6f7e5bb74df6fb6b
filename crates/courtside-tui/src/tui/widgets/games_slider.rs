// Minimum games slider, drawn as a gauge over [0, max GP].

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Gauge};
use ratatui::Frame;

use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, focused: bool) {
    let max = state.view.as_ref().map_or(0, |v| v.max_games);

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(super::focus_border(focused))
                .title("Min games"),
        )
        .gauge_style(Style::default().fg(Color::Blue).bg(Color::Black))
        .ratio(slider_ratio(state.min_games, max))
        .label(format!("{} / {}", state.min_games, max));

    frame.render_widget(gauge, area);
}

/// Filled fraction of the slider, always within [0, 1].
pub fn slider_ratio(value: u32, max: u32) -> f64 {
    if max == 0 {
        0.0
    } else {
        (f64::from(value) / f64::from(max)).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::loaded_state;

    #[test]
    fn slider_ratio_bounds() {
        assert_eq!(slider_ratio(0, 0), 0.0);
        assert_eq!(slider_ratio(40, 80), 0.5);
        assert_eq!(slider_ratio(90, 80), 1.0);
    }

    #[test]
    fn render_does_not_panic() {
        let backend = ratatui::backend::TestBackend::new(26, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = loaded_state();
        state.min_games = 65;
        terminal
            .draw(|frame| render(frame, frame.area(), &state, true))
            .unwrap();
        let empty = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &empty, false))
            .unwrap();
    }
}
