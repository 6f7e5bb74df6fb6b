// Keyboard input handling and command dispatch.
//
// Translates crossterm key events into UserCommand messages for the
// orchestrator, or into local ViewState mutations (tab switching, focus,
// cursor movement, scrolling).

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use courtside_core::view::PlayerSlot;

use super::widgets::team_chart;
use super::{Focus, ViewState};
use crate::protocol::{TabId, UserCommand};

/// Slider step for PageUp/PageDown.
const GAMES_PAGE_STEP: u32 = 5;

/// Lines moved per PageUp/PageDown in scrollable panels.
const PAGE_SIZE: usize = 10;

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand)` when the key changes an input the dashboard
/// depends on. Returns `None` when the key was handled locally.
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // crossterm reports Release events on some platforms
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL) && key_event.code == KeyCode::Char('c') {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    match key_event.code {
        KeyCode::Char('1') => {
            view_state.active_tab = TabId::Summary;
            None
        }
        KeyCode::Char('2') => {
            view_state.active_tab = TabId::Visual;
            None
        }
        KeyCode::Char('3') => {
            view_state.active_tab = TabId::Comparison;
            None
        }
        KeyCode::Tab => {
            view_state.focus = view_state.focus.next();
            None
        }
        KeyCode::Char('d') => {
            view_state.preview_open = !view_state.preview_open;
            None
        }
        KeyCode::Char('[') => {
            scroll_up(view_state, "preview", 1);
            None
        }
        KeyCode::Char(']') => {
            scroll_down(view_state, "preview", 1);
            None
        }
        KeyCode::Char('p') if view_state.active_tab == TabId::Comparison => {
            view_state.active_slot = match view_state.active_slot {
                PlayerSlot::First => PlayerSlot::Second,
                PlayerSlot::Second => PlayerSlot::First,
            };
            None
        }
        KeyCode::Char('r') => Some(UserCommand::Reload),
        KeyCode::Char('q') => {
            view_state.confirm_quit = true;
            None
        }
        _ => match view_state.focus {
            Focus::Teams => handle_teams(key_event, view_state),
            Focus::MinGames => handle_slider(key_event, view_state),
            Focus::Main => handle_main(key_event, view_state),
        },
    }
}

/// `y`/`q` confirm, `n`/Esc cancel, everything else is swallowed.
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

fn handle_teams(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let team_count = view_state.view.as_ref().map_or(0, |v| v.team_options.len());
    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => {
            view_state.team_cursor = view_state.team_cursor.saturating_sub(1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if view_state.team_cursor + 1 < team_count {
                view_state.team_cursor += 1;
            }
            None
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            let view = view_state.view.as_ref()?;
            let team = view.team_options.get(view_state.team_cursor)?;
            Some(UserCommand::ToggleTeam(team.clone()))
        }
        KeyCode::Char('a') => Some(UserCommand::SelectAllTeams),
        KeyCode::Char('n') => Some(UserCommand::ClearTeams),
        _ => None,
    }
}

fn handle_slider(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    let max = view_state.view.as_ref()?.max_games;
    let current = view_state.min_games;
    let target = match key_event.code {
        KeyCode::Left | KeyCode::Char('h') => current.saturating_sub(1),
        KeyCode::Right | KeyCode::Char('l') => current.saturating_add(1),
        KeyCode::PageDown => current.saturating_sub(GAMES_PAGE_STEP),
        KeyCode::PageUp => current.saturating_add(GAMES_PAGE_STEP),
        KeyCode::Home => 0,
        KeyCode::End => max,
        _ => return None,
    }
    .min(max);

    if target == current {
        return None;
    }
    view_state.min_games = target;
    Some(UserCommand::SetMinGames(target))
}

fn handle_main(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match view_state.active_tab {
        TabId::Summary => {
            match key_event.code {
                KeyCode::Up | KeyCode::Char('k') => scroll_up(view_state, "summary", 1),
                KeyCode::Down | KeyCode::Char('j') => scroll_down(view_state, "summary", 1),
                KeyCode::PageUp => scroll_up(view_state, "summary", PAGE_SIZE),
                KeyCode::PageDown => scroll_down(view_state, "summary", PAGE_SIZE),
                _ => {}
            }
            None
        }
        TabId::Visual => {
            let metric = view_state.view.as_ref()?.selections.metric;
            match key_event.code {
                KeyCode::Right | KeyCode::Char('l') => Some(UserCommand::SetMetric(metric.next())),
                KeyCode::Left | KeyCode::Char('h') => Some(UserCommand::SetMetric(metric.prev())),
                KeyCode::Up | KeyCode::Char('k') => {
                    scroll_up(view_state, team_chart::SCROLL_KEY, 1);
                    None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    scroll_down(view_state, team_chart::SCROLL_KEY, 1);
                    None
                }
                _ => None,
            }
        }
        TabId::Comparison => match key_event.code {
            KeyCode::Down | KeyCode::Char('j') => step_player(view_state, true),
            KeyCode::Up | KeyCode::Char('k') => step_player(view_state, false),
            _ => None,
        },
    }
}

/// Move the active picker one entry through the filtered player list.
///
/// A current pick that is no longer in the list restarts from the top.
fn step_player(view_state: &ViewState, forward: bool) -> Option<UserCommand> {
    let view = view_state.view.as_ref()?;
    let options = &view.player_options;
    if options.is_empty() {
        return None;
    }
    let slot = view_state.active_slot;
    let current = view
        .selections
        .player(slot)
        .and_then(|name| options.iter().position(|o| o == name));

    let next = match current {
        None => 0,
        Some(i) if forward => (i + 1).min(options.len() - 1),
        Some(i) => i.saturating_sub(1),
    };
    if current == Some(next) {
        return None;
    }
    Some(UserCommand::SetPlayer {
        slot,
        name: options[next].clone(),
    })
}

fn scroll_up(view_state: &mut ViewState, key: &str, lines: usize) {
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_sub(lines);
}

fn scroll_down(view_state: &mut ViewState, key: &str, lines: usize) {
    let offset = view_state.scroll_offset.entry(key.to_string()).or_insert(0);
    *offset = offset.saturating_add(lines);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::tests::loaded_state;
    use courtside_core::metric::Metric;
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn ctrl_key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    // -- Global keys --

    #[test]
    fn number_keys_switch_tabs() {
        let mut state = ViewState::default();
        assert!(handle_key(key(KeyCode::Char('2')), &mut state).is_none());
        assert_eq!(state.active_tab, TabId::Visual);
        handle_key(key(KeyCode::Char('3')), &mut state);
        assert_eq!(state.active_tab, TabId::Comparison);
        handle_key(key(KeyCode::Char('1')), &mut state);
        assert_eq!(state.active_tab, TabId::Summary);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut state = ViewState::default();
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, Focus::MinGames);
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, Focus::Main);
        handle_key(key(KeyCode::Tab), &mut state);
        assert_eq!(state.focus, Focus::Teams);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut state = ViewState::default();
        let mut event = key(KeyCode::Char('2'));
        event.kind = KeyEventKind::Release;
        assert!(handle_key(event, &mut state).is_none());
        assert_eq!(state.active_tab, TabId::Summary);
    }

    #[test]
    fn r_requests_reload() {
        let mut state = ViewState::default();
        assert_eq!(handle_key(key(KeyCode::Char('r')), &mut state), Some(UserCommand::Reload));
    }

    #[test]
    fn d_toggles_preview_and_brackets_scroll_it() {
        let mut state = ViewState::default();
        handle_key(key(KeyCode::Char('d')), &mut state);
        assert!(state.preview_open);
        handle_key(key(KeyCode::Char(']')), &mut state);
        handle_key(key(KeyCode::Char(']')), &mut state);
        handle_key(key(KeyCode::Char('[')), &mut state);
        assert_eq!(state.scroll("preview"), 1);
        handle_key(key(KeyCode::Char('d')), &mut state);
        assert!(!state.preview_open);
    }

    // -- Quit --

    #[test]
    fn ctrl_c_quits_immediately() {
        let mut state = ViewState::default();
        assert_eq!(handle_key(ctrl_key(KeyCode::Char('c')), &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn q_asks_for_confirmation() {
        let mut state = ViewState::default();
        assert!(handle_key(key(KeyCode::Char('q')), &mut state).is_none());
        assert!(state.confirm_quit);
        assert_eq!(handle_key(key(KeyCode::Char('y')), &mut state), Some(UserCommand::Quit));
    }

    #[test]
    fn confirm_quit_cancel_and_block() {
        let mut state = ViewState::default();
        state.confirm_quit = true;
        assert!(handle_key(key(KeyCode::Char('2')), &mut state).is_none());
        assert_eq!(state.active_tab, TabId::Summary);
        assert!(state.confirm_quit);
        handle_key(key(KeyCode::Esc), &mut state);
        assert!(!state.confirm_quit);
    }

    // -- Teams --

    #[test]
    fn team_cursor_moves_within_bounds() {
        let mut state = loaded_state();
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.team_cursor, 0);
        for _ in 0..10 {
            handle_key(key(KeyCode::Down), &mut state);
        }
        assert_eq!(state.team_cursor, 2);
    }

    #[test]
    fn space_toggles_team_under_cursor() {
        let mut state = loaded_state();
        handle_key(key(KeyCode::Down), &mut state);
        assert_eq!(
            handle_key(key(KeyCode::Char(' ')), &mut state),
            Some(UserCommand::ToggleTeam("BOS".into()))
        );
    }

    #[test]
    fn a_and_n_select_all_and_clear() {
        let mut state = loaded_state();
        assert_eq!(handle_key(key(KeyCode::Char('a')), &mut state), Some(UserCommand::SelectAllTeams));
        assert_eq!(handle_key(key(KeyCode::Char('n')), &mut state), Some(UserCommand::ClearTeams));
    }

    #[test]
    fn toggle_without_view_is_noop() {
        let mut state = ViewState::default();
        assert!(handle_key(key(KeyCode::Char(' ')), &mut state).is_none());
    }

    // -- Slider --

    #[test]
    fn slider_steps_and_clamps() {
        let mut state = loaded_state();
        state.focus = Focus::MinGames;
        assert_eq!(handle_key(key(KeyCode::Right), &mut state), Some(UserCommand::SetMinGames(1)));
        assert_eq!(handle_key(key(KeyCode::PageUp), &mut state), Some(UserCommand::SetMinGames(6)));
        assert_eq!(handle_key(key(KeyCode::End), &mut state), Some(UserCommand::SetMinGames(80)));
        assert!(handle_key(key(KeyCode::Right), &mut state).is_none());
        assert_eq!(state.min_games, 80);
        assert_eq!(handle_key(key(KeyCode::Home), &mut state), Some(UserCommand::SetMinGames(0)));
        assert!(handle_key(key(KeyCode::Left), &mut state).is_none());
    }

    // -- Main panel --

    #[test]
    fn visual_tab_arrows_cycle_metric() {
        let mut state = loaded_state();
        state.focus = Focus::Main;
        state.active_tab = TabId::Visual;
        assert_eq!(
            handle_key(key(KeyCode::Right), &mut state),
            Some(UserCommand::SetMetric(Metric::Rebounds))
        );
        assert_eq!(
            handle_key(key(KeyCode::Left), &mut state),
            Some(UserCommand::SetMetric(Metric::PlusMinus))
        );
    }

    #[test]
    fn visual_tab_up_down_scroll_bars() {
        let mut state = loaded_state();
        state.focus = Focus::Main;
        state.active_tab = TabId::Visual;
        assert!(handle_key(key(KeyCode::Down), &mut state).is_none());
        assert!(handle_key(key(KeyCode::Down), &mut state).is_none());
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.scroll(team_chart::SCROLL_KEY), 1);
    }

    #[test]
    fn summary_tab_arrows_scroll() {
        let mut state = loaded_state();
        state.focus = Focus::Main;
        handle_key(key(KeyCode::PageDown), &mut state);
        handle_key(key(KeyCode::Up), &mut state);
        assert_eq!(state.scroll("summary"), PAGE_SIZE - 1);
    }

    #[test]
    fn comparison_tab_picks_players_for_active_slot() {
        let mut state = loaded_state();
        state.focus = Focus::Main;
        state.active_tab = TabId::Comparison;
        assert_eq!(
            handle_key(key(KeyCode::Down), &mut state),
            Some(UserCommand::SetPlayer {
                slot: PlayerSlot::First,
                name: "Bravo Wing".into()
            })
        );
        assert!(handle_key(key(KeyCode::Char('p')), &mut state).is_none());
        assert_eq!(state.active_slot, PlayerSlot::Second);
        // Already at the top of the list
        assert!(handle_key(key(KeyCode::Up), &mut state).is_none());
    }

    #[test]
    fn p_outside_comparison_tab_does_not_switch_slot() {
        let mut state = loaded_state();
        handle_key(key(KeyCode::Char('p')), &mut state);
        assert_eq!(state.active_slot, PlayerSlot::First);
    }
}
