// Dashboard view assembly.
//
// `render` is the whole dashboard as a pure function: it takes the loaded
// table and the user's selections and returns everything the three tabs and
// the preview need. Nothing is cached between calls.

use crate::comparison::{compare_players, RadarComparison};
use crate::config::FilterDefaults;
use crate::data::{Dataset, PlayerSeasonRecord};
use crate::filter::{distinct_player_names, distinct_teams, max_games_played, TeamGamesFilter};
use crate::metric::Metric;
use crate::stats::aggregate::{team_means, TeamAggregate};
use crate::stats::summary::{describe, SummaryTable};

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Degenerate inputs to the comparison views.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ViewError {
    #[error("no players match the current filters")]
    EmptyFilteredSet,

    #[error("every filtered player has the same {metric} value")]
    DegenerateNormalizationRange { metric: Metric },

    #[error("player `{player}` is not in the filtered set")]
    PlayerNotFoundInFilteredSet { player: String },
}

// ---------------------------------------------------------------------------
// Selections
// ---------------------------------------------------------------------------

/// Which of the two comparison pickers a command targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerSlot {
    First,
    Second,
}

/// The user's inputs, as chosen. `None` means "use the default".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selections {
    /// Selected teams; `None` selects every team in the data.
    pub teams: Option<Vec<String>>,
    pub min_games: u32,
    pub metric: Metric,
    pub player1: Option<String>,
    pub player2: Option<String>,
}

impl Selections {
    pub fn from_defaults(defaults: &FilterDefaults) -> Self {
        Selections {
            teams: None,
            min_games: defaults.default_min_games,
            metric: defaults.default_metric,
            player1: None,
            player2: None,
        }
    }

    /// Flip one team in or out of the selection. `all_teams` materializes the
    /// default selection the first time a team is toggled.
    pub fn toggle_team(&mut self, team: &str, all_teams: &[String]) {
        let teams = self.teams.get_or_insert_with(|| all_teams.to_vec());
        if let Some(pos) = teams.iter().position(|t| t == team) {
            teams.remove(pos);
        } else {
            teams.push(team.to_string());
        }
    }

    pub fn select_all_teams(&mut self) {
        self.teams = None;
    }

    pub fn clear_teams(&mut self) {
        self.teams = Some(Vec::new());
    }

    pub fn set_player(&mut self, slot: PlayerSlot, name: String) {
        match slot {
            PlayerSlot::First => self.player1 = Some(name),
            PlayerSlot::Second => self.player2 = Some(name),
        }
    }

    pub fn player(&self, slot: PlayerSlot) -> Option<&str> {
        match slot {
            PlayerSlot::First => self.player1.as_deref(),
            PlayerSlot::Second => self.player2.as_deref(),
        }
    }
}

/// Selections after defaults and clamping have been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSelections {
    pub teams: Vec<String>,
    pub min_games: u32,
    pub metric: Metric,
    pub player1: Option<String>,
    pub player2: Option<String>,
}

impl ResolvedSelections {
    pub fn player(&self, slot: PlayerSlot) -> Option<&str> {
        match slot {
            PlayerSlot::First => self.player1.as_deref(),
            PlayerSlot::Second => self.player2.as_deref(),
        }
    }
}

// ---------------------------------------------------------------------------
// DashboardView
// ---------------------------------------------------------------------------

/// Everything the presentation layer draws for one set of selections.
#[derive(Debug, Clone)]
pub struct DashboardView {
    /// Path or label the data was read from.
    pub source: String,
    /// Rows in the table before filtering.
    pub total_rows: usize,
    /// Preview columns in header order.
    pub columns: Vec<String>,
    pub extra_columns: Vec<String>,
    /// Identifier columns removed on load.
    pub dropped_columns: Vec<String>,
    /// Multi-select options: every team in the data, first-appearance order.
    pub team_options: Vec<String>,
    /// Upper bound of the games slider.
    pub max_games: u32,
    pub selections: ResolvedSelections,
    /// The filtered set, in input order.
    pub rows: Vec<PlayerSeasonRecord>,
    pub summary: SummaryTable,
    pub team_chart: TeamAggregate,
    /// Player picker options from the filtered set.
    pub player_options: Vec<String>,
    pub comparison: Result<RadarComparison, ViewError>,
}

impl DashboardView {
    /// Display cells of a filtered row, aligned with `columns`.
    pub fn preview_cells(&self, row: &PlayerSeasonRecord) -> Vec<String> {
        self.columns
            .iter()
            .map(|c| row.cell(c, &self.extra_columns).unwrap_or_default())
            .collect()
    }

    pub fn is_team_selected(&self, team: &str) -> bool {
        self.selections.teams.iter().any(|t| t == team)
    }
}

/// Compute the whole dashboard for one set of selections.
pub fn render(dataset: &Dataset, selections: &Selections) -> DashboardView {
    let team_options = distinct_teams(&dataset.records);
    let max_games = max_games_played(&dataset.records);

    let teams = selections
        .teams
        .clone()
        .unwrap_or_else(|| team_options.clone());
    let min_games = selections.min_games.min(max_games);

    let filter = TeamGamesFilter::new(teams, min_games);
    let filtered = filter.apply(&dataset.records);

    let summary = describe(dataset, &filtered);
    let team_chart = team_means(&filtered, selections.metric);

    let player_options = distinct_player_names(&filtered);
    let default_player = player_options.first().cloned();
    let player1 = selections.player1.clone().or_else(|| default_player.clone());
    let player2 = selections.player2.clone().or(default_player);

    let comparison = match (&player1, &player2) {
        (Some(p1), Some(p2)) => compare_players(&filtered, p1, p2),
        _ => Err(ViewError::EmptyFilteredSet),
    };

    DashboardView {
        source: dataset.source.clone(),
        total_rows: dataset.len(),
        columns: dataset.columns.clone(),
        extra_columns: dataset.extra_columns.clone(),
        dropped_columns: dataset.dropped_columns.clone(),
        team_options,
        max_games,
        selections: ResolvedSelections {
            teams: filter.teams,
            min_games,
            metric: selections.metric,
            player1,
            player2,
        },
        rows: filtered.into_iter().cloned().collect(),
        summary,
        team_chart,
        player_options,
        comparison,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::load_from_reader;

    const CSV: &str = "\
PLAYER_ID,PLAYER_NAME,TEAM_ABBREVIATION,GP,PTS,REB,AST,STL,BLK,TOV,PLUS_MINUS
1,Alpha,LAL,70,20,8,4,1.2,0.4,2.0,3.0
2,Bravo,BOS,65,10,4,6,0.8,0.9,1.5,-1.0
3,Charlie,LAL,5,30,6,2,1.6,0.2,3.0,5.0
4,Delta,GSW,80,25,5,7,1.0,0.3,2.5,2.0";

    fn dataset() -> Dataset {
        load_from_reader(CSV.as_bytes(), "fixture").unwrap()
    }

    #[test]
    fn default_selections_keep_everything() {
        let view = render(&dataset(), &Selections::default());
        assert_eq!(view.total_rows, 4);
        assert_eq!(view.rows.len(), 4);
        assert_eq!(view.team_options, vec!["LAL", "BOS", "GSW"]);
        assert_eq!(view.selections.teams, view.team_options);
        assert_eq!(view.max_games, 80);
        assert_eq!(view.dropped_columns, vec!["PLAYER_ID"]);
        assert!(!view.columns.iter().any(|c| c == "PLAYER_ID"));
        assert_eq!(view.selections.player1.as_deref(), Some("Alpha"));
        assert_eq!(view.selections.player2.as_deref(), Some("Alpha"));
        let cmp = view.comparison.as_ref().unwrap();
        assert_eq!(cmp.traces[0], cmp.traces[1]);
    }

    #[test]
    fn filters_flow_into_every_view() {
        let selections = Selections {
            teams: Some(vec!["LAL".into(), "BOS".into()]),
            min_games: 10,
            metric: Metric::Points,
            player1: Some("Alpha".into()),
            player2: Some("Bravo".into()),
        };
        let view = render(&dataset(), &selections);

        let names: Vec<&str> = view.rows.iter().map(|r| r.player_name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Bravo"]);
        assert_eq!(view.summary.get("PTS").unwrap().count, 2);
        assert_eq!(view.team_chart.teams.len(), 2);
        assert!((view.team_chart.get("LAL").unwrap() - 20.0).abs() < 1e-9);
        assert_eq!(view.player_options, vec!["Alpha", "Bravo"]);
        assert!(view.comparison.is_ok());
    }

    #[test]
    fn min_games_is_clamped_to_observed_max() {
        let selections = Selections {
            min_games: 500,
            ..Selections::default()
        };
        let view = render(&dataset(), &selections);
        assert_eq!(view.selections.min_games, 80);
        assert_eq!(view.rows.len(), 1);
    }

    #[test]
    fn empty_team_selection_is_tolerated() {
        let mut selections = Selections::default();
        selections.clear_teams();
        let view = render(&dataset(), &selections);
        assert!(view.rows.is_empty());
        assert!(view.team_chart.teams.is_empty());
        assert!(view.player_options.is_empty());
        assert_eq!(view.summary.get("PTS").unwrap().count, 0);
        assert!(view.summary.get("PTS").unwrap().mean.is_nan());
        assert_eq!(view.comparison.unwrap_err(), ViewError::EmptyFilteredSet);
    }

    #[test]
    fn filtered_out_player_is_reported() {
        let selections = Selections {
            min_games: 10,
            player1: Some("Charlie".into()),
            ..Selections::default()
        };
        let view = render(&dataset(), &selections);
        assert_eq!(
            view.comparison.unwrap_err(),
            ViewError::PlayerNotFoundInFilteredSet {
                player: "Charlie".into()
            }
        );
    }

    #[test]
    fn toggle_team_materializes_default_selection() {
        let all = vec!["LAL".to_string(), "BOS".to_string(), "GSW".to_string()];
        let mut selections = Selections::default();
        selections.toggle_team("BOS", &all);
        assert_eq!(selections.teams, Some(vec!["LAL".into(), "GSW".into()]));
        selections.toggle_team("BOS", &all);
        assert_eq!(selections.teams, Some(vec!["LAL".into(), "GSW".into(), "BOS".into()]));
        selections.select_all_teams();
        assert!(selections.teams.is_none());
    }

    #[test]
    fn preview_cells_follow_columns() {
        let view = render(&dataset(), &Selections::default());
        assert_eq!(view.columns[0], "PLAYER_NAME");
        let cells = view.preview_cells(&view.rows[1]);
        assert_eq!(cells.len(), view.columns.len());
        assert_eq!(cells[0], "Bravo");
        assert_eq!(cells[1], "BOS");
        assert_eq!(cells[2], "65");
    }

    #[test]
    fn render_is_repeatable() {
        let data = dataset();
        let selections = Selections {
            metric: Metric::Assists,
            ..Selections::default()
        };
        let a = render(&data, &selections);
        let b = render(&data, &selections);
        assert_eq!(a.rows, b.rows);
        assert_eq!(a.team_chart, b.team_chart);
        assert_eq!(a.comparison, b.comparison);
    }
}
