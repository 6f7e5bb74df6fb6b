// Filter stage: team membership and minimum games played.

use std::collections::HashSet;

use crate::data::PlayerSeasonRecord;

/// Resolved filter inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamGamesFilter {
    /// Team abbreviations to keep. Empty keeps nothing.
    pub teams: Vec<String>,
    /// Inclusive lower bound on games played.
    pub min_games: u32,
}

impl TeamGamesFilter {
    pub fn new(teams: Vec<String>, min_games: u32) -> Self {
        TeamGamesFilter { teams, min_games }
    }

    /// True when a row passes both predicates.
    pub fn matches(&self, record: &PlayerSeasonRecord) -> bool {
        record.games_played >= self.min_games && self.teams.iter().any(|t| *t == record.team)
    }

    /// Keep matching rows, preserving input order.
    pub fn apply<'a>(&self, records: &'a [PlayerSeasonRecord]) -> Vec<&'a PlayerSeasonRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

/// Distinct team abbreviations in order of first appearance.
pub fn distinct_teams(records: &[PlayerSeasonRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.team.as_str()))
        .map(|r| r.team.clone())
        .collect()
}

/// Distinct player names in order of first appearance.
pub fn distinct_player_names(records: &[&PlayerSeasonRecord]) -> Vec<String> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.player_name.as_str()))
        .map(|r| r.player_name.clone())
        .collect()
}

/// Largest games-played value, or 0 for an empty table.
pub fn max_games_played(records: &[PlayerSeasonRecord]) -> u32 {
    records.iter().map(|r| r.games_played).max().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, team: &str, gp: u32) -> PlayerSeasonRecord {
        PlayerSeasonRecord {
            player_name: name.to_string(),
            team: team.to_string(),
            games_played: gp,
            pts: 10.0,
            reb: 5.0,
            ast: 3.0,
            stl: 1.0,
            blk: 0.5,
            tov: 1.5,
            plus_minus: 0.0,
            extra: Vec::new(),
        }
    }

    fn sample() -> Vec<PlayerSeasonRecord> {
        vec![
            player("A", "LAL", 70),
            player("B", "BOS", 9),
            player("C", "GSW", 80),
            player("D", "BOS", 10),
            player("E", "LAL", 3),
            player("F", "MIA", 50),
        ]
    }

    #[test]
    fn keeps_selected_teams_above_threshold() {
        let records = sample();
        let filter = TeamGamesFilter::new(vec!["LAL".into(), "BOS".into()], 10);
        let names: Vec<&str> = filter
            .apply(&records)
            .iter()
            .map(|r| r.player_name.as_str())
            .collect();
        assert_eq!(names, vec!["A", "D"]);
    }

    #[test]
    fn filter_is_sound_and_complete() {
        let records = sample();
        let team_sets: [&[&str]; 4] = [&[], &["LAL"], &["BOS", "MIA"], &["LAL", "BOS", "GSW", "MIA"]];
        for teams in team_sets {
            for min_games in [0, 3, 9, 10, 50, 81] {
                let filter =
                    TeamGamesFilter::new(teams.iter().map(|t| t.to_string()).collect(), min_games);
                let kept = filter.apply(&records);
                for r in &kept {
                    assert!(teams.contains(&r.team.as_str()) && r.games_played >= min_games);
                }
                let expected = records
                    .iter()
                    .filter(|r| teams.contains(&r.team.as_str()) && r.games_played >= min_games)
                    .count();
                assert_eq!(kept.len(), expected, "teams={teams:?} min={min_games}");
                for r in &records {
                    assert_eq!(filter.matches(r), kept.iter().any(|k| std::ptr::eq(*k, r)));
                }
            }
        }
    }

    #[test]
    fn empty_team_selection_yields_nothing() {
        let records = sample();
        let filter = TeamGamesFilter::new(Vec::new(), 0);
        assert!(filter.apply(&records).is_empty());
    }

    #[test]
    fn threshold_is_inclusive() {
        let records = sample();
        let filter = TeamGamesFilter::new(vec!["BOS".into()], 10);
        let kept = filter.apply(&records);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].games_played, 10);
    }

    #[test]
    fn distinct_teams_first_appearance_order() {
        assert_eq!(distinct_teams(&sample()), vec!["LAL", "BOS", "GSW", "MIA"]);
    }

    #[test]
    fn distinct_player_names_dedupes_traded_players() {
        let records = vec![player("X", "LAL", 20), player("Y", "BOS", 20), player("X", "BOS", 30)];
        let refs: Vec<&PlayerSeasonRecord> = records.iter().collect();
        assert_eq!(distinct_player_names(&refs), vec!["X", "Y"]);
    }

    #[test]
    fn max_games_played_handles_empty() {
        assert_eq!(max_games_played(&[]), 0);
        assert_eq!(max_games_played(&sample()), 80);
    }
}
