// Per-team mean of a metric, for the team bar chart.

use std::collections::BTreeMap;

use crate::data::PlayerSeasonRecord;
use crate::metric::Metric;

/// Mean of the selected metric for one team.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMean {
    pub team: String,
    pub mean: f64,
    /// Rows that contributed to the mean.
    pub players: usize,
}

/// Grouped means for one metric, ordered alphabetically by team code.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamAggregate {
    pub metric: Metric,
    pub teams: Vec<TeamMean>,
}

impl TeamAggregate {
    pub fn title(&self) -> String {
        format!("Average {} by Team", self.metric.column())
    }

    pub fn get(&self, team: &str) -> Option<f64> {
        self.teams.iter().find(|t| t.team == team).map(|t| t.mean)
    }

    /// Integer bar heights scaled by `scale`, measured from a baseline of
    /// `min(0, lowest mean)` so negative means stay drawable. Every team
    /// keeps a stub of at least 1.
    pub fn bar_heights(&self, scale: f64) -> Vec<u64> {
        let baseline = self
            .teams
            .iter()
            .map(|t| t.mean)
            .fold(0.0_f64, f64::min);
        self.teams
            .iter()
            .map(|t| ((t.mean - baseline) * scale).round().max(1.0) as u64)
            .collect()
    }
}

/// Group rows by team abbreviation and average the metric within each group.
pub fn team_means(rows: &[&PlayerSeasonRecord], metric: Metric) -> TeamAggregate {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for row in rows {
        let entry = groups.entry(row.team.as_str()).or_insert((0.0, 0));
        entry.0 += row.metric(metric);
        entry.1 += 1;
    }

    let teams = groups
        .into_iter()
        .map(|(team, (sum, n))| TeamMean {
            team: team.to_string(),
            mean: sum / n as f64,
            players: n,
        })
        .collect();

    TeamAggregate { metric, teams }
}
