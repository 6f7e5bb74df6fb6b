// Performance metrics: the enumerated numeric columns of a player row.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the seven per-game performance columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[default]
    #[serde(rename = "PTS")]
    Points,
    #[serde(rename = "REB")]
    Rebounds,
    #[serde(rename = "AST")]
    Assists,
    #[serde(rename = "STL")]
    Steals,
    #[serde(rename = "BLK")]
    Blocks,
    #[serde(rename = "TOV")]
    Turnovers,
    #[serde(rename = "PLUS_MINUS")]
    PlusMinus,
}

/// Metric choices offered by the team chart picker, in display order.
pub const ALL_METRICS: [Metric; 7] = [
    Metric::Points,
    Metric::Rebounds,
    Metric::Assists,
    Metric::Steals,
    Metric::Blocks,
    Metric::Turnovers,
    Metric::PlusMinus,
];

/// Axes of the radar comparison. Plus/minus is deliberately absent.
pub const RADAR_METRICS: [Metric; 6] = [
    Metric::Points,
    Metric::Rebounds,
    Metric::Assists,
    Metric::Steals,
    Metric::Blocks,
    Metric::Turnovers,
];

impl Metric {
    /// CSV header for this metric.
    pub fn column(self) -> &'static str {
        match self {
            Metric::Points => "PTS",
            Metric::Rebounds => "REB",
            Metric::Assists => "AST",
            Metric::Steals => "STL",
            Metric::Blocks => "BLK",
            Metric::Turnovers => "TOV",
            Metric::PlusMinus => "PLUS_MINUS",
        }
    }

    /// Human-readable name for legends and pickers.
    pub fn label(self) -> &'static str {
        match self {
            Metric::Points => "Points",
            Metric::Rebounds => "Rebounds",
            Metric::Assists => "Assists",
            Metric::Steals => "Steals",
            Metric::Blocks => "Blocks",
            Metric::Turnovers => "Turnovers",
            Metric::PlusMinus => "Plus/Minus",
        }
    }

    /// Next metric in picker order, wrapping around.
    pub fn next(self) -> Metric {
        let idx = ALL_METRICS.iter().position(|m| *m == self).unwrap_or(0);
        ALL_METRICS[(idx + 1) % ALL_METRICS.len()]
    }

    /// Previous metric in picker order, wrapping around.
    pub fn prev(self) -> Metric {
        let idx = ALL_METRICS.iter().position(|m| *m == self).unwrap_or(0);
        ALL_METRICS[(idx + ALL_METRICS.len() - 1) % ALL_METRICS.len()]
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown metric `{0}`")]
pub struct UnknownMetric(pub String);

impl FromStr for Metric {
    type Err = UnknownMetric;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_uppercase();
        ALL_METRICS
            .iter()
            .copied()
            .find(|m| m.column() == wanted)
            .ok_or_else(|| UnknownMetric(s.to_string()))
    }
}
