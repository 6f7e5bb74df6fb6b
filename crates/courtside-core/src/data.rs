// Player season averages: CSV loading into an in-memory table.
//
// Expects the league-dashboard export format (one row per player per team
// stint). `PLAYER_ID` is dropped when present; every other non-required
// column is kept as raw text for the preview and summary statistics.

use serde::Deserialize;
use std::io::Read;
use std::path::Path;
use tracing::{debug, warn};

use crate::metric::Metric;

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

pub const PLAYER_NAME: &str = "PLAYER_NAME";
pub const TEAM_ABBREVIATION: &str = "TEAM_ABBREVIATION";
pub const GAMES_PLAYED: &str = "GP";

/// Columns that must be present in the header row.
pub const REQUIRED_COLUMNS: [&str; 10] = [
    TEAM_ABBREVIATION,
    GAMES_PLAYED,
    PLAYER_NAME,
    "PTS",
    "REB",
    "AST",
    "STL",
    "BLK",
    "TOV",
    "PLUS_MINUS",
];

/// Identifier columns removed on load.
pub const DROPPED_COLUMNS: [&str; 1] = ["PLAYER_ID"];

// ---------------------------------------------------------------------------
// Public types
// ---------------------------------------------------------------------------

/// One player's per-game averages for a single team stint.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayerSeasonRecord {
    pub player_name: String,
    pub team: String,
    pub games_played: u32,
    pub pts: f64,
    pub reb: f64,
    pub ast: f64,
    pub stl: f64,
    pub blk: f64,
    pub tov: f64,
    pub plus_minus: f64,
    /// Raw cells of the non-required columns, aligned with
    /// `Dataset::extra_columns`.
    pub extra: Vec<String>,
}

impl PlayerSeasonRecord {
    /// Value of the given metric for this row.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Points => self.pts,
            Metric::Rebounds => self.reb,
            Metric::Assists => self.ast,
            Metric::Steals => self.stl,
            Metric::Blocks => self.blk,
            Metric::Turnovers => self.tov,
            Metric::PlusMinus => self.plus_minus,
        }
    }

    /// Display text for a column by header name, or `None` if the column is
    /// neither required nor listed in `extra_columns`.
    pub fn cell(&self, column: &str, extra_columns: &[String]) -> Option<String> {
        let text = match column {
            PLAYER_NAME => self.player_name.clone(),
            TEAM_ABBREVIATION => self.team.clone(),
            GAMES_PLAYED => self.games_played.to_string(),
            other => {
                if let Ok(metric) = other.parse::<Metric>() {
                    format_value(self.metric(metric))
                } else {
                    let idx = extra_columns.iter().position(|c| c == other)?;
                    self.extra.get(idx).cloned().unwrap_or_default()
                }
            }
        };
        Some(text)
    }
}

/// The loaded table.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Where the rows came from (file path or reader label).
    pub source: String,
    /// Column names in header order, without dropped columns.
    pub columns: Vec<String>,
    /// Columns outside `REQUIRED_COLUMNS`, in header order.
    pub extra_columns: Vec<String>,
    /// Columns that were present in the file and removed on load.
    pub dropped_columns: Vec<String>,
    pub records: Vec<PlayerSeasonRecord>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("data file not found: {path}")]
    MissingDataFile { path: String },

    #[error("column `{column}` missing from {path}")]
    MissingExpectedColumn { path: String, column: String },

    #[error("failed to read file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("CSV error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
}

// ---------------------------------------------------------------------------
// Raw CSV serde struct (private)
// ---------------------------------------------------------------------------

/// Required columns of a player row. Games played is read as f64 because some
/// exports write it as `58.0`. Unknown columns are ignored by serde.
#[derive(Debug, Deserialize)]
#[allow(non_snake_case)]
struct RawPlayerRow {
    PLAYER_NAME: String,
    TEAM_ABBREVIATION: String,
    GP: f64,
    PTS: f64,
    REB: f64,
    AST: f64,
    STL: f64,
    BLK: f64,
    TOV: f64,
    PLUS_MINUS: f64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// Format a raw cell value exactly: the shortest text that reads back as
/// the same number.
pub fn format_value(value: f64) -> String {
    value.to_string()
}

/// Format an aggregate (a mean) for display: integers without a fraction,
/// otherwise one decimal place.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

// ---------------------------------------------------------------------------
// Loaders
// ---------------------------------------------------------------------------

/// Load a dataset from any reader. `source` labels errors and the dataset.
pub fn load_from_reader<R: Read>(rdr: R, source: &str) -> Result<Dataset, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader
        .headers()
        .map_err(|e| LoadError::Csv {
            path: source.to_string(),
            source: e,
        })?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(LoadError::MissingExpectedColumn {
            path: source.to_string(),
            column: missing.to_string(),
        });
    }

    let mut columns = Vec::new();
    let mut extra_columns = Vec::new();
    let mut extra_indices = Vec::new();
    let mut dropped_columns = Vec::new();
    for (idx, name) in headers.iter().enumerate() {
        if DROPPED_COLUMNS.contains(&name) {
            dropped_columns.push(name.to_string());
            continue;
        }
        columns.push(name.to_string());
        if !REQUIRED_COLUMNS.contains(&name) {
            extra_columns.push(name.to_string());
            extra_indices.push(idx);
        }
    }
    if !dropped_columns.is_empty() {
        debug!("dropping identifier columns {:?} from {}", dropped_columns, source);
    }

    let mut records = Vec::new();
    for (line, result) in reader.records().enumerate() {
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                warn!("skipping unreadable row {} in {}: {}", line + 1, source, e);
                continue;
            }
        };
        let raw: RawPlayerRow = match record.deserialize(Some(&headers)) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("skipping malformed row {} in {}: {}", line + 1, source, e);
                continue;
            }
        };
        if !all_finite(&[
            raw.PTS,
            raw.REB,
            raw.AST,
            raw.STL,
            raw.BLK,
            raw.TOV,
            raw.PLUS_MINUS,
        ]) {
            warn!("skipping player '{}': non-finite metric value", raw.PLAYER_NAME);
            continue;
        }
        if !raw.GP.is_finite() || raw.GP < 0.0 {
            warn!("skipping player '{}': invalid GP {}", raw.PLAYER_NAME, raw.GP);
            continue;
        }

        let extra = extra_indices
            .iter()
            .map(|&i| record.get(i).unwrap_or_default().to_string())
            .collect();

        records.push(PlayerSeasonRecord {
            player_name: raw.PLAYER_NAME,
            team: raw.TEAM_ABBREVIATION,
            games_played: raw.GP.round() as u32,
            pts: raw.PTS,
            reb: raw.REB,
            ast: raw.AST,
            stl: raw.STL,
            blk: raw.BLK,
            tov: raw.TOV,
            plus_minus: raw.PLUS_MINUS,
            extra,
        });
    }

    Ok(Dataset {
        source: source.to_string(),
        columns,
        extra_columns,
        dropped_columns,
        records,
    })
}

/// Load the player averages CSV from disk.
pub fn load_players(path: &Path) -> Result<Dataset, LoadError> {
    let display = path.display().to_string();
    let file = std::fs::File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            LoadError::MissingDataFile {
                path: display.clone(),
            }
        } else {
            LoadError::Io {
                path: display.clone(),
                source: e,
            }
        }
    })?;
    load_from_reader(file, &display)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
