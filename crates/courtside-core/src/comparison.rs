// Two-player radar comparison.
//
// Each player's first row in the filtered set is placed on six axes
// (PTS, REB, AST, STL, BLK, TOV). Radial position is the value min–max
// normalized across the whole filtered set; the raw value travels with it
// for display.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::data::PlayerSeasonRecord;
use crate::metric::{Metric, RADAR_METRICS};
use crate::stats::normalize::Bounds;
use crate::view::ViewError;

/// One spoke of a radar trace.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarAxis {
    pub metric: Metric,
    pub raw: f64,
    /// Position in [0, 1]. Flat metrics sit at 0.
    pub normalized: f64,
}

/// One player's closed polygon on the radar.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarTrace {
    pub player: String,
    pub team: String,
    pub axes: Vec<RadarAxis>,
}

impl RadarTrace {
    /// Cartesian vertices of the polygon inside the unit circle, with the
    /// first vertex repeated at the end to close it.
    pub fn polygon(&self) -> Vec<(f64, f64)> {
        let n = self.axes.len();
        let mut points: Vec<(f64, f64)> = self
            .axes
            .iter()
            .enumerate()
            .map(|(i, axis)| polar_to_xy(axis.normalized, axis_angle(i, n)))
            .collect();
        if let Some(&first) = points.first() {
            points.push(first);
        }
        points
    }
}

/// Result of comparing two players.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarComparison {
    pub traces: [RadarTrace; 2],
    /// Metrics where every filtered row has the same value.
    pub flat_metrics: Vec<Metric>,
}

/// Angle of axis `i` of `n`, starting at the top and going clockwise.
pub fn axis_angle(i: usize, n: usize) -> f64 {
    FRAC_PI_2 - TAU * i as f64 / n.max(1) as f64
}

pub fn polar_to_xy(radius: f64, angle: f64) -> (f64, f64) {
    (radius * angle.cos(), radius * angle.sin())
}

fn find_player<'a>(
    rows: &[&'a PlayerSeasonRecord],
    player: &str,
) -> Result<&'a PlayerSeasonRecord, ViewError> {
    rows.iter()
        .copied()
        .find(|r| r.player_name == player)
        .ok_or_else(|| ViewError::PlayerNotFoundInFilteredSet {
            player: player.to_string(),
        })
}

fn build_trace(record: &PlayerSeasonRecord, bounds: &[Bounds]) -> RadarTrace {
    let axes = bounds
        .iter()
        .map(|b| {
            let raw = record.metric(b.metric);
            RadarAxis {
                metric: b.metric,
                raw,
                normalized: b.normalize(raw).unwrap_or(0.0),
            }
        })
        .collect();
    RadarTrace {
        player: record.player_name.clone(),
        team: record.team.clone(),
        axes,
    }
}

/// Compare two players within the filtered rows.
///
/// The same name may be given twice; both traces are then identical.
pub fn compare_players(
    rows: &[&PlayerSeasonRecord],
    player1: &str,
    player2: &str,
) -> Result<RadarComparison, ViewError> {
    if rows.is_empty() {
        return Err(ViewError::EmptyFilteredSet);
    }
    let first = find_player(rows, player1)?;
    let second = find_player(rows, player2)?;

    let bounds: Vec<Bounds> = RADAR_METRICS
        .iter()
        .filter_map(|&m| Bounds::of(rows, m))
        .collect();
    let flat_metrics = bounds
        .iter()
        .filter(|b| b.is_degenerate())
        .map(|b| b.metric)
        .collect();

    Ok(RadarComparison {
        traces: [build_trace(first, &bounds), build_trace(second, &bounds)],
        flat_metrics,
    })
}
