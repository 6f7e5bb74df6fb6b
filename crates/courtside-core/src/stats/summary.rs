// Descriptive statistics per numeric column (count, mean, std, min,
// quartiles, max).

use crate::data::{Dataset, PlayerSeasonRecord, GAMES_PLAYED};
use crate::metric::Metric;

/// Descriptive statistics for one column.
///
/// Degenerate inputs are surfaced as NaN rather than coerced: an empty column
/// has NaN everywhere except `count`, a single value has NaN `std`.
#[derive(Debug, Clone, Copy)]
pub struct Describe {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

#[derive(Debug, Clone)]
pub struct ColumnSummary {
    pub column: String,
    pub stats: Describe,
}

/// Summary for every numeric column, in header order.
#[derive(Debug, Clone, Default)]
pub struct SummaryTable {
    pub columns: Vec<ColumnSummary>,
}

impl SummaryTable {
    pub fn get(&self, column: &str) -> Option<&Describe> {
        self.columns
            .iter()
            .find(|c| c.column == column)
            .map(|c| &c.stats)
    }
}

/// Statistic labels, in display order.
pub const STAT_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

impl Describe {
    /// Statistic by its row label, as listed in `STAT_LABELS`.
    pub fn by_label(&self, label: &str) -> Option<f64> {
        let value = match label {
            "count" => self.count as f64,
            "mean" => self.mean,
            "std" => self.std,
            "min" => self.min,
            "25%" => self.q25,
            "50%" => self.median,
            "75%" => self.q75,
            "max" => self.max,
            _ => return None,
        };
        Some(value)
    }
}

/// Describe a slice of values. NaN entries are treated as missing.
pub fn describe_values(values: &[f64]) -> Describe {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n == 0 {
        return Describe {
            count: 0,
            mean: f64::NAN,
            std: f64::NAN,
            min: f64::NAN,
            q25: f64::NAN,
            median: f64::NAN,
            q75: f64::NAN,
            max: f64::NAN,
        };
    }

    let mean = sorted.iter().sum::<f64>() / n as f64;
    let std = if n > 1 {
        let ss = sorted.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
        (ss / (n - 1) as f64).sqrt()
    } else {
        f64::NAN
    };

    Describe {
        count: n,
        mean,
        std,
        min: sorted[0],
        q25: quantile_sorted(&sorted, 0.25),
        median: quantile_sorted(&sorted, 0.5),
        q75: quantile_sorted(&sorted, 0.75),
        max: sorted[n - 1],
    }
}

/// Linear-interpolation quantile of an ascending, non-empty slice.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    sorted[lo] + (sorted[hi] - sorted[lo]) * (pos - lo as f64)
}

/// True when every non-empty cell of an extra column parses as a number.
fn extra_column_is_numeric(dataset: &Dataset, idx: usize) -> bool {
    dataset.records.iter().all(|r| {
        r.extra
            .get(idx)
            .map(|cell| cell.is_empty() || cell.parse::<f64>().is_ok())
            .unwrap_or(true)
    })
}

/// Compute the summary table for the filtered rows of `dataset`.
///
/// Numeric columns are `GP`, the seven metrics, and every extra column whose
/// cells are all numeric across the whole dataset. Empty cells are missing.
pub fn describe(dataset: &Dataset, rows: &[&PlayerSeasonRecord]) -> SummaryTable {
    let mut columns = Vec::new();

    for column in &dataset.columns {
        let values: Vec<f64> = if column == GAMES_PLAYED {
            rows.iter().map(|r| r.games_played as f64).collect()
        } else if let Ok(metric) = column.parse::<Metric>() {
            rows.iter().map(|r| r.metric(metric)).collect()
        } else if let Some(idx) = dataset.extra_columns.iter().position(|c| c == column) {
            if !extra_column_is_numeric(dataset, idx) {
                continue;
            }
            rows.iter()
                .map(|r| {
                    r.extra
                        .get(idx)
                        .and_then(|cell| cell.parse::<f64>().ok())
                        .unwrap_or(f64::NAN)
                })
                .collect()
        } else {
            continue;
        };

        columns.push(ColumnSummary {
            column: column.clone(),
            stats: describe_values(&values),
        });
    }

    SummaryTable { columns }
}
