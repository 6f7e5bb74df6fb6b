// Min–max normalization against the bounds of the filtered set.

use crate::data::PlayerSeasonRecord;
use crate::metric::Metric;
use crate::view::ViewError;

/// Minimum and maximum of one metric across a set of rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub metric: Metric,
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Bounds of `metric` over `rows`, or `None` when `rows` is empty.
    pub fn of(rows: &[&PlayerSeasonRecord], metric: Metric) -> Option<Bounds> {
        let mut values = rows.iter().map(|r| r.metric(metric));
        let first = values.next()?;
        let (min, max) = values.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Bounds { metric, min, max })
    }

    /// `max - min`.
    pub fn range(&self) -> f64 {
        self.max - self.min
    }

    /// True when every row shares the same value.
    pub fn is_degenerate(&self) -> bool {
        self.range() == 0.0
    }

    /// Rescale `value` to `(value - min) / (max - min)`.
    ///
    /// Fails with `DegenerateNormalizationRange` instead of dividing by zero.
    pub fn normalize(&self, value: f64) -> Result<f64, ViewError> {
        if self.is_degenerate() {
            return Err(ViewError::DegenerateNormalizationRange {
                metric: self.metric,
            });
        }
        Ok((value - self.min) / self.range())
    }
}
