// Statistics over the filtered set: descriptive summary, per-team means and
// min–max normalization.

pub mod aggregate;
pub mod normalize;
pub mod summary;
