//! Per-respondent dimension aggregation.

use crate::core::stats::{mean, round2};
use crate::core::{Dimension, DimensionTable};

/// Mean of one respondent's cleaned values per dimension, rounded to 2
/// decimals.
///
/// Non-finite cells (possible only when an entire column had no valid
/// responses) are excluded from the mean; a dimension whose cells are all
/// undefined scores NaN, which the descriptive stage filters out.
pub fn respondent_scores(row: &[f64]) -> DimensionTable<f64> {
    DimensionTable::from_fn(|dim| {
        let cells: Vec<f64> = dim.items().iter().map(|&i| row[i]).collect();
        round2(mean(&cells).unwrap_or(f64::NAN))
    })
}

/// Dimension scores for every respondent row.
pub fn score_respondents(cleaned: &[Vec<f64>]) -> Vec<DimensionTable<f64>> {
    cleaned.iter().map(|row| respondent_scores(row)).collect()
}
