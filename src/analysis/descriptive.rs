//! Descriptive statistics across respondents.

use crate::core::stats::{mean, median, population_std_dev, round2};
use crate::core::{Dimension, DimensionStatistics, DimensionTable};

/// Dimension means strictly below this are classified weak.
pub const WEAK_THRESHOLD: f64 = 2.5;
/// Dimension means strictly above this are classified strong.
pub const STRONG_THRESHOLD: f64 = 4.0;

/// Mean, median and population standard deviation per dimension over the
/// per-respondent scores, plus the weak/strong classification.
///
/// Both thresholds are strict: a mean of exactly 2.5 or exactly 4.0 falls
/// in neither set. A dimension left without finite scores (undefined-column
/// case) reports NaN statistics and is classified as neither.
pub fn describe(scores: &[DimensionTable<f64>]) -> DimensionStatistics {
    let per_dimension: DimensionTable<Vec<f64>> =
        DimensionTable::from_fn(|dim| scores.iter().map(|s| s[dim]).collect());

    let means = per_dimension.map(|_, values| round2(mean(values).unwrap_or(f64::NAN)));
    let medians = per_dimension.map(|_, values| round2(median(values).unwrap_or(f64::NAN)));
    let std_devs =
        per_dimension.map(|_, values| round2(population_std_dev(values).unwrap_or(f64::NAN)));

    let weak_dimensions = Dimension::ALL
        .into_iter()
        .filter(|&dim| means[dim] < WEAK_THRESHOLD)
        .collect();
    let strong_dimensions = Dimension::ALL
        .into_iter()
        .filter(|&dim| means[dim] > STRONG_THRESHOLD)
        .collect();

    DimensionStatistics {
        means,
        medians,
        std_devs,
        weak_dimensions,
        strong_dimensions,
    }
}
