//! Internal-consistency reliability (Cronbach's alpha).
//!
//! Uses the canonical item-variance / total-variance form with population
//! variances:
//!
//! ```text
//! alpha = (k / (k - 1)) * (1 - sum(var_i) / var_total)
//! ```
//!
//! where `k` is the number of item columns, `var_i` the variance of item
//! `i` across respondents, and `var_total` the variance of the respondents'
//! total scores over the dimension's items.

use crate::core::stats::{population_variance, round3};
use crate::core::ReliabilityEstimate;

/// Cronbach's alpha for one dimension's item columns over the cleaned
/// matrix, rounded to 3 decimals.
///
/// Degenerate inputs come back as [`ReliabilityEstimate::InsufficientData`]
/// rather than a panic, an error, or a fake coefficient:
/// - fewer than 2 item columns (the formula divides by k - 1),
/// - an item column without valid responses,
/// - zero variance in the total scores (a single respondent, or all
///   respondents identical).
pub fn cronbach_alpha(cleaned: &[Vec<f64>], items: &[usize]) -> ReliabilityEstimate {
    let k = items.len();
    if k < 2 {
        return ReliabilityEstimate::InsufficientData {
            reason: "dimension has fewer than 2 items".to_string(),
        };
    }

    let columns: Vec<Vec<f64>> = items
        .iter()
        .map(|&i| cleaned.iter().map(|row| row[i]).collect())
        .collect();
    if columns
        .iter()
        .any(|col| col.iter().any(|v| !v.is_finite()))
    {
        return ReliabilityEstimate::InsufficientData {
            reason: "one or more item columns have no valid responses".to_string(),
        };
    }

    let item_variance_sum: f64 = columns
        .iter()
        .filter_map(|col| population_variance(col))
        .sum();

    let totals: Vec<f64> = cleaned
        .iter()
        .map(|row| items.iter().map(|&i| row[i]).sum())
        .collect();
    let total_variance = population_variance(&totals).unwrap_or(0.0);
    if total_variance <= f64::EPSILON {
        return ReliabilityEstimate::InsufficientData {
            reason: "zero variance in total scores".to_string(),
        };
    }

    let alpha = (k as f64 / (k as f64 - 1.0)) * (1.0 - item_variance_sum / total_variance);
    ReliabilityEstimate::Alpha(round3(alpha))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicated_item_gives_alpha_one() {
        let cleaned: Vec<Vec<f64>> =
            [1.0, 2.0, 3.0, 4.0, 5.0].iter().map(|&v| vec![v, v]).collect();
        assert_eq!(
            cronbach_alpha(&cleaned, &[0, 1]),
            ReliabilityEstimate::Alpha(1.0)
        );
    }

    #[test]
    fn uncorrelated_items_give_alpha_zero() {
        let cleaned = vec![
            vec![1.0, 1.0],
            vec![2.0, 1.0],
            vec![1.0, 2.0],
            vec![2.0, 2.0],
        ];
        assert_eq!(
            cronbach_alpha(&cleaned, &[0, 1]),
            ReliabilityEstimate::Alpha(0.0)
        );
    }

    #[test]
    fn single_item_is_insufficient_not_a_panic() {
        let cleaned = vec![vec![1.0], vec![2.0]];
        assert!(matches!(
            cronbach_alpha(&cleaned, &[0]),
            ReliabilityEstimate::InsufficientData { .. }
        ));
    }

    #[test]
    fn identical_respondents_are_insufficient() {
        let cleaned = vec![vec![5.0, 5.0], vec![5.0, 5.0]];
        assert_eq!(
            cronbach_alpha(&cleaned, &[0, 1]),
            ReliabilityEstimate::InsufficientData {
                reason: "zero variance in total scores".to_string()
            }
        );
    }
}
