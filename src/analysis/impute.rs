//! Missing-value imputation.
//!
//! Column means are computed over the whole matrix before any cell is
//! replaced, so the result is independent of row order. A running mean that
//! imputes early rows from a partial column would bias the result by
//! insertion order; `tests/imputation_tests.rs` holds a row-permutation
//! regression against that.

use crate::core::QUESTION_COUNT;

/// Imputed response matrix.
///
/// Cells in `values` are finite except in columns listed in
/// `empty_columns`: a column with zero valid responses has an undefined
/// mean, and its cells stay NaN so downstream stages can exclude them
/// instead of consuming a silent default.
#[derive(Clone, Debug, PartialEq)]
pub struct ImputedMatrix {
    pub values: Vec<Vec<f64>>,
    pub empty_columns: Vec<usize>,
}

/// Replace missing cells with their column's mean over valid values.
pub fn impute(encoded: &[Vec<Option<u8>>]) -> ImputedMatrix {
    // First pass: per-column mean of the valid responses.
    let mut column_means = [None; QUESTION_COUNT];
    let mut empty_columns = Vec::new();
    for (column, slot) in column_means.iter_mut().enumerate() {
        let mut sum = 0.0;
        let mut count = 0usize;
        for row in encoded {
            if let Some(code) = row.get(column).copied().flatten() {
                sum += f64::from(code);
                count += 1;
            }
        }
        if count > 0 {
            *slot = Some(sum / count as f64);
        } else {
            empty_columns.push(column);
        }
    }

    // Second pass: substitute the precomputed means.
    let values = encoded
        .iter()
        .map(|row| {
            (0..QUESTION_COUNT)
                .map(|column| match row.get(column).copied().flatten() {
                    Some(code) => f64::from(code),
                    None => column_means[column].unwrap_or(f64::NAN),
                })
                .collect()
        })
        .collect();

    ImputedMatrix {
        values,
        empty_columns,
    }
}
