//! Optional per-department breakdown of dimension scores.

use std::collections::BTreeMap;

use crate::core::stats::{mean, round2};
use crate::core::DimensionTable;

/// Bucket used for respondents whose department cell is absent or blank.
pub const UNKNOWN_DEPARTMENT: &str = "Unknown";

/// Group respondents by department and average each dimension within the
/// group, rounded to 2 decimals.
///
/// `departments` is parallel to `scores`. `None` means the input carried no
/// department column at all; the breakdown is skipped and the result is
/// empty, not an error. A missing or blank cell falls into the
/// [`UNKNOWN_DEPARTMENT`] bucket.
pub fn breakdown(
    scores: &[DimensionTable<f64>],
    departments: Option<&[Option<String>]>,
) -> BTreeMap<String, DimensionTable<f64>> {
    let Some(departments) = departments else {
        return BTreeMap::new();
    };

    let mut groups: BTreeMap<String, Vec<&DimensionTable<f64>>> = BTreeMap::new();
    for (index, score) in scores.iter().enumerate() {
        let department = departments
            .get(index)
            .and_then(|d| d.as_deref())
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .unwrap_or(UNKNOWN_DEPARTMENT);
        groups.entry(department.to_string()).or_default().push(score);
    }

    groups
        .into_iter()
        .filter(|(_, members)| !members.is_empty())
        .map(|(department, members)| {
            let means = DimensionTable::from_fn(|dim| {
                let values: Vec<f64> = members.iter().map(|s| s[dim]).collect();
                round2(mean(&values).unwrap_or(f64::NAN))
            });
            (department, means)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension;

    fn uniform(value: f64) -> DimensionTable<f64> {
        DimensionTable::from_fn(|_| value)
    }

    #[test]
    fn groups_and_averages_by_department() {
        let scores = vec![uniform(4.0), uniform(2.0), uniform(3.0)];
        let departments = vec![
            Some("Sales".to_string()),
            Some("Sales".to_string()),
            Some("R&D".to_string()),
        ];
        let result = breakdown(&scores, Some(&departments));
        assert_eq!(result["Sales"][Dimension::Rewards], 3.0);
        assert_eq!(result["R&D"][Dimension::Rewards], 3.0);
        assert_eq!(result.len(), 2);
    }

    #[test]
    fn blank_department_falls_into_unknown() {
        let scores = vec![uniform(4.0), uniform(2.0)];
        let departments = vec![None, Some("  ".to_string())];
        let result = breakdown(&scores, Some(&departments));
        assert_eq!(result[UNKNOWN_DEPARTMENT][Dimension::Rewards], 3.0);
    }

    #[test]
    fn no_department_column_yields_empty_result() {
        let scores = vec![uniform(4.0)];
        assert!(breakdown(&scores, None).is_empty());
    }
}
