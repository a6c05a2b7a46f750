//! Small numeric helpers shared by the analysis stages.
//!
//! All helpers operate on the finite subset of their input: non-finite
//! values are excluded before any arithmetic, so an undefined cell upstream
//! shrinks the sample instead of poisoning the result. An input with no
//! finite values yields `None`.

/// Arithmetic mean of the finite values.
pub fn mean(values: &[f64]) -> Option<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    Some(finite.iter().sum::<f64>() / finite.len() as f64)
}

/// Median of the finite values: the middle element for odd counts, the mean
/// of the two central elements for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() {
        return None;
    }
    finite.sort_by(f64::total_cmp);
    let mid = finite.len() / 2;
    if finite.len() % 2 != 0 {
        Some(finite[mid])
    } else {
        Some((finite[mid - 1] + finite[mid]) / 2.0)
    }
}

/// Population variance (N divisor) of the finite values.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let avg = mean(&finite)?;
    let squared: Vec<f64> = finite.iter().map(|v| (v - avg).powi(2)).collect();
    mean(&squared)
}

/// Population standard deviation (N divisor, not the N-1 sample estimator).
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    population_variance(values).map(f64::sqrt)
}

/// Round to 2 decimal places, half away from zero. Non-finite values pass
/// through unchanged.
pub fn round2(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * 100.0).round() / 100.0
}

/// Round to 3 decimal places, half away from zero.
pub fn round3(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_skips_non_finite() {
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), Some(2.0));
        assert_eq!(mean(&[f64::NAN]), None);
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn median_even_count_averages_central_pair() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn std_dev_uses_population_divisor() {
        let sd = population_std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!((sd - 2.0_f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn rounding_is_half_away_from_zero() {
        // 0.125 and 0.0625 are exact in binary, so the half case is real
        assert_eq!(round2(0.125), 0.13);
        assert_eq!(round2(-0.125), -0.13);
        assert_eq!(round3(0.0625), 0.063);
        assert_eq!(round2(3.14159), 3.14);
        assert!(round2(f64::NAN).is_nan());
    }
}
