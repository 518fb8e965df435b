//! Body Mass Index calculation

use crate::utils::error::{AppError, AppResult};
use tracing::warn;

/// BMI from weight in kilograms and height in centimetres, rounded to two decimals.
///
/// Only zero height and non-finite input are rejected; implausible values
/// such as a negative weight are computed as given.
pub fn try_calculate_bmi(weight_kg: f64, height_cm: f64) -> AppResult<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() {
        return Err(AppError::Computation(format!(
            "weight and height must be finite numbers (got {} kg, {} cm)",
            weight_kg, height_cm
        )));
    }
    if height_cm == 0.0 {
        return Err(AppError::Computation("height must not be zero".to_string()));
    }

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    if !bmi.is_finite() {
        return Err(AppError::Computation(format!(
            "BMI overflowed for {} kg, {} cm",
            weight_kg, height_cm
        )));
    }

    Ok(round2(bmi))
}

/// Lenient variant: a failed computation is logged and yields `None`.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    match try_calculate_bmi(weight_kg, height_cm) {
        Ok(bmi) => Some(bmi),
        Err(e) => {
            warn!(weight_kg, height_cm, error = %e, "BMI calculation failed");
            None
        }
    }
}

/// Ties go to the even neighbour: 0.125 becomes 0.12
fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_profile() {
        assert_eq!(calculate_bmi(70.0, 175.0), Some(22.86));
    }

    #[test]
    fn test_matches_formula() {
        let cases = [(70.0, 175.0), (55.5, 160.0), (120.0, 190.5), (3.2, 50.0), (80.0, 180.0)];
        for (w, h) in cases {
            let m: f64 = h / 100.0;
            let expected = (w / (m * m) * 100.0).round_ties_even() / 100.0;
            assert_eq!(calculate_bmi(w, h), Some(expected), "w={} h={}", w, h);
        }
    }

    #[test]
    fn test_exact_ties_round_to_even() {
        assert_eq!(calculate_bmi(0.125, 100.0), Some(0.12));
        assert_eq!(calculate_bmi(0.375, 100.0), Some(0.38));
        assert_eq!(calculate_bmi(-0.125, 100.0), Some(-0.12));
    }

    #[test]
    fn test_zero_height_is_absent() {
        assert_eq!(calculate_bmi(70.0, 0.0), None);
        assert!(matches!(
            try_calculate_bmi(70.0, 0.0),
            Err(AppError::Computation(_))
        ));
    }

    #[test]
    fn test_non_finite_input_is_absent() {
        assert_eq!(calculate_bmi(f64::NAN, 175.0), None);
        assert_eq!(calculate_bmi(70.0, f64::INFINITY), None);
    }

    #[test]
    fn test_implausible_values_pass_through() {
        assert_eq!(calculate_bmi(-70.0, 175.0), Some(-22.86));
        assert_eq!(calculate_bmi(0.0, 175.0), Some(0.0));
    }
}
