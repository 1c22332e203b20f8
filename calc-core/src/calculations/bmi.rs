//! Body-mass-index calculation.
//!
//! BMI is weight in kilograms divided by the square of height in metres.
//! Inputs arrive in the units the forms collect (kilograms and centimetres);
//! the height conversion happens here.
//!
//! There is no upper bound on either input: arbitrarily large or small
//! positive values are computed as-is.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::calculations::bmi::{self, BmiInput, WeightClass};
//!
//! let result = bmi::calculate(&BmiInput {
//!     weight_kg: dec!(70),
//!     height_cm: dec!(175),
//! })
//! .unwrap();
//!
//! assert_eq!(result.index, dec!(22.86));
//! assert_eq!(result.weight_class(), WeightClass::Normal);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;

/// Errors that can occur during BMI calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BmiError {
    /// Weight must be strictly positive.
    #[error("weight must be positive, got {0}")]
    NonPositiveWeight(Decimal),

    /// Height must be strictly positive.
    #[error("height must be positive, got {0}")]
    NonPositiveHeight(Decimal),
}

/// Input values for the BMI calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmiInput {
    /// Body weight in kilograms.
    pub weight_kg: Decimal,

    /// Body height in centimetres.
    pub height_cm: Decimal,
}

/// Result of the BMI calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmiResult {
    /// The body-mass index, rounded to two decimal places.
    pub index: Decimal,
}

impl BmiResult {
    /// The weight class the index falls into, using the standard WHO bands.
    pub fn weight_class(&self) -> WeightClass {
        WeightClass::for_index(self.index)
    }
}

/// WHO weight classification bands for a BMI value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightClass {
    /// Index below 18.5.
    Underweight,
    /// Index from 18.5 up to (but excluding) 25.
    Normal,
    /// Index from 25 up to (but excluding) 30.
    Overweight,
    /// Index of 30 or above.
    Obese,
}

impl WeightClass {
    /// Classifies a BMI value into its band.
    pub fn for_index(index: Decimal) -> Self {
        if index < Decimal::new(185, 1) {
            Self::Underweight
        } else if index < Decimal::from(25) {
            Self::Normal
        } else if index < Decimal::from(30) {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }
}

/// Calculates the body-mass index from weight and height.
///
/// # Errors
///
/// Returns [`BmiError`] when either input is zero or negative.
pub fn calculate(input: &BmiInput) -> Result<BmiResult, BmiError> {
    if input.weight_kg <= Decimal::ZERO {
        return Err(BmiError::NonPositiveWeight(input.weight_kg));
    }
    if input.height_cm <= Decimal::ZERO {
        return Err(BmiError::NonPositiveHeight(input.height_cm));
    }

    let height_m = input.height_cm / Decimal::ONE_HUNDRED;
    let index = round_half_up(input.weight_kg / (height_m * height_m));

    Ok(BmiResult { index })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input(
        weight_kg: Decimal,
        height_cm: Decimal,
    ) -> BmiInput {
        BmiInput {
            weight_kg,
            height_cm,
        }
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_reference_case() {
        let result = calculate(&input(dec!(70), dec!(175))).unwrap();

        // 70 / 1.75^2 = 22.857142... -> 22.86
        assert_eq!(result.index, dec!(22.86));
    }

    #[test]
    fn calculate_rounds_to_two_decimals() {
        let result = calculate(&input(dec!(55), dec!(160))).unwrap();

        // 55 / 1.6^2 = 21.484375 -> 21.48
        assert_eq!(result.index, dec!(21.48));
    }

    #[test]
    fn calculate_accepts_fractional_height() {
        let result = calculate(&input(dec!(90), dec!(182.5))).unwrap();

        assert_eq!(result.index, dec!(27.02));
    }

    #[test]
    fn calculate_accepts_extreme_values() {
        let tiny = calculate(&input(dec!(0.001), dec!(250))).unwrap();
        let huge = calculate(&input(dec!(500), dec!(30))).unwrap();

        assert_eq!(tiny.index, dec!(0.00));
        assert_eq!(huge.index, dec!(5555.56));
    }

    #[test]
    fn calculate_rejects_zero_weight() {
        let result = calculate(&input(dec!(0), dec!(175)));

        assert_eq!(result, Err(BmiError::NonPositiveWeight(dec!(0))));
    }

    #[test]
    fn calculate_rejects_negative_weight() {
        let result = calculate(&input(dec!(-70), dec!(175)));

        assert_eq!(result, Err(BmiError::NonPositiveWeight(dec!(-70))));
    }

    #[test]
    fn calculate_rejects_zero_height() {
        let result = calculate(&input(dec!(70), dec!(0)));

        assert_eq!(result, Err(BmiError::NonPositiveHeight(dec!(0))));
    }

    #[test]
    fn calculate_rejects_negative_height() {
        let result = calculate(&input(dec!(70), dec!(-175)));

        assert_eq!(result, Err(BmiError::NonPositiveHeight(dec!(-175))));
    }

    // =========================================================================
    // weight class tests
    // =========================================================================

    #[test]
    fn weight_class_bands() {
        assert_eq!(WeightClass::for_index(dec!(18.49)), WeightClass::Underweight);
        assert_eq!(WeightClass::for_index(dec!(18.50)), WeightClass::Normal);
        assert_eq!(WeightClass::for_index(dec!(24.99)), WeightClass::Normal);
        assert_eq!(WeightClass::for_index(dec!(25.00)), WeightClass::Overweight);
        assert_eq!(WeightClass::for_index(dec!(29.99)), WeightClass::Overweight);
        assert_eq!(WeightClass::for_index(dec!(30.00)), WeightClass::Obese);
    }

    #[test]
    fn weight_class_of_reference_case() {
        let result = calculate(&input(dec!(70), dec!(175))).unwrap();

        assert_eq!(result.weight_class(), WeightClass::Normal);
    }
}
