//! Basal-metabolic-rate calculation using the Mifflin-St Jeor equation.
//!
//! The equation estimates daily resting energy expenditure in kcal/day:
//!
//! | Sex    | Formula                                      |
//! |--------|----------------------------------------------|
//! | male   | `10·weight + 6.25·height − 5·age + 5`        |
//! | female | `10·weight + 6.25·height − 5·age − 161`      |
//!
//! Weight is in kilograms, height in centimetres, age in whole years. The
//! two branches differ only in the trailing constant, so for identical
//! inputs the male estimate always exceeds the female one by 166.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::Sex;
//! use calc_core::calculations::bmr::{self, BmrInput};
//!
//! let result = bmr::calculate(&BmrInput {
//!     weight_kg: dec!(70),
//!     height_cm: dec!(175),
//!     age_years: 30,
//!     sex: Sex::Male,
//! })
//! .unwrap();
//!
//! // 700 + 1093.75 - 150 + 5
//! assert_eq!(result.kcal_per_day, dec!(1648.75));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::common::round_half_up;
use crate::models::Sex;

/// Errors that can occur during BMR calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BmrError {
    /// Weight must be strictly positive.
    #[error("weight must be positive, got {0}")]
    NonPositiveWeight(Decimal),

    /// Height must be strictly positive.
    #[error("height must be positive, got {0}")]
    NonPositiveHeight(Decimal),

    /// Age must be at least one year.
    #[error("age must be at least one year")]
    ZeroAge,
}

/// Input values for the BMR calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmrInput {
    /// Body weight in kilograms.
    pub weight_kg: Decimal,

    /// Body height in centimetres.
    pub height_cm: Decimal,

    /// Age in whole years.
    pub age_years: u32,

    /// Which branch of the equation applies.
    pub sex: Sex,
}

/// Result of the BMR calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BmrResult {
    /// Estimated daily energy expenditure in kcal/day, rounded to two
    /// decimal places.
    pub kcal_per_day: Decimal,
}

/// Calculates the basal metabolic rate.
///
/// # Errors
///
/// Returns [`BmrError`] when weight or height is zero or negative, or when
/// the age is zero.
pub fn calculate(input: &BmrInput) -> Result<BmrResult, BmrError> {
    if input.weight_kg <= Decimal::ZERO {
        return Err(BmrError::NonPositiveWeight(input.weight_kg));
    }
    if input.height_cm <= Decimal::ZERO {
        return Err(BmrError::NonPositiveHeight(input.height_cm));
    }
    if input.age_years == 0 {
        return Err(BmrError::ZeroAge);
    }

    let base = Decimal::TEN * input.weight_kg + Decimal::new(625, 2) * input.height_cm
        - Decimal::from(5) * Decimal::from(input.age_years);
    let kcal_per_day = round_half_up(base + sex_offset(input.sex));

    Ok(BmrResult { kcal_per_day })
}

/// The constant that distinguishes the two branches of the equation.
fn sex_offset(sex: Sex) -> Decimal {
    match sex {
        Sex::Male => Decimal::from(5),
        Sex::Female => Decimal::from(-161),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn input(
        weight_kg: Decimal,
        height_cm: Decimal,
        age_years: u32,
        sex: Sex,
    ) -> BmrInput {
        BmrInput {
            weight_kg,
            height_cm,
            age_years,
            sex,
        }
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn calculate_male_reference_case() {
        let result = calculate(&input(dec!(70), dec!(175), 30, Sex::Male)).unwrap();

        // 700 + 1093.75 - 150 + 5 = 1648.75
        assert_eq!(result.kcal_per_day, dec!(1648.75));
    }

    #[test]
    fn calculate_female_reference_case() {
        let result = calculate(&input(dec!(70), dec!(175), 30, Sex::Female)).unwrap();

        // 700 + 1093.75 - 150 - 161 = 1482.75
        assert_eq!(result.kcal_per_day, dec!(1482.75));
    }

    #[test]
    fn calculate_female_second_case() {
        let result = calculate(&input(dec!(60), dec!(165), 25, Sex::Female)).unwrap();

        assert_eq!(result.kcal_per_day, dec!(1345.25));
    }

    #[test]
    fn calculate_accepts_fractional_weight() {
        let result = calculate(&input(dec!(80.5), dec!(180), 40, Sex::Male)).unwrap();

        assert_eq!(result.kcal_per_day, dec!(1735.00));
    }

    #[test]
    fn male_exceeds_female_by_166() {
        let cases = [
            (dec!(70), dec!(175), 30),
            (dec!(55.5), dec!(162), 45),
            (dec!(95), dec!(190), 18),
        ];

        for (weight, height, age) in cases {
            let male = calculate(&input(weight, height, age, Sex::Male)).unwrap();
            let female = calculate(&input(weight, height, age, Sex::Female)).unwrap();

            assert_eq!(male.kcal_per_day - female.kcal_per_day, dec!(166));
        }
    }

    #[test]
    fn calculate_rejects_zero_weight() {
        let result = calculate(&input(dec!(0), dec!(175), 30, Sex::Male));

        assert_eq!(result, Err(BmrError::NonPositiveWeight(dec!(0))));
    }

    #[test]
    fn calculate_rejects_negative_height() {
        let result = calculate(&input(dec!(70), dec!(-1), 30, Sex::Female));

        assert_eq!(result, Err(BmrError::NonPositiveHeight(dec!(-1))));
    }

    #[test]
    fn calculate_rejects_zero_age() {
        let result = calculate(&input(dec!(70), dec!(175), 0, Sex::Male));

        assert_eq!(result, Err(BmrError::ZeroAge));
    }
}
