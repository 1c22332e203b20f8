//! Form state for the BMR calculator page.

use std::fmt;

use calc_core::Sex;
use calc_core::calculations::bmr::{self, BmrInput, BmrResult};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::forms::FormPhase;
use crate::utils::{display_or_placeholder, opt_display};

/// Transient state of the BMR page: four optional fields and the last
/// computed result.
#[derive(Debug, Clone, Default)]
pub struct BmrForm {
    weight_kg: Option<Decimal>,
    height_cm: Option<Decimal>,
    age_years: Option<u32>,
    sex: Option<Sex>,
    result: Option<BmrResult>,
}

/// Immutable view of a [`BmrForm`] published after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmrSnapshot {
    pub weight_kg: Option<Decimal>,
    pub height_cm: Option<Decimal>,
    pub age_years: Option<u32>,
    pub sex: Option<Sex>,
    pub phase: FormPhase,
    pub result: Option<BmrResult>,
}

impl BmrForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the weight field, dropping any stale result.
    pub fn set_weight(
        &mut self,
        weight_kg: Option<Decimal>,
    ) -> BmrSnapshot {
        self.weight_kg = weight_kg;
        self.result = None;
        self.snapshot()
    }

    /// Records the height field, dropping any stale result.
    pub fn set_height(
        &mut self,
        height_cm: Option<Decimal>,
    ) -> BmrSnapshot {
        self.height_cm = height_cm;
        self.result = None;
        self.snapshot()
    }

    /// Records the age field, dropping any stale result.
    pub fn set_age(
        &mut self,
        age_years: Option<u32>,
    ) -> BmrSnapshot {
        self.age_years = age_years;
        self.result = None;
        self.snapshot()
    }

    /// Records the sex selection, dropping any stale result.
    pub fn set_sex(
        &mut self,
        sex: Option<Sex>,
    ) -> BmrSnapshot {
        self.sex = sex;
        self.result = None;
        self.snapshot()
    }

    /// Computes the rate if every field is present and valid; otherwise
    /// clears the result.
    pub fn calculate(&mut self) -> BmrSnapshot {
        self.result = match (self.weight_kg, self.height_cm, self.age_years, self.sex) {
            (Some(weight_kg), Some(height_cm), Some(age_years), Some(sex)) => {
                let input = BmrInput {
                    weight_kg,
                    height_cm,
                    age_years,
                    sex,
                };
                match bmr::calculate(&input) {
                    Ok(result) => {
                        debug!(kcal_per_day = %result.kcal_per_day, "bmr computed");
                        Some(result)
                    }
                    Err(error) => {
                        warn!(%error, "bmr input rejected, clearing result");
                        None
                    }
                }
            }
            _ => {
                debug!("bmr fields incomplete, clearing result");
                None
            }
        };
        self.snapshot()
    }

    /// Clears every field and the result.
    pub fn reset(&mut self) -> BmrSnapshot {
        *self = Self::default();
        self.snapshot()
    }

    pub fn phase(&self) -> FormPhase {
        if self.result.is_some() {
            FormPhase::Computed
        } else if self.is_empty() {
            FormPhase::Empty
        } else if self.is_ready() {
            FormPhase::Ready
        } else {
            FormPhase::PartiallyFilled
        }
    }

    fn is_empty(&self) -> bool {
        self.weight_kg.is_none()
            && self.height_cm.is_none()
            && self.age_years.is_none()
            && self.sex.is_none()
    }

    fn is_ready(&self) -> bool {
        matches!(self.weight_kg, Some(w) if w > Decimal::ZERO)
            && matches!(self.height_cm, Some(h) if h > Decimal::ZERO)
            && matches!(self.age_years, Some(a) if a >= 1)
            && self.sex.is_some()
    }

    pub fn snapshot(&self) -> BmrSnapshot {
        BmrSnapshot {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            age_years: self.age_years,
            sex: self.sex,
            phase: self.phase(),
            result: self.result.clone(),
        }
    }
}

impl fmt::Display for BmrSnapshot {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Weight (kg):    {}", opt_display(&self.weight_kg))?;
        writeln!(f, "Height (cm):    {}", opt_display(&self.height_cm))?;
        writeln!(f, "Age (years):    {}", opt_display(&self.age_years))?;
        writeln!(
            f,
            "Sex:            {}",
            opt_display(&self.sex.map(|s| s.as_str()))
        )?;
        write!(
            f,
            "BMR (kcal/day): {}",
            display_or_placeholder(self.result.as_ref().map(|r| r.kcal_per_day))
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn filled_form() -> BmrForm {
        let mut form = BmrForm::new();
        form.set_weight(Some(dec!(70)));
        form.set_height(Some(dec!(175)));
        form.set_age(Some(30));
        form.set_sex(Some(Sex::Male));
        form
    }

    #[test]
    fn starts_empty_with_absent_result() {
        let form = BmrForm::new();
        let snapshot = form.snapshot();

        assert_eq!(snapshot.phase, FormPhase::Empty);
        assert_eq!(snapshot.result, None);
    }

    #[test]
    fn all_four_fields_required_for_ready() {
        let mut form = BmrForm::new();
        form.set_weight(Some(dec!(70)));
        form.set_height(Some(dec!(175)));

        let without_sex = form.set_age(Some(30));
        assert_eq!(without_sex.phase, FormPhase::PartiallyFilled);

        let complete = form.set_sex(Some(Sex::Female));
        assert_eq!(complete.phase, FormPhase::Ready);
    }

    #[test]
    fn calculate_produces_result_when_ready() {
        let mut form = filled_form();

        let snapshot = form.calculate();

        assert_eq!(snapshot.phase, FormPhase::Computed);
        assert_eq!(snapshot.result.unwrap().kcal_per_day, dec!(1648.75));
    }

    #[test]
    fn calculate_without_sex_clears_result() {
        let mut form = filled_form();
        form.set_sex(None);

        let snapshot = form.calculate();

        assert_eq!(snapshot.result, None);
    }

    #[test]
    fn calculate_with_zero_age_clears_result() {
        let mut form = filled_form();
        form.set_age(Some(0));

        let snapshot = form.calculate();

        assert_eq!(snapshot.result, None);
    }

    #[test]
    fn switching_sex_recomputes_other_branch() {
        let mut form = filled_form();
        form.calculate();

        form.set_sex(Some(Sex::Female));
        let snapshot = form.calculate();

        assert_eq!(snapshot.result.unwrap().kcal_per_day, dec!(1482.75));
    }

    #[test]
    fn editing_a_field_leaves_computed_state() {
        let mut form = filled_form();
        form.calculate();

        let snapshot = form.set_age(Some(31));

        assert_eq!(snapshot.phase, FormPhase::Ready);
        assert_eq!(snapshot.result, None);
    }

    #[test]
    fn reset_then_calculate_yields_absent_result() {
        let mut form = filled_form();
        form.calculate();
        form.reset();

        let snapshot = form.calculate();

        assert_eq!(snapshot.phase, FormPhase::Empty);
        assert_eq!(snapshot.result, None);
    }

    #[test]
    fn snapshot_renders_placeholder_when_absent() {
        let form = BmrForm::new();

        let rendered = form.snapshot().to_string();

        assert!(rendered.contains("BMR (kcal/day): 0.00"));
    }
}
