//! Form state for the BMI calculator page.

use std::fmt;

use calc_core::calculations::bmi::{self, BmiInput, BmiResult};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::forms::FormPhase;
use crate::utils::{display_or_placeholder, opt_display};

/// Transient state of the BMI page: two optional fields and the last
/// computed result.
#[derive(Debug, Clone, Default)]
pub struct BmiForm {
    weight_kg: Option<Decimal>,
    height_cm: Option<Decimal>,
    result: Option<BmiResult>,
}

/// Immutable view of a [`BmiForm`] published after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BmiSnapshot {
    pub weight_kg: Option<Decimal>,
    pub height_cm: Option<Decimal>,
    pub phase: FormPhase,
    pub result: Option<BmiResult>,
}

impl BmiForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the weight field. Any previously computed result is stale
    /// after an edit and is dropped.
    pub fn set_weight(
        &mut self,
        weight_kg: Option<Decimal>,
    ) -> BmiSnapshot {
        self.weight_kg = weight_kg;
        self.result = None;
        self.snapshot()
    }

    /// Records the height field, dropping any stale result.
    pub fn set_height(
        &mut self,
        height_cm: Option<Decimal>,
    ) -> BmiSnapshot {
        self.height_cm = height_cm;
        self.result = None;
        self.snapshot()
    }

    /// Computes the index if every field is present and valid; otherwise
    /// clears the result. Invalid input never faults, it only leaves the
    /// result absent.
    pub fn calculate(&mut self) -> BmiSnapshot {
        self.result = match (self.weight_kg, self.height_cm) {
            (Some(weight_kg), Some(height_cm)) => {
                let input = BmiInput {
                    weight_kg,
                    height_cm,
                };
                match bmi::calculate(&input) {
                    Ok(result) => {
                        debug!(index = %result.index, "bmi computed");
                        Some(result)
                    }
                    Err(error) => {
                        warn!(%error, "bmi input rejected, clearing result");
                        None
                    }
                }
            }
            _ => {
                debug!("bmi fields incomplete, clearing result");
                None
            }
        };
        self.snapshot()
    }

    /// Clears every field and the result.
    pub fn reset(&mut self) -> BmiSnapshot {
        *self = Self::default();
        self.snapshot()
    }

    pub fn phase(&self) -> FormPhase {
        if self.result.is_some() {
            FormPhase::Computed
        } else if self.weight_kg.is_none() && self.height_cm.is_none() {
            FormPhase::Empty
        } else if self.is_ready() {
            FormPhase::Ready
        } else {
            FormPhase::PartiallyFilled
        }
    }

    fn is_ready(&self) -> bool {
        matches!(self.weight_kg, Some(w) if w > Decimal::ZERO)
            && matches!(self.height_cm, Some(h) if h > Decimal::ZERO)
    }

    pub fn snapshot(&self) -> BmiSnapshot {
        BmiSnapshot {
            weight_kg: self.weight_kg,
            height_cm: self.height_cm,
            phase: self.phase(),
            result: self.result.clone(),
        }
    }
}

impl fmt::Display for BmiSnapshot {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Weight (kg): {}", opt_display(&self.weight_kg))?;
        writeln!(f, "Height (cm): {}", opt_display(&self.height_cm))?;
        write!(
            f,
            "BMI:         {}",
            display_or_placeholder(self.result.as_ref().map(|r| r.index))
        )?;
        if let Some(result) = &self.result {
            write!(f, " ({})", result.weight_class().as_str())?;
        }
        Ok(())
    }
}
