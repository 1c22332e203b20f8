//! Form state for the car installment calculator page.

use std::fmt;

use calc_core::calculations::installment::{self, InstallmentInput, InstallmentResult};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};

use crate::forms::FormPhase;
use crate::options::{DownPaymentRate, LoanTerm};
use crate::utils::{display_or_placeholder, opt_display};

/// Transient state of the installment page.
///
/// Price and annual rate are free numeric fields; down payment and term
/// are picked from closed sets and always hold a value, so only the free
/// fields can make the form incomplete. The name field is recorded and
/// reset with the rest but takes no part in the calculation.
#[derive(Debug, Clone, Default)]
pub struct InstallmentForm {
    user_name: Option<String>,
    price: Option<Decimal>,
    down_payment: DownPaymentRate,
    term: LoanTerm,
    annual_rate: Option<Decimal>,
    result: Option<InstallmentResult>,
}

/// Immutable view of an [`InstallmentForm`] published after every mutation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstallmentSnapshot {
    pub user_name: Option<String>,
    pub price: Option<Decimal>,
    pub down_payment: DownPaymentRate,
    pub term: LoanTerm,
    pub annual_rate: Option<Decimal>,
    pub phase: FormPhase,
    pub result: Option<InstallmentResult>,
}

impl InstallmentForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the name field, dropping any stale result.
    pub fn set_user_name(
        &mut self,
        user_name: Option<String>,
    ) -> InstallmentSnapshot {
        self.user_name = user_name;
        self.result = None;
        self.snapshot()
    }

    /// Records the price field, dropping any stale result.
    pub fn set_price(
        &mut self,
        price: Option<Decimal>,
    ) -> InstallmentSnapshot {
        self.price = price;
        self.result = None;
        self.snapshot()
    }

    /// Selects the down-payment percentage, dropping any stale result.
    pub fn set_down_payment(
        &mut self,
        down_payment: DownPaymentRate,
    ) -> InstallmentSnapshot {
        self.down_payment = down_payment;
        self.result = None;
        self.snapshot()
    }

    /// Selects the loan term, dropping any stale result.
    pub fn set_term(
        &mut self,
        term: LoanTerm,
    ) -> InstallmentSnapshot {
        self.term = term;
        self.result = None;
        self.snapshot()
    }

    /// Records the annual interest rate field, dropping any stale result.
    pub fn set_annual_rate(
        &mut self,
        annual_rate: Option<Decimal>,
    ) -> InstallmentSnapshot {
        self.annual_rate = annual_rate;
        self.result = None;
        self.snapshot()
    }

    /// Computes the installment if price and rate are present and positive;
    /// otherwise clears the result.
    ///
    /// An entered rate of exactly 0 does not compute: the page renders the
    /// placeholder for it, exactly as for a missing rate. The flat
    /// zero-rate branch lives in the calculation core and stays out of
    /// reach of this form.
    pub fn calculate(&mut self) -> InstallmentSnapshot {
        self.result = match (self.price, self.annual_rate) {
            (Some(price), Some(annual_rate)) if annual_rate > Decimal::ZERO => {
                let input = InstallmentInput {
                    price,
                    down_payment_percent: self.down_payment.percent(),
                    term_months: self.term.months(),
                    annual_rate_percent: annual_rate,
                };
                match installment::calculate(&input) {
                    Ok(result) => {
                        debug!(monthly_payment = %result.monthly_payment, "installment computed");
                        Some(result)
                    }
                    Err(error) => {
                        warn!(%error, "installment input rejected, clearing result");
                        None
                    }
                }
            }
            _ => {
                debug!("installment fields incomplete, clearing result");
                None
            }
        };
        self.snapshot()
    }

    /// Clears every field and the result; the closed-set fields return to
    /// their defaults.
    pub fn reset(&mut self) -> InstallmentSnapshot {
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
        self.user_name.is_none()
            && self.price.is_none()
            && self.annual_rate.is_none()
            && self.down_payment == DownPaymentRate::default()
            && self.term == LoanTerm::default()
    }

    fn is_ready(&self) -> bool {
        matches!(self.price, Some(p) if p > Decimal::ZERO)
            && matches!(self.annual_rate, Some(r) if r > Decimal::ZERO)
    }

    pub fn snapshot(&self) -> InstallmentSnapshot {
        InstallmentSnapshot {
            user_name: self.user_name.clone(),
            price: self.price,
            down_payment: self.down_payment,
            term: self.term,
            annual_rate: self.annual_rate,
            phase: self.phase(),
            result: self.result.clone(),
        }
    }
}

impl fmt::Display for InstallmentSnapshot {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "Name:            {}", opt_display(&self.user_name))?;
        writeln!(f, "Price:           {}", opt_display(&self.price))?;
        writeln!(f, "Down payment:    {}%", self.down_payment.as_str())?;
        writeln!(f, "Term:            {}", self.term.label())?;
        writeln!(f, "Annual rate (%): {}", opt_display(&self.annual_rate))?;
        writeln!(
            f,
            "Down amount:     {}",
            display_or_placeholder(self.result.as_ref().map(|r| r.down_payment))
        )?;
        writeln!(
            f,
            "Loan amount:     {}",
            display_or_placeholder(self.result.as_ref().map(|r| r.loan_amount))
        )?;
        write!(
            f,
            "Monthly payment: {}",
            display_or_placeholder(self.result.as_ref().map(|r| r.monthly_payment))
        )
    }
}
