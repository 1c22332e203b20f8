//! Amortized car-loan installment calculation.
//!
//! Computes the constant monthly payment for a loan financed after a
//! percentage down payment:
//!
//! | Step | Description                                               |
//! |------|-----------------------------------------------------------|
//! | 1    | `down_payment = price × percent / 100`                    |
//! | 2    | `loan = price − down_payment`                             |
//! | 3    | `monthly_rate = annual_rate / 100 / 12`                   |
//! | 4    | rate > 0: `payment = loan·r / (1 − (1+r)^−term)`          |
//! | 5    | rate = 0: `payment = loan / term`                         |
//! | 6    | round every published figure to two decimal places        |
//!
//! The compound factor `(1+r)^term` is built by repeated multiplication so
//! the whole computation stays in [`Decimal`]; terms are small (a few
//! dozen periods) and `Decimal` carries 28 significant digits, far more
//! than the two the published payment keeps.
//!
//! A zero-length term would divide by zero in the flat branch, so it is
//! rejected up front even though callers selecting from the fixed term set
//! can never produce it.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calc_core::calculations::installment::{self, InstallmentInput};
//!
//! let result = installment::calculate(&InstallmentInput {
//!     price: dec!(500000),
//!     down_payment_percent: dec!(15),
//!     term_months: 36,
//!     annual_rate_percent: dec!(3),
//! })
//! .unwrap();
//!
//! assert_eq!(result.down_payment, dec!(75000.00));
//! assert_eq!(result.loan_amount, dec!(425000.00));
//! assert_eq!(result.monthly_payment, dec!(12359.51));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::common::round_half_up;

/// Errors that can occur during installment calculation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InstallmentError {
    /// The purchase price must be strictly positive.
    #[error("price must be positive, got {0}")]
    NonPositivePrice(Decimal),

    /// The down payment percentage must lie in `[0, 100)`.
    #[error("down payment percentage must be between 0 and 100, got {0}")]
    DownPaymentOutOfRange(Decimal),

    /// The term must cover at least one period.
    #[error("term must be at least one period")]
    ZeroTerm,

    /// The annual interest rate must not be negative.
    #[error("annual interest rate must not be negative, got {0}")]
    NegativeRate(Decimal),
}

/// Input values for the installment calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentInput {
    /// Purchase price in currency units.
    pub price: Decimal,

    /// Up-front down payment as a percentage of the price.
    pub down_payment_percent: Decimal,

    /// Repayment term in months.
    pub term_months: u32,

    /// Annual interest rate in percent. Zero selects the flat
    /// (interest-free) branch.
    pub annual_rate_percent: Decimal,
}

/// Result of the installment calculation.
///
/// All figures are rounded to two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallmentResult {
    /// The constant payment due each month.
    pub monthly_payment: Decimal,

    /// The up-front down payment amount.
    pub down_payment: Decimal,

    /// The financed amount (price minus down payment).
    pub loan_amount: Decimal,
}

/// Calculates the monthly installment for an amortized loan.
///
/// # Errors
///
/// Returns [`InstallmentError`] when the price is not positive, the down
/// payment percentage is outside `[0, 100)`, the term is zero, or the
/// rate is negative.
pub fn calculate(input: &InstallmentInput) -> Result<InstallmentResult, InstallmentError> {
    if input.price <= Decimal::ZERO {
        return Err(InstallmentError::NonPositivePrice(input.price));
    }
    if input.down_payment_percent < Decimal::ZERO
        || input.down_payment_percent >= Decimal::ONE_HUNDRED
    {
        return Err(InstallmentError::DownPaymentOutOfRange(
            input.down_payment_percent,
        ));
    }
    if input.term_months == 0 {
        return Err(InstallmentError::ZeroTerm);
    }
    if input.annual_rate_percent < Decimal::ZERO {
        return Err(InstallmentError::NegativeRate(input.annual_rate_percent));
    }

    let down_payment = down_payment_amount(input.price, input.down_payment_percent);
    let loan_amount = input.price - down_payment;
    let rate = monthly_rate(input.annual_rate_percent);

    let payment = if rate > Decimal::ZERO {
        amortized_payment(loan_amount, rate, input.term_months)
    } else {
        debug!(%loan_amount, term_months = input.term_months, "zero rate, dividing evenly");
        loan_amount / Decimal::from(input.term_months)
    };

    Ok(InstallmentResult {
        monthly_payment: round_half_up(payment),
        down_payment: round_half_up(down_payment),
        loan_amount: round_half_up(loan_amount),
    })
}

/// Calculates the up-front down payment amount.
fn down_payment_amount(
    price: Decimal,
    percent: Decimal,
) -> Decimal {
    price * percent / Decimal::ONE_HUNDRED
}

/// Converts an annual percentage rate to a monthly fractional rate.
fn monthly_rate(annual_percent: Decimal) -> Decimal {
    annual_percent / Decimal::ONE_HUNDRED / Decimal::from(12)
}

/// Calculates the constant payment via the amortization formula
/// `loan·r / (1 − (1+r)^−term)`.
fn amortized_payment(
    loan_amount: Decimal,
    rate: Decimal,
    term_months: u32,
) -> Decimal {
    let factor = compound_factor(rate, term_months);
    loan_amount * rate / (Decimal::ONE - Decimal::ONE / factor)
}

/// Computes `(1 + rate)^periods` by repeated multiplication.
fn compound_factor(
    rate: Decimal,
    periods: u32,
) -> Decimal {
    let base = Decimal::ONE + rate;
    let mut factor = Decimal::ONE;
    for _ in 0..periods {
        factor *= base;
    }
    factor
}
