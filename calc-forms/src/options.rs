//! Closed input sets for the installment form.
//!
//! Down-payment percentage and loan term are selected from fixed lists,
//! not typed freely; representing them as enums keeps every reachable form
//! state inside the allowed sets and gives both fields a default, so they
//! can never make the form incomplete.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Allowed down-payment percentages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownPaymentRate {
    #[default]
    Fifteen,
    Twenty,
    Thirty,
    ThirtyFive,
}

impl DownPaymentRate {
    /// All rates, in the order the form offers them.
    pub const ALL: [Self; 4] = [Self::Fifteen, Self::Twenty, Self::Thirty, Self::ThirtyFive];

    /// The percentage as a number, for the calculation core.
    pub fn percent(&self) -> Decimal {
        match self {
            Self::Fifteen => Decimal::from(15),
            Self::Twenty => Decimal::from(20),
            Self::Thirty => Decimal::from(30),
            Self::ThirtyFive => Decimal::from(35),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fifteen => "15",
            Self::Twenty => "20",
            Self::Thirty => "30",
            Self::ThirtyFive => "35",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rate| rate.as_str() == s.trim())
    }
}

/// Allowed loan terms.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoanTerm {
    #[default]
    Months12,
    Months24,
    Months36,
    Months48,
    Months60,
    Months72,
}

impl LoanTerm {
    /// All terms, in the order the form offers them.
    pub const ALL: [Self; 6] = [
        Self::Months12,
        Self::Months24,
        Self::Months36,
        Self::Months48,
        Self::Months60,
        Self::Months72,
    ];

    /// The term length in months, for the calculation core.
    pub fn months(&self) -> u32 {
        match self {
            Self::Months12 => 12,
            Self::Months24 => 24,
            Self::Months36 => 36,
            Self::Months48 => 48,
            Self::Months60 => 60,
            Self::Months72 => 72,
        }
    }

    /// Human label for the term, e.g. `36 months (3 years)`.
    pub fn label(&self) -> String {
        let years = self.months() / 12;
        if years == 1 {
            format!("{} months (1 year)", self.months())
        } else {
            format!("{} months ({} years)", self.months(), years)
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Months12 => "12",
            Self::Months24 => "24",
            Self::Months36 => "36",
            Self::Months48 => "48",
            Self::Months60 => "60",
            Self::Months72 => "72",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|term| term.as_str() == s.trim())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn down_payment_defaults_to_fifteen_percent() {
        assert_eq!(DownPaymentRate::default(), DownPaymentRate::Fifteen);
        assert_eq!(DownPaymentRate::default().percent(), dec!(15));
    }

    #[test]
    fn down_payment_parse_round_trips() {
        for rate in DownPaymentRate::ALL {
            assert_eq!(DownPaymentRate::parse(rate.as_str()), Some(rate));
        }
    }

    #[test]
    fn down_payment_parse_rejects_values_outside_the_set() {
        assert_eq!(DownPaymentRate::parse("25"), None);
        assert_eq!(DownPaymentRate::parse(""), None);
    }

    #[test]
    fn loan_term_defaults_to_twelve_months() {
        assert_eq!(LoanTerm::default(), LoanTerm::Months12);
        assert_eq!(LoanTerm::default().months(), 12);
    }

    #[test]
    fn loan_term_months_are_never_zero() {
        for term in LoanTerm::ALL {
            assert!(term.months() > 0);
        }
    }

    #[test]
    fn loan_term_parse_round_trips() {
        for term in LoanTerm::ALL {
            assert_eq!(LoanTerm::parse(term.as_str()), Some(term));
        }
    }

    #[test]
    fn loan_term_labels_pluralize_years() {
        assert_eq!(LoanTerm::Months12.label(), "12 months (1 year)");
        assert_eq!(LoanTerm::Months36.label(), "36 months (3 years)");
    }
}
