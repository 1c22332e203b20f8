//! Static catalog of the calculators, as linked from the landing page.

use serde::{Deserialize, Serialize};

/// The calculators the suite ships.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Calculator {
    Bmi,
    Bmr,
    CarInstallment,
}

impl Calculator {
    /// All calculators, in the order the landing page lists them.
    pub const ALL: [Self; 3] = [Self::Bmi, Self::Bmr, Self::CarInstallment];

    /// Stable URL slug used for routing.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Bmi => "bmi",
            Self::Bmr => "bmr",
            Self::CarInstallment => "carinstallment",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Bmi => "BMI Calculator",
            Self::Bmr => "BMR Calculator",
            Self::CarInstallment => "Car Installment Calculator",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Bmi => "Body mass index from weight and height",
            Self::Bmr => "Daily basal energy expenditure (Mifflin-St Jeor)",
            Self::CarInstallment => "Monthly car-loan payment after down payment",
        }
    }

    /// Resolves a URL slug back to its calculator.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.slug() == slug)
    }
}
