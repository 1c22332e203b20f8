use serde::{Deserialize, Serialize};

/// Biological sex as used by the Mifflin-St Jeor equation.
///
/// The equation defines exactly two branches; there is no formula for
/// values outside this set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn as_str_round_trips_through_parse() {
        assert_eq!(Sex::parse(Sex::Male.as_str()), Some(Sex::Male));
        assert_eq!(Sex::parse(Sex::Female.as_str()), Some(Sex::Female));
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(Sex::parse(""), None);
        assert_eq!(Sex::parse("other"), None);
        assert_eq!(Sex::parse("MALE"), None);
    }
}
