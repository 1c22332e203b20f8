use serde::{Deserialize, Serialize};

/// Lifecycle phase of a calculator form.
///
/// The machine is re-enterable: edits move it back toward
/// `PartiallyFilled`/`Ready`, reset returns it to `Empty`, and there is no
/// terminal state. The phase is always derived from the current fields and
/// result, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormPhase {
    /// No field holds a user-entered value.
    Empty,
    /// Some fields are set, but not enough (or not valid enough) to compute.
    PartiallyFilled,
    /// Every required field is present and valid.
    Ready,
    /// A result has been computed and no field has changed since.
    Computed,
}

impl FormPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::PartiallyFilled => "partially filled",
            Self::Ready => "ready",
            Self::Computed => "computed",
        }
    }
}
