//! The four-step damage multiplier scale

use serde::{Deserialize, Serialize};

/// Damage multiplier of one attack against a defender
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Efficacy {
    /// 0x
    NotEffective,
    /// 0.5x
    SlightlyEffective,
    /// 1x
    Effective,
    /// 2x
    SuperEffective,
}

impl Efficacy {
    /// Numeric multiplier
    pub fn multiplier(&self) -> f32 {
        match self {
            Efficacy::NotEffective => 0.0,
            Efficacy::SlightlyEffective => 0.5,
            Efficacy::Effective => 1.0,
            Efficacy::SuperEffective => 2.0,
        }
    }

    /// Map a raw product of two multipliers back onto the four-step scale
    ///
    /// 0.25 and 0.5 collapse to 0.5, 2 and 4 collapse to 2. Values that no
    /// pair of multipliers can produce fall through to `NotEffective`.
    pub fn from_product(raw: f32) -> Self {
        if raw == 0.25 || raw == 0.5 {
            Efficacy::SlightlyEffective
        } else if raw == 1.0 {
            Efficacy::Effective
        } else if raw == 2.0 || raw == 4.0 {
            Efficacy::SuperEffective
        } else {
            Efficacy::NotEffective
        }
    }

    /// Multiply against a second defending type and simplify
    pub fn combine(self, other: Efficacy) -> Self {
        Self::from_product(self.multiplier() * other.multiplier())
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Efficacy::NotEffective => "Not effective",
            Efficacy::SlightlyEffective => "Slightly effective",
            Efficacy::Effective => "Effective",
            Efficacy::SuperEffective => "Super effective",
        }
    }
}

impl std::fmt::Display for Efficacy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
