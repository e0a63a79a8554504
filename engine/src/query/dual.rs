//! Derived view over a dual-typed defender

use typedex_chart::{Efficacy, Type, TypeSet};

use crate::efficacy::{Defenders, EfficacyEngine};

/// Two defending types treated as one
///
/// Nothing is precomputed: each relation set is derived from the combined
/// efficacy of every supplied attacker when asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DualType<'a> {
    pub first: &'a Type,
    pub second: &'a Type,
}

impl<'a> DualType<'a> {
    pub fn new(first: &'a Type, second: &'a Type) -> Self {
        Self { first, second }
    }

    pub fn defenders(&self) -> Defenders<'a> {
        Defenders::Dual(self.first, self.second)
    }

    /// Combined efficacy of one attacker
    pub fn efficacy(&self, attacker: &Type) -> Efficacy {
        EfficacyEngine::attack_efficacy(attacker, self.defenders())
    }

    /// Attackers that land super effective after combination
    pub fn weak(&self, attackers: &[Type]) -> TypeSet {
        self.collect(attackers, Efficacy::SuperEffective)
    }

    /// Attackers that land slightly effective after combination
    pub fn resists(&self, attackers: &[Type]) -> TypeSet {
        self.collect(attackers, Efficacy::SlightlyEffective)
    }

    /// Attackers that deal no damage after combination
    pub fn nulls(&self, attackers: &[Type]) -> TypeSet {
        self.collect(attackers, Efficacy::NotEffective)
    }

    fn collect(&self, attackers: &[Type], wanted: Efficacy) -> TypeSet {
        attackers
            .iter()
            .filter(|t| self.efficacy(t) == wanted)
            .map(|t| t.name)
            .collect()
    }
}

impl std::fmt::Display for DualType<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.first.name, self.second.name)
    }
}
