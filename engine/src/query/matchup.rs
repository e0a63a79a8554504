//! Type matchup helpers for decision making

use typedex_chart::{Efficacy, Type, TypeName};

use crate::efficacy::{Defenders, EfficacyEngine};

fn efficacy_of(attacker: &Type, defenders: Defenders<'_>) -> Efficacy {
    EfficacyEngine::attack_efficacy(attacker, defenders)
}

fn names_where(
    defenders: Defenders<'_>,
    attackers: &[Type],
    keep: impl Fn(Efficacy) -> bool,
) -> Vec<TypeName> {
    attackers
        .iter()
        .filter(|t| keep(efficacy_of(t, defenders)))
        .map(|t| t.name)
        .collect()
}

/// Check if defender is super-effectively hit by any of the attacking types
pub fn is_weak_to_any(defenders: Defenders<'_>, attackers: &[Type]) -> bool {
    attackers
        .iter()
        .any(|t| efficacy_of(t, defenders) == Efficacy::SuperEffective)
}

/// Check if defender takes reduced damage (<1x) from all of the attacking types
pub fn resists_all(defenders: Defenders<'_>, attackers: &[Type]) -> bool {
    if attackers.is_empty() {
        return false;
    }
    attackers
        .iter()
        .all(|t| efficacy_of(t, defenders) < Efficacy::Effective)
}

/// Check if defender takes no damage from an attacking type
pub fn is_immune_to(defenders: Defenders<'_>, attacker: &Type) -> bool {
    efficacy_of(attacker, defenders) == Efficacy::NotEffective
}

/// Attacking types that are super effective against the defender
pub fn weaknesses(defenders: Defenders<'_>, attackers: &[Type]) -> Vec<TypeName> {
    names_where(defenders, attackers, |e| e == Efficacy::SuperEffective)
}

/// Attacking types the defender resists (0.5x, immunities excluded)
pub fn resistances(defenders: Defenders<'_>, attackers: &[Type]) -> Vec<TypeName> {
    names_where(defenders, attackers, |e| e == Efficacy::SlightlyEffective)
}

/// Attacking types the defender is immune to
pub fn immunities(defenders: Defenders<'_>, attackers: &[Type]) -> Vec<TypeName> {
    names_where(defenders, attackers, |e| e == Efficacy::NotEffective)
}
