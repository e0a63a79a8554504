//! Attack efficacy against single and dual-typed defenders

use typedex_chart::{Efficacy, Type};

/// The defending side of an attack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defenders<'a> {
    Single(&'a Type),
    Dual(&'a Type, &'a Type),
}

impl<'a> Defenders<'a> {
    /// Build from a slice, combining at most the first two entries
    ///
    /// Returns `None` for an empty slice.
    pub fn from_slice(types: &'a [Type]) -> Option<Self> {
        match types {
            [] => None,
            [only] => Some(Defenders::Single(only)),
            [first, second, ..] => Some(Defenders::Dual(first, second)),
        }
    }

    pub fn is_dual(&self) -> bool {
        matches!(self, Defenders::Dual(..))
    }
}

impl<'a> From<&'a Type> for Defenders<'a> {
    fn from(defender: &'a Type) -> Self {
        Defenders::Single(defender)
    }
}

impl<'a> From<(&'a Type, &'a Type)> for Defenders<'a> {
    fn from((first, second): (&'a Type, &'a Type)) -> Self {
        Defenders::Dual(first, second)
    }
}

/// Computes damage multipliers from type descriptors
///
/// Descriptors are taken as given; level filtering happens before they
/// reach the engine (see [`LevelGate`](crate::LevelGate)).
///
/// # Example
///
/// ```
/// use typedex_chart::{Efficacy, TypeCatalog, TypeName};
/// use typedex_engine::EfficacyEngine;
///
/// let catalog = TypeCatalog::build_all();
/// let water = catalog.get(TypeName::Water).unwrap();
/// let fire = catalog.get(TypeName::Fire).unwrap();
/// assert_eq!(EfficacyEngine::efficacy(water, fire), Efficacy::SuperEffective);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct EfficacyEngine;

impl EfficacyEngine {
    /// Efficacy of `attacker` against one defending type
    ///
    /// Checked in order weak, resists, nulls. An attacker in none of the
    /// defender's sets is neutral.
    pub fn efficacy(attacker: &Type, defender: &Type) -> Efficacy {
        let name = attacker.name;
        if defender.weak.contains(name) {
            Efficacy::SuperEffective
        } else if defender.resists.contains(name) {
            Efficacy::SlightlyEffective
        } else if defender.nulls.contains(name) {
            Efficacy::NotEffective
        } else {
            Efficacy::Effective
        }
    }

    /// Efficacy against one or two defending types
    ///
    /// Dual types multiply the two single-type results and simplify the
    /// product back onto the four-step scale.
    pub fn attack_efficacy(attacker: &Type, defenders: Defenders<'_>) -> Efficacy {
        match defenders {
            Defenders::Single(defender) => Self::efficacy(attacker, defender),
            Defenders::Dual(first, second) => {
                Self::efficacy(attacker, first).combine(Self::efficacy(attacker, second))
            }
        }
    }

    /// Efficacy against a slice of defending types
    ///
    /// Only the first two entries are combined; an empty slice is neutral.
    pub fn attack_efficacy_slice(attacker: &Type, defenders: &[Type]) -> Efficacy {
        Defenders::from_slice(defenders)
            .map(|d| Self::attack_efficacy(attacker, d))
            .unwrap_or(Efficacy::Effective)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use typedex_chart::{TypeCatalog, TypeName};

    use TypeName::*;

    fn catalog() -> TypeCatalog {
        TypeCatalog::build_all()
    }

    fn eff(catalog: &TypeCatalog, attacker: TypeName, defender: TypeName) -> Efficacy {
        EfficacyEngine::efficacy(
            catalog.get(attacker).unwrap(),
            catalog.get(defender).unwrap(),
        )
    }

    fn eff_dual(
        catalog: &TypeCatalog,
        attacker: TypeName,
        first: TypeName,
        second: TypeName,
    ) -> Efficacy {
        EfficacyEngine::attack_efficacy(
            catalog.get(attacker).unwrap(),
            Defenders::Dual(catalog.get(first).unwrap(), catalog.get(second).unwrap()),
        )
    }

    #[test]
    fn test_single_type_scenarios() {
        let c = catalog();
        assert_eq!(eff(&c, Fire, Water), Efficacy::SlightlyEffective);
        assert_eq!(eff(&c, Water, Fire), Efficacy::SuperEffective);
        assert_eq!(eff(&c, Normal, Ghost), Efficacy::NotEffective);
        assert_eq!(eff(&c, Normal, Fire), Efficacy::Effective);
    }

    #[test]
    fn test_super_effective() {
        let c = catalog();
        assert_eq!(eff(&c, Fire, Grass), Efficacy::SuperEffective);
        assert_eq!(eff(&c, Electric, Water), Efficacy::SuperEffective);
        assert_eq!(eff(&c, Fighting, Normal), Efficacy::SuperEffective);
        assert_eq!(eff(&c, Fairy, Dragon), Efficacy::SuperEffective);
    }

    #[test]
    fn test_immune() {
        let c = catalog();
        assert_eq!(eff(&c, Ghost, Normal), Efficacy::NotEffective);
        assert_eq!(eff(&c, Electric, Ground), Efficacy::NotEffective);
        assert_eq!(eff(&c, Ground, Flying), Efficacy::NotEffective);
        assert_eq!(eff(&c, Psychic, Dark), Efficacy::NotEffective);
        assert_eq!(eff(&c, Dragon, Fairy), Efficacy::NotEffective);
        assert_eq!(eff(&c, Poison, Steel), Efficacy::NotEffective);
    }

    #[test]
    fn test_every_pair_has_one_outcome() {
        let c = catalog();
        for attacker in c.iter() {
            for defender in c.iter() {
                let hits = [
                    defender.weak.contains(attacker.name),
                    defender.resists.contains(attacker.name),
                    defender.nulls.contains(attacker.name),
                ]
                .iter()
                .filter(|hit| **hit)
                .count();
                assert!(hits <= 1, "{attacker} vs {defender}");

                let result = EfficacyEngine::efficacy(attacker, defender);
                assert!([0.0, 0.5, 1.0, 2.0].contains(&result.multiplier()));
                assert_eq!(result == Efficacy::Effective, hits == 0);
            }
        }
    }

    #[test]
    fn test_precedence_on_overlapping_data() {
        let attacker = Type::new(Fire, [], [], []);
        let everything = Type::new(Water, [Fire], [Fire], [Fire]);
        assert_eq!(
            EfficacyEngine::efficacy(&attacker, &everything),
            Efficacy::SuperEffective
        );

        let resist_and_null = Type::new(Water, [Fire], [], [Fire]);
        assert_eq!(
            EfficacyEngine::efficacy(&attacker, &resist_and_null),
            Efficacy::SlightlyEffective
        );
    }

    #[test]
    fn test_dual_type_scenario() {
        let c = catalog();
        // 0.5 x 2 = 1
        assert_eq!(eff_dual(&c, Fire, Water, Grass), Efficacy::Effective);
    }

    #[test]
    fn test_dual_type_simplification() {
        let c = catalog();
        // 2 x 2 = 4 -> 2
        assert_eq!(eff_dual(&c, Fire, Grass, Steel), Efficacy::SuperEffective);
        // 0.5 x 0.5 = 0.25 -> 0.5
        assert_eq!(eff_dual(&c, Fire, Water, Rock), Efficacy::SlightlyEffective);
        // 2 x 0 = 0
        assert_eq!(eff_dual(&c, Ground, Steel, Flying), Efficacy::NotEffective);
        // 1 x 0.5 = 0.5
        assert_eq!(eff_dual(&c, Fire, Normal, Water), Efficacy::SlightlyEffective);
        // 2 x 1 = 2
        assert_eq!(eff_dual(&c, Electric, Water, Normal), Efficacy::SuperEffective);
    }

    #[test]
    fn test_from_slice_uses_first_two() {
        let c = catalog();
        let fire = c.get(Fire).unwrap();
        let defenders = vec![
            c.get(Water).unwrap().clone(),
            c.get(Grass).unwrap().clone(),
            c.get(Rock).unwrap().clone(),
        ];
        // Rock would make it 0.5 if it were included
        assert_eq!(
            EfficacyEngine::attack_efficacy_slice(fire, &defenders),
            Efficacy::Effective
        );
        assert!(Defenders::from_slice(&defenders).unwrap().is_dual());
        assert!(!Defenders::from_slice(&defenders[..1]).unwrap().is_dual());
    }

    #[test]
    fn test_empty_slice_is_neutral() {
        let c = catalog();
        assert!(Defenders::from_slice(&[]).is_none());
        assert_eq!(
            EfficacyEngine::attack_efficacy_slice(c.get(Fire).unwrap(), &[]),
            Efficacy::Effective
        );
    }
}
