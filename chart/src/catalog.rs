//! The authoritative type catalog
//!
//! Holds every [`Type`] descriptor at full fidelity, independent of any
//! level restriction. The standard chart is a static table; alternative
//! charts can be loaded from JSON at startup.

use serde::Deserialize;

use crate::{ChartError, Result, Type, TypeName};

use TypeName::*;

/// One row of the static chart: (defender, resists, weak, nulls)
type ChartRow = (TypeName, &'static [TypeName], &'static [TypeName], &'static [TypeName]);

/// Defensive relationships for all 18 types, in canonical order
///
/// Each row lists the attacking types the defender resists (0.5x), is weak
/// to (2x), and nulls (0x).
#[rustfmt::skip]
pub static STANDARD_CHART: [ChartRow; TypeName::COUNT] = [
    (Normal,   &[],                                                              &[Fighting],                              &[Ghost]),
    (Fire,     &[Fire, Grass, Ice, Bug, Steel, Fairy],                           &[Water, Ground, Rock],                   &[]),
    (Water,    &[Fire, Water, Ice, Steel],                                       &[Grass, Electric],                       &[]),
    (Grass,    &[Water, Grass, Electric, Ground],                                &[Fire, Ice, Poison, Flying, Bug],        &[]),
    (Electric, &[Electric, Flying, Steel],                                       &[Ground],                                &[]),
    (Ice,      &[Ice],                                                           &[Fire, Fighting, Rock, Steel],           &[]),
    (Fighting, &[Bug, Rock, Dark],                                               &[Flying, Psychic, Fairy],                &[]),
    (Poison,   &[Grass, Fighting, Poison, Bug, Fairy],                           &[Ground, Psychic],                       &[]),
    (Ground,   &[Poison, Rock],                                                  &[Water, Grass, Ice],                     &[Electric]),
    (Flying,   &[Grass, Fighting, Bug],                                          &[Electric, Ice, Rock],                   &[Ground]),
    (Psychic,  &[Fighting, Psychic],                                             &[Bug, Ghost, Dark],                      &[]),
    (Bug,      &[Grass, Fighting, Ground],                                       &[Fire, Flying, Rock],                    &[]),
    (Rock,     &[Normal, Fire, Poison, Flying],                                  &[Water, Grass, Fighting, Ground, Steel], &[]),
    (Ghost,    &[Poison, Bug],                                                   &[Ghost, Dark],                           &[Normal, Fighting]),
    (Dragon,   &[Fire, Water, Grass, Electric],                                  &[Ice, Dragon, Fairy],                    &[]),
    (Dark,     &[Ghost, Dark],                                                   &[Fighting, Bug, Fairy],                  &[Psychic]),
    (Steel,    &[Normal, Grass, Ice, Flying, Psychic, Bug, Rock, Dragon, Steel, Fairy], &[Fire, Fighting, Ground],     &[Poison]),
    (Fairy,    &[Fighting, Bug, Dark],                                           &[Poison, Steel],                         &[Dragon]),
];

/// The canonical set of type descriptors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeCatalog {
    types: Vec<Type>,
}

/// On-disk chart layout: `{"types": [{"name": "Fire", "resists": [...], ...}]}`
#[derive(Debug, Deserialize)]
struct ChartDocument {
    types: Vec<Type>,
}

impl TypeCatalog {
    /// Build every descriptor from the standard chart
    pub fn build_all() -> Self {
        let types = STANDARD_CHART
            .iter()
            .map(|(name, resists, weak, nulls)| Type::new(*name, *resists, *weak, *nulls))
            .collect();
        Self { types }
    }

    /// Alias for [`TypeCatalog::build_all`]
    pub fn standard() -> Self {
        Self::build_all()
    }

    /// Build a catalog from descriptors, checking each one
    ///
    /// Descriptors are sorted into canonical order. Types missing from the
    /// input are simply absent from the catalog.
    pub fn from_types(mut types: Vec<Type>) -> Result<Self> {
        types.sort_by_key(|t| t.name);
        for pair in types.windows(2) {
            if pair[0].name == pair[1].name {
                tracing::warn!(type_name = %pair[0].name, "duplicate type in chart");
                return Err(ChartError::DuplicateType(pair[0].name));
            }
        }
        for descriptor in &types {
            if let Err(e) = descriptor.validate() {
                tracing::warn!(error = %e, "invalid type relations in chart");
                return Err(e);
            }
        }
        Ok(Self { types })
    }

    /// Load a chart from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        let document: ChartDocument = serde_json::from_str(json)?;
        let catalog = Self::from_types(document.types)?;
        tracing::info!(types = catalog.len(), "loaded type chart");
        Ok(catalog)
    }

    /// Look up a descriptor by name
    pub fn get(&self, name: TypeName) -> Option<&Type> {
        self.types
            .binary_search_by_key(&name, |t| t.name)
            .ok()
            .map(|i| &self.types[i])
    }

    /// All descriptors in canonical order
    pub fn types(&self) -> &[Type] {
        &self.types
    }

    pub fn iter(&self) -> impl Iterator<Item = &Type> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeCatalog {
    fn default() -> Self {
        Self::build_all()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TypeSet;

    #[test]
    fn test_build_all_is_canonical() {
        let catalog = TypeCatalog::build_all();
        assert_eq!(catalog.len(), 18);
        let names: Vec<TypeName> = catalog.iter().map(|t| t.name).collect();
        assert_eq!(names, TypeName::all());
    }

    #[test]
    fn test_standard_chart_is_consistent() {
        for descriptor in TypeCatalog::build_all().iter() {
            assert!(descriptor.validate().is_ok(), "{descriptor} overlaps");
        }
    }

    #[test]
    fn test_fire_row() {
        let catalog = TypeCatalog::build_all();
        let fire = catalog.get(Fire).unwrap();
        assert_eq!(
            fire.resists,
            TypeSet::from([Fire, Grass, Ice, Bug, Steel, Fairy])
        );
        assert_eq!(fire.weak, TypeSet::from([Water, Ground, Rock]));
        assert!(fire.nulls.is_empty());
    }

    #[test]
    fn test_immunities() {
        let catalog = TypeCatalog::build_all();
        assert_eq!(catalog.get(Normal).unwrap().nulls, TypeSet::from([Ghost]));
        assert_eq!(catalog.get(Ghost).unwrap().nulls, TypeSet::from([Normal, Fighting]));
        assert_eq!(catalog.get(Ground).unwrap().nulls, TypeSet::from([Electric]));
        assert_eq!(catalog.get(Flying).unwrap().nulls, TypeSet::from([Ground]));
        assert_eq!(catalog.get(Dark).unwrap().nulls, TypeSet::from([Psychic]));
        assert_eq!(catalog.get(Steel).unwrap().nulls, TypeSet::from([Poison]));
        assert_eq!(catalog.get(Fairy).unwrap().nulls, TypeSet::from([Dragon]));
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "types": [
                {"name": "Water", "resists": ["Fire", "Water"], "weak": ["Grass"]},
                {"name": "Fire", "resists": ["Grass"], "weak": ["Water"], "nulls": []}
            ]
        }"#;
        let catalog = TypeCatalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.types()[0].name, Fire);
        assert_eq!(catalog.get(Water).unwrap().weak, TypeSet::from([Grass]));
        assert!(catalog.get(Ghost).is_none());
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"{"types": [{"name": "Fire"}, {"name": "Fire"}]}"#;
        let err = TypeCatalog::from_json(json).unwrap_err();
        assert!(matches!(err, ChartError::DuplicateType(Fire)));
    }

    #[test]
    fn test_from_json_rejects_overlap() {
        let json = r#"{"types": [{"name": "Ice", "resists": ["Ice"], "nulls": ["Ice"]}]}"#;
        let err = TypeCatalog::from_json(json).unwrap_err();
        assert!(matches!(
            err,
            ChartError::OverlappingRelations { defender: Ice, attacker: Ice }
        ));
    }

    #[test]
    fn test_from_json_rejects_unknown_names() {
        let json = r#"{"types": [{"name": "Sound"}]}"#;
        assert!(matches!(TypeCatalog::from_json(json), Err(ChartError::Json(_))));
    }
}
