//! Single-type descriptors with defensive relationships

use serde::{Deserialize, Serialize};

use crate::{ChartError, TypeName, TypeSet};

/// A defending type and how it reacts to each attacking type
///
/// Attacking types absent from all three sets deal neutral damage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Type {
    pub name: TypeName,

    /// Attacking types this type takes half damage from
    #[serde(default)]
    pub resists: TypeSet,

    /// Attacking types this type takes double damage from
    #[serde(default)]
    pub weak: TypeSet,

    /// Attacking types this type takes no damage from
    #[serde(default)]
    pub nulls: TypeSet,
}

impl Type {
    /// Build a descriptor without checking the relation sets
    pub fn new(
        name: TypeName,
        resists: impl Into<TypeSet>,
        weak: impl Into<TypeSet>,
        nulls: impl Into<TypeSet>,
    ) -> Self {
        Self {
            name,
            resists: resists.into(),
            weak: weak.into(),
            nulls: nulls.into(),
        }
    }

    /// Check that no attacker appears in more than one relation set
    pub fn validate(&self) -> Result<(), ChartError> {
        let pairs = [
            (&self.resists, &self.weak),
            (&self.resists, &self.nulls),
            (&self.weak, &self.nulls),
        ];
        for (a, b) in pairs {
            if let Some(attacker) = a.first_shared(b) {
                return Err(ChartError::OverlappingRelations {
                    defender: self.name,
                    attacker,
                });
            }
        }
        Ok(())
    }

    /// Derived view with every relation set restricted to `active`
    pub fn restricted_to(&self, active: &[TypeName]) -> Type {
        Type {
            name: self.name,
            resists: self.resists.retain_in(active),
            weak: self.weak.retain_in(active),
            nulls: self.nulls.retain_in(active),
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
