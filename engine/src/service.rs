//! TypeEngine - entry point for level-aware type queries

use std::sync::Arc;

use typedex_chart::{Efficacy, Type, TypeCatalog, TypeName};

use crate::config::EngineConfig;
use crate::efficacy::{Defenders, EfficacyEngine};
use crate::level::{Level, LevelGate};
use crate::Result;

/// Type queries at a configured progression level
///
/// Owns its own [`LevelGate`], so two engines never share a level cache.
#[derive(Debug)]
pub struct TypeEngine {
    gate: LevelGate,
    level: Level,
}

impl TypeEngine {
    /// Create an engine over the standard chart
    pub fn new(config: EngineConfig) -> Self {
        Self::with_catalog(Arc::new(TypeCatalog::build_all()), config)
    }

    /// Create an engine over a specific catalog
    pub fn with_catalog(catalog: Arc<TypeCatalog>, config: EngineConfig) -> Self {
        Self {
            gate: LevelGate::new(catalog),
            level: config.level,
        }
    }

    /// Create an engine from a JSON chart document
    pub fn from_chart_json(chart: &str, config: EngineConfig) -> Result<Self> {
        let catalog = TypeCatalog::from_json(chart)?;
        Ok(Self::with_catalog(Arc::new(catalog), config))
    }

    /// Current progression level
    pub fn level(&self) -> Level {
        self.level
    }

    /// Select the progression level used by subsequent queries
    pub fn set_level(&mut self, level: Level) {
        self.level = level;
    }

    /// Descriptors active at the current level, relations filtered to match
    pub fn get_active_types(&self) -> Vec<Type> {
        self.gate.active_type_descriptors(self.level)
    }

    /// Names active at the current level
    pub fn active_type_names(&self) -> Arc<[TypeName]> {
        self.gate.active_types_for_level(self.level)
    }

    /// Efficacy of an attack on the four-step scale
    ///
    /// Every descriptor is restricted to the types active at the current
    /// level first, so unfiltered catalog records give the same answer as
    /// [`TypeEngine::attack_efficacy_by_name`].
    pub fn attack_efficacy<'a>(
        &self,
        attacker: &Type,
        defenders: impl Into<Defenders<'a>>,
    ) -> Efficacy {
        let active = self.active_type_names();
        let attacker = self.gated(attacker, &active);
        match defenders.into() {
            Defenders::Single(defender) => {
                EfficacyEngine::efficacy(&attacker, &self.gated(defender, &active))
            }
            Defenders::Dual(first, second) => {
                let first = self.gated(first, &active);
                let second = self.gated(second, &active);
                EfficacyEngine::attack_efficacy(&attacker, Defenders::Dual(&first, &second))
            }
        }
    }

    /// Numeric multiplier of an attack (0, 0.5, 1 or 2)
    pub fn get_attack_efficacy<'a>(
        &self,
        attacker: &Type,
        defenders: impl Into<Defenders<'a>>,
    ) -> f32 {
        self.attack_efficacy(attacker, defenders).multiplier()
    }

    /// Efficacy between type names, resolved at the current level
    ///
    /// Defenders that are locked at this level contribute a neutral 1x.
    /// Only the first two defenders are combined.
    pub fn attack_efficacy_by_name(&self, attacker: TypeName, defenders: &[TypeName]) -> Efficacy {
        let attacker = self.resolve(attacker);
        let defenders: Vec<Type> = defenders.iter().take(2).map(|n| self.resolve(*n)).collect();
        EfficacyEngine::attack_efficacy_slice(&attacker, &defenders)
    }

    /// Level-filtered descriptor, or an empty one for locked types
    fn resolve(&self, name: TypeName) -> Type {
        self.gate.descriptor_at(name, self.level).unwrap_or_else(|| {
            tracing::debug!(type_name = %name, level = self.level, "type not active, treating as neutral");
            Type::new(name, [], [], [])
        })
    }

    /// Restrict a descriptor to `active`, or empty it when its own type is locked
    fn gated(&self, descriptor: &Type, active: &[TypeName]) -> Type {
        if active.contains(&descriptor.name) {
            return descriptor.restricted_to(active);
        }
        tracing::debug!(type_name = %descriptor.name, level = self.level, "type not active, treating as neutral");
        Type::new(descriptor.name, [], [], [])
    }

    pub fn gate(&self) -> &LevelGate {
        &self.gate
    }

    pub fn catalog(&self) -> &TypeCatalog {
        self.gate.catalog()
    }
}

impl Default for TypeEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
