//! Level-based type unlocks
//!
//! At level `L` the active types are the canonical list with its first
//! `2 + L` entries removed. The start index is clamped to the list, so very
//! low levels see every type and very high levels see none. Results are
//! cached per level for the lifetime of the [`LevelTypeIndex`].
//!
//! Levels of -3 and below also give the full list; the start is never
//! counted back from the end of the canonical list.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::RwLock;
use typedex_chart::{Type, TypeCatalog, TypeName, TypeSet};

/// Caller-supplied progression level
pub type Level = i32;

/// Number of leading canonical types dropped at level 0
const BOUNDARY_OFFSET: i64 = 2;

/// Index into the canonical list where the active types start
pub fn unlock_boundary(level: Level) -> usize {
    let start = BOUNDARY_OFFSET + i64::from(level);
    start.clamp(0, TypeName::COUNT as i64) as usize
}

/// Compute the active types for a level without caching
pub fn compute_active_types(level: Level) -> Vec<TypeName> {
    TypeName::all()[unlock_boundary(level)..].to_vec()
}

/// Insert-once cache of active types per level
///
/// Entries are never evicted or replaced, so repeated lookups for one level
/// hand out the same `Arc`.
#[derive(Debug, Default)]
pub struct LevelTypeIndex {
    entries: RwLock<HashMap<Level, Arc<[TypeName]>>>,
}

impl LevelTypeIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the active types for a level, computing them on first access
    pub fn get_or_compute(&self, level: Level) -> Arc<[TypeName]> {
        if let Some(active) = self.entries.read().get(&level) {
            return Arc::clone(active);
        }

        let mut entries = self.entries.write();
        let active = entries.entry(level).or_insert_with(|| {
            let active = compute_active_types(level);
            tracing::debug!(level, active = active.len(), "computed active types for level");
            Arc::from(active)
        });
        Arc::clone(active)
    }

    /// Whether a level has been computed yet
    pub fn is_cached(&self, level: Level) -> bool {
        self.entries.read().contains_key(&level)
    }

    /// Number of cached levels
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

/// Filters the catalog down to the types unlocked at a level
#[derive(Debug)]
pub struct LevelGate {
    catalog: Arc<TypeCatalog>,
    index: LevelTypeIndex,
}

impl LevelGate {
    /// Create a gate over a catalog with a fresh cache
    pub fn new(catalog: Arc<TypeCatalog>) -> Self {
        Self {
            catalog,
            index: LevelTypeIndex::new(),
        }
    }

    /// Gate over the standard chart
    pub fn standard() -> Self {
        Self::new(Arc::new(TypeCatalog::build_all()))
    }

    /// Type names active at a level, in canonical order
    pub fn active_types_for_level(&self, level: Level) -> Arc<[TypeName]> {
        self.index.get_or_compute(level)
    }

    pub fn is_active(&self, name: TypeName, level: Level) -> bool {
        self.active_types_for_level(level).contains(&name)
    }

    /// Subset of `types` active at a level
    pub fn filter_by_level(&self, types: &TypeSet, level: Level) -> TypeSet {
        types.retain_in(&self.active_types_for_level(level))
    }

    /// Descriptors whose name is active at a level, with every relation set
    /// restricted to active types
    pub fn active_type_descriptors(&self, level: Level) -> Vec<Type> {
        let active = self.active_types_for_level(level);
        self.catalog
            .iter()
            .filter(|t| active.contains(&t.name))
            .map(|t| t.restricted_to(&active))
            .collect()
    }

    /// Level-filtered descriptor for one type, if it is active and cataloged
    pub fn descriptor_at(&self, name: TypeName, level: Level) -> Option<Type> {
        let active = self.active_types_for_level(level);
        if !active.contains(&name) {
            return None;
        }
        self.catalog.get(name).map(|t| t.restricted_to(&active))
    }

    pub fn catalog(&self) -> &TypeCatalog {
        &self.catalog
    }

    pub fn index(&self) -> &LevelTypeIndex {
        &self.index
    }
}

impl Default for LevelGate {
    fn default() -> Self {
        Self::standard()
    }
}
