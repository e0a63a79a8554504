//! Level-gated type effectiveness for creature battles.
//!
//! # Overview
//!
//! `typedex-engine` sits on top of the type catalog and answers two kinds of
//! question:
//!
//! ```text
//! typedex-chart (types, relations, efficacy scale)
//!        │
//!        ▼
//! typedex-engine ← THIS CRATE
//!        ├─> LevelGate (which types are unlocked at a level)
//!        └─> EfficacyEngine (damage multiplier of an attack)
//! ```
//!
//! # Main Types
//!
//! - [`TypeEngine`] - facade holding a level and a gate
//! - [`LevelGate`] / [`LevelTypeIndex`] - per-level unlocks with a memoized cache
//! - [`EfficacyEngine`] / [`Defenders`] - single and dual-type efficacy
//! - [`query::DualType`] - relations of a dual type, derived on demand
//!
//! # Example Usage
//!
//! ```
//! use typedex_engine::{EngineConfig, TypeEngine};
//! use typedex_chart::{Efficacy, TypeName};
//!
//! let engine = TypeEngine::new(EngineConfig::default());
//! assert_eq!(engine.get_active_types().len(), 15);
//!
//! let result = engine.attack_efficacy_by_name(TypeName::Ice, &[TypeName::Dragon]);
//! assert_eq!(result, Efficacy::SuperEffective);
//! ```

use thiserror::Error;
use typedex_chart::ChartError;

mod config;
mod efficacy;
mod level;
pub mod query;
mod service;

pub use config::{DEFAULT_LEVEL, EngineConfig};
pub use efficacy::{Defenders, EfficacyEngine};
pub use level::{Level, LevelGate, LevelTypeIndex, compute_active_types, unlock_boundary};
pub use service::TypeEngine;

// Re-export the data model used throughout the engine API
pub use typedex_chart::{Efficacy, Type, TypeCatalog, TypeName, TypeSet};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Chart error: {0}")]
    Chart(#[from] ChartError),

    #[error("Invalid engine configuration: {0}")]
    Config(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
