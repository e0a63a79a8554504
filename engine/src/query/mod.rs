//! Query helpers over type matchups
//!
//! This module provides utilities for analyzing which attacking types a
//! defender is weak to, resists, or ignores, including dual-type defenders
//! whose relations are derived on demand.

mod dual;
mod matchup;

pub use dual::DualType;
pub use matchup::{
    immunities, is_immune_to, is_weak_to_any, resistances, resists_all, weaknesses,
};
