//! Elemental type identifiers

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ChartError;

/// Elemental types (18 types as of Gen 6+)
///
/// Variant order is the canonical order used for level unlocks, so the
/// derived `Ord` follows it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TypeName {
    Normal = 0,
    Fire = 1,
    Water = 2,
    Grass = 3,
    Electric = 4,
    Ice = 5,
    Fighting = 6,
    Poison = 7,
    Ground = 8,
    Flying = 9,
    Psychic = 10,
    Bug = 11,
    Rock = 12,
    Ghost = 13,
    Dragon = 14,
    Dark = 15,
    Steel = 16,
    Fairy = 17,
}

impl TypeName {
    /// Number of canonical types
    pub const COUNT: usize = 18;

    /// All 18 types in canonical order
    pub const ALL: [TypeName; Self::COUNT] = [
        TypeName::Normal,
        TypeName::Fire,
        TypeName::Water,
        TypeName::Grass,
        TypeName::Electric,
        TypeName::Ice,
        TypeName::Fighting,
        TypeName::Poison,
        TypeName::Ground,
        TypeName::Flying,
        TypeName::Psychic,
        TypeName::Bug,
        TypeName::Rock,
        TypeName::Ghost,
        TypeName::Dragon,
        TypeName::Dark,
        TypeName::Steel,
        TypeName::Fairy,
    ];

    /// Get all types as a slice
    pub fn all() -> &'static [TypeName] {
        &Self::ALL
    }

    /// Position in the canonical order
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Parse a type name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Some(TypeName::Normal),
            "fire" => Some(TypeName::Fire),
            "water" => Some(TypeName::Water),
            "grass" => Some(TypeName::Grass),
            "electric" => Some(TypeName::Electric),
            "ice" => Some(TypeName::Ice),
            "fighting" => Some(TypeName::Fighting),
            "poison" => Some(TypeName::Poison),
            "ground" => Some(TypeName::Ground),
            "flying" => Some(TypeName::Flying),
            "psychic" => Some(TypeName::Psychic),
            "bug" => Some(TypeName::Bug),
            "rock" => Some(TypeName::Rock),
            "ghost" => Some(TypeName::Ghost),
            "dragon" => Some(TypeName::Dragon),
            "dark" => Some(TypeName::Dark),
            "steel" => Some(TypeName::Steel),
            "fairy" => Some(TypeName::Fairy),
            _ => None,
        }
    }

    /// Convert to canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            TypeName::Normal => "Normal",
            TypeName::Fire => "Fire",
            TypeName::Water => "Water",
            TypeName::Grass => "Grass",
            TypeName::Electric => "Electric",
            TypeName::Ice => "Ice",
            TypeName::Fighting => "Fighting",
            TypeName::Poison => "Poison",
            TypeName::Ground => "Ground",
            TypeName::Flying => "Flying",
            TypeName::Psychic => "Psychic",
            TypeName::Bug => "Bug",
            TypeName::Rock => "Rock",
            TypeName::Ghost => "Ghost",
            TypeName::Dragon => "Dragon",
            TypeName::Dark => "Dark",
            TypeName::Steel => "Steel",
            TypeName::Fairy => "Fairy",
        }
    }
}

impl FromStr for TypeName {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ChartError::UnknownType(s.to_string()))
    }
}

impl std::fmt::Display for TypeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
