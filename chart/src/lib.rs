//! Elemental type catalog for creature battles.
//!
//! This crate holds the data model shared by the level gate and the
//! efficacy calculation in `typedex-engine`:
//!
//! - [`TypeName`] - the 18 canonical types, in unlock order
//! - [`Type`] - a defending type with its resist/weak/null sets
//! - [`TypeCatalog`] - every descriptor at full fidelity
//! - [`Efficacy`] - the 0 / 0.5 / 1 / 2 multiplier scale
//!
//! # Example
//!
//! ```
//! use typedex_chart::{TypeCatalog, TypeName};
//!
//! let catalog = TypeCatalog::build_all();
//! let fire = catalog.get(TypeName::Fire).unwrap();
//! assert!(fire.weak.contains(TypeName::Water));
//! ```

use thiserror::Error;

mod catalog;
mod descriptor;
mod efficacy;
mod type_name;
mod type_set;

pub use catalog::{STANDARD_CHART, TypeCatalog};
pub use descriptor::Type;
pub use efficacy::Efficacy;
pub use type_name::TypeName;
pub use type_set::TypeSet;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Unknown type name: {0}")]
    UnknownType(String),

    #[error("Type listed more than once: {0}")]
    DuplicateType(TypeName),

    #[error("{defender} lists {attacker} in more than one relation")]
    OverlappingRelations {
        defender: TypeName,
        attacker: TypeName,
    },

    #[error("Invalid chart document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChartError>;
