//! Ordered sets of type names

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::TypeName;

/// A set of type names, iterated in canonical order
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeSet(BTreeSet<TypeName>);

impl TypeSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: TypeName) -> bool {
        self.0.contains(&name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate in canonical order
    pub fn iter(&self) -> impl Iterator<Item = TypeName> + '_ {
        self.0.iter().copied()
    }

    /// First name present in both sets, if any
    pub fn first_shared(&self, other: &TypeSet) -> Option<TypeName> {
        self.0.intersection(&other.0).next().copied()
    }

    /// Copy of this set keeping only members listed in `allowed`
    pub fn retain_in(&self, allowed: &[TypeName]) -> TypeSet {
        self.iter().filter(|name| allowed.contains(name)).collect()
    }
}

impl FromIterator<TypeName> for TypeSet {
    fn from_iter<I: IntoIterator<Item = TypeName>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[TypeName; N]> for TypeSet {
    fn from(names: [TypeName; N]) -> Self {
        names.into_iter().collect()
    }
}

impl From<&[TypeName]> for TypeSet {
    fn from(names: &[TypeName]) -> Self {
        names.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iterates_in_canonical_order() {
        let set = TypeSet::from([TypeName::Fairy, TypeName::Normal, TypeName::Grass]);
        let names: Vec<TypeName> = set.iter().collect();
        assert_eq!(names, vec![TypeName::Normal, TypeName::Grass, TypeName::Fairy]);
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = TypeSet::from([TypeName::Ice, TypeName::Ice]);
        assert_eq!(set.len(), 1);
        assert!(set.contains(TypeName::Ice));
        assert!(TypeSet::new().is_empty());
    }

    #[test]
    fn test_retain_in() {
        let set = TypeSet::from([TypeName::Fire, TypeName::Grass, TypeName::Steel]);
        let kept = set.retain_in(&[TypeName::Grass, TypeName::Steel, TypeName::Dark]);
        assert_eq!(kept, TypeSet::from([TypeName::Grass, TypeName::Steel]));
        assert!(set.retain_in(&[]).is_empty());
    }

    #[test]
    fn test_first_shared() {
        let a = TypeSet::from([TypeName::Fire, TypeName::Water]);
        let b = TypeSet::from([TypeName::Water, TypeName::Rock]);
        let c = TypeSet::from([TypeName::Rock]);
        assert_eq!(a.first_shared(&b), Some(TypeName::Water));
        assert_eq!(a.first_shared(&c), None);
    }
}
