//! Implementations of [`SetTrait`] for the sets in the standard library.
//!
//! Lookups are only as fast as hashing or ordering allows when the probe has the element type.
//! Since [`SetTrait::contains`] and [`SetTrait::remove`] take any comparable probe, these fall back
//! to scanning.

use crate::prelude::*;
use std::{
    collections::{BTreeSet, HashSet},
    hash::{BuildHasher, Hash},
};

impl<E: Hash + Eq, H: BuildHasher + Default> SetTrait for HashSet<E, H> {
    type Item = E;

    fn empty() -> Self {
        HashSet::default()
    }

    fn card(&self) -> usize {
        self.len()
    }

    fn iter(&self) -> impl Iterator<Item = &E> {
        HashSet::iter(self)
    }

    fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        E: PartialEq<Q>,
    {
        HashSet::iter(self).any(|el| el == value)
    }

    fn add(&mut self, value: E) -> bool {
        self.insert(value)
    }

    fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        E: PartialEq<Q>,
    {
        let len = self.len();
        self.retain(|el| el != value);
        self.len() != len
    }
}

impl<E: Ord> SetTrait for BTreeSet<E> {
    type Item = E;

    fn empty() -> Self {
        BTreeSet::new()
    }

    fn card(&self) -> usize {
        self.len()
    }

    fn iter(&self) -> impl Iterator<Item = &E> {
        BTreeSet::iter(self)
    }

    fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        E: PartialEq<Q>,
    {
        BTreeSet::iter(self).any(|el| el == value)
    }

    fn add(&mut self, value: E) -> bool {
        self.insert(value)
    }

    fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        E: PartialEq<Q>,
    {
        let len = self.len();
        self.retain(|el| el != value);
        self.len() != len
    }
}

/// Tests for the standard library sets.
#[cfg(test)]
mod foreign {
    use super::*;
    use std::{collections::hash_map::DefaultHasher, hash::BuildHasherDefault};

    /// A hash set with a hasher other than the default one.
    type CustomSet<E> = HashSet<E, BuildHasherDefault<DefaultHasher>>;

    #[test]
    fn custom_hasher() {
        let mut set: CustomSet<u32> = SetTrait::empty();
        assert!(SetTrait::add(&mut set, 2));
        assert!(!SetTrait::add(&mut set, 2));
        SetTrait::add(&mut set, 1);

        let linear: LinearSet<u32> = linear_set![1, 2, 3];
        assert!(SetTrait::ssubset(&set, &linear));
        assert_eq!(SetTrait::inter(&linear, &set), linear_set![1, 2]);

        let union: CustomSet<u32> = SetTrait::union(&set, &linear);
        assert_eq!(linear, union);
    }

    #[test]
    fn hash_remove() {
        let mut set: HashSet<String> = ["a".to_owned(), "b".to_owned()].into();
        assert!(SetTrait::remove(&mut set, "a"));
        assert!(!SetTrait::remove(&mut set, "a"));
        assert!(SetTrait::contains(&set, "b"));
        assert_eq!(SetTrait::card(&set), 1);
    }

    #[test]
    fn btree_union() {
        let fst: BTreeSet<u32> = [3, 1].into();
        let snd: LinearSet<u32> = linear_set![2, 3];

        let union = SetTrait::union(&fst, &snd);
        assert_eq!(union.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
        assert!(SetTrait::set_eq(&SetTrait::inter(&fst, &snd), &linear_set![3]));
    }

    #[test]
    fn mixed_eq() {
        let linear: LinearSet<u32> = linear_set![1, 2, 3];
        let hash: HashSet<u32> = [3, 2, 1].into();
        let btree: BTreeSet<u32> = [2, 3, 1].into();

        assert_eq!(linear, hash);
        assert_eq!(linear, btree);
        assert!(SetTrait::set_eq(&hash, &btree));
        assert!(SetTrait::subset(&btree, &linear));
    }
}
