//! # Linear sets
//!
//! Duplicate-free sets stored as plain sequences. Membership is decided by scanning the elements
//! and comparing them by value, so elements need [`Eq`] but neither [`Hash`](std::hash::Hash) nor
//! [`Ord`].
//!
//! Set algebra is written once in [`SetTrait`], in terms of [`SetTrait::contains`] and
//! [`SetTrait::iter`], so that any two implementations can be mixed freely:
//!
//! ```
//! use linset::prelude::*;
//! use std::collections::HashSet;
//!
//! let fst: LinearSet<u32> = linear_set![1, 2];
//! let snd: HashSet<u32> = [2, 3].into();
//!
//! assert_eq!(fst.union(&snd), linear_set![1, 2, 3]);
//! assert_eq!(fst.inter(&snd), linear_set![2]);
//! ```

#![warn(clippy::pedantic)]
#![warn(missing_docs)]
#![warn(clippy::missing_docs_in_private_items)]

mod foreign;
pub mod prelude;
pub mod set;

/// Small vector.
type SmallVec<T> = smallvec::SmallVec<[T; 4]>;

/// Builds a [`LinearSet`](set::LinearSet) from a list of elements. Repeated elements are only
/// kept once.
///
/// ```
/// use linset::prelude::*;
///
/// let set = linear_set![1, 2, 1];
/// assert_eq!(set.card(), 2);
/// ```
#[macro_export]
macro_rules! linear_set {
    ($($x: expr), *$(,)*) => ({
        let set: $crate::set::LinearSet<_> = [$($x,)*].into_iter().collect();
        set
    });
}

/// A trait for sets, i.e. collections where every element appears at most once.
///
/// Only the basic methods must be provided. The relations and constructions are defined in terms
/// of them, and accept any other [`SetTrait`] as an operand, whatever its backing store.
///
/// Elements are compared through [`PartialEq`], possibly between two different types. A set of
/// `String` may be compared against a set of `&str`, as long as both directions of the comparison
/// exist.
pub trait SetTrait {
    /// The type of the elements.
    type Item;

    // -------------------- Basic methods -------------------- //

    /// Empty set Ø.
    fn empty() -> Self
    where
        Self: Sized;

    /// Set cardinality.
    fn card(&self) -> usize;

    /// Whether the set is empty.
    fn is_empty(&self) -> bool {
        self.card() == 0
    }

    /// Iterate over the elements of the set. Every element is returned exactly once.
    fn iter(&self) -> impl Iterator<Item = &Self::Item>;

    /// Membership relation ∈.
    fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        Self::Item: PartialEq<Q>;

    /// In-place set insertion x ∪ {y}. Returns whether the element was added, which is the case
    /// iff it was not already present.
    fn add(&mut self, value: Self::Item) -> bool;

    /// In-place removal x \ {y}. Returns whether an element was removed.
    fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        Self::Item: PartialEq<Q>;

    // -------------------- Relations -------------------- //

    /// Subset relation ⊆.
    fn subset<S: SetTrait + ?Sized>(&self, other: &S) -> bool
    where
        S::Item: PartialEq<Self::Item>,
    {
        self.iter().all(|el| other.contains(el))
    }

    /// Strict subset relation ⊂.
    fn ssubset<S: SetTrait + ?Sized>(&self, other: &S) -> bool
    where
        S::Item: PartialEq<Self::Item>,
        Self::Item: PartialEq<S::Item>,
    {
        self.subset(other) && !other.subset(self)
    }

    /// Whether both sets have no elements in common.
    fn disjoint<S: SetTrait + ?Sized>(&self, other: &S) -> bool
    where
        S::Item: PartialEq<Self::Item>,
    {
        !self.iter().any(|el| other.contains(el))
    }

    /// Set equality. Two sets are equal when each is a subset of the other, regardless of how they
    /// are stored or in which order their elements were added.
    fn set_eq<S: SetTrait + ?Sized>(&self, other: &S) -> bool
    where
        S::Item: PartialEq<Self::Item>,
        Self::Item: PartialEq<S::Item>,
    {
        self.subset(other) && other.subset(self)
    }

    // -------------------- Constructions -------------------- //

    /// Union x ∪ y.
    ///
    /// The elements of `other` may be of any type that converts into ours.
    #[must_use]
    fn union<S: SetTrait + ?Sized>(&self, other: &S) -> Self
    where
        Self: Sized,
        Self::Item: Clone,
        S::Item: Clone + Into<Self::Item>,
    {
        let mut res = Self::empty();
        for el in self.iter() {
            res.add(el.clone());
        }
        for el in other.iter() {
            res.add(el.clone().into());
        }
        res
    }

    /// Intersection x ∩ y.
    #[must_use]
    fn inter<S: SetTrait + ?Sized>(&self, other: &S) -> Self
    where
        Self: Sized,
        Self::Item: Clone,
        S::Item: PartialEq<Self::Item>,
    {
        let mut res = Self::empty();
        for el in self.iter().filter(|el| other.contains(*el)) {
            res.add(el.clone());
        }
        res
    }

    /// Set difference x \ y.
    #[must_use]
    fn diff<S: SetTrait + ?Sized>(&self, other: &S) -> Self
    where
        Self: Sized,
        Self::Item: Clone,
        S::Item: PartialEq<Self::Item>,
    {
        let mut res = Self::empty();
        for el in self.iter().filter(|el| !other.contains(*el)) {
            res.add(el.clone());
        }
        res
    }
}
