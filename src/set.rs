//! Linearly stored sets [`LinearSet`].

use crate::prelude::*;

/// A set stored as a sequence of elements in insertion order.
///
/// Membership is checked by comparing against every element in turn. This makes most operations
/// linear, but asks nothing of the elements besides [`Eq`]. Full equivalence is required so that
/// every element is equal to itself, which the set laws rely on. Types such as `f64` are rejected:
///
/// ```compile_fail
/// use linset::prelude::*;
///
/// let mut set = LinearSet::new();
/// set.add(f64::NAN);
/// ```
///
/// Probes may still be of any type the elements compare with, see [`SetTrait::contains`].
///
/// ## Invariants
///
/// Every two elements in a [`LinearSet`] must be distinct.
#[derive(Clone, IntoIterator)]
pub struct LinearSet<E>(#[into_iterator(owned)] SmallVec<E>);

// -------------------- Basic traits -------------------- //

impl<E> Default for LinearSet<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> AsRef<[E]> for LinearSet<E> {
    fn as_ref(&self) -> &[E] {
        self.as_slice()
    }
}

impl<E> From<LinearSet<E>> for Vec<E> {
    fn from(set: LinearSet<E>) -> Self {
        set.into_vec()
    }
}

impl<'a, E> IntoIterator for &'a LinearSet<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<E: Eq> FromIterator<E> for LinearSet<E> {
    fn from_iter<T: IntoIterator<Item = E>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<E: Eq> Extend<E> for LinearSet<E> {
    fn extend<T: IntoIterator<Item = E>>(&mut self, iter: T) {
        for el in iter {
            self.add(el);
        }
    }
}

impl<E: Eq, const N: usize> From<[E; N]> for LinearSet<E> {
    fn from(arr: [E; N]) -> Self {
        arr.into_iter().collect()
    }
}

/// Writes the elements in insertion order.
impl<E: Debug> Debug for LinearSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_set().entries(self).finish()
    }
}

/// Displays a set in roster notation.
impl<E: Display> Display for LinearSet<E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_char('{')?;
        let mut iter = self.iter();
        if let Some(fst) = iter.next() {
            write!(f, "{fst}")?;
        }
        for el in iter {
            write!(f, ", {el}")?;
        }
        f.write_char('}')
    }
}

// -------------------- Vector conversion -------------------- //

/// Error in building a set from a vector with repeated elements.
///
/// Holds the indices of the first two equal elements found.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[display(fmt = "duplicate elements at indices {} and {}", _0, _1)]
pub struct DuplicateError(pub usize, pub usize);

impl std::error::Error for DuplicateError {}

/// Finds the first pair of indices holding equal elements.
fn find_duplicate<E: Eq>(slice: &[E]) -> Option<(usize, usize)> {
    for (i, el) in slice.iter().enumerate() {
        if let Some(j) = slice[..i].iter().position(|prev| prev == el) {
            return Some((j, i));
        }
    }

    None
}

/// Accepts a vector only if it has no repeated elements. Use [`LinearSet::from_vec`] to discard
/// duplicates instead.
impl<E: Eq> TryFrom<Vec<E>> for LinearSet<E> {
    type Error = DuplicateError;

    fn try_from(vec: Vec<E>) -> Result<Self, DuplicateError> {
        match find_duplicate(&vec) {
            Some((fst, snd)) => Err(DuplicateError(fst, snd)),
            None => Ok(Self(SmallVec::from_vec(vec))),
        }
    }
}

// -------------------- SetTrait -------------------- //

impl<E: Eq> SetTrait for LinearSet<E> {
    type Item = E;

    fn empty() -> Self {
        Self::new()
    }

    fn card(&self) -> usize {
        self.0.len()
    }

    fn iter(&self) -> impl Iterator<Item = &E> {
        self.as_slice().iter()
    }

    fn contains<Q: ?Sized>(&self, value: &Q) -> bool
    where
        E: PartialEq<Q>,
    {
        self.0.iter().any(|el| el == value)
    }

    fn add(&mut self, value: E) -> bool {
        if self.contains(&value) {
            false
        } else {
            self.0.push(value);
            true
        }
    }

    fn remove<Q: ?Sized>(&mut self, value: &Q) -> bool
    where
        E: PartialEq<Q>,
    {
        // Shifting rather than swapping keeps insertion order.
        if let Some(i) = self.0.iter().position(|el| el == value) {
            self.0.remove(i);
            true
        } else {
            false
        }
    }
}

/// Sets are equal when they have the same elements, whatever the type of the other set.
impl<E, S> PartialEq<S> for LinearSet<E>
where
    E: Eq + PartialEq<S::Item>,
    S: SetTrait,
    S::Item: PartialEq<E>,
{
    fn eq(&self, other: &S) -> bool {
        self.set_eq(other)
    }
}

impl<E: Eq> Eq for LinearSet<E> {}

/// Sets are ordered by inclusion.
impl<E, S> PartialOrd<S> for LinearSet<E>
where
    E: Eq + PartialEq<S::Item>,
    S: SetTrait,
    S::Item: PartialEq<E>,
{
    fn le(&self, other: &S) -> bool {
        self.subset(other)
    }

    fn ge(&self, other: &S) -> bool {
        other.subset(self)
    }

    fn lt(&self, other: &S) -> bool {
        self.ssubset(other)
    }

    fn gt(&self, other: &S) -> bool {
        other.ssubset(self)
    }

    fn partial_cmp(&self, other: &S) -> Option<Ordering> {
        match (self.le(other), self.ge(other)) {
            (true, true) => Some(Ordering::Equal),
            (true, false) => Some(Ordering::Less),
            (false, true) => Some(Ordering::Greater),
            (false, false) => None,
        }
    }
}

// -------------------- Other -------------------- //

impl<E> LinearSet<E> {
    /// The empty set Ø.
    #[must_use]
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// The empty set, with room for `capacity` elements before reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(SmallVec::with_capacity(capacity))
    }

    /// Set singleton {x}.
    #[must_use]
    pub fn singleton(value: E) -> Self {
        Self(smallvec::smallvec![value])
    }

    /// The set as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[E] {
        &self.0
    }

    /// Set cardinality.
    #[must_use]
    pub fn card(&self) -> usize {
        self.0.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the elements of the set, in insertion order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.0.iter()
    }

    /// Removes all elements from the set.
    pub fn clear(&mut self) {
        self.0.clear();
    }

    /// The elements of the set, in insertion order.
    #[must_use]
    pub fn into_vec(self) -> Vec<E> {
        self.0.into_vec()
    }

    /// In-place set specification. Keeps only the elements satisfying the predicate, without
    /// changing their order.
    pub fn select_mut<P: FnMut(&E) -> bool>(&mut self, mut pred: P) {
        self.0.retain(|el| pred(el));
    }

    /// Set specification {x ∈ y | P(x)}.
    #[must_use]
    pub fn select<P: FnMut(&E) -> bool>(mut self, pred: P) -> Self {
        self.select_mut(pred);
        self
    }
}

impl<E: Eq> LinearSet<E> {
    /// Builds a set from a vector, keeping only the first copy of every element.
    #[must_use]
    pub fn from_vec(vec: Vec<E>) -> Self {
        vec.into_iter().collect()
    }

    /// Set insertion x ∪ {y}.
    #[must_use]
    pub fn insert(mut self, value: E) -> Self {
        self.add(value);
        self
    }
}
