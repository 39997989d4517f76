use std::hash::Hash;

use crate::{
    error::{Result, SequenceError},
    util::{
        seen::{first_occurrences, retain_by_mask, HashSeen, OrdSeen},
        sequence::Sequence,
    },
};

/// An owned, ordered sequence with chainable in-place operations.
///
/// Every chainable operation mutates the wrapper and returns `&mut Self`,
/// so a pipeline can be written as a single expression:
///
/// ```
/// use fluent_seq::SequenceWrapper;
///
/// let mut seq = SequenceWrapper::new(vec![4, 2, 2, 3, 4, 3, 6, 6, 5]);
/// seq.filter(|i| i % 2 == 0).unique().mutate(|i| *i *= 2);
/// assert_eq!(seq.collect(), &[8, 4, 12]);
/// ```
///
/// The wrapper takes ownership of the vector it is built from, so the
/// caller cannot observe or disturb the sequence through another alias.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SequenceWrapper<T> {
    items: Vec<T>,
}

impl<T> SequenceWrapper<T> {
    pub fn new(items: Vec<T>) -> Self {
        SequenceWrapper { items }
    }

    /// Keeps only the elements for which `predicate` returns `true`.
    pub fn filter<P>(&mut self, mut predicate: P) -> &mut Self
    where
        P: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(|item| predicate(item));
        tracing::trace!(before, after = self.items.len(), "filter");
        self
    }

    /// Like [`filter`](Self::filter), but with a fallible predicate.
    ///
    /// The predicate is evaluated for every element before anything is
    /// removed, so on error the sequence is left as it was.
    pub fn try_filter<P, E>(&mut self, mut predicate: P) -> std::result::Result<&mut Self, E>
    where
        P: FnMut(&T) -> std::result::Result<bool, E>,
    {
        let mask = self
            .items
            .iter()
            .map(&mut predicate)
            .collect::<std::result::Result<Vec<_>, E>>()?;
        let before = self.items.len();
        retain_by_mask(&mut self.items, mask);
        tracing::trace!(before, after = self.items.len(), "try_filter");
        Ok(self)
    }

    /// Calls `mutator` on each element in index order.
    pub fn mutate<M>(&mut self, mut mutator: M) -> &mut Self
    where
        M: FnMut(&mut T),
    {
        for item in self.items.iter_mut() {
            mutator(item);
        }
        tracing::trace!(len = self.items.len(), "mutate");
        self
    }

    /// Like [`mutate`](Self::mutate), but stops at the first error.
    /// Elements before the failing one keep their mutation.
    pub fn try_mutate<M, E>(&mut self, mut mutator: M) -> std::result::Result<&mut Self, E>
    where
        M: FnMut(&mut T) -> std::result::Result<(), E>,
    {
        for item in self.items.iter_mut() {
            mutator(item)?;
        }
        tracing::trace!(len = self.items.len(), "try_mutate");
        Ok(self)
    }

    /// Removes elements whose key has already been produced by an earlier
    /// element, keeping the first element for each key.
    pub fn unique_by_key<K, F>(&mut self, mut key: F) -> &mut Self
    where
        K: Eq + Hash,
        F: FnMut(&T) -> K,
    {
        let mask = first_occurrences::<HashSeen<K>, _, _, _>(&self.items, |item| key(item));
        self.retain_first(mask, "unique_by_key")
    }

    fn retain_first(&mut self, mask: Vec<bool>, op: &'static str) -> &mut Self {
        let before = self.items.len();
        retain_by_mask(&mut self.items, mask);
        tracing::trace!(before, after = self.items.len(), op);
        self
    }

    /// Appends a value to the end of the sequence.
    pub fn push(&mut self, value: T) -> &mut Self {
        self.items.push(value);
        self
    }

    /// Returns the current elements. May be called any number of times.
    pub fn collect(&self) -> &[T] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn at(&self, index: usize) -> &T {
        self.get(index).expect("Out of bounds sequence access")
    }

    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.items.len();
        *self
            .items
            .get_mut(index)
            .ok_or(SequenceError::IndexOutOfBounds { index, len })? = value;
        Ok(())
    }

    /// Builds a new wrapper from `mapper` applied to each element.
    ///
    /// Equivalent to [`transform`](crate::transform).
    pub fn map<U, F>(&self, mapper: F) -> SequenceWrapper<U>
    where
        F: FnMut(&T) -> U,
    {
        crate::transform(self, mapper)
    }

    /// Consumes the wrapper, moving each element through `mapper`.
    pub fn into_map<U, F>(self, mapper: F) -> SequenceWrapper<U>
    where
        F: FnMut(T) -> U,
    {
        SequenceWrapper::new(self.items.into_iter().map(mapper).collect())
    }
}

impl<T> SequenceWrapper<T>
where
    T: Eq + Hash,
{
    /// Removes duplicates, keeping the first occurrence of each value.
    pub fn unique(&mut self) -> &mut Self {
        let mask = first_occurrences::<HashSeen<&T>, _, _, _>(&self.items, |item| item);
        self.retain_first(mask, "unique")
    }
}

impl<T> SequenceWrapper<T>
where
    T: Ord,
{
    /// Same as `unique`, for element types that are ordered but not hashable.
    pub fn unique_ord(&mut self) -> &mut Self {
        let mask = first_occurrences::<OrdSeen<&T>, _, _, _>(&self.items, |item| item);
        self.retain_first(mask, "unique_ord")
    }
}

impl<T> From<Vec<T>> for SequenceWrapper<T> {
    fn from(items: Vec<T>) -> Self {
        SequenceWrapper::new(items)
    }
}

impl<T> FromIterator<T> for SequenceWrapper<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        SequenceWrapper {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for SequenceWrapper<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for SequenceWrapper<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a SequenceWrapper<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> Sequence<T> for SequenceWrapper<T> {
    fn collect_into<C>(self) -> C
    where
        C: FromIterator<T>,
    {
        self.items.into_iter().collect()
    }

    fn extend_into<C>(self, target: &mut C)
    where
        C: Extend<T>,
    {
        target.extend(self.items);
    }
}
