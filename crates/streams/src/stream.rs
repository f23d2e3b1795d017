//! Fluent wrapper over a sequence with sorting helpers
//!
//! ## The Contract
//!
//! - Every sort is stable: ties keep their original relative order
//! - Every sort is non-mutating: it returns a new stream and leaves the
//!   receiver (and the sequence it was built from) untouched
//! - `sort()` needs a natural total order (`T: Ord`). Elements without one
//!   go through `sort_partial()`, whose handling of incomparable elements is
//!   set by `SortConfig`
//!
//! A comparator passed to `sort_by` or `sort_with` that is not a total order
//! gives an unspecified order; it is never detected there.

use crate::config::{SortConfig, SortPolicy};
use lambdava_core::{Error, Function2, Result};
use std::cell::Cell;
use std::cmp::Ordering;
use tracing::{debug, warn};

/// Wrap a sequence for fluent sorting
pub fn functional<T>(items: impl Into<Vec<T>>) -> FunctionalStream<T> {
    FunctionalStream::new(items.into())
}

/// An ordered sequence with non-mutating sort helpers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct FunctionalStream<T> {
    items: Vec<T>,
}

impl<T> FunctionalStream<T> {
    /// Wrap an owned vector
    pub fn new(items: Vec<T>) -> Self {
        FunctionalStream { items }
    }

    /// Number of elements
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stream has no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Borrow the elements in order
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Iterate over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Consume the stream and return its elements
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T: Clone> FunctionalStream<T> {
    /// The elements as a fresh list
    pub fn as_list(&self) -> Vec<T> {
        self.items.clone()
    }

    /// Stable sort by a comparison closure
    pub fn sort_by<F>(&self, compare: F) -> Self
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let mut items = self.items.clone();
        items.sort_by(compare);
        debug!(target: "lambdava::stream", len = items.len(), "Sorted by comparator");
        FunctionalStream { items }
    }

    /// Stable sort by a comparator value
    pub fn sort_with<C>(&self, comparator: &C) -> Self
    where
        C: for<'a> Function2<&'a T, &'a T, Ordering>,
    {
        self.sort_by(|a, b| comparator.execute(a, b))
    }

    /// Stable sort of a partially ordered sequence with the default config
    ///
    /// See [`sort_partial_with`](Self::sort_partial_with).
    pub fn sort_partial(&self) -> Result<Self>
    where
        T: PartialOrd,
    {
        self.sort_partial_with(&SortConfig::default())
    }

    /// Stable sort of a partially ordered sequence
    ///
    /// Two kinds of element have no place in the order: one that does not
    /// compare with itself (a `NaN`), and one that does not compare with
    /// some other element of the stream.
    ///
    /// Under `SortPolicy::Strict` either kind fails the sort with
    /// `Error::IncomparableElements`, carrying the lowest input position
    /// found to be unorderable. Under `SortPolicy::Permissive` elements that
    /// do not compare with themselves move to the end in their original
    /// relative order; elements that merely do not compare with each other
    /// are treated as ties, so their relative order is unspecified. No
    /// element is ever dropped.
    pub fn sort_partial_with(&self, config: &SortConfig) -> Result<Self>
    where
        T: PartialOrd,
    {
        let policy = config.policy()?;
        let (mut ordered, unordered): (Vec<(usize, T)>, Vec<(usize, T)>) = self
            .items
            .iter()
            .cloned()
            .enumerate()
            .partition(|(_, item)| item.partial_cmp(item).is_some());

        let clash: Cell<Option<usize>> = Cell::new(None);
        let note_clash = |index: usize| {
            clash.set(Some(clash.get().map_or(index, |seen| seen.min(index))));
        };

        ordered.sort_by(|(i, a), (j, b)| {
            a.partial_cmp(b).unwrap_or_else(|| {
                note_clash(*i.max(j));
                Ordering::Equal
            })
        });
        // The sort never compares some pairs; a run is only ordered when every
        // neighbour compares as less or equal
        for pair in ordered.windows(2) {
            let (i, a) = &pair[0];
            let (j, b) = &pair[1];
            if !matches!(a.partial_cmp(b), Some(Ordering::Less | Ordering::Equal)) {
                note_clash(*i.max(j));
            }
        }

        let first_unordered = unordered.first().map(|(index, _)| *index);
        match policy {
            SortPolicy::Strict => {
                let index = match (first_unordered, clash.get()) {
                    (Some(a), Some(b)) => Some(a.min(b)),
                    (a, b) => a.or(b),
                };
                if let Some(index) = index {
                    debug!(target: "lambdava::stream", index, "Strict sort rejected incomparable element");
                    return Err(Error::IncomparableElements { index });
                }
            }
            SortPolicy::Permissive => {
                if !unordered.is_empty() {
                    warn!(
                        target: "lambdava::stream",
                        moved = unordered.len(),
                        "Incomparable elements moved to the end"
                    );
                }
                if let Some(index) = clash.get() {
                    warn!(
                        target: "lambdava::stream",
                        index,
                        "Mutually incomparable elements sorted as ties"
                    );
                }
            }
        }

        let items: Vec<T> = ordered
            .into_iter()
            .chain(unordered)
            .map(|(_, item)| item)
            .collect();
        debug!(target: "lambdava::stream", len = items.len(), "Sorted by partial order");
        Ok(FunctionalStream { items })
    }
}

impl<T: Ord + Clone> FunctionalStream<T> {
    /// Stable sort by natural ordering
    pub fn sort(&self) -> Self {
        let mut items = self.items.clone();
        items.sort();
        debug!(target: "lambdava::stream", len = items.len(), "Sorted by natural order");
        FunctionalStream { items }
    }
}

impl<T> From<Vec<T>> for FunctionalStream<T> {
    fn from(items: Vec<T>) -> Self {
        FunctionalStream::new(items)
    }
}

impl<T> FromIterator<T> for FunctionalStream<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        FunctionalStream::new(iter.into_iter().collect())
    }
}

impl<T> IntoIterator for FunctionalStream<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a FunctionalStream<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
