//! Lazy deduplication adapters: `Distinct`, `DistinctBy`, `DistinctWith`.
//!
//! Each adapter yields the first occurrence of every distinct element and
//! drops later duplicates, preserving input order. Deduplication is lazy in
//! the streaming sense, but each adapter carries O(n) auxiliary seen-state
//! that grows as the sequence is consumed.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

use smallvec::SmallVec;

use crate::equality::{Equality, hash_code};

/// Hasher state for the seen-sets.
///
/// The `fxhash` feature swaps the standard hasher for `rustc-hash`.
#[cfg(feature = "fxhash")]
pub(crate) type SeenState = rustc_hash::FxBuildHasher;

#[cfg(not(feature = "fxhash"))]
pub(crate) type SeenState = std::collections::hash_map::RandomState;

/// A lazy adapter yielding each distinct element once, under the element
/// type's own `Eq` and `Hash`.
///
/// Created by [`Sequence::distinct`](crate::sequence::Sequence::distinct).
/// Elements must be `Clone` because each yielded element is also retained
/// in the seen-set for comparison against later duplicates.
pub struct Distinct<I: Iterator> {
    iter: I,
    seen: HashSet<I::Item, SeenState>,
}

impl<I: Iterator> Distinct<I> {
    pub(crate) fn new(iter: I) -> Self {
        Self {
            iter,
            seen: HashSet::with_hasher(SeenState::default()),
        }
    }
}

impl<I> Iterator for Distinct<I>
where
    I: Iterator,
    I::Item: Eq + Hash + Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let element = self.iter.next()?;
            if self.seen.insert(element.clone()) {
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// A lazy adapter yielding the first element seen for each distinct key.
///
/// Created by
/// [`Sequence::distinct_by`](crate::sequence::Sequence::distinct_by). Only
/// the selected keys are retained; the elements themselves pass through
/// without cloning.
pub struct DistinctBy<I, F, K> {
    iter: I,
    selector: F,
    seen: HashSet<K, SeenState>,
}

impl<I, F, K> DistinctBy<I, F, K> {
    pub(crate) fn new(iter: I, selector: F) -> Self {
        Self {
            iter,
            selector,
            seen: HashSet::with_hasher(SeenState::default()),
        }
    }
}

impl<I, F, K> Iterator for DistinctBy<I, F, K>
where
    I: Iterator,
    F: FnMut(&I::Item) -> K,
    K: Eq + Hash,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let element = self.iter.next()?;
            let key = (self.selector)(&element);
            if self.seen.insert(key) {
                return Some(element);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}

/// A lazy adapter yielding each distinct element once under a caller
/// equality definition.
///
/// Created by
/// [`Sequence::distinct_with`](crate::sequence::Sequence::distinct_with).
/// Retained elements are bucketed by the equality's own hash; elements in
/// the same bucket are told apart with its `equals`. Most buckets hold a
/// single element, so bucket entries live inline in a `SmallVec`.
pub struct DistinctWith<I: Iterator, E> {
    iter: I,
    equality: E,
    seen: HashMap<u64, SmallVec<[I::Item; 1]>, SeenState>,
}

impl<I: Iterator, E> DistinctWith<I, E> {
    pub(crate) fn new(iter: I, equality: E) -> Self {
        Self {
            iter,
            equality,
            seen: HashMap::with_hasher(SeenState::default()),
        }
    }
}

impl<I, E> Iterator for DistinctWith<I, E>
where
    I: Iterator,
    I::Item: Clone,
    E: Equality<I::Item>,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        loop {
            let element = self.iter.next()?;
            let code = hash_code(&self.equality, &element);
            let bucket = self.seen.entry(code).or_default();
            if bucket
                .iter()
                .any(|kept| self.equality.equals(kept, &element))
            {
                continue;
            }
            bucket.push(element.clone());
            return Some(element);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.iter.size_hint();
        (0, upper)
    }
}
