//! Set algebra over the HashSet.
//!
//! The mutating operations, `union_with` and friends, combine the set with an
//! arbitrary collection of elements. The queries, `is_subset_of` and friends,
//! compare two sets, possibly with distinct hooks, in which case the hooks of
//! the set being probed decide membership.

use super::root::borrow::Borrow;

use super::HashSet;

use super::failure::{self, Result};
use super::hashcore::HashHooks;
use super::hashcore::buckets::BucketArray;

impl<T, H: HashHooks<T>> HashSet<T, H> {
    /// Adds all elements of `collection` to the set.
    ///
    /// #   Errors
    ///
    /// Returns `CapacityExceeded` if the set needs to grow beyond
    /// `MAX_PRIME_CAPACITY`. The elements added prior to the failure remain in
    /// the set.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.add(1);
    ///
    /// assert_eq!(Ok(()), set.try_union_with([1, 2, 3]));
    /// assert_eq!(3, set.len());
    /// ```
    pub fn try_union_with<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
    {
        for value in collection {
            self.try_add(value)?;
        }

        Ok(())
    }

    /// Adds all elements of `collection` to the set.
    ///
    /// Calling this method is equivalent to calling `try_union_with` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the set needs to grow beyond `MAX_PRIME_CAPACITY`.
    pub fn union_with<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
    {
        failure::or_panic(self.try_union_with(collection));
    }

    /// Removes all elements of `collection` from the set.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = (0..5).collect();
    /// set.except_with(&[1, 3, 7]);
    ///
    /// let mut elements = set.to_vec();
    /// elements.sort();
    /// assert_eq!(vec![0, 2, 4], elements);
    /// ```
    pub fn except_with<C>(&mut self, collection: C)
    where
        C: IntoIterator,
        C::Item: Borrow<T>,
    {
        for value in collection {
            self.remove(value.borrow());
        }
    }

    /// Retains only the elements of the set which are also in `collection`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = (0..5).collect();
    /// set.intersect_with(&[4, 1, 1, 9]);
    ///
    /// let mut elements = set.to_vec();
    /// elements.sort();
    /// assert_eq!(vec![1, 4], elements);
    /// ```
    pub fn intersect_with<C>(&mut self, collection: C)
    where
        C: IntoIterator,
        C::Item: Borrow<T>,
    {
        //  Same capacity, hence the same slots.
        let mut kept = BucketArray::new(self.capacity());
        let mut size = 0;

        for value in collection {
            let value: &T = value.borrow();
            let slot = kept.slot_of(self.hooks().hash(value));

            if let Some(found) = self.take(value) {
                kept.chain_or_create(slot).append(found);
                size += 1;
            }
        }

        self.replace_buckets(kept, size);
    }

    /// Retains only the elements which are either in the set or in
    /// `collection`, but not in both.
    ///
    /// Duplicates within `collection` count once.
    ///
    /// #   Errors
    ///
    /// Returns `CapacityExceeded` if the set needs to grow beyond
    /// `MAX_PRIME_CAPACITY`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = (0..4).collect();
    ///
    /// assert_eq!(Ok(()), set.try_symmetric_except_with([2, 3, 4, 4, 5]));
    ///
    /// let mut elements = set.to_vec();
    /// elements.sort();
    /// assert_eq!(vec![0, 1, 4, 5], elements);
    /// ```
    pub fn try_symmetric_except_with<C>(&mut self, collection: C) -> Result<()>
    where
        C: IntoIterator<Item = T>,
        H: Clone,
    {
        let mut incoming = HashSet::with_hooks(self.hooks().clone());
        incoming.try_union_with(collection)?;

        for value in incoming {
            if !self.remove(&value) {
                self.try_add(value)?;
            }
        }

        Ok(())
    }

    /// Retains only the elements which are either in the set or in
    /// `collection`, but not in both.
    ///
    /// Calling this method is equivalent to calling `try_symmetric_except_with`
    /// and panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if the set needs to grow beyond `MAX_PRIME_CAPACITY`.
    pub fn symmetric_except_with<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>,
        H: Clone,
    {
        failure::or_panic(self.try_symmetric_except_with(collection));
    }

    /// Returns whether all elements of the set are in `other`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let small: HashSet<_> = (0..2).collect();
    /// let large: HashSet<_> = (0..4).collect();
    ///
    /// assert!(small.is_subset_of(&large));
    /// assert!(small.is_subset_of(&small));
    /// assert!(!large.is_subset_of(&small));
    /// ```
    pub fn is_subset_of<OH>(&self, other: &HashSet<T, OH>) -> bool
    where
        OH: HashHooks<T>,
    {
        self.iter().all(|value| other.contains(value))
    }

    /// Returns whether all elements of the set are in `other`, and `other`
    /// has further elements.
    pub fn is_proper_subset_of<OH>(&self, other: &HashSet<T, OH>) -> bool
    where
        OH: HashHooks<T>,
    {
        self.is_subset_of(other) && other.iter().any(|value| !self.contains(value))
    }

    /// Returns whether all elements of `other` are in the set.
    pub fn is_superset_of<OH>(&self, other: &HashSet<T, OH>) -> bool
    where
        OH: HashHooks<T>,
    {
        other.is_subset_of(self)
    }

    /// Returns whether all elements of `other` are in the set, and the set has
    /// further elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let small: HashSet<_> = (0..2).collect();
    /// let large: HashSet<_> = (0..4).collect();
    ///
    /// assert!(large.is_proper_superset_of(&small));
    /// assert!(!large.is_proper_superset_of(&large));
    /// ```
    pub fn is_proper_superset_of<OH>(&self, other: &HashSet<T, OH>) -> bool
    where
        OH: HashHooks<T>,
    {
        other.is_proper_subset_of(self)
    }

    /// Returns whether the set and `other` have at least one element in common.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let left: HashSet<_> = (0..3).collect();
    /// let right: HashSet<_> = (2..5).collect();
    /// let other: HashSet<_> = (7..9).collect();
    ///
    /// assert!(left.overlaps(&right));
    /// assert!(!left.overlaps(&other));
    /// ```
    pub fn overlaps<OH>(&self, other: &HashSet<T, OH>) -> bool
    where
        OH: HashHooks<T>,
    {
        other.iter().any(|value| self.contains(value))
    }

    /// Returns whether the set and `other` contain the same elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let left: HashSet<_> = [1, 2, 3].into_iter().collect();
    /// let right: HashSet<_> = [3, 1, 2].into_iter().collect();
    ///
    /// assert!(left.set_equals(&right));
    /// ```
    pub fn set_equals<OH>(&self, other: &HashSet<T, OH>) -> bool
    where
        OH: HashHooks<T>,
    {
        self.is_subset_of(other) && other.is_subset_of(self)
    }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::failure::Failure;
use crate::hashcore::FnHashHooks;
use crate::utils::tester::{CollidingHooks, IdentityHooks};

fn set_of(values: &[u64]) -> HashSet<u64, IdentityHooks> {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.extend(values.iter().copied());
    set
}

fn sorted<H>(set: &HashSet<u64, H>) -> Vec<u64> {
    let mut result = set.to_vec();
    result.sort();
    result
}

#[test]
fn union_with_skips_duplicates() {
    let mut set = set_of(&[1, 2]);

    set.union_with([2, 3, 3, 4]);

    assert_eq!(4, set.len());
    assert_eq!(vec![1, 2, 3, 4], sorted(&set));
}

#[test]
fn except_with() {
    let mut set = set_of(&[1, 2, 3]);

    set.except_with(&[2, 5]);
    assert_eq!(vec![1, 3], sorted(&set));

    set.except_with([1u64, 3]);
    assert!(set.is_empty());

    set.except_with(&[1]);
    assert!(set.is_empty());
}

#[test]
fn intersect_with() {
    let mut set = set_of(&[1, 2, 3, 4]);

    set.intersect_with(&[4, 2, 2, 9]);

    assert_eq!(2, set.len());
    assert_eq!(vec![2, 4], sorted(&set));
    assert!(set.contains(&2));
    assert!(!set.contains(&1));
}

#[test]
fn intersect_with_empty() {
    let mut set = set_of(&[1, 2, 3]);
    let capacity = set.capacity();

    set.intersect_with(&[] as &[u64]);

    assert!(set.is_empty());
    assert_eq!(capacity, set.capacity());
    assert_eq!(0, set.iter().count());
}

#[test]
fn intersect_with_collisions() {
    let mut set = HashSet::with_hooks(CollidingHooks);
    set.extend(0..10);

    set.intersect_with(&[7, 3, 11]);

    assert_eq!(vec![7, 3], set.to_vec());
}

#[test]
fn intersect_with_invalidates_cursors() {
    let mut set = set_of(&[1, 2, 3]);
    let mut cursor = set.cursor();

    set.intersect_with(&[1, 2, 3]);

    assert_eq!(Err(Failure::ConcurrentModification), cursor.advance(&set));
}

#[test]
fn symmetric_except_with() {
    let mut set = set_of(&[1, 2, 3]);

    set.symmetric_except_with([3, 4, 4, 1]);

    assert_eq!(vec![2, 4], sorted(&set));
}

#[test]
fn symmetric_except_with_self_copy() {
    let mut set = set_of(&[1, 2, 3]);

    set.symmetric_except_with([1u64, 2, 3]);

    assert!(set.is_empty());
}

#[test]
fn subset_and_superset() {
    let empty = set_of(&[]);
    let small = set_of(&[1, 2]);
    let large = set_of(&[1, 2, 3]);

    assert!(empty.is_subset_of(&small));
    assert!(empty.is_proper_subset_of(&small));
    assert!(!empty.is_proper_subset_of(&empty));

    assert!(small.is_subset_of(&large));
    assert!(small.is_proper_subset_of(&large));
    assert!(!large.is_subset_of(&small));

    assert!(large.is_superset_of(&small));
    assert!(large.is_superset_of(&large));
    assert!(large.is_proper_superset_of(&small));
    assert!(!large.is_proper_superset_of(&large));
}

#[test]
fn overlaps() {
    let left = set_of(&[1, 2]);
    let right = set_of(&[2, 3]);
    let other = set_of(&[4]);

    assert!(left.overlaps(&right));
    assert!(right.overlaps(&left));
    assert!(!left.overlaps(&other));
    assert!(!set_of(&[]).overlaps(&left));
}

#[test]
fn set_equals_across_hooks() {
    let identity = set_of(&[1, 2, 3]);

    let hooks = FnHashHooks::new(|left: &u64, right: &u64| left == right, |value: &u64| value * 31);
    let mut other = HashSet::with_hooks(hooks);
    other.extend([3u64, 2, 1]);

    assert!(identity.set_equals(&other));
    assert!(other.set_equals(&identity));

    other.remove(&1);
    assert!(!identity.set_equals(&other));
    assert!(identity.is_proper_superset_of(&other));
}

}   //  mod tests
