//! The HashSet

use super::root::{fmt, iter};
use super::root::vec::Vec;

use super::{HashSetCursor, IntoIter, Iter};

use super::failure::{self, Failure, Result};
use super::hashcore::{DefaultHashHooks, HashHooks};
use super::hashcore::buckets::BucketArray;
use super::hashcore::capacity::{self, DEFAULT_CAPACITY};
use super::stamp::Stamp;

//
//  Public Interface
//

/// `HashSet`
pub struct HashSet<T, H = DefaultHashHooks> {
    //  Hooks of the HashSet.
    hooks: H,
    //  The number of elements in the set, across all chains.
    size: usize,
    //  Bumped on each structural modification, checked by cursors.
    stamp: Stamp,
    buckets: BucketArray<T>,
}

impl<T, H: Default> HashSet<T, H> {
    /// Creates a new instance of the `HashSet` with `DEFAULT_CAPACITY`,
    /// rounded up to 13 slots.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let set: HashSet<i32> = HashSet::new();
    ///
    /// assert_eq!(0, set.len());
    /// assert_eq!(13, set.capacity());
    /// ```
    pub fn new() -> Self { Self::with_hooks(H::default()) }

    /// Creates a new instance of the `HashSet` with at least `capacity` slots.
    ///
    /// If `capacity` is not a prime, it is rounded up to the next prime.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidCapacity` if `capacity` is 0, and `CapacityExceeded` if
    /// `capacity` is greater than `MAX_PRIME_CAPACITY`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::failure::Failure;
    /// #   use buckets::hashset::{HashSet, MAX_PRIME_CAPACITY};
    /// let set: HashSet<i32> = HashSet::try_with_capacity(20).unwrap();
    /// assert_eq!(23, set.capacity());
    ///
    /// let set = HashSet::<i32>::try_with_capacity(MAX_PRIME_CAPACITY + 1);
    /// assert_eq!(Some(Failure::CapacityExceeded), set.err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        Self::try_with_capacity_and_hooks(capacity, H::default())
    }

    /// Creates a new instance of the `HashSet` with at least `capacity` slots.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `capacity` is 0, or greater than `MAX_PRIME_CAPACITY`.
    pub fn with_capacity(capacity: usize) -> Self {
        failure::or_panic(Self::try_with_capacity(capacity))
    }
}

impl<T, H> HashSet<T, H> {
    /// Creates a new instance of the `HashSet` with `DEFAULT_CAPACITY` and the
    /// given hooks.
    pub fn with_hooks(hooks: H) -> Self {
        Self::with_capacity_and_hooks(DEFAULT_CAPACITY, hooks)
    }

    /// Creates a new instance of the `HashSet` with at least `capacity` slots
    /// and the given hooks.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidCapacity` if `capacity` is 0, and `CapacityExceeded` if
    /// `capacity` is greater than `MAX_PRIME_CAPACITY`.
    pub fn try_with_capacity_and_hooks(capacity: usize, hooks: H) -> Result<Self> {
        if capacity == 0 {
            return Err(Failure::InvalidCapacity);
        }

        let capacity = capacity::next_prime(capacity)?;

        Ok(Self {
            hooks,
            size: 0,
            stamp: Stamp::new(),
            buckets: BucketArray::new(capacity),
        })
    }

    /// Creates a new instance of the `HashSet` with at least `capacity` slots
    /// and the given hooks.
    ///
    /// #   Panics
    ///
    /// Panics if `capacity` is 0, or greater than `MAX_PRIME_CAPACITY`.
    pub fn with_capacity_and_hooks(capacity: usize, hooks: H) -> Self {
        failure::or_panic(Self::try_with_capacity_and_hooks(capacity, hooks))
    }

    /// Returns the hooks of the instance.
    pub fn hooks(&self) -> &H { &self.hooks }

    /// Returns whether the instance contains any element, or not.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert!(set.is_empty());
    ///
    /// set.add(1);
    /// assert!(!set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.size == 0 }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert_eq!(0, set.len());
    ///
    /// set.add(1);
    /// assert_eq!(1, set.len());
    /// ```
    pub fn len(&self) -> usize { self.size }

    /// Returns the current number of slots of the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// assert_eq!(13, set.capacity());
    ///
    /// //  The 11th element pushes the load beyond 3/4.
    /// set.extend(0..11);
    /// assert_eq!(29, set.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.buckets.capacity() }

    /// Returns an iterator over the elements.
    ///
    /// The elements are yielded in slot order, then in chain order.
    pub fn iter(&self) -> Iter<'_, T> { Iter::new(&self.buckets, self.size) }

    /// Returns a cursor over the elements, positioned before the first.
    ///
    /// See `HashSetCursor`.
    pub fn cursor(&self) -> HashSetCursor { HashSetCursor::new(self.stamp) }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains its current number of
    /// slots.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.extend(0..20);
    ///
    /// set.clear();
    /// assert_eq!(0, set.len());
    /// assert!(!set.contains(&3));
    /// assert_eq!(29, set.capacity());
    /// ```
    pub fn clear(&mut self) {
        self.buckets.clear();
        self.size = 0;
        self.stamp.bump();
    }

    /// Copies the elements into `destination`, starting at `index`.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is greater than the length of
    /// `destination`, and `InvalidArgument` if `destination` has not enough
    /// room past `index` for all the elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::failure::Failure;
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.add(7);
    ///
    /// let mut array = [0; 3];
    /// assert_eq!(Ok(()), set.copy_to(&mut array, 2));
    /// assert_eq!([0, 0, 7], array);
    ///
    /// assert_eq!(Err(Failure::InvalidArgument), set.copy_to(&mut array, 3));
    /// assert_eq!(Err(Failure::IndexOutOfRange), set.copy_to(&mut array, 4));
    /// ```
    pub fn copy_to(&self, destination: &mut [T], index: usize) -> Result<()>
    where
        T: Clone,
    {
        if index > destination.len() {
            return Err(Failure::IndexOutOfRange);
        }

        if destination.len() - index < self.size {
            return Err(Failure::InvalidArgument);
        }

        for (target, value) in destination[index..].iter_mut().zip(self.iter()) {
            target.clone_from(value);
        }

        Ok(())
    }

    /// Returns the elements, in iteration order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    //  Returns the buckets.
    pub(super) fn buckets(&self) -> &BucketArray<T> { &self.buckets }

    //  Returns the current modification stamp.
    pub(super) fn stamp(&self) -> Stamp { self.stamp }

    //  Replaces the content of the instance with `buckets`, holding `size` elements.
    pub(super) fn replace_buckets(&mut self, buckets: BucketArray<T>, size: usize) {
        self.buckets = buckets;
        self.size = size;
        self.stamp.bump();
    }
}

impl<T, H: HashHooks<T>> HashSet<T, H> {
    /// Returns `true` if the set contains the value.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.add(1);
    ///
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&0));
    /// ```
    pub fn contains(&self, value: &T) -> bool {
        let slot = self.buckets.slot_of(self.hooks.hash(value));
        self.buckets.contains(slot, |candidate| self.hooks.equals(candidate, value))
    }

    /// Returns a reference to the element equal to `value`, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.add(1);
    ///
    /// assert_eq!(Some(&1), set.get(&1));
    /// assert_eq!(None, set.get(&0));
    /// ```
    pub fn get(&self, value: &T) -> Option<&T> {
        let slot = self.buckets.slot_of(self.hooks.hash(value));
        self.buckets.find(slot, |candidate| self.hooks.equals(candidate, value))
    }

    /// Adds a value to the set.
    ///
    /// Returns `true` if the value was added, and `false` if an equal element
    /// was already present, in which case `value` is dropped and the set is
    /// left untouched.
    ///
    /// If the load has reached 3/4, the set first grows to the prime following
    /// twice its capacity, rehashing all elements. Duplicates are rejected
    /// before this check, so adding an element already present never grows
    /// the set, even at full load.
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
    /// let mut set: HashSet<_> = HashSet::new();
    ///
    /// assert_eq!(Ok(true), set.try_add(3));
    /// assert_eq!(Ok(false), set.try_add(3));
    ///
    /// assert_eq!(1, set.len());
    ///
    /// //  At full load, only a new element grows the set.
    /// set.extend(0..10);
    /// assert_eq!((10, 13), (set.len(), set.capacity()));
    ///
    /// assert_eq!(Ok(false), set.try_add(3));
    /// assert_eq!(13, set.capacity());
    ///
    /// assert_eq!(Ok(true), set.try_add(10));
    /// assert_eq!(29, set.capacity());
    /// ```
    pub fn try_add(&mut self, value: T) -> Result<bool> {
        let hash = self.hooks.hash(&value);
        let slot = self.buckets.slot_of(hash);

        if self.buckets.contains(slot, |candidate| self.hooks.equals(candidate, &value)) {
            return Ok(false);
        }

        if capacity::needs_resize(self.size, self.buckets.capacity()) {
            let capacity = capacity::grow(self.buckets.capacity())?;
            self.rehash(capacity);
        }

        let slot = self.buckets.slot_of(hash);
        self.buckets.chain_or_create(slot).append(value);

        self.size += 1;
        self.stamp.bump();

        Ok(true)
    }

    /// Adds a value to the set.
    ///
    /// Calling this method is equivalent to calling `try_add` and panicking on
    /// error.
    ///
    /// #   Panics
    ///
    /// Panics if the set needs to grow beyond `MAX_PRIME_CAPACITY`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    ///
    /// assert!(set.add(3));
    /// assert!(!set.add(3));
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        failure::or_panic(self.try_add(value))
    }

    /// Removes the element equal to `value`, returning whether it was present.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.add(1);
    ///
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// assert!(set.is_empty());
    /// ```
    pub fn remove(&mut self, value: &T) -> bool { self.take(value).is_some() }

    /// Removes the element equal to `value`, and returns it.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = HashSet::new();
    /// set.add("a".to_string());
    ///
    /// assert_eq!(Some("a".to_string()), set.take(&"a".to_string()));
    /// assert_eq!(None, set.take(&"a".to_string()));
    /// ```
    pub fn take(&mut self, value: &T) -> Option<T> {
        let slot = self.buckets.slot_of(self.hooks.hash(value));

        let hooks = &self.hooks;
        let removed = self.buckets.remove(slot, |candidate| hooks.equals(candidate, value))?;

        self.size -= 1;
        self.stamp.bump();

        Some(removed)
    }

    /// Retains only the elements satisfying `predicate`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::hashset::HashSet;
    /// let mut set: HashSet<_> = (0..10).collect();
    /// set.retain(|e| e % 3 == 0);
    ///
    /// let mut elements = set.to_vec();
    /// elements.sort();
    /// assert_eq!(vec![0, 3, 6, 9], elements);
    /// ```
    pub fn retain<F>(&mut self, predicate: F)
    where
        F: FnMut(&T) -> bool,
    {
        //  Elements stay in their slot, the hooks are not involved.
        let removed = self.buckets.retain(predicate);

        if removed > 0 {
            self.size -= removed;
            self.stamp.bump();
        }
    }

    //  Rehashes all elements into `capacity` slots.
    fn rehash(&mut self, capacity: usize) {
        log_debug!(
            from = self.buckets.capacity(),
            to = capacity,
            size = self.size,
            "rehashing HashSet"
        );

        self.buckets.rehash(capacity, &self.hooks);
        self.stamp.bump();
    }
}

impl<T, H: Clone> Clone for HashSet<T, H>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            hooks: self.hooks.clone(),
            size: self.size,
            stamp: Stamp::new(),
            buckets: self.buckets.clone(),
        }
    }
}

impl<T, H: Default> Default for HashSet<T, H> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug, H> fmt::Debug for HashSet<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("capacity", &self.capacity())
            .field("length", &self.size)
            .field("buckets", &self.buckets)
            .finish()
    }
}

impl<T, H, OH> PartialEq<HashSet<T, OH>> for HashSet<T, H>
where
    H: HashHooks<T>,
    OH: HashHooks<T>,
{
    fn eq(&self, other: &HashSet<T, OH>) -> bool { self.set_equals(other) }
}

impl<T, H: HashHooks<T>> Eq for HashSet<T, H> {}

impl<T, H> iter::Extend<T> for HashSet<T, H>
where
    H: HashHooks<T>,
{
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>
    {
        self.union_with(collection);
    }
}

impl<T, H> iter::FromIterator<T> for HashSet<T, H>
where
    H: HashHooks<T> + Default,
{
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>
    {
        let mut result = HashSet::with_hooks(H::default());
        result.extend(collection);
        result
    }
}

impl<'a, T, H> iter::IntoIterator for &'a HashSet<T, H> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

impl<T, H> iter::IntoIterator for HashSet<T, H> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> { IntoIter::new(self.buckets, self.size) }
}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::{CollidingHooks, IdentityHooks, SpyCount, SpyElement, SpyHooks};

fn sorted<T: Clone + Ord, H>(set: &HashSet<T, H>) -> Vec<T> {
    let mut result = set.to_vec();
    result.sort();
    result
}

#[test]
fn construction_capacity() {
    let set: HashSet<i32> = HashSet::new();
    assert_eq!(13, set.capacity());

    let set: HashSet<i32> = HashSet::with_capacity(1);
    assert_eq!(2, set.capacity());

    let set: HashSet<i32> = HashSet::with_capacity(100);
    assert_eq!(101, set.capacity());
}

#[test]
fn construction_invalid_capacity() {
    assert_eq!(Some(Failure::InvalidCapacity), HashSet::<i32>::try_with_capacity(0).err());
    assert_eq!(
        Some(Failure::CapacityExceeded),
        HashSet::<i32>::try_with_capacity(capacity::MAX_PRIME_CAPACITY + 1).err()
    );
}

#[test]
#[should_panic(expected = "InvalidCapacity")]
fn construction_zero_capacity_panics() {
    let _: HashSet<i32> = HashSet::with_capacity(0);
}

#[test]
fn add_scenario() {
    let mut set: HashSet<_> = HashSet::new();

    assert!(set.add(1));
    assert!(set.add(2));
    assert!(!set.add(2));
    assert!(set.add(3));

    assert_eq!(3, set.len());
    assert!(set.contains(&2));
    assert_eq!(vec![1, 2, 3], sorted(&set));
}

#[test]
fn add_duplicate_leaves_set_untouched() {
    let mut set: HashSet<_> = HashSet::new();
    set.add(1);

    let stamp = set.stamp();
    assert!(!set.add(1));

    assert_eq!(1, set.len());
    assert_eq!(stamp, set.stamp());
    assert_eq!(1, set.iter().count());
}

#[test]
fn add_negative_hash() {
    let mut set = HashSet::with_hooks(IdentityHooks);

    assert!(set.add(-1i64));
    assert!(set.add(-14i64));
    assert!(set.add(i64::MIN));

    assert!(set.contains(&-1));
    assert!(set.contains(&-14));
    assert!(set.contains(&i64::MIN));
    assert!(!set.contains(&1));
}

#[test]
fn add_resizes_at_three_quarters() {
    let mut set = HashSet::with_hooks(IdentityHooks);

    for i in 0..10u64 {
        set.add(i);
    }

    //  10 >= 13 * 3 / 4, hence the next insertion resizes.
    assert_eq!(13, set.capacity());

    set.add(10);
    assert_eq!(29, set.capacity());

    for i in 0..11u64 {
        assert!(set.contains(&i), "{}", i);
    }
}

#[test]
fn add_duplicate_at_full_load_does_not_resize() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.extend(0..10u64);

    let stamp = set.stamp();

    assert!(!set.add(4));
    assert_eq!(13, set.capacity());
    assert_eq!(stamp, set.stamp());

    assert!(set.add(10));
    assert_eq!(29, set.capacity());
}

#[test]
fn add_resize_is_deterministic() {
    let build = || {
        let mut set: HashSet<_> = HashSet::with_capacity(3);
        set.extend((0..50).map(|i| i * 7));
        set.to_vec()
    };

    assert_eq!(build(), build());
}

#[test]
fn collisions_are_chained() {
    let mut set = HashSet::with_hooks(CollidingHooks);

    set.extend(0..20);
    assert!(!set.add(7));

    assert_eq!(20, set.len());
    assert_eq!((0..20).collect::<Vec<_>>(), set.to_vec());

    assert!(set.remove(&7));
    assert!(!set.contains(&7));
    assert!(set.contains(&8));
    assert_eq!(19, set.len());
}

#[test]
fn remove_absent() {
    let mut set: HashSet<_> = HashSet::new();
    set.add(1);

    let stamp = set.stamp();

    assert!(!set.remove(&2));
    assert_eq!(1, set.len());
    assert_eq!(stamp, set.stamp());
}

#[test]
fn remove_then_add() {
    let mut set: HashSet<_> = HashSet::new();

    set.add(1);
    assert!(set.remove(&1));
    assert!(!set.contains(&1));

    assert!(set.add(1));
    assert!(set.contains(&1));
    assert_eq!(1, set.len());
}

#[test]
fn option_elements() {
    let mut set: HashSet<Option<i32>> = HashSet::new();

    assert!(set.add(None));
    assert!(!set.add(None));
    assert!(set.add(Some(0)));

    assert!(set.contains(&None));
    assert!(set.remove(&None));
    assert!(!set.contains(&None));
    assert_eq!(1, set.len());
}

#[test]
fn clear_keeps_capacity() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.extend(0..30u64);

    let capacity = set.capacity();

    set.clear();

    assert!(set.is_empty());
    assert_eq!(capacity, set.capacity());
    assert_eq!(0, set.iter().count());

    assert!(set.add(3));
    assert_eq!(vec![3], set.to_vec());
}

#[test]
fn clear_drops_elements() {
    let count = SpyCount::zero();

    let mut set = HashSet::with_hooks(SpyHooks);
    set.add(SpyElement::new(&count));
    set.add(SpyElement::new(&count));

    assert_eq!(2, count.get());

    set.clear();

    assert_eq!(0, count.get());
}

#[test]
fn retain() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.extend(0..10u64);

    set.retain(|e| e % 2 == 1);

    assert_eq!(5, set.len());
    assert_eq!(vec![1, 3, 5, 7, 9], set.to_vec());
    assert!(!set.contains(&2));
}

#[test]
fn copy_to() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.extend([2u64, 1]);

    let mut array = [0u64; 4];

    assert_eq!(Ok(()), set.copy_to(&mut array, 1));
    assert_eq!([0, 1, 2, 0], array);

    assert_eq!(Err(Failure::InvalidArgument), set.copy_to(&mut array, 3));
    assert_eq!(Err(Failure::IndexOutOfRange), set.copy_to(&mut array, 5));
}

#[test]
fn trait_clone() {
    let mut set: HashSet<_> = HashSet::new();
    set.extend(["a".to_string(), "b".to_string()]);

    let clone = set.clone();
    set.remove(&"a".to_string());

    assert_eq!(2, clone.len());
    assert!(clone.contains(&"a".to_string()));
}

#[test]
fn trait_debug() {
    let mut set = HashSet::with_capacity_and_hooks(3, IdentityHooks);
    set.extend([1u64, 4]);

    assert_eq!(
        "HashSet { capacity: 3, length: 2, buckets: [[], [1, 4], []] }",
        format!("{:?}", set)
    );
}

#[test]
fn trait_partial_eq() {
    let left: HashSet<_> = [1, 2, 3].into_iter().collect();
    let right: HashSet<_> = [3, 2, 1, 1].into_iter().collect();

    assert_eq!(left, right);

    let other: HashSet<_> = [1, 2].into_iter().collect();
    assert_ne!(left, other);
}

#[test]
fn trait_from_iterator() {
    let set: HashSet<_> = [1, 2, 3, 4, 5, 5].iter().copied().collect();

    assert_eq!(5, set.len());
}

#[test]
fn trait_into_iterator() {
    let mut set = HashSet::with_capacity_and_hooks(5, IdentityHooks);
    set.extend([6u64, 1, 3]);

    let borrowed: Vec<_> = (&set).into_iter().copied().collect();
    let owned: Vec<_> = set.into_iter().collect();

    assert_eq!(vec![6, 1, 3], borrowed);
    assert_eq!(borrowed, owned);
}

}   //  mod tests
