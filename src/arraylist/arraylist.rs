//! The ArrayList

use super::root::{cmp, fmt, iter, mem, ops, slice};
use super::root::vec::{self, Vec};

use super::ArrayListCursor;

use super::capacity::{self, DEFAULT_ARRAY_CAPACITY};
use super::failure::{self, Failure, Result};
use super::stamp::Stamp;

//
//  Public Interface
//

/// `ArrayList`
pub struct ArrayList<T> {
    //  The live elements; the length of the buffer is the length of the list.
    buffer: Vec<T>,
    //  The capacity of the list, which is at least the length of the buffer.
    capacity: usize,
    //  Bumped on each structural modification, checked by cursors.
    stamp: Stamp,
}

impl<T> ArrayList<T> {
    /// Creates a new, empty, instance with a capacity of `DEFAULT_ARRAY_CAPACITY`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let list: ArrayList<i32> = ArrayList::new();
    ///
    /// assert_eq!(0, list.len());
    /// assert_eq!(4, list.capacity());
    /// ```
    pub fn new() -> Self { Self::with_buffer(DEFAULT_ARRAY_CAPACITY) }

    /// Creates a new, empty, instance with a capacity of `capacity`.
    ///
    /// A capacity of 0 is valid, the buffer is then allocated on the first
    /// insertion.
    ///
    /// #   Errors
    ///
    /// Returns `CapacityExceeded` if `capacity` is greater than
    /// `MAX_ARRAY_LENGTH`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::{ArrayList, MAX_ARRAY_LENGTH};
    /// #   use buckets::failure::Failure;
    /// let list: ArrayList<i32> = ArrayList::try_with_capacity(10).unwrap();
    /// assert_eq!(10, list.capacity());
    ///
    /// let list = ArrayList::<i32>::try_with_capacity(MAX_ARRAY_LENGTH + 1);
    /// assert_eq!(Some(Failure::CapacityExceeded), list.err());
    /// ```
    pub fn try_with_capacity(capacity: usize) -> Result<Self> {
        let capacity = capacity::check(capacity)?;

        Ok(Self::with_buffer(capacity))
    }

    /// Creates a new, empty, instance with a capacity of `capacity`.
    ///
    /// Calling this method is equivalent to calling `try_with_capacity` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `capacity` is greater than `MAX_ARRAY_LENGTH`.
    pub fn with_capacity(capacity: usize) -> Self {
        failure::or_panic(Self::try_with_capacity(capacity))
    }

    /// Returns whether the instance contains any element, or not.
    pub fn is_empty(&self) -> bool { self.buffer.is_empty() }

    /// Returns the number of elements contained in the instance.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let mut list = ArrayList::new();
    /// assert_eq!(0, list.len());
    ///
    /// list.add("a");
    /// assert_eq!(1, list.len());
    /// ```
    pub fn len(&self) -> usize { self.buffer.len() }

    /// Returns the number of elements the instance can hold without growing.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let mut list = ArrayList::new();
    /// list.extend(0..4);
    /// assert_eq!(4, list.capacity());
    ///
    /// list.add(4);
    /// assert_eq!(8, list.capacity());
    /// ```
    pub fn capacity(&self) -> usize { self.capacity }

    /// Sets the capacity of the instance.
    ///
    /// #   Errors
    ///
    /// Returns `InvalidArgument` if `capacity` is less than the number of
    /// elements, and `CapacityExceeded` if `capacity` is greater than
    /// `MAX_ARRAY_LENGTH`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// #   use buckets::failure::Failure;
    /// let mut list: ArrayList<_> = (0..3).collect();
    ///
    /// assert_eq!(Ok(()), list.try_set_capacity(3));
    /// assert_eq!(3, list.capacity());
    ///
    /// assert_eq!(Err(Failure::InvalidArgument), list.try_set_capacity(2));
    /// ```
    pub fn try_set_capacity(&mut self, capacity: usize) -> Result<()> {
        if capacity < self.len() {
            return Err(Failure::InvalidArgument);
        }

        let capacity = capacity::check(capacity)?;

        self.resize_buffer(capacity);

        Ok(())
    }

    /// Sets the capacity of the instance.
    ///
    /// Calling this method is equivalent to calling `try_set_capacity` and
    /// panicking on error.
    ///
    /// #   Panics
    ///
    /// Panics if `capacity` is less than the number of elements, or greater
    /// than `MAX_ARRAY_LENGTH`.
    pub fn set_capacity(&mut self, capacity: usize) {
        failure::or_panic(self.try_set_capacity(capacity));
    }

    /// Appends an element, returning its index.
    ///
    /// If the instance is full, it first grows.
    ///
    /// #   Errors
    ///
    /// Returns `CapacityExceeded` if the instance already holds
    /// `MAX_ARRAY_LENGTH` elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let mut list = ArrayList::new();
    ///
    /// assert_eq!(Ok(0), list.try_add(7));
    /// assert_eq!(Ok(1), list.try_add(7));
    /// ```
    pub fn try_add(&mut self, value: T) -> Result<usize> {
        self.reserve_one()?;

        self.buffer.push(value);
        self.stamp.bump();

        Ok(self.buffer.len() - 1)
    }

    /// Appends an element, returning its index.
    ///
    /// Calling this method is equivalent to calling `try_add` and panicking on
    /// error.
    ///
    /// #   Panics
    ///
    /// Panics if the instance already holds `MAX_ARRAY_LENGTH` elements.
    pub fn add(&mut self, value: T) -> usize {
        failure::or_panic(self.try_add(value))
    }

    /// Returns a reference to the element at `index`, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let list: ArrayList<_> = (1..3).collect();
    ///
    /// assert_eq!(Some(&2), list.get(1));
    /// assert_eq!(None, list.get(2));
    /// ```
    pub fn get(&self, index: usize) -> Option<&T> { self.buffer.get(index) }

    /// Returns a mutable reference to the element at `index`, if any.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> { self.buffer.get_mut(index) }

    /// Replaces the element at `index`, returning the previous one.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is not less than the number of
    /// elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// #   use buckets::failure::Failure;
    /// let mut list: ArrayList<_> = (1..3).collect();
    ///
    /// assert_eq!(Ok(2), list.try_set(1, 5));
    /// assert_eq!([1, 5], list.as_slice());
    ///
    /// assert_eq!(Err(Failure::IndexOutOfRange), list.try_set(2, 0));
    /// ```
    pub fn try_set(&mut self, index: usize, value: T) -> Result<T> {
        let slot = self.buffer.get_mut(index).ok_or(Failure::IndexOutOfRange)?;

        Ok(mem::replace(slot, value))
    }

    /// Inserts an element at `index`, shifting all elements after it.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is greater than the number of
    /// elements, and `CapacityExceeded` if the instance already holds
    /// `MAX_ARRAY_LENGTH` elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// #   use buckets::failure::Failure;
    /// let mut list = ArrayList::new();
    ///
    /// assert_eq!(Ok(()), list.insert(0, 'b'));
    /// assert_eq!(Ok(()), list.insert(0, 'a'));
    /// assert_eq!(Ok(()), list.insert(2, 'c'));
    /// assert_eq!(['a', 'b', 'c'], list.as_slice());
    ///
    /// assert_eq!(Err(Failure::IndexOutOfRange), list.insert(4, 'e'));
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len() {
            return Err(Failure::IndexOutOfRange);
        }

        self.reserve_one()?;

        self.buffer.insert(index, value);
        self.stamp.bump();

        Ok(())
    }

    /// Removes the element at `index`, shifting all elements after it, and
    /// returns it.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is not less than the number of
    /// elements.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// #   use buckets::failure::Failure;
    /// let mut list: ArrayList<_> = (0..3).collect();
    ///
    /// assert_eq!(Ok(1), list.remove_at(1));
    /// assert_eq!([0, 2], list.as_slice());
    ///
    /// assert_eq!(Err(Failure::IndexOutOfRange), list.remove_at(2));
    /// ```
    pub fn remove_at(&mut self, index: usize) -> Result<T> {
        if index >= self.len() {
            return Err(Failure::IndexOutOfRange);
        }

        let removed = self.buffer.remove(index);
        self.stamp.bump();

        Ok(removed)
    }

    /// Removes the first element equal to `value`, returning whether there was
    /// one.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let mut list: ArrayList<_> = [1, 2, 1].into_iter().collect();
    ///
    /// assert!(list.remove(&1));
    /// assert_eq!([2, 1], list.as_slice());
    ///
    /// assert!(!list.remove(&3));
    /// ```
    pub fn remove(&mut self, value: &T) -> bool
    where
        T: PartialEq,
    {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes `count` elements, starting at `index`.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is greater than the number of
    /// elements, and `InvalidArgument` if fewer than `count` elements follow
    /// `index`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let mut list: ArrayList<_> = (0..6).collect();
    ///
    /// assert_eq!(Ok(()), list.remove_range(1, 3));
    /// assert_eq!([0, 4, 5], list.as_slice());
    /// ```
    pub fn remove_range(&mut self, index: usize, count: usize) -> Result<()> {
        let range = check_range(self.len(), index, count)?;

        if !range.is_empty() {
            self.buffer.drain(range);
            self.stamp.bump();
        }

        Ok(())
    }

    /// Clears the instance.
    ///
    /// The instance is then empty, although it retains its current capacity.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let mut list: ArrayList<_> = (0..6).collect();
    /// let capacity = list.capacity();
    ///
    /// list.clear();
    /// assert!(list.is_empty());
    /// assert_eq!(capacity, list.capacity());
    /// ```
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.stamp.bump();
    }

    /// Reverses the order of the elements.
    pub fn reverse(&mut self) {
        self.buffer.reverse();
        self.stamp.bump();
    }

    /// Reverses the order of the `count` elements starting at `index`.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is greater than the number of
    /// elements, and `InvalidArgument` if fewer than `count` elements follow
    /// `index`.
    pub fn reverse_range(&mut self, index: usize, count: usize) -> Result<()> {
        let range = check_range(self.len(), index, count)?;

        self.buffer[range].reverse();
        self.stamp.bump();

        Ok(())
    }

    /// Sorts the elements, in ascending order.
    ///
    /// The sort is stable.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let mut list: ArrayList<_> = [3, 1, 2].into_iter().collect();
    ///
    /// list.sort();
    /// assert_eq!([1, 2, 3], list.as_slice());
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        self.sort_by(Ord::cmp);
    }

    /// Sorts the elements, according to `compare`.
    ///
    /// The sort is stable.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let mut list: ArrayList<_> = [3, 1, 2].into_iter().collect();
    ///
    /// list.sort_by(|left, right| right.cmp(left));
    /// assert_eq!([3, 2, 1], list.as_slice());
    /// ```
    pub fn sort_by<F>(&mut self, compare: F)
    where
        F: FnMut(&T, &T) -> cmp::Ordering,
    {
        self.buffer.sort_by(compare);
        self.stamp.bump();
    }

    /// Sorts the `count` elements starting at `index`, according to `compare`.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is greater than the number of
    /// elements, and `InvalidArgument` if fewer than `count` elements follow
    /// `index`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let mut list: ArrayList<_> = [5, 3, 1, 2, 0].into_iter().collect();
    ///
    /// assert_eq!(Ok(()), list.sort_range_by(1, 3, Ord::cmp));
    /// assert_eq!([5, 1, 2, 3, 0], list.as_slice());
    /// ```
    pub fn sort_range_by<F>(&mut self, index: usize, count: usize, compare: F) -> Result<()>
    where
        F: FnMut(&T, &T) -> cmp::Ordering,
    {
        let range = check_range(self.len(), index, count)?;

        self.buffer[range].sort_by(compare);
        self.stamp.bump();

        Ok(())
    }

    /// Copies the elements into `destination`, starting at `index`.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is greater than the length of
    /// `destination`, and `InvalidArgument` if `destination` has not enough
    /// room past `index` for all the elements.
    pub fn copy_to(&self, destination: &mut [T], index: usize) -> Result<()>
    where
        T: Clone,
    {
        let range = check_range(destination.len(), index, self.len())?;

        destination[range].clone_from_slice(&self.buffer);

        Ok(())
    }

    /// Returns a copy of the elements.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.buffer.clone()
    }

    /// Returns the elements, as a slice.
    pub fn as_slice(&self) -> &[T] { &self.buffer }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> { self.buffer.iter() }

    /// Returns a cursor over the elements, positioned before the first.
    ///
    /// See `ArrayListCursor`.
    pub fn cursor(&self) -> ArrayListCursor { ArrayListCursor::new(self.stamp) }

    //  Returns the current modification stamp.
    pub(super) fn stamp(&self) -> Stamp { self.stamp }

    //  Creates an empty instance, with a buffer of `capacity`.
    fn with_buffer(capacity: usize) -> Self {
        Self { buffer: Vec::with_capacity(capacity), capacity, stamp: Stamp::new() }
    }

    //  Ensures there is room for one more element, growing if necessary.
    fn reserve_one(&mut self) -> Result<()> {
        if self.len() < self.capacity {
            return Ok(());
        }

        let capacity = capacity::grow(self.capacity, self.len() + 1)?;

        log_trace!(from = self.capacity, to = capacity, "growing ArrayList");

        self.resize_buffer(capacity);

        Ok(())
    }

    //  Resizes the buffer to hold exactly `capacity` elements.
    fn resize_buffer(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len());

        if capacity > self.buffer.capacity() {
            self.buffer.reserve_exact(capacity - self.len());
        } else {
            self.buffer.shrink_to(capacity);
        }

        self.capacity = capacity;
    }
}

//  Returns the range of `count` elements starting at `index`, within a
//  sequence of `len` elements.
//
//  #   Errors
//
//  Returns `IndexOutOfRange` if `index` is greater than `len`, and
//  `InvalidArgument` if fewer than `count` elements follow `index`.
pub(super) fn check_range(len: usize, index: usize, count: usize) -> Result<ops::Range<usize>> {
    if index > len {
        return Err(Failure::IndexOutOfRange);
    }

    if len - index < count {
        return Err(Failure::InvalidArgument);
    }

    Ok(index..index + count)
}

impl<T: Clone> Clone for ArrayList<T> {
    fn clone(&self) -> Self {
        Self { buffer: self.buffer.clone(), capacity: self.capacity, stamp: Stamp::new() }
    }
}

impl<T> Default for ArrayList<T> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug> fmt::Debug for ArrayList<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.buffer.iter()).finish()
    }
}

impl<T: PartialEq> PartialEq for ArrayList<T> {
    fn eq(&self, other: &Self) -> bool { self.buffer == other.buffer }
}

impl<T: Eq> Eq for ArrayList<T> {}

impl<T> ops::Index<usize> for ArrayList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        failure::or_panic(self.get(index).ok_or(Failure::IndexOutOfRange))
    }
}

impl<T> ops::IndexMut<usize> for ArrayList<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        failure::or_panic(self.get_mut(index).ok_or(Failure::IndexOutOfRange))
    }
}

impl<T> iter::Extend<T> for ArrayList<T> {
    fn extend<C>(&mut self, collection: C)
    where
        C: IntoIterator<Item = T>
    {
        for value in collection {
            self.add(value);
        }
    }
}

impl<T> iter::FromIterator<T> for ArrayList<T> {
    fn from_iter<C>(collection: C) -> Self
    where
        C: IntoIterator<Item = T>
    {
        let mut result = ArrayList::new();
        result.extend(collection);
        result
    }
}

impl<'a, T> iter::IntoIterator for &'a ArrayList<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> { self.iter() }
}

impl<T> iter::IntoIterator for ArrayList<T> {
    type Item = T;
    type IntoIter = vec::IntoIter<T>;

    fn into_iter(self) -> vec::IntoIter<T> { self.buffer.into_iter() }
}

//  mod tests
