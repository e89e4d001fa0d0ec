//! Searching the ArrayList.
//!
//! Lookups by value (`index_of`, `binary_search`, ...) and by predicate
//! (`find`, `exists`, ...). The `_range` variants restrict the search to the
//! `count` elements starting at `index`, and report indexes relative to the
//! whole list.

use super::root::{cmp, result};

use super::ArrayList;

use super::arraylist::check_range;
use super::failure::Result;

impl<T> ArrayList<T> {
    /// Returns whether an element is equal to `value`.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let list: ArrayList<_> = (0..3).collect();
    ///
    /// assert!(list.contains(&2));
    /// assert!(!list.contains(&3));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(value)
    }

    /// Returns the index of the first element equal to `value`, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let list: ArrayList<_> = [1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(Some(0), list.index_of(&1));
    /// assert_eq!(None, list.index_of(&3));
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().position(|e| e == value)
    }

    /// Returns the index of the first element equal to `value`, amongst the
    /// `count` elements starting at `index`.
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
    /// let list: ArrayList<_> = [1, 2, 1, 2].into_iter().collect();
    ///
    /// assert_eq!(Ok(Some(2)), list.index_of_range(&1, 1, 3));
    /// assert_eq!(Ok(None), list.index_of_range(&1, 1, 1));
    /// ```
    pub fn index_of_range(&self, value: &T, index: usize, count: usize) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        self.find_index_range(index, count, |e| e == value)
    }

    /// Returns the index of the last element equal to `value`, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let list: ArrayList<_> = [1, 2, 1].into_iter().collect();
    ///
    /// assert_eq!(Some(2), list.last_index_of(&1));
    /// assert_eq!(None, list.last_index_of(&3));
    /// ```
    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        self.as_slice().iter().rposition(|e| e == value)
    }

    /// Returns the index of the last element equal to `value`, amongst the
    /// `count` elements starting at `index`.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is greater than the number of
    /// elements, and `InvalidArgument` if fewer than `count` elements follow
    /// `index`.
    pub fn last_index_of_range(&self, value: &T, index: usize, count: usize) -> Result<Option<usize>>
    where
        T: PartialEq,
    {
        let range = check_range(self.len(), index, count)?;

        let found = self.as_slice()[range].iter().rposition(|e| e == value);

        Ok(found.map(|position| index + position))
    }

    /// Searches the sorted list for `value`.
    ///
    /// Returns `Ok` with the index of a matching element, or `Err` with the
    /// index at which `value` could be inserted while keeping the list sorted.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let list: ArrayList<_> = [1, 3, 5].into_iter().collect();
    ///
    /// assert_eq!(Ok(1), list.binary_search(&3));
    /// assert_eq!(Err(2), list.binary_search(&4));
    /// ```
    pub fn binary_search(&self, value: &T) -> result::Result<usize, usize>
    where
        T: Ord,
    {
        self.binary_search_by(|e| e.cmp(value))
    }

    /// Searches the sorted list with `compare`, which returns the ordering of
    /// the element passed as argument relative to the target.
    pub fn binary_search_by<F>(&self, compare: F) -> result::Result<usize, usize>
    where
        F: FnMut(&T) -> cmp::Ordering,
    {
        self.as_slice().binary_search_by(compare)
    }

    /// Searches the `count` sorted elements starting at `index` with `compare`.
    ///
    /// The indexes returned are relative to the whole list.
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
    /// let list: ArrayList<_> = [9, 1, 3, 5, 0].into_iter().collect();
    ///
    /// assert_eq!(Ok(Ok(3)), list.binary_search_range_by(1, 3, |e| e.cmp(&5)));
    /// assert_eq!(Ok(Err(1)), list.binary_search_range_by(1, 3, |e| e.cmp(&0)));
    /// ```
    pub fn binary_search_range_by<F>(
        &self,
        index: usize,
        count: usize,
        compare: F,
    )
        -> Result<result::Result<usize, usize>>
    where
        F: FnMut(&T) -> cmp::Ordering,
    {
        let range = check_range(self.len(), index, count)?;

        let found = self.as_slice()[range].binary_search_by(compare);

        Ok(found.map(|position| index + position).map_err(|position| index + position))
    }

    /// Returns the first element satisfying `matches`, if any.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let list: ArrayList<_> = (1..10).collect();
    ///
    /// assert_eq!(Some(&4), list.find(|e| e % 4 == 0));
    /// assert_eq!(None, list.find(|e| *e > 10));
    /// ```
    pub fn find<F>(&self, mut matches: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|e| matches(e))
    }

    /// Returns the index of the first element satisfying `matches`, if any.
    pub fn find_index<F>(&self, matches: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(matches)
    }

    /// Returns the index of the first element satisfying `matches`, amongst
    /// the `count` elements starting at `index`.
    ///
    /// #   Errors
    ///
    /// Returns `IndexOutOfRange` if `index` is greater than the number of
    /// elements, and `InvalidArgument` if fewer than `count` elements follow
    /// `index`.
    pub fn find_index_range<F>(&self, index: usize, count: usize, matches: F) -> Result<Option<usize>>
    where
        F: FnMut(&T) -> bool,
    {
        let range = check_range(self.len(), index, count)?;

        let found = self.as_slice()[range].iter().position(matches);

        Ok(found.map(|position| index + position))
    }

    /// Returns a list of clones of all elements satisfying `matches`, in order.
    ///
    /// #   Example
    ///
    /// ```
    /// #   use buckets::arraylist::ArrayList;
    /// let list: ArrayList<_> = (1..10).collect();
    /// let even = list.find_all(|e| e % 2 == 0);
    ///
    /// assert_eq!([2, 4, 6, 8], even.as_slice());
    /// ```
    pub fn find_all<F>(&self, mut matches: F) -> ArrayList<T>
    where
        T: Clone,
        F: FnMut(&T) -> bool,
    {
        self.iter().filter(|e| matches(e)).cloned().collect()
    }

    /// Returns whether any element satisfies `matches`.
    pub fn exists<F>(&self, matches: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(matches)
    }

    /// Invokes `action` on each element, in order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(action);
    }
}

//  mod tests
