//! Iterators over the HashSet.
//!
//! The `HashSetCursor` is an explicit cursor: it does not borrow the set, and
//! instead is handed the set on each call. This lets the set be modified while
//! a cursor exists, in which case the cursor reports the modification on its
//! next access rather than yielding stale elements.
//!
//! `Iter` and `IntoIter` are regular Rust iterators, walking in the same order.

use super::root::iter;

use super::HashSet;

use super::failure::{Failure, Result};
use super::hashcore::buckets::{BucketArray, Elements, Position, Values};
use super::stamp::Stamp;

//  The positional walk of the cursor over the bucket array.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    //  Before the first element.
    Fresh,
    //  On the element at the given position.
    Positioned(Position),
    //  Past the last element.
    Exhausted,
}

impl State {
    //  Moves to the next element of `buckets`, returning whether there is one.
    fn step<T>(&mut self, buckets: &BucketArray<T>) -> bool {
        let next = match *self {
            State::Fresh => buckets.next_position(None),
            State::Positioned(position) => buckets.next_position(Some(position)),
            State::Exhausted => None,
        };

        *self = next.map_or(State::Exhausted, State::Positioned);

        next.is_some()
    }
}

/// A cursor over the elements of a `HashSet`.
///
/// The cursor starts before the first element. Each call to `advance` moves it
/// to the next element, in slot order then chain order, until it is exhausted.
///
/// The cursor records the modification stamp of the set it was created from;
/// any later addition, removal, or clearing of the set is reported as a
/// `ConcurrentModification` failure by `advance` and `current`. So is handing
/// the cursor any other set, including a clone of the original.
///
/// #   Example
///
/// ```
/// #   use buckets::failure::Failure;
/// #   use buckets::hashset::HashSet;
/// let mut set: HashSet<_> = HashSet::new();
/// set.extend([1, 2]);
///
/// let mut cursor = set.cursor();
/// let mut seen = Vec::new();
///
/// while cursor.advance(&set).unwrap() {
///     seen.push(*cursor.current(&set).unwrap());
/// }
///
/// seen.sort();
/// assert_eq!(vec![1, 2], seen);
/// assert_eq!(Err(Failure::InvalidIteratorState), cursor.current(&set));
///
/// //  Walk again.
/// cursor.reset();
/// assert_eq!(Ok(true), cursor.advance(&set));
/// ```
#[derive(Clone, Debug)]
pub struct HashSetCursor {
    state: State,
    stamp: Stamp,
}

impl HashSetCursor {
    //  Creates a cursor for a set whose current stamp is `stamp`.
    pub(super) fn new(stamp: Stamp) -> Self {
        Self { state: State::Fresh, stamp }
    }

    /// Moves to the next element of `set`.
    ///
    /// Returns `true` if the cursor is now positioned on an element, and
    /// `false` if there is no further element. Once exhausted, the cursor
    /// remains exhausted until `reset`.
    ///
    /// #   Errors
    ///
    /// Returns `ConcurrentModification` if `set` was modified since the cursor
    /// was created, or if `set` is not the set the cursor was created from.
    pub fn advance<T, H>(&mut self, set: &HashSet<T, H>) -> Result<bool> {
        self.stamp.check(set.stamp())?;

        Ok(self.state.step(set.buckets()))
    }

    /// Returns the element the cursor is positioned on.
    ///
    /// #   Errors
    ///
    /// Returns `ConcurrentModification` if `set` was modified since the cursor
    /// was created, or is not the set the cursor was created from, and
    /// `InvalidIteratorState` if the cursor is not positioned
    /// on an element, either because `advance` was not called yet, or because
    /// the cursor is exhausted.
    pub fn current<'a, T, H>(&self, set: &'a HashSet<T, H>) -> Result<&'a T> {
        self.stamp.check(set.stamp())?;

        match self.state {
            State::Positioned(position) => set.buckets().get(position).ok_or(Failure::InvalidIteratorState),
            State::Fresh | State::Exhausted => Err(Failure::InvalidIteratorState),
        }
    }

    /// Moves the cursor back before the first element.
    ///
    /// The recorded modification stamp is kept: a cursor over a set modified
    /// since its creation stays invalid, and a fresh cursor is required.
    pub fn reset(&mut self) { self.state = State::Fresh; }

    /// Returns whether the cursor walked past the last element.
    pub fn is_exhausted(&self) -> bool { self.state == State::Exhausted }
}

/// A borrowing iterator over the elements of a `HashSet`.
///
/// Unlike the cursor, it holds on to the chain it is walking, and visits each
/// element in constant time.
pub struct Iter<'a, T> {
    elements: Elements<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(super) fn new(buckets: &'a BucketArray<T>, size: usize) -> Self {
        Self { elements: buckets.iter(), remaining: size }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self { elements: self.elements.clone(), remaining: self.remaining }
    }
}

impl<'a, T> iter::Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let value = self.elements.next()?;
        self.remaining = self.remaining.saturating_sub(1);

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, T> iter::ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> iter::FusedIterator for Iter<'a, T> {}

/// An owning iterator over the elements of a `HashSet`.
pub struct IntoIter<T> {
    values: Values<T>,
    remaining: usize,
}

impl<T> IntoIter<T> {
    pub(super) fn new(buckets: BucketArray<T>, size: usize) -> Self {
        Self { values: buckets.into_iter(), remaining: size }
    }
}

impl<T> iter::Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.values.next()?;
        self.remaining -= 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<T> iter::ExactSizeIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {

use super::*;

use crate::utils::tester::{CollidingHooks, IdentityHooks};

fn walk<T: Clone, H>(cursor: &mut HashSetCursor, set: &HashSet<T, H>) -> Result<Vec<T>> {
    let mut result = Vec::new();

    while cursor.advance(set)? {
        result.push(cursor.current(set)?.clone());
    }

    Ok(result)
}

#[test]
fn cursor_empty() {
    let set: HashSet<u64, IdentityHooks> = HashSet::with_hooks(IdentityHooks);
    let mut cursor = set.cursor();

    assert_eq!(Ok(false), cursor.advance(&set));
    assert!(cursor.is_exhausted());
    assert_eq!(Err(Failure::InvalidIteratorState), cursor.current(&set));
}

#[test]
fn cursor_current_before_advance() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.add(1u64);

    let cursor = set.cursor();

    assert_eq!(Err(Failure::InvalidIteratorState), cursor.current(&set));
}

#[test]
fn cursor_slot_then_chain_order() {
    let mut set = HashSet::with_capacity_and_hooks(7, IdentityHooks);
    set.extend([12u64, 3, 5, 10, 17]);

    let mut cursor = set.cursor();

    assert_eq!(Ok(vec![3, 10, 17, 12, 5]), walk(&mut cursor, &set));
}

#[test]
fn cursor_stays_exhausted() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.add(1u64);

    let mut cursor = set.cursor();

    assert_eq!(Ok(true), cursor.advance(&set));
    assert_eq!(Ok(&1), cursor.current(&set));
    assert_eq!(Ok(false), cursor.advance(&set));
    assert_eq!(Ok(false), cursor.advance(&set));
    assert_eq!(Err(Failure::InvalidIteratorState), cursor.current(&set));
}

#[test]
fn cursor_reset_rewalks() {
    let mut set = HashSet::with_hooks(CollidingHooks);
    set.extend([3, 1, 2]);

    let mut cursor = set.cursor();

    assert_eq!(Ok(vec![3, 1, 2]), walk(&mut cursor, &set));

    cursor.reset();
    assert!(!cursor.is_exhausted());
    assert_eq!(Err(Failure::InvalidIteratorState), cursor.current(&set));

    assert_eq!(Ok(vec![3, 1, 2]), walk(&mut cursor, &set));
}

#[test]
fn cursor_detects_modifications() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.extend([1u64, 2]);

    let mut cursor = set.cursor();
    assert_eq!(Ok(true), cursor.advance(&set));

    set.remove(&2);

    assert_eq!(Err(Failure::ConcurrentModification), cursor.current(&set));
    assert_eq!(Err(Failure::ConcurrentModification), cursor.advance(&set));

    cursor.reset();
    assert_eq!(Err(Failure::ConcurrentModification), cursor.advance(&set));

    let mut cursor = set.cursor();
    assert_eq!(Ok(vec![1]), walk(&mut cursor, &set));
}

#[test]
fn cursor_ignores_failed_modifications() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.extend([1u64, 2]);

    let mut cursor = set.cursor();
    assert_eq!(Ok(true), cursor.advance(&set));

    assert!(!set.add(1));
    assert!(!set.remove(&3));

    assert_eq!(Ok(true), cursor.advance(&set));
    assert_eq!(Ok(&2), cursor.current(&set));
}

#[test]
fn cursor_rejects_other_set() {
    let mut first = HashSet::with_hooks(IdentityHooks);
    first.extend([1u64, 2]);

    let mut second = HashSet::with_hooks(IdentityHooks);
    second.extend([100u64, 200]);

    let mut cursor = first.cursor();

    assert_eq!(Err(Failure::ConcurrentModification), cursor.advance(&second));
    assert_eq!(Err(Failure::ConcurrentModification), cursor.current(&second));

    assert_eq!(Ok(true), cursor.advance(&first));
    assert_eq!(Err(Failure::ConcurrentModification), cursor.current(&second));
}

#[test]
fn cursor_rejects_clone() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.extend([1u64, 2]);

    let copy = set.clone();
    let mut cursor = set.cursor();

    assert_eq!(Err(Failure::ConcurrentModification), cursor.advance(&copy));
    assert_eq!(Ok(vec![1, 2]), walk(&mut cursor, &set));

    let mut cursor = copy.cursor();
    assert_eq!(Err(Failure::ConcurrentModification), cursor.advance(&set));
    assert_eq!(Ok(vec![1, 2]), walk(&mut cursor, &copy));
}

#[test]
fn iter_long_chain() {
    let mut set = HashSet::with_hooks(CollidingHooks);
    set.extend(0..2_000);

    let mut iter = set.iter();
    assert_eq!(Some(&0), iter.next());

    let rest = iter.clone();
    let expected: Vec<_> = (1..2_000).collect();

    assert_eq!(expected, rest.copied().collect::<Vec<_>>());
    assert_eq!(1_999, iter.len());
    assert_eq!(expected, iter.copied().collect::<Vec<_>>());
}

#[test]
fn iter_matches_cursor() {
    let mut set: HashSet<_> = HashSet::new();
    set.extend(0..40);

    let mut cursor = set.cursor();
    let walked = walk(&mut cursor, &set);
    let iterated: Vec<_> = set.iter().copied().collect();

    assert_eq!(Ok(iterated), walked);
}

#[test]
fn iter_exact_size() {
    let mut set: HashSet<_> = HashSet::new();
    set.extend(0..5);

    let mut iter = set.iter();
    assert_eq!(5, iter.len());

    iter.next();
    iter.next();
    assert_eq!(3, iter.len());

    let rest: Vec<_> = iter.clone().collect();
    assert_eq!(3, rest.len());
    assert_eq!(3, iter.count());
}

#[test]
fn iter_fused() {
    let mut set = HashSet::with_hooks(IdentityHooks);
    set.add(4u64);

    let mut iter = set.iter();

    assert_eq!(Some(&4), iter.next());
    assert_eq!(None, iter.next());
    assert_eq!(None, iter.next());
}

#[test]
fn into_iter_exact_size() {
    let mut set = HashSet::with_capacity_and_hooks(5, IdentityHooks);
    set.extend([4u64, 9, 0]);

    let mut iter = set.into_iter();
    assert_eq!(3, iter.len());

    assert_eq!(Some(0), iter.next());
    assert_eq!(2, iter.len());
    assert_eq!(vec![4, 9], iter.collect::<Vec<_>>());
}

}   //  mod tests
