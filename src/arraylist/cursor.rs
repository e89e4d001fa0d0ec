//! A cursor over the ArrayList.

use super::ArrayList;

use super::failure::{Failure, Result};
use super::stamp::Stamp;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Fresh,
    Positioned(usize),
    Exhausted,
}

/// A cursor over the elements of an `ArrayList`.
///
/// The cursor starts before the first element, and each call to `advance`
/// moves it to the next element, in index order.
///
/// Like the `HashSetCursor`, it records the modification stamp of the list it
/// was created from, and fails with `ConcurrentModification` once the list is
/// structurally modified, or when handed another list.
///
/// #   Example
///
/// ```
/// #   use buckets::arraylist::ArrayList;
/// #   use buckets::failure::Failure;
/// let mut list: ArrayList<_> = (0..2).collect();
/// let mut cursor = list.cursor();
///
/// assert_eq!(Ok(true), cursor.advance(&list));
/// assert_eq!(Ok(&0), cursor.current(&list));
///
/// list.add(2);
/// assert_eq!(Err(Failure::ConcurrentModification), cursor.advance(&list));
/// ```
#[derive(Clone, Debug)]
pub struct ArrayListCursor {
    state: State,
    stamp: Stamp,
}

impl ArrayListCursor {
    pub(super) fn new(stamp: Stamp) -> Self {
        Self { state: State::Fresh, stamp }
    }

    /// Moves to the next element of `list`.
    ///
    /// Returns `true` if the cursor is now positioned on an element, and
    /// `false` if there is no further element.
    ///
    /// #   Errors
    ///
    /// Returns `ConcurrentModification` if `list` was modified since the
    /// cursor was created, or is not the list it was created from.
    pub fn advance<T>(&mut self, list: &ArrayList<T>) -> Result<bool> {
        self.stamp.check(list.stamp())?;

        let next = match self.state {
            State::Fresh => 0,
            State::Positioned(index) => index + 1,
            State::Exhausted => return Ok(false),
        };

        self.state = if next < list.len() { State::Positioned(next) } else { State::Exhausted };

        Ok(self.state != State::Exhausted)
    }

    /// Returns the element the cursor is positioned on.
    ///
    /// #   Errors
    ///
    /// Returns `ConcurrentModification` if `list` was modified since the
    /// cursor was created, and `InvalidIteratorState` if the cursor is not
    /// positioned on an element.
    pub fn current<'a, T>(&self, list: &'a ArrayList<T>) -> Result<&'a T> {
        self.stamp.check(list.stamp())?;

        match self.state {
            State::Positioned(index) => list.get(index).ok_or(Failure::InvalidIteratorState),
            State::Fresh | State::Exhausted => Err(Failure::InvalidIteratorState),
        }
    }

    /// Moves the cursor back before the first element.
    pub fn reset(&mut self) { self.state = State::Fresh; }

    /// Returns whether the cursor walked past the last element.
    pub fn is_exhausted(&self) -> bool { self.state == State::Exhausted }
}

//  mod tests
