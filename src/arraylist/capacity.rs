//! Capacity policy of the ArrayList.

use super::failure::{Failure, Result};
use super::growth;

/// The capacity of a default-constructed `ArrayList`, and of the buffer of an
/// empty `ArrayList` on its first insertion.
pub const DEFAULT_ARRAY_CAPACITY: usize = 4;

/// The maximum capacity of an `ArrayList`.
pub const MAX_ARRAY_LENGTH: usize = 1_000_000;

//  Checks that `capacity` does not exceed `MAX_ARRAY_LENGTH`.
pub fn check(capacity: usize) -> Result<usize> {
    if capacity > MAX_ARRAY_LENGTH {
        Err(Failure::CapacityExceeded)
    } else {
        Ok(capacity)
    }
}

//  Returns the capacity to grow to from `current`, so as to hold at least
//  `required` elements.
pub fn grow(current: usize, required: usize) -> Result<usize> {
    if current == 0 {
        return check(DEFAULT_ARRAY_CAPACITY.max(required));
    }

    growth::grown(current, required, MAX_ARRAY_LENGTH)
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn check_bounds() {
    assert_eq!(Ok(0), check(0));
    assert_eq!(Ok(MAX_ARRAY_LENGTH), check(MAX_ARRAY_LENGTH));
    assert_eq!(Err(Failure::CapacityExceeded), check(MAX_ARRAY_LENGTH + 1));
}

#[test]
fn grow_from_empty() {
    assert_eq!(Ok(4), grow(0, 1));
    assert_eq!(Ok(7), grow(0, 7));
}

#[test]
fn grow_doubles() {
    assert_eq!(Ok(8), grow(4, 5));
    assert_eq!(Ok(2), grow(1, 2));
    assert_eq!(Ok(20), grow(4, 20));
}

#[test]
fn grow_caps_at_maximum() {
    assert_eq!(Ok(MAX_ARRAY_LENGTH), grow(600_000, 600_001));
    assert_eq!(Err(Failure::CapacityExceeded), grow(MAX_ARRAY_LENGTH, MAX_ARRAY_LENGTH + 1));
}

}
