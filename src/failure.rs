//! The Failure and Result types of this library.
//!
//! Any method which validates its arguments, or may need to grow a collection,
//! may fail. The cause of the error is then represented as a `Failure`.
//!
//! Methods which may fail for reasons other than a caller error come in two
//! versions:
//!
//! -   A faillible `try_xxx` version, which returns a `Result` with `Failure` as the error type.
//! -   A convenience `xxx` version, which invokes the `try_xxx` version and panics in case of error.
//!
//! Failures are local and synchronous: an operation which returns a `Failure`
//! has left its collection untouched.

use super::root::{error, fmt, result};

/// Universal Failure type of this library.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Failure {
    /// The combination of index and count does not describe a part of the collection.
    InvalidArgument,
    /// The index lies outside of the elements of the collection.
    IndexOutOfRange,
    /// The cursor is not positioned on an element.
    InvalidIteratorState,
    /// The capacity required exceeds the maximum capacity of the collection.
    CapacityExceeded,
    /// The capacity requested is zero.
    InvalidCapacity,
    /// The collection was modified while a cursor was walking over it.
    ConcurrentModification,
}

impl error::Error for Failure {}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Universal Result type of this library.
pub type Result<T> = result::Result<T, Failure>;

//  Unwraps the result, or panics with the failure.
//
//  Backs the panicking counterparts of the `try_xxx` methods.
pub(crate) fn or_panic<T>(result: Result<T>) -> T {
    match result {
        Ok(value) => value,
        Err(failure) => panic_from_failure(failure),
    }
}

#[cold]
#[inline(never)]
fn panic_from_failure(failure: Failure) -> ! {
    panic!("{}", failure);
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn failure_display() {
        assert_eq!("IndexOutOfRange", format!("{}", Failure::IndexOutOfRange));
        assert_eq!("ConcurrentModification", format!("{}", Failure::ConcurrentModification));
    }

    #[test]
    fn failure_is_error() {
        let error: &dyn error::Error = &Failure::InvalidArgument;

        assert_eq!("InvalidArgument", format!("{}", error));
        assert!(error.source().is_none());
    }

    #[test]
    fn or_panic_passes_value_through() {
        assert_eq!(3, or_panic(Ok(3)));
    }

    #[test]
    #[should_panic(expected = "CapacityExceeded")]
    fn or_panic_panics_with_failure() {
        or_panic::<()>(Err(Failure::CapacityExceeded));
    }
}
