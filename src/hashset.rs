//! #   The HashSet.
//!
//! The `HashSet` is a set of unique elements, where uniqueness is defined by
//! its `HashHooks`: an equality and a hash function.
//!
//! ##  Under the covers.
//!
//! Under the covers the `HashSet` is an array of slots, whose length is always
//! a prime number. Each element is placed in the slot indexed by its hash,
//! modulo the number of slots, and elements colliding into the same slot are
//! chained together in insertion order.
//!
//! The main consequences are:
//!
//! -   Once the load, the ratio of elements to slots, reaches 3/4, the next
//!     insertion first rehashes all elements into an array roughly twice as
//!     large.
//! -   The iteration order is the slot order, then the chain order: it is
//!     deterministic for a given sequence of operations, but otherwise
//!     meaningless.
//!
//! #   Example: basic
//!
//! General usage of `HashSet` involve adding elements, either using `add`, to
//! add one element at a time, or `extend`, to add multiple elements at once.
//!
//! The faillible equivalent exist too: `try_add` and `try_union_with` will
//! return a `Result` indicating whether the operation succeeded, and the cause
//! of its failure if it did not.
//!
//! ```
//! use buckets::hashset::HashSet;
//!
//! let mut set: HashSet<_> = HashSet::new();
//! assert!(set.add(1));
//! assert!(set.add(2));
//! assert!(!set.add(2));
//! assert!(set.add(3));
//!
//! assert_eq!(3, set.len());
//! assert!(set.contains(&2));
//!
//! let mut elements: Vec<_> = set.iter().copied().collect();
//! elements.sort();
//! assert_eq!(vec![1, 2, 3], elements);
//! ```
//!
//! #   Example: managing capacity
//!
//! The capacity, the number of slots, is always a prime number:
//!
//! ```
//! use buckets::failure::Failure;
//! use buckets::hashset::HashSet;
//!
//! //  The capacity requested is rounded-up to the closest prime.
//! let set: HashSet<i32> = HashSet::with_capacity(12);
//! assert_eq!(13, set.capacity());
//!
//! //  A capacity of zero is invalid.
//! assert_eq!(Some(Failure::InvalidCapacity), HashSet::<i32>::try_with_capacity(0).err());
//! ```
//!
//! #   Example: walking with a cursor
//!
//! Next to the borrowing `iter`, a `HashSetCursor` walks the set explicitly,
//! and detects modifications of the set between steps.
//!
//! ```
//! use buckets::failure::Failure;
//! use buckets::hashset::HashSet;
//!
//! let mut set: HashSet<_> = HashSet::new();
//! set.extend([1, 2, 3]);
//!
//! let mut cursor = set.cursor();
//! assert_eq!(Err(Failure::InvalidIteratorState), cursor.current(&set));
//!
//! assert_eq!(Ok(true), cursor.advance(&set));
//! assert!(cursor.current(&set).is_ok());
//!
//! set.add(4);
//! assert_eq!(Err(Failure::ConcurrentModification), cursor.advance(&set));
//! ```

pub mod iterator;

mod algebra;
mod hashset;

pub use super::hashcore::{DefaultHashHooks, FnHashHooks, HashHooks};
pub use super::hashcore::capacity::{DEFAULT_CAPACITY, MAX_PRIME_CAPACITY};
pub use self::hashset::HashSet;
pub use self::iterator::{HashSetCursor, IntoIter, Iter};

use super::failure;
use super::hashcore;
use super::root;
use super::stamp;
