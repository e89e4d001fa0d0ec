//! #   The ArrayList.
//!
//! The `ArrayList` is a growable array of elements, addressed by index.
//!
//! ##  Under the covers.
//!
//! Under the covers the `ArrayList` is a contiguous buffer, of which only the
//! first `len` elements are live. When the buffer is full, the next insertion
//! first grows it:
//!
//! -   An empty buffer grows to `DEFAULT_ARRAY_CAPACITY`.
//! -   A non-empty buffer doubles, up to `MAX_ARRAY_LENGTH`.
//!
//! Removed elements are dropped immediately, rather than lingering in the
//! vacated part of the buffer.
//!
//! #   Example: basic
//!
//! ```
//! use buckets::arraylist::ArrayList;
//!
//! let mut list = ArrayList::new();
//! list.add(1);
//! list.add(2);
//! list.add(4);
//! list.add(5);
//!
//! list.insert(2, 3).unwrap();
//! assert_eq!([1, 2, 3, 4, 5], list.as_slice());
//!
//! list.reverse();
//! assert_eq!([5, 4, 3, 2, 1], list.as_slice());
//! ```
//!
//! #   Example: ranges
//!
//! Operations working on a part of the list take an `index` and a `count`,
//! and validate them against the length of the list:
//!
//! ```
//! use buckets::arraylist::ArrayList;
//! use buckets::failure::Failure;
//!
//! let mut list: ArrayList<_> = (0..6).collect();
//!
//! assert_eq!(Ok(()), list.reverse_range(1, 3));
//! assert_eq!([0, 3, 2, 1, 4, 5], list.as_slice());
//!
//! //  The index lies beyond the end of the list.
//! assert_eq!(Err(Failure::IndexOutOfRange), list.reverse_range(7, 0));
//!
//! //  The range extends beyond the end of the list.
//! assert_eq!(Err(Failure::InvalidArgument), list.reverse_range(4, 3));
//! ```

mod arraylist;
mod capacity;
mod cursor;
mod search;

pub use self::arraylist::ArrayList;
pub use self::capacity::{DEFAULT_ARRAY_CAPACITY, MAX_ARRAY_LENGTH};
pub use self::cursor::ArrayListCursor;

use super::failure;
use super::growth;
use super::root;
use super::stamp;
