//! Internal definition of the HashSet buckets.
//!
//! The bucket array is a prime-sized array of slots, each of which is either
//! empty or owns a chain of the elements whose hash lands in this slot.

pub mod buckets;
pub mod capacity;
pub mod chain;

mod hooks;

pub use self::hooks::{DefaultHashHooks, FnHashHooks, HashHooks};

use super::failure;
use super::growth;
use super::root;
