#![cfg_attr(not(feature = "with-std"), no_std)]
//  Lints
#![allow(clippy::module_inception)]

//! #   The Buckets Library
//!
//! A small collection of single-threaded containers built from first principles.
//! -   The `HashSet`: a set of open-hashed chains over a prime-sized bucket array.
//! -   The `ArrayList`: a growable array with amortized doubling.
//!
//! Both collections expose explicit cursors, which fail fast with
//! `Failure::ConcurrentModification` when the collection they walk changes
//! under their feet.

extern crate alloc;

#[macro_use]
mod utils;

pub mod arraylist;
pub mod failure;
pub mod hashset;

mod hashcore;

use self::utils::growth;
use self::utils::root;
use self::utils::stamp;
