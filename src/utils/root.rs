//! Re-export core/std facilities under a unified name.

#[cfg(not(feature = "with-std"))]
pub use core::{borrow, cmp, error, fmt, hash, iter, mem, ops, result, slice, sync};

#[cfg(feature = "with-std")]
pub use std::{borrow, cmp, error, fmt, hash, iter, mem, ops, result, slice, sync};

pub use alloc::{boxed, vec};
