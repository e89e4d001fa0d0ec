//! Growth policy shared by the collections.
//!
//! Both the `ArrayList` buffer and the `HashSet` bucket array grow
//! geometrically, by `GROWTH_FACTOR`, up to a collection-specific maximum.

use crate::failure::{Failure, Result};

/// The factor by which a full collection grows.
pub const GROWTH_FACTOR: usize = 2;

//  Returns the capacity to grow to from `current`.
//
//  The result is `current * GROWTH_FACTOR`, capped at `maximum`, and at least
//  `minimum`.
//
//  #   Errors
//
//  Returns `CapacityExceeded` if `minimum` is greater than `maximum`.
pub fn grown(current: usize, minimum: usize, maximum: usize) -> Result<usize> {
    if minimum > maximum {
        return Err(Failure::CapacityExceeded);
    }

    let scaled = current.saturating_mul(GROWTH_FACTOR);

    Ok(scaled.min(maximum).max(minimum))
}
