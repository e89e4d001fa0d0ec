//! The HashSet capacity.
//!
//! The capacity of the bucket array is always a prime number, to spread the
//! elements evenly across slots under modulo hashing.

use super::failure::{Failure, Result};
use super::growth;

/// The capacity requested by default, rounded up to a prime internally.
pub const DEFAULT_CAPACITY: usize = 12;

/// The largest supported number of buckets.
///
/// This is itself a prime, so that any request up to it is satisfiable.
pub const MAX_PRIME_CAPACITY: usize = 0x7FEF_FFFD;

//  Load factor of 3/4, expressed as a ratio to avoid floating point.
const LOAD_NUMERATOR: u64 = 3;
const LOAD_DENOMINATOR: u64 = 4;

//  Returns the smallest prime greater than or equal to `requested`.
//
//  #   Errors
//
//  Returns `CapacityExceeded` if `requested` is greater than `MAX_PRIME_CAPACITY`.
pub fn next_prime(requested: usize) -> Result<usize> {
    if requested > MAX_PRIME_CAPACITY {
        return Err(Failure::CapacityExceeded);
    }

    if requested <= 2 {
        return Ok(2);
    }

    let mut candidate = requested | 1;

    while !is_prime(candidate) {
        candidate += 2;
    }

    Ok(candidate)
}

//  Returns the capacity to grow to from `current`.
//
//  #   Errors
//
//  Returns `CapacityExceeded` if `current` is already the maximum capacity.
pub fn grow(current: usize) -> Result<usize> {
    let target = growth::grown(current, current + 1, MAX_PRIME_CAPACITY)?;
    next_prime(target)
}

//  Returns whether inserting one more element into a table of `capacity` buckets
//  already holding `size` elements requires growing first.
pub fn needs_resize(size: usize, capacity: usize) -> bool {
    (size as u64) * LOAD_DENOMINATOR >= (capacity as u64) * LOAD_NUMERATOR
}

//  Returns whether `n` is prime, by trial division.
fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }

    if n < 4 {
        return true;
    }

    if n % 2 == 0 {
        return false;
    }

    let mut divisor = 3;

    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }

    true
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn is_prime_small() {
    let primes: Vec<_> = (0..30).filter(|n| is_prime(*n)).collect();

    assert_eq!(vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29], primes);
}

#[test]
fn next_prime_rounds_up() {
    assert_eq!(Ok(2), next_prime(0));
    assert_eq!(Ok(2), next_prime(1));
    assert_eq!(Ok(2), next_prime(2));
    assert_eq!(Ok(3), next_prime(3));
    assert_eq!(Ok(5), next_prime(4));
    assert_eq!(Ok(13), next_prime(DEFAULT_CAPACITY));
    assert_eq!(Ok(29), next_prime(26));
    assert_eq!(Ok(97), next_prime(90));
}

#[test]
fn next_prime_is_identity_on_primes() {
    for prime in [2, 3, 5, 7, 101, 7919] {
        assert_eq!(Ok(prime), next_prime(prime));
    }
}

#[test]
fn next_prime_maximum() {
    assert_eq!(Ok(MAX_PRIME_CAPACITY), next_prime(MAX_PRIME_CAPACITY));
    assert_eq!(Ok(MAX_PRIME_CAPACITY), next_prime(MAX_PRIME_CAPACITY - 1));
    assert_eq!(Err(Failure::CapacityExceeded), next_prime(MAX_PRIME_CAPACITY + 1));
    assert_eq!(Err(Failure::CapacityExceeded), next_prime(usize::MAX));
}

#[test]
fn grow_doubles_to_prime() {
    assert_eq!(Ok(29), grow(13));
    assert_eq!(Ok(59), grow(29));
    assert_eq!(Ok(5), grow(2));
}

#[test]
fn grow_caps_at_maximum() {
    assert_eq!(Ok(MAX_PRIME_CAPACITY), grow(MAX_PRIME_CAPACITY - 1));
    assert_eq!(Err(Failure::CapacityExceeded), grow(MAX_PRIME_CAPACITY));
}

#[test]
fn needs_resize_at_three_quarters() {
    //  13 * 0.75 = 9.75
    assert!(!needs_resize(9, 13));
    assert!(needs_resize(10, 13));

    //  4 * 0.75 = 3
    assert!(!needs_resize(2, 4));
    assert!(needs_resize(3, 4));
}

}
