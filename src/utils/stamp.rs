//! Modification stamps.
//!
//! Each collection carries a `Stamp`, bumped on every structural modification.
//! A cursor records the stamp of its collection when created, and compares it
//! on each access, detecting modifications in between.
//!
//! A stamp also carries the identity of the collection it was created for, so
//! that a cursor handed another collection fails rather than walking it.

use super::root::sync::atomic::{AtomicUsize, Ordering};

use crate::failure::{Failure, Result};

//  The next collection identity to hand out.
static NEXT_ORIGIN: AtomicUsize = AtomicUsize::new(0);

//  Stamp.
//
//  The identity of a collection, and a wrapping counter of its structural
//  modifications.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Stamp {
    origin: usize,
    count: u64,
}

impl Stamp {
    //  Creates a stamp for a new collection, distinct from any other.
    pub fn new() -> Self {
        let origin = NEXT_ORIGIN.fetch_add(1, Ordering::Relaxed);

        Self { origin, count: 0 }
    }

    //  Records a structural modification.
    pub fn bump(&mut self) { self.count = self.count.wrapping_add(1); }

    //  Checks that `current` belongs to the same collection as `self`, and that
    //  no modification happened since `self` was recorded.
    pub fn check(self, current: Stamp) -> Result<()> {
        if self == current {
            Ok(())
        } else {
            Err(Failure::ConcurrentModification)
        }
    }
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn stamp_check() {
    let mut stamp = Stamp::new();
    let recorded = stamp;

    assert_eq!(Ok(()), recorded.check(stamp));

    stamp.bump();

    assert_eq!(Err(Failure::ConcurrentModification), recorded.check(stamp));
}

#[test]
fn stamp_check_other_origin() {
    let first = Stamp::new();
    let second = Stamp::new();

    assert_eq!(Err(Failure::ConcurrentModification), first.check(second));
    assert_eq!(Err(Failure::ConcurrentModification), second.check(first));
}

}   //  mod tests
