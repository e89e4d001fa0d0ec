//! Internal testing utilities

use core::ptr;
use crate::root::sync::atomic::{AtomicUsize, Ordering};

use crate::hashcore::HashHooks;

//  Hooks hashing integers to themselves, for predictable slot placement.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityHooks;

impl HashHooks<u64> for IdentityHooks {
    fn equals(&self, left: &u64, right: &u64) -> bool { left == right }

    fn hash(&self, value: &u64) -> u64 { *value }
}

impl HashHooks<i64> for IdentityHooks {
    fn equals(&self, left: &i64, right: &i64) -> bool { left == right }

    fn hash(&self, value: &i64) -> u64 { *value as u64 }
}

//  Hooks hashing every element to the same value, so that all elements collide.
#[derive(Clone, Copy, Debug, Default)]
pub struct CollidingHooks;

impl<T: PartialEq> HashHooks<T> for CollidingHooks {
    fn equals(&self, left: &T, right: &T) -> bool { left == right }

    fn hash(&self, _: &T) -> u64 { 0 }
}

//  Hooks comparing SpyElements by address, so that all instances are distinct.
#[derive(Clone, Copy, Debug, Default)]
pub struct SpyHooks;

impl<'a> HashHooks<SpyElement<'a>> for SpyHooks {
    fn equals(&self, left: &SpyElement<'a>, right: &SpyElement<'a>) -> bool {
        ptr::eq(left, right)
    }

    fn hash(&self, _: &SpyElement<'a>) -> u64 { 0 }
}

//  SpyCount
//
//  A counter of the number of instances of elements.
pub struct SpyCount(AtomicUsize);

impl SpyCount {
    pub fn zero() -> Self { SpyCount(AtomicUsize::new(0)) }

    pub fn get(&self) -> usize { self.0.load(Ordering::Relaxed) }

    fn decrement(&self) { self.0.fetch_sub(1, Ordering::Relaxed); }

    fn increment(&self) { self.0.fetch_add(1, Ordering::Relaxed); }
}

//  Spy Element
//
//  An element tracking the number of instances, helpful to ensure proper drop.
pub struct SpyElement<'a> {
    count: &'a SpyCount,
}

impl<'a> SpyElement<'a> {
    pub fn new(count: &'a SpyCount) -> Self {
        count.increment();
        SpyElement { count }
    }
}

impl<'a> Drop for SpyElement<'a> {
    fn drop(&mut self) {
        self.count.decrement();
    }
}
