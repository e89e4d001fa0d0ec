//! The bucket array underlying the HashSet.
//!
//! Each slot of the array is either empty, or owns the chain of elements whose
//! hash maps to the slot. Empty chains are released, so that an occupied slot
//! always holds at least one element.

use super::root::{fmt, iter, slice};
use super::root::boxed::Box;
use super::root::vec::{self, Vec};

use super::chain::{Chain, ChainIntoIter, ChainIter};
use super::hooks::HashHooks;

//  Masks off the sign bit, so that hashes behave as unsigned 31-bit integers.
const HASH_MASK: u64 = 0x7fff_ffff;

//  The location of an element: its slot, and its index within the chain.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq)]
pub struct Position {
    pub slot: usize,
    pub index: usize,
}

//  The storage.
pub struct BucketArray<T> {
    slots: Box<[Option<Chain<T>>]>,
}

impl<T> BucketArray<T> {
    //  Creates an instance with `capacity` empty slots.
    //
    //  `capacity` is expected to be a prime produced by the capacity module.
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);

        let slots: Vec<_> = iter::repeat_with(|| None).take(capacity).collect();
        Self { slots: slots.into_boxed_slice() }
    }

    //  Returns the number of slots.
    pub fn capacity(&self) -> usize { self.slots.len() }

    //  Returns the slot of an element of hash `hash`.
    pub fn slot_of(&self, hash: u64) -> usize {
        ((hash & HASH_MASK) % self.slots.len() as u64) as usize
    }

    //  Returns the chain of `slot`, if occupied.
    pub fn chain(&self, slot: usize) -> Option<&Chain<T>> {
        self.slots.get(slot)?.as_ref()
    }

    //  Returns the chain of `slot`, creating it if necessary.
    //
    //  #   Panics
    //
    //  Panics if `slot` is out of bounds.
    pub fn chain_or_create(&mut self, slot: usize) -> &mut Chain<T> {
        self.slots[slot].get_or_insert_with(Chain::new)
    }

    //  Returns whether any element of `slot` satisfies `matches`.
    pub fn contains<F>(&self, slot: usize, matches: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.chain(slot).map_or(false, |chain| chain.contains(matches))
    }

    //  Returns the first element of `slot` satisfying `matches`, if any.
    pub fn find<F>(&self, slot: usize, matches: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.chain(slot)?.find(matches)
    }

    //  Removes the first element of `slot` satisfying `matches`, and returns it.
    //
    //  The chain is released if it becomes empty.
    pub fn remove<F>(&mut self, slot: usize, matches: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let entry = self.slots.get_mut(slot)?;
        let removed = entry.as_mut()?.remove(matches);

        if entry.as_ref().map_or(false, Chain::is_empty) {
            *entry = None;
        }

        removed
    }

    //  Retains only the elements satisfying `keep`, and returns the number of
    //  elements removed.
    //
    //  Chains left empty are released.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let mut removed = 0;

        for entry in self.slots.iter_mut() {
            if let Some(chain) = entry {
                removed += chain.retain(&mut keep);

                if chain.is_empty() {
                    *entry = None;
                }
            }
        }

        removed
    }

    //  Returns the element at `position`, if any.
    pub fn get(&self, position: Position) -> Option<&T> {
        self.chain(position.slot)?.get(position.index)
    }

    //  Returns the position following `after`, or the first position if `after`
    //  is `None`.
    //
    //  Positions are visited in ascending slot order, then in chain order.
    pub fn next_position(&self, after: Option<Position>) -> Option<Position> {
        let start = match after {
            Some(position) => {
                let next = Position { slot: position.slot, index: position.index + 1 };

                if self.chain(position.slot).map_or(false, |chain| next.index < chain.len()) {
                    return Some(next);
                }

                position.slot + 1
            },
            None => 0,
        };

        let occupied = self.slots.get(start..)?
            .iter()
            .position(Option::is_some)?;

        Some(Position { slot: start + occupied, index: 0 })
    }

    //  Returns an iterator over all elements, in slot order then chain order.
    pub fn iter(&self) -> Elements<'_, T> {
        Elements { slots: self.slots.iter(), chain: None }
    }

    //  Empties all slots, retaining the capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
    }

    //  Rehashes all elements into a new array of `capacity` slots, then swaps
    //  it in place of the current one.
    //
    //  The hooks are only invoked before any element moves, so that a panicking
    //  hook leaves the instance untouched.
    pub fn rehash<H>(&mut self, capacity: usize, hooks: &H)
    where
        H: HashHooks<T>,
    {
        let mut fresh = BucketArray::new(capacity);

        let targets: Vec<_> = self.iter()
            .map(|value| fresh.slot_of(hooks.hash(value)))
            .collect();

        let mut targets = targets.into_iter();

        for chain in self.slots.iter_mut().filter_map(Option::take) {
            for value in chain {
                //  Both walks visit elements in the same order.
                if let Some(slot) = targets.next() {
                    fresh.chain_or_create(slot).append(value);
                }
            }
        }

        *self = fresh;
    }
}

//  A borrowing iterator over the elements of a BucketArray.
//
//  Each chain is walked from its head once, so that a walk is linear in the
//  number of slots and elements.
pub struct Elements<'a, T> {
    slots: slice::Iter<'a, Option<Chain<T>>>,
    chain: Option<ChainIter<'a, T>>,
}

impl<'a, T> Clone for Elements<'a, T> {
    fn clone(&self) -> Self { Self { slots: self.slots.clone(), chain: self.chain.clone() } }
}

impl<'a, T> iter::Iterator for Elements<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        loop {
            if let Some(value) = self.chain.as_mut().and_then(iter::Iterator::next) {
                return Some(value);
            }

            let chain = self.slots.by_ref().flatten().next()?;
            self.chain = Some(chain.iter());
        }
    }
}

impl<'a, T> iter::FusedIterator for Elements<'a, T> {}

impl<T: Clone> Clone for BucketArray<T> {
    fn clone(&self) -> Self { Self { slots: self.slots.clone() } }
}

impl<T: fmt::Debug> fmt::Debug for BucketArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.slots.iter().map(Slot)).finish()
    }
}

impl<T> iter::IntoIterator for BucketArray<T> {
    type Item = T;
    type IntoIter = Values<T>;

    fn into_iter(self) -> Values<T> {
        Values { slots: self.slots.into_vec().into_iter(), current: None }
    }
}

//  An owning iterator over the elements of a BucketArray.
pub struct Values<T> {
    slots: vec::IntoIter<Option<Chain<T>>>,
    current: Option<ChainIntoIter<T>>,
}

impl<T> iter::Iterator for Values<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(value) = self.current.as_mut().and_then(iter::Iterator::next) {
                return Some(value);
            }

            self.current = self.slots.next()?.map(Chain::into_iter);
        }
    }
}

//  Debug view of a slot, empty slots showing as empty lists.
struct Slot<'a, T>(&'a Option<Chain<T>>);

impl<'a, T: fmt::Debug> fmt::Debug for Slot<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Some(chain) => chain.fmt(f),
            None => f.debug_list().finish(),
        }
    }
}
