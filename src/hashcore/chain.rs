//! The chain of elements colliding into a single bucket.
//!
//! A `Chain` is a minimal singly-linked list preserving insertion order. It
//! does not enforce uniqueness: the HashSet checks membership before appending.

use super::root::{fmt, iter, mem};
use super::root::boxed::Box;
use super::root::vec::Vec;

//  Chain.
pub struct Chain<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

impl<T> Chain<T> {
    //  Creates an empty chain.
    pub const fn new() -> Self { Self { head: None, len: 0 } }

    //  Returns the number of elements.
    pub fn len(&self) -> usize { self.len }

    //  Returns whether the chain contains no element.
    pub fn is_empty(&self) -> bool { self.len == 0 }

    //  Appends `value` at the tail.
    //
    //  O(n): the chain keeps no tail pointer, and its length is bounded by the
    //  load factor of the table anyway.
    pub fn append(&mut self, value: T) {
        let mut link = &mut self.head;

        while let Some(node) = link {
            link = &mut node.next;
        }

        *link = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    //  Returns whether any element satisfies `matches`.
    pub fn contains<F>(&self, matches: F) -> bool
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().any(matches)
    }

    //  Returns the first element satisfying `matches`, if any.
    pub fn find<F>(&self, mut matches: F) -> Option<&T>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().find(|value| matches(value))
    }

    //  Removes the first element satisfying `matches`, and returns it.
    pub fn remove<F>(&mut self, mut matches: F) -> Option<T>
    where
        F: FnMut(&T) -> bool,
    {
        let mut link = &mut self.head;

        while link.as_ref().map_or(false, |node| !matches(&node.value)) {
            link = &mut link.as_mut()?.next;
        }

        let mut node = link.take()?;
        *link = node.next.take();
        self.len -= 1;

        Some(node.value)
    }

    //  Retains only the elements satisfying `keep`, and returns the number of
    //  elements removed.
    pub fn retain<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.len;
        let mut link = &mut self.head;

        loop {
            let kept = match link.as_ref() {
                Some(node) => keep(&node.value),
                None => break,
            };

            if kept {
                match link {
                    Some(node) => link = &mut node.next,
                    None => break,
                }
            } else if let Some(mut node) = link.take() {
                *link = node.next.take();
                self.len -= 1;
            }
        }

        before - self.len
    }

    //  Returns the element at `index`, in insertion order.
    pub fn get(&self, index: usize) -> Option<&T> { self.iter().nth(index) }

    //  Returns a fresh iterator over the elements, in insertion order.
    pub fn iter(&self) -> ChainIter<'_, T> {
        ChainIter { next: self.head.as_deref(), remaining: self.len }
    }
}

impl<T: Clone> Clone for Chain<T> {
    fn clone(&self) -> Self {
        let values: Vec<_> = self.iter().cloned().collect();

        //  Built from the tail, so as to prepend in O(1).
        let mut head = None;

        for value in values.into_iter().rev() {
            head = Some(Box::new(Node { value, next: head }));
        }

        Self { head, len: self.len }
    }
}

impl<T> Default for Chain<T> {
    fn default() -> Self { Self::new() }
}

impl<T: fmt::Debug> fmt::Debug for Chain<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Drop for Chain<T> {
    fn drop(&mut self) {
        //  Unlinks iteratively; the default recursive drop could overflow the
        //  stack on pathological chains.
        let mut link = self.head.take();

        while let Some(mut node) = link {
            link = node.next.take();
        }
    }
}

impl<'a, T> iter::IntoIterator for &'a Chain<T> {
    type Item = &'a T;
    type IntoIter = ChainIter<'a, T>;

    fn into_iter(self) -> ChainIter<'a, T> { self.iter() }
}

impl<T> iter::IntoIterator for Chain<T> {
    type Item = T;
    type IntoIter = ChainIntoIter<T>;

    fn into_iter(mut self) -> ChainIntoIter<T> {
        let remaining = mem::replace(&mut self.len, 0);
        ChainIntoIter { next: self.head.take(), remaining }
    }
}

//  An iterator over the elements of a Chain.
pub struct ChainIter<'a, T> {
    next: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Clone for ChainIter<'a, T> {
    fn clone(&self) -> Self { Self { next: self.next, remaining: self.remaining } }
}

impl<'a, T> iter::Iterator for ChainIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.next?;

        self.next = node.next.as_deref();
        self.remaining -= 1;

        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<'a, T> iter::ExactSizeIterator for ChainIter<'a, T> {}

//  An owning iterator over the elements of a Chain.
pub struct ChainIntoIter<T> {
    next: Option<Box<Node<T>>>,
    remaining: usize,
}

impl<T> iter::Iterator for ChainIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let mut node = self.next.take()?;

        self.next = node.next.take();
        self.remaining -= 1;

        Some(node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.remaining, Some(self.remaining)) }
}

impl<T> iter::ExactSizeIterator for ChainIntoIter<T> {}

impl<T> Drop for ChainIntoIter<T> {
    fn drop(&mut self) {
        for _ in self {}
    }
}
