//! Hooks of the HashSet.

use super::root::{fmt, hash};

use self::hash::{Hash, Hasher};

/// HashHooks
///
/// The HashSet delegates equality and hashing of its elements to its hooks,
/// which allows customizing either without wrapping the elements.
///
/// The hooks must uphold two contracts:
/// -   `equals` is an equivalence relation.
/// -   `hash` is consistent with `equals`: equal elements hash equal.
///
/// Also see `DefaultHashHooks` for the natural equality and hash of the
/// element type, and `FnHashHooks` for hooks built from closures.
pub trait HashHooks<T: ?Sized> {
    /// Returns whether `left` and `right` are equal.
    fn equals(&self, left: &T, right: &T) -> bool;

    /// Returns the hash of `value`.
    fn hash(&self, value: &T) -> u64;
}

/// DefaultHashHooks
///
/// Default hooks for the HashSet, relying on `Eq` and `Hash`.
///
/// The hash is computed with `FxHasher`, which is deterministic: the iteration
/// order of a set built from the same sequence of operations is identical
/// across runs.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct DefaultHashHooks;

impl<T: ?Sized + Eq + Hash> HashHooks<T> for DefaultHashHooks {
    fn equals(&self, left: &T, right: &T) -> bool { left == right }

    fn hash(&self, value: &T) -> u64 {
        let mut hasher = rustc_hash::FxHasher::default();
        value.hash(&mut hasher);
        hasher.finish()
    }
}

/// FnHashHooks
///
/// Hooks built from a pair of closures.
///
/// #   Example
///
/// ```
/// #   use buckets::hashset::{FnHashHooks, HashSet};
/// //  Case-insensitive set of ASCII strings.
/// let hooks = FnHashHooks::new(
///     |left: &String, right: &String| left.eq_ignore_ascii_case(right),
///     |value: &String| value.len() as u64,
/// );
///
/// let mut set = HashSet::with_hooks(hooks);
/// assert!(set.add("Hello".to_string()));
/// assert!(!set.add("HELLO".to_string()));
///
/// assert!(set.contains(&"hello".to_string()));
/// assert_eq!(1, set.len());
/// ```
#[derive(Clone, Copy, Default)]
pub struct FnHashHooks<E, H> {
    equals: E,
    hash: H,
}

impl<E, H> FnHashHooks<E, H> {
    /// Creates hooks from an equality and a hash function.
    pub fn new(equals: E, hash: H) -> Self { Self { equals, hash } }
}

impl<T, E, H> HashHooks<T> for FnHashHooks<E, H>
where
    T: ?Sized,
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn equals(&self, left: &T, right: &T) -> bool { (self.equals)(left, right) }

    fn hash(&self, value: &T) -> u64 { (self.hash)(value) }
}

impl<E, H> fmt::Debug for FnHashHooks<E, H> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("FnHashHooks")
    }
}

#[cfg(test)]
mod tests {

use super::*;

#[test]
fn default_hooks_equals() {
    let hooks = DefaultHashHooks;

    assert!(hooks.equals(&1, &1));
    assert!(!hooks.equals(&1, &2));
    assert!(HashHooks::<str>::equals(&hooks, "a", "a"));
}

#[test]
fn default_hooks_hash_is_deterministic() {
    let hooks = DefaultHashHooks;

    assert_eq!(hooks.hash(&42), hooks.hash(&42));
    assert_eq!(hooks.hash("hello"), DefaultHashHooks.hash("hello"));
}

#[test]
fn default_hooks_option() {
    let hooks = DefaultHashHooks;

    assert!(hooks.equals(&None::<i32>, &None));
    assert_eq!(hooks.hash(&None::<i32>), hooks.hash(&None::<i32>));
}

#[test]
fn fn_hooks_forward() {
    let hooks = FnHashHooks::new(|l: &i32, r: &i32| l % 10 == r % 10, |v: &i32| (v % 10) as u64);

    assert!(hooks.equals(&13, &3));
    assert!(!hooks.equals(&13, &4));
    assert_eq!(3, hooks.hash(&13));
}

#[test]
fn fn_hooks_debug() {
    let hooks = FnHashHooks::new(|_: &i32, _: &i32| true, |_: &i32| 0);

    assert_eq!("FnHashHooks", format!("{:?}", hooks));
}

}
