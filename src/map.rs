//! Ordered-map helpers.
//!
//! All helpers preserve the insertion order of their first argument.

use indexmap::IndexMap;
use std::hash::Hash;

/// Merges `other` into `map`, overwriting the values of existing keys.
///
/// Existing keys keep their position; new keys are appended in the order
/// of `other`.
pub(crate) fn merge<K, V, I>(mut map: IndexMap<K, V>, other: I) -> IndexMap<K, V>
where
    K: Hash + Eq,
    I: IntoIterator<Item = (K, V)>,
{
    map.extend(other);
    map
}

/// Removes the given keys from `map`.
pub(crate) fn diff<K, V>(mut map: IndexMap<K, V>, keys: &[K]) -> IndexMap<K, V>
where
    K: Hash + Eq,
{
    map.retain(|k, _| !keys.contains(k));
    map
}

/// Keeps the entries of `map` matching the predicate.
pub(crate) fn filter<K, V, F>(mut map: IndexMap<K, V>, mut pred: F) -> IndexMap<K, V>
where
    K: Hash + Eq,
    F: FnMut(&K, &V) -> bool,
{
    map.retain(|k, v| pred(k, v));
    map
}

/// Keeps the entries of `map` whose keys are in `keys`.
pub(crate) fn intersect<K, V>(mut map: IndexMap<K, V>, keys: &[K]) -> IndexMap<K, V>
where
    K: Hash + Eq,
{
    map.retain(|k, _| keys.contains(k));
    map
}
