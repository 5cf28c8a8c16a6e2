//! Keyed lookup over maps with nullable values.

use crate::adapters::nullable::IntoMaybe;
use crate::core::Maybe;
use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Lookup that collapses nullable map values into [`Maybe`].
///
/// For a map from `K` to `Option<V>`, looking up a key yields `Just(&v)`
/// only when the key is present and its value is non-null. An absent key and
/// a present key holding `None` both yield `Nothing` - the two causes are
/// deliberately indistinguishable to the caller.
///
/// # Example
///
/// ```rust
/// use perhaps::{Just, MaybeLookup, Nothing};
/// use std::collections::HashMap;
///
/// let mut translations: HashMap<i32, Option<&str>> = HashMap::new();
/// translations.insert(1, Some("uno"));
/// translations.insert(2, Some("dos"));
/// translations.insert(4, None);
///
/// assert_eq!(translations.lookup(&1), Just(&"uno"));
/// assert_eq!(translations.lookup(&3), Nothing); // absent key
/// assert_eq!(translations.lookup(&4), Nothing); // present key, null value
/// ```
pub trait MaybeLookup<K, V> {
    /// Look up a key, collapsing both absence causes into `Nothing`.
    fn lookup(&self, key: &K) -> Maybe<&V>;
}

impl<K, V> MaybeLookup<K, V> for HashMap<K, Option<V>>
where
    K: Eq + Hash,
{
    fn lookup(&self, key: &K) -> Maybe<&V> {
        self.get(key).and_then(|entry| entry.as_ref()).into_maybe()
    }
}

impl<K, V> MaybeLookup<K, V> for BTreeMap<K, Option<V>>
where
    K: Ord,
{
    fn lookup(&self, key: &K) -> Maybe<&V> {
        self.get(key).and_then(|entry| entry.as_ref()).into_maybe()
    }
}
