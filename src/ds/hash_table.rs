//! Separate-chaining hash table with a fixed bucket array.
//!
//! Keys hash into a fixed number of buckets; colliding entries chain inside
//! their bucket. The bucket array never grows on its own: resizing is an
//! explicit [`rehash_to`](SimpleHashTable::rehash_to) call, so insertion cost
//! stays flat and predictable.
//!
//! ## Architecture
//!
//! ```text
//!   buckets (Vec<Vec<(K, V)>>), bucket_count = 4
//!
//!    [0] ─► (k_a, v_a) ── (k_e, v_e)        index = hash(key) % bucket_count
//!    [1] ─► ∅
//!    [2] ─► (k_c, v_c)
//!    [3] ─► (k_b, v_b) ── (k_f, v_f) ── (k_g, v_g)
//! ```
//!
//! ## Core Operations
//! - `insert`: insert or overwrite, returning the previous value.
//! - `get` / `contains_key`: chain scan within one bucket.
//! - `remove`: delete by key.
//! - `replace`: strict update that refuses absent keys.
//! - `rehash_to`: redistribute every entry across a new bucket count.
//!
//! ## Performance Trade-offs
//! - O(1 + len/bucket_count) average per operation; collisions degrade to a
//!   linear chain scan.
//! - `load_factor()` exposes len/bucket_count so callers can decide when an
//!   explicit rehash pays off.
//! - Chain order is not part of the contract; removal swaps within a bucket.
//!
//! ## Type Constraints
//! - `K: Eq + Hash` for bucket placement and chain lookup.
//! - `S: BuildHasher` for custom hashers (defaults to `FxBuildHasher`).
//!
//! ## Implementation Notes
//! - At least one bucket is always allocated; a requested count of zero is
//!   rounded up to one.
//! - `debug_validate_invariants()` is available in debug/test builds.

use std::fmt;
use std::hash::{BuildHasher, Hash};

use rustc_hash::FxBuildHasher;

use crate::error::{ConfigError, KeyNotFoundError};

/// Default bucket count for [`SimpleHashTable::new`].
pub const DEFAULT_BUCKET_COUNT: usize = 10;

/// Chained hash table over a fixed bucket array.
///
/// # Example
///
/// ```
/// use containerkit::ds::SimpleHashTable;
///
/// let mut table = SimpleHashTable::new();
/// assert_eq!(table.insert("one", 1), None);
/// assert_eq!(table.insert("one", 11), Some(1));
///
/// assert_eq!(table.get(&"one"), Some(&11));
/// assert_eq!(table.remove(&"one"), Some(11));
/// assert_eq!(table.get(&"one"), None);
/// ```
#[derive(Clone)]
pub struct SimpleHashTable<K, V, S = FxBuildHasher> {
    buckets: Vec<Vec<(K, V)>>,
    len: usize,
    hasher: S,
}

impl<K, V> SimpleHashTable<K, V, FxBuildHasher>
where
    K: Eq + Hash,
{
    /// Creates a table with [`DEFAULT_BUCKET_COUNT`] buckets and the default
    /// hasher.
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKET_COUNT)
    }

    /// Creates a table with `bucket_count` buckets and the default hasher.
    ///
    /// A requested count of zero is rounded up to one bucket.
    pub fn with_buckets(bucket_count: usize) -> Self {
        Self::with_buckets_and_hasher(bucket_count, FxBuildHasher::default())
    }
}

impl<K, V, S> SimpleHashTable<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Creates a table with `bucket_count` buckets and a custom hasher.
    ///
    /// A requested count of zero is rounded up to one bucket.
    pub fn with_buckets_and_hasher(bucket_count: usize, hasher: S) -> Self {
        let bucket_count = bucket_count.max(1);
        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Vec::new);
        Self {
            buckets,
            len: 0,
            hasher,
        }
    }

    /// Returns the number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the table holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of buckets.
    #[inline]
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Returns entries per bucket: `len / bucket_count`.
    ///
    /// Values above 1.0 mean chains are forming; the table keeps working,
    /// only slower. See [`rehash_to`](Self::rehash_to).
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.buckets.len() as f64
    }

    /// Inserts a key-value pair, returning the previous value if the key was
    /// already present.
    ///
    /// Never refuses and never resizes; colliding entries extend their chain.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let index = self.bucket_index(&key);
        let bucket = &mut self.buckets[index];
        for slot in bucket.iter_mut() {
            if slot.0 == key {
                return Some(std::mem::replace(&mut slot.1, value));
            }
        }
        bucket.push((key, value));
        self.len += 1;
        None
    }

    /// Returns the value stored under `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter()
            .find(|(stored, _)| stored == key)
            .map(|(_, value)| value)
    }

    /// Returns `true` if `key` has a stored value.
    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Removes and returns the value stored under `key`.
    ///
    /// Returns `None` if the key is absent. Chain order within the bucket is
    /// not preserved.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let index = self.bucket_index(key);
        let bucket = &mut self.buckets[index];
        let position = bucket.iter().position(|(stored, _)| stored == key)?;
        self.len -= 1;
        Some(bucket.swap_remove(position).1)
    }

    /// Overwrites the value of an existing key, returning the old value.
    ///
    /// Unlike [`insert`](Self::insert), an absent key is refused and nothing
    /// is stored.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFoundError`] if `key` has no stored value.
    pub fn replace(&mut self, key: &K, value: V) -> Result<V, KeyNotFoundError> {
        let index = self.bucket_index(key);
        match self.buckets[index]
            .iter_mut()
            .find(|slot| slot.0 == *key)
        {
            Some(slot) => Ok(std::mem::replace(&mut slot.1, value)),
            None => Err(KeyNotFoundError),
        }
    }

    /// Redistributes every entry across `bucket_count` buckets.
    ///
    /// This is the only way the bucket array changes size. Contents and
    /// [`len`](Self::len) are unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `bucket_count` is zero; the table is
    /// unchanged.
    pub fn rehash_to(&mut self, bucket_count: usize) -> Result<(), ConfigError> {
        if bucket_count == 0 {
            return Err(ConfigError::new("bucket count must be at least 1"));
        }

        let mut next: Vec<Vec<(K, V)>> = Vec::with_capacity(bucket_count);
        next.resize_with(bucket_count, Vec::new);
        let old = std::mem::replace(&mut self.buckets, next);

        for (key, value) in old.into_iter().flatten() {
            let index = (self.hasher.hash_one(&key) as usize) % bucket_count;
            self.buckets[index].push((key, value));
        }
        Ok(())
    }

    /// Removes all entries. The bucket count is unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Returns an iterator over all entries in unspecified order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut outer = self.buckets.iter();
        let inner = outer.next().map(|bucket| bucket.iter());
        Iter {
            outer,
            inner,
            remaining: self.len,
        }
    }

    /// Returns an iterator over all keys in unspecified order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over all values in unspecified order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.iter().map(|(_, value)| value)
    }

    fn bucket_index(&self, key: &K) -> usize {
        (self.hasher.hash_one(key) as usize) % self.buckets.len()
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(!self.buckets.is_empty());

        let stored: usize = self.buckets.iter().map(|bucket| bucket.len()).sum();
        assert_eq!(stored, self.len);

        for (index, bucket) in self.buckets.iter().enumerate() {
            for (key, _) in bucket {
                assert_eq!(self.bucket_index(key), index, "entry in wrong bucket");
            }
        }
    }
}

/// Iterator over table entries, bucket by bucket.
pub struct Iter<'a, K, V> {
    outer: std::slice::Iter<'a, Vec<(K, V)>>,
    inner: Option<std::slice::Iter<'a, (K, V)>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((key, value)) = self.inner.as_mut()?.next() {
                self.remaining -= 1;
                return Some((key, value));
            }
            self.inner = Some(self.outer.next()?.iter());
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> Default for SimpleHashTable<K, V, FxBuildHasher>
where
    K: Eq + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, S> fmt::Debug for SimpleHashTable<K, V, S>
where
    K: Eq + Hash + fmt::Debug,
    V: fmt::Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_has_default_buckets() {
        let table: SimpleHashTable<u32, u32> = SimpleHashTable::new();
        assert!(table.is_empty());
        assert_eq!(table.bucket_count(), DEFAULT_BUCKET_COUNT);
        assert_eq!(table.load_factor(), 0.0);
        table.debug_validate_invariants();
    }

    #[test]
    fn insert_get_roundtrip() {
        let mut table = SimpleHashTable::new();
        assert_eq!(table.insert("apple", 3), None);
        assert_eq!(table.insert("banana", 7), None);

        assert_eq!(table.get(&"apple"), Some(&3));
        assert_eq!(table.get(&"banana"), Some(&7));
        assert_eq!(table.get(&"cherry"), None);
        assert_eq!(table.len(), 2);
        table.debug_validate_invariants();
    }

    #[test]
    fn insert_overwrites_and_returns_previous() {
        let mut table = SimpleHashTable::new();
        assert_eq!(table.insert(1, "first"), None);
        assert_eq!(table.insert(1, "second"), Some("first"));

        assert_eq!(table.get(&1), Some(&"second"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn remove_deletes_and_returns_value() {
        let mut table = SimpleHashTable::new();
        table.insert(1, "one");
        table.insert(2, "two");

        assert_eq!(table.remove(&1), Some("one"));
        assert_eq!(table.remove(&1), None);
        assert_eq!(table.len(), 1);
        assert!(!table.contains_key(&1));
        assert!(table.contains_key(&2));
        table.debug_validate_invariants();
    }

    #[test]
    fn replace_refuses_absent_keys() {
        let mut table = SimpleHashTable::new();
        table.insert("present", 1);

        assert_eq!(table.replace(&"present", 2), Ok(1));
        assert_eq!(table.get(&"present"), Some(&2));

        assert_eq!(table.replace(&"absent", 9), Err(KeyNotFoundError));
        assert!(!table.contains_key(&"absent"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn single_bucket_chains_every_entry() {
        let mut table = SimpleHashTable::with_buckets(1);
        for key in 0..20 {
            table.insert(key, key * 10);
        }

        assert_eq!(table.bucket_count(), 1);
        assert_eq!(table.len(), 20);
        for key in 0..20 {
            assert_eq!(table.get(&key), Some(&(key * 10)));
        }

        assert_eq!(table.remove(&7), Some(70));
        assert_eq!(table.get(&7), None);
        assert_eq!(table.get(&8), Some(&80));
        table.debug_validate_invariants();
    }

    #[test]
    fn zero_bucket_request_rounds_up_to_one() {
        let mut table = SimpleHashTable::with_buckets(0);
        assert_eq!(table.bucket_count(), 1);

        table.insert("a", 1);
        assert_eq!(table.get(&"a"), Some(&1));
        table.debug_validate_invariants();
    }

    #[test]
    fn load_factor_tracks_chains() {
        let mut table = SimpleHashTable::with_buckets(10);
        for key in 0..25u32 {
            table.insert(key, ());
        }

        assert_eq!(table.load_factor(), 2.5);
        assert_eq!(table.bucket_count(), 10);
    }

    #[test]
    fn rehash_preserves_contents() {
        let mut table = SimpleHashTable::new();
        for key in 0..50u32 {
            table.insert(key, key as u64 * 2);
        }

        table.rehash_to(97).unwrap();

        assert_eq!(table.bucket_count(), 97);
        assert_eq!(table.len(), 50);
        for key in 0..50u32 {
            assert_eq!(table.get(&key), Some(&(key as u64 * 2)));
        }
        table.debug_validate_invariants();
    }

    #[test]
    fn rehash_to_zero_is_refused() {
        let mut table = SimpleHashTable::new();
        table.insert(1, "one");

        let err = table.rehash_to(0).unwrap_err();
        assert!(err.message().contains("bucket count"));

        assert_eq!(table.bucket_count(), DEFAULT_BUCKET_COUNT);
        assert_eq!(table.get(&1), Some(&"one"));
        table.debug_validate_invariants();
    }

    #[test]
    fn rehash_down_to_one_bucket() {
        let mut table = SimpleHashTable::new();
        for key in 0..30u32 {
            table.insert(key, key);
        }

        table.rehash_to(1).unwrap();

        assert_eq!(table.bucket_count(), 1);
        assert_eq!(table.len(), 30);
        assert_eq!(table.get(&29), Some(&29));
        table.debug_validate_invariants();
    }

    #[test]
    fn clear_keeps_bucket_count() {
        let mut table = SimpleHashTable::with_buckets(4);
        for key in 0..10u32 {
            table.insert(key, ());
        }
        table.clear();

        assert!(table.is_empty());
        assert_eq!(table.bucket_count(), 4);

        table.insert(3, ());
        assert!(table.contains_key(&3));
        table.debug_validate_invariants();
    }

    #[test]
    fn iter_yields_every_entry_once() {
        let mut table = SimpleHashTable::new();
        for key in 0..40u32 {
            table.insert(key, key * 3);
        }

        let mut seen: Vec<(u32, u32)> = table.iter().map(|(k, v)| (*k, *v)).collect();
        seen.sort_unstable();

        let expected: Vec<(u32, u32)> = (0..40).map(|k| (k, k * 3)).collect();
        assert_eq!(seen, expected);
        assert_eq!(table.iter().len(), 40);
    }

    #[test]
    fn keys_and_values_cover_the_table() {
        let mut table = SimpleHashTable::new();
        table.insert("a", 1);
        table.insert("b", 2);

        let mut keys: Vec<&str> = table.keys().copied().collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["a", "b"]);

        let mut values: Vec<i32> = table.values().copied().collect();
        values.sort_unstable();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn custom_hasher_is_honored() {
        use std::collections::hash_map::RandomState;

        let mut table: SimpleHashTable<u64, &str, RandomState> =
            SimpleHashTable::with_buckets_and_hasher(8, RandomState::new());
        table.insert(1, "one");

        assert_eq!(table.get(&1), Some(&"one"));
        table.debug_validate_invariants();
    }

    #[test]
    fn debug_renders_as_map() {
        let mut table = SimpleHashTable::new();
        table.insert("k", 1);
        assert_eq!(format!("{:?}", table), r#"{"k": 1}"#);
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the table mirrors a std HashMap model under a small key
        /// domain that forces collisions
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_matches_hashmap_model(
            bucket_count in 1usize..8,
            ops in prop::collection::vec((0u8..3, 0u8..16, any::<i32>()), 0..150)
        ) {
            use std::collections::HashMap;

            let mut table = SimpleHashTable::with_buckets(bucket_count);
            let mut model: HashMap<u8, i32> = HashMap::new();

            for (op, key, value) in ops {
                match op {
                    0 => prop_assert_eq!(table.insert(key, value), model.insert(key, value)),
                    1 => prop_assert_eq!(table.remove(&key), model.remove(&key)),
                    2 => prop_assert_eq!(table.get(&key), model.get(&key)),
                    _ => unreachable!(),
                }

                prop_assert_eq!(table.len(), model.len());
                table.debug_validate_invariants();
            }
        }

        /// Property: rehashing to any size preserves the full contents
        #[cfg_attr(miri, ignore)]
        #[test]
        fn prop_rehash_preserves_contents(
            entries in prop::collection::hash_map(any::<u16>(), any::<i32>(), 0..60),
            bucket_count in 1usize..64
        ) {
            let mut table = SimpleHashTable::new();
            for (&key, &value) in &entries {
                table.insert(key, value);
            }

            table.rehash_to(bucket_count).unwrap();

            prop_assert_eq!(table.bucket_count(), bucket_count);
            prop_assert_eq!(table.len(), entries.len());
            for (&key, &value) in &entries {
                prop_assert_eq!(table.get(&key), Some(&value));
            }
            table.debug_validate_invariants();
        }
    }
}
