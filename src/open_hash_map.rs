//! String-keyed hash map with open addressing, quadratic probing, and
//! tombstones.
//!
//! Each slot holds at most one entry. A key's candidate slots are
//! `i0, i0 + 1, i0 + 4, i0 + 9, ... (mod capacity)` where
//! `i0 = hash(key) % capacity` and the offset is the square of the
//! attempt counter. Capacity is always an odd prime, which is what makes
//! the quadratic residues cover enough of the table.
//!
//! Removal never empties a slot: the entry is flagged as a tombstone and
//! stays in place so later entries that probed through it remain
//! reachable. Searches skip tombstones without stopping; only a truly
//! empty slot ends a probe. Tombstones are shed wholesale whenever the
//! table is rebuilt, since a rehash reinserts live entries only.
//!
//! Invariants:
//! - `size` counts live (non-tombstone) entries exactly.
//! - `put` doubles the table before inserting once load factor reaches
//!   0.5, half the threshold of the chained variant; probe chains
//!   degrade quickly as an open-addressed table fills.
//! - Probe walks are bounded at `capacity` attempts, so a table
//!   saturated with tombstones reports absence (or grows, on insert)
//!   instead of cycling forever.

use core::fmt;
use core::mem;

use crate::hashing::{char_sum_hash, HashFn};
use crate::primes::{is_prime, next_prime};

const DEFAULT_CAPACITY: usize = 11;

struct Entry<V> {
    key: String,
    value: V,
    is_tombstone: bool,
}

pub struct OpenHashMap<V> {
    slots: Vec<Option<Entry<V>>>,
    size: usize,
    hash_fn: HashFn,
}

impl<V> OpenHashMap<V> {
    /// Map with the default capacity (11) and character-sum hashing.
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(DEFAULT_CAPACITY, char_sum_hash)
    }

    /// Map with at least `capacity` slots; the actual capacity is the
    /// next odd prime.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, char_sum_hash)
    }

    pub fn with_capacity_and_hasher(capacity: usize, hash_fn: HashFn) -> Self {
        let capacity = next_prime(capacity);
        Self {
            slots: fresh_table(capacity),
            size: 0,
            hash_fn,
        }
    }

    /// Number of live entries. Tombstones are excluded.
    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current table capacity. Always an odd prime.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// `size / capacity`, counting live entries only.
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    fn initial_index(&self, key: &str) -> usize {
        ((self.hash_fn)(key) % self.capacity() as u64) as usize
    }

    /// Slot index of the live entry for `key`, if any.
    ///
    /// Walks the quadratic probe sequence; tombstones are skipped, an
    /// empty slot ends the walk. Bounded at `capacity` attempts.
    fn find_slot(&self, key: &str) -> Option<usize> {
        if self.size == 0 {
            return None;
        }
        let capacity = self.capacity();
        let initial = self.initial_index(key);
        let mut index = initial;
        for attempt in 1..=capacity {
            match &self.slots[index] {
                None => return None,
                Some(entry) if !entry.is_tombstone && entry.key == key => {
                    return Some(index);
                }
                Some(_) => {}
            }
            index = (initial + attempt * attempt) % capacity;
        }
        None
    }

    /// First empty-or-tombstone slot on `key`'s probe sequence. `None`
    /// only when the walk exhausts its bound without passing one.
    fn free_slot(&self, key: &str) -> Option<usize> {
        let capacity = self.capacity();
        let initial = self.initial_index(key);
        let mut index = initial;
        for attempt in 1..=capacity {
            match &self.slots[index] {
                None => return Some(index),
                Some(entry) if entry.is_tombstone => return Some(index),
                Some(_) => {}
            }
            index = (initial + attempt * attempt) % capacity;
        }
        None
    }

    /// Inserts or replaces the entry for `key`.
    ///
    /// A table at load factor >= 0.5 is doubled before the insertion. An
    /// existing live entry is overwritten in place, with no tombstone churn.
    /// A new entry lands in the first empty-or-tombstone slot on its
    /// probe sequence, so tombstones are reused as insertion targets.
    pub fn put(&mut self, key: String, value: V) {
        if self.load_factor() >= 0.5 {
            self.resize(2 * self.capacity());
        }

        if let Some(index) = self.find_slot(&key) {
            let entry = self.slots[index]
                .as_mut()
                .expect("find_slot returned an occupied slot");
            entry.value = value;
            return;
        }

        match self.free_slot(&key) {
            Some(index) => {
                self.slots[index] = Some(Entry {
                    key,
                    value,
                    is_tombstone: false,
                });
                self.size += 1;
            }
            None => {
                // Probe bound exhausted on a tombstone-saturated table.
                // Growing rebuilds without tombstones, so the retry finds
                // an empty slot.
                self.resize(2 * self.capacity());
                self.put(key, value);
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let index = self.find_slot(key)?;
        self.slots[index].as_ref().map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        let index = self.find_slot(key)?;
        self.slots[index].as_mut().map(|entry| &mut entry.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.find_slot(key).is_some()
    }

    /// Tombstones the entry for `key`, if present. The entry stays in its
    /// slot so probe sequences that pass through it keep working. Returns
    /// whether an entry was removed.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.find_slot(key) {
            Some(index) => {
                let entry = self.slots[index]
                    .as_mut()
                    .expect("find_slot returned an occupied slot");
                entry.is_tombstone = true;
                self.size -= 1;
                true
            }
            None => false,
        }
    }

    /// Rebuilds the table at `new_capacity` (normalized to a prime) and
    /// rehashes the live entries. Tombstones are dropped in the process,
    /// which is what bounds their accumulation. Requests below `len()`
    /// are rejected as a no-op, unlike the chained variant.
    pub fn resize(&mut self, new_capacity: usize) {
        if new_capacity < self.size {
            return;
        }
        let new_capacity = if is_prime(new_capacity) {
            new_capacity
        } else {
            next_prime(new_capacity)
        };

        let old = mem::replace(&mut self.slots, fresh_table(new_capacity));
        self.size = 0;
        for entry in old.into_iter().flatten() {
            if !entry.is_tombstone {
                self.put(entry.key, entry.value);
            }
        }
    }

    /// Count of slots that have never held an entry or were cleared by a
    /// rebuild. Tombstoned slots are not empty: they hold no live data,
    /// but a probe must pass through them. This therefore undercounts the
    /// slots available to an insertion, since tombstones are valid
    /// insertion targets as well.
    pub fn empty_buckets(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Every live `(key, value)` pair in ascending slot order.
    pub fn keys_and_values(&self) -> Vec<(&str, &V)> {
        self.iter().collect()
    }

    /// Lazy forward traversal of live entries in ascending slot order,
    /// skipping empty and tombstoned slots. One-shot: exhausting the
    /// table ends the sequence.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            slots: self.slots.iter(),
        }
    }

    /// Drops every entry, tombstones included; capacity is unchanged.
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        self.slots = fresh_table(capacity);
        self.size = 0;
    }
}

impl<V> Default for OpenHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: fmt::Debug> fmt::Debug for OpenHashMap<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (index, slot) in self.slots.iter().enumerate() {
            match slot {
                None => {}
                Some(entry) if entry.is_tombstone => {
                    map.entry(&index, &format_args!("tombstone {:?}", entry.key));
                }
                Some(entry) => {
                    map.entry(&index, &format_args!("{:?}: {:?}", entry.key, entry.value));
                }
            }
        }
        map.finish()
    }
}

fn fresh_table<V>(capacity: usize) -> Vec<Option<Entry<V>>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

/// Borrowed iterator over live entries in ascending slot order.
pub struct Iter<'a, V> {
    slots: core::slice::Iter<'a, Option<Entry<V>>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        for slot in self.slots.by_ref() {
            if let Some(entry) = slot {
                if !entry.is_tombstone {
                    return Some((entry.key.as_str(), &entry.value));
                }
            }
        }
        None
    }
}
