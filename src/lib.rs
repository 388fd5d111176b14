//! prime-maps: string-keyed hash maps over prime-sized tables, built two
//! ways over the same contract.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: implement the full map contract (upsert, lookup, removal,
//!   explicit and load-triggered resizing, iteration, clear) twice, with
//!   the collision-handling strategy as the only difference, so each
//!   strategy's invariants can be reasoned about in isolation.
//! - Variants:
//!   - ChainedHashMap<V>: separate chaining; every slot owns a singly
//!     linked list of entries and removal physically unlinks a node.
//!     Grows when the load factor reaches 1.0.
//!   - OpenHashMap<V>: open addressing with quadratic probing; every
//!     slot holds at most one entry and removal leaves a tombstone in
//!     place so other keys' probe sequences stay intact. Grows at load
//!     factor 0.5, before clustering degrades the probe chains.
//!
//! Constraints
//! - Keys are `String`; values are any `V`. Lookups take `&str`.
//! - Capacity is always an odd prime: every requested capacity is
//!   normalized by forcing it odd and stepping to the next prime. The
//!   quadratic probe sequence `i0, i0+1, i0+4, i0+9, ... (mod capacity)`
//!   relies on prime capacity for slot coverage.
//! - Absence is an `Option`/`bool`, never an error; malformed resize
//!   requests are normalized (chained) or rejected (open-addressed, when
//!   the request is below the live count), never surfaced.
//! - Rehashing is wholesale: resize and clear replace the entire table
//!   and reinsert entries through the ordinary insertion path. There is
//!   no incremental rehash.
//! - Single-threaded use; `&mut` access is the synchronization story.
//!
//! Hash functions
//! - Maps store the `fn(&str) -> u64` they were constructed with and
//!   never assume distribution quality. Two are supplied in `hashing`:
//!   a character-sum and a position-weighted sum.
//!
//! Notes and non-goals
//! - The two variants are independent; nothing flows between them.
//! - No shrinking policy beyond what explicit resize allows, no generic
//!   keys, no persistence.
//! - `find_mode` is a small consumer of the chained map, kept public as
//!   a usage example of the contract.

pub mod chained_hash_map;
pub mod hashing;
pub mod open_hash_map;

mod bucket_list;
mod mode;
mod primes;

// Public surface
pub use chained_hash_map::ChainedHashMap;
pub use hashing::{char_sum_hash, weighted_char_hash, HashFn};
pub use mode::find_mode;
pub use open_hash_map::OpenHashMap;
