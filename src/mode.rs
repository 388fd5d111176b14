//! Mode finding over a value sequence, built on the chained map.
//!
//! A worked consumer of the map contract: one pass to count, one pass
//! back over the input sequence to report, so the output keeps
//! first-occurrence order without sorting.

use crate::chained_hash_map::ChainedHashMap;

/// Most frequent values in `values`, with the frequency they share.
///
/// Ties are all reported, in order of first occurrence. An empty input
/// yields an empty mode set with frequency 0.
pub fn find_mode(values: &[String]) -> (Vec<String>, usize) {
    let mut counts: ChainedHashMap<usize> = ChainedHashMap::new();
    for value in values {
        let count = counts.get(value).copied().unwrap_or(0);
        counts.put(value.clone(), count + 1);
    }

    let mut modes = Vec::new();
    let mut max_frequency = 0;
    for value in values {
        // Each distinct value reports at most once: it is removed from
        // the counts as soon as it has been considered.
        if let Some(&frequency) = counts.get(value) {
            if frequency > max_frequency {
                modes.clear();
                modes.push(value.clone());
                max_frequency = frequency;
            } else if frequency == max_frequency {
                modes.push(value.clone());
            }
            counts.remove(value);
        }
    }

    (modes, max_frequency)
}
