use log::{debug, trace};
use polyfuse_runtime::{INITIAL_TOPIC_CAPACITY, LOAD_FACTOR};

use crate::hash::{hash_docno, next_prime};
use crate::reduction::{Cell, ReductionPolicy};

struct Slot {
    docno: String,
    cell: Cell,
}

/// A `docno -> Cell` map for a single topic, open-addressed with linear
/// probing. Equality between keys is exact string equality.
///
/// The original source compares keys by prefix, which is unsound whenever
/// one docno is a proper prefix of another; this is a deliberate deviation,
/// not a faithful port (see the design notes for the reasoning).
pub struct AccumulatorMap {
    slots: Vec<Option<Slot>>,
    capacity: usize,
    size: usize,
    policy: ReductionPolicy,
}

impl AccumulatorMap {
    pub fn new(policy: ReductionPolicy) -> Self {
        Self::with_capacity(policy, INITIAL_TOPIC_CAPACITY)
    }

    pub fn with_capacity(policy: ReductionPolicy, requested: usize) -> Self {
        let capacity = next_prime(requested);
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            capacity,
            size: 0,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Fold `score` into the cell for `docno`, creating it on first sighting.
    pub fn update(&mut self, docno: &str, score: f64) {
        if (self.size + 1) as f64 / self.capacity as f64 > LOAD_FACTOR {
            self.rehash(next_prime(4 * (self.size + 1)));
        }

        let mut idx = (hash_docno(docno) as usize) % self.capacity;
        loop {
            match &mut self.slots[idx] {
                Some(slot) if slot.docno == docno => {
                    trace!("accumulator: routing repeat contribution for {docno}");
                    slot.cell.update(self.policy, score);
                    return;
                }
                Some(_) => {
                    idx = (idx + 1) % self.capacity;
                }
                None => {
                    trace!("accumulator: first sighting of {docno}");
                    self.slots[idx] = Some(Slot {
                        docno: docno.to_string(),
                        cell: Cell::new(self.policy, score),
                    });
                    self.size += 1;
                    return;
                }
            }
        }
    }

    fn rehash(&mut self, new_capacity: usize) {
        debug!(
            "accumulator: rehashing {} -> {} slots ({} occupied)",
            self.capacity, new_capacity, self.size
        );
        let old_slots = std::mem::replace(&mut self.slots, (0..new_capacity).map(|_| None).collect());
        self.capacity = new_capacity;
        for slot in old_slots.into_iter().flatten() {
            let mut idx = (hash_docno(&slot.docno) as usize) % self.capacity;
            while self.slots[idx].is_some() {
                idx = (idx + 1) % self.capacity;
            }
            self.slots[idx] = Some(slot);
        }
    }

    /// Iterate occupied cells in bucket order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.slots
            .iter()
            .filter_map(|slot| slot.as_ref().map(|s| (s.docno.as_str(), &s.cell)))
    }
}

#[cfg(test)]
#[path = "accumulator_tests.rs"]
mod tests;
