use log::debug;
use polyfuse_runtime::LOAD_FACTOR;

use crate::accumulator::AccumulatorMap;
use crate::hash::{hash_qid, next_prime};
use crate::reduction::ReductionPolicy;

struct Slot {
    qid: i32,
    map: AccumulatorMap,
}

/// A `qid -> AccumulatorMap` directory, open-addressed with linear probing
/// on Knuth's multiplicative hash. Also remembers first-seen insertion
/// order, since topics must be emitted in that order regardless of where
/// they land in the hash table.
pub struct TopicDirectory {
    slots: Vec<Option<Slot>>,
    capacity: usize,
    size: usize,
    order: Vec<i32>,
}

impl TopicDirectory {
    pub fn new() -> Self {
        Self::with_capacity(1000)
    }

    pub fn with_capacity(requested: usize) -> Self {
        let capacity = next_prime(requested);
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            capacity,
            size: 0,
            order: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    /// Topics in first-seen order.
    pub fn topics(&self) -> &[i32] {
        &self.order
    }

    /// Return the accumulator map for `qid`, creating a fresh one
    /// configured with `policy` on first sighting.
    pub fn entry(&mut self, qid: i32, policy: ReductionPolicy) -> &mut AccumulatorMap {
        if (self.size + 1) as f64 / self.capacity as f64 > LOAD_FACTOR {
            self.rehash(next_prime(4 * (self.size + 1)));
        }

        let mut idx = (hash_qid(qid) as usize) % self.capacity;
        loop {
            match self.slots[idx] {
                Some(ref slot) if slot.qid == qid => break,
                Some(_) => idx = (idx + 1) % self.capacity,
                None => {
                    self.slots[idx] = Some(Slot {
                        qid,
                        map: AccumulatorMap::new(policy),
                    });
                    self.size += 1;
                    self.order.push(qid);
                    break;
                }
            }
        }

        &mut self.slots[idx].as_mut().unwrap().map
    }

    pub fn get(&self, qid: i32) -> Option<&AccumulatorMap> {
        let mut idx = (hash_qid(qid) as usize) % self.capacity;
        for _ in 0..self.capacity {
            match &self.slots[idx] {
                Some(slot) if slot.qid == qid => return Some(&slot.map),
                Some(_) => idx = (idx + 1) % self.capacity,
                None => return None,
            }
        }
        None
    }

    /// Look up `qid`'s accumulator map without creating one if absent —
    /// used while folding inputs after the first, which may only
    /// contribute to topics the first input already pre-inserted.
    pub fn get_mut(&mut self, qid: i32) -> Option<&mut AccumulatorMap> {
        let mut idx = (hash_qid(qid) as usize) % self.capacity;
        let mut found = false;
        for _ in 0..self.capacity {
            match &self.slots[idx] {
                Some(slot) if slot.qid == qid => {
                    found = true;
                    break;
                }
                Some(_) => idx = (idx + 1) % self.capacity,
                None => break,
            }
        }
        if !found {
            return None;
        }
        self.slots[idx].as_mut().map(|slot| &mut slot.map)
    }

    fn rehash(&mut self, new_capacity: usize) {
        debug!(
            "topic directory: rehashing {} -> {} slots ({} topics)",
            self.capacity, new_capacity, self.size
        );
        let old_slots = std::mem::replace(&mut self.slots, (0..new_capacity).map(|_| None).collect());
        self.capacity = new_capacity;
        for slot in old_slots.into_iter().flatten() {
            let mut idx = (hash_qid(slot.qid) as usize) % self.capacity;
            while self.slots[idx].is_some() {
                idx = (idx + 1) % self.capacity;
            }
            self.slots[idx] = Some(slot);
        }
    }
}

impl Default for TopicDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "topic_tests.rs"]
mod tests;
