use std::io::Write;

use polyfuse_io::Run;

use crate::error::CoreError;
use crate::fusion::Fusion;
use crate::heap::BoundedHeap;
use crate::normalize::{Normalization, normalize};
use crate::topic::TopicDirectory;
use crate::weights::WeightTable;

/// Engine has not yet been told which fusion algorithm to run.
pub struct Idle;

/// Fusion selected; no input has been folded yet.
pub struct Configured {
    fusion: Fusion,
    rrf_k: u32,
    phi: f64,
}

/// At least one input has been folded; the topic directory and weight
/// table now hold real state.
pub struct Initialized {
    fusion: Fusion,
    rrf_k: u32,
    phi: f64,
    topics: TopicDirectory,
    weights: WeightTable,
}

/// `present` has consumed the engine; there is nothing left to do with it.
pub struct Emitted;

/// The fusion driver: folds ranked inputs into per-topic accumulators and
/// emits the blended top-k ranking.
///
/// Replaces the source's module-level globals (`fusion`, `topic_tab`,
/// `qids`, `rrf_k`, `weights`) with a single typestate-checked value. Each
/// method that only makes sense in one lifecycle phase is only defined on
/// the matching `Engine<S>`, so folding before a fusion is selected, or
/// presenting the same engine twice, is a compile error rather than a
/// runtime check.
pub struct Engine<S> {
    state: S,
}

impl Engine<Idle> {
    pub fn new() -> Self {
        Engine { state: Idle }
    }

    /// Select the fusion algorithm and its numeric parameters (`rrf_k` is
    /// ignored by every fusion but RRF; `phi` is ignored by every fusion
    /// but RBC).
    pub fn set_fusion(self, fusion: Fusion, rrf_k: u32, phi: f64) -> Engine<Configured> {
        Engine {
            state: Configured { fusion, rrf_k, phi },
        }
    }
}

impl Default for Engine<Idle> {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine<Configured> {
    /// Fold the first input. Builds the topic directory, pre-inserting
    /// every topic in the order this input first presents them; later
    /// inputs may only contribute to these topics (see §6: "topic sets in
    /// later files are not consulted").
    pub fn fold(
        self,
        run: &Run,
        file_weight: f64,
        normalization: Option<Normalization>,
    ) -> Engine<Initialized> {
        let Configured { fusion, rrf_k, phi } = self.state;
        let policy = fusion.reduction_policy();
        let mut topics = TopicDirectory::new();
        for &qid in &run.topics {
            topics.entry(qid, policy);
        }
        let mut engine = Engine {
            state: Initialized {
                fusion,
                rrf_k,
                phi,
                topics,
                weights: WeightTable::new(),
            },
        };
        engine.fold_run(run, file_weight, normalization);
        engine
    }
}

impl Engine<Initialized> {
    /// Fold a subsequent input's contributions into the accumulators built
    /// by previous folds.
    pub fn fold(mut self, run: &Run, file_weight: f64, normalization: Option<Normalization>) -> Self {
        self.fold_run(run, file_weight, normalization);
        self
    }

    fn fold_run(&mut self, run: &Run, file_weight: f64, normalization: Option<Normalization>) {
        let state = &mut self.state;

        // Extend the weight table to this input's deepest rank, regardless
        // of whether RBC is the active fusion: the rank cut-off below is
        // always tested against `weights.len()`, so every fusion benefits
        // from the same no-silent-drop guarantee.
        state.weights.extend(run.max_rank, state.phi);

        let system_size = run.len();

        let mut scores: Vec<f64> = Vec::new();
        if state.fusion.is_score_based() {
            scores = run.entries.iter().map(|e| e.score).collect();
            if let Some(normalization) = normalization {
                normalize(&mut scores, normalization);
            }
        }

        for (idx, entry) in run.entries.iter().enumerate() {
            if entry.rank > state.weights.len() {
                continue;
            }

            // Only the first input's topics are pre-inserted; a topic seen
            // for the first time in a later input is not accumulated (§6:
            // "topic sets in later files are not consulted").
            let Some(map) = state.topics.get_mut(entry.qid) else {
                continue;
            };

            let score = if state.fusion.is_score_based() {
                scores[idx]
            } else {
                0.0
            };

            let contribution = state.fusion.contribution(
                entry.rank,
                score,
                system_size,
                state.rrf_k,
                &state.weights,
            );
            let contribution = Fusion::weighted(contribution, file_weight);

            map.update(&entry.docno, contribution);
        }
    }

    /// Emit the final ranking for every topic, in first-seen order.
    ///
    /// Consumes the engine, so there is no way to call `present` twice on
    /// the same value; the typestate on `Engine` makes "re-entering
    /// `present`" (undefined by the driver's lifecycle) a compile error.
    pub fn present<W: Write>(
        self,
        out: &mut W,
        run_id: &str,
        depth: usize,
        prevent_ties: bool,
    ) -> Result<Engine<Emitted>, CoreError> {
        if depth == 0 {
            return Err(CoreError::ZeroDepth);
        }

        let Initialized { fusion, topics, .. } = self.state;

        // Depth is the requested output size; it is bounded by distinct
        // docnos naturally (the heap cannot hold more items than are
        // inserted), not by the weight table's length — that length only
        // gates RBC's own rank depth (§4.3/§4.4), never the emitted count.
        let heap_capacity = depth;

        for &qid in topics.topics() {
            let map = topics.get(qid).expect("topic was pre-inserted");
            let mut heap = BoundedHeap::new(heap_capacity);

            for (docno, cell) in map.iter() {
                let score = fusion.post(cell);
                heap.insert(docno.to_string(), score, cell.count());
            }

            let mut drained = Vec::with_capacity(heap.size());
            while let Some(item) = heap.pop() {
                drained.push(item);
            }

            // `drained` is in ascending score order here; tie-prevention
            // adds the ascending index before the reversal below, so a
            // higher-scoring item among a tied run always ends up printed
            // first once ranks are assigned.
            if prevent_ties {
                for (i, item) in drained.iter_mut().enumerate() {
                    item.score += i as f64;
                }
            }

            drained.reverse();

            for (i, item) in drained.iter().enumerate() {
                writeln!(
                    out,
                    "{} Q0 {} {} {:.9} {}",
                    qid,
                    item.docno,
                    i + 1,
                    item.score,
                    run_id
                )?;
            }
        }

        Ok(Engine { state: Emitted })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
