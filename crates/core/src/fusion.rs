use crate::reduction::{Cell, ReductionPolicy};
use crate::weights::WeightTable;

/// One of the eleven supported fusion algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fusion {
    CombSum,
    CombAnz,
    CombMnz,
    CombMin,
    CombMax,
    CombMed,
    Borda,
    Isr,
    LogIsr,
    Rrf,
    Rbc,
}

impl Fusion {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "combsum" => Some(Fusion::CombSum),
            "combanz" => Some(Fusion::CombAnz),
            "combmnz" => Some(Fusion::CombMnz),
            "combmin" => Some(Fusion::CombMin),
            "combmax" => Some(Fusion::CombMax),
            "combmed" => Some(Fusion::CombMed),
            "borda" => Some(Fusion::Borda),
            "isr" => Some(Fusion::Isr),
            "logisr" => Some(Fusion::LogIsr),
            "rrf" => Some(Fusion::Rrf),
            "rbc" => Some(Fusion::Rbc),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Fusion::CombSum => "combsum",
            Fusion::CombAnz => "combanz",
            Fusion::CombMnz => "combmnz",
            Fusion::CombMin => "combmin",
            Fusion::CombMax => "combmax",
            Fusion::CombMed => "combmed",
            Fusion::Borda => "borda",
            Fusion::Isr => "isr",
            Fusion::LogIsr => "logisr",
            Fusion::Rrf => "rrf",
            Fusion::Rbc => "rbc",
        }
    }

    pub fn reduction_policy(self) -> ReductionPolicy {
        match self {
            Fusion::CombMin => ReductionPolicy::Less,
            Fusion::CombMax => ReductionPolicy::Greater,
            Fusion::CombMed => ReductionPolicy::List,
            _ => ReductionPolicy::Add,
        }
    }

    /// Whether this fusion consumes (normalized) input scores rather than
    /// a pure rank-based formula.
    pub fn is_score_based(self) -> bool {
        matches!(
            self,
            Fusion::CombSum
                | Fusion::CombAnz
                | Fusion::CombMnz
                | Fusion::CombMin
                | Fusion::CombMax
                | Fusion::CombMed
        )
    }

    /// Per-entry contribution at 1-based rank `r`.
    ///
    /// `score` is the (already normalized, for score-based fusions) input
    /// score; `system_size` is the total entry count of the run the entry
    /// came from; `rrf_k` is the configured RRF constant; `weights` must
    /// already be extended to at least `rank` entries when `self` is `Rbc`.
    pub fn contribution(
        self,
        rank: usize,
        score: f64,
        system_size: usize,
        rrf_k: u32,
        weights: &WeightTable,
    ) -> f64 {
        match self {
            Fusion::CombSum
            | Fusion::CombAnz
            | Fusion::CombMnz
            | Fusion::CombMin
            | Fusion::CombMax
            | Fusion::CombMed => score,
            Fusion::Borda => (system_size as f64 - rank as f64 + 1.0) / system_size as f64,
            Fusion::Isr | Fusion::LogIsr => 1.0 / (rank as f64 * rank as f64),
            Fusion::Rrf => 1.0 / (rrf_k as f64 + rank as f64),
            Fusion::Rbc => weights
                .get(rank - 1)
                .expect("weight table must be extended before folding"),
        }
    }

    /// Per-weight contribution multiplier applied at the input-file level
    /// (see the per-file `-w` option); `0.0` is never meaningful so callers
    /// default to `1.0`.
    pub fn weighted(contribution: f64, file_weight: f64) -> f64 {
        contribution * file_weight
    }

    /// Post-process an accumulated cell into the final emitted score.
    pub fn post(self, cell: &Cell) -> f64 {
        match self {
            Fusion::CombAnz => cell.val() / cell.count() as f64,
            Fusion::CombMnz => cell.val() * cell.count() as f64,
            Fusion::CombMed => cell.median(),
            Fusion::Isr => cell.val() * cell.count() as f64,
            Fusion::LogIsr => cell.val() * (cell.count() as f64 + 1.0).ln(),
            Fusion::CombSum | Fusion::CombMin | Fusion::CombMax | Fusion::Borda | Fusion::Rrf
            | Fusion::Rbc => cell.val(),
        }
    }
}

#[cfg(test)]
#[path = "fusion_tests.rs"]
mod tests;
