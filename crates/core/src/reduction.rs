use smallvec::SmallVec;

/// Number of scores a `Cell::Sorted` list keeps inline before spilling to
/// the heap. Typical lists are bounded by the number of input files folded.
const INLINE_SCORES: usize = 8;

/// How repeated contributions to the same (topic, docno) are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReductionPolicy {
    Add,
    Less,
    Greater,
    List,
}

/// A single accumulator cell. `Scalar` backs `Add`/`Less`/`Greater`;
/// `Sorted` backs `List`, keeping scores in ascending order so the median
/// is a constant-time read.
#[derive(Debug, Clone)]
pub enum Cell {
    Scalar { val: f64, count: u32 },
    Sorted { scores: SmallVec<[f64; INLINE_SCORES]> },
}

impl Cell {
    pub fn new(policy: ReductionPolicy, score: f64) -> Self {
        match policy {
            ReductionPolicy::List => {
                let mut scores = SmallVec::new();
                scores.push(score);
                Cell::Sorted { scores }
            }
            ReductionPolicy::Add | ReductionPolicy::Less | ReductionPolicy::Greater => {
                Cell::Scalar { val: score, count: 1 }
            }
        }
    }

    /// Fold another contribution into this cell under `policy`.
    ///
    /// `policy` must be the same policy the cell was created with; an
    /// accumulator map only ever uses one policy for its whole lifetime.
    pub fn update(&mut self, policy: ReductionPolicy, score: f64) {
        match (self, policy) {
            (Cell::Scalar { val, count }, ReductionPolicy::Add) => {
                *val += score;
                *count += 1;
            }
            (Cell::Scalar { val, count }, ReductionPolicy::Less) => {
                if score < *val {
                    *val = score;
                }
                *count += 1;
            }
            (Cell::Scalar { val, count }, ReductionPolicy::Greater) => {
                if score > *val {
                    *val = score;
                }
                *count += 1;
            }
            (Cell::Sorted { scores }, ReductionPolicy::List) => {
                let pos = scores.partition_point(|&s| s < score);
                scores.insert(pos, score);
            }
            (cell, policy) => unreachable!("cell {cell:?} does not match policy {policy:?}"),
        }
    }

    /// Number of contributions folded into this cell.
    pub fn count(&self) -> u32 {
        match self {
            Cell::Scalar { count, .. } => *count,
            Cell::Sorted { scores } => scores.len() as u32,
        }
    }

    /// The scalar aggregate. Panics on a `Sorted` cell.
    pub fn val(&self) -> f64 {
        match self {
            Cell::Scalar { val, .. } => *val,
            Cell::Sorted { .. } => unreachable!("val() called on a Sorted cell"),
        }
    }

    /// The median of the cell's ascending score list. Panics on a `Scalar` cell.
    pub fn median(&self) -> f64 {
        match self {
            Cell::Sorted { scores } => {
                let n = scores.len();
                if n % 2 == 1 {
                    scores[n / 2]
                } else {
                    (scores[n / 2 - 1] + scores[n / 2]) / 2.0
                }
            }
            Cell::Scalar { .. } => unreachable!("median() called on a Scalar cell"),
        }
    }
}

#[cfg(test)]
#[path = "reduction_tests.rs"]
mod tests;
