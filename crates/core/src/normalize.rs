/// Per-input-file score rescaling applied before folding a score-based
/// fusion's contributions. Pure over one file's entry set; never couples
/// across files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    MinMax,
    Sum,
    MinSum,
    ZScore,
}

impl Normalization {
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "minmax" => Some(Normalization::MinMax),
            "sum" => Some(Normalization::Sum),
            "minsum" => Some(Normalization::MinSum),
            "std" => Some(Normalization::ZScore),
            _ => None,
        }
    }
}

/// Rescale `scores` in place according to `normalization`. Returns silently,
/// leaving scores untouched, whenever the transform would divide by zero.
pub fn normalize(scores: &mut [f64], normalization: Normalization) {
    match normalization {
        Normalization::MinMax => min_max(scores),
        Normalization::Sum => sum(scores),
        Normalization::MinSum => min_sum(scores),
        Normalization::ZScore => z_score(scores),
    }
}

fn min_max(scores: &mut [f64]) {
    if scores.is_empty() {
        return;
    }
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = max - min;
    if range == 0.0 {
        return;
    }
    for s in scores.iter_mut() {
        *s = (*s - min) / range;
    }
}

fn sum(scores: &mut [f64]) {
    let total: f64 = scores.iter().map(|s| s.abs()).sum();
    if total == 0.0 {
        return;
    }
    for s in scores.iter_mut() {
        *s = s.abs() / total;
    }
}

/// `(s - min) / sum(s - min)`, the variant preferred over the source's
/// inconsistent revisions of `minsum` (see the design notes).
fn min_sum(scores: &mut [f64]) {
    if scores.is_empty() {
        return;
    }
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let total: f64 = scores.iter().map(|s| s - min).sum();
    if total == 0.0 {
        return;
    }
    for s in scores.iter_mut() {
        *s = (*s - min) / total;
    }
}

fn z_score(scores: &mut [f64]) {
    if scores.is_empty() {
        return;
    }
    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let stddev = variance.sqrt();
    if stddev == 0.0 {
        return;
    }
    for s in scores.iter_mut() {
        *s = (*s - mean) / stddev;
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
