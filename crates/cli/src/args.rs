use std::path::PathBuf;

use clap::Parser;

use polyfuse_runtime::{DEFAULT_DEPTH, DEFAULT_PHI, DEFAULT_RRF_K};

/// Batch rank-fusion of TREC run files.
///
/// Example:
///   polyfuse combsum -n minmax run1.trec run2.trec
///   polyfuse rrf -k 60 -d 100 run1.trec run2.trec run3.trec
#[derive(Debug, Parser)]
#[command(name = "polyfuse", version, about)]
pub struct Cli {
    /// Fusion algorithm: borda, combanz, combmax, combmed, combmin, combmnz,
    /// combsum, isr, logisr, rbc, rrf.
    pub fusion: String,

    /// Run files to fuse, in the order their `-w` weights (if given) apply.
    #[arg(required = true, num_args = 1..)]
    pub runs: Vec<PathBuf>,

    /// Output depth: how many documents to emit per topic.
    #[arg(short = 'd', long, default_value_t = DEFAULT_DEPTH)]
    pub depth: usize,

    /// Run identifier written as the last output column.
    ///
    /// Defaults to `polyfuse-<fusion>` when omitted.
    #[arg(short = 'r', long = "run-id")]
    pub run_id: Option<String>,

    /// Enable tie-prevention scoring.
    #[arg(short = 't', long = "tie-prevention")]
    pub tie_prevention: bool,

    /// Score normalization for score-based fusions: minmax, sum, minsum, std.
    #[arg(short = 'n', long)]
    pub normalization: Option<String>,

    /// RBC persistence parameter, in (0, 1).
    #[arg(short = 'p', long, default_value_t = DEFAULT_PHI)]
    pub phi: f64,

    /// RRF constant.
    #[arg(short = 'k', long = "rrf-k", default_value_t = DEFAULT_RRF_K)]
    pub rrf_k: u32,

    /// Per-input-file weight; repeat once per run file, in the same order.
    #[arg(short = 'w', long = "weight")]
    pub weights: Vec<f64>,
}
