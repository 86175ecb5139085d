/// Name of the environment variable that controls log verbosity.
pub const PROGRAM_LOG_LEVEL: &str = "POLYFUSE_LOG";

/// Default output depth (`-d`) when the CLI flag is not given.
pub const DEFAULT_DEPTH: usize = 1000;

/// Default RBC persistence parameter `phi` (`-p`) when not given.
pub const DEFAULT_PHI: f64 = 0.8;

/// Default RRF constant `k` (`-k`) when not given.
pub const DEFAULT_RRF_K: u32 = 60;

/// Initial per-topic accumulator map capacity, before the first rehash.
pub const INITIAL_TOPIC_CAPACITY: usize = 1000;

/// Load factor above which a hash map rehashes to a larger table.
pub const LOAD_FACTOR: f64 = 0.75;

/// Longest input line accepted by the TREC run-file parser, in bytes.
pub const MAX_LINE_LEN: usize = 4096;
