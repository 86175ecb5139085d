mod config;
pub mod logging;

pub use config::{
    DEFAULT_DEPTH, DEFAULT_PHI, DEFAULT_RRF_K, INITIAL_TOPIC_CAPACITY, LOAD_FACTOR, MAX_LINE_LEN,
    PROGRAM_LOG_LEVEL,
};
pub use logging::init;
