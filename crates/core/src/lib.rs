mod accumulator;
mod engine;
mod error;
mod fusion;
mod hash;
mod heap;
mod normalize;
mod reduction;
mod topic;
mod weights;

pub use engine::{Configured, Emitted, Engine, Idle, Initialized};
pub use error::CoreError;
pub use fusion::Fusion;
pub use heap::{BoundedHeap, HeapItem};
pub use normalize::{Normalization, normalize};
pub use reduction::{Cell, ReductionPolicy};
pub use weights::WeightTable;
