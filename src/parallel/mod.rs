pub mod batch;
pub mod pool;

pub use batch::{batch_ranges, run_sweep_batched};
pub use pool::WorkerPool;
