//! Rayon thread pool scoping for the captain sweep.

use rayon::ThreadPoolBuilder;

/// Environment variable the serve path consults for its default
/// worker count.
pub const WORKERS_ENV_VAR: &str = "GAFFER_WORKERS";

/// How many worker threads evaluate captain candidates. A count of 0
/// defers to rayon's global pool (one thread per core).
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkerPool {
    pub workers: usize,
}

impl WorkerPool {
    /// Use exactly `n` worker threads; 0 defers to the global pool.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Worker count from `GAFFER_WORKERS`. Unset, empty, or unparsable
    /// values defer to the global pool.
    pub fn from_env() -> Self {
        let workers = std::env::var(WORKERS_ENV_VAR)
            .ok()
            .and_then(|value| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        Self { workers }
    }

    /// Run `f` under this pool's thread budget. A fixed count builds a
    /// scoped pool that is torn down when `f` returns, so concurrent
    /// callers never share or resize each other's budget.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        match self.workers {
            0 => f(),
            n => {
                let pool = ThreadPoolBuilder::new()
                    .num_threads(n)
                    .build()
                    .expect("rayon thread pool");
                pool.install(f)
            }
        }
    }
}
