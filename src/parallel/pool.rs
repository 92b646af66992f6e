//! Rayon thread-pool configuration for batch solving.
//!
//! Roster-day groups are independent (the presence set is read-only once
//! built, candidate pools are constructed per group), so the batch runner
//! fans them out with [WorkerPool::install].

use rayon::ThreadPoolBuilder;

/// Configures how many worker threads solve groups concurrently.
#[derive(Debug, Clone, Copy)]
pub struct WorkerPool {
    /// Number of worker threads. If 0, use Rayon's default (all cores).
    pub workers: usize,
}

impl Default for WorkerPool {
    fn default() -> Self {
        Self { workers: 0 }
    }
}

impl WorkerPool {
    /// Use exactly `n` worker threads.
    pub fn with_workers(n: usize) -> Self {
        Self { workers: n }
    }

    /// Run a closure on a pool with this worker count. With
    /// [workers](WorkerPool::workers) at 0 the global Rayon pool is used;
    /// otherwise a temporary pool with that many threads is built.
    pub fn install<F, R>(&self, f: F) -> R
    where
        F: FnOnce() -> R + Send,
        R: Send,
    {
        if self.workers == 0 {
            f()
        } else {
            let pool = ThreadPoolBuilder::new()
                .num_threads(self.workers)
                .build()
                .expect("Rayon thread pool");
            pool.install(f)
        }
    }
}
