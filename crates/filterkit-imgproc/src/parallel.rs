use std::str::FromStr;

/// Number of pixels from which [`ExecutionStrategy::Auto`] switches to the rayon pool.
pub const AUTO_PARALLEL_THRESHOLD: usize = 100_000;

/// Controls how filter sweeps are executed.
///
/// Every strategy produces exactly the same samples, only the scheduling differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Use the global rayon thread pool, one task per row or column.
    Parallel,

    /// Parallel for images of at least [`AUTO_PARALLEL_THRESHOLD`] pixels, serial otherwise.
    #[default]
    Auto,
}

impl ExecutionStrategy {
    /// Whether an image with `num_pixels` pixels should be processed in parallel.
    pub fn is_parallel(&self, num_pixels: usize) -> bool {
        match self {
            ExecutionStrategy::Serial => false,
            ExecutionStrategy::Parallel => true,
            ExecutionStrategy::Auto => num_pixels >= AUTO_PARALLEL_THRESHOLD,
        }
    }
}

impl FromStr for ExecutionStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "serial" => Ok(ExecutionStrategy::Serial),
            "parallel" => Ok(ExecutionStrategy::Parallel),
            "auto" => Ok(ExecutionStrategy::Auto),
            other => Err(format!(
                "unknown execution strategy '{other}', expected serial, parallel or auto"
            )),
        }
    }
}
