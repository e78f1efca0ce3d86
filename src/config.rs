use std::time::Duration;

/// Hard cap on expansion levels: root and one level of discovered
/// directories. Level-2 hits are reported but never expanded.
pub const MAX_DEPTH: usize = 2;

/// Immutable scan settings, built once in the runner and passed into the
/// enumerator. Never mutated during a run.
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub concurrency: usize,
    pub probe_timeout: Duration,
    pub dir_timeout: Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            concurrency: 20,
            probe_timeout: Duration::from_secs(6),
            dir_timeout: Duration::from_secs(4),
        }
    }
}
