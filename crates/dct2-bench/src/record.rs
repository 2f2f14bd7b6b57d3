//! Benchmark result records

use std::time::Duration;

/// Timing outcome for one tested size.
///
/// Holds the minimum observed wall-clock duration over the repeated
/// trials of each kernel variant. Produced once per benchmark invocation
/// and immutable afterward.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkRecord {
    /// Matrix side length N
    pub size: usize,
    /// Best trial duration of the O(N^3) variant
    pub naive: Duration,
    /// Best trial duration of the O(N^2 log N) variant
    pub fast: Duration,
}

impl BenchmarkRecord {
    /// Naive-over-fast duration ratio.
    pub fn speedup(&self) -> f64 {
        self.naive.as_secs_f64() / self.fast.as_secs_f64()
    }
}
