//! Common utilities for benchmarks

use criterion::Criterion;
use pprof::criterion::{Output, PProfProfiler};
use strata_core::types::{Mapping, Value};

/// Configure criterion with flamegraph profiling support
pub fn criterion_config() -> Criterion {
    Criterion::default()
        .warm_up_time(std::time::Duration::from_secs(3))
        .measurement_time(std::time::Duration::from_secs(10))
        .sample_size(100)
        .with_profiler(PProfProfiler::new(100, Output::Flamegraph(None)))
}

/// Build a mapping `width` keys wide and `depth` levels deep.
///
/// Leaves are integers offset by `seed`, so two trees with different seeds
/// share every key but disagree on every leaf.
pub fn nested_mapping(width: usize, depth: usize, seed: i64) -> Mapping {
    (0..width)
        .map(|i| {
            let value = if depth <= 1 {
                Value::Integer(i as i64 + seed)
            } else {
                Value::Mapping(nested_mapping(width, depth - 1, seed))
            };
            (format!("key_{}", i), value)
        })
        .collect()
}
