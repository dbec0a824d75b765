//! Strata benchmarking suite
//!
//! Benchmarks for the recursive merge, the bundled format parsers and
//! end-to-end loading from disk.

pub mod common;

pub use common::*;
