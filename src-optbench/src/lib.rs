//! Benchmark driver for black-box optimizers
//!
//! This crate ties the workspace together: it resolves a suite by name,
//! attaches an observer to every problem the suite yields, runs an optimizer
//! under a per-problem evaluation budget and writes traces plus a JSON run
//! summary. The `run_optbench` binary is a thin wrapper around
//! [`benchmark::run_benchmark`].

pub mod benchmark;
pub mod cli;
pub mod error;
pub mod observers;

pub use benchmark::{benchmark, run_benchmark, BenchmarkSummary, OptimizerKind, ProblemResult};
pub use error::BenchError;
pub use observers::{observer_by_name, TraceEvent, TraceObserver, TraceRecord};
