//! Error type of the benchmark driver

use optbench_env::EnvError;
use optbench_suites::SuiteError;
use thiserror::Error;

/// Everything that can stop a benchmark run before it starts or
/// while its results are written
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("unknown observer '{0}'")]
    UnknownObserver(String),

    #[error("unknown optimizer '{0}'")]
    UnknownOptimizer(String),

    #[error(transparent)]
    Suite(#[from] SuiteError),

    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("could not serialize the run summary: {0}")]
    Summary(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
