//! Environment utilities shared across the optbench workspace
//!
//! Three small concerns live here so that every other crate agrees on them:
//! resolution of the `OPTBENCH_DIR` output root, stderr diagnostics that can
//! be silenced with `OPTBENCH_QUIET`, and the `key: value` option-string
//! mini-language used by suites and observers.

pub mod diag;
pub mod env_utils;
pub mod options;

pub use diag::warning;
pub use env_utils::{EnvError, get_results_dir, results_root};
pub use options::{key_position, parse_ranges, read_int, read_string};
