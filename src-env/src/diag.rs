//! Stderr diagnostics
//!
//! Suites and observers report recoverable configuration problems (bad
//! option values, ambiguous selections) on stderr and carry on. Setting
//! OPTBENCH_QUIET to anything but "0" silences them, which keeps test
//! output readable.

use std::env;

/// True when OPTBENCH_QUIET is set to a non-empty value other than "0"
pub fn is_quiet() -> bool {
    env::var_os("OPTBENCH_QUIET").is_some_and(|v| !v.is_empty() && v != "0")
}

/// Print a warning on stderr unless OPTBENCH_QUIET is set
///
/// # Example
///
/// ```
/// optbench_env::diag::warning("option 'instance_ids' has no valid values and is ignored");
/// ```
pub fn warning(msg: &str) {
    if !is_quiet() {
        eprintln!("OPTBENCH WARNING: {msg}");
    }
}
