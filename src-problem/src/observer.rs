//! Observer interface
//!
//! An observer gets every problem a suite hands out, and may wrap it with a
//! recording layer before the optimizer sees it. The wrapped problem is
//! indistinguishable from the bare one; whatever the observer records is
//! written out when `finish` is called at the end of a run.

use crate::problem::Problem;

/// Hook between suite iteration and the optimizer
pub trait Observer {
    /// Short name, e.g. `"none"` or `"trace"`
    fn name(&self) -> &str;

    /// Wrap (or pass through) a freshly built problem
    fn attach(&mut self, problem: Problem) -> Problem {
        problem
    }

    /// Flush whatever was recorded; called once after the run
    fn finish(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

/// Observer that records nothing and wraps nothing
pub struct NullObserver;

impl Observer for NullObserver {
    fn name(&self) -> &str {
        "none"
    }
}
