//! Benchmark suites: indexed collections of optimization problems.
//!
//! A [`Suite`] enumerates the problems of one family (a grid of
//! function x dimension x instance combinations) one at a time,
//! constructing each problem lazily and tearing the previous one down
//! before the next is built. Suites are selected by name and can be
//! narrowed with textual options, see [`Suite::new`].

pub mod error;
pub mod families;
pub mod suite;

mod instances;
mod linear_constraints;

pub use error::SuiteError;
pub use families::{known_suites, ProblemFamily};
pub use suite::Suite;
