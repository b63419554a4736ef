//! Problem abstraction for benchmark suites
//!
//! A [`Problem`] is an owned, evaluable benchmark instance: metadata (bounds,
//! known optimum, identity strings) plus a boxed capability set behind the
//! [`Evaluator`] trait. Problems compose two ways:
//!
//! - **decoration** via [`Problem::wrap`] and the [`Transform`] trait: a
//!   wrapper problem whose metadata snapshots the inner problem and whose
//!   unchanged capabilities forward to it (see [`transforms`] for the shipped
//!   coordinate and objective maps);
//! - **stacking** via [`Problem::stack`]: two problems over the same domain
//!   become one problem whose objective vector is the concatenation of both.
//!
//! Teardown is structural: dropping the outermost problem drops transform
//! state first, then the chain of inner problems, each exactly once.

pub mod error;
pub mod observer;
pub mod problem;
mod stacked;
pub mod transform;
pub mod transforms;

pub use error::{ProblemError, Result};
pub use observer::{NullObserver, Observer};
pub use problem::{Evaluator, Problem};
pub use transform::Transform;
pub use transforms::{
    asymmetrize_variables, oscillate_variables, power_objective, rotate_variables,
    scale_variables, shift_objective, shift_variables,
};
