//! Shipped problem transforms
//!
//! Coordinate maps (shift, scale, rotate, oscillate, asymmetrize) rewrite
//! the point before the inner problem sees it, on both the objective and
//! the constraint path. Objective maps (shift, power) rewrite the returned
//! value of single-objective problems. Constructors adjust the metadata
//! snapshot wherever the transform moves the optimum or the bounds.

mod asymmetrize_variables;
mod oscillate_variables;
mod power_objective;
mod rotate_variables;
mod scale_variables;
mod shift_objective;
mod shift_variables;

pub use asymmetrize_variables::asymmetrize_variables;
pub use oscillate_variables::oscillate_variables;
pub use power_objective::power_objective;
pub use rotate_variables::rotate_variables;
pub use scale_variables::scale_variables;
pub use shift_objective::shift_objective;
pub use shift_variables::shift_variables;
