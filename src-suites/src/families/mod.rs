//! Problem families: the catalogues behind the suite names.
//!
//! A family describes a grid of problems indexed by function, dimension
//! and instance, and knows how to construct any single cell of that
//! grid. The [`Suite`](crate::Suite) engine does the bookkeeping; the
//! family does the building.

use optbench_problem::Problem;

mod biobj;
mod blackbox;
mod constrained;
mod toy;

pub use biobj::BlackboxBiobjFamily;
pub use blackbox::BlackboxFamily;
pub use constrained::BlackboxConstrainedFamily;
pub use toy::ToyFamily;

/// One family of benchmark problems.
pub trait ProblemFamily {
    /// Name the suite is registered under.
    fn name(&self) -> &'static str;

    /// Supported dimensions, in ascending order.
    fn dimensions(&self) -> &[usize];

    /// Number of functions; functions are numbered from 1.
    fn number_of_functions(&self) -> usize;

    /// Instance specification used when the caller passes none.
    fn default_instances(&self) -> &'static str;

    /// Instance list frozen for one benchmark year, when the family
    /// versions its instances that way.
    fn instances_by_year(&self, _year: i64) -> Option<&'static str> {
        None
    }

    /// Build the problem for one (function, dimension, instance) cell.
    ///
    /// Panics when the indices do not name a cell of this family; the
    /// suite engine only passes indices from its own axes.
    fn problem(&self, function: usize, dimension: usize, instance: usize) -> Problem;
}

/// Look up a family by suite name.
pub(crate) fn by_name(name: &str) -> Option<Box<dyn ProblemFamily>> {
    match name {
        "toy" => Some(Box::new(ToyFamily)),
        "blackbox" => Some(Box::new(BlackboxFamily)),
        "blackbox-biobj" => Some(Box::new(BlackboxBiobjFamily)),
        "blackbox-constrained" => Some(Box::new(BlackboxConstrainedFamily)),
        _ => None,
    }
}

/// Names of all registered suites.
pub fn known_suites() -> &'static [&'static str] {
    &["toy", "blackbox", "blackbox-biobj", "blackbox-constrained"]
}
