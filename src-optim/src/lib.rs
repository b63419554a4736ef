//! Baseline optimizers for benchmark problems
//!
//! Two solvers drive a [`Problem`](optbench_problem::Problem) through its
//! mutable evaluation interface: a uniform [`random_search`] and a
//! self-contained [`differential_evolution`]. Both respect the problem's
//! evaluation budget, report the best point found, and pass the incumbent
//! to problems that accept recommendations.

use ndarray::Array1;

pub mod de;
pub mod random_search;

pub use de::{differential_evolution, Crossover, DeConfig, Init, Mutation, Strategy};
pub use random_search::random_search;

/// Outcome of one optimizer run on one problem
#[derive(Clone)]
pub struct Report {
    /// Best point found
    pub x: Array1<f64>,
    /// Value of the best point, penalties included for constrained problems
    pub fun: f64,
    /// Whether the run ended by convergence rather than running out
    pub success: bool,
    /// Human-readable stop reason
    pub message: String,
    /// Generations (or draws, for random search) performed
    pub nit: usize,
    /// Objective evaluations spent by this run
    pub nfev: u64,
}

impl std::fmt::Debug for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Report")
            .field("x", &format!("len={}", self.x.len()))
            .field("fun", &self.fun)
            .field("success", &self.success)
            .field("message", &self.message)
            .field("nit", &self.nit)
            .field("nfev", &self.nfev)
            .finish()
    }
}

pub(crate) fn argmin(values: &[f64]) -> (usize, f64) {
    let mut best_index = 0;
    let mut best_value = values[0];
    for (index, &value) in values.iter().enumerate() {
        if value < best_value {
            best_value = value;
            best_index = index;
        }
    }
    (best_index, best_value)
}
