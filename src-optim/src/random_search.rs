//! Uniform random search inside the region of interest

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use optbench_problem::Problem;

use crate::Report;

/// Evaluate `budget` uniform points and keep the best one.
///
/// The suggested initial solution is always the first point probed.
/// Multi-objective problems are handled by selecting on the sum of the
/// objective vector, which reduces to the plain objective for the
/// single-objective case.
pub fn random_search(problem: &mut Problem, budget: u64, seed: u64) -> Report {
    assert!(budget > 0, "random search needs a positive evaluation budget");
    let n = problem.number_of_variables();
    let lower = problem.lower_bounds().clone();
    let upper = problem.upper_bounds().clone();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut y = vec![0.0; problem.number_of_objectives()];
    let start = problem.evaluations();

    let mut best_x = problem.initial_solution();
    problem.evaluate_into(&best_x, &mut y);
    let mut best_value: f64 = y.iter().sum();

    while problem.evaluations() - start < budget {
        let x = Array1::from_iter((0..n).map(|j| rng.random_range(lower[j]..upper[j])));
        problem.evaluate_into(&x, &mut y);
        let value: f64 = y.iter().sum();
        if value < best_value {
            best_value = value;
            best_x = x;
        }
    }

    if problem.accepts_recommendations() {
        problem.recommend_solution(&best_x);
    }

    let nfev = problem.evaluations() - start;
    Report {
        x: best_x,
        fun: best_value,
        success: true,
        message: "evaluation budget exhausted".into(),
        nit: nfev as usize,
        nfev,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bowl(dimension: usize) -> Problem {
        let mut problem = Problem::from_function(dimension, |x: &Array1<f64>| {
            x.iter().map(|v| v * v).sum()
        });
        problem.set_uniform_bounds(-5.0, 5.0);
        problem.set_id("bowl");
        problem
    }

    #[test]
    fn test_budget_is_consumed_exactly() {
        let mut problem = bowl(2);
        let report = random_search(&mut problem, 50, 7);
        assert_eq!(problem.evaluations(), 50);
        assert_eq!(report.nfev, 50);
        assert!(report.fun.is_finite());
    }

    #[test]
    fn test_first_probe_is_the_initial_solution() {
        let mut problem = bowl(3);
        problem.set_initial_solution(Array1::from_elem(3, 0.5));
        let report = random_search(&mut problem, 1, 1);
        assert_eq!(report.fun, 0.75);
        assert_eq!(report.x, Array1::from_elem(3, 0.5));
    }

    #[test]
    fn test_seed_makes_runs_identical() {
        let first = random_search(&mut bowl(4), 200, 99);
        let second = random_search(&mut bowl(4), 200, 99);
        assert_eq!(first.fun, second.fun);
        assert_eq!(first.x, second.x);
    }

    #[test]
    fn test_search_improves_over_the_center_start() {
        // The center of the bounds is already the optimum here, so move it
        let mut problem = bowl(2);
        problem.set_initial_solution(Array1::from_elem(2, 4.0));
        let report = random_search(&mut problem, 500, 3);
        assert!(report.fun < 32.0);
    }
}
