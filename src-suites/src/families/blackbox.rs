//! The blackbox suite: ten shifted, warped single-objective functions.
//!
//! Every instance draws its optimum location and optimal value from the
//! instance generator, then wraps a raw function in the corresponding
//! transform chain. The known optimum is carried through every layer,
//! so `best_parameter` and `best_value` stay exact for the outermost
//! problem.

use ndarray::Array1;

use optbench_functions::{
    attractive_sector, bent_cigar, different_powers, ellipsoid, linear_slope, rastrigin,
    rosenbrock, schwefel, sphere,
};
use optbench_problem::{
    asymmetrize_variables, oscillate_variables, power_objective, rotate_variables,
    scale_variables, shift_objective, shift_variables, Problem,
};

use super::ProblemFamily;
use crate::instances::{instance_rng, random_offset, random_rotation, random_target};

pub struct BlackboxFamily;

const DIMENSIONS: [usize; 6] = [2, 3, 5, 10, 20, 40];

impl ProblemFamily for BlackboxFamily {
    fn name(&self) -> &'static str {
        "blackbox"
    }

    fn dimensions(&self) -> &[usize] {
        &DIMENSIONS
    }

    fn number_of_functions(&self) -> usize {
        10
    }

    fn default_instances(&self) -> &'static str {
        "year: 2025"
    }

    fn instances_by_year(&self, year: i64) -> Option<&'static str> {
        match year {
            2023 => Some("1-5"),
            2024 => Some("1-10"),
            2025 => Some("1-15"),
            _ => None,
        }
    }

    fn problem(&self, function: usize, dimension: usize, instance: usize) -> Problem {
        blackbox_problem(function, dimension, instance)
    }
}

/// Raw function with bounds and an evaluated optimum, ready for wrapping.
fn raw(
    dimension: usize,
    f: fn(&Array1<f64>) -> f64,
    best: Array1<f64>,
    lower: f64,
    upper: f64,
) -> Problem {
    let mut problem = Problem::from_function(dimension, f);
    problem.set_uniform_bounds(lower, upper);
    problem.set_best_parameter(best);
    problem.evaluate_best_parameter();
    problem
}

/// Build one cell of the blackbox grid.
///
/// Also the component constructor of the bi-objective suite, which is
/// why it is visible crate-wide.
pub(crate) fn blackbox_problem(function: usize, dimension: usize, instance: usize) -> Problem {
    let mut rng = instance_rng(function, dimension, instance);
    let fopt = random_target(&mut rng);

    let (problem, short) = match function {
        1 => {
            let xopt = random_offset(&mut rng, dimension, 4.0);
            let base = raw(dimension, sphere, Array1::zeros(dimension), -5.0, 5.0);
            (shift_variables(base, xopt, false), "sphere")
        }
        2 => {
            let xopt = random_offset(&mut rng, dimension, 4.0);
            let base = raw(dimension, ellipsoid, Array1::zeros(dimension), -5.0, 5.0);
            let warped = oscillate_variables(base);
            (shift_variables(warped, xopt, false), "ellipsoid")
        }
        3 => {
            let xopt = random_offset(&mut rng, dimension, 4.0);
            let base = raw(dimension, rastrigin, Array1::zeros(dimension), -5.0, 5.0);
            let warped = oscillate_variables(asymmetrize_variables(base, 0.2));
            (shift_variables(warped, xopt, false), "rastrigin")
        }
        4 => {
            let xopt = random_offset(&mut rng, dimension, 3.0);
            let gamma = 1.0 + (dimension as f64).sqrt() / 8.0;
            let base = raw(dimension, rosenbrock, Array1::ones(dimension), -5.0, 5.0);
            let scaled = scale_variables(base, Array1::from_elem(dimension, gamma));
            (shift_variables(scaled, xopt, false), "rosenbrock")
        }
        5 => {
            let base = raw(
                dimension,
                linear_slope,
                Array1::from_elem(dimension, 5.0),
                -5.0,
                5.0,
            );
            (base, "linear_slope")
        }
        6 => {
            let xopt = random_offset(&mut rng, dimension, 4.0);
            let base = raw(dimension, attractive_sector, Array1::zeros(dimension), -5.0, 5.0);
            let shifted = shift_variables(base, xopt, false);
            (power_objective(shifted, 0.9), "attractive_sector")
        }
        7 => {
            let best = Array1::from_elem(dimension, 420.9687462275036);
            let base = raw(dimension, schwefel, best, -500.0, 500.0);
            (base, "schwefel")
        }
        8 => {
            let xopt = random_offset(&mut rng, dimension, 4.0);
            let base = raw(dimension, different_powers, Array1::zeros(dimension), -5.0, 5.0);
            (shift_variables(base, xopt, false), "different_powers")
        }
        9 => {
            let xopt = random_offset(&mut rng, dimension, 4.0);
            let rotation = random_rotation(&mut rng, dimension);
            let base = raw(dimension, ellipsoid, Array1::zeros(dimension), -5.0, 5.0);
            let warped = rotate_variables(oscillate_variables(base), rotation);
            (shift_variables(warped, xopt, false), "rotated_ellipsoid")
        }
        10 => {
            let xopt = random_offset(&mut rng, dimension, 4.0);
            let rotation = random_rotation(&mut rng, dimension);
            let base = raw(dimension, bent_cigar, Array1::zeros(dimension), -5.0, 5.0);
            let warped = rotate_variables(asymmetrize_variables(base, 0.5), rotation);
            (shift_variables(warped, xopt, false), "bent_cigar")
        }
        _ => panic!("the blackbox suite has no function {function}"),
    };

    let mut problem = shift_objective(problem, fopt);
    problem.set_id(format!(
        "blackbox_f{function:03}_i{instance:02}_d{dimension:02}"
    ));
    problem.set_name(format!(
        "blackbox suite problem f{function} instance {instance} in {dimension}D"
    ));
    problem.set_problem_type(short);
    problem
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optimum_is_carried_through_every_chain() {
        for function in 1..=10 {
            let mut problem = blackbox_problem(function, 5, 3);
            let best = problem.best_parameter().unwrap().clone();
            let expected = problem.best_value().unwrap()[0];
            let y = problem.evaluate(&best);
            assert!(
                (y[0] - expected).abs() < 1e-9,
                "function {function}: evaluating the optimum gave {} instead of {}",
                y[0],
                expected
            );
        }
    }

    #[test]
    fn test_optimum_is_inside_the_bounds() {
        for function in 1..=10 {
            let problem = blackbox_problem(function, 10, 1);
            let best = problem.best_parameter().unwrap();
            let lower = problem.lower_bounds();
            let upper = problem.upper_bounds();
            for i in 0..10 {
                assert!(best[i] >= lower[i] && best[i] <= upper[i], "function {function}");
            }
        }
    }

    #[test]
    fn test_instances_differ_and_rebuilds_agree() {
        let first = blackbox_problem(2, 5, 1);
        let second = blackbox_problem(2, 5, 2);
        assert_ne!(first.best_parameter().unwrap(), second.best_parameter().unwrap());

        let rebuilt = blackbox_problem(2, 5, 1);
        assert_eq!(first.best_parameter().unwrap(), rebuilt.best_parameter().unwrap());
        assert_eq!(first.best_value().unwrap(), rebuilt.best_value().unwrap());
    }

    #[test]
    fn test_identity_format() {
        let problem = blackbox_problem(3, 5, 2);
        assert_eq!(problem.id(), "blackbox_f003_i02_d05");
        assert_eq!(problem.name(), "blackbox suite problem f3 instance 2 in 5D");
        assert_eq!(problem.problem_type(), "rastrigin");
    }

    #[test]
    fn test_counters_start_clean() {
        let problem = blackbox_problem(9, 10, 4);
        assert_eq!(problem.evaluations(), 0);
        assert!(problem.best_observed_value().is_infinite());
    }
}
