//! The toy suite: six classic functions in their raw form.
//!
//! No shifts, no instance randomness, a single instance per function.
//! Useful for smoke tests and as the smallest possible benchmark.

use ndarray::Array1;

use optbench_functions::{discus, ellipsoid, linear_slope, rastrigin, rosenbrock, sphere};
use optbench_problem::Problem;

use super::ProblemFamily;

pub struct ToyFamily;

const DIMENSIONS: [usize; 5] = [2, 3, 5, 10, 20];

impl ProblemFamily for ToyFamily {
    fn name(&self) -> &'static str {
        "toy"
    }

    fn dimensions(&self) -> &[usize] {
        &DIMENSIONS
    }

    fn number_of_functions(&self) -> usize {
        6
    }

    fn default_instances(&self) -> &'static str {
        "instances: 1"
    }

    fn problem(&self, function: usize, dimension: usize, _instance: usize) -> Problem {
        let (f, short): (fn(&Array1<f64>) -> f64, &str) = match function {
            1 => (sphere, "sphere"),
            2 => (ellipsoid, "ellipsoid"),
            3 => (rastrigin, "rastrigin"),
            4 => (rosenbrock, "rosenbrock"),
            5 => (linear_slope, "linear_slope"),
            6 => (discus, "discus"),
            _ => panic!("the toy suite has no function {function}"),
        };
        let best = match function {
            4 => Array1::ones(dimension),
            5 => Array1::from_elem(dimension, 5.0),
            _ => Array1::zeros(dimension),
        };
        let mut problem = Problem::from_function(dimension, f);
        problem.set_id(format!("{short}_d{dimension:02}"));
        problem.set_name(format!("toy suite {} function", short.replace('_', " ")));
        problem.set_problem_type(short);
        problem.set_uniform_bounds(-5.0, 5.0);
        problem.set_best_parameter(best);
        problem.evaluate_best_parameter();
        problem
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_and_optimum() {
        let family = ToyFamily;
        let mut problem = family.problem(1, 3, 1);
        assert_eq!(problem.id(), "sphere_d03");
        assert_eq!(problem.name(), "toy suite sphere function");
        assert_eq!(problem.best_value().unwrap()[0], 0.0);
        assert_eq!(problem.evaluations(), 0);
        let y = problem.evaluate(&Array1::from_vec(vec![1.0, 2.0, 2.0]));
        assert_eq!(y[0], 9.0);
    }

    #[test]
    fn test_rosenbrock_optimum_at_ones() {
        let family = ToyFamily;
        let problem = family.problem(4, 5, 1);
        assert_eq!(problem.best_parameter().unwrap(), &Array1::ones(5));
        assert!(problem.best_value().unwrap()[0].abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "has no function")]
    fn test_unknown_function_panics() {
        ToyFamily.problem(7, 2, 1);
    }
}
