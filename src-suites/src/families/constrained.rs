//! The constrained suite: six objectives under linear constraints.
//!
//! Eighteen functions cover six objective types, each with three
//! constraint counts. Construction works backwards from the optimum:
//! the objective is shifted so its gradient at the origin is nonzero,
//! the constraints are arranged around the matching feasible direction
//! so the origin becomes the constrained optimum, and a final variable
//! shift moves that optimum to the instance location.

use ndarray::Array1;

use optbench_functions::{
    bent_cigar, bent_cigar_gradient, discus, discus_gradient, ellipsoid, ellipsoid_gradient,
    linear_slope, linear_slope_gradient, rastrigin, sphere, sphere_gradient,
};
use optbench_problem::{
    asymmetrize_variables, oscillate_variables, shift_objective, shift_variables, Problem,
};

use super::ProblemFamily;
use crate::instances::{instance_rng, random_offset, random_target};
use crate::linear_constraints::{constraint_gradients, constraints_problem};

pub struct BlackboxConstrainedFamily;

const DIMENSIONS: [usize; 5] = [2, 3, 5, 10, 20];

/// Scale applied to every constraint gradient.
const GRADIENT_SCALE: f64 = 10.0;

impl ProblemFamily for BlackboxConstrainedFamily {
    fn name(&self) -> &'static str {
        "blackbox-constrained"
    }

    fn dimensions(&self) -> &[usize] {
        &DIMENSIONS
    }

    fn number_of_functions(&self) -> usize {
        18
    }

    fn default_instances(&self) -> &'static str {
        "instances: 1-3"
    }

    fn problem(&self, function: usize, dimension: usize, instance: usize) -> Problem {
        assert!(
            (1..=18).contains(&function),
            "the blackbox-constrained suite has no function {function}"
        );
        let objective_type = (function - 1) / 3 + 1;
        let constraint_count = match (function - 1) % 3 {
            0 => 1,
            1 => dimension.div_ceil(2),
            _ => dimension + 1,
        };

        let mut rng = instance_rng(function, dimension, instance);

        // The unconstrained optimum moves off the origin so the
        // objective gradient there is nonzero.
        let offset = loop {
            let candidate = random_offset(&mut rng, dimension, 1.0);
            if candidate.dot(&candidate).sqrt() > 1e-2 {
                break candidate;
            }
        };
        let fopt = random_target(&mut rng);
        let xopt = random_offset(&mut rng, dimension, 4.0);

        let (f, gradient, short): (
            fn(&Array1<f64>) -> f64,
            Option<fn(&Array1<f64>) -> Array1<f64>>,
            &str,
        ) = match objective_type {
            1 => (sphere, Some(sphere_gradient), "sphere"),
            2 => (ellipsoid, Some(ellipsoid_gradient), "ellipsoid"),
            3 => (linear_slope, Some(linear_slope_gradient), "linear_slope"),
            4 => (discus, Some(discus_gradient), "discus"),
            5 => (bent_cigar, Some(bent_cigar_gradient), "bent_cigar"),
            _ => (rastrigin, None, "rastrigin"),
        };

        let mut base = Problem::from_function(dimension, f);
        base.set_uniform_bounds(-5.0, 5.0);
        let objective = shift_variables(base, offset.clone(), false);

        // Feasible direction: the ascent direction of the shifted
        // objective at the origin, normalized. Rastrigin has no usable
        // gradient there, the all-ones diagonal stands in for it.
        let feasible_direction = match gradient {
            Some(g) => {
                let slope = g(&offset.mapv(|v| -v));
                let norm = slope.dot(&slope).sqrt();
                assert!(norm > 1e-12, "objective gradient vanished at the origin");
                slope.mapv(|v| v / norm)
            }
            None => Array1::from_elem(dimension, 1.0 / (dimension as f64).sqrt()),
        };

        let gradients =
            constraint_gradients(&mut rng, &feasible_direction, constraint_count, GRADIENT_SCALE);
        let constraints = constraints_problem(dimension, gradients);

        let mut stacked = match Problem::stack(objective, constraints) {
            Ok(p) => p,
            Err(e) => panic!("stacking a constrained problem failed: {e}"),
        };
        stacked.set_best_parameter(Array1::zeros(dimension));
        stacked.evaluate_best_parameter();

        let warped = match objective_type {
            2 | 4 => oscillate_variables(stacked),
            5 => asymmetrize_variables(stacked, 0.5),
            6 => oscillate_variables(asymmetrize_variables(stacked, 0.2)),
            _ => stacked,
        };

        let shifted = shift_variables(warped, xopt.clone(), false);
        let mut problem = shift_objective(shifted, fopt);

        let x0 = feasible_starting_point(&mut problem, &xopt, &feasible_direction);
        problem.set_initial_solution(x0);
        problem.set_id(format!(
            "blackbox-constrained_f{function:03}_i{instance:02}_d{dimension:02}"
        ));
        problem.set_name(format!(
            "blackbox-constrained suite problem f{function} instance {instance} in {dimension}D"
        ));
        problem.set_problem_type(format!("{short}_linear"));
        problem
    }
}

/// Strictly feasible point near the optimum.
///
/// Walks from the optimum along the feasible direction, halving the
/// step while any constraint is violated. The nonlinear warps preserve
/// coordinate signs, so a short enough step always lands feasible; the
/// optimum itself is the fallback, it sits on the boundary.
fn feasible_starting_point(
    problem: &mut Problem,
    xopt: &Array1<f64>,
    feasible_direction: &Array1<f64>,
) -> Array1<f64> {
    let mut step = feasible_direction.clone();
    for _ in 0..40 {
        let candidate = xopt + &step;
        if problem.evaluate_constraints(&candidate).iter().all(|v| *v <= 0.0) {
            return candidate;
        }
        step *= 0.5;
    }
    xopt.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_counts_follow_the_function_number() {
        let family = BlackboxConstrainedFamily;
        let counts: Vec<usize> = (1..=6)
            .map(|function| family.problem(function, 5, 1).number_of_constraints())
            .collect();
        assert_eq!(counts, vec![1, 3, 6, 1, 3, 6]);
    }

    #[test]
    fn test_optimum_is_feasible_and_truthful() {
        let family = BlackboxConstrainedFamily;
        for function in 1..=18 {
            let mut problem = family.problem(function, 5, 2);
            let best = problem.best_parameter().unwrap().clone();

            let constraints = problem.evaluate_constraints(&best);
            assert!(
                constraints.iter().all(|v| *v <= 1e-9),
                "function {function}: optimum violates a constraint"
            );

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
    fn test_initial_solution_is_feasible() {
        let family = BlackboxConstrainedFamily;
        for function in [1, 5, 9, 14, 18] {
            let mut problem = family.problem(function, 3, 1);
            let x0 = problem.initial_solution();
            let constraints = problem.evaluate_constraints(&x0);
            assert!(
                constraints.iter().all(|v| *v <= 0.0),
                "function {function}: initial solution is infeasible"
            );
        }
    }

    #[test]
    fn test_descent_from_the_optimum_is_infeasible() {
        let family = BlackboxConstrainedFamily;
        let mut problem = family.problem(1, 4, 1);
        let best = problem.best_parameter().unwrap().clone();
        let x0 = problem.initial_solution();

        // The initial solution sits along the feasible ascent ray
        let towards = problem.evaluate(&x0)[0];
        let at_best = problem.best_value().unwrap()[0];
        assert!(towards > at_best);

        // Stepping the other way violates the first constraint
        let opposite = &best - &(&x0 - &best);
        let constraints = problem.evaluate_constraints(&opposite);
        assert!(constraints[0] > 0.0);
    }

    #[test]
    fn test_identity_format() {
        let family = BlackboxConstrainedFamily;
        let problem = family.problem(16, 2, 3);
        assert_eq!(problem.id(), "blackbox-constrained_f016_i03_d02");
        assert_eq!(problem.problem_type(), "rastrigin_linear");
        assert_eq!(problem.number_of_objectives(), 1);
    }
}
