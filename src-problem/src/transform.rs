//! Decoration machinery
//!
//! A transform owns its state (offsets, matrices, scratch buffers) and sits
//! between an outer [`Problem`] and the inner problem it decorates. Every
//! capability has a provided method that forwards unchanged to the inner
//! problem, so a concrete transform overrides only the operations it
//! actually modifies.

use ndarray::Array1;

use crate::problem::{Evaluator, Problem};

/// A layer in a decoration chain
pub trait Transform: 'static {
    /// Objective path; defaults to forwarding to the inner problem
    fn evaluate_objective(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        inner.evaluate_into(x, y);
    }

    /// Constraint path; defaults to forwarding to the inner problem
    fn evaluate_constraints(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        inner.evaluate_constraints_into(x, y);
    }

    /// Recommendation path; defaults to forwarding to the inner problem
    fn recommend_solution(&mut self, inner: &mut Problem, x: &Array1<f64>) {
        inner.recommend_solution(x);
    }

    /// Defaults to whatever the inner problem reports
    fn accepts_recommendations(&self, inner: &Problem) -> bool {
        inner.accepts_recommendations()
    }
}

/// A transform bound to the problem it decorates
///
/// Field order fixes the teardown order: transform state drops before the
/// inner problem.
pub(crate) struct Decorated<T: Transform> {
    transform: T,
    inner: Problem,
}

impl<T: Transform> Evaluator for Decorated<T> {
    fn evaluate_objective(&mut self, x: &Array1<f64>, y: &mut [f64]) {
        self.transform.evaluate_objective(&mut self.inner, x, y);
    }

    fn evaluate_constraints(&mut self, x: &Array1<f64>, y: &mut [f64]) {
        self.transform.evaluate_constraints(&mut self.inner, x, y);
    }

    fn recommend_solution(&mut self, x: &Array1<f64>) {
        self.transform.recommend_solution(&mut self.inner, x);
    }

    fn accepts_recommendations(&self) -> bool {
        self.transform.accepts_recommendations(&self.inner)
    }
}

impl Problem {
    /// Decorate `inner` with `transform`
    ///
    /// The outer problem snapshots the inner metadata at call time; it is a
    /// copy, not a live view, and transform constructors adjust it where the
    /// transform moves the optimum or the bounds. Counters start fresh, so
    /// the outer problem reports only what passes through it.
    pub fn wrap<T: Transform>(inner: Problem, transform: T) -> Problem {
        Problem {
            number_of_variables: inner.number_of_variables,
            number_of_objectives: inner.number_of_objectives,
            number_of_constraints: inner.number_of_constraints,
            lower_bounds: inner.lower_bounds.clone(),
            upper_bounds: inner.upper_bounds.clone(),
            best_parameter: inner.best_parameter.clone(),
            best_value: inner.best_value.clone(),
            initial_solution: inner.initial_solution.clone(),
            final_target_delta: inner.final_target_delta,
            evaluations: 0,
            best_observed_value: f64::INFINITY,
            best_observed_evaluation: 0,
            name: inner.name.clone(),
            id: inner.id.clone(),
            problem_type: inner.problem_type.clone(),
            evaluator: Box::new(Decorated { transform, inner }),
        }
    }
}
