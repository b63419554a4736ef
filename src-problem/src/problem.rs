//! The problem core: metadata, counters and capability dispatch

use ndarray::Array1;

/// Capability set of a benchmark problem
///
/// Implementors provide the objective and, where present, the constraint and
/// recommendation operations. The provided defaults panic, which makes
/// invoking an absent capability a loud programming error rather than a
/// silent misread. Teardown is the fourth capability of the set and is
/// expressed structurally through `Drop`.
pub trait Evaluator: 'static {
    /// Write the objective vector for `x` into `y`
    fn evaluate_objective(&mut self, x: &Array1<f64>, y: &mut [f64]);

    /// Write the constraint vector for `x` into `y` (values <= 0 satisfied)
    fn evaluate_constraints(&mut self, _x: &Array1<f64>, _y: &mut [f64]) {
        panic!("this problem does not define a constraint function");
    }

    /// Accept a solution the optimizer currently considers best
    fn recommend_solution(&mut self, _x: &Array1<f64>) {
        panic!("this problem does not accept recommendations");
    }

    /// Whether [`Evaluator::recommend_solution`] may be called
    fn accepts_recommendations(&self) -> bool {
        false
    }
}

/// Adapter turning a plain function into a single-objective evaluator
struct FunctionEvaluator<F> {
    f: F,
}

impl<F: FnMut(&Array1<f64>) -> f64 + 'static> Evaluator for FunctionEvaluator<F> {
    fn evaluate_objective(&mut self, x: &Array1<f64>, y: &mut [f64]) {
        y[0] = (self.f)(x);
    }
}

/// An owned, evaluable benchmark problem
///
/// Counters start at zero and the observed best at infinity; both reflect
/// only what was evaluated through this problem value, not through any inner
/// problem it may wrap.
pub struct Problem {
    pub(crate) number_of_variables: usize,
    pub(crate) number_of_objectives: usize,
    pub(crate) number_of_constraints: usize,
    pub(crate) lower_bounds: Option<Array1<f64>>,
    pub(crate) upper_bounds: Option<Array1<f64>>,
    pub(crate) best_parameter: Option<Array1<f64>>,
    pub(crate) best_value: Option<Array1<f64>>,
    pub(crate) initial_solution: Option<Array1<f64>>,
    pub(crate) final_target_delta: f64,
    pub(crate) evaluations: u64,
    pub(crate) best_observed_value: f64,
    pub(crate) best_observed_evaluation: u64,
    pub(crate) name: String,
    pub(crate) id: String,
    pub(crate) problem_type: String,
    pub(crate) evaluator: Box<dyn Evaluator>,
}

impl Problem {
    /// Create a problem from an explicit evaluator
    ///
    /// Bounds, identity and the known optimum start absent; constructors set
    /// what they know through the setters below.
    pub fn new(
        number_of_variables: usize,
        number_of_objectives: usize,
        number_of_constraints: usize,
        evaluator: Box<dyn Evaluator>,
    ) -> Problem {
        Problem {
            number_of_variables,
            number_of_objectives,
            number_of_constraints,
            lower_bounds: None,
            upper_bounds: None,
            best_parameter: None,
            best_value: None,
            initial_solution: None,
            final_target_delta: 1e-8,
            evaluations: 0,
            best_observed_value: f64::INFINITY,
            best_observed_evaluation: 0,
            name: String::new(),
            id: String::new(),
            problem_type: String::new(),
            evaluator,
        }
    }

    /// Create an unconstrained single-objective problem from a function
    pub fn from_function(
        number_of_variables: usize,
        f: impl FnMut(&Array1<f64>) -> f64 + 'static,
    ) -> Problem {
        Problem::new(number_of_variables, 1, 0, Box::new(FunctionEvaluator { f }))
    }

    // --- evaluation -------------------------------------------------------

    /// Evaluate the objective vector into a caller-provided buffer
    ///
    /// Increments the evaluation counter and, for single-objective problems,
    /// tracks the strictly best value seen so far together with the counter
    /// value at which it occurred.
    pub fn evaluate_into(&mut self, x: &Array1<f64>, y: &mut [f64]) {
        debug_assert_eq!(x.len(), self.number_of_variables, "wrong x dimension");
        debug_assert_eq!(y.len(), self.number_of_objectives, "wrong y dimension");
        self.evaluator.evaluate_objective(x, y);
        self.evaluations += 1;
        if self.number_of_objectives == 1 && y[0] < self.best_observed_value {
            self.best_observed_value = y[0];
            self.best_observed_evaluation = self.evaluations;
        }
    }

    /// Evaluate the objective vector into a fresh array
    pub fn evaluate(&mut self, x: &Array1<f64>) -> Array1<f64> {
        let mut y = vec![0.0; self.number_of_objectives];
        self.evaluate_into(x, &mut y);
        Array1::from_vec(y)
    }

    /// Evaluate the constraint vector into a caller-provided buffer
    ///
    /// Panics when the problem declares no constraints.
    pub fn evaluate_constraints_into(&mut self, x: &Array1<f64>, y: &mut [f64]) {
        assert!(
            self.number_of_constraints > 0,
            "problem '{}' has no constraints",
            self.id
        );
        debug_assert_eq!(x.len(), self.number_of_variables, "wrong x dimension");
        debug_assert_eq!(y.len(), self.number_of_constraints, "wrong y dimension");
        self.evaluator.evaluate_constraints(x, y);
    }

    /// Evaluate the constraint vector into a fresh array
    pub fn evaluate_constraints(&mut self, x: &Array1<f64>) -> Array1<f64> {
        let mut y = vec![0.0; self.number_of_constraints];
        self.evaluate_constraints_into(x, &mut y);
        Array1::from_vec(y)
    }

    /// Report a solution the optimizer currently considers best
    ///
    /// Panics unless [`Problem::accepts_recommendations`] is true; observers
    /// install the receiving end when they attach to a problem.
    pub fn recommend_solution(&mut self, x: &Array1<f64>) {
        assert!(
            self.accepts_recommendations(),
            "problem '{}' does not accept recommendations",
            self.id
        );
        debug_assert_eq!(x.len(), self.number_of_variables, "wrong x dimension");
        self.evaluator.recommend_solution(x);
    }

    /// Whether this problem accepts recommended solutions
    pub fn accepts_recommendations(&self) -> bool {
        self.evaluator.accepts_recommendations()
    }

    // --- metadata accessors -----------------------------------------------

    pub fn number_of_variables(&self) -> usize {
        self.number_of_variables
    }

    pub fn number_of_objectives(&self) -> usize {
        self.number_of_objectives
    }

    pub fn number_of_constraints(&self) -> usize {
        self.number_of_constraints
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn problem_type(&self) -> &str {
        &self.problem_type
    }

    /// Lower bounds of the region of interest
    ///
    /// Panics when no bounds were defined on any layer of the problem.
    pub fn lower_bounds(&self) -> &Array1<f64> {
        match &self.lower_bounds {
            Some(b) => b,
            None => panic!("problem '{}' has no lower bounds", self.id),
        }
    }

    /// Upper bounds of the region of interest
    pub fn upper_bounds(&self) -> &Array1<f64> {
        match &self.upper_bounds {
            Some(b) => b,
            None => panic!("problem '{}' has no upper bounds", self.id),
        }
    }

    pub fn has_bounds(&self) -> bool {
        self.lower_bounds.is_some() && self.upper_bounds.is_some()
    }

    /// Location of the known optimum, when one is defined
    pub fn best_parameter(&self) -> Option<&Array1<f64>> {
        self.best_parameter.as_ref()
    }

    /// Objective vector of the known optimum, when one is defined
    pub fn best_value(&self) -> Option<&Array1<f64>> {
        self.best_value.as_ref()
    }

    /// Suggested starting point: the stored one, or the center of the bounds
    pub fn initial_solution(&self) -> Array1<f64> {
        match &self.initial_solution {
            Some(x0) => x0.clone(),
            None => (self.lower_bounds() + self.upper_bounds()) / 2.0,
        }
    }

    pub fn final_target_delta(&self) -> f64 {
        self.final_target_delta
    }

    // --- counters ---------------------------------------------------------

    /// Objective evaluations performed through this problem value
    pub fn evaluations(&self) -> u64 {
        self.evaluations
    }

    /// Best objective value observed so far (single-objective problems)
    pub fn best_observed_value(&self) -> f64 {
        self.best_observed_value
    }

    /// Evaluation count at which the observed best was reached
    pub fn best_observed_evaluation(&self) -> u64 {
        self.best_observed_evaluation
    }

    /// Whether the observed best reached the known optimum up to the
    /// final target precision
    pub fn final_target_hit(&self) -> bool {
        match &self.best_value {
            Some(v) if self.number_of_objectives == 1 => {
                self.best_observed_value <= v[0] + self.final_target_delta
            }
            _ => false,
        }
    }

    // --- construction-time setters ----------------------------------------

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn set_problem_type(&mut self, problem_type: impl Into<String>) {
        self.problem_type = problem_type.into();
    }

    /// Set per-coordinate bounds
    pub fn set_bounds(&mut self, lower: Array1<f64>, upper: Array1<f64>) {
        assert_eq!(lower.len(), self.number_of_variables, "wrong bounds dimension");
        assert_eq!(upper.len(), self.number_of_variables, "wrong bounds dimension");
        self.lower_bounds = Some(lower);
        self.upper_bounds = Some(upper);
    }

    /// Set the same interval on every coordinate
    pub fn set_uniform_bounds(&mut self, lower: f64, upper: f64) {
        self.lower_bounds = Some(Array1::from_elem(self.number_of_variables, lower));
        self.upper_bounds = Some(Array1::from_elem(self.number_of_variables, upper));
    }

    pub fn set_best_parameter(&mut self, best: Array1<f64>) {
        assert_eq!(best.len(), self.number_of_variables, "wrong best dimension");
        self.best_parameter = Some(best);
    }

    pub fn set_best_value(&mut self, best: Array1<f64>) {
        assert_eq!(best.len(), self.number_of_objectives, "wrong best dimension");
        self.best_value = Some(best);
    }

    pub fn set_initial_solution(&mut self, x0: Array1<f64>) {
        assert_eq!(x0.len(), self.number_of_variables, "wrong x0 dimension");
        self.initial_solution = Some(x0);
    }

    pub fn set_final_target_delta(&mut self, delta: f64) {
        self.final_target_delta = delta;
    }

    /// Compute `best_value` by evaluating the stored `best_parameter`, then
    /// reset the counters so construction probing never shows up in them
    pub fn evaluate_best_parameter(&mut self) {
        let Some(x) = self.best_parameter.clone() else {
            panic!("problem '{}' has no best parameter to evaluate", self.id);
        };
        let mut y = vec![0.0; self.number_of_objectives];
        self.evaluate_into(&x, &mut y);
        self.best_value = Some(Array1::from_vec(y));
        self.reset_counters();
    }

    /// Zero the evaluation counter and forget the observed best
    pub fn reset_counters(&mut self) {
        self.evaluations = 0;
        self.best_observed_value = f64::INFINITY;
        self.best_observed_evaluation = 0;
    }
}

impl std::fmt::Debug for Problem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Problem")
            .field("id", &self.id)
            .field("variables", &self.number_of_variables)
            .field("objectives", &self.number_of_objectives)
            .field("constraints", &self.number_of_constraints)
            .field("evaluations", &self.evaluations)
            .finish()
    }
}
