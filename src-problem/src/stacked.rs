//! Stacking two problems over the same domain into one

use ndarray::Array1;

use crate::error::ProblemError;
use crate::problem::{Evaluator, Problem};

/// Evaluator concatenating the outputs of two owned problems
///
/// Field order fixes the teardown order: the first problem drops before the
/// second.
struct StackedPair {
    first: Problem,
    second: Problem,
}

impl Evaluator for StackedPair {
    fn evaluate_objective(&mut self, x: &Array1<f64>, y: &mut [f64]) {
        let (y1, y2) = y.split_at_mut(self.first.number_of_objectives());
        self.first.evaluate_into(x, y1);
        self.second.evaluate_into(x, y2);
    }

    fn evaluate_constraints(&mut self, x: &Array1<f64>, y: &mut [f64]) {
        // Only invoke a side that has constraints of its own
        let (y1, y2) = y.split_at_mut(self.first.number_of_constraints());
        if !y1.is_empty() {
            self.first.evaluate_constraints_into(x, y1);
        }
        if !y2.is_empty() {
            self.second.evaluate_constraints_into(x, y2);
        }
    }
}

fn merge_bounds(
    a: &Option<Array1<f64>>,
    b: &Option<Array1<f64>>,
    which: &'static str,
) -> Result<Option<Array1<f64>>, ProblemError> {
    match (a, b) {
        (Some(a), Some(b)) => {
            if a.iter().zip(b.iter()).any(|(ai, bi)| ai != bi) {
                Err(ProblemError::BoundsDisagree { which })
            } else {
                Ok(Some(a.clone()))
            }
        }
        (Some(a), None) => Ok(Some(a.clone())),
        (None, Some(b)) => Ok(Some(b.clone())),
        (None, None) => Ok(None),
    }
}

impl Problem {
    /// Stack two problems over the same search space
    ///
    /// The result has the concatenated objective and constraint vectors of
    /// both sides, in order. Ids join with `_-_`, names with ` + `. A bound
    /// defined on one side only is inherited; defined on both sides it must
    /// agree elementwise. The known optimum is cleared: it is not derivable
    /// from the parts.
    pub fn stack(first: Problem, second: Problem) -> Result<Problem, ProblemError> {
        if first.number_of_variables != second.number_of_variables {
            return Err(ProblemError::DimensionMismatch {
                first: first.number_of_variables,
                second: second.number_of_variables,
            });
        }
        let lower_bounds = merge_bounds(&first.lower_bounds, &second.lower_bounds, "lower")?;
        let upper_bounds = merge_bounds(&first.upper_bounds, &second.upper_bounds, "upper")?;
        let id = format!("{}_-_{}", first.id, second.id);
        let name = format!("{} + {}", first.name, second.name);
        let number_of_variables = first.number_of_variables;
        let number_of_objectives = first.number_of_objectives + second.number_of_objectives;
        let number_of_constraints = first.number_of_constraints + second.number_of_constraints;

        let mut stacked = Problem::new(
            number_of_variables,
            number_of_objectives,
            number_of_constraints,
            Box::new(StackedPair { first, second }),
        );
        stacked.id = id;
        stacked.name = name;
        stacked.lower_bounds = lower_bounds;
        stacked.upper_bounds = upper_bounds;
        Ok(stacked)
    }
}
