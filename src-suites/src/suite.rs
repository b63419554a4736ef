//! The suite engine: a lazy, resumable walk over a problem grid.
//!
//! A suite holds three parallel axes (dimensions, functions, instance
//! numbers) and walks their cross product with the instance axis moving
//! fastest. Filtering never shrinks an axis: filtered-out entries are
//! zeroed in place, and the cursor logic skips zeros. Problems are
//! built on demand, one at a time; the previous problem is torn down
//! before its successor exists.

use optbench_env::{diag, options};
use optbench_problem::{Observer, Problem};

use crate::error::SuiteError;
use crate::families::{self, ProblemFamily};

/// Cursor value before the first advance of an axis.
const UNSTARTED: i64 = -1;

pub struct Suite {
    family: Box<dyn ProblemFamily>,
    dimensions: Vec<usize>,
    functions: Vec<usize>,
    instances: Vec<usize>,
    current_dimension: i64,
    current_function: i64,
    current_instance: i64,
    exhausted: bool,
    current_problem: Option<Problem>,
}

impl Suite {
    /// Build a suite by name.
    ///
    /// `instance_spec` selects the instance axis, either directly
    /// (`"instances: 1-5"`) or through a frozen yearly list
    /// (`"year: 2024"`); when empty, the family default applies. When
    /// both keys occur, the textually earlier one wins.
    ///
    /// `suite_options` narrows the axes:
    ///
    /// - `function_ids: 1,3-5` keeps the listed function positions
    /// - `instance_ids: 2-4` keeps the listed instance positions
    /// - `dimension_ids: 1,3` keeps the listed dimension positions
    /// - `dimensions: 5,20` keeps the listed dimension values
    pub fn new(name: &str, instance_spec: &str, suite_options: &str) -> Result<Suite, SuiteError> {
        let family =
            families::by_name(name).ok_or_else(|| SuiteError::UnknownSuite(name.to_string()))?;
        let dimensions = family.dimensions().to_vec();
        let functions: Vec<usize> = (1..=family.number_of_functions()).collect();
        let instances = resolve_instances(family.as_ref(), instance_spec)?;

        let mut suite = Suite {
            family,
            dimensions,
            functions,
            instances,
            current_dimension: UNSTARTED,
            current_function: UNSTARTED,
            current_instance: UNSTARTED,
            exhausted: false,
            current_problem: None,
        };
        suite.apply_filters(suite_options);
        suite.validate()?;
        Ok(suite)
    }

    /// Build a suite with its default instances and no filtering.
    pub fn with_defaults(name: &str) -> Result<Suite, SuiteError> {
        Suite::new(name, "", "")
    }

    pub fn name(&self) -> &str {
        self.family.name()
    }

    /// Dimension axis; zero marks a filtered-out entry.
    pub fn dimensions(&self) -> &[usize] {
        &self.dimensions
    }

    /// Function axis; zero marks a filtered-out entry.
    pub fn functions(&self) -> &[usize] {
        &self.functions
    }

    /// Instance axis; zero marks a filtered-out entry.
    pub fn instances(&self) -> &[usize] {
        &self.instances
    }

    /// Problems the iteration will yield from a fresh start.
    pub fn number_of_problems(&self) -> usize {
        let valid = |items: &[usize]| items.iter().filter(|v| **v != 0).count();
        valid(&self.dimensions) * valid(&self.functions) * valid(&self.instances)
    }

    /// Build one problem directly, outside the iteration order.
    pub fn make_problem(&self, function: usize, dimension: usize, instance: usize) -> Problem {
        self.family.problem(function, dimension, instance)
    }

    /// Advance to the next problem of the suite.
    ///
    /// The previous problem is dropped first. Returns `None` once the
    /// grid is exhausted, and keeps returning `None` from then on.
    pub fn next_problem(&mut self, observer: &mut dyn Observer) -> Option<&mut Problem> {
        if self.exhausted {
            return None;
        }
        // The problem handed out last time dies before its successor is built
        self.current_problem = None;

        let advanced = self.next_instance() || self.next_function() || self.next_dimension();
        if !advanced {
            self.exhausted = true;
            return None;
        }
        // On the very first advance the coarser axes are still unstarted
        if self.current_function == UNSTARTED {
            self.next_function();
        }
        if self.current_dimension == UNSTARTED {
            self.next_dimension();
        }

        let function = self.functions[self.current_function as usize];
        let dimension = self.dimensions[self.current_dimension as usize];
        let instance = self.instances[self.current_instance as usize];

        let problem = observer.attach(self.family.problem(function, dimension, instance));
        Some(self.current_problem.insert(problem))
    }

    // --- axis stepping ------------------------------------------------------

    /// Move `cursor` to the next nonzero entry of `items`.
    ///
    /// On success returns true. When no entry remains the cursor wraps
    /// to the first nonzero entry and the call reports false, leaving
    /// the axis ready for the next round.
    fn next_item(items: &[usize], cursor: &mut i64) -> bool {
        let len = items.len() as i64;
        let mut id = *cursor + 1;
        while id < len && items[id as usize] == 0 {
            id += 1;
        }
        if id < len {
            *cursor = id;
            return true;
        }
        let mut first = 0;
        while first < len && items[first as usize] == 0 {
            first += 1;
        }
        assert!(first < len, "an axis lost all of its entries after validation");
        *cursor = first;
        false
    }

    fn next_instance(&mut self) -> bool {
        Self::next_item(&self.instances, &mut self.current_instance)
    }

    fn next_function(&mut self) -> bool {
        let advanced = Self::next_item(&self.functions, &mut self.current_function);
        if advanced {
            // A new function restarts the instance axis
            self.current_instance = UNSTARTED;
            Self::next_item(&self.instances, &mut self.current_instance);
        }
        advanced
    }

    fn next_dimension(&mut self) -> bool {
        Self::next_item(&self.dimensions, &mut self.current_dimension)
    }

    // --- filtering ----------------------------------------------------------

    fn apply_filters(&mut self, suite_options: &str) {
        if suite_options.trim().is_empty() {
            return;
        }
        if let Some(value) = options::read_string(suite_options, "function_ids") {
            if let Some(keep) = options::parse_ranges(&value, "function_ids", 1, self.functions.len())
            {
                Self::keep_positions(&mut self.functions, &keep);
            }
        }
        if let Some(value) = options::read_string(suite_options, "instance_ids") {
            if let Some(keep) = options::parse_ranges(&value, "instance_ids", 1, self.instances.len())
            {
                Self::keep_positions(&mut self.instances, &keep);
            }
        }

        let by_value = options::key_position(suite_options, "dimensions");
        let by_position = options::key_position(suite_options, "dimension_ids");
        match (by_value, by_position) {
            (Some(value_at), Some(position_at)) => {
                diag::warning(
                    "options 'dimensions' and 'dimension_ids' are mutually exclusive, \
                     the one given later is ignored",
                );
                if value_at < position_at {
                    self.filter_dimension_values(suite_options);
                } else {
                    self.filter_dimension_positions(suite_options);
                }
            }
            (Some(_), None) => self.filter_dimension_values(suite_options),
            (None, Some(_)) => self.filter_dimension_positions(suite_options),
            (None, None) => {}
        }
    }

    /// Zero every entry whose 1-based position is not in `keep`.
    fn keep_positions(items: &mut [usize], keep: &[usize]) {
        for (index, slot) in items.iter_mut().enumerate() {
            if !keep.contains(&(index + 1)) {
                *slot = 0;
            }
        }
    }

    fn filter_dimension_positions(&mut self, suite_options: &str) {
        let Some(value) = options::read_string(suite_options, "dimension_ids") else {
            return;
        };
        if let Some(keep) = options::parse_ranges(&value, "dimension_ids", 1, self.dimensions.len())
        {
            Self::keep_positions(&mut self.dimensions, &keep);
        }
    }

    fn filter_dimension_values(&mut self, suite_options: &str) {
        let Some(value) = options::read_string(suite_options, "dimensions") else {
            return;
        };
        if !value.chars().all(|c| c.is_ascii_digit() || c == ',') {
            diag::warning("option 'dimensions' accepts only digits and commas, ignored");
            return;
        }
        let smallest = self.dimensions.iter().copied().filter(|d| *d != 0).min();
        let largest = self.dimensions.iter().copied().filter(|d| *d != 0).max();
        let (Some(smallest), Some(largest)) = (smallest, largest) else {
            return;
        };
        if let Some(keep) = options::parse_ranges(&value, "dimensions", smallest, largest) {
            for slot in self.dimensions.iter_mut() {
                if *slot != 0 && !keep.contains(slot) {
                    *slot = 0;
                }
            }
        }
    }

    fn validate(&self) -> Result<(), SuiteError> {
        let empty = |items: &[usize]| items.iter().all(|v| *v == 0);
        if empty(&self.dimensions) {
            return Err(SuiteError::NoValidItems { axis: "dimension" });
        }
        if empty(&self.functions) {
            return Err(SuiteError::NoValidItems { axis: "function" });
        }
        if empty(&self.instances) {
            return Err(SuiteError::NoValidItems { axis: "instance" });
        }
        Ok(())
    }
}

impl std::fmt::Debug for Suite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Suite")
            .field("name", &self.family.name())
            .field("dimensions", &self.dimensions)
            .field("functions", &self.functions)
            .field("instances", &self.instances)
            .field("exhausted", &self.exhausted)
            .finish()
    }
}

/// Turn the instance specification into the instance axis.
fn resolve_instances(
    family: &dyn ProblemFamily,
    instance_spec: &str,
) -> Result<Vec<usize>, SuiteError> {
    let spec = instance_spec.trim();
    if spec.is_empty() {
        return resolve_instances_spec(family, family.default_instances());
    }
    resolve_instances_spec(family, spec)
}

fn resolve_instances_spec(
    family: &dyn ProblemFamily,
    spec: &str,
) -> Result<Vec<usize>, SuiteError> {
    let year_at = options::key_position(spec, "year");
    let instances_at = options::key_position(spec, "instances");

    let use_year = match (year_at, instances_at) {
        (Some(year_at), Some(instances_at)) => {
            diag::warning(
                "the instance specification gives both 'year' and 'instances', \
                 the one given later is ignored",
            );
            year_at < instances_at
        }
        (Some(_), None) => true,
        (None, Some(_)) => false,
        (None, None) => return Err(SuiteError::BadInstanceSpec(spec.to_string())),
    };

    let ranges = if use_year {
        let year = options::read_int(spec, "year")
            .ok_or_else(|| SuiteError::BadInstanceSpec(spec.to_string()))?;
        family
            .instances_by_year(year)
            .ok_or_else(|| SuiteError::UnknownYear {
                suite: family.name().to_string(),
                year,
            })?
            .to_string()
    } else {
        options::read_string(spec, "instances")
            .ok_or_else(|| SuiteError::BadInstanceSpec(spec.to_string()))?
    };

    options::parse_ranges(&ranges, "instances", 1, 0).ok_or(SuiteError::NoValidInstances)
}
