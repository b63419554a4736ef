//! Observers: recording layers between a suite and an optimizer
//!
//! An observer receives every problem the suite hands out and may wrap it
//! before the optimizer sees it. The [`TraceObserver`] installs a recording
//! layer that logs strict improvements and recommended solutions, and writes
//! one CSV file per problem when the run finishes. Wrapped problems accept
//! recommendations even when the bare problem does not; that is the receiving
//! end the recommendation capability exists for.

use std::fs::{create_dir_all, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use ndarray::Array1;

use optbench_env::{env_utils, options};
use optbench_problem::{NullObserver, Observer, Problem, Transform};

use crate::error::BenchError;

/// Build an observer from its name and an option string
///
/// Knows `"none"` (and the empty string) and `"trace"`. The trace observer
/// reads `result_folder` from `observer_options` and writes its files under
/// that folder inside the results root, `"exdata"` by default.
pub fn observer_by_name(
    name: &str,
    observer_options: &str,
) -> Result<Box<dyn Observer>, BenchError> {
    match name {
        "" | "none" => Ok(Box::new(NullObserver)),
        "trace" => {
            let folder = options::read_string(observer_options, "result_folder")
                .unwrap_or_else(|| "exdata".to_string());
            let dir = env_utils::get_results_dir(&folder)?;
            Ok(Box::new(TraceObserver::new(dir)))
        }
        other => Err(BenchError::UnknownObserver(other.to_string())),
    }
}

/// Why a trace line was written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    /// The evaluation strictly improved on everything seen before
    Improvement,
    /// The optimizer reported its current incumbent
    Recommendation,
}

impl TraceEvent {
    fn label(self) -> &'static str {
        match self {
            TraceEvent::Improvement => "improvement",
            TraceEvent::Recommendation => "recommendation",
        }
    }
}

/// One line of a problem trace
#[derive(Debug, Clone)]
pub struct TraceRecord {
    /// Evaluation counter value when the line was recorded
    pub evaluation: u64,
    /// Objective vector at the recorded point
    pub values: Vec<f64>,
    pub event: TraceEvent,
}

/// Everything recorded about one problem, shared between the observer
/// and the recording layer wrapped around the problem
#[derive(Debug)]
struct ProblemTrace {
    id: String,
    objectives: usize,
    target: Option<f64>,
    target_delta: f64,
    evaluations: u64,
    best: f64,
    target_hit: bool,
    records: Vec<TraceRecord>,
}

impl ProblemTrace {
    fn start(problem: &Problem) -> ProblemTrace {
        let target = match problem.best_value() {
            Some(v) if problem.number_of_objectives() == 1 => Some(v[0]),
            _ => None,
        };
        ProblemTrace {
            id: problem.id().to_string(),
            objectives: problem.number_of_objectives(),
            target,
            target_delta: problem.final_target_delta(),
            evaluations: 0,
            best: f64::INFINITY,
            target_hit: false,
            records: Vec::new(),
        }
    }
}

/// Recording layer installed by [`TraceObserver::attach`]
struct TraceLayer {
    trace: Arc<Mutex<ProblemTrace>>,
    scratch: Vec<f64>,
}

impl Transform for TraceLayer {
    fn evaluate_objective(&mut self, inner: &mut Problem, x: &Array1<f64>, y: &mut [f64]) {
        inner.evaluate_into(x, y);

        let mut trace = self.trace.lock().unwrap();
        trace.evaluations += 1;
        if trace.objectives == 1 && y[0] < trace.best {
            trace.best = y[0];
            if let Some(target) = trace.target {
                if y[0] <= target + trace.target_delta {
                    trace.target_hit = true;
                }
            }
            let evaluation = trace.evaluations;
            trace.records.push(TraceRecord {
                evaluation,
                values: y.to_vec(),
                event: TraceEvent::Improvement,
            });
        }
    }

    fn recommend_solution(&mut self, inner: &mut Problem, x: &Array1<f64>) {
        // Evaluated through the inner problem, so the recommendation never
        // shows up in the counters the optimizer watches
        inner.evaluate_into(x, &mut self.scratch);

        let mut trace = self.trace.lock().unwrap();
        let evaluation = trace.evaluations;
        trace.records.push(TraceRecord {
            evaluation,
            values: self.scratch.clone(),
            event: TraceEvent::Recommendation,
        });
        drop(trace);

        if inner.accepts_recommendations() {
            inner.recommend_solution(x);
        }
    }

    fn accepts_recommendations(&self, _inner: &Problem) -> bool {
        true
    }
}

/// Observer that records improvements and recommendations per problem
/// and writes one CSV file per problem id when the run finishes
pub struct TraceObserver {
    output_dir: PathBuf,
    traces: Vec<Arc<Mutex<ProblemTrace>>>,
}

impl TraceObserver {
    pub fn new(output_dir: PathBuf) -> TraceObserver {
        TraceObserver {
            output_dir,
            traces: Vec::new(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Problems attached so far
    pub fn problems_attached(&self) -> usize {
        self.traces.len()
    }

    /// Problems whose trace reached the final target
    pub fn targets_hit(&self) -> usize {
        self.traces
            .iter()
            .filter(|trace| trace.lock().unwrap().target_hit)
            .count()
    }

    /// Copy of the records of the problem with the given id
    pub fn records_of(&self, id: &str) -> Option<Vec<TraceRecord>> {
        for trace in &self.traces {
            let trace = trace.lock().unwrap();
            if trace.id == id {
                return Some(trace.records.clone());
            }
        }
        None
    }

    fn save_trace(&self, trace: &ProblemTrace) -> io::Result<PathBuf> {
        let filename = self.output_dir.join(format!("{}.csv", trace.id));
        let mut file = File::create(&filename)?;

        write!(file, "evaluation,")?;
        for i in 0..trace.objectives {
            write!(file, "value{},", i)?;
        }
        writeln!(file, "event")?;

        for record in &trace.records {
            write!(file, "{},", record.evaluation)?;
            for &value in &record.values {
                write!(file, "{:.16},", value)?;
            }
            writeln!(file, "{}", record.event.label())?;
        }

        Ok(filename)
    }
}

impl Observer for TraceObserver {
    fn name(&self) -> &str {
        "trace"
    }

    fn attach(&mut self, problem: Problem) -> Problem {
        let scratch = vec![0.0; problem.number_of_objectives()];
        let trace = Arc::new(Mutex::new(ProblemTrace::start(&problem)));
        self.traces.push(Arc::clone(&trace));
        Problem::wrap(problem, TraceLayer { trace, scratch })
    }

    fn finish(&mut self) -> io::Result<()> {
        create_dir_all(&self.output_dir)?;
        for trace in &self.traces {
            let trace = trace.lock().unwrap();
            self.save_trace(&trace)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array1;

    fn sphere_with_optimum() -> Problem {
        let mut problem =
            Problem::from_function(2, |x: &Array1<f64>| x.iter().map(|v| v * v).sum());
        problem.set_id("sphere_d02");
        problem.set_uniform_bounds(-5.0, 5.0);
        problem.set_best_parameter(Array1::zeros(2));
        problem.evaluate_best_parameter();
        problem
    }

    #[test]
    fn test_registry_knows_none_and_rejects_unknown() {
        let observer = observer_by_name("none", "").unwrap();
        assert_eq!(observer.name(), "none");
        let observer = observer_by_name("", "").unwrap();
        assert_eq!(observer.name(), "none");

        match observer_by_name("nope", "") {
            Err(BenchError::UnknownObserver(name)) => assert_eq!(name, "nope"),
            other => panic!(
                "expected UnknownObserver, got {:?}",
                other.map(|observer| observer.name().to_string())
            ),
        }
    }

    #[test]
    fn test_trace_records_improvements_only() {
        let tmp = tempfile::tempdir().unwrap();
        let mut observer = TraceObserver::new(tmp.path().join("out"));
        let mut problem = observer.attach(sphere_with_optimum());

        problem.evaluate(&Array1::from_vec(vec![3.0, 4.0]));
        problem.evaluate(&Array1::from_vec(vec![4.0, 4.0]));
        problem.evaluate(&Array1::from_vec(vec![1.0, 0.0]));

        let records = observer.records_of("sphere_d02").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].evaluation, 1);
        assert_eq!(records[0].values, vec![25.0]);
        assert_eq!(records[1].evaluation, 3);
        assert_eq!(records[1].values, vec![1.0]);
        assert!(records.iter().all(|r| r.event == TraceEvent::Improvement));
    }

    #[test]
    fn test_wrapped_problem_accepts_recommendations() {
        let tmp = tempfile::tempdir().unwrap();
        let mut observer = TraceObserver::new(tmp.path().join("out"));

        let bare = sphere_with_optimum();
        assert!(!bare.accepts_recommendations());

        let mut problem = observer.attach(bare);
        assert!(problem.accepts_recommendations());

        problem.evaluate(&Array1::from_vec(vec![1.0, 1.0]));
        problem.recommend_solution(&Array1::from_vec(vec![0.5, 0.5]));
        // The recommendation is logged but not counted
        assert_eq!(problem.evaluations(), 1);

        let records = observer.records_of("sphere_d02").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].event, TraceEvent::Recommendation);
        assert_eq!(records[1].evaluation, 1);
        assert_eq!(records[1].values, vec![0.5]);
    }

    #[test]
    fn test_target_hit_bookkeeping() {
        let tmp = tempfile::tempdir().unwrap();
        let mut observer = TraceObserver::new(tmp.path().join("out"));
        let mut problem = observer.attach(sphere_with_optimum());

        problem.evaluate(&Array1::from_vec(vec![1.0, 1.0]));
        assert_eq!(observer.targets_hit(), 0);
        problem.evaluate(&Array1::from_vec(vec![1e-9, 0.0]));
        drop(problem);
        assert_eq!(observer.targets_hit(), 1);
    }

    #[test]
    fn test_finish_writes_one_csv_per_problem() {
        let tmp = tempfile::tempdir().unwrap();
        let mut observer = TraceObserver::new(tmp.path().join("out"));

        let mut problem = observer.attach(sphere_with_optimum());
        problem.evaluate(&Array1::from_vec(vec![2.0, 0.0]));
        drop(problem);

        let mut second = sphere_with_optimum();
        second.set_id("sphere_d02_again");
        let mut problem = observer.attach(second);
        problem.evaluate(&Array1::from_vec(vec![1.0, 0.0]));
        problem.recommend_solution(&Array1::zeros(2));
        drop(problem);

        observer.finish().unwrap();

        let first = std::fs::read_to_string(tmp.path().join("out/sphere_d02.csv")).unwrap();
        let mut lines = first.lines();
        assert_eq!(lines.next(), Some("evaluation,value0,event"));
        assert_eq!(lines.next(), Some("1,4.0000000000000000,improvement"));
        assert_eq!(lines.next(), None);

        let second = std::fs::read_to_string(tmp.path().join("out/sphere_d02_again.csv")).unwrap();
        assert_eq!(second.lines().count(), 3);
        assert!(second.lines().last().unwrap().ends_with("recommendation"));
    }
}
