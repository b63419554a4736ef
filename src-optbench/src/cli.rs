//! Command line interface of the benchmark driver

use std::path::PathBuf;

use clap::Parser;

/// Command line arguments for `run_optbench`
#[derive(Parser, Debug, Clone)]
#[command(name = "run_optbench")]
#[command(about = "Run a black-box optimizer over a benchmark suite", long_about = None)]
pub struct Args {
    /// Suite to run (see --suite-list)
    #[arg(short, long, default_value = "toy")]
    pub suite: String,

    /// Instance specification, e.g. "instances: 1-5" or "year: 2024"
    #[arg(long, default_value = "")]
    pub suite_instance: String,

    /// Axis filters, e.g. "function_ids: 1-3 dimensions: 2,5"
    #[arg(long, default_value = "")]
    pub suite_options: String,

    /// Observer to attach: none or trace
    #[arg(short, long, default_value = "trace")]
    pub observer: String,

    /// Observer options, e.g. "result_folder: exdata"
    #[arg(long, default_value = "")]
    pub observer_options: String,

    /// Optimizer to run: random-search or de
    #[arg(long, default_value = "random-search")]
    pub optimizer: String,

    /// Evaluation budget per problem, as a multiple of its dimension
    #[arg(short, long, default_value_t = 100)]
    pub budget_multiplier: u64,

    /// Seed for the optimizer's random draws
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Write a JSON summary of the run to this file
    #[arg(long)]
    pub summary: Option<PathBuf>,

    /// List the known suites and exit
    #[arg(long, default_value_t = false)]
    pub suite_list: bool,

    /// Print one progress line per problem
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,

    /// Silence suite and observer warnings (sets OPTBENCH_QUIET)
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["run_optbench"]).unwrap();
        assert_eq!(args.suite, "toy");
        assert_eq!(args.observer, "trace");
        assert_eq!(args.optimizer, "random-search");
        assert_eq!(args.budget_multiplier, 100);
        assert_eq!(args.seed, 1);
        assert!(args.summary.is_none());
        assert!(!args.suite_list);
        assert!(!args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_suite_list_flag() {
        let args = Args::try_parse_from(["run_optbench", "--suite-list"]).unwrap();
        assert!(args.suite_list);
    }

    #[test]
    fn test_explicit_arguments() {
        let args = Args::try_parse_from([
            "run_optbench",
            "--suite",
            "blackbox",
            "--suite-instance",
            "year: 2024",
            "--suite-options",
            "dimensions: 2,5",
            "--optimizer",
            "de",
            "-b",
            "500",
            "--seed",
            "7",
            "--summary",
            "out/summary.json",
            "-v",
        ])
        .unwrap();
        assert_eq!(args.suite, "blackbox");
        assert_eq!(args.suite_instance, "year: 2024");
        assert_eq!(args.suite_options, "dimensions: 2,5");
        assert_eq!(args.optimizer, "de");
        assert_eq!(args.budget_multiplier, 500);
        assert_eq!(args.seed, 7);
        assert_eq!(args.summary.unwrap(), PathBuf::from("out/summary.json"));
        assert!(args.verbose);
    }
}
