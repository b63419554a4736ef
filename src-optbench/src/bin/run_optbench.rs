use std::env;
use std::process;

use clap::Parser;

use optbench::benchmark::run_benchmark;
use optbench::cli::Args;
use optbench_suites::known_suites;

fn main() {
    let args = Args::parse();

    if args.quiet {
        // No other thread is running this early
        unsafe { env::set_var("OPTBENCH_QUIET", "1") };
    }

    if args.suite_list {
        for name in known_suites() {
            println!("{name}");
        }
        return;
    }

    match run_benchmark(&args) {
        Ok(summary) => {
            println!(
                "{}: {} problems, {} final targets hit",
                summary.suite, summary.problems_run, summary.targets_hit
            );
        }
        Err(err) => {
            eprintln!("run_optbench: {err}");
            process::exit(1);
        }
    }
}
