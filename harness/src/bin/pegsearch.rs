//! `pegsearch`: solve a peg-swap grid file and print the path.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use peg_harness::render::{render_board, render_path};
use peg_harness::runner::{run_grid, RunError, RunOutcome};
use peg_search::policy::{ClosePolicyV1, SearchPolicyV1};

#[derive(Parser)]
#[command(name = "pegsearch")]
#[command(about = "A* solver for the peg-swap board puzzle")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Grid file: board size N followed by N*N cell digits (0 empty, 1 black, 2 white, 3 blocked)
    grid: PathBuf,

    /// Stop after this many node expansions
    #[arg(long)]
    max_expansions: Option<u64>,

    /// Re-open closed nodes when a cheaper path to them is found
    #[arg(long)]
    reopen: bool,

    /// Write the canonical JSON run report to this file
    #[arg(long, value_name = "PATH")]
    report: Option<PathBuf>,

    /// Print only the summary lines, not the boards
    #[arg(long, short)]
    quiet: bool,
}

impl Args {
    fn policy(&self) -> SearchPolicyV1 {
        let mut policy = SearchPolicyV1::default();
        if let Some(max) = self.max_expansions {
            policy = policy.with_max_expansions(max);
        }
        if self.reopen {
            policy = policy.with_close_policy(ClosePolicyV1::ReopenOnImprovement);
        }
        policy
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), RunError> {
    let outcome = run_grid(&args.grid, &args.policy())?;
    print_outcome(&outcome, args.quiet);
    if let Some(path) = &args.report {
        outcome.write_report(path)?;
    }
    Ok(())
}

fn print_outcome(outcome: &RunOutcome, quiet: bool) {
    if !quiet {
        println!("Start:");
        print!("{}", render_board(&outcome.start));
        println!("Target:");
        print!("{}", render_board(&outcome.target));
        println!();
        if outcome.result.found {
            println!("Path:");
            print!("{}", render_path(&outcome.result.path));
        }
    }
    for line in outcome.summary_lines() {
        println!("{line}");
    }
    println!("Elapsed time: {:?}", outcome.elapsed);
}
