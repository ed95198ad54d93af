use anyhow::Context;
use boxsort::formatter::{format_moves, format_with_stack_comments, validate_format_params};
use boxsort::parser::{self, error_printing::print_puzzle_error};
use boxsort::planning::{Planner, Stacks};
use boxsort::replay::verify;
use boxsort::{scenarios, DEFAULT_MOVE_BUDGET};
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plans single-box moves that sort three stacks into A")]
struct Cli {
    /// More log output on stderr (-v debug, -vv trace). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Solve the puzzle described in a file
    Solve {
        file: PathBuf,

        /// Maximum number of moves the plan may use
        #[arg(short, long, default_value_t = DEFAULT_MOVE_BUDGET)]
        budget: usize,

        /// Show the stacks after every move
        #[arg(short, long)]
        annotate: bool,

        /// Column at which stack comments start when annotating
        #[arg(long, default_value_t = 24)]
        comment_start: usize,
    },
    /// Run the built-in reference scenarios
    Scenarios {
        #[arg(short, long, default_value_t = DEFAULT_MOVE_BUDGET)]
        budget: usize,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn solve_file(
    file: PathBuf,
    budget: usize,
    annotate: bool,
    comment_start: usize,
) -> anyhow::Result<bool> {
    if let Some(err) = validate_format_params(comment_start) {
        anyhow::bail!(err);
    }

    let file_path = file.display().to_string();
    let src = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read puzzle file {}", file_path))?;

    let puzzle = match parser::load(&src) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            print_puzzle_error(&src, &file_path, &err);
            return Err(err.into());
        }
    };

    let planner = Planner::new(&puzzle.a, &puzzle.b, &puzzle.c);
    let (moves, summary) = planner.plan();
    info!(
        values = summary.values,
        locked_height = summary.locked_height,
        moves = moves.len(),
        "planned"
    );

    if annotate {
        let start = Stacks::from_slices(&puzzle.a, &puzzle.b, &puzzle.c);
        print!(
            "{}",
            format_with_stack_comments(&start, &moves, comment_start)?
        );
    } else {
        print!("{}", format_moves(&moves));
    }

    let verdict = verify(&puzzle.a, &puzzle.b, &puzzle.c, &moves, budget);
    for violation in verdict.violations.iter() {
        eprintln!("error: {}", violation);
    }
    Ok(verdict.passed())
}

fn run_scenarios(budget: usize) -> bool {
    let reports = scenarios::run_all(budget);
    for report in reports.iter() {
        report.report(0);
    }
    let passed = reports.iter().filter(|report| report.passed()).count();
    println!("{}/{} scenarios passed", passed, reports.len());
    passed == reports.len()
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let ok = match cli.command {
        Command::Solve {
            file,
            budget,
            annotate,
            comment_start,
        } => solve_file(file, budget, annotate, comment_start)?,
        Command::Scenarios { budget } => run_scenarios(budget),
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}
