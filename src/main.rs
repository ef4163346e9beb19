//! `seqfold` - run the iteration lessons
//!
//! ```text
//! seqfold                      # run every lesson
//! seqfold find_returns_first_match
//! seqfold --list
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use seqfold::engine::lessons;
use seqfold::{LessonRunner, LessonStatus, RunnerConfig};

/// Run the iteration lessons and report each one
#[derive(Parser, Debug)]
#[command(name = "seqfold", version, about)]
struct Cli {
    /// Run only this lesson
    #[arg(value_name = "NAME")]
    lesson: Option<String>,

    /// Text file for the file-lines lesson
    ///
    /// Defaults to data/example_file.txt in the source tree this binary was
    /// built from. Pass this flag when running an installed binary, where
    /// that path may not exist.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// List lesson names and exit
    #[arg(long)]
    list: bool,

    /// Enable verbose logging (can be repeated for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<bool> {
    let mut config = RunnerConfig::new();
    if let Some(path) = cli.file {
        config = config.with_example_file(path);
    }
    if let Some(name) = cli.lesson {
        config = config.with_filter(name);
    }

    let runner = LessonRunner::with_lessons(config, lessons::all());

    if cli.list {
        for name in runner.lesson_names() {
            println!("{}", name);
        }
        return Ok(true);
    }

    let report = runner.run_quiet();
    if report.total() == 0 {
        bail!("no lesson matched {:?}", runner.config().filter);
    }

    for outcome in &report.outcomes {
        match &outcome.status {
            LessonStatus::Passed => println!("{:<5} {}", outcome.status.label(), outcome.name),
            LessonStatus::Failed(msg) | LessonStatus::Errored(msg) => {
                println!("{:<5} {}: {}", outcome.status.label(), outcome.name, msg)
            }
        }
    }
    println!("\n{}", report);

    Ok(report.is_success())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}
