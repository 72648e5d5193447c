use clap::Parser;
use guard_patrol::{logging, render_route, solve, Config, ConfigError, Report};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info, warn};

/// Simulate the lab guard's patrol and count loop-causing obstructions
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Grid file (`.`, `#`, `^`); defaults to `[input] path` from the config
    input: Option<PathBuf>,

    /// Configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Print a JSON report instead of plain answers
    #[arg(long)]
    json: bool,

    /// Print the grid with the patrol route marked
    #[arg(long)]
    render: bool,

    /// Run obstruction trials on a single thread
    #[arg(long)]
    sequential: bool,

    /// Abort any simulation run longer than this many steps
    #[arg(long)]
    max_steps: Option<u64>,

    /// Also write the JSON report to this file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let (mut config, load_error) = Config::load_or_default(&cli.config);
    logging::init(&config.logging.filter);

    match load_error {
        None => info!(path = %cli.config.display(), "loaded configuration"),
        Some(e @ ConfigError::Missing { .. }) => info!(error = %e, "using default configuration"),
        Some(e) => warn!(error = %e, "using default configuration"),
    }

    if cli.sequential {
        config.search.parallel = false;
    }
    if cli.max_steps.is_some() {
        config.search.max_steps = cli.max_steps;
    }
    let json = cli.json || config.output.json;
    let render = cli.render || config.output.render;
    let input = cli.input.unwrap_or_else(|| PathBuf::from(&config.input.path));
    let output = cli.output.or_else(|| config.output.path.as_ref().map(PathBuf::from));

    let contents = match fs::read_to_string(&input) {
        Ok(contents) => contents,
        Err(e) => {
            error!(path = %input.display(), error = %e, "failed to read input");
            return ExitCode::FAILURE;
        }
    };
    let lines: Vec<&str> = contents.lines().filter(|line| !line.trim().is_empty()).collect();
    info!(path = %input.display(), lines = lines.len(), "input loaded");

    let solution = match solve(&lines, &config.search) {
        Ok(solution) => solution,
        Err(e) => {
            error!(error = %e, "cannot solve grid");
            return ExitCode::FAILURE;
        }
    };

    if render {
        print!("{}", render_route(&solution.grid, &solution.visited, None));
        println!();
    }

    let report = Report::from_solution(&solution);
    if let Some(path) = &output {
        if let Err(e) = report.save_to_file(path) {
            error!(error = %e, "failed to save report");
            return ExitCode::FAILURE;
        }
        info!(path = %path.display(), "report saved");
    }

    if json {
        match report.to_json() {
            Ok(text) => println!("{text}"),
            Err(e) => {
                error!(error = %e, "failed to serialize report");
                return ExitCode::FAILURE;
            }
        }
    } else {
        let answers = solution.answers();
        println!("Part 1: {}", answers.visited);
        println!("Part 2: {}", answers.loop_obstructions);
        println!("Elapsed: {:.2?}", solution.elapsed);
    }

    ExitCode::SUCCESS
}
