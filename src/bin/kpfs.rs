//! Command-line front end: runs one driver on one instance file.
//!
//! ```text
//! kpfs <ALGORITHM> <INSTANCE> <RESULTS> <CONVERGENCE> [--time-limit S] [--seed N] [-v]
//! ```
//!
//! The convergence trace replaces `CONVERGENCE`; one `best seconds` line is
//! appended to `RESULTS`.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{error, info, Level};

use u_kpfs::grasp::GraspConfig;
use u_kpfs::ils::IlsConfig;
use u_kpfs::sa::SaConfig;
use u_kpfs::tabu::TabuConfig;
use u_kpfs::{append_result, Instance, Metaheuristic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Randomized greedy construction + local search restarts
    Grasp,
    /// Iterated local search with random-flip perturbation
    Ils,
    /// Simulated annealing with geometric cooling
    Sa,
    /// Tabu search over state fingerprints
    Tabu,
}

impl Algorithm {
    fn driver(self) -> Metaheuristic {
        match self {
            Algorithm::Grasp => Metaheuristic::Grasp(GraspConfig::default()),
            Algorithm::Ils => Metaheuristic::Ils(IlsConfig::default()),
            Algorithm::Sa => Metaheuristic::Annealing(SaConfig::default()),
            Algorithm::Tabu => Metaheuristic::Tabu(TabuConfig::default()),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "kpfs")]
#[command(author, version, about = "Metaheuristics for the knapsack problem with forfeit sets")]
struct Cli {
    /// Search strategy to run
    #[arg(value_enum)]
    algorithm: Algorithm,

    /// Instance file
    #[arg(value_name = "FILE")]
    instance: PathBuf,

    /// Results file; one `best seconds` line is appended per run
    #[arg(value_name = "FILE")]
    results: PathBuf,

    /// Convergence file; overwritten with `elapsed best` lines
    #[arg(value_name = "FILE")]
    convergence: PathBuf,

    /// Wall-clock budget in seconds
    #[arg(short, long, value_name = "SECONDS", default_value_t = 2.0)]
    time_limit: f64,

    /// Random seed; omitted means a fresh seed per run
    #[arg(short, long)]
    seed: Option<u64>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn run(cli: &Cli) -> Result<()> {
    let instance = Instance::from_path(&cli.instance)
        .with_context(|| format!("loading instance {}", cli.instance.display()))?;
    info!(
        items = instance.item_count(),
        groups = instance.group_count(),
        capacity = instance.capacity(),
        "instance loaded"
    );

    let limit = Duration::try_from_secs_f64(cli.time_limit)
        .with_context(|| format!("invalid time limit {}", cli.time_limit))?;
    let mut driver = cli.algorithm.driver().with_time_limit(limit);
    if let Some(seed) = cli.seed {
        driver = driver.with_seed(seed);
    }

    let outcome = driver.run(&instance).context("search failed")?;
    let seconds = outcome.elapsed.as_secs_f64();

    outcome
        .trace
        .save(&cli.convergence)
        .context("writing convergence trace")?;
    append_result(&cli.results, outcome.best_value, seconds)
        .context("appending result")?;

    println!("{} {} {}", outcome.algorithm, outcome.best_value, seconds);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
