//! Wordle Simulator - CLI
//!
//! Loads a dictionary, then simulates games, ranks guesses or benchmarks the
//! engine over many targets.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_simulator::{
    commands::{SolveConfig, rank_words, run_benchmark, sample_targets, solve_word},
    core::Word,
    output::{print_benchmark_result, print_rank_result, print_solve_result},
    solver::{GuessSelection, LogObserver, RecordingObserver, Scorer, ScoringMethod, Simulator},
    wordlists::{DEFAULT_DICTIONARY, load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_simulator",
    about = "Simulates Wordle games using positional letter-frequency scoring",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, default_value = DEFAULT_DICTIONARY)]
    dictionary: String,

    /// Scoring method: entropy (default) or frequency
    #[arg(short, long, global = true, default_value = "entropy")]
    scoring: ScoringMethod,

    /// Which end of the ranking to guess: min or max (default depends on scoring)
    #[arg(long, global = true)]
    selection: Option<GuessSelection>,

    /// Give up after this many turns
    #[arg(long, global = true)]
    max_turns: Option<usize>,

    /// Show per-turn details and debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a game against a target word
    Solve {
        /// The hidden target word
        target: String,
    },

    /// Rank dictionary words by score
    Rank {
        /// Word length to load from the dictionary
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Number of words to show
        #[arg(short, long, default_value = "10")]
        top: usize,
    },

    /// Simulate games for random dictionary targets
    Benchmark {
        /// Word length to load from the dictionary
        #[arg(short, long, default_value = "5")]
        length: usize,

        /// Number of random targets (all words when omitted)
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Seed for reproducible target sampling
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let selection = cli
        .selection
        .unwrap_or_else(|| cli.scoring.default_selection());
    let mut simulator = Simulator::new(cli.scoring, selection);
    if let Some(max_turns) = cli.max_turns {
        simulator = simulator.with_max_turns(max_turns);
    }

    match &cli.command {
        Commands::Solve { target } => run_solve_command(&cli, &simulator, target),
        Commands::Rank { length, top } => run_rank_command(&cli, selection, *length, *top),
        Commands::Benchmark {
            length,
            count,
            seed,
        } => run_benchmark_command(&cli, &simulator, *length, *count, *seed),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn load_dictionary(path: &str, length: usize) -> Result<Vec<Word>> {
    if length == 0 {
        bail!("Word length must be at least 1");
    }
    load_from_file(path, length).with_context(|| format!("Failed to read dictionary {path}"))
}

fn run_solve_command(cli: &Cli, simulator: &Simulator<ScoringMethod>, target: &str) -> Result<()> {
    let target = target.trim().to_lowercase();
    let dictionary = load_dictionary(&cli.dictionary, target.chars().count())?;

    let mut observer = (LogObserver, RecordingObserver::new());
    let result = solve_word(
        SolveConfig::new(target),
        simulator,
        &dictionary,
        &mut observer,
    )
    .context("Simulation failed")?;

    print_solve_result(&result, cli.verbose, &observer.1.passes);
    Ok(())
}

fn run_rank_command(cli: &Cli, selection: GuessSelection, length: usize, top: usize) -> Result<()> {
    let dictionary = load_dictionary(&cli.dictionary, length)?;
    let result = rank_words(&dictionary, &cli.scoring, selection, top)?;
    print_rank_result(&result);
    Ok(())
}

fn run_benchmark_command(
    cli: &Cli,
    simulator: &Simulator<ScoringMethod>,
    length: usize,
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let dictionary = load_dictionary(&cli.dictionary, length)?;
    let targets = match count {
        Some(count) => sample_targets(&dictionary, count, seed),
        None => dictionary.clone(),
    };

    println!(
        "Running benchmark on {} targets ({} scoring, {} selection)...",
        targets.len(),
        cli.scoring,
        simulator.selection()
    );

    let result = run_benchmark(simulator, &dictionary, &targets, true)?;
    print_benchmark_result(&result);
    Ok(())
}
