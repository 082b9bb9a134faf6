//! drawsim CLI.
//!
//! Usage:
//!   drawsim simulate [OPTIONS]
//!   drawsim ingest <SOURCE> --db <PATH>
//!   drawsim frequencies --db <PATH> [--game <NAME>]
//!
//! Examples:
//!   drawsim simulate                                # 1000 trials, 2 numbers from 1-31
//!   drawsim simulate -n 5000 -u 4 -k 2 --entry 1,2 --entry 3,4
//!   drawsim simulate --seed 42 --json               # Reproducible, saves JSON report
//!   drawsim ingest drawresults.htm --db draws.db
//!   drawsim frequencies --db draws.db --game "EZ2 Lotto 2D"

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use drawsim::constants::DEFAULT_MIN_DRAWS;
use drawsim::results::{
    filter_sparse_games, load_source, parse_draw_results, NumberFrequencies, ResultsDb,
};
use drawsim::simulator::{run_simulation, EntrySet, SimConfig, SimReport};
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Lottery draw simulator and results analyzer
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Verbose output (per-trial logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate how many draws it takes for a set of bets to win
    Simulate(SimulateArgs),
    /// Parse a results page and load it into the database
    Ingest(IngestArgs),
    /// Show how often each number has been drawn
    Frequencies(FrequencyArgs),
}

#[derive(Args, Debug)]
struct SimulateArgs {
    /// Highest number in the draw (numbers are 1..=U)
    #[arg(short = 'u', long = "universe")]
    universe_size: Option<u32>,

    /// Numbers per draw
    #[arg(short = 'k', long = "draw-size")]
    draw_size: Option<u32>,

    /// Number of trials
    #[arg(short = 'n', long = "trials")]
    num_trials: Option<u32>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Give up on a trial after this many draws
    #[arg(long = "max-draws")]
    max_draws: Option<u64>,

    /// Label for the results (default: entry count)
    #[arg(long)]
    label: Option<String>,

    /// A bet as comma-separated numbers, e.g. 7,21 (repeatable)
    #[arg(short, long = "entry")]
    entries: Vec<String>,

    /// JSON file mapping bet index to numbers, e.g. {"0": [7, 21]}
    #[arg(long)]
    entries_file: Option<PathBuf>,

    /// Save a JSON report next to the text one
    #[arg(long)]
    json: bool,

    /// Quick check (100 trials)
    #[arg(long)]
    quick: bool,
}

#[derive(Args, Debug)]
struct IngestArgs {
    /// Results page: file path or http(s) URL
    source: String,

    /// SQLite database file
    #[arg(long)]
    db: PathBuf,

    /// Drop games with fewer draws than this
    #[arg(long, default_value_t = DEFAULT_MIN_DRAWS)]
    min_draws: usize,
}

#[derive(Args, Debug)]
struct FrequencyArgs {
    /// SQLite database file
    #[arg(long)]
    db: PathBuf,

    /// Restrict to one game (default: every game)
    #[arg(long)]
    game: Option<String>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let outcome = match cli.command {
        Command::Simulate(args) => simulate(args),
        Command::Ingest(args) => ingest(args),
        Command::Frequencies(args) => frequencies(args),
    };

    if let Err(e) = outcome {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn simulate(args: SimulateArgs) -> Result<()> {
    let config = build_config(&args);
    let lottery = config.lottery()?;
    let cli_entries = args
        .entries
        .iter()
        .map(|e| parse_entry(e).map_err(anyhow::Error::msg))
        .collect::<Result<Vec<_>>>()?;

    let entries = match (&args.entries_file, cli_entries.is_empty()) {
        (Some(path), _) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading entries file {}", path.display()))?;
            let indexed: BTreeMap<u32, Vec<u32>> = serde_json::from_str(&json)
                .with_context(|| format!("parsing entries file {}", path.display()))?;
            let mut entries = EntrySet::from_indexed(&lottery, indexed)?;
            if !cli_entries.is_empty() {
                let mut all: Vec<Vec<u32>> = entries.iter().map(<[u32]>::to_vec).collect();
                all.extend(cli_entries);
                entries = EntrySet::new(&lottery, all)?;
            }
            entries
        }
        (None, false) => EntrySet::new(&lottery, cli_entries)?,
        (None, true) => {
            warn!("no entries given, betting on 1..={}", lottery.draw_size());
            EntrySet::first_numbers(&lottery)
        }
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 DRAWSIM - DRAWS UNTIL A WIN                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Universe:       1-{}", config.universe_size);
    println!("  Draw Size:      {}", config.draw_size);
    println!("  Trials:         {}", config.num_trials);
    println!("  Entries:        {}", entries.len());
    if let Some(cap) = config.max_draws_per_trial {
        println!("  Max Draws:      {}", cap);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    let run = run_simulation(&config, &entries)?;
    let report = SimReport::from_run(&run, &lottery, &entries);

    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        fs::write(&filename, report.to_json())
            .with_context(|| format!("writing {}", filename))?;
        info!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn build_config(args: &SimulateArgs) -> SimConfig {
    let base = if args.quick {
        SimConfig::quick_check()
    } else {
        SimConfig::default()
    };

    SimConfig {
        universe_size: args.universe_size.unwrap_or(base.universe_size),
        draw_size: args.draw_size.unwrap_or(base.draw_size),
        num_trials: args.num_trials.unwrap_or(base.num_trials),
        seed: args.seed,
        max_draws_per_trial: args.max_draws,
        label: args.label.clone(),
    }
}

fn parse_entry(value: &str) -> Result<Vec<u32>, String> {
    value
        .split(|c: char| c == ',' || c == '-' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .map_err(|_| format!("'{}' is not a number", s))
        })
        .collect()
}

fn ingest(args: IngestArgs) -> Result<()> {
    let html = load_source(&args.source)?;
    let records = parse_draw_results(&html)?;
    let records = filter_sparse_games(records, args.min_draws);

    let mut db = ResultsDb::open(&args.db)
        .with_context(|| format!("opening database {}", args.db.display()))?;
    let inserted = db.insert_records(&records)?;

    info!(
        parsed = records.len(),
        inserted,
        total = db.draw_count(None)?,
        "ingest complete"
    );
    for game in db.games()? {
        let latest = db
            .latest_draw_date(&game)?
            .map(|d| d.to_string())
            .unwrap_or_else(|| "-".to_string());
        println!(
            "  {:<30} {:>6} draws, latest {}",
            game,
            db.draw_count(Some(&game))?,
            latest
        );
    }

    Ok(())
}

fn frequencies(args: FrequencyArgs) -> Result<()> {
    let db = ResultsDb::open(&args.db)
        .with_context(|| format!("opening database {}", args.db.display()))?;
    let game = args.game.as_deref();

    let counts = db.number_frequencies(game)?;
    if counts.is_empty() {
        warn!("no draws stored for {}", game.unwrap_or("any game"));
        return Ok(());
    }

    let freq = NumberFrequencies::from_counts(game, db.draw_count(game)?, &counts);
    println!("{}", freq.to_text());
    println!("Most common: {:?}", freq.most_common(5));

    Ok(())
}
