//! Command line front end for Lane Clash battles.
//!
//! ```bash
//! # Default-seed battle between two lineups
//! clash-sim battle "goblin,knight;priest" "wolf,archer;skeleton"
//!
//! # Save a replayable record and inspect the board after three events
//! clash-sim battle teams/a.json teams/b.json --seed 7 --save battle.bin
//! clash-sim replay battle.bin --step 3
//!
//! # Win rates over a thousand seeds
//! clash-sim batch "dragon" "golem,golem" --runs 1000
//! ```
//!
//! Logs go to stderr and are filtered with `RUST_LOG`.

mod render;
mod team_arg;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use clash_battle::rng::XorShiftRng;
use clash_battle::types::{Card, Rarity};
use clash_battle::{
    compute_combat_result_with_rng, describe_combat_result, describe_winner, BattleRecord,
    DEFAULT_BATTLE_SEED,
};
use clash_cards::{all_cards, parse_cards_markdown, unique_types, CardQuery};

use render::BatchSummary;
use team_arg::load_team;

#[derive(Parser)]
#[command(name = "clash-sim")]
#[command(about = "Run and inspect Lane Clash battles")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one battle and print what happened
    Battle {
        /// Team A: a JSON team file or a lineup like "goblin,knight;-,priest"
        team_a: String,

        /// Team B, same format as team A
        team_b: String,

        /// Battle seed (defaults to the standard battle seed)
        #[arg(long)]
        seed: Option<u64>,

        /// Print the result as JSON instead of narration
        #[arg(long)]
        json: bool,

        /// Write a replayable battle record to this file
        #[arg(long)]
        save: Option<PathBuf>,
    },

    /// Show the board of a saved battle at some step
    Replay {
        /// Battle record written by `battle --save`
        file: PathBuf,

        /// Number of events to apply (defaults to all of them)
        #[arg(long)]
        step: Option<usize>,
    },

    /// Run many seeded battles in parallel and count outcomes
    Batch {
        team_a: String,
        team_b: String,

        /// Number of battles
        #[arg(long, default_value_t = 100)]
        runs: u64,

        /// First seed; battles use seeds seed_start..seed_start + runs
        #[arg(long, default_value_t = 0)]
        seed_start: u64,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List cards matching a query
    Cards {
        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,

        /// Only cards of this type
        #[arg(long = "type")]
        card_type: Option<String>,

        /// Only cards of this rarity
        #[arg(long)]
        rarity: Option<String>,

        /// List cards from a markdown card file instead of the catalog
        #[arg(long)]
        markdown: Option<PathBuf>,
    },

    /// Parse a markdown card file and print the cards as JSON
    Parse {
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Battle {
            team_a,
            team_b,
            seed,
            json,
            save,
        } => run_battle(&team_a, &team_b, seed, json, save.as_deref()),
        Commands::Replay { file, step } => run_replay(&file, step),
        Commands::Batch {
            team_a,
            team_b,
            runs,
            seed_start,
            json,
        } => run_batch(&team_a, &team_b, runs, seed_start, json),
        Commands::Cards {
            search,
            card_type,
            rarity,
            markdown,
        } => list_cards(search, card_type, rarity, markdown.as_deref()),
        Commands::Parse { file } => parse_file(&file),
    }
}

fn run_battle(
    team_a: &str,
    team_b: &str,
    seed: Option<u64>,
    json: bool,
    save: Option<&Path>,
) -> Result<()> {
    let pool = all_cards();
    let team_a = load_team(team_a, &pool)?;
    let team_b = load_team(team_b, &pool)?;
    let seed = seed.unwrap_or(DEFAULT_BATTLE_SEED as u64);

    let record = BattleRecord::run(team_a, team_b, seed)?;
    tracing::info!(
        seed,
        events = record.steps(),
        winner = %record.result.winner,
        "battle resolved"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&record.result)?);
    } else {
        for line in describe_combat_result(&record.result) {
            println!("{line}");
        }
        println!("{}", describe_winner(record.result.winner));
    }

    if let Some(path) = save {
        fs::write(path, record.to_bytes())
            .with_context(|| format!("failed to write battle record {}", path.display()))?;
        tracing::info!(path = %path.display(), "battle record saved");
    }

    Ok(())
}

fn run_replay(file: &Path, step: Option<usize>) -> Result<()> {
    let bytes = fs::read(file)
        .with_context(|| format!("failed to read battle record {}", file.display()))?;
    let record = BattleRecord::from_bytes(&bytes)
        .with_context(|| format!("invalid battle record {}", file.display()))?;

    let step = step.unwrap_or(record.steps()).min(record.steps());
    println!("step {step} of {} (seed {})", record.steps(), record.seed);
    for line in render::board_lines(&record.board_at(step)) {
        println!("{line}");
    }
    if step == record.steps() {
        println!("{}", describe_winner(record.result.winner));
    }

    Ok(())
}

fn run_batch(team_a: &str, team_b: &str, runs: u64, seed_start: u64, json: bool) -> Result<()> {
    let pool = all_cards();
    let team_a = load_team(team_a, &pool)?;
    let team_b = load_team(team_b, &pool)?;
    let seed_end = seed_start
        .checked_add(runs)
        .context("seed range overflows u64")?;

    tracing::info!(runs, seed_start, "running batch");
    let summary = (seed_start..seed_end)
        .into_par_iter()
        .map(|seed| {
            let mut rng = XorShiftRng::seed_from_u64(seed);
            compute_combat_result_with_rng(&team_a, &team_b, &mut rng)
                .map(|result| BatchSummary::default().record(result.winner, result.turns()))
        })
        .try_reduce(BatchSummary::default, |left, right| Ok(left.merge(right)))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        for line in summary.lines() {
            println!("{line}");
        }
    }

    Ok(())
}

fn list_cards(
    search: Option<String>,
    card_type: Option<String>,
    rarity: Option<String>,
    markdown: Option<&Path>,
) -> Result<()> {
    let cards = match markdown {
        Some(path) => load_markdown(path)?,
        None => all_cards(),
    };

    let mut query = CardQuery::new();
    if let Some(search) = &search {
        query = query.search(search);
    }
    if let Some(card_type) = &card_type {
        query = query.card_type(card_type);
    }
    if let Some(rarity) = &rarity {
        let Some(rarity) = Rarity::from_name(rarity) else {
            bail!("unknown rarity \"{rarity}\" (expected one of common, uncommon, rare, legendary)");
        };
        query = query.rarity(rarity);
    }

    let matches = query.apply(&cards);
    for card in &matches {
        println!("{}", render::card_line(card));
    }
    println!(
        "{} of {} cards (types: {})",
        matches.len(),
        cards.len(),
        unique_types(&cards).join(", ")
    );

    Ok(())
}

fn parse_file(file: &Path) -> Result<()> {
    let cards = load_markdown(file)?;
    println!("{}", serde_json::to_string_pretty(&cards)?);
    Ok(())
}

fn load_markdown(path: &Path) -> Result<Vec<Card>> {
    let markdown = fs::read_to_string(path)
        .with_context(|| format!("failed to read card file {}", path.display()))?;
    let cards = parse_cards_markdown(&markdown, &path.display().to_string())
        .with_context(|| format!("invalid card file {}", path.display()))?;
    tracing::debug!(count = cards.len(), path = %path.display(), "loaded markdown cards");
    Ok(cards)
}
