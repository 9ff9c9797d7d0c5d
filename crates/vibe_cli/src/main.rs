//! Life Vibes Check CLI
//!
//! Terminal front end: pick traits, get a vibe score, see the leaderboard.

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;
use vibe_core::{
    is_celebration, reveal_frames, seeded_rng, share_with_fallback, FileLeaderboardStore,
    LeaderboardStore, QuizConfig, QuizOutcome, QuizSession, ShareChannel, ShareError,
    ShareOutcome, TraitCatalog,
};

#[derive(Parser)]
#[command(name = "vibe")]
#[command(about = "Life Vibes Check: rate your chaos, calculate your destiny", long_about = None)]
struct Cli {
    /// Leaderboard JSON file (overrides config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Custom catalog JSON file (overrides config)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every category and option
    Catalog,

    /// Take the quiz once and record the score
    Play {
        /// Your vibe name
        #[arg(long)]
        nickname: String,

        /// Trait to select, as CATEGORY=OPTION (repeatable)
        #[arg(long = "pick", value_name = "CATEGORY=OPTION", required = true)]
        picks: Vec<String>,

        /// Seed for a reproducible score
        #[arg(long)]
        seed: Option<u64>,

        /// Show the score immediately
        #[arg(long, default_value = "false")]
        no_delay: bool,

        /// Print the share text
        #[arg(long, default_value = "false")]
        share: bool,
    },

    /// Show past scores
    Leaderboard {
        /// Number of rows (defaults to every record)
        #[arg(long)]
        top: Option<usize>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = QuizConfig::from_env()?;
    if let Some(store) = cli.store {
        config.leaderboard_path = store;
    }
    if let Some(catalog) = cli.catalog {
        config.catalog_path = Some(catalog);
    }
    config.validate()?;

    match cli.command {
        Commands::Catalog => {
            let catalog = load_catalog(&config)?;
            print_catalog(&catalog);
        }

        Commands::Play { nickname, picks, seed, no_delay, share } => {
            let catalog = load_catalog(&config)?;
            let seed = seed.unwrap_or_else(rand::random);
            log::debug!("Using seed {}", seed);

            let store = FileLeaderboardStore::new(&config.leaderboard_path);
            let mut session = QuizSession::new(catalog, store, seeded_rng(seed));

            session.set_nickname(nickname)?;
            for pick in &picks {
                let (category_id, option_text) = parse_pick(pick)?;
                session
                    .toggle(category_id, option_text)
                    .with_context(|| format!("Invalid pick '{}'", pick))?;
            }

            if !session.can_submit() {
                bail!("A nickname and at least one pick are required");
            }

            let outcome = session.submit()?;

            if no_delay {
                println!("{}", outcome.score());
            } else {
                reveal(&outcome, &config)?;
            }

            print_result(&outcome, &config);
            print_top(session.leaderboard().records(), config.top_n);

            if share {
                let mut clipboard = StdoutChannel;
                if share_with_fallback(None, &mut clipboard, &outcome.share_text())
                    == ShareOutcome::Unavailable
                {
                    log::debug!("Share unavailable");
                }
            }
        }

        Commands::Leaderboard { top } => {
            let store = FileLeaderboardStore::new(&config.leaderboard_path);
            let leaderboard = store.load();

            if leaderboard.is_empty() {
                println!("No vibes recorded yet.");
                return Ok(());
            }

            let rows = top.unwrap_or(leaderboard.len());
            println!("🏆 Leaderboard ({} total)", leaderboard.len());
            for (i, record) in leaderboard.top(rows).iter().enumerate() {
                println!(
                    "{:>4}. {:<20} {:>3}   {}",
                    i + 1,
                    record.nickname,
                    record.score,
                    record.format_timestamp()
                );
            }
        }
    }

    Ok(())
}

fn load_catalog(config: &QuizConfig) -> Result<TraitCatalog> {
    match &config.catalog_path {
        Some(path) => Ok(TraitCatalog::load(path)?),
        None => Ok(TraitCatalog::life_vibes()),
    }
}

/// Split `CATEGORY=OPTION`
fn parse_pick(pick: &str) -> Result<(&str, &str)> {
    let (category_id, option_text) =
        pick.split_once('=').ok_or_else(|| anyhow!("Expected CATEGORY=OPTION, got '{}'", pick))?;

    let category_id = category_id.trim();
    let option_text = option_text.trim();
    if category_id.is_empty() || option_text.is_empty() {
        bail!("Expected CATEGORY=OPTION, got '{}'", pick);
    }

    Ok((category_id, option_text))
}

/// Count up to the final score over the configured delay
fn reveal(outcome: &QuizOutcome, config: &QuizConfig) -> Result<()> {
    println!("🎲 Calculating Your Destiny...");

    let frames = reveal_frames(outcome.score(), config.reveal_step);
    let pause = Duration::from_millis(config.reveal_delay_ms / frames.len().max(1) as u64);

    let mut stdout = std::io::stdout();
    for frame in frames {
        write!(stdout, "\r{:>3}", frame)?;
        stdout.flush()?;
        std::thread::sleep(pause);
    }
    writeln!(stdout)?;
    Ok(())
}

fn print_result(outcome: &QuizOutcome, config: &QuizConfig) {
    println!("\n{}'s Vibe Score: {}", outcome.record.nickname, outcome.score());
    if is_celebration(outcome.score(), config.celebration_threshold) {
        println!("🎉🎉🎉");
    }
    println!("{}", outcome.message);
    println!("{}", outcome.rank_text());
}

fn print_top(records: &[vibe_core::ScoreRecord], n: usize) {
    println!("\nTop Vibes");
    for record in records.iter().take(n) {
        println!("   {:<20} {:>3}", record.nickname, record.score);
    }
}

fn print_catalog(catalog: &TraitCatalog) {
    for category in catalog.categories() {
        println!("{} ({})", category.label, category.id);
        for option in &category.options {
            println!("   {:<30} +{:<3} {}", option.text, option.impact, option.description);
        }
    }
}

/// Terminal stand-in for the clipboard
struct StdoutChannel;

impl ShareChannel for StdoutChannel {
    fn name(&self) -> &str {
        "stdout"
    }

    fn share(&mut self, text: &str) -> Result<(), ShareError> {
        let mut stdout = std::io::stdout();
        writeln!(stdout, "\n{}", text).map_err(|e| ShareError::Failed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_pick() {
        assert_eq!(
            parse_pick("personality=Main Character Energy").unwrap(),
            ("personality", "Main Character Energy")
        );
        assert_eq!(parse_pick(" social = Meme Lord ").unwrap(), ("social", "Meme Lord"));
        assert!(parse_pick("personality").is_err());
        assert!(parse_pick("=Meme Lord").is_err());
        assert!(parse_pick("social=").is_err());
    }

    #[test]
    fn test_play_args() {
        let cli = Cli::try_parse_from([
            "vibe",
            "--store",
            "/tmp/scores.json",
            "play",
            "--nickname",
            "Ada",
            "--pick",
            "personality=Chaotic Good",
            "--pick",
            "social=Meme Lord",
            "--seed",
            "7",
            "--no-delay",
        ])
        .unwrap();

        assert_eq!(cli.store, Some(PathBuf::from("/tmp/scores.json")));
        match cli.command {
            Commands::Play { nickname, picks, seed, no_delay, share } => {
                assert_eq!(nickname, "Ada");
                assert_eq!(picks.len(), 2);
                assert_eq!(seed, Some(7));
                assert!(no_delay);
                assert!(!share);
            }
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn test_play_requires_pick() {
        assert!(Cli::try_parse_from(["vibe", "play", "--nickname", "Ada"]).is_err());
    }

    #[test]
    fn test_played_runs_reach_leaderboard_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("scores.json");

        let store = FileLeaderboardStore::new(&path);
        let mut session = QuizSession::new(TraitCatalog::life_vibes(), store, seeded_rng(11));
        session.set_nickname("Ada").unwrap();
        let (c, o) = parse_pick("personality=Main Character Energy").unwrap();
        session.toggle(c, o).unwrap();
        let outcome = session.submit().unwrap();

        let leaderboard = FileLeaderboardStore::new(&path).load();
        assert_eq!(leaderboard.records()[0], outcome.record);
    }
}
