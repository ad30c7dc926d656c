mod config;
mod drill;
mod render;

use anyhow::Context;
use clap::{Parser, Subcommand};
use config::{Config, Overrides};
use quiz_core::{load_deck, DirectorySource, QuizSession};
use render::OutputFormat;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "uniquiz", about = "Drill flashcard decks until every card is learned", version)]
struct Cli {
    /// Directory holding tab-separated deck files
    #[arg(long, global = true)]
    deck_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List available decks
    List,

    /// Print every card in a deck
    Show {
        /// Deck file name, e.g. gre.txt
        deck: String,
    },

    /// Drill a deck interactively
    Drill {
        /// Deck file name, e.g. gre.txt
        deck: String,
        /// Seed for card selection
        #[arg(long)]
        seed: Option<u64>,
        /// Answers at least this long accept any matching substring
        #[arg(long)]
        min_match_len: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut overrides = Overrides {
        deck_dir: cli.deck_dir,
        ..Overrides::default()
    };
    if let Command::Drill {
        seed,
        min_match_len,
        ..
    } = &cli.command
    {
        overrides.seed = *seed;
        overrides.min_match_len = *min_match_len;
    }
    let config = Config::from_env()?.merge(overrides);

    let source = DirectorySource::new(&config.deck_dir);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Command::List => {
            let decks = source
                .catalog()
                .with_context(|| format!("listing decks in {}", config.deck_dir.display()))?;
            render::catalog(&mut out, cli.format, &decks)?;
        }
        Command::Show { deck } => {
            let cards = load_deck(&source, &deck)?;
            if cards.is_empty() {
                render::notice(&mut out, cli.format, &format!("No usable content in {deck}."))?;
                return Ok(());
            }
            render::cards(&mut out, cli.format, cards.iter())?;
        }
        Command::Drill { deck, .. } => {
            let cards = load_deck(&source, &deck)?;
            if cards.is_empty() {
                render::notice(&mut out, cli.format, &format!("No usable content in {deck}."))?;
                return Ok(());
            }
            tracing::info!(deck = %deck, cards = cards.size(), "starting drill");
            let mut session = QuizSession::with_settings(cards, config.quiz)?;
            drill::run(&mut session, std::io::stdin().lock(), &mut out, cli.format)?;
        }
    }

    Ok(())
}
