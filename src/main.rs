//! Luck Arcade launcher.
//!
//! `luck-arcade` (or `luck-arcade console`) starts the interactive menu.
//! `luck-arcade dashboard` serves JSON-lines events on stdin/stdout.

use anyhow::{ensure, Context};
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use luck_arcade::{ArcadeConfig, Console, Dashboard, EditorInput, Session, StreakPolicy};

#[derive(Parser, Debug)]
#[command(author, version, about = "Chance games in the terminal")]
struct Cli {
    /// TOML file with arcade settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Fixed RNG seed for reproducible sessions
    #[arg(short, long)]
    seed: Option<u64>,

    /// Attempt history samples to keep
    #[arg(long)]
    history: Option<usize>,

    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Interactive text menu
    Console {
        /// Skip coin and dice animations
        #[arg(long)]
        no_animation: bool,
    },
    /// JSON-lines event loop on stdin/stdout
    Dashboard,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never mix with game output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => ArcadeConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ArcadeConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(history) = cli.history {
        ensure!(history > 0, "--history must be at least 1");
        config = config.with_history_capacity(history);
    }

    match cli.mode.unwrap_or(Mode::Console { no_animation: false }) {
        Mode::Console { no_animation } => {
            info!(seed = ?config.seed, "starting console");
            let input = EditorInput::new().context("failed to open line editor")?;
            let mut console = Console::new(Session::new(config), input, io::stdout())
                .with_animation(!no_animation);
            console.run()?;
        }
        Mode::Dashboard => {
            let config = config.with_streak_policy(StreakPolicy::OnEveryMiss);
            info!(seed = ?config.seed, "starting dashboard");
            let mut dashboard = Dashboard::new(Session::new(config));
            dashboard.serve(io::stdin().lock(), io::stdout().lock())?;
        }
    }
    Ok(())
}
