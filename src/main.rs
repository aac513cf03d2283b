use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "studyquest")]
#[command(about = "StudyQuest - gamified study tracking with streaks, badges and points")]
#[command(version)]
struct Cli {
    /// Path to the snapshot file (defaults to the configured data file)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    /// Path to the config file (defaults to ~/.studyquest/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show one profile's stats, streak, points and badges
    Overview {
        /// Profile id or name
        #[arg(short, long)]
        profile: String,
    },

    /// Show the top five profiles
    Leaderboard {
        /// Ranking mode: all-time or daily
        #[arg(short, long, default_value = "all-time")]
        mode: String,
    },

    /// Show upcoming exams bucketed by urgency
    Exams {
        /// Profile id or name
        #[arg(short, long)]
        profile: String,
    },

    /// Show the badge wall for a profile
    Badges {
        /// Profile id or name
        #[arg(short, long)]
        profile: String,
    },

    /// Write a starter config and sample snapshot
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = match &cli.config {
        Some(path) => studyquest::config::Config::from_file(path)?,
        None => studyquest::config::Config::load_global()?,
    };
    let data = cli.data.as_deref();

    match cli.command {
        Some(Commands::Overview { profile }) => {
            cli::overview::overview_command(&config, data, &profile, cli.json)?;
        }
        Some(Commands::Leaderboard { mode }) => {
            cli::leaderboard::leaderboard_command(&config, data, &mode, cli.json)?;
        }
        Some(Commands::Exams { profile }) => {
            cli::exams::exams_command(&config, data, &profile, cli.json)?;
        }
        Some(Commands::Badges { profile }) => {
            cli::badges::badges_command(&config, data, &profile, cli.json)?;
        }
        Some(Commands::Init { force }) => {
            cli::init::init_command(cli.config.as_deref(), data, force)?;
        }
        None => {
            // Default: show the all-time leaderboard
            cli::leaderboard::leaderboard_command(&config, data, "all-time", cli.json)?;
        }
    }

    Ok(())
}
