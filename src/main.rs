use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use questline::config::Config;
use questline::store::TrackerStore;
use questline::tracker::Tracker;

mod cli;

#[derive(Parser)]
#[command(name = "questline")]
#[command(about = "Gamified task tracker - earn XP, levels, streaks and achievements")]
#[command(version)]
struct Cli {
    /// Path to the database file (defaults to ~/.questline/questline.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Category: work, personal or health
        #[arg(short, long)]
        category: Option<String>,

        /// Priority: normal, important or urgent
        #[arg(short, long, default_value = "normal")]
        priority: String,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<String>,
    },

    /// Add a task from a dictated transcript
    Voice {
        /// Transcript text, used as the task title
        transcript: String,
    },

    /// List tasks
    List {
        /// Only show tasks in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Include completed tasks
        #[arg(short, long)]
        all: bool,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Complete a task and collect the rewards
    Complete {
        /// Task ID
        id: String,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: String,
    },

    /// Show XP, level, streak and counters
    Stats {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show all achievements and their unlock status
    Achievements,

    /// Show today's bonus task, generating it if needed
    Bonus,

    /// Show or change settings
    Config {
        /// Enable or disable the daily bonus task
        #[arg(long)]
        daily_bonus: Option<bool>,

        /// Enable or disable encouragement messages
        #[arg(long)]
        encouragement: Option<bool>,

        /// Default category for new tasks
        #[arg(long)]
        default_category: Option<String>,
    },

    /// Delete all tasks, stats and achievements
    Reset {
        /// Skip the confirmation and delete everything
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .init();

    let config = Config::load()?;
    let store = match &cli.db {
        Some(path) => TrackerStore::with_path(path)?,
        None => TrackerStore::new()?,
    };
    let tracker = Tracker::new(store);

    match cli.command {
        Commands::Add {
            title,
            description,
            category,
            priority,
            due,
        } => {
            cli::add::add_command(&tracker, &config, &title, &description, category, &priority, due)?;
        }
        Commands::Voice { transcript } => {
            cli::voice::voice_command(&tracker, &transcript)?;
        }
        Commands::List {
            category,
            all,
            json,
        } => {
            cli::list::list_command(&tracker, category, all, json)?;
        }
        Commands::Complete { id } => {
            cli::complete::complete_command(&tracker, &config, &id)?;
        }
        Commands::Delete { id } => {
            cli::delete::delete_command(&tracker, &id)?;
        }
        Commands::Stats { json } => {
            cli::stats::stats_command(&tracker, json)?;
        }
        Commands::Achievements => {
            cli::achievements::achievements_command(&tracker)?;
        }
        Commands::Bonus => {
            cli::bonus::bonus_command(&tracker, &config)?;
        }
        Commands::Config {
            daily_bonus,
            encouragement,
            default_category,
        } => {
            cli::config::config_command(daily_bonus, encouragement, default_category)?;
        }
        Commands::Reset { force } => {
            cli::reset::reset_command(&tracker, force)?;
        }
    }

    Ok(())
}
