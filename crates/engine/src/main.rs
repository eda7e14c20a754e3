//! Axis Mundi Engine - Command-line entry point.
//!
//! Every subcommand takes an actor key (a path relative to the data
//! directory, or an absolute path) and prints JSON to stdout. Logs go to
//! stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use axismundi_engine::infrastructure::config::EngineConfig;
use axismundi_engine::App;

/// Axis Mundi actor tool
#[derive(Parser, Debug)]
#[command(
    name = "axismundi",
    version,
    about = "Derive, inspect, and maintain Axis Mundi actor records"
)]
struct Cli {
    /// Directory holding actor JSON files (overrides AXISMUNDI_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the derivation pipeline and print the derived actor
    Derive {
        /// Actor key
        actor: String,
        /// Write the derived actor back to its file
        #[arg(long)]
        write: bool,
    },
    /// Print the full sheet context for an actor
    Sheet {
        actor: String,
    },
    /// Print the roll-data projection used by dice formulas
    RollData {
        actor: String,
    },
    /// Give a character without skills the starter skill set
    SeedSkills {
        actor: String,
    },
    /// Recalculate every skill rating on a character
    RateSkills {
        actor: String,
    },
}

fn main() -> Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "axismundi_engine=info,axismundi=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = EngineConfig::from_env().context("Invalid engine configuration")?;
    if let Some(data_dir) = cli.data_dir {
        config = config.with_data_dir(data_dir);
    }
    let app = App::from_config(&config).context("Failed to initialize engine")?;

    match cli.command {
        Command::Derive { actor, write } => {
            let derived = if write {
                app.use_cases.derive.execute_and_save(&actor)
            } else {
                app.use_cases.derive.execute(&actor)
            }
            .with_context(|| format!("Failed to derive {actor}"))?;
            print_json(&derived)
        }
        Command::Sheet { actor } => {
            let sheet = app
                .use_cases
                .sheet
                .get_sheet(&actor)
                .with_context(|| format!("Failed to build sheet for {actor}"))?;
            print_json(&sheet)
        }
        Command::RollData { actor } => {
            let roll_data = app
                .use_cases
                .sheet
                .get_roll_data(&actor)
                .with_context(|| format!("Failed to project roll data for {actor}"))?;
            print_json(&roll_data)
        }
        Command::SeedSkills { actor } => {
            let result = app
                .use_cases
                .skills
                .seed(&actor)
                .with_context(|| format!("Failed to seed skills for {actor}"))?;
            if result.added == 0 {
                tracing::info!(actor = %actor, "No skills added");
            }
            print_json(&result.actor)
        }
        Command::RateSkills { actor } => {
            let rated = app
                .use_cases
                .skills
                .rate(&actor)
                .with_context(|| format!("Failed to rate skills for {actor}"))?;
            print_json(&rated)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
    println!("{json}");
    Ok(())
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides, then fall back to the working directory.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
    let _ = dotenvy::dotenv();
}
