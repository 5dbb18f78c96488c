//! Intake Catalog Command-Line Tool
//!
//! Runs the full catalog rebuild and inspects the resulting metadata.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Intake Catalog Command-Line Tool
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(version, about = "Intake catalog rebuild and inspection")]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Rebuild the whole catalog from a seed file
    Rebuild {
        /// Path to the sled database directory
        #[arg(long)]
        db: PathBuf,

        /// Path to the JSON seed file
        #[arg(long)]
        seed: PathBuf,
    },
    /// Show field metadata from the current catalog
    Show {
        /// Path to the sled database directory
        #[arg(long)]
        db: PathBuf,

        /// Entity name (e.g. INTERVIEW)
        entity: String,

        /// Field position; omit to list all fields of the entity
        position: Option<u32>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("intake_cli=info".parse().unwrap())
                .add_directive("intake_core=info".parse().unwrap()),
        )
        .init();

    let args = Args::parse();

    let result = match args.command {
        Command::Rebuild { db, seed } => commands::rebuild(&db, &seed),
        Command::Show {
            db,
            entity,
            position,
        } => commands::show(&db, &entity, position),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
