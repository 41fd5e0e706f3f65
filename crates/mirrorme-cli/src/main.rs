use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};
use mirrorme_match::PeerDirectory;

mod analyze;
mod matches;
mod moderate;

use matches::MatchCommands;

#[derive(Debug, Parser)]
#[command(name = "mirrorme-cli")]
#[command(about = "MirrorMe peer support toolkit")]
struct Cli {
    /// Load the peer roster from a YAML file instead of the built-in pool
    #[arg(long, global = true, value_name = "PATH")]
    peers: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Analyze a journal text and print its emotional signal
    Analyze {
        /// Support mode to request (vent, advice, or accountability)
        #[arg(long, default_value = "vent")]
        mode: String,
        /// Print the signal as JSON instead of a readable summary
        #[arg(long)]
        json: bool,
        /// The journal text to analyze
        text: String,
    },
    /// Rank and inspect the peer pool
    Matches {
        #[command(subcommand)]
        command: MatchCommands,
    },
    /// Run a chat message through the moderation gate
    Moderate {
        /// The chat message to check
        text: String,
    },
}

fn load_directory(peers: Option<&Path>) -> anyhow::Result<PeerDirectory> {
    match peers {
        Some(path) => PeerDirectory::from_yaml(path)
            .with_context(|| format!("failed to load peer roster from {}", path.display())),
        None => Ok(PeerDirectory::builtin()),
    }
}

fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let directory = load_directory(cli.peers.as_deref())?;

    match cli.command {
        Some(Commands::Analyze { mode, json, text }) => {
            analyze::run_analyze(&text, &mode, json)?;
        }
        Some(Commands::Matches { command }) => match command {
            MatchCommands::List { filter, json } => {
                matches::run_matches_list(&directory, filter.as_deref(), json)?;
            }
            MatchCommands::Best { mode, text } => {
                matches::run_matches_best(&directory, &text, &mode)?;
            }
        },
        Some(Commands::Moderate { text }) => {
            if moderate::run_moderate(&text) {
                return Ok(ExitCode::FAILURE);
            }
        }
        None => println!("mirrorme-cli ready; run with --help to list commands"),
    }

    Ok(ExitCode::SUCCESS)
}
