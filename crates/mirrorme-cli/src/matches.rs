//! Peer match commands: the ranked list view and the single best pick.

use clap::Subcommand;
use mirrorme_chat::opening_message;
use mirrorme_core::MatchFilter;
use mirrorme_match::{PeerDirectory, RankedMatch};
use mirrorme_signal::extract_signal;

use crate::analyze::parse_mode;

/// Sub-commands available under `matches`.
#[derive(Debug, Subcommand)]
pub enum MatchCommands {
    /// List the peer pool ranked by compatibility
    List {
        /// Restrict to one support mode (all, vent, advice, or accountability)
        #[arg(long)]
        filter: Option<String>,
        /// Print the ranked rows as JSON
        #[arg(long)]
        json: bool,
    },
    /// Analyze a text and pick the single best peer for it
    Best {
        /// Support mode to request (vent, advice, or accountability)
        #[arg(long, default_value = "vent")]
        mode: String,
        /// The journal text to match against
        text: String,
    },
}

fn parse_filter(value: &str) -> anyhow::Result<MatchFilter> {
    match value {
        "all" => Ok(MatchFilter::All),
        "vent" => Ok(MatchFilter::Vent),
        "advice" => Ok(MatchFilter::Advice),
        "accountability" => Ok(MatchFilter::Accountability),
        _ => anyhow::bail!(
            "filter must be 'all', 'vent', 'advice', or 'accountability', got '{value}'"
        ),
    }
}

fn shared_label(row: &RankedMatch) -> String {
    row.shared_emotions
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the peer pool ranked by compatibility, optionally filtered by mode.
pub(crate) fn run_matches_list(
    directory: &PeerDirectory,
    filter: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let filter = match filter {
        Some(value) => parse_filter(value)?,
        None => MatchFilter::default(),
    };
    let ranked = directory.rank_matches(None, filter);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("no peers match that filter");
        return Ok(());
    }

    println!(
        "{:<18}{:<22}{:<7}{:<18}SHARED",
        "PEER", "MODE", "SCORE", "QUALITY"
    );
    for row in &ranked {
        println!(
            "{:<18}{:<22}{:<7}{:<18}{}",
            row.peer.display_name,
            row.peer.support_mode.label(),
            row.peer.compatibility_score,
            row.quality.label(),
            shared_label(row)
        );
    }

    Ok(())
}

/// Analyze `text`, pick the best peer for it, and show how that peer
/// would open the conversation.
pub(crate) fn run_matches_best(
    directory: &PeerDirectory,
    text: &str,
    mode: &str,
) -> anyhow::Result<()> {
    let mode = parse_mode(mode)?;
    let signal = extract_signal(text, mode)?;
    let best = directory.find_best_match(&signal);

    println!(
        "matched with {} ({})",
        best.peer.display_name,
        best.quality.label()
    );
    println!("mode:   {}", best.peer.support_mode.label());
    let shared = shared_label(&best);
    if !shared.is_empty() {
        println!("shared: {shared}");
    }
    println!();
    println!("{}", opening_message(&best.peer.display_name));

    Ok(())
}
