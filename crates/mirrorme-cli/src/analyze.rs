//! Journal analysis command handler.

use mirrorme_core::{EmotionalSignal, SupportMode};
use mirrorme_signal::extract_signal;

pub(crate) fn parse_mode(value: &str) -> anyhow::Result<SupportMode> {
    match value {
        "vent" => Ok(SupportMode::Vent),
        "advice" => Ok(SupportMode::Advice),
        "accountability" => Ok(SupportMode::Accountability),
        _ => anyhow::bail!("mode must be 'vent', 'advice', or 'accountability', got '{value}'"),
    }
}

/// Analyze `text` and print the resulting signal, either as a readable
/// summary or as pretty-printed JSON.
pub(crate) fn run_analyze(text: &str, mode: &str, json: bool) -> anyhow::Result<()> {
    let mode = parse_mode(mode)?;
    let signal = extract_signal(text, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&signal)?);
        return Ok(());
    }

    print_signal(&signal);
    Ok(())
}

fn print_signal(signal: &EmotionalSignal) {
    let emotions = signal
        .emotions
        .iter()
        .map(|e| e.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    println!(
        "sentiment: {} (score {:.2})",
        signal.sentiment, signal.sentiment_score
    );
    println!("emotions:  {emotions}");
    println!("risk:      {}", signal.risk_level);
    if signal.crisis_flag {
        println!("crisis:    detected; if you need immediate support, call or text 988");
    }
}
