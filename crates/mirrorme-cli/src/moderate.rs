//! Moderation check command handler.

use mirrorme_chat::{moderate_message, ModerationVerdict};

/// Run `text` through the moderation gate, printing the outcome.
///
/// Returns `true` when the message was blocked so `main` can exit
/// nonzero, which lets shell scripts use this as a pre-send check.
pub(crate) fn run_moderate(text: &str) -> bool {
    match moderate_message(text) {
        ModerationVerdict::Blocked { warning, .. } => {
            println!("blocked: {warning}");
            true
        }
        ModerationVerdict::Allowed => {
            println!("ok: message passes moderation");
            false
        }
    }
}
