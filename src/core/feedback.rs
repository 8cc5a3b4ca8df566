//! Post-debate evaluation
//!
//! The improvement note is cut out of free text by a marker search. This is brittle:
//! a reply that omits the marker yields no note, and one that quotes it yields the wrong
//! note. A marker with nothing after it still records an empty note.

use tracing::{info, warn};

use super::prompts;
use super::responder::Responder;
use crate::error::Result;
use crate::types::Session;
use crate::FEEDBACK_DELIMITER;

/// Ask for an evaluation of the whole transcript and store it on the session.
///
/// Returns the raw feedback text. The transcript itself is not extended.
pub async fn request_feedback<R: Responder + ?Sized>(
    responder: &R,
    session: &mut Session,
) -> Result<String> {
    let instruction = prompts::feedback_instruction(
        session.topic(),
        session.user_stance(),
        session.bot_stance(),
        session.settings(),
    );
    let reply = responder
        .reply(session.transcript().messages(), &instruction)
        .await?;

    match extract_improvement(&reply) {
        Some(note) => {
            info!(chars = note.chars().count(), "improvement note extracted");
            session.improvements.push(note);
        }
        None => warn!("feedback has no improvement marker"),
    }
    session.feedback = Some(reply.clone());
    Ok(reply)
}

/// Trimmed text after the last [`FEEDBACK_DELIMITER`]; `None` only if the marker is absent
pub fn extract_improvement(reply: &str) -> Option<String> {
    let (_, tail) = reply.rsplit_once(FEEDBACK_DELIMITER)?;
    Some(tail.trim().to_string())
}
