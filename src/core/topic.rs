//! Topic suggestion loop
//!
//! Enter accepts, any other text asks for another suggestion, `quit`/`exit` cancels.
//! The loop gives up after a fixed number of rejected suggestions.

use tracing::debug;

use super::console::Console;
use super::prompts;
use super::responder::Responder;
use crate::error::{DebateError, Result};
use crate::types::SessionSettings;

const ACCEPT_LABEL: &str = "\n이 주제로 진행하려면 Enter, 다른 주제를 원하면 아무 내용이나 입력하세요 (종료: quit): ";

/// Fetch suggestions until the user accepts one
pub async fn suggest_topic<R, C>(
    responder: &R,
    console: &mut C,
    settings: &SessionSettings,
    max_attempts: usize,
) -> Result<String>
where
    R: Responder + ?Sized,
    C: Console + ?Sized,
{
    let instruction = prompts::topic_instruction(settings);

    for attempt in 1..=max_attempts {
        let topic = responder.reply(&[], &instruction).await?.trim().to_string();
        debug!(attempt, topic = %topic, "topic suggested");
        console.say(&format!("\n추천 토론 주제: {}", topic));

        let answer = console.prompt(ACCEPT_LABEL)?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(topic);
        }
        if answer.eq_ignore_ascii_case("quit") || answer.eq_ignore_ascii_case("exit") {
            return Err(DebateError::Cancelled);
        }
    }

    Err(DebateError::TopicsExhausted {
        attempts: max_attempts,
    })
}
