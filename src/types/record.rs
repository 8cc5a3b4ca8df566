//! Persisted shape of a finished session

use serde::{Deserialize, Serialize};

use super::{Message, Session, Stance};

/// Timestamp format stored in the `time` field
pub const RECORD_TIME_FORMAT: &str = "%y-%m-%d %H:%M:%S";

/// One JSON file per session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub time: String,
    pub topic: String,
    pub category: String,
    pub user_level: String,
    pub difficulty: String,
    pub user_stance: Stance,
    pub bot_stance: Stance,
    pub chat_log: Vec<Message>,
    pub feedback: Option<String>,
    pub improvements: Vec<String>,
    pub summary_notes: Vec<String>,
}

impl From<&Session> for SessionRecord {
    fn from(session: &Session) -> Self {
        let settings = session.settings();
        Self {
            time: session.created_at().format(RECORD_TIME_FORMAT).to_string(),
            topic: session.topic().to_string(),
            category: settings.category.clone(),
            user_level: settings.user_level.clone(),
            difficulty: settings.difficulty.clone(),
            user_stance: session.user_stance(),
            bot_stance: session.bot_stance(),
            chat_log: session.transcript().messages().to_vec(),
            feedback: session.feedback.clone(),
            improvements: session.improvements.clone(),
            summary_notes: session.summary_notes.clone(),
        }
    }
}
