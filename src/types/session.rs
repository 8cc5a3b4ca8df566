//! Session state for one debate run

use chrono::{DateTime, Local};

use super::{Message, Stance, StanceSource, Transcript};
use crate::{DEFAULT_CATEGORY, DEFAULT_DIFFICULTY, DEFAULT_USER_LEVEL};

/// User-chosen parameters that shape topic and prompt wording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    pub category: String,
    pub user_level: String,
    pub difficulty: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY.to_string(),
            user_level: DEFAULT_USER_LEVEL.to_string(),
            difficulty: DEFAULT_DIFFICULTY.to_string(),
        }
    }
}

impl SessionSettings {
    /// Build from raw console answers; blank answers fall back to defaults
    pub fn from_answers(category: &str, user_level: &str, difficulty: &str) -> Self {
        let pick = |value: &str, default: &str| {
            let value = value.trim();
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };
        Self {
            category: pick(category, DEFAULT_CATEGORY),
            user_level: pick(user_level, DEFAULT_USER_LEVEL),
            difficulty: pick(difficulty, DEFAULT_DIFFICULTY),
        }
    }
}

/// One debate run.
///
/// Stances are fixed at construction. The transcript only grows.
#[derive(Debug, Clone)]
pub struct Session {
    topic: String,
    settings: SessionSettings,
    user_stance: Stance,
    bot_stance: Stance,
    created_at: DateTime<Local>,
    transcript: Transcript,
    pub feedback: Option<String>,
    pub improvements: Vec<String>,
    pub summary_notes: Vec<String>,
}

impl Session {
    /// Create a session, drawing the user's stance from `stances`
    pub fn new(
        topic: impl Into<String>,
        settings: SessionSettings,
        stances: &mut impl StanceSource,
    ) -> Self {
        Self::with_stance(topic, settings, stances.next_stance())
    }

    /// Create a session with a known user stance
    pub fn with_stance(topic: impl Into<String>, settings: SessionSettings, user_stance: Stance) -> Self {
        Self {
            topic: topic.into(),
            settings,
            user_stance,
            bot_stance: user_stance.complement(),
            created_at: Local::now(),
            transcript: Transcript::new(),
            feedback: None,
            improvements: Vec::new(),
            summary_notes: Vec::new(),
        }
    }

    /// Override the creation time (record naming depends on it)
    pub fn created_at_time(mut self, at: DateTime<Local>) -> Self {
        self.created_at = at;
        self
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    pub fn user_stance(&self) -> Stance {
        self.user_stance
    }

    pub fn bot_stance(&self) -> Stance {
        self.bot_stance
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn add_entry(&mut self, message: Message) {
        self.transcript.push(message);
    }

    pub fn add_note(&mut self, note: impl Into<String>) {
        self.summary_notes.push(note.into());
    }
}
