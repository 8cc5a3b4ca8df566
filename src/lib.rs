//! debate-coach: pro/con debate practice against a remote chat model
//!
//! Session flow: topic suggestion → stance draw → eight phase walk → feedback → JSON record

pub mod core;
pub mod error;
pub mod types;

pub use error::DebateError;

// =============================================================================
// REMOTE ENDPOINT
// =============================================================================

/// Chat-completion endpoint used unless overridden
pub const DEFAULT_ENDPOINT: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Model identifier used unless overridden
pub const DEFAULT_MODEL: &str = "deepseek/deepseek-r1:free";

/// Sent as `HTTP-Referer` on every request
pub const HTTP_REFERER: &str = "debate_program";

// =============================================================================
// FEEDBACK
// =============================================================================

/// Marker the evaluator is asked to put before its improvement advice.
/// Text after the last occurrence becomes the improvement note.
pub const FEEDBACK_DELIMITER: &str = "개선할 점:";

// =============================================================================
// SESSION DEFAULTS
// =============================================================================

pub const DEFAULT_CATEGORY: &str = "미지정";
pub const DEFAULT_USER_LEVEL: &str = "고등학생";
pub const DEFAULT_DIFFICULTY: &str = "중";

/// Base directory for saved sessions
pub const DEFAULT_OUTPUT_DIR: &str = "./debates";

/// Upper bound on rejected topic suggestions before giving up
pub const DEFAULT_MAX_SUGGESTIONS: usize = 10;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
