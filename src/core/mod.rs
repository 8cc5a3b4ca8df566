//! Core modules: remote calls, console, debate flow, persistence

pub mod console;
pub mod debate;
pub mod feedback;
pub mod prompts;
pub mod responder;
pub mod store;
pub mod topic;

pub use console::{Console, ScriptedConsole, StdConsole};
pub use debate::DebateRunner;
pub use feedback::{extract_improvement, request_feedback};
pub use responder::{OpenRouterClient, RecordedCall, Responder, ScriptedResponder};
pub use store::{load_record, sanitize_component, save_session, session_path};
pub use topic::suggest_topic;
