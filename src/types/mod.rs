//! Core types for debate sessions

mod message;
mod phase;
mod record;
mod session;
mod stance;

pub use message::{Message, Role, Transcript};
pub use phase::{Actor, Phase, PhaseKind, PHASES};
pub use record::{SessionRecord, RECORD_TIME_FORMAT};
pub use session::{Session, SessionSettings};
pub use stance::{FixedStances, RandomStances, Stance, StanceSource};
