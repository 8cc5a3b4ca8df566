//! Debate state machine
//!
//! Walks PHASES in order. Human phases read one console line, counterpart phases make
//! one remote call with the full transcript. Exactly one message is appended per phase.

use tracing::info;

use super::console::Console;
use super::prompts;
use super::responder::Responder;
use crate::error::Result;
use crate::types::{Actor, Message, Phase, PhaseKind, Session, PHASES};

/// Drives one session through the fixed phase sequence
pub struct DebateRunner<'a, R: Responder + ?Sized, C: Console + ?Sized> {
    responder: &'a R,
    console: &'a mut C,
}

impl<'a, R: Responder + ?Sized, C: Console + ?Sized> DebateRunner<'a, R, C> {
    pub fn new(responder: &'a R, console: &'a mut C) -> Self {
        Self { responder, console }
    }

    /// Show topic, stances and phase order
    pub fn introduce(&mut self, session: &Session) {
        self.console.say(&format!("\n 🗣️ 토론 주제: {}", session.topic()));
        self.console.say(&format!(
            "\n[입장 안내]\n사용자 입장: {}\n상대 입장: {}",
            session.user_stance(),
            session.bot_stance()
        ));
        self.console.say(&prompts::order_guide(session.user_stance()));
    }

    /// Run all eight phases. Any error aborts the walk.
    pub async fn run(&mut self, session: &mut Session) -> Result<()> {
        info!(
            topic = session.topic(),
            user_stance = %session.user_stance(),
            bot_stance = %session.bot_stance(),
            "debate started"
        );
        self.introduce(session);

        let mut stage: Option<PhaseKind> = None;
        for phase in PHASES {
            if stage != Some(phase.kind) {
                self.console.banner(&format!("{} 단계", phase.kind.label()));
                stage = Some(phase.kind);
            }
            self.run_phase(session, phase).await?;
        }
        Ok(())
    }

    /// Run a single phase: produce one message and one note
    pub async fn run_phase(&mut self, session: &mut Session, phase: Phase) -> Result<Actor> {
        let actor = phase.actor(session.user_stance());
        match actor {
            Actor::Human => {
                let label = prompts::human_turn_label(phase.side, phase.kind);
                let input = self.console.prompt(&label)?;
                session.add_entry(Message::user(input));
            }
            Actor::Counterpart => {
                self.console.say(&format!(
                    "\n ({} 측) 상대의 {} 작성 중...",
                    phase.side,
                    phase.kind.label()
                ));
                let instruction = prompts::phase_instruction(session.topic(), phase.side, phase.kind);
                let reply = self
                    .responder
                    .reply(session.transcript().messages(), &instruction)
                    .await?;
                self.console.say(&format!(
                    "\n ({} 측) 상대의 {}:\n{}",
                    phase.side,
                    phase.kind.label(),
                    reply
                ));
                session.add_entry(Message::assistant(reply));
            }
        }

        let note = prompts::phase_note(phase.side, actor, phase.kind);
        info!(note = %note, "phase complete");
        session.add_note(note);
        Ok(actor)
    }
}
