//! The fixed debate sequence

use super::Stance;

/// Stage of the debate. Each stage is spoken once per side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Opening,
    Rebuttal,
    CounterRebuttal,
    Closing,
}

impl PhaseKind {
    /// Korean stage name
    pub fn label(self) -> &'static str {
        match self {
            PhaseKind::Opening => "입론",
            PhaseKind::Rebuttal => "반박",
            PhaseKind::CounterRebuttal => "재반박",
            PhaseKind::Closing => "정리",
        }
    }
}

impl std::fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Who speaks in a phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Actor {
    Human,
    Counterpart,
}

impl Actor {
    /// Korean participant name used in notes and prompts
    pub fn label(self) -> &'static str {
        match self {
            Actor::Human => "사용자",
            Actor::Counterpart => "상대",
        }
    }
}

/// One step of the debate: a stage spoken by one side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Phase {
    pub kind: PhaseKind,
    pub side: Stance,
}

impl Phase {
    pub const fn new(kind: PhaseKind, side: Stance) -> Self {
        Self { kind, side }
    }

    /// The human speaks in every phase on their own side
    pub fn actor(&self, user_stance: Stance) -> Actor {
        if self.side == user_stance {
            Actor::Human
        } else {
            Actor::Counterpart
        }
    }
}

/// All eight phases in speaking order, pro side first within each stage
pub const PHASES: [Phase; 8] = [
    Phase::new(PhaseKind::Opening, Stance::Pro),
    Phase::new(PhaseKind::Opening, Stance::Con),
    Phase::new(PhaseKind::Rebuttal, Stance::Pro),
    Phase::new(PhaseKind::Rebuttal, Stance::Con),
    Phase::new(PhaseKind::CounterRebuttal, Stance::Pro),
    Phase::new(PhaseKind::CounterRebuttal, Stance::Con),
    Phase::new(PhaseKind::Closing, Stance::Pro),
    Phase::new(PhaseKind::Closing, Stance::Con),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_stage_once_per_side() {
        for kind in [
            PhaseKind::Opening,
            PhaseKind::Rebuttal,
            PhaseKind::CounterRebuttal,
            PhaseKind::Closing,
        ] {
            let sides: Vec<Stance> = PHASES.iter().filter(|p| p.kind == kind).map(|p| p.side).collect();
            assert_eq!(sides, vec![Stance::Pro, Stance::Con], "stage {kind}");
        }
    }

    #[test]
    fn test_actor_assignment() {
        let opening_pro = PHASES[0];
        assert_eq!(opening_pro.actor(Stance::Pro), Actor::Human);
        assert_eq!(opening_pro.actor(Stance::Con), Actor::Counterpart);
    }

    #[test]
    fn test_human_speaks_half_the_phases() {
        for stance in [Stance::Pro, Stance::Con] {
            let human = PHASES.iter().filter(|p| p.actor(stance) == Actor::Human).count();
            assert_eq!(human, 4);
        }
    }
}
