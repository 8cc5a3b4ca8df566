//! Debate stances and how they are drawn

use std::collections::VecDeque;

use rand::Rng;
use serde::{Deserialize, Serialize};

/// One of the two mutually exclusive debate positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stance {
    /// In favor of the motion
    #[serde(rename = "찬성")]
    Pro,
    /// Against the motion
    #[serde(rename = "반대")]
    Con,
}

impl Stance {
    /// The opposing stance
    pub fn complement(self) -> Self {
        match self {
            Stance::Pro => Stance::Con,
            Stance::Con => Stance::Pro,
        }
    }

    /// Korean label, also the serialized form
    pub fn label(self) -> &'static str {
        match self {
            Stance::Pro => "찬성",
            Stance::Con => "반대",
        }
    }
}

impl std::fmt::Display for Stance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Supplies the user's stance at session construction
pub trait StanceSource {
    fn next_stance(&mut self) -> Stance;
}

/// Uniform draw from any `rand` generator
#[derive(Debug)]
pub struct RandomStances<R: Rng>(pub R);

impl RandomStances<rand::rngs::ThreadRng> {
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng> StanceSource for RandomStances<R> {
    fn next_stance(&mut self) -> Stance {
        if self.0.gen_bool(0.5) {
            Stance::Pro
        } else {
            Stance::Con
        }
    }
}

/// Replays a fixed sequence, then repeats the last value
#[derive(Debug, Clone)]
pub struct FixedStances {
    queue: VecDeque<Stance>,
    last: Stance,
}

impl FixedStances {
    pub fn new(sequence: impl IntoIterator<Item = Stance>) -> Self {
        let queue: VecDeque<Stance> = sequence.into_iter().collect();
        let last = queue.back().copied().unwrap_or(Stance::Pro);
        Self { queue, last }
    }

    pub fn always(stance: Stance) -> Self {
        Self::new([stance])
    }
}

impl StanceSource for FixedStances {
    fn next_stance(&mut self) -> Stance {
        self.queue.pop_front().unwrap_or(self.last)
    }
}
