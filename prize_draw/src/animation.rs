use std::time::Duration;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::*;

/// Pacing of the name shuffle shown before a winner is revealed.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub struct ShuffleConfig {
    /// Number of names shown before the reveal.
    pub ticks: u32,
    /// Delay between two consecutive frames.
    pub interval: Duration,
}

impl ShuffleConfig {
    pub const DEFAULT: ShuffleConfig = ShuffleConfig {
        ticks: 20,
        interval: Duration::from_millis(100),
    };
}

impl Default for ShuffleConfig {
    fn default() -> Self {
        ShuffleConfig::DEFAULT
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum Frame {
    /// A random participant, shown for suspense only.
    Shuffle(Participant),
    /// The winner of the draw. Always the last frame.
    Reveal(Entry),
}

/// The sequence of frames for one draw.
///
/// The winner is fixed at construction. The transient names are sampled
/// independently for each frame from the pool (repeats allowed) and have no
/// effect on the outcome.
#[derive(Debug, Clone)]
pub struct Shuffle<R> {
    pool: Vec<Participant>,
    winner: Entry,
    remaining: u32,
    revealed: bool,
    rng: R,
}

impl<R: Rng> Shuffle<R> {
    pub fn new(pool: Vec<Participant>, winner: Entry, ticks: u32, rng: R) -> Shuffle<R> {
        // Nothing to shuffle through.
        let remaining = if pool.is_empty() { 0 } else { ticks };
        Shuffle {
            pool,
            winner,
            remaining,
            revealed: false,
            rng,
        }
    }

    pub fn winner(&self) -> &Entry {
        &self.winner
    }
}

impl<R: Rng> Iterator for Shuffle<R> {
    type Item = Frame;

    fn next(&mut self) -> Option<Frame> {
        if self.remaining > 0 {
            self.remaining -= 1;
            let pick = self.pool.choose(&mut self.rng)?;
            return Some(Frame::Shuffle(pick.clone()));
        }
        if self.revealed {
            return None;
        }
        self.revealed = true;
        Some(Frame::Reveal(self.winner.clone()))
    }
}
