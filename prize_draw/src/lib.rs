pub mod animation;
pub mod builder;
mod config;
pub mod manual;

use log::{debug, info};
use rand::seq::SliceRandom;
use rand::Rng;

pub use crate::config::*;

/// The state of a draw session: the next prize to award and the winners so far.
///
/// The engine does not own the participants. Each call receives the registry to
/// draw from, and the source of randomness.
///
/// ```
/// use prize_draw::builder::Builder;
/// use prize_draw::{DrawEngine, DrawErrors, Prize};
///
/// let mut builder = Builder::new();
/// builder.add_participant_simple("Alice", "@a");
/// builder.add_participant_simple("Bob", "@b");
/// builder.add_participant_simple("Cara", "@c");
/// let registry = builder.build().unwrap();
///
/// let mut engine = DrawEngine::new();
/// let mut rng = rand::thread_rng();
/// assert_eq!(engine.current_stage().prize(), Some(Prize::Third));
/// for _ in 0..3 {
///     engine.draw(&registry, &mut rng)?;
/// }
/// assert!(engine.current_stage().is_terminal());
/// # Ok::<(), DrawErrors>(())
/// ```
#[derive(Eq, PartialEq, Debug, Clone, Default)]
pub struct DrawEngine {
    stage: DrawStage,
    // Invariant: winners.len() + 1 == stage
    winners: Vec<Entry>,
}

impl DrawEngine {
    pub fn new() -> DrawEngine {
        DrawEngine::default()
    }

    pub fn current_stage(&self) -> DrawStage {
        self.stage
    }

    /// The winners, in the order they were drawn (third place first).
    pub fn winners(&self) -> &[Entry] {
        &self.winners
    }

    /// The winners with the prize each of them received.
    pub fn awarded(&self) -> Vec<(Prize, &Entry)> {
        Prize::ALL.iter().cloned().zip(self.winners.iter()).collect()
    }

    pub fn has_won(&self, entry: &Entry) -> bool {
        self.winners.iter().any(|w| w.id == entry.id)
    }

    /// The participants that can still win, in registry order.
    ///
    /// Fails under the same conditions as [`DrawEngine::draw`], so a successful
    /// call guarantees that the next draw on the same registry succeeds.
    pub fn eligible<'a>(&self, registry: &'a Registry) -> Result<Vec<&'a Entry>, DrawErrors> {
        if self.stage.is_terminal() {
            return Err(DrawErrors::DrawSequenceExhausted);
        }
        if registry.is_empty() {
            return Err(DrawErrors::NoParticipants);
        }
        let eligible: Vec<&Entry> = registry
            .list()
            .iter()
            .filter(|e| !self.has_won(e))
            .collect();
        if eligible.is_empty() {
            return Err(DrawErrors::NoEligibleParticipants);
        }
        Ok(eligible)
    }

    /// Draws the winner of the current prize.
    ///
    /// Every eligible participant has the same chance. On success the winner is
    /// recorded and the stage moves to the next prize. Nothing changes on error.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        registry: &Registry,
        rng: &mut R,
    ) -> Result<Entry, DrawErrors> {
        let eligible = self.eligible(registry)?;
        debug!(
            "draw: stage {:?}, {} eligible out of {}",
            self.stage,
            eligible.len(),
            registry.len()
        );
        let winner: Entry = eligible
            .choose(rng)
            .map(|e| (*e).clone())
            .ok_or(DrawErrors::NoEligibleParticipants)?;
        if let Some(prize) = self.stage.prize() {
            info!(
                "{}: {} (row {})",
                prize.title(),
                winner.participant,
                winner.id.0
            );
        }
        self.winners.push(winner.clone());
        self.stage = self.stage.next();
        Ok(winner)
    }
}
