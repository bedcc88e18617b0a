use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::draw::*;

/// A draw that passed all the checks. The winner is already recorded; the
/// frames only replay the suspense before showing it.
#[derive(Debug)]
pub struct DrawInProgress {
    pub prize: Prize,
    pub image: Option<PrizeImage>,
    pub winner: Entry,
    pub frames: Shuffle<StdRng>,
}

/// All the state of a running raffle: the participants, the draw engine and the
/// resources needed to present a draw.
#[derive(Debug)]
pub struct Session {
    registry: Registry,
    engine: DrawEngine,
    source: Option<String>,
    images: PrizeImages,
    shuffle: ShuffleConfig,
    rng: StdRng,
}

impl Session {
    pub fn new(images: PrizeImages, shuffle: ShuffleConfig, seed: Option<u64>) -> Session {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Session {
            registry: Registry::empty(),
            engine: DrawEngine::new(),
            source: None,
            images,
            shuffle,
            rng,
        }
    }

    pub fn from_settings(settings: &DrawSettings) -> Session {
        Session::new(settings.images.clone(), settings.shuffle, settings.seed)
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn engine(&self) -> &DrawEngine {
        &self.engine
    }

    /// The file the current participants were read from.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn shuffle_config(&self) -> ShuffleConfig {
        self.shuffle
    }

    /// Reads a participant list and makes it the current one.
    ///
    /// On error, the current list and the draw are left as they were. On success
    /// the draw starts over from the third place: the winners of the previous list
    /// refer to rows of a file that is no longer loaded.
    pub fn load(&mut self, input: &InputSource) -> RaffleResult<usize> {
        info!("Attempting to read participants from {:?}", input.path);
        let registry = read_participants(input)?;
        self.replace_registry(registry, Some(input.path.clone()));
        Ok(self.registry.len())
    }

    pub fn replace_registry(&mut self, registry: Registry, source: Option<String>) {
        if !self.engine.winners().is_empty() {
            warn!(
                "New participant list: discarding {} previous winners",
                self.engine.winners().len()
            );
        }
        info!("Loaded {} participants", registry.len());
        self.registry = registry;
        self.engine = DrawEngine::new();
        self.source = source;
    }

    /// The label of the next draw, or None once all the prizes are awarded.
    pub fn next_action_label(&self) -> Option<String> {
        self.engine.current_stage().prize().map(|p| p.action_label())
    }

    /// Checks that a draw can happen, resolves the image of the prize, draws the
    /// winner and prepares the animation.
    ///
    /// If any check fails, nothing is drawn and the engine is unchanged.
    pub fn start_draw(&mut self) -> RaffleResult<DrawInProgress> {
        let pool: Vec<Participant> = self
            .engine
            .eligible(&self.registry)
            .context(DrawSnafu {})?
            .into_iter()
            .map(|e| e.participant.clone())
            .collect();
        let stage = self.engine.current_stage();
        let prize = match stage.prize() {
            Some(p) => p,
            None => whatever!("No prize for stage {:?}", stage),
        };
        let image = self.images.resolve(prize)?;

        let winner = self
            .engine
            .draw(&self.registry, &mut self.rng)
            .context(DrawSnafu {})?;
        let frames = Shuffle::new(
            pool,
            winner.clone(),
            self.shuffle.ticks,
            StdRng::seed_from_u64(self.rng.gen()),
        );
        Ok(DrawInProgress {
            prize,
            image,
            winner,
            frames,
        })
    }
}
