use crate::{CellIndex, GameConfig};

/// Strategy for choosing the hidden target of a round.
///
/// Injected into [`GameSession::new`] and [`GameSession::reset`] so tests
/// can supply a deterministic draw.
///
/// [`GameSession::new`]: crate::GameSession::new
/// [`GameSession::reset`]: crate::GameSession::reset
pub trait TargetPicker {
    /// Must return an index in `[0, config.total_cells())`.
    fn pick(self, config: &GameConfig) -> CellIndex;
}

/// Uniform draw over the whole grid from a seeded RNG.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RandomTargetPicker {
    seed: u64,
}

impl RandomTargetPicker {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl TargetPicker for RandomTargetPicker {
    fn pick(self, config: &GameConfig) -> CellIndex {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let target = rng.random_range(0..config.total_cells());
        log::debug!("picked target {} (seed {})", target, self.seed);
        target
    }
}
