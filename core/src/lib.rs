use serde::{Deserialize, Serialize};

pub use bearing::*;
pub use error::*;
pub use picker::*;
pub use session::*;
pub use types::*;

mod bearing;
mod error;
mod picker;
mod session;
mod types;

/// Rules of one round: grid geometry and the guess budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    dimension: Coord,
    max_attempts: u32,
}

impl GameConfig {
    /// Reference geometry: 100×100 grid, 100 guesses.
    pub const DEFAULT: Self = Self::new_unchecked(100, 100);

    pub const fn new_unchecked(dimension: Coord, max_attempts: u32) -> Self {
        Self {
            dimension,
            max_attempts,
        }
    }

    /// A zero dimension or a zero budget makes the round unplayable, so
    /// construction fails instead of clamping.
    pub fn new(dimension: Coord, max_attempts: u32) -> Result<Self> {
        if dimension == 0 || max_attempts == 0 {
            return Err(GameError::InvalidConfig);
        }
        Ok(Self::new_unchecked(dimension, max_attempts))
    }

    pub const fn dimension(&self) -> Coord {
        self.dimension
    }

    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    pub const fn total_cells(&self) -> CellIndex {
        total_cells(self.dimension)
    }

    pub(crate) fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if index < self.total_cells() {
            Ok(index)
        } else {
            Err(GameError::InvalidCell)
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
