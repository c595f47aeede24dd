use serde::{Deserialize, Serialize};

use crate::{bearing, CellIndex, GameConfig, Result, TargetPicker};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

/// One play-through: one hidden target, a bounded number of guesses,
/// first match wins.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    config: GameConfig,
    target: CellIndex,
    attempts: u32,
    status: GameStatus,
    last_guess: Option<CellIndex>,
}

impl GameSession {
    pub fn new(config: GameConfig, picker: impl TargetPicker) -> Self {
        let target = picker.pick(&config);
        debug_assert!(target < config.total_cells());
        Self {
            config,
            target,
            attempts: 0,
            status: GameStatus::Playing,
            last_guess: None,
        }
    }

    /// Deterministic constructor, mainly for tests and replays.
    pub fn with_target(config: GameConfig, target: CellIndex) -> Result<Self> {
        let target = config.validate_index(target)?;
        Ok(Self {
            config,
            target,
            attempts: 0,
            status: GameStatus::Playing,
            last_guess: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn attempts_left(&self) -> u32 {
        self.config.max_attempts() - self.attempts
    }

    pub fn last_guess(&self) -> Option<CellIndex> {
        self.last_guess
    }

    /// The hidden cell. Always readable; whether to disclose it before the
    /// round ends is the caller's policy.
    pub fn target(&self) -> CellIndex {
        self.target
    }

    /// Submits a guess and returns the resulting status.
    ///
    /// Guessing after the round has ended is a deliberate no-op returning
    /// the settled status, so event handlers need no end-of-game guard.
    /// An out-of-range index fails with [`GameError::InvalidCell`] and
    /// leaves the session untouched.
    ///
    /// The match check runs strictly before the budget check: finding the
    /// target on the final permitted attempt is a win, never a loss.
    ///
    /// [`GameError::InvalidCell`]: crate::GameError::InvalidCell
    pub fn guess(&mut self, index: CellIndex) -> Result<GameStatus> {
        if self.status.is_finished() {
            return Ok(self.status);
        }

        let index = self.config.validate_index(index)?;

        self.last_guess = Some(index);
        self.attempts += 1;

        if index == self.target {
            self.status = GameStatus::Won;
        } else if self.attempts == self.config.max_attempts() {
            self.status = GameStatus::Lost;
        }

        log::trace!(
            "guess {} -> {:?} ({}/{})",
            index,
            self.status,
            self.attempts,
            self.config.max_attempts()
        );
        Ok(self.status)
    }

    /// Abandons the current round and starts a fresh one with a newly
    /// drawn target. Legal from any state.
    pub fn reset(&mut self, picker: impl TargetPicker) {
        let target = picker.pick(&self.config);
        debug_assert!(target < self.config.total_cells());
        self.target = target;
        self.attempts = 0;
        self.status = GameStatus::Playing;
        self.last_guess = None;
    }

    /// Heading from the last guess toward the target, for the directional
    /// hint. `None` before the first guess and once the target has been
    /// found (no hint is meaningful after a win).
    pub fn hint_bearing(&self) -> Option<f64> {
        if matches!(self.status, GameStatus::Won) {
            return None;
        }
        let from = self.last_guess?;
        bearing(from, self.target, self.config.dimension()).ok()
    }
}
