//! A single bounded die.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::rng::RollService;

/// An immutable die: a side count and a current value in `[1, sides]`.
///
/// Rolling never mutates; it returns a new `Die` with the same side count
/// and a fresh value drawn from the roll collaborator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Die {
    sides: u8,
    value: u8,
}

impl Die {
    /// Create a die with an explicit value.
    ///
    /// Fails when `sides < 2` or `value` is outside `[1, sides]`.
    pub fn new(sides: u8, value: u8) -> GameResult<Self> {
        if sides < 2 {
            return Err(GameError::InvalidSides { sides });
        }
        if value < 1 || value > sides {
            return Err(GameError::DieValueOutOfRange { value, sides });
        }
        Ok(Self { sides, value })
    }

    /// A fresh full-range die (value = sides), used at game start and when
    /// a fill resets the turn. Consumes no entropy.
    ///
    /// Panics when `sides < 2`; callers construct these from an already
    /// validated `GameDefinition`.
    #[must_use]
    pub fn fresh(sides: u8) -> Self {
        assert!(sides >= 2, "a die needs at least 2 sides");
        Self {
            sides,
            value: sides,
        }
    }

    /// Side count.
    #[must_use]
    pub fn sides(&self) -> u8 {
        self.sides
    }

    /// Current face value.
    #[must_use]
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Roll: same sides, new value from the collaborator.
    ///
    /// Draws exactly once. The collaborator contract (`[1, sides]`) is
    /// debug-asserted.
    #[must_use]
    pub fn roll(&self, rolls: &mut dyn RollService) -> Self {
        let value = rolls.next_roll(self.sides);
        debug_assert!(
            (1..=self.sides).contains(&value),
            "roll service returned {value} for a {}-sided die",
            self.sides
        );
        Self {
            sides: self.sides,
            value,
        }
    }
}
