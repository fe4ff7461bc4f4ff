//! Error taxonomy for the engine.
//!
//! Three classes of failure, distinguishable via [`GameError::kind`]:
//!
//! - `Validation`: malformed construction input. Surfaced when a
//!   definition, die, or rule is built; never recovered.
//! - `RuleViolation`: an illegal move. Expected during play, presentable
//!   to the player; the state the command was applied to is unchanged.
//! - `Lookup`: an unknown column or category key, which means the
//!   definition and the caller disagree. A programmer error, not a
//!   player-facing one.
//!
//! Every transition builds a wholly new state and returns it only on full
//! success, so all failures are all-or-nothing.

use thiserror::Error;

use super::key::{CategoryKey, ColumnKey};

/// Alias for `Result<T, GameError>`.
pub type GameResult<T> = Result<T, GameError>;

/// Broad classification of a [`GameError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed construction input; fatal.
    Validation,
    /// Illegal move; recoverable, state unchanged.
    RuleViolation,
    /// Unknown key; definition/caller mismatch.
    Lookup,
}

/// Everything that can go wrong constructing or driving a game.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GameError {
    // === Validation ===
    /// A die needs at least two sides.
    #[error("a die needs at least 2 sides, got {sides}")]
    InvalidSides { sides: u8 },

    /// Die value outside `[1, sides]`.
    #[error("die value {value} out of range for a {sides}-sided die")]
    DieValueOutOfRange { value: u8, sides: u8 },

    /// A scoring rule was built with a bad parameter.
    #[error("invalid scoring rule parameter: {reason}")]
    InvalidRuleParameter { reason: String },

    /// A game definition failed validation.
    #[error("invalid game definition: {reason}")]
    InvalidDefinition { reason: String },

    // === Rule violations ===
    /// Every column is completed; no command is accepted.
    #[error("game is already completed")]
    GameCompleted,

    /// The per-turn roll budget is spent.
    #[error("maximum of {max} rolls per turn reached")]
    MaxRollsReached { max: u8 },

    /// The keep mask addresses dice that do not exist.
    #[error("keep mask {mask:#b} addresses dice beyond index {dice_count}")]
    KeepMaskOutOfRange { mask: u32, dice_count: usize },

    /// The category already holds a score; filling is exactly-once.
    #[error("category '{category}' is already scored")]
    AlreadyScored { category: CategoryKey },

    /// The column's fill-order policy forbids this category right now.
    #[error("column '{column}' policy forbids filling '{category}'")]
    PolicyViolation {
        column: ColumnKey,
        category: CategoryKey,
    },

    /// Only the announcement column remains open; an announcement must be
    /// made before rolling.
    #[error("an announcement is required before rolling")]
    AnnouncementRequired,

    /// Announcements are only permitted before the first roll of a turn.
    #[error("cannot announce after rolling")]
    AnnounceAfterRoll,

    /// An announcement is live and the fill does not target it.
    #[error("fill must target the announced category '{announced}' in the announcement column")]
    AnnouncementMismatch { announced: CategoryKey },

    /// This game variant has no announcement mechanic.
    #[error("this game variant does not support announcements")]
    AnnouncementUnsupported,

    // === Lookups ===
    /// No column with this key in the definition.
    #[error("unknown column '{column}'")]
    UnknownColumn { column: ColumnKey },

    /// No category with this key in the column.
    #[error("unknown category '{category}' in column '{column}'")]
    UnknownCategory {
        column: ColumnKey,
        category: CategoryKey,
    },
}

impl GameError {
    /// Classify this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::InvalidSides { .. }
            | GameError::DieValueOutOfRange { .. }
            | GameError::InvalidRuleParameter { .. }
            | GameError::InvalidDefinition { .. } => ErrorKind::Validation,

            GameError::GameCompleted
            | GameError::MaxRollsReached { .. }
            | GameError::KeepMaskOutOfRange { .. }
            | GameError::AlreadyScored { .. }
            | GameError::PolicyViolation { .. }
            | GameError::AnnouncementRequired
            | GameError::AnnounceAfterRoll
            | GameError::AnnouncementMismatch { .. }
            | GameError::AnnouncementUnsupported => ErrorKind::RuleViolation,

            GameError::UnknownColumn { .. } | GameError::UnknownCategory { .. } => {
                ErrorKind::Lookup
            }
        }
    }

    /// True for errors a UI can present as "illegal move, try again".
    #[must_use]
    pub fn is_illegal_move(&self) -> bool {
        self.kind() == ErrorKind::RuleViolation
    }
}
