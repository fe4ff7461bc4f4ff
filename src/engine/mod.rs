//! Command dispatch and state transitions.
//!
//! ## Key Types
//!
//! - `Command`: closed union of player commands (Roll / Announce / Fill)
//! - `GameEngine`: the variant seam - `create` builds the initial
//!   snapshot, `reduce` validates and applies one command
//! - `Game`: a session driver owning an engine and its current state
//!
//! Every reduce is all-or-nothing: it returns a wholly new state or an
//! error, never a partially mutated one. The transitions shared by all
//! variants (rolling under a keep mask, filling and resetting the turn)
//! live here; variant-only gates live with the variant engines in
//! `crate::games`.

pub mod command;
pub mod session;

pub use command::Command;
pub use session::Game;

use im::Vector;

use crate::core::category::Category;
use crate::core::column::Column;
use crate::core::definition::GameDefinition;
use crate::core::die::Die;
use crate::core::error::{GameError, GameResult};
use crate::core::key::{CategoryKey, ColumnKey};
use crate::core::rng::RollService;
use crate::core::state::{DiceSet, GameState};

/// A game variant: initial state plus a command reducer.
///
/// `reduce` takes `&mut self` because rolling consumes the engine's roll
/// collaborator - exactly once per rerolled die, in ascending die-index
/// order, so scripted sources replay deterministically. One engine/state
/// pair must be driven from a single thread; nothing here blocks.
pub trait GameEngine {
    /// The validated configuration this engine plays.
    fn definition(&self) -> &GameDefinition;

    /// Build the initial snapshot: fresh dice, empty scorecard.
    fn create(&self) -> GameState;

    /// Validate and apply one command, returning the next snapshot.
    fn reduce(&mut self, state: &GameState, command: &Command) -> GameResult<GameState>;
}

/// Fresh full-range dice for the start of a game or turn.
pub(crate) fn fresh_dice(definition: &GameDefinition) -> DiceSet {
    (0..definition.dice_count())
        .map(|_| Die::fresh(definition.dice_sides()))
        .collect()
}

/// Instantiate every column of the definition with unfilled categories.
pub(crate) fn initial_columns(definition: &GameDefinition) -> Vector<Column> {
    definition
        .columns()
        .iter()
        .map(|col| {
            let categories = definition
                .categories()
                .iter()
                .map(|cat| Category::new(cat.key.clone(), cat.rule.clone()));
            Column::new(col.key.clone(), col.policy, col.scoring.clone(), categories)
                .expect("validated definition has a non-empty category list")
        })
        .collect()
}

/// Reject every command once the scorecard is full.
pub(crate) fn ensure_active(state: &GameState) -> GameResult<()> {
    if state.is_completed() {
        return Err(GameError::GameCompleted);
    }
    Ok(())
}

/// Reject a keep mask addressing dice beyond the definition's count.
///
/// Checked before any other roll gate, so an out-of-range mask fails the
/// same way in every game situation.
pub(crate) fn ensure_keep_mask(definition: &GameDefinition, keep: u32) -> GameResult<()> {
    let dice_count = definition.dice_count();
    if dice_count < u32::BITS as usize && keep >> dice_count != 0 {
        return Err(GameError::KeepMaskOutOfRange {
            mask: keep,
            dice_count,
        });
    }
    Ok(())
}

/// Shared Roll transition.
///
/// Keep-mask bit `i` set preserves die `i`; clear bits reroll, drawing
/// from the collaborator in ascending die-index order. The roll count
/// increments by exactly one.
pub(crate) fn reduce_roll(
    definition: &GameDefinition,
    state: &GameState,
    rolls: &mut dyn RollService,
    keep: u32,
) -> GameResult<GameState> {
    ensure_keep_mask(definition, keep)?;
    if state.roll_count() >= definition.max_rolls_per_turn() {
        return Err(GameError::MaxRollsReached {
            max: definition.max_rolls_per_turn(),
        });
    }

    let dice: DiceSet = state
        .dice()
        .iter()
        .enumerate()
        .map(|(i, die)| {
            if keep >> i & 1 == 1 {
                *die
            } else {
                die.roll(rolls)
            }
        })
        .collect();

    Ok(GameState::new(
        dice,
        state.columns().clone(),
        state.roll_count() + 1,
        state.announcement().cloned(),
    ))
}

/// Shared Fill transition.
///
/// Resolves the column, delegates to `Column::fill`, then starts a new
/// turn: fresh full-range dice, roll count zero, announcement cleared.
pub(crate) fn reduce_fill(
    definition: &GameDefinition,
    state: &GameState,
    column: &ColumnKey,
    category: &CategoryKey,
) -> GameResult<GameState> {
    let idx = state
        .columns()
        .iter()
        .position(|c| c.key() == column)
        .ok_or_else(|| GameError::UnknownColumn {
            column: column.clone(),
        })?;

    let filled = state.columns()[idx].fill(state.dice(), category)?;
    let mut columns = state.columns().clone();
    columns.set(idx, filled);

    Ok(GameState::new(fresh_dice(definition), columns, 0, None))
}
