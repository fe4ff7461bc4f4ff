//! # dicetab
//!
//! A rule-driven scoring engine for category dice games (Yahtzee-style
//! and Yamb-style variants).
//!
//! ## Design Principles
//!
//! 1. **Variant-Agnostic Core**: No hardcoded category names, column
//!    layouts, or bonus constants. Variants supply a validated
//!    `GameDefinition`; the engine just runs it.
//!
//! 2. **Immutable State**: Every command produces a wholly new
//!    `GameState` via persistent data structures; prior snapshots stay
//!    valid for undo and audit. Failures change nothing.
//!
//! 3. **Strategies As Data**: Scoring rules, fill-order policies, and
//!    column aggregators are closed enums - exhaustively matchable,
//!    cloneable, serializable.
//!
//! 4. **Deterministic Play**: All entropy flows through the `RollService`
//!    collaborator, drawn exactly once per rerolled die in ascending
//!    die-index order, so scripted sources replay a game bit-for-bit.
//!
//! ## Modules
//!
//! - `core`: dice, keys, categories, columns, definitions, state, errors,
//!   roll sources
//! - `rules`: the scoring-rule catalog
//! - `engine`: commands, the `GameEngine` seam, shared reducers, sessions
//! - `games`: concrete variant tables and engines (Yahtzee, Yamb)

pub mod core;
pub mod engine;
pub mod games;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Category, CategoryDefinition, CategoryKey, Column, ColumnDefinition, ColumnKey, ColumnScoring,
    DiceSet, Die, ErrorKind, FixedRolls, GameDefinition, GameError, GameResult, GameState,
    OrderPolicy, RollService, SectionScoring, SeededRolls, Spread,
};

pub use crate::rules::{Rule, RuleScore};

pub use crate::engine::{Command, Game, GameEngine};

pub use crate::games::{YahtzeeEngine, YambEngine};
