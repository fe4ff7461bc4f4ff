//! Core domain types: dice, keys, categories, columns, definitions,
//! state, errors, and the roll collaborator.
//!
//! Everything here is variant-agnostic. Concrete game tables live in
//! `crate::games`; the command machinery lives in `crate::engine`.

pub mod category;
pub mod column;
pub mod definition;
pub mod die;
pub mod error;
pub mod key;
pub mod policy;
pub mod rng;
pub mod scoring;
pub mod state;

pub use category::Category;
pub use column::Column;
pub use definition::{CategoryDefinition, ColumnDefinition, GameDefinition};
pub use die::Die;
pub use error::{ErrorKind, GameError, GameResult};
pub use key::{CategoryKey, ColumnKey};
pub use policy::OrderPolicy;
pub use rng::{FixedRolls, RollService, SeededRolls};
pub use scoring::{ColumnScoring, SectionScoring, Spread};
pub use state::{DiceSet, GameState};
