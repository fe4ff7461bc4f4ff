//! Scoring rules: pure strategies mapping a dice set to a score.
//!
//! ## Key Types
//!
//! - `Rule`: closed catalog of rule variants (FaceSum, Sum, NOfAKind,
//!   FullHouse, Straight, Pattern)
//! - `RuleScore`: the `(matched, score)` outcome of a scoring attempt
//!
//! Rules are stateless beyond their construction parameters; game tables
//! bind them to categories via `GameDefinition`.

pub mod rule;

pub use rule::{Rule, RuleScore};
