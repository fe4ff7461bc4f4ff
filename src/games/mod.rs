//! Concrete game variants: configuration factories and engines.
//!
//! Each variant ships a `definition()` factory (the game table: category
//! order, rule parameters, column policies, bonus constants) and an
//! engine carrying the variant-only reduce gates.

pub mod yahtzee;
pub mod yamb;

pub use yahtzee::YahtzeeEngine;
pub use yamb::YambEngine;
