//! Column score aggregators.
//!
//! A column's score is a pure function of its current category scores.
//! Aggregators are data, not closures, so definitions stay serializable
//! and comparable: a plain sum, or the sectioned scorecard formula shared
//! by the Yahtzee and Yamb tables.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::category::Category;
use super::key::CategoryKey;

/// The `(max - min) * unit` term of the Yamb scorecard.
///
/// Contributes only when all three named categories are filled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spread {
    /// Category holding the maximized sum.
    pub max: CategoryKey,
    /// Category holding the minimized sum.
    pub min: CategoryKey,
    /// Category whose score multiplies the difference (ones).
    pub unit: CategoryKey,
}

/// Sectioned scorecard: upper and lower section sums, an upper-section
/// bonus, and an optional spread term.
///
/// Categories outside both sections (Yamb's max/min) contribute only
/// through the spread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionScoring {
    /// Keys of the upper section (the face-sum slots).
    pub upper: Vec<CategoryKey>,
    /// Keys of the lower section.
    pub lower: Vec<CategoryKey>,
    /// Bonus granted when the upper-section sum reaches the threshold.
    pub upper_bonus: i32,
    /// Inclusive threshold for the upper-section bonus.
    pub upper_threshold: i32,
    /// Optional `(max - min) * unit` term.
    pub spread: Option<Spread>,
}

/// How a column aggregates its category scores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnScoring {
    /// Sum of every filled category.
    Plain,
    /// Sectioned scorecard with an upper bonus.
    Sections(SectionScoring),
}

impl ColumnScoring {
    /// Aggregate the current category scores.
    ///
    /// Unfilled categories contribute nothing; the result is independent
    /// of the order in which categories were filled.
    #[must_use]
    pub fn score(&self, categories: &Vector<Category>) -> i32 {
        match self {
            ColumnScoring::Plain => {
                categories.iter().filter_map(Category::score).sum()
            }
            ColumnScoring::Sections(sections) => sections.score(categories),
        }
    }
}

impl SectionScoring {
    fn score(&self, categories: &Vector<Category>) -> i32 {
        let filled = |key: &CategoryKey| {
            categories
                .iter()
                .find(|c| c.key() == key)
                .and_then(Category::score)
        };

        let upper_sum: i32 = self.upper.iter().filter_map(&filled).sum();
        let lower_sum: i32 = self.lower.iter().filter_map(&filled).sum();
        // Inclusive comparison: exactly reaching the threshold earns the bonus.
        let bonus = if upper_sum >= self.upper_threshold {
            self.upper_bonus
        } else {
            0
        };

        let spread_term = self
            .spread
            .as_ref()
            .and_then(|spread| {
                let max = filled(&spread.max)?;
                let min = filled(&spread.min)?;
                let unit = filled(&spread.unit)?;
                Some((max - min) * unit)
            })
            .unwrap_or(0);

        upper_sum + bonus + lower_sum + spread_term
    }
}
