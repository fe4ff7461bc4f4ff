//! Immutable game configuration.
//!
//! A `GameDefinition` is built once by a variant factory (see
//! `crate::games`), validated on construction, and never mutated. The
//! engine is configuration-driven: it never hardcodes category names,
//! column layouts, or bonus constants.

use serde::{Deserialize, Serialize};

use super::error::{GameError, GameResult};
use super::key::{CategoryKey, ColumnKey};
use super::policy::OrderPolicy;
use super::scoring::ColumnScoring;
use crate::rules::Rule;

/// One category slot: a key bound to a scoring rule.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDefinition {
    pub key: CategoryKey,
    pub rule: Rule,
}

impl CategoryDefinition {
    /// Bind a rule to a category key.
    #[must_use]
    pub fn new(key: impl Into<CategoryKey>, rule: Rule) -> Self {
        Self {
            key: key.into(),
            rule,
        }
    }
}

/// One column: a key, a fill-order policy, and a score aggregator.
///
/// Every column instantiates the definition's full category list; the
/// same rule set can appear in several columns under different orderings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub key: ColumnKey,
    pub policy: OrderPolicy,
    pub scoring: ColumnScoring,
}

impl ColumnDefinition {
    /// Describe a column.
    #[must_use]
    pub fn new(key: impl Into<ColumnKey>, policy: OrderPolicy, scoring: ColumnScoring) -> Self {
        Self {
            key: key.into(),
            policy,
            scoring,
        }
    }
}

/// Complete, validated configuration for one game variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameDefinition {
    dice_count: usize,
    dice_sides: u8,
    max_rolls_per_turn: u8,
    categories: Vec<CategoryDefinition>,
    columns: Vec<ColumnDefinition>,
    announcement_column: Option<ColumnKey>,
}

impl GameDefinition {
    /// Validate and build a definition.
    ///
    /// Rejects: zero dice, dice with fewer than 2 sides, a zero roll
    /// budget, empty or duplicate category/column key lists, blank key
    /// names, and an announcement column that is not in the column list.
    pub fn new(
        dice_count: usize,
        dice_sides: u8,
        max_rolls_per_turn: u8,
        categories: Vec<CategoryDefinition>,
        columns: Vec<ColumnDefinition>,
        announcement_column: Option<ColumnKey>,
    ) -> GameResult<Self> {
        let invalid = |reason: String| GameError::InvalidDefinition { reason };

        if dice_count == 0 {
            return Err(invalid("a game needs at least one die".into()));
        }
        if dice_sides < 2 {
            return Err(invalid(format!(
                "dice need at least 2 sides, got {dice_sides}"
            )));
        }
        if max_rolls_per_turn == 0 {
            return Err(invalid("a turn needs at least one roll".into()));
        }
        if categories.is_empty() {
            return Err(invalid("no categories defined".into()));
        }
        if columns.is_empty() {
            return Err(invalid("no columns defined".into()));
        }

        let mut seen_categories = std::collections::HashSet::new();
        for def in &categories {
            if def.key.as_str().trim().is_empty() {
                return Err(invalid("blank category key".into()));
            }
            if !seen_categories.insert(def.key.clone()) {
                return Err(invalid(format!("duplicate category key '{}'", def.key)));
            }
        }

        let mut seen_columns = std::collections::HashSet::new();
        for def in &columns {
            if def.key.as_str().trim().is_empty() {
                return Err(invalid("blank column key".into()));
            }
            if !seen_columns.insert(def.key.clone()) {
                return Err(invalid(format!("duplicate column key '{}'", def.key)));
            }
        }

        if let Some(key) = &announcement_column {
            if !seen_columns.contains(key) {
                return Err(invalid(format!(
                    "announcement column '{key}' is not a defined column"
                )));
            }
        }

        Ok(Self {
            dice_count,
            dice_sides,
            max_rolls_per_turn,
            categories,
            columns,
            announcement_column,
        })
    }

    /// Number of dice in play.
    #[must_use]
    pub fn dice_count(&self) -> usize {
        self.dice_count
    }

    /// Sides per die.
    #[must_use]
    pub fn dice_sides(&self) -> u8 {
        self.dice_sides
    }

    /// Roll budget per turn.
    #[must_use]
    pub fn max_rolls_per_turn(&self) -> u8 {
        self.max_rolls_per_turn
    }

    /// Category definitions in scorecard order.
    #[must_use]
    pub fn categories(&self) -> &[CategoryDefinition] {
        &self.categories
    }

    /// Column definitions in scorecard order.
    #[must_use]
    pub fn columns(&self) -> &[ColumnDefinition] {
        &self.columns
    }

    /// The announcement column, for variants that have one.
    #[must_use]
    pub fn announcement_column(&self) -> Option<&ColumnKey> {
        self.announcement_column.as_ref()
    }
}
