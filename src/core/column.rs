//! An ordered group of categories sharing a policy and an aggregator.

use im::Vector;
use rustc_hash::FxHashMap;

use super::category::Category;
use super::die::Die;
use super::error::{GameError, GameResult};
use super::key::{CategoryKey, ColumnKey};
use super::policy::OrderPolicy;
use super::scoring::ColumnScoring;

/// One column of the scorecard.
///
/// Copy-on-write: `fill` replaces exactly one category slot and returns a
/// new `Column`; the persistent vector shares the untouched slots. A
/// key-to-index map is built once per instance so fills stay O(1) lookups
/// over the ordered sequence.
#[derive(Clone, Debug)]
pub struct Column {
    key: ColumnKey,
    policy: OrderPolicy,
    scoring: ColumnScoring,
    categories: Vector<Category>,
    index: FxHashMap<CategoryKey, usize>,
}

impl Column {
    /// Build a column from its parts.
    ///
    /// Categories are deduplicated by key (first occurrence wins). An
    /// empty category list is a definition error.
    pub fn new(
        key: ColumnKey,
        policy: OrderPolicy,
        scoring: ColumnScoring,
        categories: impl IntoIterator<Item = Category>,
    ) -> GameResult<Self> {
        let mut index = FxHashMap::default();
        let mut deduped = Vector::new();
        for category in categories {
            if index.contains_key(category.key()) {
                continue;
            }
            index.insert(category.key().clone(), deduped.len());
            deduped.push_back(category);
        }
        if deduped.is_empty() {
            return Err(GameError::InvalidDefinition {
                reason: format!("column '{key}' has no categories"),
            });
        }
        Ok(Self {
            key,
            policy,
            scoring,
            categories: deduped,
            index,
        })
    }

    /// The column's key.
    #[must_use]
    pub fn key(&self) -> &ColumnKey {
        &self.key
    }

    /// The fill-order policy.
    #[must_use]
    pub fn policy(&self) -> OrderPolicy {
        self.policy
    }

    /// Categories in definition order.
    #[must_use]
    pub fn categories(&self) -> &Vector<Category> {
        &self.categories
    }

    /// Look up a category by key.
    #[must_use]
    pub fn category(&self, key: &CategoryKey) -> Option<&Category> {
        self.index.get(key).map(|&i| &self.categories[i])
    }

    /// All categories filled?
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.categories.iter().all(Category::is_filled)
    }

    /// Aggregate score over the current category scores.
    #[must_use]
    pub fn score(&self) -> i32 {
        self.scoring.score(&self.categories)
    }

    /// May `key` be filled right now under this column's policy?
    #[must_use]
    pub fn can_fill(&self, key: &CategoryKey) -> bool {
        self.policy.can_fill(&self.categories, key)
    }

    /// Fill one category with the current dice, returning a new column.
    ///
    /// Key resolution comes first (`UnknownCategory`), then the policy
    /// gate (`PolicyViolation`), then the category's own exactly-once
    /// check.
    pub fn fill(&self, dice: &[Die], key: &CategoryKey) -> GameResult<Self> {
        let Some(&idx) = self.index.get(key) else {
            return Err(GameError::UnknownCategory {
                column: self.key.clone(),
                category: key.clone(),
            });
        };
        if !self.policy.can_fill(&self.categories, key) {
            return Err(GameError::PolicyViolation {
                column: self.key.clone(),
                category: key.clone(),
            });
        }
        let filled = self.categories[idx].fill(dice)?;
        let mut categories = self.categories.clone();
        categories.set(idx, filled);
        Ok(Self {
            key: self.key.clone(),
            policy: self.policy,
            scoring: self.scoring.clone(),
            categories,
            index: self.index.clone(),
        })
    }
}
