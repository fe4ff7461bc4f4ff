//! A single scoreable slot bound to one rule.

use serde::{Deserialize, Serialize};

use super::die::Die;
use super::error::{GameError, GameResult};
use super::key::CategoryKey;
use crate::rules::Rule;

/// One category on the scorecard.
///
/// Two states: unfilled (`score == None`) and filled. The transition is
/// one-way and the attempt is consumed regardless of outcome - a rule
/// that fails to match records a 0 ("crossed out"), it does not leave the
/// category open for retry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    key: CategoryKey,
    rule: Rule,
    score: Option<i32>,
}

impl Category {
    /// Create an unfilled category.
    #[must_use]
    pub fn new(key: CategoryKey, rule: Rule) -> Self {
        Self {
            key,
            rule,
            score: None,
        }
    }

    /// The category's key.
    #[must_use]
    pub fn key(&self) -> &CategoryKey {
        &self.key
    }

    /// The bound rule.
    #[must_use]
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// The recorded score, if filled.
    #[must_use]
    pub fn score(&self) -> Option<i32> {
        self.score
    }

    /// Has this category been filled (scored or crossed out)?
    #[must_use]
    pub fn is_filled(&self) -> bool {
        self.score.is_some()
    }

    /// Score this category with the current dice.
    ///
    /// Fails with `AlreadyScored` if the category is filled. Otherwise
    /// returns a new filled `Category`: the rule's score on a match,
    /// 0 on a miss.
    pub fn fill(&self, dice: &[Die]) -> GameResult<Self> {
        if self.score.is_some() {
            return Err(GameError::AlreadyScored {
                category: self.key.clone(),
            });
        }
        let outcome = self.rule.try_score(dice);
        Ok(Self {
            key: self.key.clone(),
            rule: self.rule.clone(),
            score: Some(if outcome.matched { outcome.score } else { 0 }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice(values: &[u8]) -> Vec<Die> {
        values.iter().map(|&v| Die::new(6, v).unwrap()).collect()
    }

    fn ones() -> Category {
        Category::new(CategoryKey::of("ones"), Rule::face_sum(1).unwrap())
    }

    #[test]
    fn test_starts_unfilled() {
        let cat = ones();
        assert!(!cat.is_filled());
        assert_eq!(cat.score(), None);
    }

    #[test]
    fn test_fill_records_matched_score() {
        let filled = ones().fill(&dice(&[1, 1, 3, 4, 5])).unwrap();
        assert!(filled.is_filled());
        assert_eq!(filled.score(), Some(2));
    }

    #[test]
    fn test_fill_crosses_out_on_miss() {
        // No ones in the hand: the attempt is consumed, score is 0.
        let filled = ones().fill(&dice(&[2, 3, 4, 5, 6])).unwrap();
        assert!(filled.is_filled());
        assert_eq!(filled.score(), Some(0));
    }

    #[test]
    fn test_fill_is_exactly_once() {
        let filled = ones().fill(&dice(&[1, 1, 1, 1, 1])).unwrap();
        let err = filled.fill(&dice(&[1, 1, 1, 1, 1])).unwrap_err();
        assert_eq!(
            err,
            GameError::AlreadyScored {
                category: CategoryKey::of("ones")
            }
        );
        // The stored score never changes.
        assert_eq!(filled.score(), Some(5));
    }

    #[test]
    fn test_fill_does_not_mutate_original() {
        let cat = ones();
        let _ = cat.fill(&dice(&[1, 1, 1, 1, 1])).unwrap();
        assert!(!cat.is_filled());
    }
}
