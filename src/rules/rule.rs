//! Rule variants and their scoring semantics.
//!
//! One closed enum instead of trait objects: the catalog is exhaustively
//! matchable, cheaply cloneable, and serializable, and game tables stay
//! plain data. Variants carry their construction parameters; scoring is a
//! pure function of those parameters and the dice.

use std::collections::BTreeSet;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::die::Die;
use crate::core::error::{GameError, GameResult};

/// Outcome of a scoring attempt.
///
/// `matched` and `score` are deliberately separate: a rule that cannot
/// score ("no three of a kind here") is not the same as a rule that
/// scored zero, and callers must not collapse the two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleScore {
    /// Did the dice satisfy the rule?
    pub matched: bool,
    /// The score when matched; 0 otherwise.
    pub score: i32,
}

impl RuleScore {
    /// A successful match.
    #[must_use]
    pub const fn hit(score: i32) -> Self {
        Self {
            matched: true,
            score,
        }
    }

    /// No match, score 0.
    #[must_use]
    pub const fn miss() -> Self {
        Self {
            matched: false,
            score: 0,
        }
    }
}

/// A scoring rule bound to a category by the game definition.
///
/// ## Variants
///
/// - `FaceSum`: sum of dice showing one face (upper-section slots)
/// - `Sum`: sum of all dice (chance, max/min)
/// - `NOfAKind`: n matching dice, highest qualifying face wins
/// - `FullHouse`: a triple plus a pair of a *different* face
/// - `Straight`: a run of at least n consecutive values
/// - `Pattern`: exact value-set patterns with fixed payouts
///
/// `bonus` is added to a computed score; a positive `fixed_score`
/// replaces the computed score entirely (classic Yahtzee's flat 25/30/40/50
/// payouts).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// Sum of the dice showing `face`.
    FaceSum { face: u8 },

    /// Sum of all dice.
    Sum,

    /// At least `n` dice of one face.
    NOfAKind { n: u8, bonus: i32, fixed_score: i32 },

    /// A triple and a pair of two different faces.
    FullHouse { bonus: i32, fixed_score: i32 },

    /// A run of at least `n` consecutive values.
    Straight { n: u8, bonus: i32, fixed_score: i32 },

    /// Named value-sets with fixed payouts; the best matching set wins.
    Pattern { sets: Vec<(BTreeSet<u8>, i32)> },
}

impl Rule {
    /// Sum of dice equal to `face`. Fails when `face < 1`.
    pub fn face_sum(face: u8) -> GameResult<Self> {
        if face < 1 {
            return Err(GameError::InvalidRuleParameter {
                reason: format!("face must be at least 1, got {face}"),
            });
        }
        Ok(Rule::FaceSum { face })
    }

    /// Sum of all dice.
    #[must_use]
    pub fn sum() -> Self {
        Rule::Sum
    }

    /// At least `n` of a kind. Fails when `n < 1`.
    pub fn n_of_a_kind(n: u8, bonus: i32, fixed_score: i32) -> GameResult<Self> {
        if n < 1 {
            return Err(GameError::InvalidRuleParameter {
                reason: format!("n must be at least 1, got {n}"),
            });
        }
        Ok(Rule::NOfAKind {
            n,
            bonus,
            fixed_score,
        })
    }

    /// Full house: triple of one face, pair of another.
    #[must_use]
    pub fn full_house(bonus: i32, fixed_score: i32) -> Self {
        Rule::FullHouse { bonus, fixed_score }
    }

    /// Straight of at least `n` consecutive values. Fails when `n < 2`.
    pub fn straight(n: u8, bonus: i32, fixed_score: i32) -> GameResult<Self> {
        if n < 2 {
            return Err(GameError::InvalidRuleParameter {
                reason: format!("a straight needs at least 2 values, got {n}"),
            });
        }
        Ok(Rule::Straight {
            n,
            bonus,
            fixed_score,
        })
    }

    /// Value-set patterns with payouts. Fails on an empty table.
    pub fn pattern(sets: impl IntoIterator<Item = (BTreeSet<u8>, i32)>) -> GameResult<Self> {
        let sets: Vec<_> = sets.into_iter().collect();
        if sets.is_empty() {
            return Err(GameError::InvalidRuleParameter {
                reason: "pattern rule needs at least one value set".into(),
            });
        }
        Ok(Rule::Pattern { sets })
    }

    /// Score the dice against this rule.
    ///
    /// Empty dice never match and score 0.
    #[must_use]
    pub fn try_score(&self, dice: &[Die]) -> RuleScore {
        if dice.is_empty() {
            return RuleScore::miss();
        }
        match self {
            Rule::FaceSum { face } => score_face_sum(dice, *face),
            Rule::Sum => {
                RuleScore::hit(dice.iter().map(|d| i32::from(d.value())).sum())
            }
            Rule::NOfAKind {
                n,
                bonus,
                fixed_score,
            } => score_n_of_a_kind(dice, *n, *bonus, *fixed_score),
            Rule::FullHouse { bonus, fixed_score } => {
                score_full_house(dice, *bonus, *fixed_score)
            }
            Rule::Straight {
                n,
                bonus,
                fixed_score,
            } => score_straight(dice, *n, *bonus, *fixed_score),
            Rule::Pattern { sets } => score_pattern(dice, sets),
        }
    }
}

fn score_face_sum(dice: &[Die], face: u8) -> RuleScore {
    let sum: i32 = dice
        .iter()
        .filter(|d| d.value() == face)
        .map(|d| i32::from(d.value()))
        .sum();
    if sum > 0 {
        RuleScore::hit(sum)
    } else {
        RuleScore::miss()
    }
}

fn face_counts(dice: &[Die]) -> FxHashMap<u8, u8> {
    let mut counts = FxHashMap::default();
    for die in dice {
        *counts.entry(die.value()).or_insert(0u8) += 1;
    }
    counts
}

fn score_n_of_a_kind(dice: &[Die], n: u8, bonus: i32, fixed_score: i32) -> RuleScore {
    if dice.len() < usize::from(n) {
        return RuleScore::miss();
    }
    // Tie-break by face value, not by count: [2,2,2,5,5,5] scores the fives.
    let best_face = face_counts(dice)
        .into_iter()
        .filter(|&(_, count)| count >= n)
        .map(|(face, _)| face)
        .max();
    match best_face {
        Some(face) => {
            let score = if fixed_score > 0 {
                fixed_score
            } else {
                i32::from(n) * i32::from(face) + bonus
            };
            RuleScore::hit(score)
        }
        None => RuleScore::miss(),
    }
}

fn score_full_house(dice: &[Die], bonus: i32, fixed_score: i32) -> RuleScore {
    if dice.len() < 5 {
        return RuleScore::miss();
    }
    let counts = face_counts(dice);
    // Five of a kind is not a full house: the pair face must differ.
    let mut best = 0;
    for (&triple, &tc) in &counts {
        if tc < 3 {
            continue;
        }
        for (&pair, &pc) in &counts {
            if pc >= 2 && pair != triple {
                best = best.max(3 * i32::from(triple) + 2 * i32::from(pair));
            }
        }
    }
    if best == 0 {
        return RuleScore::miss();
    }
    RuleScore::hit(if fixed_score > 0 { fixed_score } else { best + bonus })
}

fn score_straight(dice: &[Die], n: u8, bonus: i32, fixed_score: i32) -> RuleScore {
    if dice.len() < usize::from(n) {
        return RuleScore::miss();
    }
    let values: BTreeSet<u8> = dice.iter().map(Die::value).collect();
    let mut longest = 1u8;
    let mut run = 1u8;
    let mut prev: Option<u8> = None;
    for &v in &values {
        if let Some(p) = prev {
            if v == p + 1 {
                run += 1;
                longest = longest.max(run);
            } else {
                run = 1;
            }
        }
        prev = Some(v);
    }
    if longest < n {
        return RuleScore::miss();
    }
    let score = if fixed_score > 0 {
        fixed_score
    } else {
        // Duplicates count: the straight pays the whole hand.
        dice.iter().map(|d| i32::from(d.value())).sum::<i32>() + bonus
    };
    RuleScore::hit(score)
}

fn score_pattern(dice: &[Die], sets: &[(BTreeSet<u8>, i32)]) -> RuleScore {
    let present: BTreeSet<u8> = dice.iter().map(Die::value).collect();
    let best = sets
        .iter()
        .filter(|(set, _)| set.is_subset(&present))
        .map(|&(_, score)| score)
        .max();
    match best {
        Some(score) => RuleScore::hit(score),
        None => RuleScore::miss(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn dice(values: &[u8]) -> Vec<Die> {
        values.iter().map(|&v| Die::new(6, v).unwrap()).collect()
    }

    #[test]
    fn test_face_sum_counts_only_the_face() {
        let rule = Rule::face_sum(3).unwrap();
        let result = rule.try_score(&dice(&[1, 3, 3, 5, 6]));
        assert_eq!(result, RuleScore::hit(6));
    }

    #[test]
    fn test_face_sum_misses_when_face_absent() {
        let rule = Rule::face_sum(2).unwrap();
        assert_eq!(rule.try_score(&dice(&[1, 3, 3, 5, 6])), RuleScore::miss());
    }

    #[test]
    fn test_face_sum_rejects_zero_face() {
        assert!(matches!(
            Rule::face_sum(0),
            Err(GameError::InvalidRuleParameter { .. })
        ));
    }

    #[test]
    fn test_sum_scores_everything() {
        let result = Rule::sum().try_score(&dice(&[1, 2, 3, 4, 5]));
        assert_eq!(result, RuleScore::hit(15));
    }

    #[test]
    fn test_sum_on_empty_dice_is_a_miss_not_a_zero_score() {
        let result = Rule::sum().try_score(&[]);
        assert!(!result.matched);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_n_of_a_kind_prefers_highest_face() {
        let rule = Rule::n_of_a_kind(3, 0, 0).unwrap();
        // Two qualifying triples; the fives win.
        assert_eq!(rule.try_score(&dice(&[2, 2, 2, 5, 5, 5])), RuleScore::hit(15));
    }

    #[test]
    fn test_n_of_a_kind_bonus_and_fixed() {
        let bonus = Rule::n_of_a_kind(3, 10, 0).unwrap();
        assert_eq!(bonus.try_score(&dice(&[2, 2, 2, 4, 5])), RuleScore::hit(16));

        let fixed = Rule::n_of_a_kind(5, 0, 50).unwrap();
        assert_eq!(fixed.try_score(&dice(&[6, 6, 6, 6, 6])), RuleScore::hit(50));
    }

    #[test]
    fn test_n_of_a_kind_misses() {
        let rule = Rule::n_of_a_kind(4, 0, 0).unwrap();
        assert_eq!(rule.try_score(&dice(&[2, 2, 2, 5, 6])), RuleScore::miss());
        // Fewer dice than n can never match.
        assert_eq!(rule.try_score(&dice(&[6, 6, 6])), RuleScore::miss());
    }

    #[test]
    fn test_full_house_maximizes_triple_and_pair() {
        let rule = Rule::full_house(0, 0);
        // Candidates: 3*6+2*4=26 and 3*6+2*3=24 (and 3*4.. no, only one triple).
        assert_eq!(
            rule.try_score(&dice(&[6, 6, 6, 4, 4, 3, 3])),
            RuleScore::hit(26)
        );
    }

    #[test]
    fn test_full_house_five_of_a_kind_is_not_a_full_house() {
        let rule = Rule::full_house(0, 0);
        assert_eq!(rule.try_score(&dice(&[4, 4, 4, 4, 4])), RuleScore::miss());
    }

    #[test]
    fn test_full_house_four_and_pair_counts() {
        // The quad supplies the triple, the distinct pair completes it.
        let rule = Rule::full_house(0, 0);
        assert_eq!(rule.try_score(&dice(&[5, 5, 5, 5, 2, 2])), RuleScore::hit(19));
    }

    #[test]
    fn test_full_house_bonus_and_fixed() {
        let bonus = Rule::full_house(30, 0);
        assert_eq!(bonus.try_score(&dice(&[2, 2, 2, 3, 3])), RuleScore::hit(42));

        let fixed = Rule::full_house(0, 25);
        assert_eq!(fixed.try_score(&dice(&[2, 2, 2, 3, 3])), RuleScore::hit(25));
    }

    #[test]
    fn test_straight_fixed_score() {
        let rule = Rule::straight(4, 0, 30).unwrap();
        // Run of four (1-2-3-4) despite the gap at 5.
        assert_eq!(rule.try_score(&dice(&[1, 2, 3, 4, 6])), RuleScore::hit(30));
    }

    #[test]
    fn test_straight_sums_all_dice_including_duplicates() {
        let rule = Rule::straight(4, 0, 0).unwrap();
        // 3-4-5-6 run; the duplicate 3 still counts toward the sum.
        assert_eq!(rule.try_score(&dice(&[3, 3, 4, 5, 6])), RuleScore::hit(21));
    }

    #[test]
    fn test_straight_too_short_misses() {
        let rule = Rule::straight(5, 0, 40).unwrap();
        assert_eq!(rule.try_score(&dice(&[1, 2, 3, 4, 6])), RuleScore::miss());
    }

    #[test]
    fn test_straight_rejects_trivial_n() {
        assert!(Rule::straight(1, 0, 0).is_err());
        assert!(Rule::straight(2, 0, 0).is_ok());
    }

    #[test]
    fn test_pattern_picks_best_matching_set() {
        let rule = Rule::pattern([
            (BTreeSet::from([1, 2, 3, 4, 5]), 35),
            (BTreeSet::from([2, 3, 4, 5, 6]), 45),
        ])
        .unwrap();

        assert_eq!(rule.try_score(&dice(&[2, 3, 4, 5, 6])), RuleScore::hit(45));
        assert_eq!(rule.try_score(&dice(&[1, 2, 3, 4, 5])), RuleScore::hit(35));
        assert_eq!(rule.try_score(&dice(&[1, 1, 3, 4, 5])), RuleScore::miss());
    }

    #[test]
    fn test_pattern_rejects_empty_table() {
        assert!(Rule::pattern([]).is_err());
    }

    #[test]
    fn test_every_rule_misses_on_empty_dice() {
        let rules = [
            Rule::face_sum(3).unwrap(),
            Rule::sum(),
            Rule::n_of_a_kind(3, 0, 0).unwrap(),
            Rule::full_house(0, 0),
            Rule::straight(4, 0, 30).unwrap(),
            Rule::pattern([(BTreeSet::from([1, 2]), 10)]).unwrap(),
        ];
        for rule in rules {
            assert_eq!(rule.try_score(&[]), RuleScore::miss());
        }
    }

    proptest! {
        #[test]
        fn prop_face_sum_is_face_times_count(
            values in proptest::collection::vec(1u8..=6, 1..=8),
            face in 1u8..=6,
        ) {
            let hand = dice(&values);
            let count = values.iter().filter(|&&v| v == face).count() as i32;
            let result = Rule::face_sum(face).unwrap().try_score(&hand);
            prop_assert_eq!(result.score, i32::from(face) * count);
            prop_assert_eq!(result.matched, count > 0);
        }

        #[test]
        fn prop_sum_matches_arithmetic_sum(
            values in proptest::collection::vec(1u8..=6, 1..=8),
        ) {
            let hand = dice(&values);
            let expected: i32 = values.iter().map(|&v| i32::from(v)).sum();
            prop_assert_eq!(Rule::sum().try_score(&hand), RuleScore::hit(expected));
        }
    }
}
