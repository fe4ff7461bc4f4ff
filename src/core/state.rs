//! Immutable game snapshots.
//!
//! One generic state serves every variant: dice, columns in definition
//! order, the roll count, and an extension slot for the Yamb
//! announcement. A successful reduce replaces the snapshot wholesale;
//! prior snapshots stay valid, which makes undo and audit trails trivial.
//! Cloning is cheap via `im`'s structural sharing.

use im::Vector;
use smallvec::SmallVec;

use super::column::Column;
use super::die::Die;
use super::key::{CategoryKey, ColumnKey};

/// Dice in play. Five or six dice in practice, so no heap allocation.
pub type DiceSet = SmallVec<[Die; 6]>;

/// One snapshot of a game in progress.
#[derive(Clone, Debug)]
pub struct GameState {
    dice: DiceSet,
    columns: Vector<Column>,
    roll_count: u8,
    announcement: Option<CategoryKey>,
}

impl GameState {
    /// Assemble a snapshot. Crate-internal; engines create states.
    pub(crate) fn new(
        dice: DiceSet,
        columns: Vector<Column>,
        roll_count: u8,
        announcement: Option<CategoryKey>,
    ) -> Self {
        Self {
            dice,
            columns,
            roll_count,
            announcement,
        }
    }

    /// Current dice, in die-index order.
    #[must_use]
    pub fn dice(&self) -> &[Die] {
        &self.dice
    }

    /// Current dice values, in die-index order.
    #[must_use]
    pub fn dice_values(&self) -> Vec<u8> {
        self.dice.iter().map(Die::value).collect()
    }

    /// Columns in definition order.
    #[must_use]
    pub fn columns(&self) -> &Vector<Column> {
        &self.columns
    }

    /// Look up a column by key.
    #[must_use]
    pub fn column(&self, key: &ColumnKey) -> Option<&Column> {
        self.columns.iter().find(|c| c.key() == key)
    }

    /// Rolls taken this turn.
    #[must_use]
    pub fn roll_count(&self) -> u8 {
        self.roll_count
    }

    /// The live announcement, if any (Yamb).
    #[must_use]
    pub fn announcement(&self) -> Option<&CategoryKey> {
        self.announcement.as_ref()
    }

    /// Sum of all column scores.
    #[must_use]
    pub fn total_score(&self) -> i32 {
        self.columns.iter().map(Column::score).sum()
    }

    /// Every column completed?
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.columns.iter().all(Column::is_completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::category::Category;
    use crate::core::policy::OrderPolicy;
    use crate::core::scoring::ColumnScoring;
    use crate::rules::Rule;

    fn column(key: &str, names: &[&str]) -> Column {
        Column::new(
            ColumnKey::of(key),
            OrderPolicy::Free,
            ColumnScoring::Plain,
            names
                .iter()
                .map(|&n| Category::new(CategoryKey::of(n), Rule::sum())),
        )
        .unwrap()
    }

    fn dice(values: &[u8]) -> DiceSet {
        values.iter().map(|&v| Die::new(6, v).unwrap()).collect()
    }

    #[test]
    fn test_fresh_state_accessors() {
        let state = GameState::new(
            dice(&[6, 6]),
            [column("main", &["a", "b"])].into_iter().collect(),
            0,
            None,
        );
        assert_eq!(state.dice_values(), vec![6, 6]);
        assert_eq!(state.roll_count(), 0);
        assert!(state.announcement().is_none());
        assert_eq!(state.total_score(), 0);
        assert!(!state.is_completed());
    }

    #[test]
    fn test_column_lookup() {
        let state = GameState::new(
            dice(&[6]),
            [column("down", &["a"]), column("up", &["a"])]
                .into_iter()
                .collect(),
            0,
            None,
        );
        assert!(state.column(&ColumnKey::of("up")).is_some());
        assert!(state.column(&ColumnKey::of("sideways")).is_none());
    }

    #[test]
    fn test_total_score_sums_columns() {
        let hand = dice(&[2, 3]);
        let a = column("a", &["x"]).fill(&hand, &CategoryKey::of("x")).unwrap();
        let b = column("b", &["x"]).fill(&hand, &CategoryKey::of("x")).unwrap();

        let state = GameState::new(dice(&[6]), [a, b].into_iter().collect(), 0, None);
        assert_eq!(state.total_score(), 10);
        assert!(state.is_completed());
    }
}
