//! Classic Yahtzee: one free-order column, thirteen categories.

use crate::core::definition::{CategoryDefinition, ColumnDefinition, GameDefinition};
use crate::core::error::{GameError, GameResult};
use crate::core::key::{CategoryKey, ColumnKey};
use crate::core::policy::OrderPolicy;
use crate::core::rng::RollService;
use crate::core::scoring::{ColumnScoring, SectionScoring};
use crate::core::state::GameState;
use crate::engine::{self, Command, GameEngine};
use crate::rules::Rule;

/// The single column.
pub const MAIN: &str = "main";

const UPPER: [&str; 6] = ["ones", "twos", "threes", "fours", "fives", "sixes"];
const LOWER: [&str; 7] = [
    "three_of_a_kind",
    "four_of_a_kind",
    "full_house",
    "small_straight",
    "large_straight",
    "yahtzee",
    "chance",
];

const FULL_HOUSE_SCORE: i32 = 25;
const SMALL_STRAIGHT_SCORE: i32 = 30;
const LARGE_STRAIGHT_SCORE: i32 = 40;
const YAHTZEE_SCORE: i32 = 50;
const UPPER_BONUS: i32 = 35;
const UPPER_BONUS_THRESHOLD: i32 = 63;

/// The standard Yahtzee table: 5 six-sided dice, 3 rolls per turn,
/// upper-section bonus of 35 at 63 or more.
#[must_use]
pub fn definition() -> GameDefinition {
    let categories = vec![
        CategoryDefinition::new("ones", Rule::face_sum(1).expect("static table")),
        CategoryDefinition::new("twos", Rule::face_sum(2).expect("static table")),
        CategoryDefinition::new("threes", Rule::face_sum(3).expect("static table")),
        CategoryDefinition::new("fours", Rule::face_sum(4).expect("static table")),
        CategoryDefinition::new("fives", Rule::face_sum(5).expect("static table")),
        CategoryDefinition::new("sixes", Rule::face_sum(6).expect("static table")),
        CategoryDefinition::new(
            "three_of_a_kind",
            Rule::n_of_a_kind(3, 0, 0).expect("static table"),
        ),
        CategoryDefinition::new(
            "four_of_a_kind",
            Rule::n_of_a_kind(4, 0, 0).expect("static table"),
        ),
        CategoryDefinition::new("full_house", Rule::full_house(0, FULL_HOUSE_SCORE)),
        CategoryDefinition::new(
            "small_straight",
            Rule::straight(4, 0, SMALL_STRAIGHT_SCORE).expect("static table"),
        ),
        CategoryDefinition::new(
            "large_straight",
            Rule::straight(5, 0, LARGE_STRAIGHT_SCORE).expect("static table"),
        ),
        CategoryDefinition::new(
            "yahtzee",
            Rule::n_of_a_kind(5, 0, YAHTZEE_SCORE).expect("static table"),
        ),
        CategoryDefinition::new("chance", Rule::sum()),
    ];

    let scoring = ColumnScoring::Sections(SectionScoring {
        upper: UPPER.iter().map(|&k| CategoryKey::of(k)).collect(),
        lower: LOWER.iter().map(|&k| CategoryKey::of(k)).collect(),
        upper_bonus: UPPER_BONUS,
        upper_threshold: UPPER_BONUS_THRESHOLD,
        spread: None,
    });
    let columns = vec![ColumnDefinition::new(MAIN, OrderPolicy::Free, scoring)];

    GameDefinition::new(5, 6, 3, categories, columns, None).expect("static table")
}

/// Yahtzee reducer: Roll and Fill only; the announcement mechanic does
/// not exist in this variant.
#[derive(Debug)]
pub struct YahtzeeEngine<R: RollService> {
    definition: GameDefinition,
    rolls: R,
}

impl<R: RollService> YahtzeeEngine<R> {
    /// Engine over the standard table.
    #[must_use]
    pub fn new(rolls: R) -> Self {
        Self {
            definition: definition(),
            rolls,
        }
    }

    /// Engine over a custom (already validated) table.
    #[must_use]
    pub fn with_definition(rolls: R, definition: GameDefinition) -> Self {
        Self { definition, rolls }
    }
}

impl<R: RollService> GameEngine for YahtzeeEngine<R> {
    fn definition(&self) -> &GameDefinition {
        &self.definition
    }

    fn create(&self) -> GameState {
        GameState::new(
            engine::fresh_dice(&self.definition),
            engine::initial_columns(&self.definition),
            0,
            None,
        )
    }

    fn reduce(&mut self, state: &GameState, command: &Command) -> GameResult<GameState> {
        engine::ensure_active(state)?;
        match command {
            Command::Roll { keep } => {
                engine::reduce_roll(&self.definition, state, &mut self.rolls, *keep)
            }
            Command::Announce { .. } => Err(GameError::AnnouncementUnsupported),
            Command::Fill { column, category } => {
                engine::reduce_fill(&self.definition, state, column, category)
            }
        }
    }
}
