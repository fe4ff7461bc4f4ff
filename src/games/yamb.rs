//! Yamb: four columns over one category set, with the announcement
//! mechanic.
//!
//! The "down" column fills top to bottom, "up" bottom to top, "free" in
//! any order. The "announcement" column is free-order too, but filling
//! it mid-game goes through `Announce`: declare a category before the
//! first roll of the turn and the turn is locked to it.

use std::collections::BTreeSet;

use crate::core::definition::{CategoryDefinition, ColumnDefinition, GameDefinition};
use crate::core::error::{GameError, GameResult};
use crate::core::key::{CategoryKey, ColumnKey};
use crate::core::policy::OrderPolicy;
use crate::core::rng::RollService;
use crate::core::scoring::{ColumnScoring, SectionScoring, Spread};
use crate::core::state::GameState;
use crate::engine::{self, Command, GameEngine};
use crate::rules::Rule;

/// Top-to-bottom column.
pub const DOWN: &str = "down";
/// Bottom-to-top column.
pub const UP: &str = "up";
/// Free-order column.
pub const FREE: &str = "free";
/// Announcement column.
pub const ANNOUNCEMENT: &str = "announcement";

const UPPER: [&str; 6] = ["ones", "twos", "threes", "fours", "fives", "sixes"];
const LOWER: [&str; 5] = ["trips", "straight", "full_house", "poker", "yamb"];

const TRIPS_BONUS: i32 = 10;
const SMALL_STRAIGHT_SCORE: i32 = 35;
const LARGE_STRAIGHT_SCORE: i32 = 45;
const FULL_HOUSE_BONUS: i32 = 30;
const POKER_BONUS: i32 = 40;
const YAMB_BONUS: i32 = 50;
const UPPER_BONUS: i32 = 35;
const UPPER_BONUS_THRESHOLD: i32 = 63;

/// The standard Yamb table: 5 six-sided dice, 3 rolls per turn, four
/// columns sharing thirteen categories, every column scored with the
/// upper-section bonus and the `(max - min) * ones` term.
#[must_use]
pub fn definition() -> GameDefinition {
    let categories = vec![
        CategoryDefinition::new("ones", Rule::face_sum(1).expect("static table")),
        CategoryDefinition::new("twos", Rule::face_sum(2).expect("static table")),
        CategoryDefinition::new("threes", Rule::face_sum(3).expect("static table")),
        CategoryDefinition::new("fours", Rule::face_sum(4).expect("static table")),
        CategoryDefinition::new("fives", Rule::face_sum(5).expect("static table")),
        CategoryDefinition::new("sixes", Rule::face_sum(6).expect("static table")),
        CategoryDefinition::new("max", Rule::sum()),
        CategoryDefinition::new("min", Rule::sum()),
        CategoryDefinition::new(
            "trips",
            Rule::n_of_a_kind(3, TRIPS_BONUS, 0).expect("static table"),
        ),
        CategoryDefinition::new(
            "straight",
            Rule::pattern([
                (BTreeSet::from([1, 2, 3, 4, 5]), SMALL_STRAIGHT_SCORE),
                (BTreeSet::from([2, 3, 4, 5, 6]), LARGE_STRAIGHT_SCORE),
            ])
            .expect("static table"),
        ),
        CategoryDefinition::new("full_house", Rule::full_house(FULL_HOUSE_BONUS, 0)),
        CategoryDefinition::new(
            "poker",
            Rule::n_of_a_kind(4, POKER_BONUS, 0).expect("static table"),
        ),
        CategoryDefinition::new(
            "yamb",
            Rule::n_of_a_kind(5, YAMB_BONUS, 0).expect("static table"),
        ),
    ];

    let scoring = ColumnScoring::Sections(SectionScoring {
        upper: UPPER.iter().map(|&k| CategoryKey::of(k)).collect(),
        lower: LOWER.iter().map(|&k| CategoryKey::of(k)).collect(),
        upper_bonus: UPPER_BONUS,
        upper_threshold: UPPER_BONUS_THRESHOLD,
        spread: Some(Spread {
            max: CategoryKey::of("max"),
            min: CategoryKey::of("min"),
            unit: CategoryKey::of("ones"),
        }),
    });

    let columns = vec![
        ColumnDefinition::new(DOWN, OrderPolicy::TopDown, scoring.clone()),
        ColumnDefinition::new(UP, OrderPolicy::BottomUp, scoring.clone()),
        ColumnDefinition::new(FREE, OrderPolicy::Free, scoring.clone()),
        ColumnDefinition::new(ANNOUNCEMENT, OrderPolicy::Free, scoring),
    ];

    GameDefinition::new(
        5,
        6,
        3,
        categories,
        columns,
        Some(ColumnKey::of(ANNOUNCEMENT)),
    )
    .expect("static table")
}

/// Yamb reducer: the shared Roll/Fill transitions plus the announcement
/// protocol.
#[derive(Debug)]
pub struct YambEngine<R: RollService> {
    definition: GameDefinition,
    announcement: ColumnKey,
    rolls: R,
}

impl<R: RollService> YambEngine<R> {
    /// Engine over the standard table.
    #[must_use]
    pub fn new(rolls: R) -> Self {
        let definition = definition();
        let announcement = definition
            .announcement_column()
            .expect("standard table names an announcement column")
            .clone();
        Self {
            definition,
            announcement,
            rolls,
        }
    }

    /// Engine over a custom table, which must name an announcement
    /// column.
    pub fn with_definition(rolls: R, definition: GameDefinition) -> GameResult<Self> {
        let Some(announcement) = definition.announcement_column().cloned() else {
            return Err(GameError::InvalidDefinition {
                reason: "a yamb table needs an announcement column".into(),
            });
        };
        Ok(Self {
            definition,
            announcement,
            rolls,
        })
    }

    /// Roll gate: once only the announcement column has open categories,
    /// a turn must start with an announcement.
    fn ensure_announcement_not_required(&self, state: &GameState) -> GameResult<()> {
        if state.announcement().is_some() {
            return Ok(());
        }
        let announcement_column =
            state
                .column(&self.announcement)
                .ok_or_else(|| GameError::UnknownColumn {
                    column: self.announcement.clone(),
                })?;
        let others_open = state
            .columns()
            .iter()
            .any(|c| c.key() != &self.announcement && !c.is_completed());
        if !others_open && !announcement_column.is_completed() {
            return Err(GameError::AnnouncementRequired);
        }
        Ok(())
    }

    fn reduce_announce(&self, state: &GameState, category: &CategoryKey) -> GameResult<GameState> {
        if state.roll_count() != 0 {
            return Err(GameError::AnnounceAfterRoll);
        }
        let announcement_column =
            state
                .column(&self.announcement)
                .ok_or_else(|| GameError::UnknownColumn {
                    column: self.announcement.clone(),
                })?;
        let Some(slot) = announcement_column.category(category) else {
            return Err(GameError::UnknownCategory {
                column: self.announcement.clone(),
                category: category.clone(),
            });
        };
        if slot.is_filled() {
            return Err(GameError::AlreadyScored {
                category: category.clone(),
            });
        }
        // Dice and roll count carry over; only the announcement changes.
        Ok(GameState::new(
            state.dice().iter().copied().collect(),
            state.columns().clone(),
            state.roll_count(),
            Some(category.clone()),
        ))
    }
}

impl<R: RollService> GameEngine for YambEngine<R> {
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
                engine::ensure_keep_mask(&self.definition, *keep)?;
                self.ensure_announcement_not_required(state)?;
                engine::reduce_roll(&self.definition, state, &mut self.rolls, *keep)
            }
            Command::Announce { category } => self.reduce_announce(state, category),
            Command::Fill { column, category } => {
                if let Some(announced) = state.announcement() {
                    if column != &self.announcement || category != announced {
                        return Err(GameError::AnnouncementMismatch {
                            announced: announced.clone(),
                        });
                    }
                }
                engine::reduce_fill(&self.definition, state, column, category)
            }
        }
    }
}
