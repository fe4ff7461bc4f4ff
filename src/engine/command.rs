//! Player commands.
//!
//! A closed tagged union so reducers dispatch with compile-time
//! exhaustiveness - adding a command is a type error everywhere it is
//! not handled. serde derives let a surrounding application (CLI,
//! server, replay file) carry commands across its own boundaries.

use serde::{Deserialize, Serialize};

use crate::core::key::{CategoryKey, ColumnKey};

/// One player command.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Reroll dice under a keep mask: bit `i` set keeps die `i`, bit
    /// clear rerolls it. `keep: 0` rerolls everything.
    Roll { keep: u32 },

    /// Declare the category the turn must fill (Yamb only; before the
    /// first roll of the turn).
    Announce { category: CategoryKey },

    /// Score one category of one column using the current dice.
    Fill {
        column: ColumnKey,
        category: CategoryKey,
    },
}

impl Command {
    /// Reroll every die.
    #[must_use]
    pub fn roll_all() -> Self {
        Command::Roll { keep: 0 }
    }

    /// Roll, keeping the dice at the given indices.
    #[must_use]
    pub fn roll_keeping(indices: impl IntoIterator<Item = usize>) -> Self {
        let keep = indices.into_iter().fold(0u32, |mask, i| mask | (1 << i));
        Command::Roll { keep }
    }

    /// Announce a category.
    #[must_use]
    pub fn announce(category: impl Into<CategoryKey>) -> Self {
        Command::Announce {
            category: category.into(),
        }
    }

    /// Fill a category in a column.
    #[must_use]
    pub fn fill(column: impl Into<ColumnKey>, category: impl Into<CategoryKey>) -> Self {
        Command::Fill {
            column: column.into(),
            category: category.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_keeping_builds_mask() {
        assert_eq!(Command::roll_keeping([0, 2]), Command::Roll { keep: 0b101 });
        assert_eq!(Command::roll_keeping([]), Command::roll_all());
    }

    #[test]
    fn test_builders() {
        assert_eq!(
            Command::announce("trips"),
            Command::Announce {
                category: CategoryKey::of("trips")
            }
        );
        assert_eq!(
            Command::fill("down", "ones"),
            Command::Fill {
                column: ColumnKey::of("down"),
                category: CategoryKey::of("ones")
            }
        );
    }

    #[test]
    fn test_command_serde_round_trip() {
        let commands = [
            Command::roll_keeping([1, 3]),
            Command::announce("yamb"),
            Command::fill("free", "max"),
        ];
        for command in commands {
            let json = serde_json::to_string(&command).unwrap();
            let back: Command = serde_json::from_str(&json).unwrap();
            assert_eq!(command, back);
        }
    }
}
