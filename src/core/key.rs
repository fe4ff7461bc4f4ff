//! Value-equal identifiers for scoreable slots and columns.
//!
//! Game tables address their slots by name ("ones", "full_house", "down"),
//! so keys are string-backed rather than numeric. The engine never
//! interprets key contents - variants assign meaning via `GameDefinition`.

use serde::{Deserialize, Serialize};

/// Identifier for a single scoring category.
///
/// Value-equal and hashable; cloning is cheap enough for the handful of
/// keys a game table carries.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Create a category key from a name.
    #[must_use]
    pub fn of(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The key's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CategoryKey {
    fn from(name: &str) -> Self {
        Self::of(name)
    }
}

/// Identifier for a column of categories.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColumnKey(String);

impl ColumnKey {
    /// Create a column key from a name.
    #[must_use]
    pub fn of(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The key's name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ColumnKey {
    fn from(name: &str) -> Self {
        Self::of(name)
    }
}
