use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering applied to the review list before rendering.
///
/// Parsing is lenient: anything other than `newest` or `highest` falls back
/// to submission order.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(from = "String", into = "String")]
pub enum SortMode {
    /// Most recently created first
    Newest,
    /// Highest star rating first
    Highest,
    /// Order in which reviews were submitted
    #[default]
    Submitted,
}

impl SortMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SortMode::Newest => "newest",
            SortMode::Highest => "highest",
            SortMode::Submitted => "submitted",
        }
    }
}

impl From<&str> for SortMode {
    fn from(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "newest" => SortMode::Newest,
            "highest" => SortMode::Highest,
            _ => SortMode::Submitted,
        }
    }
}

impl From<String> for SortMode {
    fn from(value: String) -> Self {
        SortMode::from(value.as_str())
    }
}

impl From<SortMode> for String {
    fn from(mode: SortMode) -> Self {
        mode.as_str().to_string()
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
