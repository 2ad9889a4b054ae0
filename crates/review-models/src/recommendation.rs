use serde::{Deserialize, Serialize};

/// Whether the reviewer recommends the product. `Unset` when no choice was made.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Yes,
    No,
    #[default]
    Unset,
}

impl Recommendation {
    pub fn is_yes(self) -> bool {
        matches!(self, Recommendation::Yes)
    }

    /// Card label, absent when the reviewer made no choice
    pub fn label(self) -> Option<&'static str> {
        match self {
            Recommendation::Yes => Some("recommends"),
            Recommendation::No => Some("does not recommend"),
            Recommendation::Unset => None,
        }
    }
}

impl From<Option<bool>> for Recommendation {
    fn from(value: Option<bool>) -> Self {
        match value {
            Some(true) => Recommendation::Yes,
            Some(false) => Recommendation::No,
            None => Recommendation::Unset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Recommendation::Yes.label(), Some("recommends"));
        assert_eq!(Recommendation::No.label(), Some("does not recommend"));
        assert_eq!(Recommendation::Unset.label(), None);
    }

    #[test]
    fn test_from_optional_bool() {
        assert_eq!(Recommendation::from(Some(true)), Recommendation::Yes);
        assert_eq!(Recommendation::from(Some(false)), Recommendation::No);
        assert_eq!(Recommendation::from(None), Recommendation::Unset);
    }
}
