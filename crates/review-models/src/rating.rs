use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub const MIN_STARS: u8 = 1;
pub const MAX_STARS: u8 = 5;

/// Star rating given by a reviewer, always within 1-5.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("rating must be between 1 and 5, got {0}")]
pub struct RatingOutOfRange(pub u8);

impl StarRating {
    pub fn new(stars: u8) -> Result<Self, RatingOutOfRange> {
        if (MIN_STARS..=MAX_STARS).contains(&stars) {
            Ok(Self(stars))
        } else {
            Err(RatingOutOfRange(stars))
        }
    }

    pub fn stars(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StarRating {
    type Error = RatingOutOfRange;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_STARS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_rating_bounds() {
        assert!(StarRating::new(0).is_err());
        assert!(StarRating::new(6).is_err());
        assert_eq!(StarRating::new(1).unwrap().stars(), 1);
        assert_eq!(StarRating::new(5).unwrap().stars(), 5);
    }

    #[test]
    fn test_star_rating_rejects_out_of_range_json() {
        let ok: StarRating = serde_json::from_str("4").unwrap();
        assert_eq!(ok.stars(), 4);
        assert!(serde_json::from_str::<StarRating>("9").is_err());
    }

    #[test]
    fn test_out_of_range_message() {
        assert_eq!(
            RatingOutOfRange(7).to_string(),
            "rating must be between 1 and 5, got 7"
        );
    }
}
