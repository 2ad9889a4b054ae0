use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::input::SubmittedReviewInput;
use crate::rating::StarRating;
use crate::recommendation::Recommendation;

/// Session-unique review identifier handed out by the store
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct ReviewId(pub u64);

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    pub id: ReviewId,
    pub author: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>, // Collected by the form, never rendered
    pub title: String,
    pub description: String,
    pub rating: StarRating,
    pub recommends: Recommendation,
    pub created_at: DateTime<Utc>,
    pub helpful_count: u32,
    pub helpful_voted: bool,
}

impl Review {
    pub fn new(id: ReviewId, input: SubmittedReviewInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            author: input.author,
            email: input.email,
            title: input.title,
            description: input.description,
            rating: input.rating,
            recommends: input.recommends,
            created_at,
            helpful_count: 0,
            helpful_voted: false,
        }
    }

    /// Apply the one-time helpful vote. Returns false once the review has already been voted on.
    pub fn vote_helpful(&mut self) -> bool {
        if self.helpful_voted {
            return false;
        }
        self.helpful_voted = true;
        self.helpful_count += 1;
        true
    }
}
