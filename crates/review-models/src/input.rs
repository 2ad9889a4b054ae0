use serde::{Deserialize, Serialize};

use crate::rating::StarRating;
use crate::recommendation::Recommendation;

/// Review values that already passed the form validators
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubmittedReviewInput {
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub title: String,
    pub description: String,
    pub rating: StarRating,
    #[serde(default)]
    pub recommends: Recommendation,
}

/// Raw form payload as typed by the user, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ReviewForm {
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Any JSON number; range and whole-star checks happen in validation
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub recommends: Option<bool>,
}
