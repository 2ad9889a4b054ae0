use chrono::{DateTime, Duration, TimeZone, Utc};
use review_models::{Recommendation, Review, ReviewId, StarRating, SubmittedReviewInput};

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 16, 12, 0, 0).unwrap()
}

pub fn input_with(rating: u8, recommends: Recommendation) -> SubmittedReviewInput {
    SubmittedReviewInput {
        author: "Test Author".to_string(),
        email: None,
        title: format!("{} star review", rating),
        description: "A description that is long enough to pass.".to_string(),
        rating: StarRating::new(rating).unwrap(),
        recommends,
    }
}

/// Review created `offset_secs` after [`base_time`]
pub fn review_with(id: ReviewId, rating: u8, offset_secs: i64) -> Review {
    Review::new(
        id,
        input_with(rating, Recommendation::Unset),
        base_time() + Duration::seconds(offset_secs),
    )
}

pub fn recommending_review(id: u64, rating: u8, recommends: Recommendation) -> Review {
    Review::new(ReviewId(id), input_with(rating, recommends), base_time())
}
