use review_models::{Review, SortMode};
use std::cmp::Reverse;

/// Order reviews for display without touching the stored sequence.
///
/// Both keyed modes use a stable sort, so ties keep their submission order.
pub fn sort_reviews(reviews: &[Review], mode: SortMode) -> Vec<&Review> {
    let mut sorted: Vec<&Review> = reviews.iter().collect();
    match mode {
        SortMode::Newest => sorted.sort_by_key(|review| Reverse(review.created_at)),
        SortMode::Highest => sorted.sort_by_key(|review| Reverse(review.rating)),
        SortMode::Submitted => {}
    }
    sorted
}
