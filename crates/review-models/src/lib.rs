pub mod input;
pub mod rating;
pub mod recommendation;
pub mod review;
pub mod sort_mode;

pub use input::{ReviewForm, SubmittedReviewInput};
pub use rating::{RatingOutOfRange, StarRating, MAX_STARS, MIN_STARS};
pub use recommendation::Recommendation;
pub use review::{Review, ReviewId};
pub use sort_mode::SortMode;
