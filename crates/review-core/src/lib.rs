pub mod pipeline;
pub mod render;
pub mod sort;
pub mod statistics;
pub mod store;
pub mod validation;
pub mod widget;

#[cfg(test)]
pub(crate) mod test_support;

pub use pipeline::{build_view, WidgetView};
pub use render::{escape_markup, render_review, render_reviews, HelpfulState, RatingStrip, RenderedReview};
pub use sort::sort_reviews;
pub use statistics::{compute_statistics, AverageStars, ReviewStatistics};
pub use store::ReviewStore;
pub use validation::{validate, Field, FieldError, ValidationErrors};
pub use widget::{Clock, CommandError, CommandOutcome, ReviewWidget, SystemClock, WidgetCommand};
