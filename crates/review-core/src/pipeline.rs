// Aggregation and render pipeline: statistics + sort + card records

use review_config::DisplayConfig;
use review_models::SortMode;
use serde::Serialize;
use tracing::debug;

use crate::render::{render_reviews, RenderedReview};
use crate::sort::sort_reviews;
use crate::statistics::{compute_statistics, ReviewStatistics};
use crate::store::ReviewStore;

/// Snapshot handed to the presentation layer after every mutation
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WidgetView {
    pub statistics: ReviewStatistics,
    pub sort_mode: SortMode,
    pub reviews: Vec<RenderedReview>,
}

impl WidgetView {
    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

/// Recompute the full view from the store. Pure with respect to the store.
pub fn build_view(store: &ReviewStore, mode: SortMode, display: &DisplayConfig) -> WidgetView {
    let reviews = store.all();
    let statistics = compute_statistics(reviews);
    let rendered = render_reviews(sort_reviews(reviews, mode), display);

    debug!(
        operation = "build_view",
        count = statistics.count,
        sort_mode = %mode,
        average_rating = statistics.average_rating,
        "Review view recomputed"
    );

    WidgetView {
        statistics,
        sort_mode: mode,
        reviews: rendered,
    }
}

#[cfg(test)]
mod tests;
