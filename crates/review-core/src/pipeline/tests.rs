use super::*;
use crate::test_support::{recommending_review, review_with};
use review_models::{Recommendation, ReviewId};

fn store_of(reviews: Vec<review_models::Review>) -> ReviewStore {
    let mut store = ReviewStore::new();
    for review in reviews {
        store.add(review);
    }
    store
}

#[test]
fn test_empty_store_view() {
    let store = ReviewStore::new();
    let view = build_view(&store, SortMode::Newest, &DisplayConfig::default());

    assert!(view.is_empty());
    assert_eq!(view.statistics.count, 0);
    assert_eq!(view.statistics.average_rating, 0.0);
    assert_eq!(view.statistics.recommend_percentage, 0);
    assert_eq!(view.statistics.stars.filled, 0);
    assert_eq!(view.statistics.stars.empty, 0);
}

#[test]
fn test_scenario_two_reviews() {
    let store = store_of(vec![
        review_with(ReviewId(1), 5, 0),   // A
        review_with(ReviewId(2), 3, 120), // B
    ]);
    let display = DisplayConfig::default();

    let highest = build_view(&store, SortMode::Highest, &display);
    let ids: Vec<u64> = highest.reviews.iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![1, 2]);
    assert_eq!(highest.statistics.average_rating, 4.0);

    let newest = build_view(&store, SortMode::Newest, &display);
    let ids: Vec<u64> = newest.reviews.iter().map(|r| r.id.0).collect();
    assert_eq!(ids, vec![2, 1]);
}

#[test]
fn test_recommend_percentage_scenario() {
    let mut store = ReviewStore::new();
    store.add(recommending_review(1, 4, Recommendation::Yes));
    let view = build_view(&store, SortMode::Submitted, &DisplayConfig::default());
    assert_eq!(view.statistics.recommend_percentage, 100);

    store.add(recommending_review(2, 2, Recommendation::No));
    let view = build_view(&store, SortMode::Submitted, &DisplayConfig::default());
    assert_eq!(view.statistics.recommend_percentage, 50);
}

#[test]
fn test_view_length_matches_store_for_every_mode() {
    let store = store_of(vec![
        review_with(ReviewId(1), 2, 10),
        review_with(ReviewId(2), 2, 10),
        review_with(ReviewId(3), 5, 0),
        review_with(ReviewId(4), 1, 30),
    ]);

    for mode in [SortMode::Newest, SortMode::Highest, SortMode::Submitted] {
        let view = build_view(&store, mode, &DisplayConfig::default());
        assert_eq!(view.reviews.len(), store.len());

        let mut ids: Vec<u64> = view.reviews.iter().map(|r| r.id.0).collect();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }
}

#[test]
fn test_rebuild_is_idempotent() {
    let store = store_of(vec![review_with(ReviewId(1), 4, 0), review_with(ReviewId(2), 1, 5)]);
    let display = DisplayConfig::default();

    let first = build_view(&store, SortMode::Highest, &display);
    let second = build_view(&store, SortMode::Highest, &display);
    assert_eq!(first, second);
}

#[test]
fn test_helpful_vote_shows_in_next_view() {
    let mut store = store_of(vec![review_with(ReviewId(1), 4, 0), review_with(ReviewId(2), 5, 5)]);
    store.mark_helpful(ReviewId(2));
    store.mark_helpful(ReviewId(2));

    let view = build_view(&store, SortMode::Submitted, &DisplayConfig::default());
    assert_eq!(view.reviews[0].helpful.count, 0);
    assert!(!view.reviews[0].helpful.voted);
    assert_eq!(view.reviews[1].helpful.count, 1);
    assert!(view.reviews[1].helpful.voted);
}

#[test]
fn test_view_serializes_for_json_output() {
    let store = store_of(vec![recommending_review(1, 5, Recommendation::Yes)]);
    let view = build_view(&store, SortMode::Newest, &DisplayConfig::default());

    let json = serde_json::to_value(&view).unwrap();
    assert_eq!(json["sort_mode"], "newest");
    assert_eq!(json["statistics"]["count"], 1);
    assert_eq!(json["reviews"][0]["recommendation"], "recommends");
    assert_eq!(json["reviews"][0]["rating"]["filled"], 5);
}
