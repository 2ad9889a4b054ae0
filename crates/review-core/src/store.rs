use review_models::{Review, ReviewId};
use tracing::debug;

/// Session-scoped, insertion-ordered collection of submitted reviews.
///
/// The store is the only owner of `Review` values; everything else reads
/// through [`ReviewStore::all`] and mutates only via [`ReviewStore::mark_helpful`].
#[derive(Debug, Default)]
pub struct ReviewStore {
    reviews: Vec<Review>,
    last_id: u64,
}

impl ReviewStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next unused identifier. Never repeats within one store.
    pub fn next_id(&mut self) -> ReviewId {
        self.last_id += 1;
        ReviewId(self.last_id)
    }

    pub fn add(&mut self, review: Review) {
        // Keep the counter ahead of ids minted elsewhere
        self.last_id = self.last_id.max(review.id.0);
        self.reviews.push(review);
        debug!(count = self.reviews.len(), "review appended to store");
    }

    pub fn find_by_id(&self, id: ReviewId) -> Option<&Review> {
        self.reviews.iter().find(|review| review.id == id)
    }

    /// Apply the one-time helpful vote. Unknown ids and repeat votes are inert.
    pub fn mark_helpful(&mut self, id: ReviewId) -> bool {
        match self.reviews.iter_mut().find(|review| review.id == id) {
            Some(review) => review.vote_helpful(),
            None => {
                debug!(review_id = %id, "helpful vote for unknown review ignored");
                false
            }
        }
    }

    pub fn all(&self) -> &[Review] {
        &self.reviews
    }

    pub fn len(&self) -> usize {
        self.reviews.len()
    }

    pub fn is_empty(&self) -> bool {
        self.reviews.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::review_with;

    #[test]
    fn test_add_preserves_submission_order() {
        let mut store = ReviewStore::new();
        for rating in [3, 5, 1] {
            let id = store.next_id();
            store.add(review_with(id, rating, 0));
        }

        let ratings: Vec<u8> = store.all().iter().map(|r| r.rating.stars()).collect();
        assert_eq!(ratings, vec![3, 5, 1]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_next_id_is_unique() {
        let mut store = ReviewStore::new();
        let first = store.next_id();
        let second = store.next_id();
        assert_ne!(first, second);
    }

    #[test]
    fn test_next_id_skips_ids_added_externally() {
        let mut store = ReviewStore::new();
        store.add(review_with(ReviewId(10), 4, 0));
        assert_eq!(store.next_id(), ReviewId(11));
    }

    #[test]
    fn test_find_by_id() {
        let mut store = ReviewStore::new();
        let id = store.next_id();
        store.add(review_with(id, 4, 0));

        assert_eq!(store.find_by_id(id).map(|r| r.id), Some(id));
        assert!(store.find_by_id(ReviewId(999)).is_none());
    }

    #[test]
    fn test_mark_helpful_is_idempotent() {
        let mut store = ReviewStore::new();
        let id = store.next_id();
        store.add(review_with(id, 4, 0));

        assert!(store.mark_helpful(id));
        assert!(!store.mark_helpful(id));

        let review = store.find_by_id(id).unwrap();
        assert_eq!(review.helpful_count, 1);
        assert!(review.helpful_voted);
    }

    #[test]
    fn test_mark_helpful_unknown_id_is_noop() {
        let mut store = ReviewStore::new();
        let id = store.next_id();
        store.add(review_with(id, 4, 0));

        assert!(!store.mark_helpful(ReviewId(42)));
        assert_eq!(store.find_by_id(id).unwrap().helpful_count, 0);
    }
}
