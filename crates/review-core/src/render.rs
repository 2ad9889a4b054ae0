use review_config::DisplayConfig;
use review_models::{Review, ReviewId, MAX_STARS};
use serde::Serialize;
use std::fmt::Write;

/// Everything the presentation layer needs to draw one review card.
///
/// Text fields are already markup-escaped.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedReview {
    pub id: ReviewId,
    pub author: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub rating: RatingStrip,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<&'static str>,
    pub helpful: HelpfulState,
}

/// Five-slot rating strip: `filled` glyphs followed by `empty` glyphs
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct RatingStrip {
    pub filled: u8,
    pub empty: u8,
}

impl RatingStrip {
    pub fn for_stars(stars: u8) -> Self {
        let filled = stars.min(MAX_STARS);
        Self {
            filled,
            empty: MAX_STARS - filled,
        }
    }

    pub fn to_glyphs(self, filled: &str, empty: &str) -> String {
        format!("{}{}", filled.repeat(self.filled as usize), empty.repeat(self.empty as usize))
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HelpfulState {
    pub count: u32,
    pub voted: bool,
}

/// Replace characters that are significant in HTML markup with entities.
pub fn escape_markup(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn format_date(review: &Review, date_format: &str) -> String {
    let mut date = String::new();
    // chrono reports unknown specifiers as a fmt error instead of text
    if write!(date, "{}", review.created_at.format(date_format)).is_err() {
        return review.created_at.to_rfc3339();
    }
    date
}

pub fn render_review(review: &Review, display: &DisplayConfig) -> RenderedReview {
    RenderedReview {
        id: review.id,
        author: escape_markup(&review.author),
        title: escape_markup(&review.title),
        description: escape_markup(&review.description),
        date: format_date(review, &display.date_format),
        rating: RatingStrip::for_stars(review.rating.stars()),
        recommendation: review.recommends.label(),
        helpful: HelpfulState {
            count: review.helpful_count,
            voted: review.helpful_voted,
        },
    }
}

/// Render reviews in the order given
pub fn render_reviews<'a, I>(reviews: I, display: &DisplayConfig) -> Vec<RenderedReview>
where
    I: IntoIterator<Item = &'a Review>,
{
    reviews
        .into_iter()
        .map(|review| render_review(review, display))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{recommending_review, review_with};
    use review_models::Recommendation;

    #[test]
    fn test_escape_markup() {
        assert_eq!(
            escape_markup(r#"<script>alert("x&y")</script>"#),
            "&lt;script&gt;alert(&quot;x&amp;y&quot;)&lt;/script&gt;"
        );
        assert_eq!(escape_markup("it's"), "it&#039;s");
        assert_eq!(escape_markup("plain text"), "plain text");
    }

    #[test]
    fn test_escape_existing_entities() {
        assert_eq!(escape_markup("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_render_escapes_user_text() {
        let mut review = review_with(ReviewId(1), 4, 0);
        review.author = "<b>Eve</b>".to_string();
        review.title = "\"Great\" & cheap".to_string();
        review.description = "<img src=x onerror='boom'>".to_string();

        let rendered = render_review(&review, &DisplayConfig::default());
        assert_eq!(rendered.author, "&lt;b&gt;Eve&lt;/b&gt;");
        assert_eq!(rendered.title, "&quot;Great&quot; &amp; cheap");
        assert_eq!(rendered.description, "&lt;img src=x onerror=&#039;boom&#039;&gt;");
    }

    #[test]
    fn test_render_card_fields() {
        let mut review = recommending_review(7, 3, Recommendation::No);
        review.vote_helpful();

        let rendered = render_review(&review, &DisplayConfig::default());
        assert_eq!(rendered.id, ReviewId(7));
        assert_eq!(rendered.date, "October 16, 2026");
        assert_eq!(rendered.rating, RatingStrip { filled: 3, empty: 2 });
        assert_eq!(rendered.rating.to_glyphs("★", "☆"), "★★★☆☆");
        assert_eq!(rendered.recommendation, Some("does not recommend"));
        assert_eq!(rendered.helpful, HelpfulState { count: 1, voted: true });
    }

    #[test]
    fn test_unset_recommendation_has_no_label() {
        let review = recommending_review(1, 5, Recommendation::Unset);
        assert_eq!(render_review(&review, &DisplayConfig::default()).recommendation, None);
    }

    #[test]
    fn test_custom_date_format() {
        let review = review_with(ReviewId(1), 5, 0);
        let display = DisplayConfig {
            date_format: "%Y-%m-%d".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(render_review(&review, &display).date, "2026-10-16");
    }

    #[test]
    fn test_invalid_date_format_falls_back_to_rfc3339() {
        let review = review_with(ReviewId(1), 5, 0);
        let display = DisplayConfig {
            date_format: "%Q".to_string(),
            ..DisplayConfig::default()
        };
        assert_eq!(render_review(&review, &display).date, "2026-10-16T12:00:00+00:00");
    }

    #[test]
    fn test_render_keeps_order_and_length() {
        let reviews = vec![
            review_with(ReviewId(3), 1, 0),
            review_with(ReviewId(1), 2, 0),
            review_with(ReviewId(2), 3, 0),
        ];
        let rendered = render_reviews(&reviews, &DisplayConfig::default());
        let ids: Vec<u64> = rendered.iter().map(|r| r.id.0).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
