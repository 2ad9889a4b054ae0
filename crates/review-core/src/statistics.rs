use review_models::{Review, MAX_STARS};
use serde::Serialize;

/// Summary numbers shown above the review list
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct ReviewStatistics {
    pub count: usize,
    /// Mean rating rounded half-up to one decimal
    pub average_rating: f64,
    /// Share of reviews that recommend the product, rounded half-up
    pub recommend_percentage: u8,
    pub stars: AverageStars,
}

/// Glyph counts for the average rating.
///
/// A fractional part of .5 or more adds one *filled* glyph, not a half glyph,
/// and `empty` is `5 - ceil(average)`. Averages such as 3.2 therefore show
/// three filled and one empty glyph, four in total.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct AverageStars {
    pub filled: u8,
    pub empty: u8,
}

impl AverageStars {
    fn from_tenths(tenths: u64) -> Self {
        let whole = (tenths / 10) as u8;
        let fraction = tenths % 10;
        let half = u8::from(fraction >= 5);
        let ceil = whole + u8::from(fraction > 0);
        Self {
            filled: whole + half,
            empty: MAX_STARS.saturating_sub(ceil),
        }
    }

    pub fn to_glyphs(self, filled: &str, empty: &str) -> String {
        format!("{}{}", filled.repeat(self.filled as usize), empty.repeat(self.empty as usize))
    }
}

impl ReviewStatistics {
    pub fn empty() -> Self {
        Self {
            count: 0,
            average_rating: 0.0,
            recommend_percentage: 0,
            stars: AverageStars::default(),
        }
    }
}

/// `round(numerator / denominator)` with halves rounded up, for non-negative operands
fn div_round_half_up(numerator: u64, denominator: u64) -> u64 {
    (2 * numerator + denominator) / (2 * denominator)
}

pub fn compute_statistics<'a, I>(reviews: I) -> ReviewStatistics
where
    I: IntoIterator<Item = &'a Review>,
{
    let mut count: u64 = 0;
    let mut rating_sum: u64 = 0;
    let mut recommending: u64 = 0;

    for review in reviews {
        count += 1;
        rating_sum += u64::from(review.rating.stars());
        if review.recommends.is_yes() {
            recommending += 1;
        }
    }

    if count == 0 {
        return ReviewStatistics::empty();
    }

    // Work in tenths so x.x5 boundaries round the same way every time
    let average_tenths = div_round_half_up(rating_sum * 10, count);
    let recommend_percentage = div_round_half_up(recommending * 100, count) as u8;

    ReviewStatistics {
        count: count as usize,
        average_rating: average_tenths as f64 / 10.0,
        recommend_percentage,
        stars: AverageStars::from_tenths(average_tenths),
    }
}
