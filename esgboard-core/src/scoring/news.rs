use esgboard_types::{NewsArticle, ScoredArticle, SentimentMode};

use super::text::{classify_esg, heuristic_sentiment};

/// Tone bound; tone is expected in `[-TONE_BOUND, TONE_BOUND]`.
pub const TONE_BOUND: f64 = 10.0;

/// Rescale a tone in [-10, 10] to [0, 1], clamped.
///
/// Missing or non-finite tone is neutral (0.5).
///
/// ```
/// use esgboard_core::normalize_tone;
/// assert_eq!(normalize_tone(Some(10.0)), 1.0);
/// assert_eq!(normalize_tone(Some(-10.0)), 0.0);
/// assert_eq!(normalize_tone(None), 0.5);
/// ```
#[must_use]
pub fn normalize_tone(tone: Option<f64>) -> f64 {
    match tone {
        Some(t) if t.is_finite() => ((t + TONE_BOUND) / (2.0 * TONE_BOUND)).clamp(0.0, 1.0),
        _ => 0.5,
    }
}

/// Round to two decimals.
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// `round(100 * (0.5 * sentiment + 0.5 * (keyword_count / 3)), 2)`.
#[must_use]
pub fn blended_score(sentiment: f64, keyword_count: u8) -> f64 {
    let esg = f64::from(keyword_count.min(3)) / 3.0;
    round2(100.0 * (0.5 * sentiment + 0.5 * esg))
}

/// Score one article's title under the given sentiment mode.
#[must_use]
pub fn score_article(article: NewsArticle, mode: SentimentMode) -> ScoredArticle {
    let sentiment = match mode {
        SentimentMode::Heuristic => heuristic_sentiment(&article.title),
        _ => normalize_tone(article.tone),
    };
    let esg_strength = classify_esg(&article.title);
    let score = blended_score(sentiment, esg_strength);
    ScoredArticle {
        article,
        sentiment,
        esg_strength,
        score,
    }
}
