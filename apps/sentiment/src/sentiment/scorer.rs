//! Sentiment scorer: pluggable, trait-based seam over a lexicon scorer.
//!
//! Default: `VaderScorer`, backed by the VADER lexicon from `vader_sentiment`.
//! `AppState` holds an `Arc<dyn SentimentScorer>`, built once at startup.

use std::collections::HashMap;

/// Raw polarity output of a scorer.
///
/// `positive`, `neutral` and `negative` are proportions of the text and sum to
/// roughly 1.0 whenever the text has at least one token. `compound` is in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PolarityScores {
    pub positive: f64,
    pub neutral: f64,
    pub negative: f64,
    pub compound: f64,
}

const PROPORTION_SCALE: f64 = 1_000.0; // 3 decimal places

impl PolarityScores {
    /// Reads the `pos` / `neu` / `neg` / `compound` keys VADER produces.
    /// Absent keys count as 0.0.
    ///
    /// Proportions are rounded to 3 decimal places. Text where no token carries
    /// valence gets a compound of 0.0: `vader_sentiment` otherwise turns `!` / `?`
    /// emphasis on a zero sum into a negative score.
    fn from_vader(scores: &HashMap<&str, f64>) -> Self {
        let get = |key: &str| scores.get(key).copied().unwrap_or(0.0);
        let (positive, negative) = (get("pos"), get("neg"));
        let compound = if positive == 0.0 && negative == 0.0 {
            0.0
        } else {
            get("compound")
        };

        Self {
            positive: round_proportion(positive),
            neutral: round_proportion(get("neu")),
            negative: round_proportion(negative),
            compound,
        }
    }
}

/// Rounds half away from zero.
fn round_proportion(value: f64) -> f64 {
    (value * PROPORTION_SCALE).round() / PROPORTION_SCALE
}

/// The scorer trait. Implement this to swap lexicons without touching the handler.
///
/// Scoring is CPU-only and infallible.
pub trait SentimentScorer: Send + Sync {
    fn polarity_scores(&self, text: &str) -> PolarityScores;
}

/// VADER lexicon scorer. The analyzer and its lexicon tables are loaded in `new`.
pub struct VaderScorer {
    analyzer: vader_sentiment::SentimentIntensityAnalyzer<'static>,
}

impl VaderScorer {
    pub fn new() -> Self {
        Self {
            analyzer: vader_sentiment::SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl SentimentScorer for VaderScorer {
    fn polarity_scores(&self, text: &str) -> PolarityScores {
        PolarityScores::from_vader(&self.analyzer.polarity_scores(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn distribution_sum(s: &PolarityScores) -> f64 {
        s.positive + s.neutral + s.negative
    }

    #[test]
    fn test_vader_positive_text() {
        let s = VaderScorer::new().polarity_scores("I love building AI apps!");
        assert!(s.compound > 0.05, "compound was {}", s.compound);
        assert!(s.positive > 0.0);
    }

    #[test]
    fn test_vader_negative_text() {
        let s = VaderScorer::new().polarity_scores("This is terrible and I hate it.");
        assert!(s.compound < -0.05, "compound was {}", s.compound);
        assert!(s.negative > 0.0);
    }

    #[test]
    fn test_vader_neutral_text() {
        let s = VaderScorer::new().polarity_scores("The table is made of wood.");
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.positive, 0.0);
        assert_eq!(s.negative, 0.0);
    }

    #[test]
    fn test_vader_distribution_sums_to_one() {
        let scorer = VaderScorer::new();
        for text in [
            "I love building AI apps!",
            "This is terrible and I hate it.",
            "The table is made of wood.",
            "Good food, bad service, okay prices.",
        ] {
            let s = scorer.polarity_scores(text);
            assert!(
                (distribution_sum(&s) - 1.0).abs() <= 0.01,
                "{text:?} summed to {}",
                distribution_sum(&s)
            );
        }
    }

    #[test]
    fn test_vader_compound_in_range() {
        let s = VaderScorer::new()
            .polarity_scores("AMAZING!!! best day ever, absolutely wonderful and fantastic :)");
        assert!((-1.0..=1.0).contains(&s.compound));
    }

    #[test]
    fn test_from_vader_missing_keys_default_to_zero() {
        let mut map = HashMap::new();
        map.insert("pos", 0.4);
        map.insert("compound", 0.5);
        let s = PolarityScores::from_vader(&map);
        assert_eq!(s.compound, 0.5);
        assert_eq!(s.positive, 0.4);
        assert_eq!(s.neutral, 0.0);
        assert_eq!(s.negative, 0.0);
    }

    #[test]
    fn test_from_vader_zero_valence_drops_compound() {
        let mut map = HashMap::new();
        map.insert("pos", 0.0);
        map.insert("neu", 1.0);
        map.insert("neg", 0.0);
        map.insert("compound", -0.0752);
        let s = PolarityScores::from_vader(&map);
        assert_eq!(s.compound, 0.0);
        assert_eq!(s.neutral, 1.0);
    }

    #[test]
    fn test_vader_exclamation_on_neutral_text_stays_neutral() {
        let scorer = VaderScorer::new();
        for text in ["The meeting is at noon!", "Hello!!", "See you tomorrow??"] {
            let s = scorer.polarity_scores(text);
            assert_eq!(s.compound, 0.0, "{text:?}");
            assert_eq!(s.neutral, 1.0, "{text:?}");
        }
    }

    #[test]
    fn test_vader_exclamation_still_amplifies_sentiment() {
        let scorer = VaderScorer::new();
        let plain = scorer.polarity_scores("I love it.");
        let loud = scorer.polarity_scores("I love it!!");
        assert!(loud.compound > plain.compound);
    }

    #[test]
    fn test_vader_proportions_rounded_to_three_places() {
        let s = VaderScorer::new().polarity_scores("Good food, bad service, okay prices.");
        assert_eq!(s.positive, 0.425);
        assert_eq!(s.neutral, 0.265);
        assert_eq!(s.negative, 0.31);
    }

    #[test]
    fn test_round_proportion() {
        assert_eq!(round_proportion(0.424_778_761), 0.425);
        assert_eq!(round_proportion(0.309_734_513), 0.31);
        assert_eq!(round_proportion(1.0), 1.0);
    }
}
