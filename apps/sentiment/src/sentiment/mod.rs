// Lexicon-based sentiment analysis.
// The scorer is an opaque dependency; this module only validates, classifies and rounds.

pub mod classify;
pub mod handlers;
pub mod scorer;
