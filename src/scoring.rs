//! Additive scoring of a single record against a query
//!
//! Signals, strongest first:
//! 1. Whole query inside the question
//! 2. Per token: keyword overlap (either direction), question, answer
//! 3. Colloquial phrase pointing at a formal term the record mentions
//! 4. Context phrase whose context word the record mentions

use crate::config::ScoringWeights;
use crate::corpus::IndexedRecord;
use crate::lexicon::{phrase_occurs, Lexicon};

/// A query prepared once and scored against many records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Lowercased, trimmed input.
    pub text: String,
    /// Whitespace-separated words that pass the length filter.
    pub tokens: Vec<String>,
}

impl Query {
    pub fn new(input: &str, min_token_chars: usize) -> Self {
        let text = normalize(input);
        let tokens = tokenize(&text, min_token_chars);
        Self { text, tokens }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// Split on whitespace, keeping words of at least `min_chars` characters.
pub fn tokenize(text: &str, min_chars: usize) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.chars().count() >= min_chars)
        .map(str::to_string)
        .collect()
}

/// Scores records with fixed weights and lookup tables
#[derive(Debug, Clone)]
pub struct Scorer {
    weights: ScoringWeights,
    lexicon: Lexicon,
}

impl Scorer {
    pub fn new(weights: ScoringWeights, lexicon: Lexicon) -> Self {
        Self {
            weights,
            lexicon: lexicon.normalized(),
        }
    }

    /// Total score of `entry` for `query`. Zero means no evidence at all.
    pub fn score(&self, query: &Query, entry: &IndexedRecord) -> u32 {
        if query.is_empty() {
            return 0;
        }

        // Weights come from config, so sums saturate instead of overflowing
        self.exact_phrase(query, entry)
            .saturating_add(self.token_signals(query, entry))
            .saturating_add(self.colloquial_boost(query, entry))
            .saturating_add(self.context_boost(query, entry))
    }

    fn exact_phrase(&self, query: &Query, entry: &IndexedRecord) -> u32 {
        if entry.question.contains(&query.text) {
            self.weights.exact_phrase
        } else {
            0
        }
    }

    fn token_signals(&self, query: &Query, entry: &IndexedRecord) -> u32 {
        let mut score: u32 = 0;

        for token in &query.tokens {
            let token = token.as_str();
            if entry
                .keywords
                .iter()
                .any(|k| k.contains(token) || token.contains(k.as_str()))
            {
                score = score.saturating_add(self.weights.keyword);
            }
            if entry.question.contains(token) {
                score = score.saturating_add(self.weights.question);
            }
            if entry.answer.contains(token) {
                score = score.saturating_add(self.weights.answer);
            }
        }

        score
    }

    fn colloquial_boost(&self, query: &Query, entry: &IndexedRecord) -> u32 {
        let mut score: u32 = 0;

        for group in &self.lexicon.colloquial {
            let formal = group.term.as_str();
            let mentions_formal = entry.keywords.iter().any(|k| k.contains(formal))
                || entry.answer.contains(formal)
                || entry.question.contains(formal);
            if !mentions_formal {
                continue;
            }

            let hits = group
                .phrases
                .iter()
                .filter(|phrase| phrase_occurs(&query.text, phrase))
                .count() as u32;
            score = score.saturating_add(hits.saturating_mul(self.weights.colloquial));
        }

        score
    }

    fn context_boost(&self, query: &Query, entry: &IndexedRecord) -> u32 {
        let mut score: u32 = 0;

        for group in &self.lexicon.context {
            let context = group.term.as_str();
            if !group.phrases.iter().any(|p| query.text.contains(p.as_str())) {
                continue;
            }
            if entry.answer.contains(context) || entry.keywords.iter().any(|k| k.contains(context)) {
                score = score.saturating_add(self.weights.context);
            }
        }

        score
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new(ScoringWeights::default(), Lexicon::default())
    }
}
