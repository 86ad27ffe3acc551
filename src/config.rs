//! Tunable weights, thresholds and lookup tables
//!
//! Every section defaults independently, so a JSON document only needs to name
//! the values it overrides.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::lexicon::Lexicon;

/// Score above which the best record is answered directly.
pub const DIRECT_ANSWER_THRESHOLD: u32 = 3;
/// Score above which the best record is answered with "did you mean" prompts.
pub const SUGGESTION_THRESHOLD: u32 = 1;

/// Points awarded by each scoring signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringWeights {
    /// Whole query found inside the question.
    pub exact_phrase: u32,
    /// Token and keyword contain one another.
    pub keyword: u32,
    /// Token found inside the question.
    pub question: u32,
    /// Token found inside the answer.
    pub answer: u32,
    /// Per colloquial phrase pointing at a term the record mentions.
    pub colloquial: u32,
    /// Per context whose phrases appear in the query.
    pub context: u32,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            exact_phrase: 15,
            keyword: 3,
            question: 2,
            answer: 1,
            colloquial: 8,
            context: 2,
        }
    }
}

/// Confidence cut-offs for the response ladder (both strict)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Thresholds {
    pub direct_answer: u32,
    pub suggestions: u32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            direct_answer: DIRECT_ANSWER_THRESHOLD,
            suggestions: SUGGESTION_THRESHOLD,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AssistantConfig {
    pub weights: ScoringWeights,
    pub thresholds: Thresholds,
    /// Shortest token, in characters, that takes part in token signals.
    pub min_token_chars: usize,
    pub max_suggestions: usize,
    /// Extra same-category questions listed by the category fallback.
    pub max_category_followups: usize,
    pub lexicon: Lexicon,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: Thresholds::default(),
            min_token_chars: 3,
            max_suggestions: 2,
            max_category_followups: 2,
            lexicon: Lexicon::default(),
        }
    }
}

impl AssistantConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
