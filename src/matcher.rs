//! Ranking of user input against the knowledge base

use tracing::{debug, trace};

use crate::config::AssistantConfig;
use crate::corpus::Corpus;
use crate::scoring::{Query, Scorer};
use crate::types::{MatchResult, ScoredCandidate};

/// Ranks queries with a fixed scorer configuration
#[derive(Debug, Clone)]
pub struct Matcher {
    scorer: Scorer,
    min_token_chars: usize,
    max_suggestions: usize,
}

impl Matcher {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            scorer: Scorer::new(config.weights, config.lexicon.clone()),
            min_token_chars: config.min_token_chars,
            max_suggestions: config.max_suggestions,
        }
    }

    /// Pick the best record for `input` and up to `max_suggestions` runner-ups.
    ///
    /// Never fails: empty input or an empty corpus yield an empty result.
    /// The best record is the first one to reach the top score; later records
    /// with the same score do not displace it.
    pub fn rank(&self, input: &str, corpus: &Corpus) -> MatchResult {
        let query = Query::new(input, self.min_token_chars);
        if query.is_empty() || corpus.is_empty() {
            return MatchResult::empty(query.text);
        }

        let mut best: Option<usize> = None;
        let mut best_score = 0;
        let mut scored: Vec<(usize, u32)> = Vec::new();

        for (index, entry) in corpus.entries().iter().enumerate() {
            let score = self.scorer.score(&query, entry);
            trace!(id = %entry.record.id, score, "scored record");

            if score > 0 {
                scored.push((index, score));
            }
            if score > best_score {
                best_score = score;
                best = Some(index);
            }
        }

        // Stable sort keeps corpus order among equal scores
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let entries = corpus.entries();
        let suggestions: Vec<ScoredCandidate> = scored
            .into_iter()
            .filter(|(index, _)| Some(*index) != best)
            .take(self.max_suggestions)
            .map(|(index, score)| ScoredCandidate {
                record: entries[index].record.clone(),
                score,
            })
            .collect();

        let best = best.map(|index| entries[index].record.clone());
        debug!(
            query = %query.text,
            best = best.as_ref().map(|r| r.id.as_str()),
            score = best_score,
            suggestions = suggestions.len(),
            "ranked query"
        );

        MatchResult {
            query: query.text,
            best,
            score: best_score,
            suggestions,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(&AssistantConfig::default())
    }
}

/// Rank `input` against `corpus` with the default configuration.
pub fn rank(input: &str, corpus: &Corpus) -> MatchResult {
    Matcher::default().rank(input, corpus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FaqRecord;

    fn record(id: &str, question: &str, keywords: &[&str]) -> FaqRecord {
        FaqRecord {
            id: id.to_string(),
            question: question.to_string(),
            answer: "Sin detalles".to_string(),
            category: "Pruebas".to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
        }
    }

    fn corpus(records: Vec<FaqRecord>) -> Corpus {
        Corpus::new(records).unwrap()
    }

    #[test]
    fn test_empty_query() {
        let c = corpus(vec![record("a", "¿Qué es un sismo?", &["sismo"])]);
        let result = rank("", &c);
        assert_eq!(result, MatchResult::empty(String::new()));
        assert!(!result.is_match());
    }

    #[test]
    fn test_empty_corpus() {
        let result = rank("sismo", &Corpus::default());
        assert!(result.best.is_none());
        assert_eq!(result.score, 0);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_no_match() {
        let c = corpus(vec![record("a", "¿Qué es un sismo?", &["sismo"])]);
        let result = rank("pizza", &c);
        assert!(result.best.is_none());
        assert_eq!(result.score, 0);
    }

    #[test]
    fn test_first_max_wins_ties() {
        let c = corpus(vec![
            record("a", "Uno", &["linterna"]),
            record("b", "Dos", &["linterna"]),
        ]);
        let result = rank("linterna", &c);
        assert_eq!(result.best.unwrap().id, "a");
        assert_eq!(result.score, 3);
        assert_eq!(result.suggestions.len(), 1);
        assert_eq!(result.suggestions[0].record.id, "b");
    }

    #[test]
    fn test_suggestions_exclude_best_and_are_capped() {
        let c = corpus(vec![
            record("a", "Uno", &["radio"]),
            record("b", "Dos radio", &["radio"]),
            record("c", "Tres", &["radio"]),
            record("d", "Cuatro radio", &[]),
        ]);
        let result = rank("radio", &c);
        assert_eq!(result.best.as_ref().unwrap().id, "b");
        let ids: Vec<&str> = result.suggestions.iter().map(|s| s.record.id.as_str()).collect();
        // "d" gets the exact-phrase bonus; "a" beats "c" on corpus order
        assert_eq!(ids, vec!["d", "a"]);
        assert!(result.suggestions.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_deterministic() {
        let c = Corpus::builtin().unwrap();
        assert_eq!(rank("volcán bravo", &c), rank("volcán bravo", &c));
    }

    #[test]
    fn test_huge_configured_weight_still_ranks() {
        let config =
            AssistantConfig::from_json(r#"{"weights": {"exact_phrase": 4294967295}}"#).unwrap();
        let c = Corpus::builtin().unwrap();
        let result = Matcher::new(&config).rank("alerta roja", &c);
        assert_eq!(result.best.unwrap().id, "alerta_roja");
        assert_eq!(result.score, u32::MAX);
    }

    #[test]
    fn test_custom_suggestion_limit() {
        let config = AssistantConfig {
            max_suggestions: 0,
            ..AssistantConfig::default()
        };
        let c = corpus(vec![
            record("a", "Uno", &["radio"]),
            record("b", "Dos", &["radio"]),
        ]);
        let result = Matcher::new(&config).rank("radio", &c);
        assert!(result.best.is_some());
        assert!(result.suggestions.is_empty());
    }
}
