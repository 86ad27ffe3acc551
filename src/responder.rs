//! Response strategy selection
//!
//! The ranked result walks down a fixed ladder; the first rung whose guard
//! holds produces the reply:
//!
//! | Guard                                   | Mode                    |
//! |-----------------------------------------|-------------------------|
//! | best present, score > direct threshold  | direct answer           |
//! | best present, score > suggest threshold | answer + suggestions    |
//! | a category overlaps the query           | category fallback       |
//! | otherwise                               | generic help            |

use tracing::debug;

use crate::config::{AssistantConfig, Thresholds};
use crate::corpus::{Corpus, IndexedRecord};
use crate::types::{FaqRecord, MatchResult, Reply, ResponseMode};

/// Badge label of the generic help reply.
pub const GENERIC_HELP_CATEGORY: &str = "Ayuda General";

const DIRECT_FOLLOWUPS: &str = "\n\n✅ ¿Te fue útil esta información? \n\n💡 **Tip**: Puedes preguntarme cosas como:\n• \"¿Cómo preparo mi casa para sismos?\"\n• \"¿Qué medicinas incluir en el kit?\"\n• \"¿Números de bomberos?\"\n\n🐜 ¡Estoy aquí para ayudarte!";

const SUGGESTIONS_CLOSING: &str = "\n\n🐜 ¿Es esto lo que necesitabas saber?";

const GENERIC_HELP: &str = "🤔 No encontré una respuesta específica, pero puedo ayudarte con:\n\n🆘 **Emergencias:**\n• ¿Qué hacer en caso de sismo?\n• ¿Números de emergencia Nicaragua?\n• ¿Cómo actuar en erupción volcánica?\n\n🎒 **Preparación:**\n• ¿Cómo armar kit de emergencia?\n• ¿Qué incluir en botiquín?\n• ¿Cómo preparar la casa?\n\n📱 **Guardian Nica:**\n• ¿Cómo reportar eventos?\n• ¿Cómo usar el mapa?\n• ¿Qué alertas recibo?\n\n🐜 ¡Escribe tu pregunta de forma más específica y te ayudo mejor!";

/// Turns ranked results into formatted replies
#[derive(Debug, Clone)]
pub struct Responder {
    thresholds: Thresholds,
    max_category_followups: usize,
}

impl Responder {
    pub fn new(config: &AssistantConfig) -> Self {
        Self {
            thresholds: config.thresholds,
            max_category_followups: config.max_category_followups,
        }
    }

    /// Build the reply for `result`. `exchange_count` is carried through as is.
    pub fn respond(&self, result: &MatchResult, corpus: &Corpus, exchange_count: usize) -> Reply {
        let (text, category, mode) = match &result.best {
            Some(best) if result.score > self.thresholds.direct_answer => (
                format!("{}{}", best.answer, DIRECT_FOLLOWUPS),
                best.category.clone(),
                ResponseMode::DirectAnswer,
            ),
            Some(best) if result.score > self.thresholds.suggestions => (
                answer_with_suggestions(best, result),
                best.category.clone(),
                ResponseMode::AnswerWithSuggestions,
            ),
            _ => match self.category_fallback(&result.query, corpus) {
                Some((text, category)) => (text, category, ResponseMode::CategoryFallback),
                None => (
                    GENERIC_HELP.to_string(),
                    GENERIC_HELP_CATEGORY.to_string(),
                    ResponseMode::GenericHelp,
                ),
            },
        };

        debug!(?mode, category = %category, score = result.score, "selected response");

        Reply {
            text,
            category,
            mode,
            exchange_count,
        }
    }

    fn category_fallback(&self, query: &str, corpus: &Corpus) -> Option<(String, String)> {
        let first = corpus
            .entries()
            .iter()
            .find(|entry| category_overlaps(query, entry))?;
        let record = &first.record;

        let followups: Vec<String> = corpus
            .in_category(&record.category)
            .filter(|r| r.id != record.id)
            .take(self.max_category_followups)
            .map(|r| format!("• {}", r.question))
            .collect();

        let text = format!(
            "No encontré una respuesta exacta, pero aquí tienes información sobre **{category}**:\n\n{answer}\n\n📚 **Otras preguntas frecuentes sobre {category}:**\n{followups}\n\n🐜 ¡Pregúntame cualquiera de estas!",
            category = record.category,
            answer = record.answer,
            followups = followups.join("\n"),
        );

        Some((text, record.category.clone()))
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(&AssistantConfig::default())
    }
}

fn answer_with_suggestions(best: &FaqRecord, result: &MatchResult) -> String {
    let mut text = best.answer.clone();

    if !result.suggestions.is_empty() {
        let numbered: Vec<String> = result
            .suggestions
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {}", i + 1, s.record.question))
            .collect();
        text.push_str("\n\n🤔 **¿Quizás buscabas?**\n");
        text.push_str(&numbered.join("\n"));
        text.push_str("\n\nPuedes preguntar sobre cualquiera de estos temas.");
    }

    text.push_str(SUGGESTIONS_CLOSING);
    text
}

/// A category overlaps a normalized query when it contains the whole query,
/// or the query contains the category's first word. Empty queries never do.
fn category_overlaps(query: &str, entry: &IndexedRecord) -> bool {
    if query.is_empty() {
        return false;
    }
    entry.category.contains(query)
        || entry
            .category_head()
            .is_some_and(|head| query.contains(head))
}

/// Build a reply with the default thresholds.
pub fn respond(result: &MatchResult, corpus: &Corpus, exchange_count: usize) -> Reply {
    Responder::default().respond(result, corpus, exchange_count)
}
