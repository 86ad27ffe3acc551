//! Colloquial and context lookup tables
//!
//! Both tables map a formal term to phrases that should count as evidence for
//! it. They are plain data handed to the matcher at construction.

use serde::{Deserialize, Serialize};

/// A formal term and the phrases that point to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermGroup {
    pub term: String,
    pub phrases: Vec<String>,
}

/// Lookup tables used by the boost signals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Regional phrasing mapped to formal hazard terms.
    pub colloquial: Vec<TermGroup>,
    /// Abstract contexts mapped to phrases that evoke them.
    pub context: Vec<TermGroup>,
}

const COLLOQUIAL_TERMS: &[(&str, &[&str])] = &[
    (
        "volcán",
        &[
            "volcán bravo",
            "volcán botando humo",
            "volcán tirando fuego",
            "volcán echando vapor",
            "volcán despierto",
            "volcán rugiendo",
        ],
    ),
    ("lluvia", &["palo de agua", "lluvia brava", "lluvia que no para"]),
    (
        "inundación",
        &[
            "calle hecha río",
            "agua que se mete",
            "agua al tope",
            "agua desbordada",
            "río salido",
        ],
    ),
    (
        "huracán",
        &["temporal grande", "temporalón", "tormentón", "viento bravo", "vendaval"],
    ),
    (
        "tormenta",
        &["tronadera", "relampagueo", "trueno bravo", "lluvia que truena"],
    ),
    (
        "terremoto",
        &[
            "temblorazo",
            "estremón",
            "sacudión",
            "tierra temblando",
            "la tierra se movió",
        ],
    ),
    (
        "tornado",
        &["remolino bravo", "aire que da vuelta", "viento loco", "torbellino"],
    ),
    (
        "deslizamiento",
        &[
            "tierra que se viene abajo",
            "cerro que se viene",
            "bajada de lodo",
            "barranco que se cayó",
        ],
    ),
    (
        "incendio",
        &["fuego bravo", "candela brava", "fuego en el monte", "monte ardiendo"],
    ),
];

const CONTEXT_TERMS: &[(&str, &[&str])] = &[
    (
        "emergencia",
        &["emergencia", "urgente", "ayuda", "rápido", "inmediato"],
    ),
    (
        "números",
        &["telefono", "numero", "contacto", "llamar", "comunicar"],
    ),
    (
        "preparación",
        &["preparar", "kit", "lista", "antes", "prevenir"],
    ),
    ("durante", &["que hacer", "como actuar", "durante", "en caso"]),
    ("después", &["después", "post", "limpiar", "recuperar"]),
];

fn groups(table: &[(&str, &[&str])]) -> Vec<TermGroup> {
    table
        .iter()
        .map(|(term, phrases)| TermGroup {
            term: term.to_string(),
            phrases: phrases.iter().map(|p| p.to_string()).collect(),
        })
        .collect()
}

impl Lexicon {
    /// Tables with no entries; disables both boost signals.
    pub fn empty() -> Self {
        Self {
            colloquial: Vec::new(),
            context: Vec::new(),
        }
    }

    /// Lowercase every term and phrase so matching can compare directly.
    pub fn normalized(mut self) -> Self {
        for group in self.colloquial.iter_mut().chain(self.context.iter_mut()) {
            group.term = group.term.to_lowercase();
            for phrase in &mut group.phrases {
                *phrase = phrase.to_lowercase();
            }
        }
        self
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            colloquial: groups(COLLOQUIAL_TERMS),
            context: groups(CONTEXT_TERMS),
        }
    }
}

/// Check whether a colloquial phrase occurs in a normalized query.
///
/// A phrase matches as a substring, or when all of its words appear among the
/// query's words in the same order with other words allowed in between
/// ("el volcán está bravo" matches "volcán bravo"). Punctuation around query
/// words is ignored, so "¿el volcán está bravo?" matches too.
pub fn phrase_occurs(query: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    if query.contains(phrase) {
        return true;
    }

    let mut query_words = query
        .split_whitespace()
        .map(|word| word.trim_matches(|c: char| !c.is_alphanumeric()));
    phrase
        .split_whitespace()
        .all(|word| query_words.any(|candidate| candidate == word))
}
