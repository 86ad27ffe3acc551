//! Topic browser catalog of suggested questions

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub name: String,
    pub questions: Vec<String>,
}

/// Ordered groups of ready-made questions shown before a conversation starts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicCatalog {
    topics: Vec<Topic>,
}

const DEFAULT_TOPICS: &[(&str, &[&str])] = &[
    (
        "Emergencias",
        &[
            "¿Qué hacer en caso de sismo?",
            "¿Números de emergencia Nicaragua?",
            "¿Cómo actuar en erupción volcánica?",
            "¿Qué es la alerta roja?",
        ],
    ),
    (
        "Preparación",
        &[
            "¿Cómo armar kit de emergencia?",
            "¿Qué incluir en botiquín?",
            "¿Cuánta agua almacenar?",
            "¿Cómo prevenir deslaves en zonas de riesgo?",
        ],
    ),
    (
        "Fenómenos",
        &[
            "¿Qué gases emite el volcán?",
            "¿Cuándo ocurren inundaciones?",
            "¿Señales de deslaves?",
            "¿Qué es un deslave?",
            "¿Qué es un derrumbe?",
        ],
    ),
    (
        "Aplicación",
        &[
            "¿Cómo usar Guardian Nica?",
            "¿Cómo reportar eventos?",
            "¿Cómo funciona el mapa?",
        ],
    ),
];

impl TopicCatalog {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.topics.iter().map(|t| t.name.as_str())
    }

    pub fn questions(&self, topic: &str) -> Option<&[String]> {
        self.topics
            .iter()
            .find(|t| t.name == topic)
            .map(|t| t.questions.as_slice())
    }

    pub fn question(&self, topic: &str, index: usize) -> Option<&str> {
        self.questions(topic)?.get(index).map(String::as_str)
    }
}

impl Default for TopicCatalog {
    fn default() -> Self {
        let topics = DEFAULT_TOPICS
            .iter()
            .map(|(name, questions)| Topic {
                name: name.to_string(),
                questions: questions.iter().map(|q| q.to_string()).collect(),
            })
            .collect();
        Self { topics }
    }
}
