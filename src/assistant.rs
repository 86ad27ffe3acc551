//! Assistant facade tying the knowledge base to matcher and responder

use std::sync::Arc;

use crate::config::AssistantConfig;
use crate::corpus::{Corpus, KnowledgeBase};
use crate::error::Result;
use crate::matcher::Matcher;
use crate::responder::Responder;
use crate::types::{MatchResult, Reply};

#[derive(Debug)]
pub struct Assistant {
    knowledge: KnowledgeBase,
    matcher: Matcher,
    responder: Responder,
}

impl Assistant {
    pub fn new(corpus: Corpus, config: &AssistantConfig) -> Self {
        Self {
            knowledge: KnowledgeBase::new(corpus),
            matcher: Matcher::new(config),
            responder: Responder::new(config),
        }
    }

    /// Embedded sample corpus with the default configuration.
    pub fn builtin() -> Result<Self> {
        Ok(Self::new(Corpus::builtin()?, &AssistantConfig::default()))
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn corpus(&self) -> Arc<Corpus> {
        self.knowledge.snapshot()
    }

    pub fn rank(&self, query: &str) -> MatchResult {
        self.matcher.rank(query, &self.knowledge.snapshot())
    }

    pub fn respond(&self, result: &MatchResult, exchange_count: usize) -> Reply {
        self.responder
            .respond(result, &self.knowledge.snapshot(), exchange_count)
    }

    /// Rank and respond against the same corpus snapshot.
    pub fn answer(&self, query: &str, exchange_count: usize) -> (MatchResult, Reply) {
        let corpus = self.knowledge.snapshot();
        let result = self.matcher.rank(query, &corpus);
        let reply = self.responder.respond(&result, &corpus, exchange_count);
        (result, reply)
    }
}
