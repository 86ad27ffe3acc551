//! Core data types for ranking and replies

use serde::{Deserialize, Serialize};

/// A question/answer entry of the knowledge base
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqRecord {
    pub id: String,
    pub question: String,
    /// May contain `\n` and `**` markers; rendered verbatim by the caller.
    pub answer: String,
    pub category: String,
    /// Lexical variants used only for matching, never displayed.
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A record paired with the score it obtained for one query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    pub record: FaqRecord,
    pub score: u32,
}

/// Outcome of ranking one query against the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Normalized query the result was computed for.
    pub query: String,
    pub best: Option<FaqRecord>,
    pub score: u32,
    /// Runner-ups in descending score order, never containing `best`.
    pub suggestions: Vec<ScoredCandidate>,
}

/// Which branch of the response ladder produced a reply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseMode {
    DirectAnswer,
    AnswerWithSuggestions,
    CategoryFallback,
    GenericHelp,
}

/// Formatted assistant reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub text: String,
    /// Label for the display badge.
    pub category: String,
    pub mode: ResponseMode,
    /// Passed through untouched for the caller's UI affordances.
    pub exchange_count: usize,
}

/// Author of a conversation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Bot,
}

/// One entry of a conversation log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: u64,
    pub role: Role,
    pub content: String,
    pub category: Option<String>,
}

/// Message counts at or below this keep the topic browser visible.
pub const TOPIC_BROWSER_MAX_MESSAGES: usize = 2;

impl MatchResult {
    pub fn empty(query: String) -> Self {
        Self {
            query,
            best: None,
            score: 0,
            suggestions: Vec::new(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.best.is_some()
    }
}

impl Reply {
    pub fn shows_topic_browser(&self) -> bool {
        self.exchange_count <= TOPIC_BROWSER_MAX_MESSAGES
    }
}

impl ChatMessage {
    pub fn new(id: u64, role: Role, content: String, category: Option<String>) -> Self {
        Self {
            id,
            role,
            content,
            category,
        }
    }
}
