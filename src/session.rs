//! In-memory conversation log for one chat session

use crate::assistant::Assistant;
use crate::topics::TopicCatalog;
use crate::types::{ChatMessage, Role, TOPIC_BROWSER_MAX_MESSAGES};

pub const WELCOME_CATEGORY: &str = "Bienvenida";

const WELCOME: &str = "¡Hola! 🐜 Soy el asistente de Guardian Nica. Puedo ayudarte con preguntas sobre desastres naturales, preparación de emergencias y cómo usar la aplicación. ¿En qué puedo ayudarte?";

/// Ordered messages of a session, opened by a welcome message
#[derive(Debug, Clone)]
pub struct Conversation {
    messages: Vec<ChatMessage>,
    next_id: u64,
}

impl Conversation {
    pub fn new() -> Self {
        let mut conversation = Self {
            messages: Vec::new(),
            next_id: 0,
        };
        conversation.push(Role::Bot, WELCOME.to_string(), Some(WELCOME_CATEGORY.to_string()));
        conversation
    }

    fn push(&mut self, role: Role, content: String, category: Option<String>) -> &ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage::new(id, role, content, category));
        &self.messages[self.messages.len() - 1]
    }

    /// Send user text and record the assistant's reply.
    ///
    /// Blank input is ignored and yields `None`.
    pub fn send(&mut self, assistant: &Assistant, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.push(Role::User, text.to_string(), None);
        let (_, reply) = assistant.answer(text, self.messages.len());
        Some(self.push(Role::Bot, reply.text, Some(reply.category)))
    }

    /// Send one of the catalog's ready-made questions.
    pub fn send_suggested(
        &mut self,
        assistant: &Assistant,
        catalog: &TopicCatalog,
        topic: &str,
        index: usize,
    ) -> Option<&ChatMessage> {
        let question = catalog.question(topic, index)?.to_string();
        self.send(assistant, &question)
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn shows_topic_browser(&self) -> bool {
        self.messages.len() <= TOPIC_BROWSER_MAX_MESSAGES
    }
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}
