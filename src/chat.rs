//! Persisted chat history and the chat session that drives it.

use crate::analysis::AnalysisClient;
use crate::error::StoreError;
use crate::i18n::Language;
use crate::intent::{IntentRouter, SuggestedAction};
use crate::store::KeyValueStore;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Store key holding the serialized history.
pub const CHAT_HISTORY_KEY: &str = "chat_history";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    User,
    Ai,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: MessageKind,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(kind: MessageKind, content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered message log, written through to the store on every change.
pub struct ChatHistory {
    store: Arc<dyn KeyValueStore>,
    messages: Vec<ChatMessage>,
}

impl ChatHistory {
    /// Load the saved history. A missing or unreadable entry starts empty.
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let messages = match store.get(CHAT_HISTORY_KEY) {
            Some(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable chat history: {}", e);
                Vec::new()
            }),
            None => Vec::new(),
        };

        debug!("Loaded {} chat messages", messages.len());
        Self { store, messages }
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> Result<&ChatMessage, StoreError> {
        self.push(ChatMessage::new(MessageKind::User, content))
    }

    pub fn push_ai(&mut self, content: impl Into<String>) -> Result<&ChatMessage, StoreError> {
        self.push(ChatMessage::new(MessageKind::Ai, content))
    }

    fn push(&mut self, message: ChatMessage) -> Result<&ChatMessage, StoreError> {
        self.messages.push(message);
        self.persist()?;
        Ok(&self.messages[self.messages.len() - 1])
    }

    fn persist(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string(&self.messages)?;
        self.store.set(CHAT_HISTORY_KEY, &raw)
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

    /// Drop every message and the stored entry.
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.messages.clear();
        self.store.remove(CHAT_HISTORY_KEY)?;
        info!("Chat history cleared");
        Ok(())
    }
}

/// Outcome of one [`ChatSession::ask`] turn.
#[derive(Debug, Clone)]
pub struct ChatTurn {
    pub language: Language,
    pub reply: String,
    /// False when the reply is the localized apology
    pub answered: bool,
    pub suggestions: Vec<SuggestedAction>,
}

/// One user's conversation with the AI.
pub struct ChatSession {
    client: AnalysisClient,
    router: IntentRouter,
    history: ChatHistory,
}

impl ChatSession {
    /// Open a session over `history`.
    ///
    /// An empty history is seeded with the welcome message in the router's
    /// fallback language.
    pub fn start(
        client: AnalysisClient,
        router: IntentRouter,
        mut history: ChatHistory,
    ) -> Result<Self, StoreError> {
        if history.is_empty() {
            let welcome = router.fallback_language().strings().chat_welcome;
            history.push_ai(welcome)?;
        }

        Ok(Self {
            client,
            router,
            history,
        })
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Record the prompt, ask the AI and record its reply.
    ///
    /// An unreachable AI is not an error: the reply becomes the apology
    /// string of the prompt's language. Only store failures propagate.
    pub async fn ask(&mut self, prompt: &str) -> Result<ChatTurn, StoreError> {
        let language = self.router.detect(prompt);
        self.history.push_user(prompt)?;

        let (reply, answered) = match self.client.analyze(prompt, Some(language)).await {
            Ok(reply) => (reply, true),
            Err(e) => {
                warn!("AI analysis unavailable: {:#}", e);
                (language.strings().ai_unavailable.to_string(), false)
            }
        };

        self.history.push_ai(reply.clone())?;

        Ok(ChatTurn {
            language,
            reply,
            answered,
            suggestions: self.router.route_intent(prompt, language),
        })
    }
}
