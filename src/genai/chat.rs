//! Exhibition chat assistant.

use std::future::Future;

use serde::{Deserialize, Serialize};

use super::client::GeminiClient;
use super::wire::{Content, GenerateContentRequest};

/// Reply used when the service answers with no text.
pub const EMPTY_REPLY: &str = "I am listening...";

/// Reply used when the service cannot be reached or fails.
pub const CHAT_FALLBACK: &str =
    "The wind is too loud today, I could not hear you clearly. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: Role::Model,
            text: text.into(),
        }
    }
}

/// Conversational replies. Never fails: errors turn into [`CHAT_FALLBACK`].
pub trait ChatService: Send + Sync {
    /// Reply to `message`, given the conversation so far (not including it).
    fn send_chat(
        &self,
        history: &[ChatMessage],
        message: &str,
    ) -> impl Future<Output = String> + Send;
}

impl ChatService for GeminiClient {
    async fn send_chat(&self, history: &[ChatMessage], message: &str) -> String {
        let mut contents: Vec<Content> = history
            .iter()
            .map(|turn| Content::text(Some(turn.role.as_str()), turn.text.clone()))
            .collect();
        contents.push(Content::text(Some(Role::User.as_str()), message));

        let request = GenerateContentRequest {
            contents,
            system_instruction: Some(Content::text(None, self.config().system_instruction.clone())),
            generation_config: None,
        };

        match self.generate_content(&self.config().chat_model, &request).await {
            Ok(response) => response.text().unwrap_or_else(|| EMPTY_REPLY.to_string()),
            Err(e) => {
                tracing::error!(error = %e, "chat request failed");
                CHAT_FALLBACK.to_string()
            }
        }
    }
}

/// A running conversation with the assistant.
pub struct ChatSession<C> {
    service: C,
    history: Vec<ChatMessage>,
}

impl<C: ChatService> ChatSession<C> {
    pub fn new(service: C) -> Self {
        Self {
            service,
            history: Vec::new(),
        }
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Send a user message and record both turns. Blank messages are ignored.
    pub async fn send(&mut self, text: &str) -> Option<&ChatMessage> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let reply = self.service.send_chat(&self.history, text).await;
        self.history.push(ChatMessage::user(text));
        self.history.push(ChatMessage::model(reply));
        self.history.last()
    }

    pub fn clear(&mut self) {
        self.history.clear();
    }
}
