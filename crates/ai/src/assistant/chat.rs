use serde::{Deserialize, Serialize};

use super::wire::{Content, GenerateContentRequest, Part};

/// Opening message shown before the user has asked anything.
pub const GREETING: &str = "Hello! I am your smart inventory assistant. I am here to help with \
questions about your stock. Try asking: 'Which products are low on stock?' or \
'How many [product name] do we have?'";

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub text: String,
}

impl ChatTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }
}

/// Conversation sent to the model on every request, oldest turn first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatHistory {
    turns: Vec<ChatTurn>,
}

impl Default for ChatHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatHistory {
    /// History seeded with the model's greeting.
    pub fn new() -> Self {
        Self {
            turns: vec![ChatTurn::model(GREETING)],
        }
    }

    pub fn empty() -> Self {
        Self { turns: Vec::new() }
    }

    pub fn push(&mut self, turn: ChatTurn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[ChatTurn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }

    pub fn to_request(&self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: self
                .turns
                .iter()
                .map(|t| Content {
                    role: Some(t.role),
                    parts: vec![Part {
                        text: Some(t.text.clone()),
                    }],
                })
                .collect(),
        }
    }
}
