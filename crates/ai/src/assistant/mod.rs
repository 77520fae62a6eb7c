//! Chat assistant that answers questions about the current stock.
//!
//! Each question is wrapped in a prompt carrying the full product list and sent,
//! together with the conversation so far, to a hosted generative model.

mod chat;
mod client;
#[cfg(feature = "gemini")]
mod gemini;
pub mod prompt;
pub mod wire;

use tracing::{info, warn};

use stockpilot_inventory::Product;

use crate::result::AiError;

pub use chat::{ChatHistory, ChatRole, ChatTurn, GREETING};
pub use client::{GeminiConfig, ModelClient};
#[cfg(feature = "gemini")]
pub use gemini::GeminiClient;

/// A conversation with the inventory assistant.
#[derive(Debug)]
pub struct AssistantSession<C> {
    client: C,
    history: ChatHistory,
}

impl<C: ModelClient> AssistantSession<C> {
    pub fn new(client: C) -> Self {
        Self::with_history(client, ChatHistory::new())
    }

    pub fn with_history(client: C, history: ChatHistory) -> Self {
        Self { client, history }
    }

    pub fn history(&self) -> &ChatHistory {
        &self.history
    }

    /// Ask `question` about `products` and return the model's reply.
    ///
    /// The prompt turn stays in the history even when the call fails; the reply
    /// is appended only on success.
    pub fn ask(&mut self, question: &str, products: &[Product]) -> Result<String, AiError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(AiError::InvalidInput("question cannot be empty".to_string()));
        }

        self.history
            .push(ChatTurn::user(prompt::build_prompt(products, question)));
        let request = self.history.to_request();

        info!(
            turns = self.history.len(),
            products = products.len(),
            "sending assistant query"
        );

        let reply = self
            .client
            .generate_content(&request)
            .and_then(|response| response.reply_text().map(str::to_string))
            .inspect_err(|e| warn!(error = %e, "assistant query failed"))?;

        self.history.push(ChatTurn::model(reply.clone()));
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use stockpilot_core::ProductId;

    use super::wire::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};

    /// Replays canned responses and records every request.
    struct ScriptedClient {
        responses: Mutex<Vec<Result<GenerateContentResponse, AiError>>>,
        requests: Mutex<Vec<GenerateContentRequest>>,
    }

    impl ScriptedClient {
        fn new(mut responses: Vec<Result<GenerateContentResponse, AiError>>) -> Self {
            responses.reverse();
            Self {
                responses: Mutex::new(responses),
                requests: Mutex::new(Vec::new()),
            }
        }
    }

    impl ModelClient for ScriptedClient {
        fn generate_content(
            &self,
            request: &GenerateContentRequest,
        ) -> Result<GenerateContentResponse, AiError> {
            self.requests.lock().unwrap().push(request.clone());
            self.responses
                .lock()
                .unwrap()
                .pop()
                .unwrap_or_else(|| Err(AiError::Internal("no scripted response".to_string())))
        }
    }

    fn reply(text: &str) -> Result<GenerateContentResponse, AiError> {
        Ok(GenerateContentResponse {
            candidates: vec![Candidate {
                content: Some(Content {
                    role: Some(ChatRole::Model),
                    parts: vec![Part {
                        text: Some(text.to_string()),
                    }],
                }),
            }],
            error: None,
        })
    }

    fn products() -> Vec<Product> {
        vec![Product::new(ProductId::new("p1").unwrap(), "Widget", 5, 2.0).unwrap()]
    }

    #[test]
    fn ask_sends_history_and_records_reply() {
        let mut session = AssistantSession::new(ScriptedClient::new(vec![reply("5 widgets.")]));

        let answer = session.ask("  How many widgets?  ", &products()).unwrap();
        assert_eq!(answer, "5 widgets.");

        let turns = session.history().turns();
        assert_eq!(turns.len(), 3);
        assert_eq!(turns[0].text, GREETING);
        assert_eq!(turns[1].role, ChatRole::User);
        assert!(turns[1].text.contains("Name: Widget, Quantity: 5, Price: 2"));
        assert!(turns[1].text.ends_with("Question: How many widgets?"));
        assert_eq!(turns[2], ChatTurn::model("5 widgets."));

        let requests = session.client.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].contents.len(), 2);
    }

    #[test]
    fn follow_up_carries_previous_turns() {
        let mut session =
            AssistantSession::new(ScriptedClient::new(vec![reply("first"), reply("second")]));
        session.ask("one", &products()).unwrap();
        session.ask("two", &products()).unwrap();

        let requests = session.client.requests.lock().unwrap();
        assert_eq!(requests[1].contents.len(), 4);
        assert_eq!(session.history().len(), 5);
    }

    #[test]
    fn blank_question_is_rejected_without_calling_model() {
        let mut session = AssistantSession::new(ScriptedClient::new(vec![]));
        let err = session.ask("   ", &products()).unwrap_err();
        assert!(matches!(err, AiError::InvalidInput(_)));
        assert!(session.client.requests.lock().unwrap().is_empty());
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn failed_call_keeps_prompt_but_not_reply() {
        let mut session = AssistantSession::new(ScriptedClient::new(vec![Ok(
            GenerateContentResponse::default(),
        )]));

        let err = session.ask("anything?", &products()).unwrap_err();
        assert!(matches!(err, AiError::UnexpectedResponse(_)));
        assert_eq!(session.history().len(), 2);
        assert_eq!(session.history().last().unwrap().role, ChatRole::User);
    }
}
