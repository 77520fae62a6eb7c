//! `stockpilot-ai`
//!
//! **Responsibility:** AI-facing boundary of the inventory dashboard.
//!
//! - Reorder suggestions are surfaced as **AI insights** (`AiResult`), produced
//!   by jobs that read an inventory snapshot and never mutate it.
//! - The inventory assistant shapes chat prompts and history for a hosted
//!   generative model; the network call sits behind [`ModelClient`].

pub mod assistant;
pub mod job;
pub mod reorder_insight;
pub mod result;

pub use assistant::{AssistantSession, ChatHistory, ChatRole, ChatTurn, GeminiConfig, ModelClient};
#[cfg(feature = "gemini")]
pub use assistant::GeminiClient;
pub use job::AiJob;
pub use reorder_insight::ReorderInsightJob;
pub use result::{AiError, AiResult};
