use crate::result::{AiError, AiResult};

/// A self-contained AI inference unit.
///
/// Jobs own the **snapshot** they run on. This crate stays storage-agnostic:
/// inputs are fetched and provided by callers.
pub trait AiJob: Send + Sync + 'static {
    /// Execute inference and return an AI insight.
    ///
    /// Must not mutate the snapshot or any domain state.
    fn run(&self) -> Result<AiResult, AiError>;
}
