//! Request and response bodies of the hosted `generateContent` endpoint.

use serde::{Deserialize, Serialize};

use super::chat::ChatRole;
use crate::result::AiError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<ChatRole>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<u16>,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl GenerateContentResponse {
    /// Reply text: the first part of the first candidate.
    pub fn reply_text(&self) -> Result<&str, AiError> {
        if let Some(err) = &self.error {
            return Err(AiError::InferenceFailed(err.message.clone()));
        }
        self.candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .and_then(|c| c.parts.first())
            .and_then(|p| p.text.as_deref())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AiError::UnexpectedResponse("response carried no candidate text".to_string())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reply_is_first_part_of_first_candidate() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[
                {"content":{"role":"model","parts":[{"text":"Two widgets."},{"text":"ignored"}]}},
                {"content":{"role":"model","parts":[{"text":"other"}]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(response.reply_text().unwrap(), "Two widgets.");
    }

    #[test]
    fn missing_candidates_is_unexpected() {
        let bodies = [
            r#"{}"#,
            r#"{"candidates":[]}"#,
            r#"{"candidates":[{}]}"#,
            r#"{"candidates":[{"content":{"parts":[]}}]}"#,
            r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#,
        ];
        for body in bodies {
            let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
            assert!(
                matches!(response.reply_text(), Err(AiError::UnexpectedResponse(_))),
                "body {body} should be rejected"
            );
        }
    }

    #[test]
    fn api_error_body_is_inference_failure() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#,
        )
        .unwrap();
        match response.reply_text() {
            Err(AiError::InferenceFailed(msg)) => assert_eq!(msg, "API key not valid"),
            other => panic!("expected InferenceFailed, got {other:?}"),
        }
    }
}
