//! Chat-Completion Bindings
//!
//! Draft generation and summarization through the OpenAI chat endpoint.
//! The contract is deliberately thin: the endpoint returns a string, which
//! callers must pass through the sanitizer before rendering.

use serde::{Deserialize, Serialize};

use super::{parse_json, status_error, ApiClient, ApiError, Method};

const CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const CHAT_MODEL: &str = "gpt-4";

const SUMMARIZE_SYSTEM: &str = "You are a helpful assistant that summarizes reports.";
const DRAFT_SYSTEM: &str = "You are a helpful assistant who writes professional report drafts.";

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

/// Request body; unset sampling knobs are omitted from the wire format.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: &'static str,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop: Option<Vec<String>>,
}

impl ChatRequest {
    fn new(system: &'static str, user: String, max_tokens: u32) -> Self {
        Self {
            model: CHAT_MODEL,
            messages: vec![
                ChatMessage { role: "system", content: system.to_string() },
                ChatMessage { role: "user", content: user },
            ],
            temperature: Some(0.7),
            max_tokens: Some(max_tokens),
            top_p: None,
            frequency_penalty: None,
            presence_penalty: None,
            stop: None,
        }
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: String,
}

impl ApiClient {
    async fn chat(&self, request: &ChatRequest) -> Result<String, ApiError> {
        let token = self.openai_token.as_deref().ok_or(ApiError::NoCredential)?;
        let payload = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let (status, body) = self
            .fetch(Method::Post, CHAT_URL, Some(token), Some(payload))
            .await?;
        if !(200..300).contains(&status) {
            return Err(status_error(status, &body));
        }
        let mut response: ChatResponse = parse_json(&body)?;
        if response.choices.is_empty() {
            return Err(ApiError::Decode("chat response had no choices".to_string()));
        }
        Ok(response.choices.remove(0).message.content)
    }

    /// Ask for a summary of `content`
    pub async fn summarize(&self, content: &str) -> Result<String, ApiError> {
        let user = format!("Please summarize the following report content: {}", content);
        self.chat(&ChatRequest::new(SUMMARIZE_SYSTEM, user, 200)).await
    }

    /// Ask for a report draft following `instructions`, in HTML
    pub async fn generate_draft(&self, instructions: &str) -> Result<String, ApiError> {
        let user = format!(
            "Please write a draft report based on the following instructions and return the draft in html format: {}",
            instructions
        );
        self.chat(&ChatRequest::new(DRAFT_SYSTEM, user, 800)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_documented_fields() {
        let request = ChatRequest::new(SUMMARIZE_SYSTEM, "summarize this".to_string(), 200);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-4");
        assert_eq!(json["temperature"], 0.7);
        assert_eq!(json["max_tokens"], 200);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn test_unset_sampling_knobs_are_omitted() {
        let request = ChatRequest::new(DRAFT_SYSTEM, "draft".to_string(), 800);
        let json = serde_json::to_value(&request).unwrap();
        for knob in ["top_p", "frequency_penalty", "presence_penalty", "stop"] {
            assert!(json.get(knob).is_none(), "{knob} should be omitted");
        }
    }

    #[test]
    fn test_response_first_choice_extraction() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"<p>done</p>"}}]}"#;
        let response: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.choices[0].message.content, "<p>done</p>");
    }
}
