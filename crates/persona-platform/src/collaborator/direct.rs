//! OpenAI-compatible collaborator.
//!
//! Talks straight to the chat completions endpoint named in
//! `llm_provider_settings` (Groq by default). Vector memory is not
//! available on this path: embedding, chroma and memory settings are
//! accepted and logged, then ignored.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;
use serde_json::{json, Value};

use persona_core::ports::ChatCollaborator;
use persona_types::{
    ChatError, Result,
    message::Role,
    request::CollaboratorRequest,
};

/// Compatible with: Groq, OpenAI, DeepSeek, Together, Mistral, etc.
pub struct DirectLlmCollaborator;

impl DirectLlmCollaborator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DirectLlmCollaborator {
    fn default() -> Self {
        Self::new()
    }
}

/// `{base_url}/chat/completions`; the base URL already carries the API version.
pub fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}

/// Messages are: system message, every transcript turn in order, then the query.
pub fn build_request_body(req: &CollaboratorRequest) -> Value {
    let mut messages = Vec::with_capacity(req.buffer_window_chats.len() + 2);
    messages.push(json!({
        "role": "system",
        "content": req.system_message,
    }));
    for turn in &req.buffer_window_chats {
        let role = match turn.role {
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        messages.push(json!({
            "role": role,
            "content": turn.content,
        }));
    }
    messages.push(json!({
        "role": "user",
        "content": req.query,
    }));

    json!({
        "model": req.llm_provider_settings.model,
        "messages": messages,
    })
}

/// First choice's content, or an error if the provider returned none
pub fn parse_reply(body: &str) -> Result<String> {
    let data: ApiResponse = serde_json::from_str(body)?;
    data.choices
        .into_iter()
        .next()
        .map(|c| c.message.content.unwrap_or_default())
        .ok_or_else(|| ChatError::Collaborator("No choices in response".to_string()))
}

#[async_trait(?Send)]
impl ChatCollaborator for DirectLlmCollaborator {
    async fn chat(&self, req: CollaboratorRequest) -> Result<String> {
        let settings = &req.llm_provider_settings;
        let url = completions_url(&settings.base_url);
        log::debug!(
            "{} via {} (session {}, collection {}, embeddings {}/{}, memory {}, {} prior turns)",
            settings.provider,
            url,
            req.unique_session_id,
            req.collection_name,
            req.embedding_model_settings.provider,
            req.embedding_model_settings.model,
            req.memory,
            req.buffer_window_chats.len(),
        );

        let body = build_request_body(&req);
        let mut builder = Request::post(&url).header("Content-Type", "application/json");
        if let Some(key) = &settings.api_key {
            builder = builder.header("Authorization", &format!("Bearer {}", key));
        }

        let response = builder
            .json(&body)
            .map_err(|e| ChatError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ChatError::Collaborator(format!("HTTP {}: {}", status, text)));
        }

        let text = response
            .text()
            .await
            .map_err(|e| ChatError::Network(e.to_string()))?;
        parse_reply(&text)
    }

    fn name(&self) -> &str {
        "direct"
    }
}

// ─── API response types ──────────────────────────────────────

#[derive(Deserialize)]
struct ApiResponse {
    choices: Vec<ApiChoice>,
}

#[derive(Deserialize)]
struct ApiChoice {
    message: ApiMessage,
}

#[derive(Deserialize)]
struct ApiMessage {
    #[serde(default)]
    content: Option<String>,
}
