//! Remote chat service collaborator.
//!
//! POSTs the full named-parameter bundle as JSON to `{endpoint}/chat`
//! and lets the service do retrieval, memory and the LLM call.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::Deserialize;

use persona_core::ports::ChatCollaborator;
use persona_types::{ChatError, Result, request::CollaboratorRequest};

pub struct RemoteCollaborator {
    url: String,
}

impl RemoteCollaborator {
    pub fn new(endpoint: &str) -> Self {
        Self {
            url: format!("{}/chat", endpoint.trim_end_matches('/')),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Accepts `{"response": "..."}` or a bare JSON string
#[derive(Deserialize)]
#[serde(untagged)]
enum ReplyBody {
    Wrapped { response: String },
    Bare(String),
}

pub fn parse_reply(body: &str) -> Result<String> {
    match serde_json::from_str::<ReplyBody>(body) {
        Ok(ReplyBody::Wrapped { response }) | Ok(ReplyBody::Bare(response)) => Ok(response),
        Err(e) => Err(ChatError::Collaborator(format!(
            "Unexpected reply from chat service: {}",
            e
        ))),
    }
}

#[async_trait(?Send)]
impl ChatCollaborator for RemoteCollaborator {
    async fn chat(&self, req: CollaboratorRequest) -> Result<String> {
        log::debug!(
            "POST {} (session {}, message {})",
            self.url,
            req.unique_session_id,
            req.unique_message_id
        );

        let response = Request::post(&self.url)
            .header("Content-Type", "application/json")
            .json(&req)
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
        "remote"
    }
}
