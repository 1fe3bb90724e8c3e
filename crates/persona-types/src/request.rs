//! The one wire contract: named parameters of a collaborator call.

use serde::{Deserialize, Serialize};
use crate::config::{
    ChatConfig, ChromaSettings, EmbeddingModelSettings, LlmProviderSettings, MemorySettings,
};
use crate::message::Turn;
use crate::session::{MessageToken, SessionId};

/// Snapshot of everything one collaborator call needs.
/// Field names match the collaborator's keyword arguments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaboratorRequest {
    pub query: String,
    pub system_message: String,
    pub llm_provider_settings: LlmProviderSettings,
    pub chroma_settings: ChromaSettings,
    pub embedding_model_settings: EmbeddingModelSettings,
    pub memory_settings: MemorySettings,
    pub memory: bool,
    pub summarize_memory: bool,
    pub collection_name: String,
    pub unique_session_id: String,
    pub unique_message_id: String,
    pub buffer_window_chats: Vec<Turn>,
}

impl CollaboratorRequest {
    pub fn new(
        config: &ChatConfig,
        query: impl Into<String>,
        system_message: impl Into<String>,
        session_id: &SessionId,
        token: &MessageToken,
        transcript: &[Turn],
    ) -> Self {
        Self {
            query: query.into(),
            system_message: system_message.into(),
            llm_provider_settings: config.llm.clone(),
            chroma_settings: config.chroma.clone(),
            embedding_model_settings: config.embedding.clone(),
            memory_settings: config.memory_settings.clone(),
            memory: config.memory,
            summarize_memory: config.summarize_memory,
            collection_name: config.collection_name.clone(),
            unique_session_id: session_id.as_str().to_string(),
            unique_message_id: token.as_str().to_string(),
            buffer_window_chats: transcript.to_vec(),
        }
    }
}
