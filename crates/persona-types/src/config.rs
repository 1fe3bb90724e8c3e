use serde::{Deserialize, Serialize};
use crate::{ChatError, Result};

pub const ENV_LLM_API_KEY: &str = "LLM_API_KEY";
pub const ENV_MODEL_NAME: &str = "MODEL_NAME";
pub const ENV_CHAT_SERVICE_URL: &str = "CHAT_SERVICE_URL";

/// Everything passed unchanged to the collaborator on every call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    pub llm: LlmProviderSettings,
    pub embedding: EmbeddingModelSettings,
    pub chroma: ChromaSettings,
    pub memory_settings: MemorySettings,
    pub memory: bool,
    pub summarize_memory: bool,
    pub collection_name: String,
    /// When set, calls go to a remote chat service instead of the LLM directly
    pub chat_service_url: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            llm: LlmProviderSettings::default(),
            embedding: EmbeddingModelSettings::default(),
            chroma: ChromaSettings::default(),
            memory_settings: MemorySettings::default(),
            memory: true,
            summarize_memory: false,
            collection_name: DEFAULT_COLLECTION.to_string(),
            chat_service_url: None,
        }
    }
}

impl ChatConfig {
    /// Build from a key lookup (process env, build-time env, test maps).
    /// Empty values count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();
        config.llm.model = get(ENV_MODEL_NAME);
        config.llm.api_key = get(ENV_LLM_API_KEY);
        config.chat_service_url = get(ENV_CHAT_SERVICE_URL);
        config
    }

    /// Structural checks. Missing credentials are not errors here; see `missing_env`.
    pub fn validate(&self) -> Result<()> {
        check_url("llm.base_url", &self.llm.base_url)?;
        check_url("embedding.base_url", &self.embedding.base_url)?;
        if let Some(url) = &self.chat_service_url {
            check_url(ENV_CHAT_SERVICE_URL, url)?;
        }
        if self.memory_settings.results_per_query == 0 {
            return Err(ChatError::Config(
                "memory_settings.results_per_query must be at least 1".to_string(),
            ));
        }
        if self.chroma.host.is_some() != self.chroma.port.is_some() {
            return Err(ChatError::Config(
                "chroma host and port must be set together".to_string(),
            ));
        }
        if self.collection_name.trim().is_empty() {
            return Err(ChatError::Config("collection_name is empty".to_string()));
        }
        Ok(())
    }

    /// Environment keys that were not provided
    pub fn missing_env(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.llm.api_key.is_none() {
            missing.push(ENV_LLM_API_KEY);
        }
        if self.llm.model.is_none() {
            missing.push(ENV_MODEL_NAME);
        }
        missing
    }
}

fn check_url(field: &str, url: &str) -> Result<()> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ChatError::Config(format!(
            "{} must be an http(s) URL, got {:?}",
            field, url
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LlmProviderSettings {
    pub provider: String,
    pub base_url: String,
    pub model: Option<String>,
    pub api_key: Option<String>,
}

impl Default for LlmProviderSettings {
    fn default() -> Self {
        Self {
            provider: "groq".to_string(),
            base_url: "https://api.groq.com/openai/v1".to_string(),
            model: None,
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbeddingModelSettings {
    pub provider: String,
    pub base_url: String,
    pub model: String,
    pub api_key: Option<String>,
}

impl Default for EmbeddingModelSettings {
    fn default() -> Self {
        Self {
            provider: "ollama".to_string(),
            base_url: "http://localhost:11434".to_string(),
            model: "nomic-embed-text".to_string(),
            api_key: None,
        }
    }
}

/// All unset means "use the collaborator's local default store"
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChromaSettings {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub settings: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySettings {
    pub try_queries: bool,
    pub results_per_query: u32,
}

impl Default for MemorySettings {
    fn default() -> Self {
        Self {
            try_queries: true,
            results_per_query: 1,
        }
    }
}

const DEFAULT_COLLECTION: &str = "conversation";
