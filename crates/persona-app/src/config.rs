//! Configuration baked in at build time by `build.rs`.

use persona_types::config::{ChatConfig, ENV_CHAT_SERVICE_URL, ENV_LLM_API_KEY, ENV_MODEL_NAME};

fn build_env(key: &str) -> Option<String> {
    let value = match key {
        ENV_LLM_API_KEY => option_env!("LLM_API_KEY"),
        ENV_MODEL_NAME => option_env!("MODEL_NAME"),
        ENV_CHAT_SERVICE_URL => option_env!("CHAT_SERVICE_URL"),
        _ => None,
    };
    value.map(String::from)
}

/// Load, validate and report on the startup configuration.
pub fn load() -> persona_types::Result<ChatConfig> {
    let config = ChatConfig::from_lookup(build_env);
    config.validate()?;
    for key in config.missing_env() {
        log::warn!("{} was not set at build time; collaborator calls may fail", key);
    }
    log::info!(
        "LLM provider {} model {}",
        config.llm.provider,
        config.llm.model.as_deref().unwrap_or("<unset>")
    );
    Ok(config)
}
