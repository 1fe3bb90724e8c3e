pub mod direct;
pub mod remote;

use std::rc::Rc;
use persona_core::ports::ChatCollaborator;
use persona_types::config::ChatConfig;

pub use direct::DirectLlmCollaborator;
pub use remote::RemoteCollaborator;

/// Remote chat service when one is configured, otherwise the LLM directly.
pub fn collaborator_from_config(config: &ChatConfig) -> Rc<dyn ChatCollaborator> {
    match &config.chat_service_url {
        Some(endpoint) => {
            let remote = RemoteCollaborator::new(endpoint);
            log::info!("Collaborator: remote chat service at {}", remote.url());
            Rc::new(remote)
        }
        None => {
            log::info!(
                "Collaborator: direct {} at {}",
                config.llm.provider,
                config.llm.base_url
            );
            Rc::new(DirectLlmCollaborator::new())
        }
    }
}
