//! Port traits at the hexagonal boundary.
//!
//! The collaborator trait is defined here in `persona-core` (pure Rust).
//! Implementations live in `persona-platform` (browser adapters).

use async_trait::async_trait;
use persona_types::{Result, request::CollaboratorRequest};

// ─── Collaborator Port ───────────────────────────────────────

/// The external chat/memory engine. One call per user message.
#[async_trait(?Send)]
pub trait ChatCollaborator {
    /// Send the query with its full configuration bundle; returns the reply text
    async fn chat(&self, request: CollaboratorRequest) -> Result<String>;

    /// Name of this adapter (for logging/debug)
    fn name(&self) -> &str;
}
