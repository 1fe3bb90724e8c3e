//! Browser platform adapters for persona chat.

pub mod collaborator;
