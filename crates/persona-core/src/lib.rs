//! Persona chat core.
//!
//! Owns the session controller and the collaborator port. Platform
//! adapters live in `persona-platform`; this crate never imports them.

pub mod controller;
pub mod event_bus;
pub mod ports;
