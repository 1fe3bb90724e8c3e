//! Chat session controller, one per browser session.
//!
//! A send is split in three so no borrow of the controller is held across
//! the collaborator's `.await`:
//! 1. `begin_send` checks preconditions and snapshots the request
//! 2. the caller awaits `ChatCollaborator::chat`
//! 3. `complete_send` appends the user and assistant turns
//!
//! `send` runs all three in sequence when the caller owns the controller.

use std::rc::Rc;

use persona_types::{
    ChatError, Result,
    config::ChatConfig,
    event::ChatEvent,
    message::Turn,
    persona::{Persona, PersonaId},
    request::CollaboratorRequest,
    session::{MessageToken, SessionId, SessionInfo},
};
use crate::event_bus::EventBus;
use crate::ports::ChatCollaborator;

pub const MISSING_USERNAME_WARNING: &str = "Please enter a unique username to start the chat.";

/// Lifecycle of a session. `Ready` is only left through `reset`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingUsername,
    Ready,
}

/// Result of the synchronous half of a send
#[derive(Debug)]
pub enum SendDecision {
    Dispatch(PendingSend),
    MissingUsername,
    EmptyQuery,
    /// A previous send has not completed yet
    Busy,
}

/// Outcome of a full `send`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendOutcome {
    Replied(String),
    MissingUsername,
    EmptyQuery,
    Busy,
}

/// A request ready for the collaborator plus the ticket to complete it
#[derive(Debug)]
pub struct PendingSend {
    pub request: CollaboratorRequest,
    pub ticket: SendTicket,
}

/// Identifies an in-flight send. Stale tickets (from before a reset) are dropped.
#[derive(Debug, Clone)]
pub struct SendTicket {
    generation: u64,
    query: String,
    session_id: SessionId,
}

impl SendTicket {
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Session the request was sent under
    pub fn session_id(&self) -> &SessionId {
        &self.session_id
    }
}

pub struct ChatSessionController {
    config: Rc<ChatConfig>,
    event_bus: EventBus,
    username: String,
    persona: PersonaId,
    transcript: Vec<Turn>,
    session: SessionInfo,
    phase: SessionPhase,
    pending: bool,
    generation: u64,
}

impl ChatSessionController {
    pub fn new(config: Rc<ChatConfig>, event_bus: EventBus) -> Self {
        let session = SessionInfo::new();
        log::info!(
            "Session started at {} (message token {})",
            session.started_at,
            session.message_token
        );
        Self {
            config,
            event_bus,
            username: String::new(),
            persona: PersonaId::default(),
            transcript: Vec::new(),
            session,
            phase: SessionPhase::AwaitingUsername,
            pending: false,
            generation: 0,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn has_username(&self) -> bool {
        !self.username.is_empty()
    }

    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
        if self.has_username() && self.phase == SessionPhase::AwaitingUsername {
            self.phase = SessionPhase::Ready;
            log::info!("Session ready for {}", self.username);
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn persona_id(&self) -> PersonaId {
        self.persona
    }

    pub fn persona(&self) -> &'static Persona {
        self.persona.persona()
    }

    /// Takes effect from the next send; existing turns are untouched
    pub fn set_persona(&mut self, persona: PersonaId) {
        if self.persona != persona {
            log::debug!("Persona changed to {}", persona.persona().name);
            self.persona = persona;
        }
    }

    pub fn select_persona(&mut self, name: &str) -> Result<()> {
        let id = PersonaId::from_name(name)
            .ok_or_else(|| ChatError::UnknownPersona(name.to_string()))?;
        self.set_persona(id);
        Ok(())
    }

    pub fn transcript(&self) -> &[Turn] {
        &self.transcript
    }

    pub fn message_token(&self) -> &MessageToken {
        &self.session.message_token
    }

    pub fn session_info(&self) -> &SessionInfo {
        &self.session
    }

    /// `None` until a username is entered
    pub fn session_id(&self) -> Option<SessionId> {
        self.has_username()
            .then(|| SessionId::compose(&self.username, self.persona()))
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Check preconditions and snapshot the collaborator request.
    pub fn begin_send(&mut self, query: &str) -> SendDecision {
        let session_id = match self.session_id() {
            Some(id) => id,
            None => {
                self.event_bus.emit(ChatEvent::Warning {
                    message: MISSING_USERNAME_WARNING.to_string(),
                });
                return SendDecision::MissingUsername;
            }
        };
        if query.is_empty() {
            return SendDecision::EmptyQuery;
        }
        if self.pending {
            return SendDecision::Busy;
        }

        let request = CollaboratorRequest::new(
            &self.config,
            query,
            self.persona().system_message(),
            &session_id,
            &self.session.message_token,
            &self.transcript,
        );
        self.pending = true;
        log::info!(
            "Dispatching message for session {} ({} prior turns)",
            session_id,
            self.transcript.len()
        );
        self.event_bus.emit(ChatEvent::SendStarted {
            session_id: session_id.to_string(),
        });

        SendDecision::Dispatch(PendingSend {
            request,
            ticket: SendTicket {
                generation: self.generation,
                query: query.to_string(),
                session_id,
            },
        })
    }

    /// Apply the collaborator result. On error nothing is appended.
    pub fn complete_send(&mut self, ticket: SendTicket, result: Result<String>) -> Result<String> {
        if ticket.generation != self.generation {
            log::warn!("Dropping reply for a session that was reset");
            return result;
        }
        self.pending = false;

        match result {
            Ok(reply) => {
                self.transcript.push(Turn::user(ticket.query));
                self.transcript.push(Turn::assistant(reply.clone()));
                self.event_bus.emit(ChatEvent::ReplyReceived {
                    session_id: ticket.session_id.to_string(),
                    turns: self.transcript.len(),
                });
                Ok(reply)
            }
            Err(e) => {
                log::error!("Collaborator call failed: {}", e);
                self.event_bus.emit(ChatEvent::SendFailed {
                    message: e.to_string(),
                });
                Err(e)
            }
        }
    }

    /// Full send when the caller owns the controller for the whole call.
    pub async fn send(
        &mut self,
        query: &str,
        collaborator: &dyn ChatCollaborator,
    ) -> Result<SendOutcome> {
        let pending = match self.begin_send(query) {
            SendDecision::Dispatch(p) => p,
            SendDecision::MissingUsername => return Ok(SendOutcome::MissingUsername),
            SendDecision::EmptyQuery => return Ok(SendOutcome::EmptyQuery),
            SendDecision::Busy => return Ok(SendOutcome::Busy),
        };
        let result = collaborator.chat(pending.request).await;
        self.complete_send(pending.ticket, result)
            .map(SendOutcome::Replied)
    }

    /// Back to a fresh session: new token, empty transcript, no username.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.username.clear();
        self.persona = PersonaId::default();
        self.transcript.clear();
        self.session = SessionInfo::new();
        self.phase = SessionPhase::AwaitingUsername;
        self.pending = false;
        log::info!("Session reset (message token {})", self.session.message_token);
        self.event_bus.emit(ChatEvent::SessionReset);
    }
}
