//! UI-level state that drives rendering.
//! The transcript itself lives in the controller; this holds the input
//! widgets' contents and a projection of controller events.

use persona_types::event::ChatEvent;

/// What the status line shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiStatus {
    Ready,
    Thinking,
    Error(String),
}

pub struct UiState {
    /// Sidebar username field
    pub username_input: String,
    /// Message field content
    pub input_text: String,
    pub status: UiStatus,
    /// Last precondition warning, cleared by the next successful dispatch
    pub warning: Option<String>,
    /// Last collaborator failure, cleared by the next dispatch
    pub error_banner: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            username_input: String::new(),
            input_text: String::new(),
            status: UiStatus::Ready,
            warning: None,
            error_banner: None,
        }
    }

    /// Process events from the EventBus and update UI state
    pub fn process_events(&mut self, events: Vec<ChatEvent>) {
        for event in events {
            match event {
                ChatEvent::SendStarted { .. } => {
                    self.status = UiStatus::Thinking;
                    self.warning = None;
                    self.error_banner = None;
                }
                ChatEvent::ReplyReceived { .. } => {
                    self.status = UiStatus::Ready;
                }
                ChatEvent::SendFailed { message } => {
                    self.status = UiStatus::Error(message.clone());
                    self.error_banner = Some(message);
                }
                ChatEvent::Warning { message } => {
                    self.warning = Some(message);
                }
                ChatEvent::SessionReset => {
                    *self = Self::new();
                }
            }
        }
    }

    pub fn status_text(&self) -> String {
        match &self.status {
            UiStatus::Ready => "Ready".to_string(),
            UiStatus::Thinking => "Thinking...".to_string(),
            UiStatus::Error(message) => format!("Error: {}", message),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.status == UiStatus::Thinking
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
