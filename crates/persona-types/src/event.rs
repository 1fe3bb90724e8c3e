use serde::{Deserialize, Serialize};

/// Events emitted by the session controller.
/// UI subscribes to these for status and banners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChatEvent {
    /// A collaborator call was dispatched
    SendStarted { session_id: String },

    /// The collaborator replied and both turns were appended
    ReplyReceived { session_id: String, turns: usize },

    /// The collaborator call failed; transcript untouched
    SendFailed { message: String },

    /// A precondition blocked the action
    Warning { message: String },

    /// Session was reset to its initial state
    SessionReset,
}
