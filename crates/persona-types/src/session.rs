use serde::{Deserialize, Serialize};
use crate::persona::Persona;

const TOKEN_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
pub const TOKEN_LEN: usize = 5;

/// Composite key the collaborator uses to scope memory:
/// username followed by the persona name without spaces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn compose(username: &str, persona: &Persona) -> Self {
        Self(format!("{}{}", username, persona.compact_name()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Five uppercase/digit characters generated once per session and sent as
/// `unique_message_id` on every call of that session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageToken(String);

impl MessageToken {
    pub fn generate() -> Self {
        let mut token = String::with_capacity(TOKEN_LEN);
        while token.len() < TOKEN_LEN {
            let uuid = uuid::Uuid::new_v4();
            // Bytes 6 and 8 hold the fixed version and variant bits
            let random = uuid
                .as_bytes()
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != 6 && *i != 8)
                .map(|(_, b)| *b);
            push_unbiased(&mut token, random);
        }
        Self(token)
    }

    /// Map uniform random bytes onto the token alphabet. `None` when too few
    /// bytes survive rejection.
    pub fn from_entropy(bytes: &[u8]) -> Option<Self> {
        let mut token = String::with_capacity(TOKEN_LEN);
        push_unbiased(&mut token, bytes.iter().copied());
        (token.len() == TOKEN_LEN).then_some(Self(token))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_well_formed(&self) -> bool {
        self.0.len() == TOKEN_LEN
            && self
                .0
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }
}

impl std::fmt::Display for MessageToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Largest multiple of the alphabet size that fits in a byte. Bytes at or
/// above it are skipped so every character is equally likely.
const UNBIASED_LIMIT: u8 = (256 / TOKEN_ALPHABET.len() * TOKEN_ALPHABET.len()) as u8;

fn push_unbiased(token: &mut String, bytes: impl Iterator<Item = u8>) {
    for b in bytes.filter(|b| *b < UNBIASED_LIMIT) {
        if token.len() == TOKEN_LEN {
            break;
        }
        token.push(TOKEN_ALPHABET[b as usize % TOKEN_ALPHABET.len()] as char);
    }
}

/// Bookkeeping for one browser session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionInfo {
    pub message_token: MessageToken,
    pub started_at: String,
}

impl SessionInfo {
    pub fn new() -> Self {
        Self {
            message_token: MessageToken::generate(),
            started_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

impl Default for SessionInfo {
    fn default() -> Self {
        Self::new()
    }
}
