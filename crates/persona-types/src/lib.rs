pub mod message;
pub mod event;
pub mod persona;
pub mod config;
pub mod request;
pub mod error;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::ChatError;
pub type Result<T> = std::result::Result<T, ChatError>;
