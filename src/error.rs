use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChannelError>;

/// Errors surfaced by channel operations.
///
/// The first five variants are validation/business failures the caller can
/// act on. `Corrupt` and `Store` indicate a host-level invariant violation
/// (undecodable record under a valid key, backend failure); the enclosing
/// transaction should abort instead of treating them as bad user input.
#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
    #[error("invalid channel id: {0}")]
    InvalidChannelId(i64),
    #[error("channel not found: {0}")]
    ChannelNotFound(String),
    #[error("insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("corrupted channel record: {0}")]
    Corrupt(String),
    #[error("store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ChannelError {
    /// Whether the caller can recover by fixing its input. Unrecoverable
    /// errors must abort the enclosing transaction.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, ChannelError::Corrupt(_) | ChannelError::Store(_))
    }
}
