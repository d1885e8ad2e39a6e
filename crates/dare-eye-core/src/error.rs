use thiserror::Error;

/// Errors raised by the scoring, wish and navigation logic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DareError {
    /// The wish catalog has no usable entries.
    #[error("wish catalog is empty")]
    InvalidCatalog,
    #[error("player name must not be empty")]
    EmptyPlayerName,
    #[error("player `{0}` appears more than once")]
    DuplicatePlayer(String),
    #[error("screen not found: {0}")]
    UnknownScreen(String),
    #[error("no menu item `{0}`")]
    NoSuchMenuItem(String),
}

/// Outcome of a failed share. Always recovered locally by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareFailure {
    #[error("share cancelled")]
    Cancelled,
    #[error("share target unavailable: {0}")]
    Unavailable(String),
}
