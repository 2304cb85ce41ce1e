//! Error types for Deck Service calls and game operations.

use thiserror::Error;

use crate::game::GamePhase;

/// Errors returned by a [`DeckService`](crate::service::DeckService).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The request could not be sent or the response could not be read.
    #[error("deck service unreachable: {0}")]
    Network(String),
    /// The service answered with a non-success HTTP status.
    #[error("deck service returned status {0}")]
    Status(u16),
    /// The service reported `success: false`.
    #[error("deck service rejected the request: {0}")]
    Rejected(String),
    /// The response did not have the expected shape.
    #[error("malformed deck service response: {0}")]
    Malformed(String),
}

/// Errors that can occur during game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// No deck has been acquired yet.
    #[error("no deck has been acquired")]
    NoDeck,
    /// A deck has already been acquired for this session.
    #[error("a deck has already been acquired")]
    DeckAlreadyAcquired,
    /// The operation is not allowed in the current phase.
    #[error("invalid game state: expected {expected:?}, found {actual:?}")]
    InvalidState {
        /// Phase the operation requires.
        expected: GamePhase,
        /// Phase the session is in.
        actual: GamePhase,
    },
    /// Another operation is still in flight.
    #[error("another operation is in progress")]
    Busy,
    /// The drawn card has a face value that cannot be scored.
    #[error("unknown card value {0:?}")]
    UnknownCardValue(String),
    /// The Deck Service call failed.
    #[error(transparent)]
    Deck(#[from] DeckError),
}
