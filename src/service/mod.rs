//! The remote Deck Service that owns all deck and pile state.

use core::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::DeckError;

mod http;
mod wire;

pub use http::HttpDeckService;

/// Opaque identifier of a deck held by the Deck Service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(String);

impl DeckId {
    /// Wraps a raw deck identifier.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeckId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DeckId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DeckId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Deck status reported after creating, returning to, or shuffling a deck.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeckState {
    /// The deck identifier.
    pub deck_id: DeckId,
    /// Cards left in the draw stack.
    pub remaining: usize,
}

/// Cards removed from the draw stack by a draw request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Draw {
    /// The drawn cards, in draw order.
    pub cards: Vec<Card>,
    /// Cards left in the draw stack.
    pub remaining: usize,
}

/// Client for the remote card-deck API.
///
/// Each method maps to one request. Implementations must not retry, and
/// callers are responsible for ordering dependent requests.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait DeckService {
    /// Creates a new shuffled deck made of `decks` standard decks.
    async fn new_deck(&self, decks: u8) -> Result<DeckState, DeckError>;

    /// Draws `count` cards from the top of the deck.
    async fn draw(&self, deck: &DeckId, count: u8) -> Result<Draw, DeckError>;

    /// Adds drawn cards, by code, to the named pile.
    async fn add_to_pile(
        &self,
        deck: &DeckId,
        pile: &str,
        codes: &[&str],
    ) -> Result<(), DeckError>;

    /// Lists the cards in the named pile. A pile that does not exist is empty.
    async fn list_pile(&self, deck: &DeckId, pile: &str) -> Result<Vec<Card>, DeckError>;

    /// Returns every drawn and piled card to the deck.
    async fn return_cards(&self, deck: &DeckId) -> Result<DeckState, DeckError>;

    /// Shuffles the cards remaining in the deck.
    async fn shuffle(&self, deck: &DeckId) -> Result<DeckState, DeckError>;
}
