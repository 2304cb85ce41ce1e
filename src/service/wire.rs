//! Response decoding for the Deck Service's JSON bodies.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::card::Card;
use crate::error::DeckError;

#[derive(Deserialize)]
struct Status {
    #[serde(default = "default_success")]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

const fn default_success() -> bool {
    true
}

/// Body of a request whose payload is ignored.
#[derive(Debug, Deserialize)]
pub struct Ack {}

#[derive(Debug, Deserialize)]
pub struct PileList {
    #[serde(default)]
    piles: HashMap<String, Pile>,
}

#[derive(Debug, Deserialize)]
struct Pile {
    #[serde(default)]
    cards: Vec<Card>,
}

impl PileList {
    pub fn into_cards(mut self, pile: &str) -> Vec<Card> {
        self.piles
            .remove(pile)
            .map(|pile| pile.cards)
            .unwrap_or_default()
    }
}

fn malformed(err: &serde_json::Error) -> DeckError {
    DeckError::Malformed(err.to_string())
}

/// Decodes a response body, honoring the `success`/`error` envelope.
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DeckError> {
    let status: Status = serde_json::from_slice(body).map_err(|err| malformed(&err))?;
    if !status.success {
        return Err(DeckError::Rejected(
            status.error.unwrap_or_else(|| "request failed".to_string()),
        ));
    }

    serde_json::from_slice(body).map_err(|err| malformed(&err))
}
