//! Card types as returned by the Deck Service.

use serde::{Deserialize, Serialize};

use crate::hand::card_value;

/// A playing card drawn from a remote deck.
///
/// Cards are owned by the Deck Service; the controller only keeps the fields
/// it needs to score and render them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Short card code used by the Deck Service (e.g. `"AS"`, `"0H"`).
    pub code: String,
    /// Raw face value (e.g. `"ACE"`, `"KING"`, `"7"`).
    pub value: String,
    /// Suit name (e.g. `"SPADES"`). Empty when the service omits it.
    #[serde(default)]
    pub suit: String,
    /// URL of the card face image. Empty when the service omits it.
    #[serde(default)]
    pub image: String,
}

impl Card {
    /// Creates a card with the given code and face value.
    #[must_use]
    pub fn new(code: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            value: value.into(),
            suit: String::new(),
            image: String::new(),
        }
    }

    /// Sets the suit name.
    #[must_use]
    pub fn with_suit(mut self, suit: impl Into<String>) -> Self {
        self.suit = suit.into();
        self
    }

    /// Sets the image URL.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    /// Returns the blackjack value of this card given the score before it is
    /// added.
    ///
    /// See [`card_value`].
    #[must_use]
    pub fn blackjack_value(&self, current_score: u8) -> Option<u8> {
        card_value(&self.value, current_score)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
