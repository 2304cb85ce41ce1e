//! Result types returned by game operations.

use crate::card::Card;
use crate::game::GamePhase;

/// Outcome of drawing a single card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawOutcome {
    /// The card that was drawn.
    pub card: Card,
    /// Points the card added to the score.
    pub value: u8,
    /// Score after the card was added.
    pub score: u8,
    /// Phase after the bust check.
    pub phase: GamePhase,
}

impl DrawOutcome {
    /// Returns whether this draw busted the hand.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.phase == GamePhase::Busted
    }
}
