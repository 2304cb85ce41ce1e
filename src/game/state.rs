//! Session state types.

use crate::hand::is_bust;
use crate::service::DeckId;

/// Game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    /// No game in progress.
    #[default]
    Idle,
    /// Cards are being drawn.
    Playing,
    /// The score went over 21.
    Busted,
}

/// Local state of one game session.
///
/// The deck and its cards live on the Deck Service; the session only mirrors
/// what the controller needs to sequence requests and keep score.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    /// Deck acquired for this session, if any.
    pub deck: Option<DeckId>,
    /// Running score of the current game.
    pub score: u8,
    /// Current phase.
    pub phase: GamePhase,
    /// Cards scored since the game started.
    pub cards_drawn: usize,
    /// Cards left in the draw stack, as last reported by the Deck Service.
    pub remaining: Option<usize>,
}

impl Session {
    /// Creates a session with no deck, a zero score, and the `Idle` phase.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            deck: None,
            score: 0,
            phase: GamePhase::Idle,
            cards_drawn: 0,
            remaining: None,
        }
    }

    pub(crate) fn begin(&mut self) {
        self.score = 0;
        self.cards_drawn = 0;
        self.phase = GamePhase::Playing;
    }

    pub(crate) fn apply(&mut self, value: u8) -> u8 {
        self.score = self.score.saturating_add(value);
        self.cards_drawn += 1;
        self.score
    }

    /// Moves to `Busted` if the score is over 21. Returns whether it did.
    pub(crate) fn check_bust(&mut self) -> bool {
        let busted = is_bust(self.score);
        if busted {
            self.phase = GamePhase::Busted;
        }
        busted
    }

    pub(crate) fn reset(&mut self) {
        self.score = 0;
        self.cards_drawn = 0;
        self.phase = GamePhase::Idle;
    }
}
