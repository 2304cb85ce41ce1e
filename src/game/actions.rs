use crate::error::{DeckError, GameError};
use crate::hand::card_value;
use crate::result::DrawOutcome;
use crate::service::{DeckId, DeckService};
use crate::sync::InFlight;
use crate::view::{Control, TableView};

use super::{GameController, GamePhase};

impl<S: DeckService, V: TableView> GameController<S, V> {
    /// Starts a game by drawing the opening cards.
    ///
    /// The session moves to `Playing` with a zero score, then
    /// [`GameOptions::starting_cards`](crate::GameOptions::starting_cards)
    /// cards are drawn one after another, stopping early on a bust.
    /// Afterwards the start control is hidden, and the draw control is shown
    /// while the game is still in progress.
    ///
    /// Returns the score after the opening cards.
    ///
    /// # Errors
    ///
    /// Returns an error if no deck was acquired, the session is not `Idle`,
    /// another operation is in flight, or a draw fails. A failed draw is not
    /// rolled back: the session stays `Playing` with the cards scored so far,
    /// and the reset control is shown so the game can be ended.
    pub async fn start(&self) -> Result<u8, GameError> {
        let _guard = InFlight::acquire(&self.in_flight)?;
        let deck = self.require_deck()?;
        self.ensure_phase(GamePhase::Idle)?;

        self.session.lock().begin();
        tracing::info!(deck_id = %deck, "game started");

        for _ in 0..self.options.starting_cards {
            if let Err(err) = self.draw_one(&deck).await {
                tracing::warn!(deck_id = %deck, error = %err, "opening draw failed");
                self.view.set_visible(Control::Start, false);
                self.view.set_visible(Control::Reset, true);
                return Err(err);
            }
            if self.phase() != GamePhase::Playing {
                break;
            }
        }

        self.view.set_visible(Control::Start, false);
        if self.phase() == GamePhase::Playing {
            self.view.set_visible(Control::Draw, true);
        }

        Ok(self.score())
    }

    /// Player action: draw one card into the hand.
    ///
    /// The card is drawn, scored against the current score, added to the hand
    /// pile, and the pile is listed and rendered before the bust check.
    ///
    /// # Errors
    ///
    /// Returns an error if no deck was acquired, the session is not
    /// `Playing`, another operation is in flight, a Deck Service call fails,
    /// or the drawn card's value cannot be scored.
    pub async fn draw_card(&self) -> Result<DrawOutcome, GameError> {
        let _guard = InFlight::acquire(&self.in_flight)?;
        let deck = self.require_deck()?;
        self.ensure_phase(GamePhase::Playing)?;

        self.draw_one(&deck).await
    }

    /// Checks the score against the bust threshold.
    ///
    /// Over 21, the session moves to `Busted`, the game-over text is shown,
    /// the draw control is hidden, and the reset control is shown.
    ///
    /// Returns whether the hand is bust.
    pub fn check_bust(&self) -> bool {
        let (busted, score) = {
            let mut session = self.session.lock();
            (session.check_bust(), session.score)
        };

        if busted {
            tracing::info!(score, "bust");
            self.view.set_game_over(Some(self.options.game_over_message.as_str()));
            self.view.set_visible(Control::Draw, false);
            self.view.set_visible(Control::Reset, true);
        }

        busted
    }

    async fn draw_one(&self, deck: &DeckId) -> Result<DrawOutcome, GameError> {
        let draw = self.service.draw(deck, 1).await?;
        let card = draw
            .cards
            .into_iter()
            .next()
            .ok_or_else(|| DeckError::Malformed("draw returned no cards".to_string()))?;

        let (value, score) = {
            let mut session = self.session.lock();
            session.remaining = Some(draw.remaining);
            let value = card_value(&card.value, session.score)
                .ok_or_else(|| GameError::UnknownCardValue(card.value.clone()))?;
            (value, session.apply(value))
        };
        tracing::debug!(code = %card.code, value, score, "card scored");

        self.service
            .add_to_pile(deck, &self.options.pile, &[card.code.as_str()])
            .await?;
        self.refresh_hand(deck).await?;
        self.check_bust();

        Ok(DrawOutcome {
            card,
            value,
            score,
            phase: self.phase(),
        })
    }
}
