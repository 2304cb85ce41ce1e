use crate::error::GameError;
use crate::service::DeckService;
use crate::sync::InFlight;
use crate::view::TableView;

use super::GameController;

impl<S: DeckService, V: TableView> GameController<S, V> {
    /// Ends the game and returns to `Idle`.
    ///
    /// All cards go back to the deck, then the deck is reshuffled; the second
    /// request is only sent once the first has completed. The emptied hand is
    /// rendered, the score is zeroed, and the view returns to its idle layout.
    ///
    /// Allowed in any phase once a deck has been acquired.
    ///
    /// # Errors
    ///
    /// Returns an error if no deck was acquired, another operation is in
    /// flight, or a Deck Service call fails. If returning or reshuffling
    /// fails, the session is left unchanged.
    pub async fn end_game(&self) -> Result<(), GameError> {
        let _guard = InFlight::acquire(&self.in_flight)?;
        let deck = self.require_deck()?;

        self.service.return_cards(&deck).await?;
        let state = self.service.shuffle(&deck).await?;

        {
            let mut session = self.session.lock();
            session.reset();
            session.remaining = Some(state.remaining);
        }
        tracing::info!(deck_id = %deck, remaining = state.remaining, "game reset");

        self.refresh_hand(&deck).await?;
        self.show_idle_layout();
        Ok(())
    }
}
