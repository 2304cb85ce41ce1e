//! Game session controller.

use core::sync::atomic::{AtomicBool, Ordering};

use crate::card::Card;
use crate::error::GameError;
use crate::options::GameOptions;
use crate::service::{DeckId, DeckService};
use crate::sync::{InFlight, Mutex};
use crate::view::{Control, TableView};

mod actions;
mod reset;
pub mod state;

pub use state::{GamePhase, Session};

/// Drives a single-player blackjack session against a remote Deck Service.
///
/// The controller owns the [`Session`] and sequences every request an
/// operation needs, awaiting each before issuing the next. Only one operation
/// may run at a time; starting another while one is in flight fails with
/// [`GameError::Busy`].
///
/// # Example
///
/// ```no_run
/// use deckjack::{Card, Control, GameController, GameOptions, HttpDeckService, TableView};
///
/// struct Headless;
///
/// impl TableView for Headless {
///     fn render_hand(&self, _cards: &[Card]) {}
///     fn set_visible(&self, _control: Control, _visible: bool) {}
///     fn set_game_over(&self, _message: Option<&str>) {}
/// }
///
/// # async fn run() -> Result<(), deckjack::GameError> {
/// let options = GameOptions::from_env();
/// let service = HttpDeckService::from_options(&options);
/// let game = GameController::new(service, Headless, options);
///
/// game.acquire_deck().await?;
/// game.start().await?;
/// let outcome = game.draw_card().await?;
/// println!("drew {} for a score of {}", outcome.card.value, outcome.score);
/// game.end_game().await?;
/// # Ok(())
/// # }
/// ```
pub struct GameController<S, V> {
    service: S,
    view: V,
    options: GameOptions,
    session: Mutex<Session>,
    in_flight: AtomicBool,
}

impl<S: DeckService, V: TableView> GameController<S, V> {
    /// Creates a controller with a fresh session. No request is made until
    /// [`acquire_deck`](Self::acquire_deck) is called.
    pub const fn new(service: S, view: V, options: GameOptions) -> Self {
        Self {
            service,
            view,
            options,
            session: Mutex::new(Session::new()),
            in_flight: AtomicBool::new(false),
        }
    }

    /// Requests a new shuffled deck and stores its identifier.
    ///
    /// On success the view is put in its idle layout: start shown, draw and
    /// reset hidden, no game-over text.
    ///
    /// # Errors
    ///
    /// Returns an error if a deck was already acquired, another operation is
    /// in flight, or the Deck Service call fails. On failure no deck is set.
    pub async fn acquire_deck(&self) -> Result<DeckId, GameError> {
        let _guard = InFlight::acquire(&self.in_flight)?;
        if self.session.lock().deck.is_some() {
            return Err(GameError::DeckAlreadyAcquired);
        }

        let state = self.service.new_deck(self.options.decks).await?;

        {
            let mut session = self.session.lock();
            session.deck = Some(state.deck_id.clone());
            session.remaining = Some(state.remaining);
        }
        tracing::info!(deck_id = %state.deck_id, remaining = state.remaining, "acquired deck");

        self.show_idle_layout();
        Ok(state.deck_id)
    }

    /// Returns the current score.
    pub fn score(&self) -> u8 {
        self.session.lock().score
    }

    /// Returns the current phase.
    pub fn phase(&self) -> GamePhase {
        self.session.lock().phase
    }

    /// Returns the acquired deck identifier, if any.
    pub fn deck_id(&self) -> Option<DeckId> {
        self.session.lock().deck.clone()
    }

    /// Returns the number of undrawn cards last reported by the Deck Service.
    pub fn cards_remaining(&self) -> Option<usize> {
        self.session.lock().remaining
    }

    /// Returns a snapshot of the session.
    pub fn session(&self) -> Session {
        self.session.lock().clone()
    }

    /// Returns whether an operation is in flight.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Returns the options this controller was created with.
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    /// Returns the view.
    pub const fn view(&self) -> &V {
        &self.view
    }

    /// Returns the Deck Service client.
    pub const fn service(&self) -> &S {
        &self.service
    }

    fn require_deck(&self) -> Result<DeckId, GameError> {
        self.session.lock().deck.clone().ok_or(GameError::NoDeck)
    }

    fn ensure_phase(&self, expected: GamePhase) -> Result<(), GameError> {
        let actual = self.phase();
        if actual == expected {
            Ok(())
        } else {
            Err(GameError::InvalidState { expected, actual })
        }
    }

    /// Re-fetches the hand pile and renders it.
    async fn refresh_hand(&self, deck: &DeckId) -> Result<Vec<Card>, GameError> {
        let cards = self.service.list_pile(deck, &self.options.pile).await?;

        let drawn = self.session.lock().cards_drawn;
        if cards.len() != drawn {
            // The score is never re-derived from the pile, so a failed or
            // duplicated pile-add leaves the two permanently out of step.
            tracing::warn!(
                deck_id = %deck,
                pile_cards = cards.len(),
                scored_cards = drawn,
                "hand pile does not match scored cards"
            );
        }

        self.view.render_hand(&cards);
        Ok(cards)
    }

    fn show_idle_layout(&self) {
        self.view.set_visible(Control::Start, true);
        self.view.set_visible(Control::Draw, false);
        self.view.set_visible(Control::Reset, false);
        self.view.set_game_over(None);
    }
}
