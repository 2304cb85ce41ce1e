//! A single-player blackjack session backed by a remote card-deck API.
//!
//! All deck and pile state lives on the Deck Service (by default
//! [deckofcardsapi.com](https://deckofcardsapi.com)). The crate provides a
//! [`GameController`] that acquires a deck, draws cards into a `hand` pile,
//! keeps a running score with ace disambiguation, and moves between the
//! `Idle`, `Playing`, and `Busted` phases. Rendering goes through the
//! [`TableView`] trait.
//!
//! # Example
//!
//! ```no_run
//! use deckjack::{
//!     Card, Control, GameController, GameError, GameOptions, GamePhase, HttpDeckService,
//!     TableView,
//! };
//!
//! struct Console;
//!
//! impl TableView for Console {
//!     fn render_hand(&self, cards: &[Card]) {
//!         let codes: Vec<_> = cards.iter().map(|card| card.code.as_str()).collect();
//!         println!("hand: {}", codes.join(" "));
//!     }
//!
//!     fn set_visible(&self, _control: Control, _visible: bool) {}
//!
//!     fn set_game_over(&self, message: Option<&str>) {
//!         if let Some(message) = message {
//!             println!("{message}");
//!         }
//!     }
//! }
//!
//! async fn play() -> Result<u8, GameError> {
//!     let options = GameOptions::default().with_decks(1);
//!     let service = HttpDeckService::from_options(&options);
//!     let game = GameController::new(service, Console, options);
//!
//!     game.acquire_deck().await?;
//!     let mut score = game.start().await?;
//!     while game.phase() == GamePhase::Playing && score < 17 {
//!         score = game.draw_card().await?.score;
//!     }
//!     game.end_game().await?;
//!     Ok(score)
//! }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod card;
pub mod error;
pub mod game;
pub mod hand;
pub mod options;
pub mod result;
pub mod service;
mod sync;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE};
pub use error::{DeckError, GameError};
pub use game::{GameController, GamePhase, Session};
pub use hand::{BLACKJACK, card_value, is_bust};
pub use options::GameOptions;
pub use result::DrawOutcome;
pub use service::{DeckId, DeckService, DeckState, Draw, HttpDeckService};
pub use view::{Control, TableView};
