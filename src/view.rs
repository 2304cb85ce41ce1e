//! The UI surface driven by the controller.

use crate::card::Card;

/// A control the player can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Starts a game.
    Start,
    /// Draws a card.
    Draw,
    /// Returns all cards and starts over.
    Reset,
}

impl Control {
    /// All controls, in display order.
    pub const ALL: [Self; 3] = [Self::Start, Self::Draw, Self::Reset];
}

/// Rendering target for a game session.
///
/// The controller never creates UI elements; it only tells the view which
/// cards to show, which controls are visible, and what the game-over text is.
/// Implementations that need to mutate state use interior mutability.
pub trait TableView {
    /// Replaces the displayed hand with `cards`.
    fn render_hand(&self, cards: &[Card]);

    /// Shows or hides a control.
    fn set_visible(&self, control: Control, visible: bool);

    /// Sets the game-over text, or clears it with `None`.
    fn set_game_over(&self, message: Option<&str>);
}

impl<T: TableView + ?Sized> TableView for &T {
    fn render_hand(&self, cards: &[Card]) {
        (**self).render_hand(cards);
    }

    fn set_visible(&self, control: Control, visible: bool) {
        (**self).set_visible(control, visible);
    }

    fn set_game_over(&self, message: Option<&str>) {
        (**self).set_game_over(message);
    }
}
