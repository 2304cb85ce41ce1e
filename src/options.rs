//! Game configuration options.

/// Default Deck Service endpoint.
pub const DEFAULT_BASE_URL: &str = "https://deckofcardsapi.com/api";

/// Environment variable overriding [`GameOptions::base_url`].
pub const ENV_BASE_URL: &str = "DECKJACK_API_URL";

/// Environment variable overriding [`GameOptions::decks`].
pub const ENV_DECKS: &str = "DECKJACK_DECKS";

/// Configuration options for a game session.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use deckjack::GameOptions;
///
/// let options = GameOptions::default()
///     .with_base_url("http://localhost:8000/api")
///     .with_decks(2)
///     .with_starting_cards(2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOptions {
    /// Base URL of the Deck Service, without a trailing slash.
    pub base_url: String,
    /// Number of decks requested when acquiring a new deck.
    pub decks: u8,
    /// Name of the server-side pile holding the player's hand.
    pub pile: String,
    /// Number of cards drawn when a game starts.
    pub starting_cards: u8,
    /// Text shown when the player busts.
    pub game_over_message: String,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            decks: 1,
            pile: "hand".to_string(),
            starting_cards: 2,
            game_over_message: "Game Over!".to_string(),
        }
    }
}

impl GameOptions {
    /// Returns the default options with environment overrides applied.
    ///
    /// Reads `DECKJACK_API_URL` and `DECKJACK_DECKS`. Unset variables keep
    /// their defaults; unparsable values are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides looked up by environment variable name.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_overrides(|key| match key {
    ///     "DECKJACK_DECKS" => Some("3".to_string()),
    ///     _ => None,
    /// });
    /// assert_eq!(options.decks, 3);
    /// ```
    #[must_use]
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self = self.with_base_url(url);
        }

        if let Some(raw) = lookup(ENV_DECKS) {
            match raw.trim().parse::<u8>() {
                Ok(decks) if decks > 0 => self.decks = decks,
                _ => tracing::warn!(value = %raw, "ignoring invalid {ENV_DECKS}"),
            }
        }

        self
    }

    /// Sets the Deck Service base URL. A trailing slash is removed.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_base_url("http://localhost:8000/api/");
    /// assert_eq!(options.base_url, "http://localhost:8000/api");
    /// ```
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        self.base_url = base_url;
        self
    }

    /// Sets the number of decks requested for a new deck.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the name of the hand pile.
    #[must_use]
    pub fn with_pile(mut self, pile: impl Into<String>) -> Self {
        self.pile = pile.into();
        self
    }

    /// Sets the number of cards drawn at the start of a game.
    ///
    /// # Example
    ///
    /// ```
    /// use deckjack::GameOptions;
    ///
    /// let options = GameOptions::default().with_starting_cards(1);
    /// assert_eq!(options.starting_cards, 1);
    /// ```
    #[must_use]
    pub const fn with_starting_cards(mut self, count: u8) -> Self {
        self.starting_cards = count;
        self
    }

    /// Sets the text shown when the player busts.
    #[must_use]
    pub fn with_game_over_message(mut self, message: impl Into<String>) -> Self {
        self.game_over_message = message.into();
        self
    }
}
