use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;

use crate::card::Card;
use crate::error::DeckError;
use crate::options::GameOptions;

use super::wire::{self, Ack, PileList};
use super::{DeckId, DeckService, DeckState, Draw};

/// [`DeckService`] backed by the deckofcardsapi.com HTTP API.
#[derive(Debug, Clone)]
pub struct HttpDeckService {
    client: Client,
    base_url: String,
}

impl HttpDeckService {
    /// Creates a service talking to `base_url` (e.g. `https://deckofcardsapi.com/api`).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    /// Creates a service using the base URL from `options`.
    #[must_use]
    pub fn from_options(options: &GameOptions) -> Self {
        Self::new(options.base_url.clone())
    }

    /// Creates a service with a preconfigured client.
    #[must_use]
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { client, base_url }
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn deck_url(&self, deck: &DeckId, path: &str) -> String {
        format!("{}/deck/{deck}/{path}", self.base_url)
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        tracing::debug!(%method, %url, "deck service request");
        self.client.request(method, url)
    }

    fn new_deck_request(&self, decks: u8) -> RequestBuilder {
        let url = format!("{}/deck/new/shuffle/", self.base_url);
        self.request(Method::POST, &url).query(&[("deck_count", decks)])
    }

    fn draw_request(&self, deck: &DeckId, count: u8) -> RequestBuilder {
        let url = self.deck_url(deck, "draw/");
        self.request(Method::POST, &url).query(&[("count", count)])
    }

    fn add_to_pile_request(&self, deck: &DeckId, pile: &str, codes: &[&str]) -> RequestBuilder {
        let url = self.deck_url(deck, &format!("pile/{pile}/add/"));
        self.request(Method::POST, &url).form(&[("cards", codes.join(","))])
    }

    fn list_pile_request(&self, deck: &DeckId, pile: &str) -> RequestBuilder {
        let url = self.deck_url(deck, &format!("pile/{pile}/list/"));
        self.request(Method::GET, &url)
    }

    fn return_request(&self, deck: &DeckId) -> RequestBuilder {
        let url = self.deck_url(deck, "return/");
        self.request(Method::GET, &url)
    }

    fn shuffle_request(&self, deck: &DeckId) -> RequestBuilder {
        let url = self.deck_url(deck, "shuffle/");
        self.request(Method::GET, &url)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, DeckError> {
        let response = request
            .send()
            .await
            .map_err(|err| DeckError::Network(err.to_string()))?;
        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|err| DeckError::Network(err.to_string()))?;

        if !status.is_success() {
            // Unknown deck ids come back as 404 with a `success: false` body.
            if let Err(err @ DeckError::Rejected(_)) = wire::decode::<Ack>(&body) {
                return Err(err);
            }
            return Err(DeckError::Status(status.as_u16()));
        }

        wire::decode(&body)
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl DeckService for HttpDeckService {
    async fn new_deck(&self, decks: u8) -> Result<DeckState, DeckError> {
        self.send(self.new_deck_request(decks)).await
    }

    async fn draw(&self, deck: &DeckId, count: u8) -> Result<Draw, DeckError> {
        self.send(self.draw_request(deck, count)).await
    }

    async fn add_to_pile(
        &self,
        deck: &DeckId,
        pile: &str,
        codes: &[&str],
    ) -> Result<(), DeckError> {
        let request = self.add_to_pile_request(deck, pile, codes);
        self.send::<Ack>(request).await.map(|_| ())
    }

    async fn list_pile(&self, deck: &DeckId, pile: &str) -> Result<Vec<Card>, DeckError> {
        let list: PileList = self.send(self.list_pile_request(deck, pile)).await?;
        Ok(list.into_cards(pile))
    }

    async fn return_cards(&self, deck: &DeckId) -> Result<DeckState, DeckError> {
        self.send(self.return_request(deck)).await
    }

    async fn shuffle(&self, deck: &DeckId) -> Result<DeckState, DeckError> {
        self.send(self.shuffle_request(deck)).await
    }
}
