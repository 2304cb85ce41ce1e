use std::cell::RefCell;
use std::rc::Rc;

use deckjack::{
    Card, Control, GameController, GameError, GameOptions, GamePhase, HttpDeckService, TableView,
};
use js_sys::{Function, Promise};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

type Controller = GameController<HttpDeckService, BrowserView>;

#[wasm_bindgen]
pub struct WasmGame {
    game: Rc<Controller>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(base_url: Option<String>) -> Self {
        let mut options = GameOptions::default();
        if let Some(url) = base_url {
            options = options.with_base_url(url);
        }
        let service = HttpDeckService::from_options(&options);

        Self {
            game: Rc::new(GameController::new(service, BrowserView::default(), options)),
        }
    }

    /// Registers a function called with a fresh snapshot after every action.
    pub fn set_render_callback(&self, callback: Function) {
        *self.game.view().callback.borrow_mut() = Some(callback);
    }

    pub fn acquire_deck(&self) -> Promise {
        let game = Rc::clone(&self.game);
        future_to_promise(async move {
            let result = game.acquire_deck().await.map(|_| ());
            finish(&game, result)
        })
    }

    pub fn start(&self) -> Promise {
        let game = Rc::clone(&self.game);
        future_to_promise(async move {
            let result = game.start().await.map(|_| ());
            finish(&game, result)
        })
    }

    pub fn draw_card(&self) -> Promise {
        let game = Rc::clone(&self.game);
        future_to_promise(async move {
            let result = game.draw_card().await.map(|_| ());
            finish(&game, result)
        })
    }

    pub fn end_game(&self) -> Promise {
        let game = Rc::clone(&self.game);
        future_to_promise(async move {
            let result = game.end_game().await;
            finish(&game, result)
        })
    }

    pub fn is_busy(&self) -> bool {
        self.game.is_busy()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        snapshot(&self.game)
    }
}

fn finish(game: &Controller, result: Result<(), GameError>) -> Result<JsValue, JsValue> {
    let snapshot = snapshot(game)?;
    game.view().notify(&snapshot)?;
    result.map_err(js_err)?;
    Ok(snapshot)
}

fn snapshot(game: &Controller) -> Result<JsValue, JsValue> {
    let session = game.session();
    let view = game.view().state.borrow().clone();

    let snapshot = Snapshot {
        phase: phase_to_str(session.phase),
        score: session.score,
        deck_id: session.deck.map(|deck| deck.to_string()),
        cards_remaining: session.remaining.map(|remaining| remaining as u32),
        view,
    };

    to_js_value(&snapshot)
}

/// View state mirrored to JavaScript, which owns the DOM.
#[derive(Default)]
struct BrowserView {
    state: RefCell<ViewState>,
    callback: RefCell<Option<Function>>,
}

impl BrowserView {
    fn notify(&self, snapshot: &JsValue) -> Result<(), JsValue> {
        if let Some(callback) = self.callback.borrow().as_ref() {
            callback.call1(&JsValue::NULL, snapshot)?;
        }
        Ok(())
    }
}

impl TableView for BrowserView {
    fn render_hand(&self, cards: &[Card]) {
        self.state.borrow_mut().hand = cards.iter().map(JsCard::from).collect();
    }

    fn set_visible(&self, control: Control, visible: bool) {
        let mut state = self.state.borrow_mut();
        match control {
            Control::Start => state.start_visible = visible,
            Control::Draw => state.draw_visible = visible,
            Control::Reset => state.reset_visible = visible,
        }
    }

    fn set_game_over(&self, message: Option<&str>) {
        self.state.borrow_mut().game_over = message.map(str::to_string);
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    score: u8,
    deck_id: Option<String>,
    cards_remaining: Option<u32>,
    view: ViewState,
}

#[derive(Clone, Default, Serialize)]
struct ViewState {
    hand: Vec<JsCard>,
    start_visible: bool,
    draw_visible: bool,
    reset_visible: bool,
    game_over: Option<String>,
}

#[derive(Clone, Serialize)]
struct JsCard {
    code: String,
    value: String,
    image: String,
}

impl From<&Card> for JsCard {
    fn from(card: &Card) -> Self {
        Self {
            code: card.code.clone(),
            value: card.value.clone(),
            image: card.image.clone(),
        }
    }
}

fn phase_to_str(phase: GamePhase) -> &'static str {
    match phase {
        GamePhase::Idle => "Idle",
        GamePhase::Playing => "Playing",
        GamePhase::Busted => "Busted",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
