//! CLI blackjack against the Deck of Cards API.
//!
//! Set `DECKJACK_API_URL` to use another Deck Service and `RUST_LOG=debug` to
//! see every request.

use std::cell::RefCell;
use std::collections::HashSet;
use std::io::{self, Write};

use deckjack::{Card, Control, GameController, GameError, GameOptions, HttpDeckService, TableView};
use tracing_subscriber::EnvFilter;

#[derive(Default)]
struct TerminalView {
    visible: RefCell<HashSet<Control>>,
}

impl TerminalView {
    fn is_visible(&self, control: Control) -> bool {
        self.visible.borrow().contains(&control)
    }
}

impl TableView for TerminalView {
    fn render_hand(&self, cards: &[Card]) {
        println!("Hand: {}", format_hand(cards));
    }

    fn set_visible(&self, control: Control, visible: bool) {
        let mut controls = self.visible.borrow_mut();
        if visible {
            controls.insert(control);
        } else {
            controls.remove(&control);
        }
    }

    fn set_game_over(&self, message: Option<&str>) {
        if let Some(message) = message {
            println!("{}", colorize(message, "31"));
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let options = GameOptions::from_env();
    let service = HttpDeckService::from_options(&options);
    let game = GameController::new(service, TerminalView::default(), options);

    match game.acquire_deck().await {
        Ok(deck) => println!("Got deck {deck}."),
        Err(err) => {
            println!("Could not get a deck: {err}");
            return;
        }
    }

    loop {
        let input = prompt_line(&format!("{} > ", format_actions(game.view())));
        let view = game.view();

        let result: Result<(), GameError> = match input.as_str() {
            "s" | "start" if view.is_visible(Control::Start) => game
                .start()
                .await
                .map(|score| println!("Score: {score}")),
            "h" | "hit" if view.is_visible(Control::Draw) => {
                game.draw_card().await.map(|outcome| {
                    println!(
                        "Drew {} (+{}). Score: {}",
                        format_card(&outcome.card),
                        outcome.value,
                        outcome.score
                    );
                })
            }
            "r" | "reset" if view.is_visible(Control::Reset) => game
                .end_game()
                .await
                .map(|()| println!("Cards returned and reshuffled.")),
            "q" | "quit" | "" => {
                println!("Goodbye.");
                break;
            }
            _ => {
                println!("Unavailable action.");
                Ok(())
            }
        };

        if let Err(err) = result {
            println!("Error: {err}");
        }
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }

    input.trim().to_lowercase()
}

fn format_actions(view: &TerminalView) -> String {
    [
        ("[s]tart", Control::Start),
        ("[h]it", Control::Draw),
        ("[r]eset", Control::Reset),
    ]
    .into_iter()
    .filter(|(_, control)| view.is_visible(*control))
    .map(|(label, _)| label)
    .chain(["[q]uit"])
    .collect::<Vec<_>>()
    .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\x1b[{code}m{text}\x1b[0m")
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards.iter().map(format_card).collect::<Vec<_>>().join(" ")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit.as_str() {
        "HEARTS" => ("H", "31"),
        "DIAMONDS" => ("D", "31"),
        "CLUBS" => ("C", "32"),
        "SPADES" => ("S", "34"),
        _ => ("?", "0"),
    };

    let rank = match card.value.as_str() {
        "ACE" => "A",
        "JACK" => "J",
        "QUEEN" => "Q",
        "KING" => "K",
        other => other,
    };

    colorize(&format!("{rank}{suit}"), color_code)
}
