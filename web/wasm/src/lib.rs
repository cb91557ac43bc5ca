use bjlive::{
    Card, Engine, GameEvent, GameOptions, Outcome, RoundResult, Session, Winner, hand_value,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    engine: Engine,
    session: Session,
    last_result: Option<RoundResult>,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, decks: u8) -> Self {
        let options = GameOptions::default().with_decks(decks.max(1));
        Self {
            engine: Engine::new(options, seed as u64),
            session: Session::default(),
            last_result: None,
        }
    }

    pub fn initialize_game(&mut self) {
        self.engine.initialize(&mut self.session);
        self.last_result = None;
    }

    pub fn draw_card(&mut self) -> Result<JsValue, JsValue> {
        let card = self.session.draw_card().map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    pub fn hit(&mut self) -> Result<JsValue, JsValue> {
        let card = self.session.hit().map_err(js_err)?;
        to_js_value(&card_to_js(card))
    }

    pub fn player_stands(&mut self, actor: &str) -> Result<JsValue, JsValue> {
        let result = self.session.player_stands(actor).map_err(js_err)?;
        let js_result = JsRoundResult::from(&result);
        self.last_result = Some(result);
        to_js_value(&js_result)
    }

    pub fn is_game_over(&self) -> bool {
        self.session.is_game_over()
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let dealer_cards = self.session.visible_dealer_hand();

        let snapshot = Snapshot {
            state: self.session.state().name(),
            player: JsHand::from_cards(self.session.player_hand()),
            dealer: JsHand::from_cards(dealer_cards),
            dealer_hidden: self.session.dealer_hand().len() - dealer_cards.len(),
            game_over: self.session.is_game_over(),
            cards_remaining: self.session.cards_remaining() as u32,
            result: self.last_result.as_ref().map(JsRoundResult::from),
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    player: JsHand,
    dealer: JsHand,
    dealer_hidden: usize,
    game_over: bool,
    cards_remaining: u32,
    result: Option<JsRoundResult>,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u8,
}

impl JsHand {
    fn from_cards(cards: &[Card]) -> Self {
        Self {
            cards: cards.iter().copied().map(card_to_js).collect(),
            value: hand_value(cards),
        }
    }
}

#[derive(Serialize)]
struct JsEvent {
    actor: String,
    action: String,
}

impl From<&GameEvent> for JsEvent {
    fn from(event: &GameEvent) -> Self {
        Self {
            actor: event.actor.clone(),
            action: event.action.to_string(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    winner: &'static str,
    message: &'static str,
    player_value: u8,
    dealer_value: u8,
    dealer_draws: Vec<JsCard>,
    events: Vec<JsEvent>,
}

impl From<&RoundResult> for JsRoundResult {
    fn from(result: &RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            winner: winner_to_str(result.winner()),
            message: result.outcome.message(),
            player_value: result.player_value,
            dealer_value: result.dealer_value,
            dealer_draws: result.dealer_draws.iter().copied().map(card_to_js).collect(),
            events: result.events.iter().map(JsEvent::from).collect(),
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank_label(),
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBusts => "PlayerBusts",
        Outcome::DealerBusts => "DealerBusts",
        Outcome::DealerWins => "DealerWins",
        Outcome::PlayerWins => "PlayerWins",
    }
}

fn winner_to_str(winner: Winner) -> &'static str {
    match winner {
        Winner::Player => "Player",
        Winner::Dealer => "Dealer",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
