use bjsolo::{
    Card, DealerHand, Event, Game, GameOptions, GameState, Hand, HandOutcome, HandResult,
    HandStatus, RoundResult, Seat,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(balance: u32, seed: u32) -> Self {
        Self {
            game: Game::new(GameOptions::default(), balance as usize, seed as u64),
        }
    }

    pub fn reset(&mut self, balance: u32, seed: u32) {
        self.game = Game::new(GameOptions::default(), balance as usize, seed as u64);
    }

    pub fn place_bet(&mut self, amount: u32) -> Result<(), JsValue> {
        self.game.place_bet(amount as usize).map_err(js_err)
    }

    pub fn clear_bet(&mut self) -> Result<u32, JsValue> {
        self.game
            .clear_bet()
            .map(|refund| refund as u32)
            .map_err(js_err)
    }

    pub fn deal(&mut self) -> Result<(), JsValue> {
        self.game.start_round().map_err(js_err)
    }

    pub fn hit(&mut self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&mut self) -> Result<(), JsValue> {
        self.game.stand().map_err(js_err)
    }

    pub fn double_down(&mut self) -> Result<(), JsValue> {
        self.game.double().map(|_| ()).map_err(js_err)
    }

    pub fn split(&mut self) -> Result<(), JsValue> {
        self.game.split().map_err(js_err)
    }

    pub fn clear_round(&mut self) {
        self.game.clear_round();
    }

    /// Returns queued events for the page to animate, oldest first.
    pub fn drain_events(&mut self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .game
            .drain_events()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn last_result(&self) -> Result<JsValue, JsValue> {
        let result = self.game.last_result().map(JsRoundResult::from);
        to_js_value(&result)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.game.state();
        let wagers = self.game.ledger().wagers();
        let hands = self
            .game
            .hands()
            .iter()
            .enumerate()
            .map(|(index, hand)| {
                let bet = wagers.get(index).copied().unwrap_or(0);
                JsHand::from_hand(index as u32, hand, bet as u32)
            })
            .collect();
        let actions = self.game.available_actions();

        let snapshot = Snapshot {
            state: state_to_str(state),
            active_hand: state.active_hand().map(|index| index as u32),
            balance: self.game.balance() as u32,
            wager: self.game.wager() as u32,
            hands,
            dealer: self.game.dealer_hand().map(JsDealer::from),
            actions: JsActions {
                hit: actions.hit,
                stand: actions.stand,
                double: actions.double,
                split: actions.split,
            },
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    active_hand: Option<u32>,
    balance: u32,
    wager: u32,
    hands: Vec<JsHand>,
    dealer: Option<JsDealer>,
    actions: JsActions,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsActions {
    hit: bool,
    stand: bool,
    double: bool,
    split: bool,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    asset: String,
}

#[derive(Serialize)]
struct JsHand {
    index: u32,
    cards: Vec<JsCard>,
    value: u8,
    is_soft: bool,
    status: &'static str,
    bet: u32,
    from_split: bool,
}

impl JsHand {
    fn from_hand(index: u32, hand: &Hand, bet: u32) -> Self {
        Self {
            index,
            cards: hand.cards().iter().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            status: hand_status_to_str(hand.status()),
            bet,
            from_split: hand.is_from_split(),
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    cards: Vec<Option<JsCard>>,
    visible_value: u8,
    is_blackjack: Option<bool>,
    is_bust: bool,
    hole_revealed: bool,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        let hole_revealed = dealer.is_hole_revealed();
        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (hole_revealed || index == 0).then(|| card_to_js(card)))
            .collect();

        Self {
            cards,
            visible_value: dealer.visible_value(),
            is_blackjack: hole_revealed.then(|| dealer.is_blackjack()),
            is_bust: dealer.is_bust(),
            hole_revealed,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    StateChanged {
        state: &'static str,
    },
    CardDealt {
        card: Option<JsCard>,
        seat: &'static str,
        hand_index: u32,
    },
    HoleCardRevealed {
        card: JsCard,
    },
    ScoreChanged {
        seat: &'static str,
        hand_index: u32,
        value: u8,
    },
    HandSplit,
    BalanceChanged {
        balance: u32,
        wager: u32,
    },
    RoundSettled {
        result: JsRoundResult,
    },
}

impl From<Event> for JsEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::StateChanged { state } => Self::StateChanged {
                state: state_to_str(state),
            },
            Event::CardDealt {
                card,
                seat,
                hand_index,
                face_down,
            } => Self::CardDealt {
                card: (!face_down).then(|| card_to_js(&card)),
                seat: seat_to_str(seat),
                hand_index: hand_index as u32,
            },
            Event::HoleCardRevealed { card } => Self::HoleCardRevealed {
                card: card_to_js(&card),
            },
            Event::ScoreChanged {
                seat,
                hand_index,
                value,
            } => Self::ScoreChanged {
                seat: seat_to_str(seat),
                hand_index: hand_index as u32,
                value,
            },
            Event::HandSplit => Self::HandSplit,
            Event::BalanceChanged { balance, wager } => Self::BalanceChanged {
                balance: balance as u32,
                wager: wager as u32,
            },
            Event::RoundSettled { result } => Self::RoundSettled {
                result: JsRoundResult::from(&result),
            },
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    hands: Vec<JsHandResult>,
    dealer_value: u8,
    dealer_bust: bool,
    dealer_blackjack: bool,
    total_payout: u32,
    net: i32,
}

impl From<&RoundResult> for JsRoundResult {
    fn from(result: &RoundResult) -> Self {
        Self {
            hands: result.hands.iter().map(JsHandResult::from).collect(),
            dealer_value: result.dealer_value,
            dealer_bust: result.dealer_bust,
            dealer_blackjack: result.dealer_blackjack,
            total_payout: result.total_payout as u32,
            net: result.net as i32,
        }
    }
}

#[derive(Serialize)]
struct JsHandResult {
    hand_index: u32,
    outcome: &'static str,
    message: &'static str,
    bet: u32,
    payout: u32,
    player_value: u8,
}

impl From<&HandResult> for JsHandResult {
    fn from(result: &HandResult) -> Self {
        Self {
            hand_index: result.hand_index as u32,
            outcome: outcome_to_str(result.outcome),
            message: result.outcome.message(),
            bet: result.bet as u32,
            payout: result.payout as u32,
            player_value: result.player_value,
        }
    }
}

fn card_to_js(card: &Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.label(),
        asset: card.asset_key(),
    }
}

fn seat_to_str(seat: Seat) -> &'static str {
    match seat {
        Seat::Player => "Player",
        Seat::Dealer => "Dealer",
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Betting => "Betting",
        GameState::Dealing => "Dealing",
        GameState::PlayerTurn { .. } => "PlayerTurn",
        GameState::DealerTurn => "DealerTurn",
        GameState::Settled => "Settled",
    }
}

fn hand_status_to_str(status: HandStatus) -> &'static str {
    match status {
        HandStatus::Active => "Active",
        HandStatus::Stand => "Stand",
        HandStatus::Bust => "Bust",
        HandStatus::Blackjack => "Blackjack",
    }
}

fn outcome_to_str(outcome: HandOutcome) -> &'static str {
    match outcome {
        HandOutcome::Bust => "Bust",
        HandOutcome::Blackjack => "Blackjack",
        HandOutcome::DealerBust => "DealerBust",
        HandOutcome::Win => "Win",
        HandOutcome::Lose => "Lose",
        HandOutcome::Push => "Push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
