//! Test fixtures: a one-move game and scripted agents

use std::cell::RefCell;
use std::rc::Rc;

use arena_core::{Agent, ArenaError, GameState, Player};

/// Each player secretly picks a number in 0..=9, first seat first.
/// A player's result is its pick minus the opponent's.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PickGame {
    picks: [Option<i32>; 2],
}

pub const MAX_PICK: i32 = 9;

impl PickGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pick(&self, player: Player) -> Option<i32> {
        self.picks[player.index()]
    }
}

impl GameState for PickGame {
    type Action = i32;

    fn possible_actions(&self) -> Vec<i32> {
        if self.is_finished() {
            Vec::new()
        } else {
            (0..=MAX_PICK).collect()
        }
    }

    fn validate_action(&self, action: &i32) -> bool {
        !self.is_finished() && (0..=MAX_PICK).contains(action)
    }

    fn update(&mut self, action: i32) {
        let seat = self.acting_player().index();
        self.picks[seat] = Some(action);
    }

    fn is_finished(&self) -> bool {
        self.picks.iter().all(Option::is_some)
    }

    fn acting_player(&self) -> Player {
        if self.picks[0].is_none() {
            Player::First
        } else {
            Player::Second
        }
    }

    fn winner(&self) -> Option<Player> {
        match (self.picks[0]?, self.picks[1]?) {
            (a, b) if a > b => Some(Player::First),
            (a, b) if b > a => Some(Player::Second),
            _ => None,
        }
    }

    fn result(&self, player: Player) -> f64 {
        let own = self.picks[player.index()].unwrap_or(0);
        let other = self.picks[player.opponent().index()].unwrap_or(0);
        (own - other) as f64
    }

    fn no_action() -> i32 {
        -1
    }
}

/// Shared record of the hooks an agent received
pub type EventLog = Rc<RefCell<Vec<String>>>;

/// Agent that picks `start`, then one more every `every` games
pub struct PickAgent {
    name: String,
    start: i32,
    every: Option<u32>,
    games: u32,
    log: Option<EventLog>,
}

impl PickAgent {
    pub fn fixed(name: &str, value: i32) -> Self {
        Self {
            name: name.to_string(),
            start: value,
            every: None,
            games: 0,
            log: None,
        }
    }

    pub fn escalating(name: &str, start: i32, every: u32) -> Self {
        Self {
            every: Some(every),
            ..Self::fixed(name, start)
        }
    }

    pub fn with_log(mut self, log: EventLog) -> Self {
        self.log = Some(log);
        self
    }

    fn record(&self, event: String) {
        if let Some(log) = &self.log {
            log.borrow_mut().push(event);
        }
    }
}

impl Agent<PickGame> for PickAgent {
    fn name(&self) -> &str {
        &self.name
    }

    fn act(&mut self, _state: &PickGame) -> Result<i32, ArenaError> {
        // `games` already counts the game in progress
        let played = self.games.saturating_sub(1);
        let bonus = self.every.map_or(0, |every| (played / every) as i32);
        Ok(self.start + bonus)
    }

    fn on_new_game(&mut self, seat: Player) {
        self.games += 1;
        self.record(format!("{}:new_game:{:?}", self.name, seat));
    }

    fn on_action_taken(&mut self, actor: Player, action: &i32, _state: &PickGame) {
        self.record(format!("{}:saw:{:?}={}", self.name, actor, action));
    }

    fn on_game_ended(&mut self, _state: &PickGame) {
        self.record(format!("{}:ended", self.name));
    }

    fn on_new_round(&mut self, round: u32) {
        self.record(format!("{}:round:{}", self.name, round));
    }
}
