//! Simulator - repeated games between one pair of agents
//!
//! Level 3 - Step-level implementation

use arena_core::{Agent, ArenaError, GameState, Player};
use rustc_hash::FxHashMap;

use crate::game_runner::{GameOutcome, GameRunner};

/// Two seated agents, a fresh-state factory and the running score by name.
///
/// Scores accumulate across every game played through the simulator and
/// follow agents, not seats, when positions are swapped.
pub struct Simulator<'a, G: GameState> {
    seats: [&'a mut dyn Agent<G>; 2],
    factory: &'a dyn Fn() -> G,
    runner: GameRunner,
    scores: FxHashMap<String, f64>,
}

impl<'a, G: GameState> Simulator<'a, G> {
    pub fn new(first: &'a mut dyn Agent<G>, second: &'a mut dyn Agent<G>, factory: &'a dyn Fn() -> G) -> Self {
        let mut scores = FxHashMap::default();
        scores.insert(first.name().to_string(), 0.0);
        scores.insert(second.name().to_string(), 0.0);
        Self {
            seats: [first, second],
            factory,
            runner: GameRunner::new(),
            scores,
        }
    }

    /// Play one game from a fresh state with the current seating
    pub fn run_simulation(&mut self) -> Result<GameOutcome, ArenaError> {
        let [first, second] = &mut self.seats;
        let outcome = self.runner.play_game(&mut **first, &mut **second, (self.factory)())?;

        for seat in Player::BOTH {
            let name = self.seats[seat.index()].name();
            *self.scores.entry(name.to_string()).or_insert(0.0) += outcome.result_for(seat);
        }
        Ok(outcome)
    }

    /// Swap which agent moves first
    pub fn change_player_positions(&mut self) {
        self.seats.swap(0, 1);
    }

    /// Cumulative score by agent name
    pub fn global_score(&self) -> &FxHashMap<String, f64> {
        &self.scores
    }

    pub fn score_of(&self, name: &str) -> f64 {
        self.scores.get(name).copied().unwrap_or(0.0)
    }

    /// Both agents have exactly the same cumulative score
    pub fn is_draw(&self) -> bool {
        self.score_of(self.seats[0].name()) == self.score_of(self.seats[1].name())
    }

    /// Name of the agent in `seat`
    pub fn seated(&self, seat: Player) -> &str {
        self.seats[seat.index()].name()
    }

    pub fn games_played(&self) -> u64 {
        self.runner.games_played()
    }
}
