//! Game runner - executes single games
//!
//! Level 3 - Step-level implementation

use arena_core::{Agent, ArenaError, GameState, Player};
use serde::Serialize;

/// Outcome of a single game
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameOutcome {
    /// Signed result per seat, indexed by [`Player::index`]
    pub results: [f64; 2],
    /// Winning seat (None for draw)
    pub winner: Option<Player>,
    /// Actions applied
    pub plies: u32,
}

impl GameOutcome {
    /// Result for the agent in `seat`
    pub fn result_for(&self, seat: Player) -> f64 {
        self.results[seat.index()]
    }

    pub fn is_draw(&self) -> bool {
        self.winner.is_none()
    }
}

/// Plays games between two agents on a canonical state
#[derive(Debug, Default)]
pub struct GameRunner {
    games_played: u64,
}

impl GameRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Play `initial` to completion, `first` in seat `Player::First`.
    ///
    /// Every action is validated before it touches the canonical state; an
    /// agent that proposes an illegal action ends the game with
    /// [`ArenaError::InvalidAction`].
    pub fn play_game<G: GameState>(
        &mut self,
        first: &mut dyn Agent<G>,
        second: &mut dyn Agent<G>,
        initial: G,
    ) -> Result<GameOutcome, ArenaError> {
        let mut state = initial;
        let mut plies = 0u32;

        first.on_new_game(Player::First);
        second.on_new_game(Player::Second);

        while !state.is_finished() {
            let actor = state.acting_player();
            let action = match actor {
                Player::First => first.act(&state)?,
                Player::Second => second.act(&state)?,
            };

            if !state.validate_action(&action) {
                return Err(ArenaError::invalid_action(&action));
            }
            state.update(action);
            plies += 1;

            first.on_action_taken(actor, &action, &state);
            second.on_action_taken(actor, &action, &state);
        }

        first.on_game_ended(&state);
        second.on_game_ended(&state);
        self.games_played += 1;

        Ok(GameOutcome {
            results: [state.result(Player::First), state.result(Player::Second)],
            winner: state.winner(),
            plies,
        })
    }

    /// Games completed by this runner
    pub fn games_played(&self) -> u64 {
        self.games_played
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{EventLog, PickAgent, PickGame};
    use arena_core::{FirstLegalAgent, SearchAgent, SearchConfig, TicTacToe};
    use arena_core::heuristics::OpenLinesEvaluator;

    #[test]
    fn test_play_game_reports_results_per_seat() {
        let mut a = PickAgent::fixed("a", 7);
        let mut b = PickAgent::fixed("b", 3);
        let mut runner = GameRunner::new();

        let outcome = runner.play_game(&mut a, &mut b, PickGame::new()).unwrap();

        assert_eq!(outcome.results, [4.0, -4.0]);
        assert_eq!(outcome.winner, Some(Player::First));
        assert_eq!(outcome.plies, 2);
        assert_eq!(outcome.result_for(Player::Second), -4.0);
        assert!(!outcome.is_draw());
        assert_eq!(runner.games_played(), 1);
    }

    #[test]
    fn test_hooks_fire_in_order() {
        let log = EventLog::default();
        let mut a = PickAgent::fixed("a", 1).with_log(log.clone());
        let mut b = PickAgent::fixed("b", 1).with_log(log.clone());

        let outcome = GameRunner::new().play_game(&mut a, &mut b, PickGame::new()).unwrap();
        assert!(outcome.is_draw());

        let events = log.borrow();
        assert_eq!(
            *events,
            vec![
                "a:new_game:First",
                "b:new_game:Second",
                "a:saw:First=1",
                "b:saw:First=1",
                "a:saw:Second=1",
                "b:saw:Second=1",
                "a:ended",
                "b:ended",
            ]
        );
    }

    #[test]
    fn test_invalid_action_never_applied() {
        let log = EventLog::default();
        let mut cheat = PickAgent::fixed("cheat", 42).with_log(log.clone());
        let mut honest = PickAgent::fixed("honest", 1);
        let mut runner = GameRunner::new();

        let err = runner.play_game(&mut cheat, &mut honest, PickGame::new()).unwrap_err();

        assert_eq!(err, ArenaError::InvalidAction { action: "42".into() });
        // No action was observed and the game never completed
        assert_eq!(*log.borrow(), vec!["cheat:new_game:First"]);
        assert_eq!(runner.games_played(), 0);
    }

    #[test]
    fn test_search_agent_beats_first_legal_at_tictactoe() {
        let mut search: SearchAgent<TicTacToe, _> =
            SearchAgent::new("search", SearchConfig::alpha_beta(4), OpenLinesEvaluator);
        let mut naive = FirstLegalAgent::new("naive");

        let outcome = GameRunner::new()
            .play_game::<TicTacToe>(&mut naive, &mut search, TicTacToe::new())
            .unwrap();

        assert_eq!(outcome.winner, Some(Player::Second));
        assert_eq!(outcome.results, [-1.0, 1.0]);
    }
}
