//! Match play - all games between two agents in one round
//!
//! Level 2 - Phase-level implementation

use arena_core::{Agent, ArenaError, GameState, Player};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::TournamentConfig;
use crate::simulator::Simulator;

/// Extra iterations between "still tied" warnings
const DRAW_WARN_INTERVAL: u32 = 100;

/// Result of one pairing (every iteration, mirrored games and draw retries)
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PairingRecord {
    /// Agent enumerated first; sits in seat `First` for primary games
    pub first: String,
    pub second: String,
    pub first_score: f64,
    pub second_score: f64,
    pub games: u32,
    pub iterations: u32,
    /// Iterations played beyond `num_iterations` because of a tie
    pub draw_retries: u32,
}

impl PairingRecord {
    /// Totals are exactly equal
    pub fn is_draw(&self) -> bool {
        self.first_score == self.second_score
    }
}

/// Play a pairing (Level 2 phase)
///
/// Each iteration plays a primary game with `first` in seat `First` and,
/// when seat permutation is on, a mirrored game with the seats swapped.
/// After `num_iterations` iterations the pairing keeps going while the two
/// totals are exactly tied, up to `max_draw_retries` extra iterations if a
/// cap is configured.
pub fn play_pairing<G: GameState>(
    first: &mut dyn Agent<G>,
    second: &mut dyn Agent<G>,
    factory: &dyn Fn() -> G,
    config: &TournamentConfig,
) -> Result<PairingRecord, ArenaError> {
    let first_name = first.name().to_string();
    let second_name = second.name().to_string();
    let mut sim = Simulator::new(first, second, factory);

    let min_iterations = config.min_iterations();
    let mut iterations = 0u32;
    let mut draw_retries = 0u32;

    loop {
        iterations += 1;
        play_iteration(&mut sim, iterations, config)?;

        if iterations < min_iterations {
            continue;
        }
        if !sim.is_draw() {
            break;
        }

        if config.max_draw_retries.is_some_and(|cap| draw_retries >= cap) {
            warn!(
                "{} vs {} still tied after {} draw retries, giving up",
                first_name, second_name, draw_retries
            );
            break;
        }
        draw_retries += 1;
        if draw_retries % DRAW_WARN_INTERVAL == 0 {
            warn!(
                "{} vs {} still tied after {} draw retries",
                first_name, second_name, draw_retries
            );
        }
    }

    let record = PairingRecord {
        first_score: sim.score_of(&first_name),
        second_score: sim.score_of(&second_name),
        first: first_name,
        second: second_name,
        games: sim.games_played() as u32,
        iterations,
        draw_retries,
    };
    debug!(
        "pairing {} vs {}: {} - {} over {} games",
        record.first, record.second, record.first_score, record.second_score, record.games
    );
    Ok(record)
}

// ============================================================================
// Level 3 - Steps
// ============================================================================

/// Primary game, then the mirrored game with seats swapped back afterwards
fn play_iteration<G: GameState>(
    sim: &mut Simulator<'_, G>,
    iteration: u32,
    config: &TournamentConfig,
) -> Result<(), ArenaError> {
    play_logged(sim, iteration, config)?;

    if config.seat_permutation {
        sim.change_player_positions();
        let mirrored = play_logged(sim, iteration, config);
        sim.change_player_positions();
        mirrored?;
    }
    Ok(())
}

fn play_logged<G: GameState>(
    sim: &mut Simulator<'_, G>,
    iteration: u32,
    config: &TournamentConfig,
) -> Result<(), ArenaError> {
    let outcome = sim.run_simulation()?;
    let (first, second) = (sim.seated(Player::First), sim.seated(Player::Second));
    let winner = outcome.winner.map_or("draw", |seat| sim.seated(seat));

    if config.verbose {
        info!(
            "iteration {}: {} vs {} -> {} ({} plies)",
            iteration, first, second, winner, outcome.plies
        );
    } else {
        debug!(
            "iteration {}: {} vs {} -> {} ({} plies)",
            iteration, first, second, winner, outcome.plies
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{EventLog, PickAgent, PickGame};

    fn pair(
        a: &mut PickAgent,
        b: &mut PickAgent,
        config: &TournamentConfig,
    ) -> Result<PairingRecord, ArenaError> {
        play_pairing::<PickGame>(a, b, &PickGame::new, config)
    }

    #[test]
    fn test_single_iteration_with_mirror() {
        let mut a = PickAgent::fixed("a", 9);
        let mut b = PickAgent::fixed("b", 0);

        let record = pair(&mut a, &mut b, &TournamentConfig::default()).unwrap();

        assert_eq!(record.first, "a");
        assert_eq!(record.games, 2);
        assert_eq!(record.iterations, 1);
        assert_eq!(record.draw_retries, 0);
        assert_eq!(record.first_score, 18.0);
        assert_eq!(record.second_score, -18.0);
        assert!(!record.is_draw());
    }

    #[test]
    fn test_without_seat_permutation() {
        let mut a = PickAgent::fixed("a", 3);
        let mut b = PickAgent::fixed("b", 1);
        let config = TournamentConfig::default()
            .with_seat_permutation(false)
            .with_iterations(3);

        let record = pair(&mut a, &mut b, &config).unwrap();

        assert_eq!(record.games, 3);
        assert_eq!(record.iterations, 3);
        assert_eq!(record.first_score, 6.0);
    }

    #[test]
    fn test_primary_game_keeps_first_agent_in_first_seat() {
        let log = EventLog::default();
        let mut a = PickAgent::fixed("a", 2).with_log(log.clone());
        let mut b = PickAgent::fixed("b", 1);
        let config = TournamentConfig::default().with_iterations(2);

        pair(&mut a, &mut b, &config).unwrap();

        let seats: Vec<String> = log
            .borrow()
            .iter()
            .filter(|e| e.contains("new_game"))
            .cloned()
            .collect();
        assert_eq!(
            seats,
            vec![
                "a:new_game:First",
                "a:new_game:Second",
                "a:new_game:First",
                "a:new_game:Second",
            ]
        );
    }

    #[test]
    fn test_draw_retry_until_tie_breaks() {
        // Picks 5 in games 1-2, 6 in games 3-4
        let mut climber = PickAgent::escalating("climber", 5, 2);
        let mut steady = PickAgent::fixed("steady", 5);

        let record = pair(&mut climber, &mut steady, &TournamentConfig::default()).unwrap();

        assert_eq!(record.iterations, 2);
        assert_eq!(record.draw_retries, 1);
        assert_eq!(record.games, 4);
        assert_eq!(record.first_score, 2.0);
        assert_eq!(record.second_score, -2.0);
    }

    #[test]
    fn test_draw_retry_cap() {
        let mut a = PickAgent::fixed("a", 5);
        let mut b = PickAgent::fixed("b", 5);
        let config = TournamentConfig::default().with_max_draw_retries(3);

        let record = pair(&mut a, &mut b, &config).unwrap();

        assert_eq!(record.iterations, 4);
        assert_eq!(record.draw_retries, 3);
        assert_eq!(record.games, 8);
        assert!(record.is_draw());
    }

    #[test]
    fn test_tie_after_minimum_iterations_only() {
        // Iteration 1 ties but the minimum of 2 is played before checking
        let mut climber = PickAgent::escalating("climber", 5, 2);
        let mut steady = PickAgent::fixed("steady", 5);
        let config = TournamentConfig::default().with_iterations(2);

        let record = pair(&mut climber, &mut steady, &config).unwrap();

        assert_eq!(record.iterations, 2);
        assert_eq!(record.draw_retries, 0);
    }

    #[test]
    fn test_agent_error_propagates() {
        let mut cheat = PickAgent::fixed("cheat", 99);
        let mut honest = PickAgent::fixed("honest", 1);

        let err = pair(&mut honest, &mut cheat, &TournamentConfig::default()).unwrap_err();
        assert_eq!(err, ArenaError::InvalidAction { action: "99".into() });
    }
}
