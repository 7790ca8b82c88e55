//! Game-specific evaluators

pub mod connect4;
pub mod tictactoe;

pub use connect4::{LineEvaluator, LineWeights, ThreatEvaluator};
pub use tictactoe::OpenLinesEvaluator;
