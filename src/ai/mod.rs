//! Move-selection logic: sampling, playouts, scoring, players

pub mod evaluate;
pub mod heuristic;
pub mod player;
pub mod playout;
pub mod sampler;

// Re-export key types
pub use evaluate::{evaluate, PlayerOptions, ScoredMove};
pub use player::{MonteCarloPlayer, Player, RandomPlayer, TIE_THRESHOLD};
pub use playout::rollout;
pub use sampler::{sample, WeightedOption};
