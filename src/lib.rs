//! Rover - decision engine for a grid-coverage game

pub mod ai;
pub mod core;
pub mod engine;
pub mod utils;

// Re-export commonly used items
pub use ai::{MonteCarloPlayer, Player, RandomPlayer};
pub use core::{Board, GridBoard, Loc, Move};
pub use engine::Engine;
