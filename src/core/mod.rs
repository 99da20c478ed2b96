//! Core game representations and the board contract

pub mod board;
pub mod display;
pub mod grid;
pub mod loc;

pub use board::Board;
pub use grid::GridBoard;
pub use loc::{Dir, Loc, Move};
