//! Contract the decision engine requires from a rules implementation

use super::loc::{Loc, Move};

/// A playable board state.
///
/// The engine never owns the real game; it receives a board, clones it,
/// and explores the clones. `Clone` must produce a fully independent deep
/// copy: mutating a clone never affects the source.
pub trait Board: Clone {
    /// Enumerate the legal moves for this state. The order must be stable
    /// for a given state; the engine depends on determinism, not on any
    /// particular ordering.
    fn legal_moves(&self) -> Vec<Move>;

    /// Apply `mv` in place, returning whether it succeeded. On failure the
    /// state is unspecified and the caller must not use it further.
    fn apply_move(&mut self, mv: Move) -> bool;

    /// True when no further play is possible.
    fn is_over(&self) -> bool;

    /// Number of distinct cells visited so far. Non-decreasing along any
    /// sequence of successfully applied moves.
    fn coverage(&self) -> u32;

    /// Current agent position.
    fn loc(&self) -> Loc;

    /// Side length of the square board.
    fn size(&self) -> usize;
}
