//! Primary scoring of candidate moves

use rand::prelude::*;

use crate::core::{Board, Move};

use super::heuristic::moves_toward_edge;
use super::playout::rollout;

/// Tunables for the Monte Carlo player
#[derive(Debug, Clone)]
pub struct PlayerOptions {
    /// Independent playouts per candidate move
    pub playouts: u32,
    /// Step cap for a single playout
    pub max_steps: u32,
    /// Exponent favoring playout moves that open more follow-ups
    pub explore_weight: f64,
    /// Weight on the legal-move count immediately after a candidate
    pub future_moves_weight: f64,
}

impl Default for PlayerOptions {
    fn default() -> Self {
        Self {
            playouts: 20,
            max_steps: 250,
            explore_weight: 1.2,
            future_moves_weight: 0.8,
        }
    }
}

/// A move paired with a score
#[derive(Debug, Clone, Copy)]
pub struct ScoredMove {
    pub mv: Move,
    pub score: f64,
}

/// Score one candidate move: average playout coverage, plus the weighted
/// count of moves it immediately opens up, plus a bonus when it heads
/// toward a board edge.
///
/// Returns `None` when the move fails to apply on a clone; the candidate
/// is then excluded from consideration rather than treated as an error.
pub fn evaluate<B: Board>(
    board: &B,
    mv: Move,
    opts: &PlayerOptions,
    rng: &mut impl Rng,
) -> Option<f64> {
    let mut after = board.clone();
    if !after.apply_move(mv) {
        return None;
    }

    let openness = after.legal_moves().len() as f64 * opts.future_moves_weight;

    let mut total_coverage = 0.0;
    for _ in 0..opts.playouts {
        let mut playout_board = after.clone();
        total_coverage += rollout(&mut playout_board, opts.max_steps, opts.explore_weight, rng) as f64;
    }
    let avg_coverage = total_coverage / opts.playouts as f64;

    let edge_bonus = if moves_toward_edge(board, mv) {
        1.0
    } else {
        0.0
    };

    Some(avg_coverage + openness + edge_bonus)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridBoard;
    use crate::utils::make_seeded_rng;

    #[test]
    fn test_evaluate_fails_on_unappliable_move() {
        let board = GridBoard::from_fen("3 0,0 -").unwrap();
        let mut rng = make_seeded_rng(5);
        assert_eq!(
            evaluate(&board, Move::new(-1, 0), &PlayerOptions::default(), &mut rng),
            None
        );
    }

    #[test]
    fn test_evaluate_combines_terms() {
        // With a zero step cap every playout returns the post-move
        // coverage, so the score is exact: coverage + openness + edge.
        let board = GridBoard::new(3);
        let opts = PlayerOptions {
            playouts: 3,
            max_steps: 0,
            ..Default::default()
        };
        let mut rng = make_seeded_rng(5);

        // (1,1) -> (1,2): coverage 2, four follow-up moves, and the move
        // closes in on the column edge.
        let score = evaluate(&board, Move::new(0, 1), &opts, &mut rng).unwrap();
        let expected = 2.0 + 4.0 * 0.8 + 1.0;
        assert!((score - expected).abs() < 1e-12);
    }

    #[test]
    fn test_evaluate_does_not_touch_the_input() {
        let board = GridBoard::new(5);
        let before = board.clone();
        let opts = PlayerOptions {
            playouts: 2,
            max_steps: 20,
            ..Default::default()
        };
        let mut rng = make_seeded_rng(5);

        evaluate(&board, Move::new(0, 1), &opts, &mut rng).unwrap();
        assert_eq!(board, before);
    }
}
