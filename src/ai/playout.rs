//! Bounded weighted-random playouts

use rand::prelude::*;

use crate::core::Board;

use super::sampler::{sample, WeightedOption};

/// Run one randomized playout on `board`, which the caller must own
/// exclusively (typically a fresh clone of a candidate state).
///
/// Each step weights every legal move by `(follow_ups + 1) ^
/// explore_weight`, where `follow_ups` is the legal-move count after that
/// move. Moves that keep more options open are proportionally more likely,
/// which biases the playout toward flexible lines without any search.
/// Returns the coverage once the playout stops: terminal state, step cap,
/// or no legal moves.
pub fn rollout<B: Board>(
    board: &mut B,
    max_steps: u32,
    explore_weight: f64,
    rng: &mut impl Rng,
) -> u32 {
    let mut steps = 0;

    while !board.is_over() && steps < max_steps {
        let moves = board.legal_moves();
        if moves.is_empty() {
            break;
        }

        let weighted: Vec<WeightedOption> = moves
            .iter()
            .map(|&mv| {
                let mut probe = board.clone();
                probe.apply_move(mv);
                let follow_ups = probe.legal_moves().len();

                WeightedOption {
                    mv,
                    weight: ((follow_ups + 1) as f64).powf(explore_weight),
                }
            })
            .collect();

        let chosen = sample(&weighted, rng.random::<f64>()).mv;
        board.apply_move(chosen);
        steps += 1;
    }

    board.coverage()
}
