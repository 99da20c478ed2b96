//! Players: the move-selection capability and its implementations

use rand::prelude::*;
use rand::rngs::StdRng;

use crate::core::{Board, Move};
use crate::utils::{make_rng, make_seeded_rng};

use super::evaluate::{evaluate, PlayerOptions, ScoredMove};
use super::heuristic::{most_open, positional_score};

/// Secondary scores closer than this trigger the openness tie-break.
pub const TIE_THRESHOLD: f64 = 0.5;

/// A move-selection strategy.
///
/// `next_move` never mutates `board`; all exploration happens on clones
/// the player owns. `None` means no legal move exists. Each call is
/// stateless with respect to prior calls apart from the player's random
/// stream.
pub trait Player<B: Board> {
    fn next_move(&mut self, board: &B) -> Option<Move>;
}

/// Monte Carlo player: scores every legal move with weighted random
/// playouts, then applies a positional tie-break over near-equal
/// secondary candidates.
pub struct MonteCarloPlayer {
    pub options: PlayerOptions,
    rng: StdRng,
}

impl MonteCarloPlayer {
    pub fn new(options: PlayerOptions) -> Self {
        Self {
            options,
            rng: make_rng(),
        }
    }

    /// Player with an explicit seed, for deterministic decisions.
    pub fn with_seed(options: PlayerOptions, seed: u64) -> Self {
        Self {
            options,
            rng: make_seeded_rng(seed),
        }
    }
}

impl Default for MonteCarloPlayer {
    fn default() -> Self {
        Self::new(PlayerOptions::default())
    }
}

impl<B: Board> Player<B> for MonteCarloPlayer {
    fn next_move(&mut self, board: &B) -> Option<Move> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return None;
        }

        // Primary ranking: Monte Carlo evaluation of every candidate.
        // Candidates that fail to apply on a clone are excluded; ties keep
        // the first-seen maximum.
        let mut best: Option<ScoredMove> = None;
        for &mv in &legal {
            let Some(score) = evaluate(board, mv, &self.options, &mut self.rng) else {
                continue;
            };
            if best.map_or(true, |b| score > b.score) {
                best = Some(ScoredMove { mv, score });
            }
        }

        // Secondary ranking over the candidates that apply, sorted
        // descending. The sort is stable, so equal scores keep their
        // enumeration order.
        let mut ranked: Vec<ScoredMove> = legal
            .iter()
            .filter_map(|&mv| {
                let mut copy = board.clone();
                copy.apply_move(mv).then(|| ScoredMove {
                    mv,
                    score: positional_score(board, mv),
                })
            })
            .collect();
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        Some(choose_with_tiebreak(
            board,
            &ranked,
            best.map(|b| b.mv),
            legal[0],
        ))
    }
}

/// Final selection once both rankings exist.
///
/// When the top two secondary scores sit within [`TIE_THRESHOLD`], the
/// near-tied leaders (at most three) are re-ranked by immediate openness.
/// Otherwise the primary best wins. `fallback` is the first enumerated
/// legal move, returned unverified when every candidate failed to apply;
/// a collaborator that enumerates a move it then refuses to apply would
/// make that fallback unsound.
pub(super) fn choose_with_tiebreak<B: Board>(
    board: &B,
    ranked: &[ScoredMove],
    best: Option<Move>,
    fallback: Move,
) -> Move {
    if ranked.len() >= 2 && (ranked[0].score - ranked[1].score).abs() < TIE_THRESHOLD {
        let tied = ranked
            .iter()
            .take(3)
            .take_while(|c| ranked[0].score - c.score < TIE_THRESHOLD)
            .count();
        return most_open(board, &ranked[..tied]);
    }

    best.unwrap_or(fallback)
}

/// Baseline player: uniform random choice among the legal moves
pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self { rng: make_rng() }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: make_seeded_rng(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Board> Player<B> for RandomPlayer {
    fn next_move(&mut self, board: &B) -> Option<Move> {
        let legal = board.legal_moves();
        if legal.is_empty() {
            return None;
        }
        Some(legal[self.rng.random_range(0..legal.len())])
    }
}
