//! Positional heuristics: phase-aware scoring, edge bonus, tie-breaking

use crate::core::{Board, Move};

use super::evaluate::ScoredMove;

/// Phase-aware positional score for a candidate move.
///
/// Early game (coverage below a quarter of the board area) rewards staying
/// near the center; afterwards it rewards distance from the center, as a
/// proxy for reaching unexplored regions. The value derives from the
/// current position only, so every candidate on a given state shares it;
/// the move argument is part of the scoring contract.
pub fn positional_score<B: Board>(board: &B, _mv: Move) -> f64 {
    let size = board.size();
    let early_game = board.coverage() < (size * size / 4) as u32;
    let center_dist = board.loc().center_dist(size);

    if early_game {
        size as f64 - center_dist
    } else {
        center_dist
    }
}

/// True when `mv` strictly decreases the distance to a row edge or a
/// column edge of the board.
pub fn moves_toward_edge<B: Board>(board: &B, mv: Move) -> bool {
    let size = board.size();
    let cur = board.loc();
    let next = cur + mv;

    let closer_to_row_edge = next.row_edge_dist(size) < cur.row_edge_dist(size);
    let closer_to_col_edge = next.col_edge_dist(size) < cur.col_edge_dist(size);

    closer_to_row_edge || closer_to_col_edge
}

/// Tie-breaker: among `candidates`, pick the move whose application leaves
/// the most follow-up moves; the first seen wins ties.
///
/// `candidates` must be non-empty; callers guarantee that.
pub fn most_open<B: Board>(board: &B, candidates: &[ScoredMove]) -> Move {
    let mut best = candidates[0].mv;
    let mut max_options = -1;

    for candidate in candidates {
        let mut copy = board.clone();
        copy.apply_move(candidate.mv);

        let options = copy.legal_moves().len() as i64;
        if options > max_options {
            max_options = options;
            best = candidate.mv;
        }
    }

    best
}
