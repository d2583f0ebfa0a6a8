//! Depth-limited alpha-beta move selection.

use crate::piece::Player;
use crate::state::{GameState, Move};

/// Pick the best move for `player`, searching `depth` plies ahead.
///
/// Returns the chosen move and its score from `player`'s perspective.
/// Leaves are scored with [`GameState::utility_simple`]; the richer shaped
/// evaluator is reserved for end-of-game reporting. A terminal position (or
/// a zero depth limit) yields `(None, utility_simple)` rather than an error,
/// since the search can legitimately be asked about a finished game.
///
/// The search runs to completion on the calling thread; the depth limit is
/// the sole bound on cost.
pub fn select_move(state: &GameState, player: Player, depth: u32) -> (Option<Move>, i32) {
    let mut nodes = 0u64;
    let (mov, score) = alphabeta(state, player, i32::MIN, i32::MAX, depth, true, &mut nodes);
    log::debug!(
        "alpha-beta depth {} visited {} nodes, chose {:?} (score {})",
        depth,
        nodes,
        mov,
        score
    );
    (mov, score)
}

/// One recursive step. `maximizing` selects whose turn it is: the
/// perspective player maximizes, the opponent minimizes. Scores are always
/// from the perspective player's point of view.
fn alphabeta(
    state: &GameState,
    perspective: Player,
    mut alpha: i32,
    mut beta: i32,
    depth: u32,
    maximizing: bool,
    nodes: &mut u64,
) -> (Option<Move>, i32) {
    *nodes += 1;

    let mover = if maximizing {
        perspective
    } else {
        perspective.opponent()
    };
    let moves = state.legal_moves(mover);

    if depth == 0 || moves.is_empty() {
        return (None, state.utility_simple(perspective));
    }

    let mut best_move = None;

    if maximizing {
        let mut best = i32::MIN;
        for mov in moves {
            let child = state.apply(mover, &mov);
            let (_, score) = alphabeta(&child, perspective, alpha, beta, depth - 1, false, nodes);
            if score > best {
                best = score;
                best_move = Some(mov);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
            }
        }
        (best_move, best)
    } else {
        let mut best = i32::MAX;
        for mov in moves {
            let child = state.apply(mover, &mov);
            let (_, score) = alphabeta(&child, perspective, alpha, beta, depth - 1, true, nodes);
            if score < best {
                best = score;
                best_move = Some(mov);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (best_move, best)
    }
}
