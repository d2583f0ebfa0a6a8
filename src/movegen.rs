//! Legal-move enumeration.

use crate::piece::{Piece, Player, Pos};
use crate::state::{GameState, Move};

impl GameState {
    /// Enumerate every legal move for `player`.
    ///
    /// Returns an empty list for a finished game. Candidates are the
    /// player's unused pieces (pool order) followed by their visible board
    /// tops (row-major scan order); destinations run row-major over the nine
    /// cells. A move is legal iff the destination is empty or its top is
    /// strictly smaller than the moved piece. The ordering is deterministic
    /// for reproducible search traces, but callers must not rely on it for
    /// correctness.
    pub fn legal_moves(&self, player: Player) -> Vec<Move> {
        if self.is_terminal() {
            return Vec::new();
        }

        let mine = self.player(player);

        // Unused pool first, then on-board tops in scan order. A piece is
        // never in both: the pool only holds pieces not yet placed.
        let mut candidates: Vec<(Piece, Option<Pos>)> =
            mine.unused.iter().map(|&p| (p, None)).collect();
        for pos in Pos::all() {
            if let Some(top) = self.board.top(pos) {
                if mine.owns(top) {
                    candidates.push((top, Some(pos)));
                }
            }
        }

        let mut moves = Vec::with_capacity(candidates.len() * 9);
        for to in Pos::all() {
            for &(piece, from) in &candidates {
                // A piece is never offered its own cell: it tops that stack,
                // and equal power cannot cover.
                if self.board.can_land(piece, to) {
                    moves.push(Move { piece, from, to });
                }
            }
        }

        moves
    }
}
