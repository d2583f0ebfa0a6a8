//! Immutable game state and move application.
//!
//! A `GameState` is a value: applying a move never mutates the input state,
//! it derives a structurally independent successor. The search leans on this
//! to explore many hypothetical futures from a shared ancestor without
//! aliasing hazards.

use serde::{Deserialize, Serialize};

use crate::board::{Board, PlayerState};
use crate::piece::{Piece, Player, Pos};

/// A move: which piece, where from, where to.
///
/// `from` is None for a placement out of the unused pool, or the board
/// position the piece currently tops for a relocation.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Move {
    pub piece: Piece,
    pub from: Option<Pos>,
    pub to: Pos,
}

/// Snapshot of a game: the board plus both players' piece records.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct GameState {
    pub board: Board,
    pub players: [PlayerState; 2],
}

impl GameState {
    /// The starting position: empty board, both pools full.
    pub fn initial() -> GameState {
        GameState {
            board: Board::new(),
            players: [PlayerState::new(Player::One), PlayerState::new(Player::Two)],
        }
    }

    /// Borrow a player's piece record.
    #[inline]
    pub fn player(&self, player: Player) -> &PlayerState {
        &self.players[player.index()]
    }

    /// Apply a move for `player`, deriving a new state.
    ///
    /// Legality is the move generator's contract: callers must only pass
    /// moves drawn from (or checked against) [`legal_moves`]. No re-checking
    /// happens here beyond debug assertions.
    ///
    /// [`legal_moves`]: GameState::legal_moves
    pub fn apply(&self, player: Player, mov: &Move) -> GameState {
        let mut board = self.board.clone();
        let mut players = self.players.clone();

        if let Some(from) = mov.from {
            let lifted = board.cell_mut(from).pop_top();
            debug_assert_eq!(lifted, Some(mov.piece), "source top must be the moved piece");
        }
        debug_assert!(board.can_land(mov.piece, mov.to), "destination must accept the piece");
        board.cell_mut(mov.to).push(mov.piece);

        players[player.index()].mark_used(mov.piece);

        GameState { board, players }
    }
}
