//! Board cells, piece stacks, and per-player pools.
//!
//! A cell holds a stack of pieces, bottom to top; only the top piece is
//! visible and playable against. Because every cover must be strictly
//! larger, a stack is strictly increasing in power and never exceeds three
//! pieces. An empty cell is an empty stack, not a sentinel id.

use serde::{Deserialize, Serialize};

use crate::piece::{Piece, Player, Pos};

/// A single board cell: a stack of pieces, bottom to top.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Cell(Vec<Piece>);

impl Cell {
    /// The visible top piece, or None for an empty cell.
    #[inline]
    pub fn top(&self) -> Option<Piece> {
        self.0.last().copied()
    }

    /// Push a piece onto the stack. Does NOT validate the cover rule;
    /// legality is the move generator's contract.
    #[inline]
    pub fn push(&mut self, piece: Piece) {
        self.0.push(piece);
    }

    /// Remove and return the top piece, or None if empty.
    #[inline]
    pub fn pop_top(&mut self) -> Option<Piece> {
        self.0.pop()
    }

    /// Check if the cell holds no pieces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The pieces in this cell, bottom to top.
    #[inline]
    pub fn pieces(&self) -> &[Piece] {
        &self.0
    }
}

/// The 3x3 board: 9 cells in row-major order.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Board {
        Board {
            cells: std::array::from_fn(|_| Cell::default()),
        }
    }

    /// Borrow the cell at a position.
    #[inline]
    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[pos.0 as usize]
    }

    /// Mutably borrow the cell at a position.
    #[inline]
    pub fn cell_mut(&mut self, pos: Pos) -> &mut Cell {
        &mut self.cells[pos.0 as usize]
    }

    /// The visible top piece at a position, or None if the cell is empty.
    #[inline]
    pub fn top(&self, pos: Pos) -> Option<Piece> {
        self.cell(pos).top()
    }

    /// Check if a piece may land on a position: the cell is empty or the
    /// visible top is strictly smaller.
    #[inline]
    pub fn can_land(&self, piece: Piece, pos: Pos) -> bool {
        match self.top(pos) {
            None => true,
            Some(top) => piece.can_cover(top),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// One player's piece records: the fixed roster and the unused pool.
///
/// `pieces` never changes over a game. `unused` only shrinks: a placed piece
/// never returns to the pool (there is no retrieval move).
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PlayerState {
    /// The full six-piece roster this player owns. Invariant for the game.
    pub pieces: [Piece; 6],
    /// Roster pieces not yet placed on the board, in pool order.
    pub unused: Vec<Piece>,
}

impl PlayerState {
    /// Create the starting record for a player: full roster, full pool.
    pub fn new(player: Player) -> PlayerState {
        let pieces = Piece::roster(player);
        PlayerState {
            pieces,
            unused: pieces.to_vec(),
        }
    }

    /// Roster membership test. Win detection and move generation key off
    /// this, not `Piece::owner`, so the two fixed pools partition the ids.
    #[inline]
    pub fn owns(&self, piece: Piece) -> bool {
        self.pieces.contains(&piece)
    }

    /// Check if a roster piece is still in the unused pool.
    #[inline]
    pub fn is_unused(&self, piece: Piece) -> bool {
        self.unused.contains(&piece)
    }

    /// Remove a piece from the unused pool. No-op if already placed.
    pub fn mark_used(&mut self, piece: Piece) {
        self.unused.retain(|&p| p != piece);
    }
}
