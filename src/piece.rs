//! Piece catalog and board coordinates.
//!
//! Each player owns six physical pieces with globally unique identifiers:
//! ids 0-5 belong to Player One, ids 6-11 to Player Two. Within a player's
//! six, sizes come in pairs, so the power sequence over ids 0..6 (and again
//! over 6..12) is 1, 1, 2, 2, 3, 3. A piece id is never recreated; it is the
//! identity the engine tracks through stacks and pools.

use serde::{Deserialize, Serialize};

/// Player identifier.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    /// Get the opponent player.
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Index into two-element per-player arrays (0 or 1).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Convert from an index (0 or 1) to a Player.
    #[inline]
    pub fn from_index(idx: usize) -> Option<Player> {
        match idx {
            0 => Some(Player::One),
            1 => Some(Player::Two),
            _ => None,
        }
    }
}

/// A physical game piece, identified by its id (0-11).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Piece(pub u8);

/// Number of pieces per player.
pub const PIECES_PER_PLAYER: u8 = 6;

impl Piece {
    /// The player this piece belongs to. Pure function of the id.
    #[inline]
    pub const fn owner(self) -> Player {
        if self.0 < PIECES_PER_PLAYER {
            Player::One
        } else {
            Player::Two
        }
    }

    /// The piece's power (1, 2 or 3). Sizes pair up within each player's six.
    #[inline]
    pub const fn power(self) -> u8 {
        (self.0 % PIECES_PER_PLAYER) / 2 + 1
    }

    /// Check if this piece may be placed on top of `top` (strictly larger
    /// pieces cover, regardless of owner; equal power never covers).
    #[inline]
    pub const fn can_cover(self, top: Piece) -> bool {
        self.power() > top.power()
    }

    /// The fixed six-piece roster of a player.
    pub const fn roster(player: Player) -> [Piece; 6] {
        let base = player.index() as u8 * PIECES_PER_PLAYER;
        [
            Piece(base),
            Piece(base + 1),
            Piece(base + 2),
            Piece(base + 3),
            Piece(base + 4),
            Piece(base + 5),
        ]
    }

    /// Iterate over all 12 piece ids.
    pub fn all() -> impl Iterator<Item = Piece> {
        (0..2 * PIECES_PER_PLAYER).map(Piece)
    }
}

/// Position on the 3x3 board (0-8).
///
/// Layout:
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Pos(pub u8);

impl Pos {
    /// Create a position from row and column (0-2 each).
    #[inline]
    pub fn from_row_col(row: u8, col: u8) -> Pos {
        debug_assert!(row < 3 && col < 3);
        Pos(row * 3 + col)
    }

    /// Get the row (0-2).
    #[inline]
    pub fn row(self) -> u8 {
        self.0 / 3
    }

    /// Get the column (0-2).
    #[inline]
    pub fn col(self) -> u8 {
        self.0 % 3
    }

    /// Iterate over all 9 positions in row-major order.
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..9).map(Pos)
    }
}
