//! Win detection and position scoring.
//!
//! A line is completed when all three of its visible tops come from one
//! player's fixed roster. Roster membership, not `Piece::owner`, is the
//! test: the twelve ids are partitioned between the two six-piece pools and
//! win checks key off that partition.

use crate::piece::{Player, Pos};
use crate::state::GameState;

/// Score for a completed line, from the winner's perspective.
pub const WIN_SCORE: i32 = 1000;

/// Heuristic bonus for an unopposed two-in-a-line.
const LINE_OF_TWO_SCORE: i32 = 100;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
pub const WIN_LINES: [[Pos; 3]; 8] = [
    [Pos(0), Pos(1), Pos(2)], // Row 0
    [Pos(3), Pos(4), Pos(5)], // Row 1
    [Pos(6), Pos(7), Pos(8)], // Row 2
    [Pos(0), Pos(3), Pos(6)], // Col 0
    [Pos(1), Pos(4), Pos(7)], // Col 1
    [Pos(2), Pos(5), Pos(8)], // Col 2
    [Pos(0), Pos(4), Pos(8)], // Main diagonal
    [Pos(2), Pos(4), Pos(6)], // Anti-diagonal
];

impl GameState {
    /// Check if `player` tops every cell of the given line.
    fn line_complete(&self, line: &[Pos; 3], player: Player) -> bool {
        line.iter().all(|&pos| match self.board.top(pos) {
            Some(top) => self.player(player).owns(top),
            None => false,
        })
    }

    /// Count `player`'s visible tops in a line.
    fn line_count(&self, line: &[Pos; 3], player: Player) -> u8 {
        line.iter()
            .filter(|&&pos| {
                self.board
                    .top(pos)
                    .is_some_and(|top| self.player(player).owns(top))
            })
            .count() as u8
    }

    /// Check if the game is over: some line is fully topped by one player.
    pub fn is_terminal(&self) -> bool {
        WIN_LINES.iter().any(|line| {
            self.line_complete(line, Player::One) || self.line_complete(line, Player::Two)
        })
    }

    /// The player holding a completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        for line in &WIN_LINES {
            if self.line_complete(line, Player::One) {
                return Some(Player::One);
            }
            if self.line_complete(line, Player::Two) {
                return Some(Player::Two);
            }
        }
        None
    }

    /// Score the position from `perspective`'s point of view.
    ///
    /// A completed line is worth +-1000 (lines scanned in fixed order,
    /// opponent checked before self within each line). Otherwise each line
    /// holding exactly two of one player's tops and none of the other's
    /// contributes +-100. The heuristic part is perspective-relative and not
    /// antisymmetric; only the win/loss part is.
    pub fn utility(&self, perspective: Player) -> i32 {
        let opponent = perspective.opponent();

        for line in &WIN_LINES {
            if self.line_complete(line, opponent) {
                return -WIN_SCORE;
            }
            if self.line_complete(line, perspective) {
                return WIN_SCORE;
            }
        }

        let mut score = 0;
        for line in &WIN_LINES {
            let own = self.line_count(line, perspective);
            let theirs = self.line_count(line, opponent);
            if theirs == 2 && own == 0 {
                score -= LINE_OF_TWO_SCORE;
            } else if own == 2 && theirs == 0 {
                score += LINE_OF_TWO_SCORE;
            }
        }
        score
    }

    /// Cheap leaf evaluator for the search: +-1000 on a completed line,
    /// exactly 0 for every other position.
    pub fn utility_simple(&self, perspective: Player) -> i32 {
        let opponent = perspective.opponent();

        for line in &WIN_LINES {
            if self.line_complete(line, opponent) {
                return -WIN_SCORE;
            }
            if self.line_complete(line, perspective) {
                return WIN_SCORE;
            }
        }
        0
    }
}
