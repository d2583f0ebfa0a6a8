//! WASM bindings for gobblers-engine
//!
//! Provides a JavaScript-friendly API for the game logic. The browser UI
//! owns rendering, click handling and notifications; it calls in here to
//! validate and apply moves and to run the computer opponent.

use wasm_bindgen::prelude::*;

use crate::piece::{Piece, Player, Pos};
use crate::search;
use crate::state::{GameState, Move};

fn player_from_id(id: u8) -> Player {
    if id == 0 {
        Player::One
    } else {
        Player::Two
    }
}

/// WASM-friendly wrapper around GameState
#[wasm_bindgen]
pub struct WasmGame {
    inner: GameState,
}

#[wasm_bindgen]
impl WasmGame {
    /// Create a fresh game: empty board, both pools full
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            inner: GameState::initial(),
        }
    }

    /// Reset to the starting position
    pub fn reset(&mut self) {
        self.inner = GameState::initial();
    }

    /// Owner of a piece id (0 or 1)
    pub fn owner(piece: u8) -> u8 {
        Piece(piece).owner().index() as u8
    }

    /// Power of a piece id (1-3)
    pub fn power(piece: u8) -> u8 {
        Piece(piece).power()
    }

    /// Unused piece ids for a player (0 or 1)
    #[wasm_bindgen(js_name = unusedPieces)]
    pub fn unused_pieces(&self, player: u8) -> Vec<u8> {
        self.inner
            .player(player_from_id(player))
            .unused
            .iter()
            .map(|p| p.0)
            .collect()
    }

    /// Piece ids stacked at (row, col), bottom to top
    #[wasm_bindgen(js_name = cellStack)]
    pub fn cell_stack(&self, row: u8, col: u8) -> Vec<u8> {
        self.inner
            .board
            .cell(Pos::from_row_col(row, col))
            .pieces()
            .iter()
            .map(|p| p.0)
            .collect()
    }

    /// Visible top piece id at (row, col), or undefined for an empty cell
    #[wasm_bindgen(js_name = topPiece)]
    pub fn top_piece(&self, row: u8, col: u8) -> Option<u8> {
        self.inner.board.top(Pos::from_row_col(row, col)).map(|p| p.0)
    }

    /// Legal moves for a player as a JSON array
    /// Each move is { piece, from: [row, col] | null, to: [row, col] }
    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self, player: u8) -> JsValue {
        let moves: Vec<JsMove> = self
            .inner
            .legal_moves(player_from_id(player))
            .into_iter()
            .map(JsMove::from)
            .collect();
        serde_wasm_bindgen::to_value(&moves).unwrap()
    }

    /// Apply a move for a player. Returns true if the move was legal.
    /// For placement: apply(player, piece, null, null, toRow, toCol)
    /// For relocation: apply(player, piece, fromRow, fromCol, toRow, toCol)
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(
        &mut self,
        player: u8,
        piece: u8,
        from_row: Option<u8>,
        from_col: Option<u8>,
        to_row: u8,
        to_col: u8,
    ) -> bool {
        if piece >= 12 || to_row >= 3 || to_col >= 3 {
            return false;
        }
        let from = match (from_row, from_col) {
            (Some(fr), Some(fc)) if fr < 3 && fc < 3 => Some(Pos::from_row_col(fr, fc)),
            (None, None) => None,
            _ => return false,
        };
        let mov = Move {
            piece: Piece(piece),
            from,
            to: Pos::from_row_col(to_row, to_col),
        };
        let player = player_from_id(player);

        // Illegal clicks are ignored, not surfaced as errors
        if !self.inner.legal_moves(player).contains(&mov) {
            return false;
        }

        self.inner = self.inner.apply(player, &mov);
        true
    }

    /// Run the alpha-beta search and apply the chosen move.
    /// Returns the move as JSON, or null if the game is already over.
    #[wasm_bindgen(js_name = selectMove)]
    pub fn select_move(&mut self, player: u8, depth: u32) -> JsValue {
        let player = player_from_id(player);
        let (mov, score) = search::select_move(&self.inner, player, depth);
        match mov {
            Some(mov) => {
                self.inner = self.inner.apply(player, &mov);
                serde_wasm_bindgen::to_value(&JsSearchResult {
                    mov: JsMove::from(mov),
                    score,
                })
                .unwrap()
            }
            None => JsValue::NULL,
        }
    }

    /// Check if the game is over
    #[wasm_bindgen(js_name = isGameOver)]
    pub fn is_game_over(&self) -> bool {
        self.inner.is_terminal()
    }

    /// Position score for a player, with near-win shaping.
    /// The sign of utility(0) picks the win/lose/draw message.
    pub fn utility(&self, player: u8) -> i32 {
        self.inner.utility(player_from_id(player))
    }

    /// Winner id (0 or 1), or undefined while the game is ongoing
    pub fn winner(&self) -> Option<u8> {
        self.inner.winner().map(|p| p.index() as u8)
    }
}

impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable move for JavaScript
#[derive(serde::Serialize)]
struct JsMove {
    piece: u8,
    from: Option<[u8; 2]>,
    to: [u8; 2],
}

impl From<Move> for JsMove {
    fn from(mov: Move) -> Self {
        JsMove {
            piece: mov.piece.0,
            from: mov.from.map(|pos| [pos.row(), pos.col()]),
            to: [mov.to.row(), mov.to.col()],
        }
    }
}

/// Serializable search result for JavaScript
#[derive(serde::Serialize)]
struct JsSearchResult {
    #[serde(rename = "move")]
    mov: JsMove,
    score: i32,
}
