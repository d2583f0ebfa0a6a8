//! Gobblet Gobblers engine with identified pieces.
//!
//! A two-player stacking tic-tac-toe variant: each player owns six pieces
//! (two each of powers 1, 2 and 3) and a strictly larger piece may land on
//! and "gobble" a smaller one, regardless of owner. Pieces carry globally
//! unique identifiers so a specific physical piece can be tracked through
//! stacks and pools:
//!
//! ```text
//! id:     0  1  2  3  4  5   6  7  8  9  10 11
//! owner:  ----- Player One ----- ----- Player Two -----
//! power:  1  1  2  2  3  3   1  1  2  2  3  3
//! ```
//!
//! The engine is a set of pure functions over immutable [`GameState`]
//! values: every move application derives a fresh state, so the alpha-beta
//! search can branch from a shared ancestor without corrupting siblings.
//! The host UI owns rendering and input; it validates candidate moves
//! against [`GameState::legal_moves`] before calling [`GameState::apply`],
//! and asks [`search::select_move`] for the computer side.
//!
//! ```
//! use gobblers_engine::{search, GameState, Player};
//!
//! let state = GameState::initial();
//! let human = state.legal_moves(Player::One)[0];
//! let state = state.apply(Player::One, &human);
//!
//! let (reply, _score) = search::select_move(&state, Player::Two, 3);
//! let state = state.apply(Player::Two, &reply.unwrap());
//! assert!(!state.is_terminal());
//! ```

pub mod board;
pub mod eval;
pub mod movegen;
pub mod piece;
pub mod search;
pub mod state;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use board::{Board, Cell, PlayerState};
pub use eval::{WIN_LINES, WIN_SCORE};
pub use piece::{Piece, Player, Pos};
pub use state::{GameState, Move};
