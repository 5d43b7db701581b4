//! Core game logic: board representation, player identities, and the
//! immutable game-tree node the search operates on.

mod board;
mod player;
mod state;

pub use board::{
    Board, Cell, MoveError, AXES, COLS, DIAGONAL_DOWN, DIAGONAL_UP, HORIZONTAL, ROWS, VERTICAL,
};
pub use player::Player;
pub use state::GameState;
