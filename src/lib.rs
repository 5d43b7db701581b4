//! # Connect4
//!
//! Connect Four against a computer opponent. The opponent searches the
//! game tree with depth-limited minimax and alpha-beta pruning, scoring
//! positions by the directional connectivity of its own chips.
//!
//! ## Modules
//!
//! - [`game`] — Board, players, and the immutable game-tree state
//! - [`ai`] — Heuristic evaluator, minimax search, agent interface
//! - [`ui`] — Prompts, board rendering, interactive game loop
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod ui;
