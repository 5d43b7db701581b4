//! The computer opponent: heuristic evaluation and alpha-beta search,
//! behind a small agent interface.

mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{ConnectivityHeuristic, Heuristic, BLOCK_BONUS, WIN_SCORE};
pub use minimax::{MinimaxAgent, ALPHA_SENTINEL, BETA_SENTINEL};
pub use random::RandomAgent;
