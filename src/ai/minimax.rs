use crate::game::{GameState, Player};

use super::agent::Agent;
use super::heuristic::{ConnectivityHeuristic, Heuristic};

/// Sentinel bounds a search starts from. No reachable heuristic value
/// comes near them.
pub const ALPHA_SENTINEL: i32 = -10_000;
pub const BETA_SENTINEL: i32 = 10_000;

/// Depth-limited minimax with alpha-beta pruning.
///
/// Alpha and beta are threaded down the call stack, so a finished search
/// leaves no bounds behind to reset. Children are visited in ascending
/// column order, and the non-strict `>=`/`<=` updates mean the last of
/// several equal-valued siblings is the one kept.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(ConnectivityHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }

    /// Run a full search from `state` and return the child it picks, or
    /// `None` when there are no legal moves. This is the entry the game
    /// loop uses; the returned state carries no search residue and can
    /// root the next search as-is.
    pub fn best_child(&self, state: &GameState) -> Option<GameState> {
        self.search(state, self.depth, ALPHA_SENTINEL, BETA_SENTINEL).1
    }

    /// Scalar value of `state` searched to `depth`. Exposed for value
    /// inspection; equal to what an unpruned minimax would return when
    /// called with the sentinel bounds.
    pub fn value(&self, state: &GameState, depth: usize) -> i32 {
        self.search(state, depth, ALPHA_SENTINEL, BETA_SENTINEL).0
    }

    /// One minimax node. Returns the best value among the children
    /// examined and the child that produced it.
    ///
    /// Alpha and beta only prune; the returned value is the raw best, not
    /// the clamped bound. Returning the bound would make every sibling cut
    /// off below a strong move report the inherited alpha, and the
    /// non-strict tie-break above would mistake those cutoffs for
    /// equal-valued moves.
    ///
    /// A node with no legal moves or no remaining depth is a leaf and is
    /// scored by the heuristic. Win detection is deliberately not part of
    /// the search: a won position inside the tree is still evaluated
    /// heuristically, and the game loop alone decides when play stops.
    fn search(
        &self,
        state: &GameState,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<GameState>) {
        let moves = state.legal_moves();
        if moves.is_empty() || depth < 1 {
            return (self.heuristic.evaluate(state), None);
        }

        let maximizing = state.to_move() == Player::Max;
        let mut result = if maximizing {
            ALPHA_SENTINEL
        } else {
            BETA_SENTINEL
        };
        let mut best = None;

        for col in moves {
            let child = state.apply_move(col).unwrap();
            let (value, _) = self.search(&child, depth - 1, alpha, beta);

            if maximizing {
                // Non-strict: the last of equal-valued siblings is kept
                if value >= result {
                    result = value;
                    best = Some(child);
                }
                alpha = alpha.max(result);
            } else {
                if value <= result {
                    result = value;
                    best = Some(child);
                }
                beta = beta.min(result);
            }

            // Remaining siblings cannot change the outcome
            if alpha >= beta {
                break;
            }
        }

        (result, best)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let chosen = self.best_child(state);
        match chosen.as_ref().and_then(|child| child.last_move()) {
            Some((_, col)) => col,
            None => panic!("No legal actions available"),
        }
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
