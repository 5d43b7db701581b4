use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns. Used as
/// a baseline opponent in tests.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let moves = state.legal_moves();
        assert!(!moves.is_empty(), "No legal actions available");
        let idx = self.rng.random_range(0..moves.len());
        moves[idx]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
