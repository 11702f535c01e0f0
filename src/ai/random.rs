use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::GameState;

use super::agent::Agent;
use super::policy;

/// An agent that selects uniformly at random from the available columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, state: &GameState) -> Option<usize> {
        policy::random_move(state.board(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
