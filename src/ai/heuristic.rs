use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::GameState;

use super::agent::Agent;
use super::policy;

/// An agent applying the four-tier greedy policy: win now, block the
/// opponent, maximize its own run, otherwise play at random.
pub struct HeuristicAgent {
    rng: StdRng,
}

impl HeuristicAgent {
    pub fn new() -> Self {
        HeuristicAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        HeuristicAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for HeuristicAgent {
    fn select_column(&mut self, state: &GameState) -> Option<usize> {
        let own = state.current_player().cell();
        let opponent = state.current_player().other().cell();
        policy::heuristic_move(
            state.board(),
            own,
            opponent,
            state.rules().win_length(),
            &mut self.rng,
        )
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
