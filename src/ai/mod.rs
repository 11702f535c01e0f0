//! Computer opponents: the `Agent` seam, the pure policy functions, and
//! the two difficulty tiers built on them.

mod agent;
mod heuristic;
pub mod policy;
mod random;

pub use agent::Agent;
pub use heuristic::HeuristicAgent;
pub use random::RandomAgent;

/// AI difficulty selector, mapping to one of the two agents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Uniform random legal moves.
    Easy,
    /// Greedy one-ply heuristic: win, block, maximize, random.
    Hard,
}

impl Difficulty {
    /// Build the agent implementing this difficulty tier.
    pub fn agent(self) -> Box<dyn Agent> {
        match self {
            Difficulty::Easy => Box::new(RandomAgent::new()),
            Difficulty::Hard => Box::new(HeuristicAgent::new()),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "hard" => Ok(Difficulty::Hard),
            other => Err(format!("unknown difficulty '{other}' (easy|hard)")),
        }
    }
}
