use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{GameEngine, Player};

use super::strategy::MoveStrategy;

/// A strategy that selects uniformly at random among the columns that
/// can still take a piece.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for RandomStrategy {
    fn select_column(&mut self, engine: &mut GameEngine, _player: Player) -> Option<usize> {
        let columns = engine.legal_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
