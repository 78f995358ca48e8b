use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{GameEngine, GameOutcome, Player};

use super::strategy::{simulate_move, MoveStrategy};

/// A strategy that wins on the spot when it can, blocks an opponent's
/// immediate win otherwise, and falls back to a random legal column.
///
/// Candidate moves are found by simulating each legal column against a
/// board snapshot; the engine's real state is untouched between probes.
pub struct HeuristicStrategy {
    rng: StdRng,
}

impl HeuristicStrategy {
    pub fn new() -> Self {
        HeuristicStrategy {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible games and tests.
    pub fn with_seed(seed: u64) -> Self {
        HeuristicStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Uniform choice over a non-empty candidate set.
    fn pick(&mut self, candidates: &[usize]) -> usize {
        candidates[self.rng.random_range(0..candidates.len())]
    }

    /// Columns where dropping `player`'s piece wins immediately.
    fn winning_columns(engine: &mut GameEngine, legal: &[usize], player: Player) -> Vec<usize> {
        legal
            .iter()
            .copied()
            .filter(|&column| {
                simulate_move(engine, column, player) == Some(GameOutcome::Winner(player))
            })
            .collect()
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl MoveStrategy for HeuristicStrategy {
    fn select_column(&mut self, engine: &mut GameEngine, player: Player) -> Option<usize> {
        let legal = engine.legal_columns();
        if legal.is_empty() {
            return None;
        }

        let wins = Self::winning_columns(engine, &legal, player);
        if !wins.is_empty() {
            return Some(self.pick(&wins));
        }

        let blocks = Self::winning_columns(engine, &legal, player.other());
        if !blocks.is_empty() {
            return Some(self.pick(&blocks));
        }

        Some(self.pick(&legal))
    }

    fn name(&self) -> &str {
        "Heuristic"
    }
}
