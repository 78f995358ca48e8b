//! Move-selection strategies built on the engine's snapshot/restore
//! simulation support.

mod heuristic;
mod random;
mod strategy;

pub use heuristic::HeuristicStrategy;
pub use random::RandomStrategy;
pub use strategy::MoveStrategy;

use crate::error::ConfigError;

/// Build the strategy named in the configuration. A `seed` fixes the
/// RNG for reproducible games.
pub fn build_strategy(
    name: &str,
    seed: Option<u64>,
) -> Result<Box<dyn MoveStrategy>, ConfigError> {
    match name {
        "random" => Ok(match seed {
            Some(seed) => Box::new(RandomStrategy::with_seed(seed)),
            None => Box::new(RandomStrategy::new()),
        }),
        "heuristic" => Ok(match seed {
            Some(seed) => Box::new(HeuristicStrategy::with_seed(seed)),
            None => Box::new(HeuristicStrategy::new()),
        }),
        other => Err(ConfigError::Validation(format!(
            "unknown ai.strategy '{other}' (expected 'random' or 'heuristic')"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_known_strategies() {
        assert_eq!(build_strategy("random", None).unwrap().name(), "Random");
        assert_eq!(
            build_strategy("heuristic", Some(1)).unwrap().name(),
            "Heuristic"
        );
    }

    #[test]
    fn test_build_unknown_strategy_fails() {
        assert!(build_strategy("minimax", None).is_err());
    }
}
