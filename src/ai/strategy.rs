use crate::game::{GameEngine, GameOutcome, Player};

/// A move source: selects a target column for `player`.
///
/// Returns `None` iff no legal column remains (the board is full).
pub trait MoveStrategy {
    fn select_column(&mut self, engine: &mut GameEngine, player: Player) -> Option<usize>;

    /// Return the strategy's display name.
    fn name(&self) -> &str;
}

/// Speculatively drop `player`'s piece into `column` and report the
/// resulting outcome.
///
/// The engine's real board is restored on every exit path, including a
/// failed apply, so callers may probe freely.
pub(crate) fn simulate_move(
    engine: &mut GameEngine,
    column: usize,
    player: Player,
) -> Option<GameOutcome> {
    let saved = engine.snapshot();
    let outcome = engine
        .apply_move(column, player)
        .ok()
        .and_then(|point| engine.evaluate_outcome(point, player));
    engine.restore(saved);
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::BoardPreset;

    #[test]
    fn test_simulate_move_restores_state() {
        let mut engine = GameEngine::new(BoardPreset::Normal);
        engine.apply_move(3, Player::First).unwrap();
        let before = engine.snapshot();

        assert_eq!(simulate_move(&mut engine, 3, Player::Second), None);
        assert_eq!(engine.snapshot(), before);

        // A failed apply must restore too.
        assert_eq!(simulate_move(&mut engine, 99, Player::Second), None);
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_simulate_move_reports_win() {
        let mut engine = GameEngine::new(BoardPreset::Normal);
        for _ in 0..3 {
            engine.apply_move(0, Player::Second).unwrap();
        }
        let before = engine.snapshot();
        assert_eq!(
            simulate_move(&mut engine, 0, Player::Second),
            Some(GameOutcome::Winner(Player::Second))
        );
        assert_eq!(engine.snapshot(), before);
    }
}
