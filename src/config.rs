//! Player configuration shared by the protocol and console modes

use crate::eval::{Strategy, EARLY_GAME_MOVES};

/// Player settings that outlive a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerConfig {
    /// Move selection strategy
    pub strategy: Strategy,
    /// Moves (both sides) before the adaptive heuristic leaves the early game
    pub early_game_moves: u32,
    /// Initial seed for tie-breaking; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        PlayerConfig {
            strategy: Strategy::default(),
            early_game_moves: EARLY_GAME_MOVES,
            seed: None,
        }
    }
}

impl PlayerConfig {
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_early_game_moves(mut self, moves: u32) -> Self {
        self.early_game_moves = moves;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayerConfig::default();
        assert_eq!(config.strategy, Strategy::Adaptive);
        assert_eq!(config.early_game_moves, 12);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_builder() {
        let config = PlayerConfig::default()
            .with_strategy(Strategy::Greedy)
            .with_seed(5)
            .with_early_game_moves(20);
        assert_eq!(config.strategy, Strategy::Greedy);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.early_game_moves, 20);
    }
}
