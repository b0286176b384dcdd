//! Scoring module - points awarded per cascade step
//!
//! A step scores `cleared cells * points_per_tile` plus `activations * points_per_special`.
//! Nothing is multiplied by cascade depth; the chain reaction pays off simply by clearing
//! more cells over more steps.

use crate::config::EngineConfig;

/// Score calculation result for one cascade step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    /// Points for the cleared cells
    pub tile_points: u32,
    /// Bonus for the specials activated in the step
    pub activation_bonus: u32,
    pub total: u32,
}

/// Points for clearing `cleared` cells
pub fn calculate_tile_score(cleared: usize, points_per_tile: u32) -> u32 {
    (cleared as u32).saturating_mul(points_per_tile)
}

/// Bonus for activating `activations` specials
pub fn calculate_activation_bonus(activations: usize, points_per_special: u32) -> u32 {
    (activations as u32).saturating_mul(points_per_special)
}

/// Calculate the complete score for one cascade step
pub fn calculate_step_score(
    cleared: usize,
    activations: usize,
    config: &EngineConfig,
) -> ScoreResult {
    let tile_points = calculate_tile_score(cleared, config.points_per_tile);
    let activation_bonus = calculate_activation_bonus(activations, config.points_per_special);

    ScoreResult {
        tile_points,
        activation_bonus,
        total: tile_points.saturating_add(activation_bonus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_score() {
        assert_eq!(calculate_tile_score(0, 10), 0);
        assert_eq!(calculate_tile_score(3, 10), 30);
        assert_eq!(calculate_tile_score(7, 10), 70);
    }

    #[test]
    fn test_activation_bonus() {
        assert_eq!(calculate_activation_bonus(0, 50), 0);
        assert_eq!(calculate_activation_bonus(2, 50), 100);
    }

    #[test]
    fn test_step_score() {
        let config = EngineConfig::default();

        // Plain three-in-a-row.
        let result = calculate_step_score(3, 0, &config);
        assert_eq!(result.tile_points, 30);
        assert_eq!(result.activation_bonus, 0);
        assert_eq!(result.total, 30);

        // Row clear on a 7-wide board.
        let result = calculate_step_score(7, 1, &config);
        assert_eq!(result.tile_points, 70);
        assert_eq!(result.activation_bonus, 50);
        assert_eq!(result.total, 120);
    }

    #[test]
    fn test_custom_point_values() {
        let config = EngineConfig {
            points_per_tile: 1,
            points_per_special: 5,
            ..EngineConfig::default()
        };
        assert_eq!(calculate_step_score(9, 2, &config).total, 19);
    }
}
