//! Engine configuration
//!
//! Grid size, piece-set cardinality and scoring constants are passed to the engine as an
//! explicit value at construction instead of living in module-level globals.

use std::fmt;

use crate::types::{
    Theme, DEFAULT_GRID_SIZE, DEFAULT_PIECE_KINDS, MIN_GRID_SIZE, MIN_PIECE_KINDS,
    POINTS_PER_SPECIAL_ACTIVATION, POINTS_PER_TILE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    GridTooSmall { size: usize },
    TooFewPieceKinds { kinds: u8 },
}

impl ConfigError {
    pub fn code(self) -> &'static str {
        match self {
            ConfigError::GridTooSmall { .. } => "grid_too_small",
            ConfigError::TooFewPieceKinds { .. } => "too_few_piece_kinds",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            ConfigError::GridTooSmall { .. } => "grid size must be at least 5",
            ConfigError::TooFewPieceKinds { .. } => "at least 3 regular piece kinds are required",
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::GridTooSmall { size } => write!(f, "{} (got {})", self.message(), size),
            ConfigError::TooFewPieceKinds { kinds } => {
                write!(f, "{} (got {})", self.message(), kinds)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Side length of the square grid
    pub grid_size: usize,
    /// Number of regular colors, ids `0..piece_kinds`
    pub piece_kinds: u8,
    pub points_per_tile: u32,
    /// Bonus per special activated in a cascade step
    pub points_per_special: u32,
}

impl EngineConfig {
    /// Validated configuration with default scoring
    pub fn new(grid_size: usize, piece_kinds: u8) -> Result<Self, ConfigError> {
        let config = Self {
            grid_size,
            piece_kinds,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Default configuration sized for a theme's piece set
    pub fn for_theme(theme: &Theme) -> Self {
        Self {
            piece_kinds: theme.piece_kinds(),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size < MIN_GRID_SIZE {
            return Err(ConfigError::GridTooSmall {
                size: self.grid_size,
            });
        }
        if self.piece_kinds < MIN_PIECE_KINDS {
            return Err(ConfigError::TooFewPieceKinds {
                kinds: self.piece_kinds,
            });
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            piece_kinds: DEFAULT_PIECE_KINDS,
            points_per_tile: POINTS_PER_TILE,
            points_per_special: POINTS_PER_SPECIAL_ACTIVATION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.grid_size, 7);
        assert_eq!(config.piece_kinds, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_small_grid() {
        let err = EngineConfig::new(4, 5).unwrap_err();
        assert_eq!(err, ConfigError::GridTooSmall { size: 4 });
        assert_eq!(err.code(), "grid_too_small");
        assert!(err.to_string().contains("got 4"));
    }

    #[test]
    fn test_rejects_two_colors() {
        let err = EngineConfig::new(7, 2).unwrap_err();
        assert_eq!(err, ConfigError::TooFewPieceKinds { kinds: 2 });
    }

    #[test]
    fn test_for_theme() {
        let theme = Theme::by_name("winter").unwrap();
        assert_eq!(EngineConfig::for_theme(theme).piece_kinds, 5);
    }
}
