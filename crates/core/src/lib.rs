//! Core grid logic - pure, deterministic, and testable
//!
//! This crate contains the board half of the match-3 engine: the grid of pieces and
//! every operation the cascade resolver drives it through. It has **no dependencies**
//! on rendering, input, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical boards, refills and reshuffles
//! - **Testable**: Fixture boards can be written as strings (see [`Grid::from_strs`])
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`grid`]: the square board with remove, drop, refill, swap, legality and reshuffle
//! - [`scan`]: run detection and special-creation requests
//! - [`rng`]: seedable randomness shared by refill, reshuffle and color bombs
//! - [`scoring`]: points per cascade step
//! - [`config`]: grid size, piece kinds and point values
//!
//! # Board Rules
//!
//! - **Runs**: 3+ identical regular pieces in a row or column match
//! - **Line clears**: a run of exactly 4 creates a row clear (horizontal) or column
//!   clear (vertical) on the run's second cell
//! - **Color bombs**: a run of 5+ creates a color bomb on the run's center cell
//! - **Gravity**: pieces fall straight down; empties are refilled from the top with
//!   random regular pieces only
//! - **Exhaustion**: a board where no adjacent swap makes a match gets reshuffled
//!
//! # Example
//!
//! ```
//! use match3_core::{BoardRng, EngineConfig, Grid, ScanMode};
//!
//! let config = EngineConfig::default();
//! let mut rng = BoardRng::new(12345);
//! let grid = Grid::generate(&config, &mut rng);
//!
//! assert!(grid.is_full());
//! assert!(grid.scan(ScanMode::InitialCheck).is_empty());
//! ```

pub mod config;
pub mod grid;
pub mod rng;
pub mod scan;
pub mod scoring;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use config::{ConfigError, EngineConfig};
pub use grid::Grid;
pub use rng::BoardRng;
pub use scan::{CreationRequest, Run, ScanMode, ScanResult};
pub use scoring::{calculate_step_score, ScoreResult};
