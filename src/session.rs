//! Caller-side game session: score, move budget and timer
//!
//! The engine reports what happened; a session decides what it is worth. Feed every
//! turn's effects to [`Session::apply`] and wall-clock time to [`Session::tick`].
//!
//! | Mode | Starts with | A scoring turn | A cascade step |
//! |------|-------------|----------------|----------------|
//! | `Time` | `DEFAULT_TIME_SECS` | - | `+BONUS_TIME_PER_STEP_SECS` |
//! | `Moves` | `DEFAULT_MOVES` | `-1` move | `+BONUS_MOVES_PER_STEP` |

use crate::engine::Effect;
use crate::types::{
    BONUS_MOVES_PER_STEP, BONUS_TIME_PER_STEP_SECS, DEFAULT_MOVES, DEFAULT_TIME_SECS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Play against a countdown
    #[default]
    Time,
    /// Play with a fixed number of swaps
    Moves,
}

impl GameMode {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "time" => Some(GameMode::Time),
            "moves" => Some(GameMode::Moves),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Time => "time",
            GameMode::Moves => "moves",
        }
    }
}

/// What one turn was worth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TurnSummary {
    pub score_delta: u32,
    pub steps: u32,
    pub reshuffles: u32,
}

#[derive(Debug, Clone)]
pub struct Session {
    mode: GameMode,
    score: u32,
    moves_left: u32,
    time_left_ms: u64,
    turns: u32,
    high_score: u32,
}

impl Session {
    pub fn new(mode: GameMode) -> Self {
        let mut session = Self {
            mode,
            score: 0,
            moves_left: 0,
            time_left_ms: 0,
            turns: 0,
            high_score: 0,
        };
        session.reset();
        session
    }

    /// Start a new round, keeping the high score
    pub fn reset(&mut self) {
        self.score = 0;
        self.turns = 0;
        match self.mode {
            GameMode::Time => {
                self.time_left_ms = u64::from(DEFAULT_TIME_SECS) * 1000;
                self.moves_left = 0;
            }
            GameMode::Moves => {
                self.time_left_ms = 0;
                self.moves_left = DEFAULT_MOVES;
            }
        }
    }

    /// Book a turn's effects
    ///
    /// Rejected turns change nothing. A turn that cleared anything costs one move in
    /// `Moves` mode.
    pub fn apply(&mut self, effects: &[Effect]) -> TurnSummary {
        let mut summary = TurnSummary::default();
        for effect in effects {
            match effect {
                Effect::TilesCleared { score_delta, .. } => {
                    summary.score_delta += score_delta;
                    summary.steps += 1;
                }
                Effect::BoardReshuffled => summary.reshuffles += 1,
                _ => {}
            }
        }
        if summary.steps == 0 {
            return summary;
        }

        self.turns += 1;
        self.score += summary.score_delta;
        match self.mode {
            GameMode::Time => {
                self.time_left_ms += u64::from(summary.steps * BONUS_TIME_PER_STEP_SECS) * 1000;
            }
            GameMode::Moves => {
                self.moves_left =
                    self.moves_left.saturating_sub(1) + summary.steps * BONUS_MOVES_PER_STEP;
            }
        }
        summary
    }

    /// Count the timer down; no-op in `Moves` mode
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.mode == GameMode::Time {
            self.time_left_ms = self.time_left_ms.saturating_sub(elapsed_ms);
        }
    }

    pub fn is_over(&self) -> bool {
        match self.mode {
            GameMode::Time => self.time_left_ms == 0,
            GameMode::Moves => self.moves_left == 0,
        }
    }

    /// End the round, returning the updated high score
    pub fn finish(&mut self) -> u32 {
        if self.score > self.high_score {
            log::info!("new high score {}", self.score);
            self.high_score = self.score;
        }
        self.high_score
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_left(&self) -> u32 {
        self.moves_left
    }

    /// Whole seconds left, rounded up
    pub fn time_left_secs(&self) -> u64 {
        self.time_left_ms.div_ceil(1000)
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }
}
