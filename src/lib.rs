//! Match-3 puzzle engine (workspace facade crate).
//!
//! The board and cascade logic live in dedicated crates under `crates/` and are
//! re-exported here as `match3::{types, core, engine}`. This package adds the
//! caller-side pieces: runtime configuration, score/moves/timer bookkeeping and a
//! terminal board printer.

pub use match3_core as core;
pub use match3_engine as engine;
pub use match3_types as types;

pub mod config;
pub mod render;
pub mod session;
