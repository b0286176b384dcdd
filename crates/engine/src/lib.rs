//! Cascade engine - the turn-level protocol on top of the grid
//!
//! [`Resolver`] takes a proposed swap, checks it, and drives the
//! [`Grid`](match3_core::Grid) through special activations and cascade steps until the
//! board is stable, reporting each observable change as an [`Effect`]. Scoring,
//! animation and move/timer bookkeeping stay with the caller, which reads them off the
//! effects.
//!
//! The engine is single-threaded and synchronous: one `attempt_swap` runs every cascade
//! step before returning, and no partial cascade is ever exposed except through the
//! observer callback of [`Resolver::attempt_swap_with`]. Wrap a resolver in a mutex if
//! it must be shared.
//!
//! # Example
//!
//! ```
//! use match3_core::types::Coord;
//! use match3_core::EngineConfig;
//! use match3_engine::{Effect, Resolver, SwapRejection};
//!
//! let mut resolver = Resolver::new(EngineConfig::default(), 42).unwrap();
//!
//! // Diagonal swaps are never valid.
//! let effects = resolver.attempt_swap(Coord::new(0, 0), Coord::new(1, 1));
//! assert_eq!(
//!     effects,
//!     vec![Effect::Rejected { reason: SwapRejection::NotAdjacent }]
//! );
//! ```

pub mod effect;
pub mod resolver;

pub use match3_core as core;
pub use match3_types as types;

pub use effect::{ActivationRequest, Effect, SwapRejection};
pub use resolver::{Resolver, MAX_CASCADE_STEPS, MAX_RESHUFFLES};
