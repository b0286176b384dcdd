//! Effects reported by a swap resolution, in the order they happen

use match3_core::types::{Coord, PieceKind, SpecialKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapRejection {
    /// Positions are not edge-neighbors (or not on the board)
    NotAdjacent,
    /// The swap neither formed a run nor moved a special
    NoMatch,
}

impl SwapRejection {
    pub fn code(self) -> &'static str {
        match self {
            SwapRejection::NotAdjacent => "not_adjacent",
            SwapRejection::NoMatch => "no_match",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            SwapRejection::NotAdjacent => "swap positions must be adjacent cells on the board",
            SwapRejection::NoMatch => "swap produced no match and activated no special",
        }
    }
}

/// A special queued to detonate in a cascade step
///
/// `kind` is captured when the request is queued: a special caught in a blast is
/// removed in that step and detonates from its old position in the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActivationRequest {
    pub pos: Coord,
    pub kind: SpecialKind,
    /// Regular piece a color bomb was swapped onto
    pub target: Option<PieceKind>,
}

/// One observable outcome of [`attempt_swap`](crate::Resolver::attempt_swap)
///
/// A valid swap yields, per cascade step, `TilesCleared`, an optional
/// `SpecialCreated` and `Settled`; then `Stable`, then one `BoardReshuffled` per
/// reshuffle needed to restore a legal move. An invalid swap yields a single `Rejected`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    Rejected {
        reason: SwapRejection,
    },
    TilesCleared {
        /// 1-based cascade step
        step: u32,
        /// Cleared cells, row-major
        coords: Vec<Coord>,
        score_delta: u32,
        specials_activated: u32,
    },
    SpecialCreated {
        step: u32,
        pos: Coord,
        kind: SpecialKind,
    },
    /// Board after drop and refill
    Settled {
        step: u32,
        refilled: Vec<Coord>,
    },
    Stable {
        steps: u32,
    },
    BoardReshuffled,
}

impl Effect {
    pub fn score_delta(&self) -> u32 {
        match self {
            Effect::TilesCleared { score_delta, .. } => *score_delta,
            _ => 0,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Effect::Rejected { .. })
    }
}
