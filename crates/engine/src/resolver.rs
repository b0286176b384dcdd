//! Resolver module - turns one swap into a finished cascade
//!
//! `attempt_swap` runs synchronously to completion: validity check, swap-triggered
//! activations, then cascade steps until a step has nothing to clear. Intermediate
//! boards are only visible through the observer callback, between effects.
//!
//! A cascade step:
//!
//! 1. detonate the queued activations and union their areas into the clear-set
//! 2. union in the regular matches from the previous scan, keeping its creation request
//! 3. stop if the clear-set is empty
//! 4. report `TilesCleared`
//! 5. queue every *other* special inside the clear-set for the next step
//! 6. remove the clear-set, place the created special if its cell is empty
//! 7. drop, refill, rescan

use std::collections::BTreeSet;

use match3_core::types::{Cell, Coord, PieceKind};
use match3_core::{
    calculate_step_score, BoardRng, ConfigError, EngineConfig, Grid, ScanMode, ScanResult,
};

use crate::effect::{ActivationRequest, Effect, SwapRejection};

/// Upper bound on cascade steps per swap
pub const MAX_CASCADE_STEPS: u32 = 1_000;

/// Upper bound on reshuffles after a swap
pub const MAX_RESHUFFLES: u32 = 100;

/// Inputs carried from one cascade step into the next
#[derive(Debug, Default)]
struct StepInput {
    activations: BTreeSet<ActivationRequest>,
    /// Cells whose special is detonating while still on the board
    in_place: BTreeSet<Coord>,
    scan: ScanResult,
}

struct Emitter<F> {
    observer: F,
    effects: Vec<Effect>,
}

impl<F: FnMut(&Effect, &Grid)> Emitter<F> {
    fn emit(&mut self, effect: Effect, grid: &Grid) {
        (self.observer)(&effect, grid);
        self.effects.push(effect);
    }
}

/// Owns the grid for a play session and resolves swaps on it
#[derive(Debug, Clone)]
pub struct Resolver {
    grid: Grid,
    rng: BoardRng,
    config: EngineConfig,
}

impl Resolver {
    /// Start a session on a freshly generated, match-free board
    pub fn new(config: EngineConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut rng = BoardRng::new(seed);
        let grid = Grid::generate(&config, &mut rng);
        log::info!(
            "new {}x{} board with {} piece kinds (seed {})",
            config.grid_size,
            config.grid_size,
            config.piece_kinds,
            seed
        );

        Ok(Self { grid, rng, config })
    }

    /// Resolve swaps on a prepared board
    pub fn with_grid(config: EngineConfig, grid: Grid, rng: BoardRng) -> Self {
        assert_eq!(
            grid.size(),
            config.grid_size,
            "grid size does not match configuration"
        );
        Self { grid, rng, config }
    }

    /// Replace the board wholesale with a new generated one
    pub fn new_game(&mut self) {
        self.grid = Grid::generate(&self.config, &mut self.rng);
        log::info!("new game");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at (row, col), `None` when out of bounds
    pub fn piece(&self, row: usize, col: usize) -> Option<Cell> {
        self.grid.get(row, col)
    }

    pub fn grid_size(&self) -> usize {
        self.grid.size()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Seed of the session's RNG
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Resolve a swap through to a stable board
    pub fn attempt_swap(&mut self, a: Coord, b: Coord) -> Vec<Effect> {
        self.attempt_swap_with(a, b, |_: &Effect, _: &Grid| {})
    }

    /// Like [`attempt_swap`](Self::attempt_swap), calling `observer` after each effect
    /// with the board as it stands at that point
    ///
    /// `TilesCleared` is observed before the cells are removed, `SpecialCreated` right
    /// after placement, `Settled` after drop and refill.
    pub fn attempt_swap_with<F>(&mut self, a: Coord, b: Coord, observer: F) -> Vec<Effect>
    where
        F: FnMut(&Effect, &Grid),
    {
        let mut emitter = Emitter {
            observer,
            effects: Vec::new(),
        };

        if !self.grid.valid_adjacent(a, b) {
            emitter.emit(
                Effect::Rejected {
                    reason: SwapRejection::NotAdjacent,
                },
                &self.grid,
            );
            return emitter.effects;
        }

        let before_a = self.grid.cell(a);
        let before_b = self.grid.cell(b);
        self.grid.swap(a, b);

        let activations: BTreeSet<ActivationRequest> = [
            swap_activation(a, before_b, before_a),
            swap_activation(b, before_a, before_b),
        ]
        .into_iter()
        .flatten()
        .collect();

        let scan = self.grid.scan(ScanMode::Play);
        if scan.is_empty() && activations.is_empty() {
            self.grid.swap(a, b);
            log::debug!("rejected swap {:?} <-> {:?}", a, b);
            emitter.emit(
                Effect::Rejected {
                    reason: SwapRejection::NoMatch,
                },
                &self.grid,
            );
            return emitter.effects;
        }

        let in_place = activations.iter().map(|req| req.pos).collect();
        let steps = self.run_cascade(
            StepInput {
                activations,
                in_place,
                scan,
            },
            &mut emitter,
        );
        emitter.emit(Effect::Stable { steps }, &self.grid);

        let mut reshuffles = 0;
        while !self.grid.has_legal_move() {
            if reshuffles == MAX_RESHUFFLES {
                log::warn!("no legal move after {} reshuffles", MAX_RESHUFFLES);
                break;
            }
            self.grid.reshuffle(&mut self.rng);
            reshuffles += 1;
            emitter.emit(Effect::BoardReshuffled, &self.grid);
        }

        emitter.effects
    }

    fn run_cascade<F>(&mut self, mut input: StepInput, emitter: &mut Emitter<F>) -> u32
    where
        F: FnMut(&Effect, &Grid),
    {
        for step in 1..=MAX_CASCADE_STEPS {
            match self.cascade_step(step, input, emitter) {
                Some(next) => input = next,
                None => return step - 1,
            }
        }
        log::warn!("cascade cut off after {} steps", MAX_CASCADE_STEPS);
        MAX_CASCADE_STEPS
    }

    /// Run one step; `None` when there was nothing to clear
    fn cascade_step<F>(
        &mut self,
        step: u32,
        input: StepInput,
        emitter: &mut Emitter<F>,
    ) -> Option<StepInput>
    where
        F: FnMut(&Effect, &Grid),
    {
        let StepInput {
            activations,
            in_place,
            scan,
        } = input;

        let mut clear: BTreeSet<Coord> = BTreeSet::new();
        for req in &activations {
            clear.extend(
                self.grid
                    .effect_area(req.kind, req.pos, req.target, &mut self.rng),
            );
            clear.insert(req.pos);
        }
        clear.extend(scan.matches.iter().copied());

        if clear.is_empty() {
            return None;
        }

        let score = calculate_step_score(clear.len(), activations.len(), &self.config);
        log::debug!(
            "cascade step {}: clearing {} cell(s), {} activation(s), +{}",
            step,
            clear.len(),
            activations.len(),
            score.total
        );
        emitter.emit(
            Effect::TilesCleared {
                step,
                coords: clear.iter().copied().collect(),
                score_delta: score.total,
                specials_activated: activations.len() as u32,
            },
            &self.grid,
        );

        // Specials caught in this step detonate in the next one.
        let chained: BTreeSet<ActivationRequest> = clear
            .iter()
            .filter(|pos| !in_place.contains(pos))
            .filter_map(|&pos| match self.grid.cell(pos) {
                Some(PieceKind::Special(kind)) => Some(ActivationRequest {
                    pos,
                    kind,
                    target: None,
                }),
                _ => None,
            })
            .collect();

        self.grid.remove(&clear);

        if let Some(req) = scan.creation {
            if self.grid.cell(req.pos).is_none() {
                self.grid.set(req.pos, Some(PieceKind::Special(req.kind)));
                log::debug!("created {} at {:?}", req.kind.as_str(), req.pos);
                emitter.emit(
                    Effect::SpecialCreated {
                        step,
                        pos: req.pos,
                        kind: req.kind,
                    },
                    &self.grid,
                );
            } else {
                log::debug!(
                    "skipped creating {} at {:?}, cell occupied",
                    req.kind.as_str(),
                    req.pos
                );
            }
        }

        self.grid.drop_pieces();
        let refilled = self.grid.refill(&mut self.rng);
        emitter.emit(Effect::Settled { step, refilled }, &self.grid);

        Some(StepInput {
            activations: chained,
            in_place: BTreeSet::new(),
            scan: self.grid.scan(ScanMode::Play),
        })
    }
}

/// Activation for a special that a swap moved onto `pos`
///
/// `displaced` is what the special was exchanged with; a regular piece there becomes the
/// color bomb target.
fn swap_activation(pos: Coord, moved: Cell, displaced: Cell) -> Option<ActivationRequest> {
    match moved {
        Some(PieceKind::Special(kind)) => Some(ActivationRequest {
            pos,
            kind,
            target: displaced.filter(|piece| piece.is_regular()),
        }),
        _ => None,
    }
}
