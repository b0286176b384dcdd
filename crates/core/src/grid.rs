//! Grid module - owns the square matrix of pieces
//!
//! The grid is a plain value type: cloning it gives an independent scratch board, and
//! equality compares cell contents. It knows nothing about scoring or turns; the
//! resolver drives it through a cascade.
//!
//! Storage is a flat row-major `Vec<Cell>` (`row * size + col`). Coordinates handed to
//! the accessors that take a [`Coord`] must be in bounds; an out-of-range coordinate is
//! a programming error and panics. The `(row, col)` accessor [`Grid::get`] returns
//! `None` instead, for callers translating untrusted input.

use std::collections::{BTreeMap, BTreeSet};

use arrayvec::ArrayVec;

use crate::config::EngineConfig;
use crate::rng::BoardRng;
use crate::scan::{self, ScanMode, ScanResult};
use crate::types::{Cell, Coord, PieceKind, SpecialKind, MIN_MATCH_LEN, MIN_PIECE_KINDS};

/// Shuffles of the existing pieces tried before regular pieces are re-drawn
pub const MAX_RESHUFFLE_ATTEMPTS: usize = 10_000;

/// The game grid - `size` x `size` cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    piece_kinds: u8,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid with every cell empty
    pub fn empty(size: usize, piece_kinds: u8) -> Self {
        Self {
            size,
            piece_kinds,
            cells: vec![None; size * size],
        }
    }

    /// Generate a full grid with no match on it
    ///
    /// Cells are filled in row-major order, each drawn uniformly from the colors that
    /// would not complete a run with the two cells to its left or above it.
    pub fn generate(config: &EngineConfig, rng: &mut BoardRng) -> Self {
        assert!(
            config.piece_kinds >= MIN_PIECE_KINDS,
            "cannot generate a match-free grid with {} piece kinds",
            config.piece_kinds
        );

        loop {
            let mut grid = Self::empty(config.grid_size, config.piece_kinds);
            grid.fill_run_free(rng);
            if !grid.has_match() {
                return grid;
            }
            log::warn!("generated grid contained a match, regenerating");
        }
    }

    /// Build from explicit rows (must be square)
    pub fn from_rows(rows: Vec<Vec<Cell>>, piece_kinds: u8) -> Self {
        let size = rows.len();
        assert!(
            rows.iter().all(|row| row.len() == size),
            "grid rows must form a square"
        );

        Self {
            size,
            piece_kinds,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    /// Build from fixture notation, one string per row
    ///
    /// See [`PieceKind::from_char`] for the glyphs. Returns `None` on an unknown glyph
    /// or when the rows do not form a square.
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_core::Grid;
    ///
    /// let grid = Grid::from_strs(&["AB@", "BA.", "CAB"], 3).unwrap();
    /// assert_eq!(grid.size(), 3);
    /// assert_eq!(grid.to_strings(), vec!["AB@", "BA.", "CAB"]);
    /// ```
    pub fn from_strs(rows: &[&str], piece_kinds: u8) -> Option<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(size * size);
        for row in rows {
            let parsed: Option<Vec<Cell>> = row.chars().map(PieceKind::from_char).collect();
            let parsed = parsed?;
            if parsed.len() != size {
                return None;
            }
            cells.extend(parsed);
        }

        Some(Self {
            size,
            piece_kinds,
            cells,
        })
    }

    /// Render rows in fixture notation
    pub fn to_strings(&self) -> Vec<String> {
        self.rows()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map_or('.', |piece| piece.to_char()))
                    .collect()
            })
            .collect()
    }

    #[inline(always)]
    fn index(&self, pos: Coord) -> usize {
        assert!(
            pos.row < self.size && pos.col < self.size,
            "coordinate ({}, {}) out of bounds for a {}x{} grid",
            pos.row,
            pos.col,
            self.size,
            self.size
        );
        pos.row * self.size + pos.col
    }

    /// Side length of the grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of regular colors used for refills
    pub fn piece_kinds(&self) -> u8 {
        self.piece_kinds
    }

    pub fn in_bounds(&self, pos: Coord) -> bool {
        pos.row < self.size && pos.col < self.size
    }

    /// Get cell at (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        let pos = Coord::new(row, col);
        self.in_bounds(pos).then(|| self.cells[self.index(pos)])
    }

    /// Cell at an in-bounds coordinate
    pub fn cell(&self, pos: Coord) -> Cell {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: Coord, cell: Cell) {
        let idx = self.index(pos);
        self.cells[idx] = cell;
    }

    /// Flat row-major view of every cell
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.max(1))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// How many of each piece is on the board
    pub fn piece_counts(&self) -> BTreeMap<PieceKind, usize> {
        let mut counts = BTreeMap::new();
        for piece in self.cells.iter().flatten() {
            *counts.entry(*piece).or_insert(0) += 1;
        }
        counts
    }

    /// Scan for runs; see [`scan::scan`]
    pub fn scan(&self, mode: ScanMode) -> ScanResult {
        scan::scan(self, mode)
    }

    /// Whether the board holds any run at all
    pub fn has_match(&self) -> bool {
        scan::has_match(self)
    }

    /// Empty every given cell
    pub fn remove<'a>(&mut self, coords: impl IntoIterator<Item = &'a Coord>) {
        for pos in coords {
            self.set(*pos, None);
        }
    }

    /// Apply gravity column by column
    ///
    /// Occupied cells slide down over empty ones keeping their relative order, leaving
    /// the empties at the top. Returns how many pieces moved.
    pub fn drop_pieces(&mut self) -> usize {
        let mut moved = 0;
        for col in 0..self.size {
            // Two-pointer compaction, bottom to top.
            let mut write_row = self.size;
            for read_row in (0..self.size).rev() {
                let from = Coord::new(read_row, col);
                if let Some(piece) = self.cell(from) {
                    write_row -= 1;
                    if write_row != read_row {
                        self.set(Coord::new(write_row, col), Some(piece));
                        self.set(from, None);
                        moved += 1;
                    }
                }
            }
        }
        moved
    }

    /// Fill every empty cell with a random regular piece
    ///
    /// Returns the filled coordinates in row-major order.
    pub fn refill(&mut self, rng: &mut BoardRng) -> Vec<Coord> {
        let mut filled = Vec::new();
        for idx in 0..self.cells.len() {
            if self.cells[idx].is_none() {
                self.cells[idx] = Some(rng.regular_piece(self.piece_kinds));
                filled.push(Coord::new(idx / self.size, idx % self.size));
            }
        }
        filled
    }

    /// Exchange two cells unconditionally
    pub fn swap(&mut self, a: Coord, b: Coord) {
        let (ia, ib) = (self.index(a), self.index(b));
        self.cells.swap(ia, ib);
    }

    /// True iff both coordinates are on the board and share an edge
    pub fn valid_adjacent(&self, a: Coord, b: Coord) -> bool {
        self.in_bounds(a) && self.in_bounds(b) && a.is_adjacent(b)
    }

    /// Whether some adjacent swap would produce a match
    ///
    /// Tries every right and down swap on a scratch copy, undoing each one before the
    /// next.
    pub fn has_legal_move(&self) -> bool {
        let mut scratch = self.clone();
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Coord::new(row, col);
                let mut neighbors: ArrayVec<Coord, 2> = ArrayVec::new();
                if col + 1 < self.size {
                    neighbors.push(Coord::new(row, col + 1));
                }
                if row + 1 < self.size {
                    neighbors.push(Coord::new(row + 1, col));
                }

                for other in neighbors {
                    scratch.swap(pos, other);
                    let hit = scratch.has_match();
                    scratch.swap(pos, other);
                    if hit {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Redistribute the pieces on the board into a match-free arrangement
    ///
    /// Missing pieces (a board with empties) are topped up with random regular pieces.
    /// The result is match-free; it is not guaranteed to have a legal move.
    pub fn reshuffle(&mut self, rng: &mut BoardRng) {
        let total = self.size * self.size;
        let mut pieces: Vec<PieceKind> = self.cells.iter().flatten().copied().collect();
        while pieces.len() < total {
            pieces.push(rng.regular_piece(self.piece_kinds));
        }

        for attempt in 1..=MAX_RESHUFFLE_ATTEMPTS {
            rng.shuffle(&mut pieces);
            for (cell, piece) in self.cells.iter_mut().zip(&pieces) {
                *cell = Some(*piece);
            }
            if !self.has_match() {
                log::info!("board reshuffled after {} attempt(s)", attempt);
                return;
            }
        }

        log::warn!(
            "no match-free shuffle in {} attempts, redrawing regular pieces",
            MAX_RESHUFFLE_ATTEMPTS
        );
        for cell in self.cells.iter_mut() {
            if cell.is_some_and(|piece| piece.is_regular()) {
                *cell = None;
            }
        }
        self.fill_run_free(rng);
    }

    /// Fill empty cells row-major, never completing a run to the left or above
    fn fill_run_free(&mut self, rng: &mut BoardRng) {
        for row in 0..self.size {
            for col in 0..self.size {
                let pos = Coord::new(row, col);
                if self.cell(pos).is_some() {
                    continue;
                }
                let allowed: Vec<u8> = (0..self.piece_kinds)
                    .filter(|&color| !self.completes_run(pos, color))
                    .collect();
                let piece = match rng.choose(&allowed) {
                    Some(color) => PieceKind::Regular(color),
                    None => rng.regular_piece(self.piece_kinds),
                };
                self.set(pos, Some(piece));
            }
        }
    }

    fn completes_run(&self, pos: Coord, color: u8) -> bool {
        let piece = Some(PieceKind::Regular(color));
        let span = MIN_MATCH_LEN - 1;
        let left = pos.col >= span
            && (1..=span).all(|k| self.cell(Coord::new(pos.row, pos.col - k)) == piece);
        let up = pos.row >= span
            && (1..=span).all(|k| self.cell(Coord::new(pos.row - k, pos.col)) == piece);
        left || up
    }

    /// Every coordinate cleared by the special at `pos`, the special itself included
    ///
    /// Returns an empty set when `pos` does not hold a special. Pure query apart from
    /// the RNG: nothing on the board changes and other specials inside the area are not
    /// expanded.
    pub fn special_effect_area(
        &self,
        pos: Coord,
        target: Option<PieceKind>,
        rng: &mut BoardRng,
    ) -> BTreeSet<Coord> {
        match self.cell(pos) {
            Some(PieceKind::Special(kind)) => self.effect_area(kind, pos, target, rng),
            _ => BTreeSet::new(),
        }
    }

    /// Area of a special of `kind` centered on `pos`, whatever `pos` currently holds
    ///
    /// - `RowClear` / `ColumnClear`: the whole row / column
    /// - `Bomb3x3`: the 3x3 neighborhood, clipped to the board
    /// - `ColorBomb`: every cell of `target`'s color when `target` is regular, otherwise
    ///   of a color picked at random among the regular colors on the board; just `pos`
    ///   when no regular piece is left
    pub fn effect_area(
        &self,
        kind: SpecialKind,
        pos: Coord,
        target: Option<PieceKind>,
        rng: &mut BoardRng,
    ) -> BTreeSet<Coord> {
        let mut area = BTreeSet::new();
        area.insert(pos);

        match kind {
            SpecialKind::RowClear => {
                area.extend((0..self.size).map(|col| Coord::new(pos.row, col)));
            }
            SpecialKind::ColumnClear => {
                area.extend((0..self.size).map(|row| Coord::new(row, pos.col)));
            }
            SpecialKind::Bomb3x3 => {
                let rows = pos.row.saturating_sub(1)..=(pos.row + 1).min(self.size - 1);
                for row in rows {
                    let cols = pos.col.saturating_sub(1)..=(pos.col + 1).min(self.size - 1);
                    area.extend(cols.map(|col| Coord::new(row, col)));
                }
            }
            SpecialKind::ColorBomb => {
                let color = match target.and_then(|piece| piece.color()) {
                    Some(color) => Some(color),
                    None => {
                        let present: BTreeSet<u8> =
                            self.cells.iter().flatten().filter_map(|p| p.color()).collect();
                        let present: Vec<u8> = present.into_iter().collect();
                        rng.choose(&present)
                    }
                };
                if let Some(color) = color {
                    let piece = Some(PieceKind::Regular(color));
                    area.extend(
                        self.cells
                            .iter()
                            .enumerate()
                            .filter(|(_, cell)| **cell == piece)
                            .map(|(idx, _)| Coord::new(idx / self.size, idx % self.size)),
                    );
                }
            }
        }

        area
    }
}
