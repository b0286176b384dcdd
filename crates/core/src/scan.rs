//! Scan module - run detection and special-creation requests
//!
//! A run is a maximal line of 3+ identical *regular* pieces along a row or column.
//! Specials and empty cells break runs. Rows are scanned first (top to bottom, left to
//! right), then columns (left to right, top to bottom); that order is the tie-break
//! when several runs could create a special.
//!
//! Only one [`CreationRequest`] comes out of a scan: the first 5+ run if there is one,
//! otherwise the first 4-run. Extra creation-worthy runs in the same scan still clear
//! but create nothing.

use std::collections::BTreeSet;

use crate::grid::Grid;
use crate::types::{Coord, SpecialKind, MIN_MATCH_LEN};

/// Run length that creates a line clear
pub const LINE_CLEAR_RUN_LEN: usize = 4;

/// Shortest run that creates a color bomb
pub const COLOR_BOMB_RUN_LEN: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A maximal run of one regular color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Run {
    pub axis: Axis,
    /// Leftmost (horizontal) or topmost (vertical) cell
    pub start: Coord,
    pub len: usize,
    pub color: u8,
}

impl Run {
    fn at(&self, offset: usize) -> Coord {
        match self.axis {
            Axis::Horizontal => Coord::new(self.start.row, self.start.col + offset),
            Axis::Vertical => Coord::new(self.start.row + offset, self.start.col),
        }
    }

    pub fn cells(&self) -> impl Iterator<Item = Coord> {
        let run = *self;
        (0..run.len).map(move |offset| run.at(offset))
    }

    /// Special this run would create on its own
    ///
    /// A 4-run places a line clear on its second cell; a 5+ run places a color bomb on
    /// its center cell.
    pub fn creation(&self) -> Option<CreationRequest> {
        if self.len >= COLOR_BOMB_RUN_LEN {
            Some(CreationRequest {
                pos: self.at(self.len / 2),
                kind: SpecialKind::ColorBomb,
            })
        } else if self.len == LINE_CLEAR_RUN_LEN {
            let kind = match self.axis {
                Axis::Horizontal => SpecialKind::RowClear,
                Axis::Vertical => SpecialKind::ColumnClear,
            };
            Some(CreationRequest {
                pos: self.at(1),
                kind,
            })
        } else {
            None
        }
    }
}

/// Deferred placement of a newly created special
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CreationRequest {
    pub pos: Coord,
    pub kind: SpecialKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanMode {
    /// Regular play: may emit a creation request
    Play,
    /// Generation and validation: matches only, never a creation request
    InitialCheck,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Runs in scan order
    pub runs: Vec<Run>,
    /// Union of every run's cells
    pub matches: BTreeSet<Coord>,
    pub creation: Option<CreationRequest>,
}

impl ScanResult {
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Group runs into match sets; runs sharing a cell end up in the same set
    pub fn match_sets(&self) -> Vec<BTreeSet<Coord>> {
        let mut sets: Vec<BTreeSet<Coord>> = Vec::new();
        for run in &self.runs {
            let mut merged: BTreeSet<Coord> = run.cells().collect();
            let mut i = 0;
            while i < sets.len() {
                if sets[i].iter().any(|c| merged.contains(c)) {
                    merged.extend(sets.swap_remove(i));
                } else {
                    i += 1;
                }
            }
            sets.push(merged);
        }
        sets.sort();
        sets
    }
}

fn regular_color(grid: &Grid, pos: Coord) -> Option<u8> {
    grid.cell(pos).and_then(|piece| piece.color())
}

fn collect_line(grid: &Grid, axis: Axis, line: usize, runs: &mut Vec<Run>) {
    let size = grid.size();
    let at = |i: usize| match axis {
        Axis::Horizontal => Coord::new(line, i),
        Axis::Vertical => Coord::new(i, line),
    };

    let mut i = 0;
    while i < size {
        let Some(color) = regular_color(grid, at(i)) else {
            i += 1;
            continue;
        };
        let mut end = i + 1;
        while end < size && regular_color(grid, at(end)) == Some(color) {
            end += 1;
        }
        if end - i >= MIN_MATCH_LEN {
            runs.push(Run {
                axis,
                start: at(i),
                len: end - i,
                color,
            });
        }
        i = end;
    }
}

/// All maximal runs, rows first then columns
pub fn find_runs(grid: &Grid) -> Vec<Run> {
    let mut runs = Vec::new();
    for row in 0..grid.size() {
        collect_line(grid, Axis::Horizontal, row, &mut runs);
    }
    for col in 0..grid.size() {
        collect_line(grid, Axis::Vertical, col, &mut runs);
    }
    runs
}

/// Whether any run exists; stops at the first one
pub fn has_match(grid: &Grid) -> bool {
    let size = grid.size();
    for row in 0..size {
        for col in 0..size {
            let Some(color) = regular_color(grid, Coord::new(row, col)) else {
                continue;
            };
            let horizontal = col + MIN_MATCH_LEN <= size
                && (1..MIN_MATCH_LEN)
                    .all(|k| regular_color(grid, Coord::new(row, col + k)) == Some(color));
            let vertical = row + MIN_MATCH_LEN <= size
                && (1..MIN_MATCH_LEN)
                    .all(|k| regular_color(grid, Coord::new(row + k, col)) == Some(color));
            if horizontal || vertical {
                return true;
            }
        }
    }
    false
}

/// Scan the whole grid for matches
pub fn scan(grid: &Grid, mode: ScanMode) -> ScanResult {
    let runs = find_runs(grid);
    let matches = runs.iter().flat_map(Run::cells).collect();
    let creation = match mode {
        ScanMode::InitialCheck => None,
        ScanMode::Play => runs
            .iter()
            .filter(|run| run.len >= COLOR_BOMB_RUN_LEN)
            .chain(runs.iter().filter(|run| run.len == LINE_CLEAR_RUN_LEN))
            .find_map(Run::creation),
    };

    ScanResult {
        runs,
        matches,
        creation,
    }
}
