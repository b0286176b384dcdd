//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (grid logic, cascade resolution, presentation).
//!
//! # Pieces
//!
//! A grid cell holds a [`Cell`], i.e. `Option<PieceKind>`. Cells are only empty while a
//! cascade step is in flight; a board at rest is always full.
//!
//! - **Regular** pieces are color ids `0..n` where `n` is the configured number of
//!   piece kinds (5 for every built-in [`Theme`]).
//! - **Special** pieces are one of the four [`SpecialKind`] variants. They never take
//!   part in a run; a special cell breaks any run passing through it.
//!
//! # Scoring Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `POINTS_PER_TILE` | 10 | Points per cleared cell |
//! | `POINTS_PER_SPECIAL_ACTIVATION` | 50 | Bonus per special activated in a step |
//! | `DEFAULT_TIME_SECS` | 30 | Starting clock in time mode |
//! | `DEFAULT_MOVES` | 15 | Starting moves in moves mode |
//! | `BONUS_TIME_PER_STEP_SECS` | 2 | Seconds added per cascade step in time mode |
//!
//! # Examples
//!
//! ```
//! use match3_types::{Coord, PieceKind, SpecialKind, Theme};
//!
//! let red = PieceKind::Regular(0);
//! assert!(red.is_regular());
//! assert_eq!(PieceKind::from_char('@'), Some(Some(PieceKind::Special(SpecialKind::ColorBomb))));
//!
//! assert!(Coord::new(2, 3).is_adjacent(Coord::new(2, 4)));
//! assert!(!Coord::new(2, 3).is_adjacent(Coord::new(3, 4)));
//!
//! let theme = Theme::by_name("pirates").unwrap();
//! assert_eq!(theme.piece_name(1), Some("pirates"));
//! ```

/// Default side length of the square grid
pub const DEFAULT_GRID_SIZE: usize = 7;

/// Smallest supported grid side
pub const MIN_GRID_SIZE: usize = 5;

/// Default number of regular piece kinds
pub const DEFAULT_PIECE_KINDS: u8 = 5;

/// Fewest regular piece kinds a board can be generated with
pub const MIN_PIECE_KINDS: u8 = 3;

/// Shortest run that counts as a match
pub const MIN_MATCH_LEN: usize = 3;

/// Points awarded for every cleared cell
pub const POINTS_PER_TILE: u32 = 10;

/// Bonus points for every special activated within a cascade step
pub const POINTS_PER_SPECIAL_ACTIVATION: u32 = 50;

/// Starting clock for time mode (seconds)
pub const DEFAULT_TIME_SECS: u32 = 30;

/// Starting move budget for moves mode
pub const DEFAULT_MOVES: u32 = 15;

/// Seconds granted per cascade step in time mode
pub const BONUS_TIME_PER_STEP_SECS: u32 = 2;

/// Moves granted per cascade step in moves mode
pub const BONUS_MOVES_PER_STEP: u32 = 0;

/// The four special piece variants
///
/// - **RowClear**: clears its whole row (created by a horizontal run of 4)
/// - **ColumnClear**: clears its whole column (created by a vertical run of 4)
/// - **Bomb3x3**: clears the 3x3 neighborhood around it
/// - **ColorBomb**: clears every piece of one color (created by a run of 5+)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SpecialKind {
    RowClear,
    ColumnClear,
    Bomb3x3,
    ColorBomb,
}

impl SpecialKind {
    pub const ALL: [SpecialKind; 4] = [
        SpecialKind::RowClear,
        SpecialKind::ColumnClear,
        SpecialKind::Bomb3x3,
        SpecialKind::ColorBomb,
    ];

    /// Parse special kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::SpecialKind;
    ///
    /// assert_eq!(SpecialKind::from_str("row_clear"), Some(SpecialKind::RowClear));
    /// assert_eq!(SpecialKind::from_str("COLOR_BOMB"), Some(SpecialKind::ColorBomb));
    /// assert_eq!(SpecialKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "row_clear" => Some(SpecialKind::RowClear),
            "column_clear" => Some(SpecialKind::ColumnClear),
            "bomb" | "bomb3x3" => Some(SpecialKind::Bomb3x3),
            "color_bomb" => Some(SpecialKind::ColorBomb),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SpecialKind::RowClear => "row_clear",
            SpecialKind::ColumnClear => "column_clear",
            SpecialKind::Bomb3x3 => "bomb3x3",
            SpecialKind::ColorBomb => "color_bomb",
        }
    }

    /// Fixture/display glyph
    pub fn to_char(&self) -> char {
        match self {
            SpecialKind::RowClear => '-',
            SpecialKind::ColumnClear => '|',
            SpecialKind::Bomb3x3 => '*',
            SpecialKind::ColorBomb => '@',
        }
    }
}

/// A piece occupying a grid cell
///
/// Regular pieces carry a color id; two regular pieces match iff their ids are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Regular(u8),
    Special(SpecialKind),
}

impl PieceKind {
    pub fn is_regular(&self) -> bool {
        matches!(self, PieceKind::Regular(_))
    }

    pub fn is_special(&self) -> bool {
        matches!(self, PieceKind::Special(_))
    }

    /// Color id for regular pieces
    pub fn color(&self) -> Option<u8> {
        match self {
            PieceKind::Regular(color) => Some(*color),
            PieceKind::Special(_) => None,
        }
    }

    pub fn special(&self) -> Option<SpecialKind> {
        match self {
            PieceKind::Regular(_) => None,
            PieceKind::Special(kind) => Some(*kind),
        }
    }

    /// Parse a fixture glyph into a cell
    ///
    /// `A`-`Z` are regular colors 0-25, `-` `|` `*` `@` are the specials and `.` is an
    /// empty cell. Returns `None` for any other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use match3_types::{PieceKind, SpecialKind};
    ///
    /// assert_eq!(PieceKind::from_char('C'), Some(Some(PieceKind::Regular(2))));
    /// assert_eq!(
    ///     PieceKind::from_char('|'),
    ///     Some(Some(PieceKind::Special(SpecialKind::ColumnClear)))
    /// );
    /// assert_eq!(PieceKind::from_char('.'), Some(None));
    /// assert_eq!(PieceKind::from_char('?'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            'A'..='Z' => Some(Some(PieceKind::Regular(c as u8 - b'A'))),
            '-' => Some(Some(PieceKind::Special(SpecialKind::RowClear))),
            '|' => Some(Some(PieceKind::Special(SpecialKind::ColumnClear))),
            '*' => Some(Some(PieceKind::Special(SpecialKind::Bomb3x3))),
            '@' => Some(Some(PieceKind::Special(SpecialKind::ColorBomb))),
            '.' => Some(None),
            _ => None,
        }
    }

    /// Inverse of [`PieceKind::from_char`]; colors past `Z` render as `?`
    pub fn to_char(&self) -> char {
        match self {
            PieceKind::Regular(color) if *color < 26 => (b'A' + color) as char,
            PieceKind::Regular(_) => '?',
            PieceKind::Special(kind) => kind.to_char(),
        }
    }
}

/// A cell on the grid
///
/// - `None`: Empty cell (only during a cascade step)
/// - `Some(PieceKind)`: Occupied cell
pub type Cell = Option<PieceKind>;

/// Grid coordinate, `row` counted from the top and `col` from the left
///
/// Ordering is row-major, so ordered collections of coordinates iterate in scan order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn manhattan(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True iff the two coordinates share an edge
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.manhattan(other) == 1
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A named set of regular piece assets
///
/// The engine only deals in color ids; a theme maps id `i` to `pieces[i]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub pieces: &'static [&'static str],
}

/// Built-in themes, five pieces each
pub const THEMES: [Theme; 7] = [
    Theme {
        name: "Classic",
        pieces: &["cone", "cross", "cube", "cylinder", "geometry"],
    },
    Theme {
        name: "Pirates",
        pieces: &["parrot", "pirates", "compass", "ship-wheel", "hook"],
    },
    Theme {
        name: "Winter",
        pieces: &["bonfire", "candy-cane", "cookie", "deer", "snow-globe"],
    },
    Theme {
        name: "Summer",
        pieces: &["starfish", "pamela-hat", "help", "coconut-drink", "watermelon"],
    },
    Theme {
        name: "History",
        pieces: &["mammoth", "moai", "fossil", "pharaoh", "mask"],
    },
    Theme {
        name: "Heroes",
        pieces: &["helmet", "eye-mask", "hammer", "nuclear", "regeneration"],
    },
    Theme {
        name: "Halloween",
        pieces: &["voodoo-doll", "cauldron", "pumpkin", "frankenstein", "decapitate"],
    },
];

impl Theme {
    /// Look up a built-in theme by name (case-insensitive)
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        THEMES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &THEMES[0]
    }

    /// Number of regular piece kinds in this theme
    pub fn piece_kinds(&self) -> u8 {
        self.pieces.len() as u8
    }

    /// Asset name for a regular color id
    pub fn piece_name(&self, color: u8) -> Option<&'static str> {
        self.pieces.get(color as usize).copied()
    }
}
