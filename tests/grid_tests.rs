//! Grid tests - generation, gravity, refill, legality and special areas

use std::collections::BTreeSet;

use match3::core::{BoardRng, EngineConfig, Grid, ScanMode};
use match3::types::{Coord, PieceKind, SpecialKind};

/// Diagonal stripes of three colors: no run and no swap that makes one
const DEAD_3: [&str; 7] = [
    "ABCABCA", "BCABCAB", "CABCABC", "ABCABCA", "BCABCAB", "CABCABC", "ABCABCA",
];

/// Same idea with five colors
const DEAD_5: [&str; 7] = [
    "ABCDEAB", "BCDEABC", "CDEABCD", "DEABCDE", "EABCDEA", "ABCDEAB", "BCDEABC",
];

fn coords(list: &[(usize, usize)]) -> BTreeSet<Coord> {
    list.iter().copied().map(Coord::from).collect()
}

#[test]
fn test_generated_boards_are_match_free() {
    for seed in 0..50 {
        let mut rng = BoardRng::new(seed);
        let grid = Grid::generate(&EngineConfig::default(), &mut rng);
        assert!(grid.is_full(), "seed {seed}");
        assert!(grid.scan(ScanMode::InitialCheck).is_empty(), "seed {seed}");
        assert!(grid.cells().iter().flatten().all(PieceKind::is_regular));
    }
}

#[test]
fn test_generation_is_deterministic() {
    let config = EngineConfig::new(9, 4).unwrap();
    let a = Grid::generate(&config, &mut BoardRng::new(77));
    let b = Grid::generate(&config, &mut BoardRng::new(77));
    assert_eq!(a, b);
    assert_eq!(a.size(), 9);
}

#[test]
fn test_drop_compacts_every_column() {
    let mut rng = BoardRng::new(5);
    for _ in 0..20 {
        let mut grid = Grid::generate(&EngineConfig::default(), &mut rng);
        let size = grid.size();
        let holes: Vec<Coord> = (0..12)
            .map(|_| Coord::new(rng.next_range(size), rng.next_range(size)))
            .collect();
        grid.remove(&holes);

        let before: Vec<Vec<PieceKind>> = (0..size)
            .map(|col| (0..size).filter_map(|row| grid.cell(Coord::new(row, col))).collect())
            .collect();

        grid.drop_pieces();

        for (col, pieces) in before.iter().enumerate() {
            let empties = size - pieces.len();
            for row in 0..empties {
                assert_eq!(grid.cell(Coord::new(row, col)), None);
            }
            let after: Vec<PieceKind> = (empties..size)
                .filter_map(|row| grid.cell(Coord::new(row, col)))
                .collect();
            assert_eq!(&after, pieces, "column {col} order changed");
        }
    }
}

#[test]
fn test_refill_fills_only_empties_with_regulars() {
    let mut grid = Grid::from_strs(&["A.-..", "B.CDE", "|CDEA", "CDEAB", "DEA*C"], 5).unwrap();
    let mut rng = BoardRng::new(2);

    let filled = grid.refill(&mut rng);

    assert_eq!(
        filled,
        vec![
            Coord::new(0, 1),
            Coord::new(0, 3),
            Coord::new(0, 4),
            Coord::new(1, 1)
        ]
    );
    assert!(grid.is_full());
    for pos in &filled {
        assert!(grid.cell(*pos).is_some_and(|piece| piece.is_regular()));
    }
    assert_eq!(
        grid.cell(Coord::new(0, 2)),
        Some(PieceKind::Special(SpecialKind::RowClear))
    );
}

#[test]
fn test_dead_board_has_no_legal_move() {
    let grid = Grid::from_strs(&DEAD_3, 3).unwrap();
    assert!(!grid.has_match());
    assert!(!grid.has_legal_move());
}

#[test]
fn test_one_swap_from_a_match_is_legal() {
    let grid = Grid::from_strs(
        &["AABACBB", "BBCCBCC", "BABCBCA", "CCBBCBB", "ACCBACC", "BBACCAC", "CBCBBAA"],
        3,
    )
    .unwrap();
    assert!(!grid.has_match());
    assert!(grid.has_legal_move());
}

#[test]
fn test_reshuffle_dead_board() {
    let mut grid = Grid::from_strs(&DEAD_5, 5).unwrap();
    let counts = grid.piece_counts();
    assert!(!grid.has_legal_move());

    grid.reshuffle(&mut BoardRng::new(11));

    assert!(grid.is_full());
    assert!(grid.scan(ScanMode::InitialCheck).is_empty());
    assert_eq!(grid.piece_counts(), counts);
}

#[test]
fn test_reshuffle_three_colors_stays_match_free() {
    let mut grid = Grid::from_strs(&DEAD_3, 3).unwrap();
    grid.reshuffle(&mut BoardRng::new(4));
    assert!(grid.is_full());
    assert!(!grid.has_match());
}

#[test]
fn test_color_bomb_area_targets_color() {
    let grid = Grid::from_strs(
        &["BADDECE", "ECEACBE", "AACEACA", "ACE@BEC", "CDCDDCD", "DCBEEDC", "CCEEAAB"],
        5,
    )
    .unwrap();
    let b = PieceKind::Regular(1);

    let area = grid.special_effect_area(Coord::new(3, 3), Some(b), &mut BoardRng::new(1));

    let mut expected: BTreeSet<Coord> = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Some(b))
        .map(|(idx, _)| Coord::new(idx / 7, idx % 7))
        .collect();
    expected.insert(Coord::new(3, 3));
    assert_eq!(area, expected);
    assert_eq!(
        area,
        coords(&[(0, 0), (1, 5), (3, 3), (3, 4), (5, 2), (6, 6)])
    );
}

#[test]
fn test_color_bomb_without_target_picks_present_color() {
    let grid = Grid::from_strs(&["@CCDD", "DDCCD", "CCDDC", "DDCCD", "CCDDC"], 5).unwrap();
    let area = grid.special_effect_area(Coord::new(0, 0), None, &mut BoardRng::new(3));

    let picked: BTreeSet<Option<PieceKind>> = area
        .iter()
        .filter(|pos| **pos != Coord::new(0, 0))
        .map(|pos| grid.cell(*pos))
        .collect();
    assert_eq!(picked.len(), 1);
    let color = picked.into_iter().next().flatten().and_then(|p| p.color());
    assert!(matches!(color, Some(2) | Some(3)));
}

#[test]
fn test_line_and_bomb_areas() {
    let grid = Grid::from_strs(&["CDCDC", "D-DCD", "CDC|C", "DCD*D", "CDCDC"], 5).unwrap();
    let mut rng = BoardRng::new(0);

    let row = grid.special_effect_area(Coord::new(1, 1), None, &mut rng);
    assert_eq!(row, coords(&[(1, 0), (1, 1), (1, 2), (1, 3), (1, 4)]));

    let col = grid.special_effect_area(Coord::new(2, 3), None, &mut rng);
    assert_eq!(col, coords(&[(0, 3), (1, 3), (2, 3), (3, 3), (4, 3)]));

    let bomb = grid.special_effect_area(Coord::new(3, 3), None, &mut rng);
    assert_eq!(bomb.len(), 9);
    assert!(bomb.contains(&Coord::new(2, 3)));
    assert!(bomb.contains(&Coord::new(4, 4)));
}

#[test]
fn test_valid_adjacent() {
    let grid = Grid::empty(5, 3);
    assert!(grid.valid_adjacent(Coord::new(0, 0), Coord::new(0, 1)));
    assert!(grid.valid_adjacent(Coord::new(4, 4), Coord::new(3, 4)));
    assert!(!grid.valid_adjacent(Coord::new(0, 0), Coord::new(1, 1)));
    assert!(!grid.valid_adjacent(Coord::new(2, 2), Coord::new(2, 2)));
    assert!(!grid.valid_adjacent(Coord::new(0, 4), Coord::new(0, 5)));
}
