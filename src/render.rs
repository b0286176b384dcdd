//! Board printing for the headless runner.
//!
//! `encode_board_into` builds a sequence of crossterm commands without writing to
//! stdout; `board_to_text` is the uncolored form, one fixture-notation row per line.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    QueueableCommand,
};

use crate::core::Grid;
use crate::types::{PieceKind, Theme};

const PALETTE: [Color; 8] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::DarkYellow,
    Color::Grey,
];

fn piece_color(piece: PieceKind) -> Color {
    match piece {
        PieceKind::Regular(color) => PALETTE[color as usize % PALETTE.len()],
        PieceKind::Special(_) => Color::White,
    }
}

/// Encode the board as styled rows into `out`.
pub fn encode_board_into(grid: &Grid, out: &mut Vec<u8>) -> Result<()> {
    for row in grid.rows() {
        for cell in row {
            match cell {
                Some(piece) => {
                    out.queue(SetForegroundColor(piece_color(*piece)))?;
                    if piece.is_special() {
                        out.queue(SetAttribute(Attribute::Bold))?;
                    }
                    out.queue(Print(piece.to_char()))?;
                    out.queue(SetAttribute(Attribute::Reset))?;
                }
                None => {
                    out.queue(ResetColor)?;
                    out.queue(Print('.'))?;
                }
            }
            out.queue(Print(' '))?;
        }
        out.queue(Print("\r\n"))?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Legend mapping each regular letter to the theme's piece name.
pub fn legend(theme: &Theme) -> String {
    (0..theme.piece_kinds())
        .filter_map(|color| {
            let name = theme.piece_name(color)?;
            Some(format!("{}={}", PieceKind::Regular(color).to_char(), name))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn board_to_text(grid: &Grid) -> String {
    let mut text = grid.to_strings().join("\n");
    text.push('\n');
    text
}

pub fn print_board(grid: &Grid) -> Result<()> {
    let mut buf = Vec::with_capacity(grid.size() * grid.size() * 16);
    encode_board_into(grid, &mut buf)?;
    let mut stdout = io::stdout();
    stdout.write_all(&buf)?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_to_text() {
        let grid = Grid::from_strs(&["AB-..", "CDE|*", "ABCDE", "@BCDA", "EDCBA"], 5).unwrap();
        assert_eq!(board_to_text(&grid), "AB-..\nCDE|*\nABCDE\n@BCDA\nEDCBA\n");
    }

    #[test]
    fn test_encode_contains_every_piece() {
        let grid = Grid::from_strs(&["AB-..", "CDE|*", "ABCDE", "@BCDA", "EDCBA"], 5).unwrap();
        let mut buf = Vec::new();
        encode_board_into(&grid, &mut buf).unwrap();
        let text = String::from_utf8_lossy(&buf);
        for ch in ['A', 'B', 'C', 'D', 'E', '-', '|', '*', '@', '.'] {
            assert!(text.contains(ch), "missing {ch}");
        }
    }

    #[test]
    fn test_legend_names_theme_pieces() {
        let theme = Theme::by_name("pirates").unwrap();
        assert!(legend(theme).starts_with("A=parrot B=pirates"));
    }
}
