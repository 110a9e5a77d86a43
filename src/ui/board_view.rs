//! Text rendering of the board
//!
//! Columns and rows are labelled with the 1-based numbers the prompts ask
//! for. Cells show `B`, `W` or `_`.

use std::fmt::Write;

use crate::board::{Board, Pos};

const TITLE: &str = "Board";

/// Render `board` as a framed grid, one row per line.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let label = digits(size);
    let margin = label + 3;
    let width = margin + size * (label + 1);
    let bar = (width - TITLE.len()) / 2;

    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "{}{}{}", "_".repeat(bar), TITLE, "_".repeat(bar));

    out.push_str(&" ".repeat(margin));
    for column in 1..=size {
        let _ = write!(out, "{:<label$} ", column);
    }
    out.push('\n');
    let _ = writeln!(out, "{}{}", " ".repeat(margin), "_".repeat(size * (label + 1) - 1));

    for y in 0..size {
        let _ = write!(out, "{:>label$} | ", y + 1);
        for x in 0..size {
            let stone = board.get(Pos::new(x as u8, y as u8));
            let _ = write!(out, "{:<label$} ", stone.symbol());
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", "_".repeat(width));
    out
}

fn digits(mut n: usize) -> usize {
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}
