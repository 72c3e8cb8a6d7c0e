use anchor_lang::prelude::*;
use std::fmt;

/// Position of a job spot in the grid. Rows render as letters, columns as
/// 1-based numbers, so `{row: 1, col: 2}` is `B3`. Rows past `Z` fall back
/// to `R{row}C{col}`, both 1-based.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: u8,
    pub col: u8,
}

impl Coordinate {
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major walk over a `grid_size` x `grid_size` grid
    pub fn all(grid_size: u8) -> impl Iterator<Item = Coordinate> {
        (0..grid_size).flat_map(move |row| (0..grid_size).map(move |col| Coordinate { row, col }))
    }

    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Parse a label such as `A1` or `J10`. Returns `None` for anything that
    /// does not name a row letter followed by a column number >= 1.
    pub fn from_label(label: &str) -> Option<Self> {
        let mut chars = label.chars();
        let letter = chars.next()?.to_ascii_uppercase();
        if !letter.is_ascii_uppercase() {
            return None;
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let column: u8 = digits.parse().ok()?;
        Some(Self {
            row: letter as u8 - b'A',
            col: column.checked_sub(1)?,
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let column = self.col as u16 + 1;
        if self.row < 26 {
            write!(f, "{}{}", (b'A' + self.row) as char, column)
        } else {
            write!(f, "R{}C{}", self.row as u16 + 1, column)
        }
    }
}
