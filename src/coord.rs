//! Player-facing coordinates: a column letter plus a 1-based row number.

use core::fmt;

/// A cell on the board, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Parse text such as `A1`, `1A` or `j10` against a board of `board_size`.
    ///
    /// The column is a single letter (case-insensitive), the row a 1-based
    /// decimal number; they may come in either order. Surrounding whitespace
    /// is ignored. Returns `None` for malformed text or a cell outside the
    /// board.
    pub fn parse(input: &str, board_size: usize) -> Option<Self> {
        let input = input.trim();
        let first = input.chars().next()?;
        let last = input.chars().next_back()?;

        let (letter, digits) = if first.is_ascii_alphabetic() {
            (first, &input[first.len_utf8()..])
        } else if last.is_ascii_alphabetic() {
            (last, &input[..input.len() - last.len_utf8()])
        } else {
            return None;
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let col = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
        let row = digits.parse::<usize>().ok()?.checked_sub(1)?;
        if row >= board_size || col >= board_size {
            return None;
        }
        Some(Self { row, col })
    }

    /// Column letter for a zero-based column index.
    pub fn column_label(col: usize) -> char {
        (b'A' + (col % 26) as u8) as char
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::column_label(self.col), self.row + 1)
    }
}
