use serde::{Deserialize, Serialize};
use std::fmt;

/// Side length of every puzzle grid.
pub const DIMENSION: usize = 5;

/// Placeholder for an unfilled letter, both in guesses and on the board.
pub const BLANK: char = '_';

/// Glyph drawn for cells that are not part of any answer.
pub const BLOCKED_GLYPH: char = '■';

/// Whether `c` may appear in a guess (or an answer): `A`-`Z` or [`BLANK`].
pub fn is_guess_char(c: char) -> bool {
    c.is_ascii_uppercase() || c == BLANK
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cell {
    Blocked,
    Empty,
    Letter(char),
}

impl Cell {
    pub fn is_blocked(&self) -> bool {
        matches!(self, Cell::Blocked)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The character an answer is compared against, `None` for blocked cells.
    pub fn value(&self) -> Option<char> {
        match self {
            Cell::Blocked => None,
            Cell::Empty => Some(BLANK),
            Cell::Letter(c) => Some(*c),
        }
    }

    pub fn get_display_char(&self) -> char {
        self.value().unwrap_or(BLOCKED_GLYPH)
    }
}

/// Square board of cells, indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub size: usize,
    pub cells: Vec<Vec<Cell>>,
}

impl Grid {
    /// Create a grid where every cell is blocked.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![vec![Cell::Blocked; size]; size],
        }
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size
    }

    pub fn get_cell(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get(row)?.get(col)
    }

    pub fn get_cell_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut(row)?.get_mut(col)
    }

    /// Make a blocked cell fillable. Cells that are already open keep their contents.
    pub fn open_cell(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.get_cell_mut(row, col) {
            if cell.is_blocked() {
                *cell = Cell::Empty;
            }
        }
    }

    /// Write a guess character into an open cell; [`BLANK`] clears it.
    ///
    /// Blocked and off-grid cells are left alone. Returns whether the cell was written.
    pub fn set_value(&mut self, row: usize, col: usize, c: char) -> bool {
        match self.get_cell_mut(row, col) {
            Some(cell) if !cell.is_blocked() => {
                *cell = if c == BLANK { Cell::Empty } else { Cell::Letter(c) };
                true
            }
            _ => false,
        }
    }

    pub fn value(&self, row: usize, col: usize) -> Option<char> {
        self.get_cell(row, col).and_then(Cell::value)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // column labels line up with the cell glyphs below
        let labels: Vec<String> = (0..self.size).map(|i| i.to_string()).collect();
        writeln!(f, "     {}", labels.join("    "))?;
        writeln!(f, "  |{}", "-".repeat((6 * self.size).saturating_sub(3)))?;
        for (i, row) in self.cells.iter().enumerate() {
            write!(f, "{} |", i)?;
            for cell in row {
                write!(f, "  {}  ", cell.get_display_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
