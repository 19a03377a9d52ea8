//! Fixed 8x8 board value

use std::fmt;
use std::str::FromStr;

use super::{Cell, Color, Pos, BOARD_SIZE};
use crate::error::ProtocolError;

/// Game board.
///
/// A plain `Copy` value: every transformation returns a new board, so a
/// search frame can hand a board to its children without sharing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Empty board (no pieces)
    pub const fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting position
    pub fn new() -> Self {
        Self::empty()
            .with_cell(Pos::new(3, 3), Cell::White)
            .with_cell(Pos::new(3, 4), Cell::Black)
            .with_cell(Pos::new(4, 3), Cell::Black)
            .with_cell(Pos::new(4, 4), Cell::White)
    }

    /// Build a board from row-major cells
    pub const fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn size(&self) -> usize {
        BOARD_SIZE
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Copy of this board with one cell replaced
    #[inline]
    #[must_use]
    pub fn with_cell(&self, pos: Pos, cell: Cell) -> Board {
        let mut next = *self;
        next.set(pos, cell);
        next
    }

    /// In-place write, only used on a board the caller already owns
    #[inline]
    pub(crate) fn set(&mut self, pos: Pos, cell: Cell) {
        self.cells[pos.row as usize][pos.col as usize] = cell;
    }

    /// Rows in top-to-bottom order
    #[inline]
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Number of pieces of a color
    pub fn count(&self, color: Color) -> u32 {
        let target = Cell::from(color);
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count() as u32
    }

    /// Total pieces on board
    #[inline]
    pub fn piece_count(&self) -> u32 {
        self.count(Color::Black) + self.count(Color::White)
    }

    /// All 64 cells occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&cell| cell != Cell::Empty)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Text form: 8 lines of `.`, `B`, `W` (whitespace between lines ignored)
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Black => 'B',
                    Cell::White => 'W',
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.len() != BOARD_SIZE {
            return Err(ProtocolError::RowCount(lines.len()));
        }

        let mut board = Board::empty();
        for (row, line) in lines.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != BOARD_SIZE {
                return Err(ProtocolError::ColumnCount {
                    row,
                    len: chars.len(),
                });
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    '.' => Cell::Empty,
                    'B' | 'b' | 'X' | 'x' => Cell::Black,
                    'W' | 'w' | 'O' | 'o' => Cell::White,
                    other => {
                        return Err(ProtocolError::CellToken {
                            row,
                            col,
                            token: other.to_string(),
                        })
                    }
                };
                board.set(Pos::new(row as u8, col as u8), cell);
            }
        }
        Ok(board)
    }
}
