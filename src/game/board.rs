use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

use super::cell::Cell;

/// Number of same-owned contiguous cells that completes a line.
pub const LINE_LENGTH: usize = 4;

/// Fixed board dimensions, selected once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardPreset {
    /// 7 columns x 6 rows, the classic board.
    #[default]
    Normal,
    /// 9 columns x 7 rows.
    Big,
    /// 5 columns x 4 rows.
    Small,
}

impl BoardPreset {
    /// Board dimensions as (rows, columns).
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            BoardPreset::Normal => (6, 7),
            BoardPreset::Big => (7, 9),
            BoardPreset::Small => (4, 5),
        }
    }
}

impl FromStr for BoardPreset {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" => Ok(BoardPreset::Normal),
            "big" => Ok(BoardPreset::Big),
            "small" => Ok(BoardPreset::Small),
            other => Err(GameError::InvalidBoardType(other.to_string())),
        }
    }
}

/// A position on the board. Row 0 is the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardPoint {
    pub column: usize,
    pub row: usize,
}

/// The playing grid plus per-column fill heights.
///
/// Gravity invariant: `column_heights[c]` equals the count of occupied
/// cells in column c, and those cells are exactly the bottom
/// `column_heights[c]` rows of the column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>, // row-major
    column_heights: Vec<usize>,
}

impl Board {
    /// Create an empty board with the preset's dimensions.
    pub fn new(preset: BoardPreset) -> Self {
        let (rows, columns) = preset.dimensions();
        Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
            column_heights: vec![0; columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cell at (row, col). Callers guarantee bounds via height tracking.
    pub fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.columns + col]
    }

    /// Number of occupied cells in a column, counted from the bottom.
    pub fn column_height(&self, col: usize) -> usize {
        self.column_heights[col]
    }

    /// Occupy the cell at (row, col) and bump the column height. The two
    /// updates must never happen independently.
    pub(crate) fn place(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.columns + col] = cell;
        self.column_heights[col] += 1;
    }

    /// Whether every column is filled to the top.
    pub fn is_full(&self) -> bool {
        self.column_heights.iter().all(|&height| height == self.rows)
    }

    /// Empty every cell and zero every height. Keeps the allocation.
    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.column_heights.fill(0);
    }
}

impl fmt::Display for Board {
    /// Formatted grid with 1-indexed column headers, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn rule(f: &mut fmt::Formatter<'_>, columns: usize, fill: char) -> fmt::Result {
            write!(f, "+")?;
            for _ in 0..columns {
                write!(f, "{fill}{fill}{fill}+")?;
            }
            writeln!(f)
        }

        rule(f, self.columns, '-')?;
        write!(f, "|")?;
        for col in 0..self.columns {
            write!(f, " {} |", col + 1)?;
        }
        writeln!(f)?;
        rule(f, self.columns, '=')?;
        for row in 0..self.rows {
            write!(f, "|")?;
            for col in 0..self.columns {
                write!(f, " {} |", self.cell(row, col).symbol())?;
            }
            writeln!(f)?;
            rule(f, self.columns, '-')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_dimensions() {
        assert_eq!(BoardPreset::Normal.dimensions(), (6, 7));
        assert_eq!(BoardPreset::Big.dimensions(), (7, 9));
        assert_eq!(BoardPreset::Small.dimensions(), (4, 5));
    }

    #[test]
    fn test_preset_from_str() {
        assert_eq!("normal".parse::<BoardPreset>(), Ok(BoardPreset::Normal));
        assert_eq!("BIG".parse::<BoardPreset>(), Ok(BoardPreset::Big));
        assert_eq!("Small".parse::<BoardPreset>(), Ok(BoardPreset::Small));
        assert_eq!(
            "huge".parse::<BoardPreset>(),
            Err(GameError::InvalidBoardType("huge".to_string()))
        );
    }

    #[test]
    fn test_new_board_is_empty() {
        for preset in [BoardPreset::Normal, BoardPreset::Big, BoardPreset::Small] {
            let board = Board::new(preset);
            let (rows, columns) = preset.dimensions();
            assert_eq!(board.rows(), rows);
            assert_eq!(board.columns(), columns);
            for row in 0..rows {
                for col in 0..columns {
                    assert_eq!(board.cell(row, col), Cell::Empty);
                }
            }
            for col in 0..columns {
                assert_eq!(board.column_height(col), 0);
            }
        }
    }

    #[test]
    fn test_place_updates_cell_and_height_together() {
        let mut board = Board::new(BoardPreset::Normal);
        board.place(5, 2, Cell::First);
        assert_eq!(board.cell(5, 2), Cell::First);
        assert_eq!(board.column_height(2), 1);
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(BoardPreset::Small);
        assert!(!board.is_full());
        for col in 0..board.columns() {
            for row in (0..board.rows()).rev() {
                board.place(row, col, Cell::Second);
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new(BoardPreset::Small);
        board.place(3, 0, Cell::First);
        board.place(2, 0, Cell::Second);
        board.reset();
        for row in 0..board.rows() {
            for col in 0..board.columns() {
                assert_eq!(board.cell(row, col), Cell::Empty);
            }
        }
        for col in 0..board.columns() {
            assert_eq!(board.column_height(col), 0);
        }
    }

    #[test]
    fn test_display_has_headers_and_pieces() {
        let mut board = Board::new(BoardPreset::Small);
        board.place(3, 0, Cell::First);
        board.place(3, 1, Cell::Second);
        let rendered = board.to_string();
        // 1-indexed headers for all five columns.
        assert!(rendered.contains("| 1 | 2 | 3 | 4 | 5 |"));
        // Bottom row printed last, with both pieces.
        assert!(rendered.contains("| 1 | 2 |   |   |   |"));
    }
}
