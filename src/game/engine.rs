use crate::error::GameError;

use super::board::{Board, BoardPoint, BoardPreset, LINE_LENGTH};
use super::cell::Cell;
use super::player::Player;

/// Result of a finished game. `None` from
/// [`GameEngine::evaluate_outcome`] means the game continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Draw,
    Winner(Player),
}

/// The rules engine. Owns the active board, applies moves, and detects
/// wins and draws after each placement.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
}

impl GameEngine {
    pub fn new(preset: BoardPreset) -> Self {
        GameEngine {
            board: Board::new(preset),
        }
    }

    /// Read-only view of the active board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Drop a piece for `player` into `column`.
    ///
    /// The piece lands on the lowest empty cell, `rows - height - 1`.
    /// Cell and column height are updated together; a failed move leaves
    /// the board untouched. This is the sole mutator of cell state.
    pub fn apply_move(&mut self, column: usize, player: Player) -> Result<BoardPoint, GameError> {
        if column >= self.board.columns() {
            return Err(GameError::ColumnOutOfBounds {
                column,
                columns: self.board.columns(),
            });
        }
        let height = self.board.column_height(column);
        if height >= self.board.rows() {
            return Err(GameError::ColumnFull(column));
        }
        let row = self.board.rows() - height - 1;
        self.board.place(row, column, player.to_cell());
        Ok(BoardPoint { column, row })
    }

    /// Outcome after the move that placed `player`'s piece at `point`.
    ///
    /// Fullness is checked first: a full board is a draw even when the
    /// filling move also completed a line. `None` means the game
    /// continues.
    pub fn evaluate_outcome(&self, point: BoardPoint, player: Player) -> Option<GameOutcome> {
        if self.board.is_full() {
            return Some(GameOutcome::Draw);
        }
        if self.is_winning_move(point, player.to_cell()) {
            return Some(GameOutcome::Winner(player));
        }
        None
    }

    /// Whether the piece at `point` completes a line of exactly
    /// [`LINE_LENGTH`] cells along any of the four axes.
    ///
    /// Exact equality, not `>=`: the check runs after every placement,
    /// so a run grows one cell at a time and fires the moment it reaches
    /// four. A pre-existing longer run through `point` does not count.
    pub fn is_winning_move(&self, point: BoardPoint, cell: Cell) -> bool {
        if self.board.cell(point.row, point.column) != cell {
            return false;
        }
        // Horizontal, vertical, primary diagonal, secondary diagonal.
        const AXES: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];
        AXES.iter()
            .any(|&(dr, dc)| self.line_length(point, cell, dr, dc) == LINE_LENGTH)
    }

    /// Run length through `point` along the axis `(dr, dc)`: both
    /// inclusive directional walks, minus one so the origin is counted
    /// once.
    fn line_length(&self, point: BoardPoint, cell: Cell, dr: i32, dc: i32) -> usize {
        self.directional_run(point, cell, dr, dc) + self.directional_run(point, cell, -dr, -dc) - 1
    }

    /// Matching cells walking from `point` (inclusive) in direction
    /// `(dr, dc)` until a mismatch or the edge of the board.
    fn directional_run(&self, point: BoardPoint, cell: Cell, dr: i32, dc: i32) -> usize {
        let mut row = point.row as i32;
        let mut col = point.column as i32;
        let mut count = 0;
        while row >= 0
            && row < self.board.rows() as i32
            && col >= 0
            && col < self.board.columns() as i32
            && self.board.cell(row as usize, col as usize) == cell
        {
            count += 1;
            row += dr;
            col += dc;
        }
        count
    }

    /// Columns that can still take a piece.
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..self.board.columns())
            .filter(|&col| self.board.column_height(col) < self.board.rows())
            .collect()
    }

    /// Clear the board for a new game.
    pub fn reset(&mut self) {
        self.board.reset();
    }

    /// Deep, independent copy of the current board, for speculative move
    /// search.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Replace the held board, discarding the current one.
    pub fn restore(&mut self, board: Board) {
        self.board = board;
    }
}
