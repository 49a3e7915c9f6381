use std::fmt;
use std::str::FromStr;

use super::side::Side;
use crate::error::{BoardParseError, MoveError};

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Middle column, `floor(COLS / 2)`.
pub const CENTER_COL: usize = COLS / 2;

/// Length of a winning line.
pub const WINDOW: usize = 4;

/// Horizontal, vertical, down-right and up-right.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    A,
    B,
}

impl Cell {
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => Side::A.symbol(),
            Cell::B => Side::B.symbol(),
        }
    }

    pub fn side(self) -> Option<Side> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Side::A),
            Cell::B => Some(Side::B),
        }
    }
}

/// A Connect Four grid. Row 0 is the top, row `ROWS - 1` the bottom.
///
/// Boards are plain `Copy` values: every transition returns a new board and
/// the search recursion keeps each one on its own stack frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board from text rows, top row first.
    ///
    /// `.` is empty, `X` is side A, `O` is side B. Whitespace inside a row is
    /// ignored, so `". . X O . . ."` and `"..XO..."` are equivalent.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, BoardParseError> {
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount(rows.len()));
        }

        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line
                .as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .collect();
            if symbols.len() != COLS {
                return Err(BoardParseError::RowWidth {
                    row,
                    width: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                cells[row][col] = match symbol {
                    '.' | '_' => Cell::Empty,
                    'X' | 'x' => Cell::A,
                    'O' | 'o' => Cell::B,
                    other => {
                        return Err(BoardParseError::UnknownSymbol {
                            row,
                            col,
                            symbol: other,
                        })
                    }
                };
            }
        }

        let board = Board { cells };
        if let Some(col) = board.floating_column() {
            return Err(BoardParseError::FloatingPiece(col));
        }
        Ok(board)
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// True iff `col` is on the board and its top cell is empty.
    pub fn is_valid_move(&self, col: usize) -> bool {
        !self.is_column_full(col)
    }

    /// Row a piece dropped in `col` would land on, if the column has room.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Drop a piece for `side` into `col` and return the resulting board.
    ///
    /// The caller must have checked [`Board::is_valid_move`]; dropping into a
    /// full column is a precondition violation.
    pub fn drop_piece(&self, col: usize, side: Side) -> Board {
        debug_assert!(self.is_valid_move(col), "drop into full column {col}");
        let mut next = *self;
        if let Some(row) = self.landing_row(col) {
            next.cells[row][col] = side.to_cell();
        }
        next
    }

    /// Checked drop, returning the new board and the row the piece landed on.
    pub fn try_drop(&self, col: usize, side: Side) -> Result<(Board, usize), MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn(col));
        }
        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        let mut next = *self;
        next.cells[row][col] = side.to_cell();
        Ok((next, row))
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Number of pieces `side` has on the board.
    pub fn count(&self, side: Side) -> usize {
        let cell = side.to_cell();
        self.cells.iter().flatten().filter(|&&c| c == cell).count()
    }

    /// Every run of `WINDOW` consecutive cells along a row, a column or either
    /// diagonal. A 6x7 board has 69 of them.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW]> + '_ {
        DIRECTIONS.iter().flat_map(move |&(dr, dc)| {
            (0..ROWS as isize).flat_map(move |row| {
                (0..COLS as isize).filter_map(move |col| self.window_at(row, col, dr, dc))
            })
        })
    }

    fn window_at(&self, row: isize, col: isize, dr: isize, dc: isize) -> Option<[Cell; WINDOW]> {
        let last = WINDOW as isize - 1;
        let (end_row, end_col) = (row + dr * last, col + dc * last);
        if !(0..ROWS as isize).contains(&end_row) || !(0..COLS as isize).contains(&end_col) {
            return None;
        }
        let mut window = [Cell::Empty; WINDOW];
        for (i, slot) in window.iter_mut().enumerate() {
            let i = i as isize;
            *slot = self.cells[(row + dr * i) as usize][(col + dc * i) as usize];
        }
        Some(window)
    }

    /// First column with an occupied cell above an empty one, if any.
    fn floating_column(&self) -> Option<usize> {
        (0..COLS).find(|&col| {
            (0..ROWS - 1).any(|row| {
                self.cells[row][col] != Cell::Empty && self.cells[row + 1][col] == Cell::Empty
            })
        })
    }

    /// Gravity invariant: no piece rests above an empty cell.
    pub fn is_settled(&self) -> bool {
        self.floating_column().is_none()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            let line: String = self.cells[row].iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Rows are separated by newlines or `/`; blank lines are skipped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .split(|c| c == '\n' || c == '/')
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Board::from_rows(&rows)
    }
}
