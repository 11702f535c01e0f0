use crate::error::GameError;

/// Smallest board allowed by the rules.
pub const MIN_ROWS: usize = 6;
pub const MIN_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Circle,
    Cross,
}

/// A `rows x cols` grid with gravity placement. Row 0 is the top row,
/// row `rows - 1` is the bottom. Dimensions are fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board. Fails with `InvalidDimensions` when the
    /// board is smaller than the 6x7 minimum.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GameError> {
        if rows < MIN_ROWS || cols < MIN_COLS {
            return Err(GameError::InvalidDimensions {
                rows,
                cols,
                min_rows: MIN_ROWS,
                min_cols: MIN_COLS,
            });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Check if a column can still receive a piece: its topmost cell is empty.
    /// Out-of-range columns are never available.
    pub fn column_available(&self, col: usize) -> bool {
        col < self.cols && self.get(0, col) == Cell::Empty
    }

    /// Indices of all columns that can receive a piece, ascending.
    /// Recomputed on each call.
    pub fn available_columns(&self) -> Vec<usize> {
        (0..self.cols)
            .filter(|&col| self.column_available(col))
            .collect()
    }

    /// Drop a piece in a column, returning the row where it landed.
    /// On failure the board is unchanged.
    pub fn drop_piece(&mut self, cell: Cell, col: usize) -> Result<usize, GameError> {
        if col >= self.cols {
            return Err(GameError::InvalidColumn {
                col,
                cols: self.cols,
            });
        }
        match self.landing_row(col) {
            Some(row) => {
                self.set(row, col, cell);
                Ok(row)
            }
            None => Err(GameError::ColumnFull(col)),
        }
    }

    /// Lowest empty row of a column (where a dropped piece would land),
    /// or `None` if the column is full or out of range.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= self.cols {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// True iff any cell is still empty. Used for draw detection.
    pub fn has_empty_cell(&self) -> bool {
        self.cells.contains(&Cell::Empty)
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        !self.has_empty_cell()
    }
}
