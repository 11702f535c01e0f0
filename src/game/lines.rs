//! Line detection: run counting through an anchor cell, win checks for the
//! most recent drop in a column, and a non-mutating placement lookahead used
//! by the heuristic AI.

use super::board::{Board, Cell};

/// The four axes checked for lines: horizontal, vertical, and both
/// diagonals. Each axis is scanned in both signed directions from the
/// anchor cell, so the mirror of each vector is covered.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Count consecutive cells holding exactly `cell`, starting one step beyond
/// `(row, col)` in direction `(d_row, d_col)` and walking until the grid
/// boundary or a non-matching cell. The origin cell itself is not counted.
pub fn count_run(
    board: &Board,
    row: usize,
    col: usize,
    cell: Cell,
    d_row: i32,
    d_col: i32,
) -> usize {
    let mut count = 0;
    let mut r = row as i32 + d_row;
    let mut c = col as i32 + d_col;

    while r >= 0
        && c >= 0
        && (r as usize) < board.rows()
        && (c as usize) < board.cols()
        && board.get(r as usize, c as usize) == cell
    {
        count += 1;
        r += d_row;
        c += d_col;
    }

    count
}

/// Total run length through `(row, col)` along one axis: the anchor plus
/// the runs in both signed directions.
fn axis_total(board: &Board, row: usize, col: usize, cell: Cell, axis: (i32, i32)) -> usize {
    let (d_row, d_col) = axis;
    1 + count_run(board, row, col, cell, d_row, d_col)
        + count_run(board, row, col, cell, -d_row, -d_col)
}

/// Check whether the most recent drop into `col` completed a line of at
/// least `win_length`.
///
/// The anchor is the topmost occupied cell of the column, which under
/// gravity placement is always the most recently placed piece there (the
/// column's occupied cells are contiguous from the bottom; this would not
/// hold for non-gravity variants). Fails closed: an out-of-range or empty
/// column is never a win.
pub fn check_win(board: &Board, col: usize, win_length: usize) -> bool {
    if col >= board.cols() || win_length == 0 {
        return false;
    }

    let Some(row) = (0..board.rows()).find(|&r| board.get(r, col) != Cell::Empty) else {
        return false;
    };
    let cell = board.get(row, col);

    DIRECTIONS
        .iter()
        .any(|&axis| axis_total(board, row, col, cell, axis) >= win_length)
}

/// A piece written into the board for the duration of a lookahead, removed
/// again on drop. Restoration runs on every exit path, so no phantom piece
/// can leak even if the computation using the trial unwinds.
struct TrialPlacement<'a> {
    board: &'a mut Board,
    row: usize,
    col: usize,
}

impl<'a> TrialPlacement<'a> {
    /// Place `cell` at the landing row of `col`, or `None` if the column is
    /// full or out of range.
    fn place(board: &'a mut Board, cell: Cell, col: usize) -> Option<Self> {
        let row = board.landing_row(col)?;
        board.set(row, col, cell);
        Some(TrialPlacement { board, row, col })
    }
}

impl Drop for TrialPlacement<'_> {
    fn drop(&mut self) {
        self.board.set(self.row, self.col, Cell::Empty);
    }
}

/// The best run length achievable by dropping `cell` into `col`: the
/// maximum of the four axis totals through the landing cell. Returns 0 if
/// the column is full or out of range.
///
/// The board compares equal before and after the call; the trial piece is
/// scoped to this function.
pub fn best_run_if_placed(board: &mut Board, cell: Cell, col: usize) -> usize {
    let Some(trial) = TrialPlacement::place(board, cell, col) else {
        return 0;
    };
    let (row, col) = (trial.row, trial.col);

    DIRECTIONS
        .iter()
        .map(|&axis| axis_total(trial.board, row, col, cell, axis))
        .max()
        .unwrap_or(0)
}
