use crate::error::GameError;

use super::board::{MIN_COLS, MIN_ROWS};

/// Smallest win length allowed by the rules.
pub const MIN_WIN_LENGTH: usize = 4;

/// Per-match settings: board dimensions and the line length required to
/// win. Immutable once a match starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    rows: usize,
    cols: usize,
    win_length: usize,
}

impl Rules {
    /// Validate and build match rules. The board must be at least 6x7 and
    /// the win length must lie in `[4, min(rows, cols)]`.
    pub fn new(rows: usize, cols: usize, win_length: usize) -> Result<Self, GameError> {
        if rows < MIN_ROWS || cols < MIN_COLS {
            return Err(GameError::InvalidDimensions {
                rows,
                cols,
                min_rows: MIN_ROWS,
                min_cols: MIN_COLS,
            });
        }
        let max_win_length = rows.min(cols);
        if win_length < MIN_WIN_LENGTH || win_length > max_win_length {
            return Err(GameError::InvalidWinLength {
                win_length,
                min: MIN_WIN_LENGTH,
                max: max_win_length,
            });
        }
        Ok(Rules {
            rows,
            cols,
            win_length,
        })
    }

    /// Classic Connect Four: 6x7 board, four in a row.
    pub fn classic() -> Self {
        Rules {
            rows: MIN_ROWS,
            cols: MIN_COLS,
            win_length: MIN_WIN_LENGTH,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_rules() {
        let rules = Rules::classic();
        assert_eq!(rules.rows(), 6);
        assert_eq!(rules.cols(), 7);
        assert_eq!(rules.win_length(), 4);
    }

    #[test]
    fn test_dimension_boundaries() {
        assert!(Rules::new(6, 7, 4).is_ok());
        assert!(matches!(
            Rules::new(5, 7, 4),
            Err(GameError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Rules::new(6, 6, 4),
            Err(GameError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_win_length_boundaries() {
        // Bounded above by min(rows, cols)
        assert!(Rules::new(6, 9, 6).is_ok());
        assert!(matches!(
            Rules::new(6, 9, 7),
            Err(GameError::InvalidWinLength { max: 6, .. })
        ));
        assert!(matches!(
            Rules::new(6, 7, 3),
            Err(GameError::InvalidWinLength { min: 4, .. })
        ));
    }
}
