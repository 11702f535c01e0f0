//! Pure move-selection policies over a board. Both take the RNG as a
//! parameter, so callers control seeding and tests are deterministic.

use rand::Rng;

use crate::game::{lines, Board, Cell};

/// Uniformly sample a column from the available ones. `None` when the
/// board is full.
pub fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<usize> {
    let columns = board.available_columns();
    if columns.is_empty() {
        return None;
    }
    Some(columns[rng.random_range(0..columns.len())])
}

/// Greedy one-ply policy, applied in strict priority order over ascending
/// columns:
///
/// 1. Win: the first column that completes an own line of `win_length`.
/// 2. Block: the first column where the opponent would complete one.
/// 3. Maximize: a uniform random choice among the columns maximizing the
///    own run length, when that maximum is positive.
/// 4. Fallback: a uniform random available column.
///
/// Returns `None` only when no columns are available.
pub fn heuristic_move<R: Rng>(
    board: &Board,
    own: Cell,
    opponent: Cell,
    win_length: usize,
    rng: &mut R,
) -> Option<usize> {
    let columns = board.available_columns();
    if columns.is_empty() {
        return None;
    }

    // Lookahead probes run on a scratch copy; the caller's board stays
    // shared and untouched.
    let mut scratch = board.clone();

    for &col in &columns {
        if lines::best_run_if_placed(&mut scratch, own, col) >= win_length {
            return Some(col);
        }
    }

    for &col in &columns {
        if lines::best_run_if_placed(&mut scratch, opponent, col) >= win_length {
            return Some(col);
        }
    }

    let mut best_run = 0;
    let mut best_cols: Vec<usize> = Vec::new();
    for &col in &columns {
        let run = lines::best_run_if_placed(&mut scratch, own, col);
        if run > best_run {
            best_run = run;
            best_cols.clear();
            best_cols.push(col);
        } else if run == best_run {
            best_cols.push(col);
        }
    }
    if best_run > 0 {
        return Some(best_cols[rng.random_range(0..best_cols.len())]);
    }

    Some(columns[rng.random_range(0..columns.len())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn full_board() -> Board {
        let mut board = Board::new(6, 7).unwrap();
        for col in 0..7 {
            for _ in 0..6 {
                board.drop_piece(Cell::Circle, col).unwrap();
            }
        }
        board
    }

    #[test]
    fn test_random_move_is_available() {
        let mut board = Board::new(6, 7).unwrap();
        for _ in 0..6 {
            board.drop_piece(Cell::Circle, 3).unwrap();
        }
        let mut rng = rng();
        for _ in 0..100 {
            let col = random_move(&board, &mut rng).unwrap();
            assert_ne!(col, 3);
            assert!(col < 7);
        }
    }

    #[test]
    fn test_random_move_full_board() {
        let board = full_board();
        assert_eq!(random_move(&board, &mut rng()), None);
    }

    #[test]
    fn test_heuristic_takes_win() {
        // Three circles on the bottom row: column 3 completes the line
        let mut board = Board::new(6, 7).unwrap();
        for col in 0..3 {
            board.drop_piece(Cell::Circle, col).unwrap();
        }
        let col = heuristic_move(&board, Cell::Circle, Cell::Cross, 4, &mut rng());
        assert_eq!(col, Some(3));
    }

    #[test]
    fn test_heuristic_blocks_opponent() {
        // Cross threatens at column 3; Circle has no win of its own and
        // must block, even though its own pieces sit elsewhere.
        let mut board = Board::new(6, 7).unwrap();
        for col in 0..3 {
            board.drop_piece(Cell::Cross, col).unwrap();
        }
        board.drop_piece(Cell::Circle, 5).unwrap();
        board.drop_piece(Cell::Circle, 6).unwrap();

        let col = heuristic_move(&board, Cell::Circle, Cell::Cross, 4, &mut rng());
        assert_eq!(col, Some(3));
    }

    #[test]
    fn test_heuristic_prefers_win_over_block() {
        // Both sides threaten a four: Circle on the bottom row at 0..3,
        // Cross stacked above it. Circle should take its own win.
        let mut board = Board::new(6, 7).unwrap();
        for col in 0..3 {
            board.drop_piece(Cell::Circle, col).unwrap();
            board.drop_piece(Cell::Cross, col).unwrap();
        }
        // Cross also threatens vertically in column 6
        for _ in 0..3 {
            board.drop_piece(Cell::Cross, 6).unwrap();
        }

        let col = heuristic_move(&board, Cell::Circle, Cell::Cross, 4, &mut rng());
        assert_eq!(col, Some(3));
    }

    #[test]
    fn test_heuristic_block_beats_own_longer_run() {
        // Cross is about to win at column 0; Circle's best run elsewhere is
        // a three, which must not outrank the block.
        let mut board = Board::new(6, 7).unwrap();
        for _ in 0..3 {
            board.drop_piece(Cell::Cross, 0).unwrap();
        }
        board.drop_piece(Cell::Circle, 4).unwrap();
        board.drop_piece(Cell::Circle, 5).unwrap();

        let col = heuristic_move(&board, Cell::Circle, Cell::Cross, 4, &mut rng());
        assert_eq!(col, Some(0));
    }

    #[test]
    fn test_heuristic_maximizes_own_run() {
        // Two circles at 4,5: columns 3 and 6 both extend to a run of 3,
        // every other column yields at most 1. The choice must come from
        // the maximizing set.
        let mut board = Board::new(6, 7).unwrap();
        board.drop_piece(Cell::Circle, 4).unwrap();
        board.drop_piece(Cell::Circle, 5).unwrap();

        let mut rng = rng();
        for _ in 0..50 {
            let col = heuristic_move(&board, Cell::Circle, Cell::Cross, 4, &mut rng).unwrap();
            assert!(col == 3 || col == 6, "column {col} does not maximize");
        }
    }

    #[test]
    fn test_heuristic_full_board() {
        let board = full_board();
        assert_eq!(
            heuristic_move(&board, Cell::Circle, Cell::Cross, 4, &mut rng()),
            None
        );
    }

    #[test]
    fn test_heuristic_does_not_mutate_board() {
        let mut board = Board::new(6, 7).unwrap();
        for col in 0..3 {
            board.drop_piece(Cell::Cross, col).unwrap();
        }
        let before = board.clone();
        heuristic_move(&board, Cell::Circle, Cell::Cross, 4, &mut rng());
        assert_eq!(board, before);
    }

    #[test]
    fn test_heuristic_respects_win_length() {
        // With win length 5, three in a row plus one is not yet a win, so
        // the win rule must not fire; the maximize rule extends the run.
        let mut board = Board::new(6, 8).unwrap();
        for col in 1..4 {
            board.drop_piece(Cell::Circle, col).unwrap();
        }
        let mut rng = rng();
        for _ in 0..50 {
            let col = heuristic_move(&board, Cell::Circle, Cell::Cross, 5, &mut rng).unwrap();
            assert!(col == 0 || col == 4, "column {col} does not extend the run");
        }
    }
}
