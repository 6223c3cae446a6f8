//! Placement rule for the red numbers.
//!
//! 6 and 8 may not touch. "Touching" here is index based rather than true hex
//! topology: the slot to the left in the same row, and the slots at columns
//! `col - 1`, `col` and `col + 1` of the previous row, clipped to that row.
//! Across rows of different lengths this does not line up exactly with the
//! hex neighbors; the generator keeps it as is.

use crate::board::{Board, Token};

/// Positions already filled that count as neighbors of `(row, col)`.
///
/// Only slots visited earlier in row-major order are returned.
pub fn preceding_neighbors(board: &Board, row: usize, col: usize) -> Vec<(usize, usize)> {
    let mut neighbors = Vec::with_capacity(4);

    if col > 0 {
        neighbors.push((row, col - 1));
    }

    if row > 0 {
        let prev_len = board.row(row - 1).map_or(0, |r| r.len());
        if col > 0 && col - 1 < prev_len {
            neighbors.push((row - 1, col - 1));
        }
        if col < prev_len {
            neighbors.push((row - 1, col));
        }
        if col + 1 < prev_len {
            neighbors.push((row - 1, col + 1));
        }
    }

    neighbors
}

/// Whether `candidate` may be placed at `(row, col)`.
///
/// Non-red tokens are always admissible. Reads tokens only.
pub fn admissible(board: &Board, row: usize, col: usize, candidate: Token) -> bool {
    if !candidate.is_red() {
        return true;
    }

    !preceding_neighbors(board, row, col)
        .into_iter()
        .filter_map(|(r, c)| board.get(r, c).and_then(|t| t.token()))
        .any(|token| token.is_red())
}

/// Every pair of positions that violates the rule, for diagnostics and tests
pub fn red_conflicts(board: &Board) -> Vec<((usize, usize), (usize, usize))> {
    let mut conflicts = Vec::new();

    for (row, col) in board.positions() {
        let is_red = board
            .get(row, col)
            .and_then(|t| t.token())
            .is_some_and(|t| t.is_red());
        if !is_red {
            continue;
        }

        for (r, c) in preceding_neighbors(board, row, col) {
            if board.get(r, c).and_then(|t| t.token()).is_some_and(|t| t.is_red()) {
                conflicts.push(((r, c), (row, col)));
            }
        }
    }

    conflicts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardShape;
    use pretty_assertions::assert_eq;

    fn board_with(shape: Vec<usize>, placed: &[((usize, usize), Token)]) -> Board {
        let mut board = Board::skeleton(&BoardShape::new(shape));
        for &((row, col), token) in placed {
            board.get_mut(row, col).unwrap().assign_token(token).unwrap();
        }
        board
    }

    #[test]
    fn test_non_red_always_admissible() {
        let board = board_with(vec![3, 4], &[((0, 0), Token::Number(6)), ((0, 1), Token::Number(8))]);

        assert!(admissible(&board, 1, 1, Token::Number(5)));
        assert!(admissible(&board, 1, 1, Token::Desert));
        assert!(admissible(&board, 0, 2, Token::Number(12)));
    }

    #[test]
    fn test_left_neighbor_blocks_red() {
        let board = board_with(vec![3], &[((0, 0), Token::Number(8))]);
        assert!(!admissible(&board, 0, 1, Token::Number(6)));
        assert!(!admissible(&board, 0, 1, Token::Number(8)));
    }

    #[test]
    fn test_previous_row_window() {
        let placed = [
            ((0, 0), Token::Number(2)),
            ((0, 1), Token::Number(3)),
            ((0, 2), Token::Number(6)),
        ];
        let board = board_with(vec![3, 4], &placed);

        // Row 1 cols 1, 2 and 3 see (0, 2) through offsets +1, 0 and -1
        assert!(admissible(&board, 1, 0, Token::Number(8)));
        assert!(!admissible(&board, 1, 1, Token::Number(8)));
        assert!(!admissible(&board, 1, 2, Token::Number(8)));
        assert!(!admissible(&board, 1, 3, Token::Number(8)));
    }

    #[test]
    fn test_window_is_clipped_to_previous_row() {
        let board = board_with(vec![4, 3], &[]);
        assert_eq!(preceding_neighbors(&board, 1, 0), vec![(0, 0), (0, 1)]);
        assert_eq!(
            preceding_neighbors(&board, 1, 2),
            vec![(1, 1), (0, 1), (0, 2), (0, 3)]
        );

        let board = board_with(vec![3, 4], &[]);
        assert_eq!(preceding_neighbors(&board, 1, 3), vec![(1, 2), (0, 2)]);
        assert!(preceding_neighbors(&board, 0, 0).is_empty());
    }

    #[test]
    fn test_unfilled_neighbors_do_not_block() {
        let board = board_with(vec![3, 4], &[]);
        assert!(admissible(&board, 1, 1, Token::Number(6)));
    }

    #[test]
    fn test_red_conflicts_reports_pairs() {
        let placed = [
            ((0, 0), Token::Number(6)),
            ((0, 1), Token::Number(8)),
            ((0, 2), Token::Number(4)),
        ];
        let board = board_with(vec![3], &placed);
        assert_eq!(red_conflicts(&board), vec![((0, 0), (0, 1))]);
    }
}
