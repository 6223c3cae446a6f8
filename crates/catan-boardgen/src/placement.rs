//! Random token placement.
//!
//! Slots are visited once in row-major order. Each slot draws uniformly from
//! the pool entries that are admissible there (duplicates count separately,
//! so a value held twice is twice as likely). A slot with no admissible entry
//! ends the attempt; there is no backtracking; the caller starts over from a
//! fresh skeleton and a full pool.

use crate::board::{Board, BoardError, TileStage, Token};
use crate::constraint::admissible;
use crate::generator::GenerationError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Fill every empty slot of `board` with a token drawn from `pool`.
///
/// Returns `Ok(true)` when the whole board is numbered and the pool is empty,
/// `Ok(false)` when a slot had no admissible token. After a failed attempt
/// both `board` and `pool` are partially consumed and must be discarded.
///
/// A board that is not entirely empty, or a pool that does not hold exactly
/// one entry per slot, is an error and leaves both untouched.
pub fn place_tokens<R: Rng + ?Sized>(
    board: &mut Board,
    pool: &mut Vec<Token>,
    rng: &mut R,
) -> Result<bool, GenerationError> {
    if let Some(tile) = board.tiles().find(|t| t.stage() != TileStage::Empty) {
        return Err(BoardError::InvalidTransition {
            action: "number",
            stage: tile.stage(),
        }
        .into());
    }

    let slots = board.slot_count();
    if pool.len() != slots {
        return Err(GenerationError::PoolMismatch {
            pool: "token",
            expected: slots,
            found: pool.len(),
        });
    }

    let positions: Vec<(usize, usize)> = board.positions().collect();

    for (row, col) in positions {
        let candidates: Vec<usize> = pool
            .iter()
            .enumerate()
            .filter(|(_, token)| admissible(board, row, col, **token))
            .map(|(idx, _)| idx)
            .collect();

        let Some(&idx) = candidates.choose(rng) else {
            return Ok(false);
        };

        let token = pool.swap_remove(idx);
        board.get_mut(row, col)?.assign_token(token)?;
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardShape;
    use crate::constraint::red_conflicts;
    use crate::variant::BoardVariant;
    use pretty_assertions::assert_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Retry from scratch until an attempt succeeds
    fn place_until_success(seed: u64, variant: BoardVariant) -> Board {
        let spec = variant.spec();
        let mut rng = StdRng::seed_from_u64(seed);
        loop {
            let mut board = Board::skeleton(&spec.shape);
            let mut pool = spec.tokens.clone();
            if place_tokens(&mut board, &mut pool, &mut rng).unwrap() {
                assert!(pool.is_empty());
                return board;
            }
        }
    }

    #[test]
    fn test_successful_placement_numbers_every_tile() {
        let board = place_until_success(7, BoardVariant::Standard);
        assert!(board.tiles().all(|t| t.stage() == TileStage::Numbered));
    }

    #[test]
    fn test_placement_conserves_token_multiset() {
        for seed in 0..20 {
            let board = place_until_success(seed, BoardVariant::Standard);
            let mut placed = board.tokens();
            let mut expected = BoardVariant::Standard.spec().tokens;
            placed.sort();
            expected.sort();
            assert_eq!(placed, expected);
        }
    }

    #[test]
    fn test_placement_never_puts_reds_together() {
        for seed in 0..20 {
            let board = place_until_success(seed, BoardVariant::Extended);
            let conflicts = red_conflicts(&board);
            assert!(conflicts.is_empty(), "red tokens adjacent: {:?}", conflicts);
        }
    }

    #[test]
    fn test_dead_end_reports_failure() {
        // Whichever red goes first, the other has nowhere to go
        let mut board = Board::skeleton(&BoardShape::new(vec![2]));
        let mut pool = vec![Token::Number(6), Token::Number(8)];
        let mut rng = StdRng::seed_from_u64(1);

        assert!(!place_tokens(&mut board, &mut pool, &mut rng).unwrap());
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_pool_shrinks_with_each_slot() {
        let mut board = Board::skeleton(&BoardShape::new(vec![1, 2]));
        let mut pool = vec![Token::Number(2), Token::Number(3), Token::Desert];
        let mut rng = StdRng::seed_from_u64(3);

        assert!(place_tokens(&mut board, &mut pool, &mut rng).unwrap());
        assert!(pool.is_empty());
        assert_eq!(board.tokens().len(), 3);
    }

    #[test]
    fn test_placement_on_numbered_board_is_an_error() {
        let mut board = Board::skeleton(&BoardShape::new(vec![2]));
        board.get_mut(0, 1).unwrap().assign_token(Token::Number(4)).unwrap();
        let before = board.clone();
        let mut pool = vec![Token::Number(4), Token::Number(5)];
        let mut rng = StdRng::seed_from_u64(0);

        let err = place_tokens(&mut board, &mut pool, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            GenerationError::Board(BoardError::InvalidTransition {
                stage: TileStage::Numbered,
                ..
            })
        ));
        assert_eq!(board, before);
        assert_eq!(pool, vec![Token::Number(4), Token::Number(5)]);
    }

    #[test]
    fn test_oversized_pool_is_rejected() {
        let mut board = Board::skeleton(&BoardShape::new(vec![2]));
        let mut pool = vec![
            Token::Number(2),
            Token::Number(3),
            Token::Number(4),
            Token::Number(5),
        ];
        let mut rng = StdRng::seed_from_u64(0);

        let err = place_tokens(&mut board, &mut pool, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerationError::PoolMismatch { pool: "token", expected: 2, found: 4 }
        );
        assert_eq!(pool.len(), 4);
        assert!(board.tiles().all(|t| t.stage() == TileStage::Empty));
    }

    #[test]
    fn test_undersized_pool_is_rejected() {
        let mut board = Board::skeleton(&BoardShape::new(vec![3]));
        let mut pool = vec![Token::Number(2)];
        let mut rng = StdRng::seed_from_u64(0);

        let err = place_tokens(&mut board, &mut pool, &mut rng).unwrap_err();
        assert_eq!(
            err,
            GenerationError::PoolMismatch { pool: "token", expected: 3, found: 1 }
        );
        assert_eq!(pool, vec![Token::Number(2)]);
    }

    #[test]
    fn test_same_seed_same_placement() {
        let a = place_until_success(42, BoardVariant::Standard);
        let b = place_until_success(42, BoardVariant::Standard);
        assert_eq!(a, b);
    }
}
