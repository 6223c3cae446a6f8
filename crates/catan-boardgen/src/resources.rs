//! Resource distribution over a numbered board.

use crate::board::{Board, BoardError, Resource, TileStage, TileType};
use crate::generator::GenerationError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Shuffle `pool` once and give every numbered tile its tile type.
///
/// Tiles holding a desert or sea sentinel get the reserved type without
/// touching the pool; every other tile takes the next resource off the
/// shuffled pool. The pool must hold exactly one resource per non-sentinel
/// tile, otherwise nothing is assigned.
pub fn distribute_resources<R: Rng + ?Sized>(
    mut board: Board,
    mut pool: Vec<Resource>,
    rng: &mut R,
) -> Result<Board, GenerationError> {
    if board.tiles().any(|t| t.stage() == TileStage::Empty) {
        return Err(BoardError::InvalidTransition {
            action: "resource",
            stage: TileStage::Empty,
        }
        .into());
    }

    let numbered = board
        .tiles()
        .filter(|t| t.token().is_some_and(|token| !token.is_sentinel()))
        .count();
    if pool.len() != numbered {
        return Err(GenerationError::PoolMismatch {
            pool: "resource",
            expected: numbered,
            found: pool.len(),
        });
    }

    pool.shuffle(rng);

    let positions: Vec<(usize, usize)> = board.positions().collect();
    for (row, col) in positions {
        let tile = board.get_mut(row, col)?;
        let reserved = tile.token().and_then(|t| t.reserved_tile_type());
        let tile_type = match reserved {
            Some(reserved) => reserved,
            None => match pool.pop() {
                Some(resource) => TileType::Resource(resource),
                None => {
                    return Err(GenerationError::PoolMismatch {
                        pool: "resource",
                        expected: numbered,
                        found: 0,
                    })
                }
            },
        };
        tile.assign_tile_type(tile_type)?;
    }

    Ok(board)
}
