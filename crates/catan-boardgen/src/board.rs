//! Board representation for generated resource maps.
//!
//! This module contains:
//! - Resource kinds and the tile types a slot can end up as
//! - Number tokens, including the desert and sea sentinels
//! - The tile lifecycle (empty, numbered, resourced)
//! - The row-major board grid and the skeleton builder

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// An RGB color handed to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Packed 0xRRGGBB value
    pub fn hex_code(&self) -> u32 {
        (u32::from(self.0) << 16) | (u32::from(self.1) << 8) | u32::from(self.2)
    }
}

/// Tradable resource kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resource {
    Wood,
    Sheep,
    Brick,
    Wheat,
    Ore,
}

impl Resource {
    /// All resource kinds
    pub const ALL: [Resource; 5] = [
        Resource::Wood,
        Resource::Sheep,
        Resource::Brick,
        Resource::Wheat,
        Resource::Ore,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Resource::Wood => "wood",
            Resource::Sheep => "sheep",
            Resource::Brick => "brick",
            Resource::Wheat => "wheat",
            Resource::Ore => "ore",
        }
    }

    /// Fill color of a tile producing this resource
    pub fn color(&self) -> Rgb {
        match self {
            Resource::Wood => Rgb(34, 139, 34),
            Resource::Sheep => Rgb(117, 210, 43),
            Resource::Brick => Rgb(179, 89, 0),
            Resource::Wheat => Rgb(210, 194, 43),
            Resource::Ore => Rgb(59, 59, 58),
        }
    }
}

/// What a board slot ends up as once resources are distributed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TileType {
    /// Produces a resource when its number is rolled
    Resource(Resource),
    /// No production, never carries a number
    Desert,
    /// Non-playable water slot, never carries a number
    Sea,
}

impl TileType {
    /// Tile color, always derived from the type
    pub fn color(&self) -> Rgb {
        match self {
            TileType::Resource(resource) => resource.color(),
            TileType::Desert => Rgb(228, 197, 132),
            TileType::Sea => Rgb(20, 80, 250),
        }
    }

    /// Get the resource this tile produces, if any
    pub fn resource(&self) -> Option<Resource> {
        match self {
            TileType::Resource(r) => Some(*r),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TileType::Resource(resource) => resource.name(),
            TileType::Desert => "desert",
            TileType::Sea => "sea",
        }
    }
}

/// A number token drawn from the variant's token pool.
///
/// `Desert` and `Sea` are sentinels: they travel through the pool like any
/// other token (that is how the desert ends up at a random position) but are
/// never a dice value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Token {
    Number(u8),
    Desert,
    Sea,
}

impl Token {
    /// Dice sum carried by this token, `None` for sentinels
    pub fn dice_number(&self) -> Option<u8> {
        match self {
            Token::Number(n) => Some(*n),
            Token::Desert | Token::Sea => None,
        }
    }

    /// 6 and 8, the two most likely rolls
    pub fn is_red(&self) -> bool {
        matches!(self, Token::Number(6) | Token::Number(8))
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Token::Desert | Token::Sea)
    }

    /// A two-dice sum other than 7, or a sentinel
    pub fn is_valid(&self) -> bool {
        match self {
            Token::Number(n) => (2..=12).contains(n) && *n != 7,
            Token::Desert | Token::Sea => true,
        }
    }

    /// The tile type a sentinel reserves its slot for
    pub fn reserved_tile_type(&self) -> Option<TileType> {
        match self {
            Token::Number(_) => None,
            Token::Desert => Some(TileType::Desert),
            Token::Sea => Some(TileType::Sea),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(n) => write!(f, "{}", n),
            Token::Desert => f.write_str("-"),
            Token::Sea => f.write_str("~"),
        }
    }
}

/// Lifecycle stage of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileStage {
    Empty,
    Numbered,
    Resourced,
}

/// One slot of the board.
///
/// Tiles only move forward: `Empty` -> `Numbered` -> `Resourced`. The
/// resourced stage is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "lowercase")]
pub enum Tile {
    #[default]
    Empty,
    Numbered { token: Token },
    Resourced { token: Token, tile_type: TileType },
}

impl Tile {
    pub fn stage(&self) -> TileStage {
        match self {
            Tile::Empty => TileStage::Empty,
            Tile::Numbered { .. } => TileStage::Numbered,
            Tile::Resourced { .. } => TileStage::Resourced,
        }
    }

    pub fn token(&self) -> Option<Token> {
        match self {
            Tile::Empty => None,
            Tile::Numbered { token } | Tile::Resourced { token, .. } => Some(*token),
        }
    }

    pub fn tile_type(&self) -> Option<TileType> {
        match self {
            Tile::Resourced { tile_type, .. } => Some(*tile_type),
            _ => None,
        }
    }

    /// Color derived from the tile type, once resourced
    pub fn color(&self) -> Option<Rgb> {
        self.tile_type().map(|t| t.color())
    }

    /// Place a token on an empty tile
    pub fn assign_token(&mut self, token: Token) -> Result<(), BoardError> {
        match self {
            Tile::Empty => {
                *self = Tile::Numbered { token };
                Ok(())
            }
            _ => Err(BoardError::InvalidTransition {
                action: "number",
                stage: self.stage(),
            }),
        }
    }

    /// Fix the tile type of a numbered tile.
    ///
    /// Sentinel tokens only accept the tile type they reserve, and real
    /// numbers never land on desert or sea.
    pub fn assign_tile_type(&mut self, tile_type: TileType) -> Result<(), BoardError> {
        let token = match self {
            Tile::Numbered { token } => *token,
            _ => {
                return Err(BoardError::InvalidTransition {
                    action: "resource",
                    stage: self.stage(),
                })
            }
        };

        let matches = match token.reserved_tile_type() {
            Some(reserved) => reserved == tile_type,
            None => tile_type.resource().is_some(),
        };
        if !matches {
            return Err(BoardError::SentinelMismatch { token, tile_type });
        }

        *self = Tile::Resourced { token, tile_type };
        Ok(())
    }
}

/// Errors raised while mutating a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Cannot {action} a tile in the {stage:?} stage")]
    InvalidTransition {
        action: &'static str,
        stage: TileStage,
    },

    #[error("Token {token} cannot be placed on a {tile_type:?} tile")]
    SentinelMismatch { token: Token, tile_type: TileType },

    #[error("No tile at row {row}, column {col}")]
    OutOfBounds { row: usize, col: usize },
}

/// Row-length pattern of a board, top to bottom
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardShape(Vec<usize>);

impl BoardShape {
    pub fn new(row_lengths: Vec<usize>) -> Self {
        Self(row_lengths)
    }

    /// 3-4 player shape
    pub fn standard() -> Self {
        Self(vec![3, 4, 5, 4, 3])
    }

    /// 5-6 player shape
    pub fn extended() -> Self {
        Self(vec![3, 4, 5, 6, 5, 4, 3])
    }

    pub fn row_lengths(&self) -> &[usize] {
        &self.0
    }

    pub fn row_count(&self) -> usize {
        self.0.len()
    }

    /// Total number of tile slots
    pub fn slot_count(&self) -> usize {
        self.0.iter().sum()
    }
}

/// The board grid: ordered rows of tiles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: Vec<Vec<Tile>>,
}

impl Board {
    /// Allocate an empty board matching the shape
    pub fn skeleton(shape: &BoardShape) -> Self {
        Self {
            rows: shape
                .row_lengths()
                .iter()
                .map(|&len| vec![Tile::Empty; len])
                .collect(),
        }
    }

    pub fn shape(&self) -> BoardShape {
        BoardShape::new(self.rows.iter().map(Vec::len).collect())
    }

    pub fn rows(&self) -> &[Vec<Tile>] {
        &self.rows
    }

    pub fn row(&self, row: usize) -> Option<&[Tile]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        self.rows.get(row).and_then(|r| r.get(col))
    }

    pub fn get_mut(&mut self, row: usize, col: usize) -> Result<&mut Tile, BoardError> {
        self.rows
            .get_mut(row)
            .and_then(|r| r.get_mut(col))
            .ok_or(BoardError::OutOfBounds { row, col })
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.rows.iter().flatten()
    }

    /// `(row, col)` of every slot in row-major order
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(row, tiles)| (0..tiles.len()).map(move |col| (row, col)))
    }

    pub fn slot_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Whether every tile reached the resourced stage
    pub fn is_complete(&self) -> bool {
        self.tiles().all(|t| t.stage() == TileStage::Resourced)
    }

    /// Tokens placed so far, row-major
    pub fn tokens(&self) -> Vec<Token> {
        self.tiles().filter_map(Tile::token).collect()
    }

    pub fn count_tile_type(&self, tile_type: TileType) -> usize {
        self.tiles()
            .filter(|t| t.tile_type() == Some(tile_type))
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            let cells: Vec<String> = row
                .iter()
                .map(|tile| match tile {
                    Tile::Empty => ".".to_string(),
                    Tile::Numbered { token } => token.to_string(),
                    Tile::Resourced { token, tile_type } => {
                        format!("{}:{}", token, tile_type.name())
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
