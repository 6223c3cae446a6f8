//! Board variants and their fixed token and resource multisets.

use crate::board::{BoardShape, Resource, Token};
use crate::generator::GenerationError;
use crate::layout::LayoutConfig;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Built-in board variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardVariant {
    /// 3-4 players, 19 tiles, with ports
    Standard,
    /// 5-6 players, 30 tiles, no ports
    Extended,
}

impl BoardVariant {
    pub const ALL: [BoardVariant; 2] = [BoardVariant::Standard, BoardVariant::Extended];

    pub fn name(&self) -> &'static str {
        match self {
            BoardVariant::Standard => "standard",
            BoardVariant::Extended => "extended",
        }
    }

    /// Full definition of this variant
    pub fn spec(&self) -> VariantSpec {
        match self {
            BoardVariant::Standard => VariantSpec {
                name: self.name().to_string(),
                shape: BoardShape::standard(),
                // One desert sentinel plus 2, 3, 3, ... 11, 11, 12
                tokens: with_sentinels(
                    1,
                    0,
                    &[2, 3, 3, 4, 4, 5, 5, 6, 6, 8, 8, 9, 9, 10, 10, 11, 11, 12],
                ),
                resources: resource_pool(&[
                    (Resource::Wood, 4),
                    (Resource::Sheep, 4),
                    (Resource::Brick, 3),
                    (Resource::Wheat, 4),
                    (Resource::Ore, 3),
                ]),
                has_ports: true,
                layout: LayoutConfig::with_offset(720.0, 240.0),
            },
            BoardVariant::Extended => VariantSpec {
                name: self.name().to_string(),
                shape: BoardShape::extended(),
                tokens: with_sentinels(
                    2,
                    0,
                    &[
                        2, 2, 3, 3, 3, 4, 4, 4, 5, 5, 5, 6, 6, 6, 8, 8, 8, 9, 9, 9, 10, 10, 10, 11,
                        11, 11, 12, 12,
                    ],
                ),
                resources: resource_pool(&[
                    (Resource::Wood, 6),
                    (Resource::Sheep, 6),
                    (Resource::Brick, 5),
                    (Resource::Wheat, 6),
                    (Resource::Ore, 5),
                ]),
                has_ports: false,
                layout: LayoutConfig::with_offset(720.0, 125.0),
            },
        }
    }
}

impl FromStr for BoardVariant {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" | "3-4" => Ok(BoardVariant::Standard),
            "extended" | "5-6" => Ok(BoardVariant::Extended),
            _ => Err(GenerationError::InvalidVariant(s.to_string())),
        }
    }
}

/// Everything the generator needs to know about a board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariantSpec {
    pub name: String,
    pub shape: BoardShape,
    /// One entry per slot, sentinels included
    pub tokens: Vec<Token>,
    /// One entry per non-sentinel slot
    pub resources: Vec<Resource>,
    #[serde(default)]
    pub has_ports: bool,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl VariantSpec {
    pub fn desert_count(&self) -> usize {
        self.tokens.iter().filter(|t| **t == Token::Desert).count()
    }

    pub fn sea_count(&self) -> usize {
        self.tokens.iter().filter(|t| **t == Token::Sea).count()
    }

    /// How many tiles of `resource` a finished board carries
    pub fn resource_quota(&self, resource: Resource) -> usize {
        self.resources.iter().filter(|r| **r == resource).count()
    }

    /// Check that the pools fit the shape exactly
    pub fn validate(&self) -> Result<(), GenerationError> {
        if let Some(bad) = self.tokens.iter().find(|t| !t.is_valid()) {
            return Err(GenerationError::InvalidToken(bad.dice_number().unwrap_or_default()));
        }

        let slots = self.shape.slot_count();
        if self.tokens.len() != slots {
            return Err(GenerationError::PoolMismatch {
                pool: "token",
                expected: slots,
                found: self.tokens.len(),
            });
        }

        let numbered = slots - self.desert_count() - self.sea_count();
        if self.resources.len() != numbered {
            return Err(GenerationError::PoolMismatch {
                pool: "resource",
                expected: numbered,
                found: self.resources.len(),
            });
        }

        Ok(())
    }
}

fn with_sentinels(deserts: usize, seas: usize, numbers: &[u8]) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(deserts + seas + numbers.len());
    tokens.extend(std::iter::repeat(Token::Desert).take(deserts));
    tokens.extend(std::iter::repeat(Token::Sea).take(seas));
    tokens.extend(numbers.iter().map(|&n| Token::Number(n)));
    tokens
}

fn resource_pool(counts: &[(Resource, usize)]) -> Vec<Resource> {
    counts
        .iter()
        .flat_map(|&(resource, count)| std::iter::repeat(resource).take(count))
        .collect()
}
