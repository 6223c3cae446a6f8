//! Catan-style board generator
//!
//! This crate builds randomized hexagonal resource boards:
//! - Hex center layout for a row-length pattern
//! - Constrained random placement of number tokens (6 and 8 never touch)
//! - Shuffled resource distribution with desert and sea reservations
//! - Harbor assignment for the 3-4 player board
//!
//! # Architecture
//!
//! Generation is pure data in, data out. The result is a [`GeneratedBoard`]
//! that a renderer consumes read-only; nothing here knows about windows or
//! drawing. Randomness always comes from a caller-provided [`rand::Rng`], so
//! boards are reproducible from a seed.
//!
//! # Modules
//!
//! - [`board`]: Tiles, tokens, resources and the board grid
//! - [`layout`]: Pixel coordinates of hex centers
//! - [`constraint`]: The 6/8 adjacency rule
//! - [`placement`]: Token placement
//! - [`resources`]: Resource distribution
//! - [`ports`]: Harbor assignment
//! - [`variant`]: Built-in board variants
//! - [`generator`]: The retrying generator and its errors
//! - [`config`]: Serializable generator configuration

pub mod board;
pub mod config;
pub mod constraint;
pub mod generator;
pub mod layout;
pub mod placement;
pub mod ports;
pub mod resources;
pub mod variant;
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export commonly used types
pub use board::{Board, BoardError, BoardShape, Resource, Rgb, Tile, TileStage, TileType, Token};
pub use config::{GeneratorConfig, VariantChoice};
pub use constraint::{admissible, red_conflicts};
pub use generator::{BoardGenerator, GeneratedBoard, GenerationError, RetryPolicy};
pub use layout::{HexCenter, LayoutConfig, LayoutOverride};
pub use placement::place_tokens;
pub use ports::{assign_ports, Harbor, PortAssignment, PortMode, PortSlot};
pub use resources::distribute_resources;
pub use variant::{BoardVariant, VariantSpec};
