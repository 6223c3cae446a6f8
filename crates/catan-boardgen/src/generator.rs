//! Board generation: retrying token placement, resources, layout and ports.
//!
//! A generation run validates the variant, resolves ports once, then retries
//! token placement on a fresh skeleton with a full pool until one attempt
//! succeeds (or the retry policy gives up). Only a fully resourced board is
//! ever returned.

use crate::board::{Board, BoardError, Tile};
use crate::config::GeneratorConfig;
use crate::layout::{HexCenter, LayoutConfig};
use crate::placement::place_tokens;
use crate::ports::{assign_ports, PortAssignment, PortMode};
use crate::resources::distribute_resources;
use crate::variant::{BoardVariant, VariantSpec};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur while generating a board
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("Unknown port mode {0:?}, expected \"standard\" or \"random\"")]
    InvalidPortMode(String),

    #[error("Unknown board variant {0:?}")]
    InvalidVariant(String),

    #[error("The {pool} pool holds {found} entries but the board needs {expected}")]
    PoolMismatch {
        pool: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("{0} is not a valid number token")]
    InvalidToken(u8),

    #[error("No valid token placement found after {attempts} attempts")]
    Unsatisfiable { attempts: u32 },

    #[error("Variant {0:?} has no ports")]
    PortsUnsupported(String),

    #[error(transparent)]
    Board(#[from] BoardError),
}

/// How many placement attempts a run may make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryPolicy {
    /// Keep trying until an attempt succeeds
    #[default]
    Unbounded,
    /// Give up after `max_attempts` failed attempts
    Bounded { max_attempts: u32 },
}

impl RetryPolicy {
    /// Whether attempt number `attempt` (1-based) may run
    pub fn allows(&self, attempt: u32) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Bounded { max_attempts } => attempt <= *max_attempts,
        }
    }
}

/// A finished board ready to hand to a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedBoard {
    variant: String,
    board: Board,
    centers: Vec<HexCenter>,
    ports: Vec<PortAssignment>,
    attempts: u32,
}

impl GeneratedBoard {
    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// One center per tile, row-major
    pub fn centers(&self) -> &[HexCenter] {
        &self.centers
    }

    /// Empty for variants without ports
    pub fn ports(&self) -> &[PortAssignment] {
        &self.ports
    }

    /// Placement attempts used, including the successful one
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Each tile with its center
    pub fn placements(&self) -> impl Iterator<Item = (&Tile, &HexCenter)> {
        self.board.tiles().zip(self.centers.iter())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Generates boards for one variant
#[derive(Debug, Clone)]
pub struct BoardGenerator {
    spec: VariantSpec,
    port_mode: Option<PortMode>,
    layout: LayoutConfig,
    retry: RetryPolicy,
    seed: Option<u64>,
}

impl BoardGenerator {
    /// Generator for a built-in variant with its default layout and no ports
    pub fn new(variant: BoardVariant) -> Self {
        Self::from_spec(variant.spec())
    }

    pub fn from_spec(spec: VariantSpec) -> Self {
        Self {
            layout: spec.layout,
            spec,
            port_mode: None,
            retry: RetryPolicy::default(),
            seed: None,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        let mut generator = Self::from_spec(config.variant.spec());
        generator.port_mode = config.port_mode;
        generator.retry = config.retry;
        generator.seed = config.seed;
        if let Some(layout) = config.layout {
            generator.layout = layout.apply(generator.layout);
        }
        generator
    }

    pub fn with_port_mode(mut self, mode: PortMode) -> Self {
        self.port_mode = Some(mode);
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_retry_policy(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Make `generate` reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn spec(&self) -> &VariantSpec {
        &self.spec
    }

    /// Generate from the configured seed, or a fresh entropy-seeded RNG
    pub fn generate(&self) -> Result<GeneratedBoard, GenerationError> {
        match self.seed {
            Some(seed) => self.generate_seeded(seed),
            None => self.generate_with_rng(&mut StdRng::from_entropy()),
        }
    }

    /// Generate deterministically from a seed
    pub fn generate_seeded(&self, seed: u64) -> Result<GeneratedBoard, GenerationError> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.generate_with_rng(&mut rng)
    }

    /// Generate a board with a provided RNG
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<GeneratedBoard, GenerationError> {
        self.spec.validate()?;

        let ports = match self.port_mode {
            Some(_) if !self.spec.has_ports => {
                return Err(GenerationError::PortsUnsupported(self.spec.name.clone()))
            }
            Some(mode) => assign_ports(mode, rng),
            None => Vec::new(),
        };

        let (numbered, attempts) = self.number_board(rng)?;
        let board = distribute_resources(numbered, self.spec.resources.clone(), rng)?;
        let centers = self.layout.hex_centers(&self.spec.shape);

        info!(
            variant = %self.spec.name,
            attempts,
            ports = ports.len(),
            "Generated board"
        );

        Ok(GeneratedBoard {
            variant: self.spec.name.clone(),
            board,
            centers,
            ports,
            attempts,
        })
    }

    /// Retry token placement from scratch until one attempt succeeds
    fn number_board<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(Board, u32), GenerationError> {
        let mut attempt = 1;

        while self.retry.allows(attempt) {
            let mut board = Board::skeleton(&self.spec.shape);
            let mut pool = self.spec.tokens.clone();

            if place_tokens(&mut board, &mut pool, rng)? {
                return Ok((board, attempt));
            }

            debug!(attempt, remaining = pool.len(), "Token placement hit a dead end, retrying");
            attempt += 1;
        }

        Err(GenerationError::Unsatisfiable {
            attempts: attempt - 1,
        })
    }
}
