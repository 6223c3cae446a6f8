//! Generator configuration.

use crate::generator::{BoardGenerator, RetryPolicy};
use crate::layout::LayoutOverride;
use crate::ports::PortMode;
use crate::variant::{BoardVariant, VariantSpec};
use serde::{Deserialize, Serialize};

/// A built-in variant by name, or a full custom definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantChoice {
    Builtin(BoardVariant),
    Custom(VariantSpec),
}

impl VariantChoice {
    pub fn spec(&self) -> VariantSpec {
        match self {
            VariantChoice::Builtin(variant) => variant.spec(),
            VariantChoice::Custom(spec) => spec.clone(),
        }
    }

    pub fn has_ports(&self) -> bool {
        match self {
            VariantChoice::Builtin(variant) => variant.spec().has_ports,
            VariantChoice::Custom(spec) => spec.has_ports,
        }
    }
}

impl Default for VariantChoice {
    fn default() -> Self {
        VariantChoice::Builtin(BoardVariant::Standard)
    }
}

impl From<BoardVariant> for VariantChoice {
    fn from(variant: BoardVariant) -> Self {
        VariantChoice::Builtin(variant)
    }
}

/// Everything needed to run one generation
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub variant: VariantChoice,
    /// Only for variants with ports
    pub port_mode: Option<PortMode>,
    /// Replaces the named fields of the variant's default layout
    pub layout: Option<LayoutOverride>,
    pub retry: RetryPolicy,
    /// Fixed seed for reproducible boards
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    pub fn new(variant: impl Into<VariantChoice>) -> Self {
        Self {
            variant: variant.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn generator(&self) -> BoardGenerator {
        BoardGenerator::from_config(self)
    }
}
