//! Harbor (port) assignment for the 3-4 player board.
//!
//! The board border has nine fixed port slots. Each slot gets one harbor from
//! a fixed nine-entry palette, either in declared order (the printed 5th
//! edition layout) or in a shuffled order.

use crate::board::{Resource, Rgb};
use crate::generator::GenerationError;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How harbors are matched to slots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortMode {
    /// Palette in declared order
    Standard,
    /// Palette shuffled once
    Random,
}

impl FromStr for PortMode {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "standard" => Ok(PortMode::Standard),
            "random" => Ok(PortMode::Random),
            _ => Err(GenerationError::InvalidPortMode(s.to_string())),
        }
    }
}

/// Harbor types for maritime trading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Harbor {
    /// 3:1 trade any resource
    Generic,
    /// 2:1 trade for a specific resource
    Specific(Resource),
}

impl Harbor {
    /// The exchange rate for this harbor
    pub fn rate(&self) -> u32 {
        match self {
            Harbor::Generic => 3,
            Harbor::Specific(_) => 2,
        }
    }

    /// Marker color: white for generic, the resource color otherwise
    pub fn color(&self) -> Rgb {
        match self {
            Harbor::Generic => Rgb::WHITE,
            Harbor::Specific(resource) => resource.color(),
        }
    }
}

/// Harbor palette in declared order. Four generic entries, one per resource.
pub const PORT_PALETTE: [Harbor; 9] = [
    Harbor::Generic,
    Harbor::Specific(Resource::Wheat),
    Harbor::Specific(Resource::Ore),
    Harbor::Generic,
    Harbor::Specific(Resource::Sheep),
    Harbor::Generic,
    Harbor::Generic,
    Harbor::Specific(Resource::Brick),
    Harbor::Specific(Resource::Wood),
];

/// Port marker triangles in pixel space of the default 3-4 player layout,
/// clockwise from the top left.
pub const PORT_TRIANGLES: [[[f64; 2]; 3]; 9] = [
    [[510.0, 192.0], [510.0, 122.0], [572.0, 157.0]],
    [[789.0, 194.0], [789.0, 122.0], [725.0, 157.0]],
    [[935.0, 278.0], [999.0, 315.0], [999.0, 240.0]],
    [[1075.0, 518.0], [1075.0, 442.0], [1140.0, 480.0]],
    [[935.0, 682.0], [999.0, 645.0], [999.0, 720.0]],
    [[789.0, 767.0], [789.0, 838.0], [725.0, 804.0]],
    [[510.0, 768.0], [510.0, 838.0], [572.0, 804.0]],
    [[435.0, 563.0], [435.0, 638.0], [370.0, 600.0]],
    [[435.0, 397.0], [435.0, 322.0], [370.0, 360.0]],
];

/// One fixed port position on the border
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortSlot {
    pub index: usize,
    pub triangle: [[f64; 2]; 3],
}

/// The fixed slot list, in declared order
pub fn port_slots() -> Vec<PortSlot> {
    PORT_TRIANGLES
        .iter()
        .enumerate()
        .map(|(index, triangle)| PortSlot {
            index,
            triangle: *triangle,
        })
        .collect()
}

/// A slot paired with its harbor
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PortAssignment {
    pub slot: PortSlot,
    pub harbor: Harbor,
    pub color: Rgb,
}

/// Pair every slot with one palette entry.
///
/// `rng` is only consulted in random mode.
pub fn assign_ports<R: Rng + ?Sized>(mode: PortMode, rng: &mut R) -> Vec<PortAssignment> {
    let mut palette = PORT_PALETTE.to_vec();
    if mode == PortMode::Random {
        palette.shuffle(rng);
    }

    port_slots()
        .into_iter()
        .zip(palette)
        .map(|(slot, harbor)| PortAssignment {
            slot,
            harbor,
            color: harbor.color(),
        })
        .collect()
}
