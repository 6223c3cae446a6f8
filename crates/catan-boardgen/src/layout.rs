//! Pixel layout of hex centers.
//!
//! Centers are produced row by row, left to right, with each row centered
//! horizontally on `offset_x`. Hexes are pointy-top: rows sit `1.5 * hex_size`
//! apart and neighbors in a row `sqrt(3) * hex_size + spacing` apart.
//!
//! Layout never looks at board contents; tiles and centers are paired later
//! by position.

use crate::board::BoardShape;
use serde::{Deserialize, Serialize};

/// Center of one hex in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HexCenter {
    pub x: f64,
    pub y: f64,
}

impl HexCenter {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Geometry options. None of these affect generation, only coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Hex radius in pixels
    pub hex_size: f64,
    /// Extra gap between neighboring hexes in a row
    pub spacing: f64,
    /// Horizontal center of the board
    pub offset_x: f64,
    /// Vertical position of the first row
    pub offset_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            hex_size: 80.0,
            spacing: 1.5,
            offset_x: 720.0,
            offset_y: 240.0,
        }
    }
}

impl LayoutConfig {
    /// Default geometry translated to the given offsets
    pub fn with_offset(offset_x: f64, offset_y: f64) -> Self {
        Self {
            offset_x,
            offset_y,
            ..Default::default()
        }
    }

    /// Horizontal distance between neighboring centers in a row
    pub fn column_step(&self) -> f64 {
        self.hex_size * 3.0_f64.sqrt() + self.spacing
    }

    /// Vertical distance between rows
    pub fn row_step(&self) -> f64 {
        self.hex_size * 1.5
    }

    /// Compute one center per tile slot of `shape`
    pub fn hex_centers(&self, shape: &BoardShape) -> Vec<HexCenter> {
        let step = self.column_step();
        let mut centers = Vec::with_capacity(shape.slot_count());

        for (row, &row_length) in shape.row_lengths().iter().enumerate() {
            let y = row as f64 * self.row_step() + self.offset_y;
            let x_start = self.offset_x - row_length.saturating_sub(1) as f64 * step / 2.0;

            for col in 0..row_length {
                centers.push(HexCenter::new(x_start + col as f64 * step, y));
            }
        }

        centers
    }
}

/// Partial geometry that replaces only the fields it names.
///
/// Applied over a variant's layout, so `{ "hex_size": 40 }` on the extended
/// board keeps that board's offsets.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutOverride {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hex_size: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spacing: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_y: Option<f64>,
}

impl LayoutOverride {
    pub fn apply(&self, base: LayoutConfig) -> LayoutConfig {
        LayoutConfig {
            hex_size: self.hex_size.unwrap_or(base.hex_size),
            spacing: self.spacing.unwrap_or(base.spacing),
            offset_x: self.offset_x.unwrap_or(base.offset_x),
            offset_y: self.offset_y.unwrap_or(base.offset_y),
        }
    }
}

impl From<LayoutConfig> for LayoutOverride {
    fn from(layout: LayoutConfig) -> Self {
        Self {
            hex_size: Some(layout.hex_size),
            spacing: Some(layout.spacing),
            offset_x: Some(layout.offset_x),
            offset_y: Some(layout.offset_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_one_center_per_slot() {
        let layout = LayoutConfig::default();
        assert_eq!(layout.hex_centers(&BoardShape::standard()).len(), 19);
        assert_eq!(layout.hex_centers(&BoardShape::extended()).len(), 30);
        assert!(layout.hex_centers(&BoardShape::new(vec![])).is_empty());
    }

    #[test]
    fn test_rows_are_centered_on_offset() {
        let layout = LayoutConfig::default();
        let centers = layout.hex_centers(&BoardShape::standard());

        // Middle row has 5 hexes, the third sits on the axis
        let middle = centers[7 + 2];
        assert!((middle.x - 720.0).abs() < EPSILON);
        assert!((middle.y - (240.0 + 2.0 * 120.0)).abs() < EPSILON);

        let first_row = &centers[0..3];
        let mean_x: f64 = first_row.iter().map(|c| c.x).sum::<f64>() / 3.0;
        assert!((mean_x - 720.0).abs() < EPSILON);
    }

    #[test]
    fn test_centers_run_left_to_right_top_to_bottom() {
        let layout = LayoutConfig::default();
        let centers = layout.hex_centers(&BoardShape::new(vec![2, 2]));

        assert!(centers[0].x < centers[1].x);
        assert_eq!(centers[0].y, centers[1].y);
        assert!(centers[1].y < centers[2].y);
        assert!((centers[1].x - centers[0].x - layout.column_step()).abs() < EPSILON);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let layout = LayoutConfig::with_offset(720.0, 125.0);
        let shape = BoardShape::extended();

        let first = layout.hex_centers(&shape);
        let second = layout.hex_centers(&shape);

        let bits = |centers: &[HexCenter]| -> Vec<(u64, u64)> {
            centers.iter().map(|c| (c.x.to_bits(), c.y.to_bits())).collect()
        };
        assert_eq!(bits(&first), bits(&second));
    }

    #[test]
    fn test_override_keeps_unnamed_fields() {
        let base = LayoutConfig::with_offset(720.0, 125.0);
        let partial = LayoutOverride {
            hex_size: Some(40.0),
            ..Default::default()
        };

        let merged = partial.apply(base);
        assert_eq!(merged.hex_size, 40.0);
        assert_eq!(merged.spacing, 1.5);
        assert_eq!(merged.offset_x, 720.0);
        assert_eq!(merged.offset_y, 125.0);

        assert_eq!(LayoutOverride::default().apply(base), base);
        assert_eq!(LayoutOverride::from(LayoutConfig::default()).apply(base), LayoutConfig::default());
    }
}
