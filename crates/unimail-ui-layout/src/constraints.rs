//! Chip row constraints

use crate::error::LayoutError;

/// Geometry budget for one row of folder chips, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipConstraints {
    /// Hard per-chip ceiling; no chip is ever granted more.
    pub max_cell_width: f32,
    /// Total width budget for the row.
    pub max_layout_width: f32,
    pub inter_chip_gap: f32,
    /// Padding between the chip edge and its text, applied on both sides.
    pub inner_text_padding: f32,
    /// Labels beyond this count are not laid out.
    pub max_chip_count: usize,
}

impl ChipConstraints {
    pub fn new(max_cell_width: f32, max_layout_width: f32) -> Self {
        Self {
            max_cell_width,
            max_layout_width,
            inter_chip_gap: 0.0,
            inner_text_padding: 0.0,
            max_chip_count: usize::MAX,
        }
    }

    pub fn with_gap(self, inter_chip_gap: f32) -> Self {
        Self {
            inter_chip_gap,
            ..self
        }
    }

    pub fn with_padding(self, inner_text_padding: f32) -> Self {
        Self {
            inner_text_padding,
            ..self
        }
    }

    pub fn with_max_chip_count(self, max_chip_count: usize) -> Self {
        Self {
            max_chip_count,
            ..self
        }
    }

    /// Checks the invariants `measure_chips` relies on.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let checks = [
            (
                "max_cell_width",
                self.max_cell_width,
                self.max_cell_width > 0.0,
            ),
            (
                "max_layout_width",
                self.max_layout_width,
                self.max_layout_width >= 0.0,
            ),
            (
                "inter_chip_gap",
                self.inter_chip_gap,
                self.inter_chip_gap >= 0.0,
            ),
            (
                "inner_text_padding",
                self.inner_text_padding,
                self.inner_text_padding >= 0.0,
            ),
        ];
        for (name, value, ok) in checks {
            if !ok || !value.is_finite() {
                return Err(LayoutError::InvalidArgument { name, value });
            }
        }
        Ok(())
    }

    /// Width each of `count` chips would get if the budget were split evenly,
    /// capped by `max_cell_width`.
    pub fn fair_share(&self, count: usize) -> f32 {
        if count == 0 {
            return 0.0;
        }
        let gaps = (count - 1) as f32 * self.inter_chip_gap;
        let even = ((self.max_layout_width - gaps) / count as f32).floor();
        even.min(self.max_cell_width).max(0.0)
    }
}
