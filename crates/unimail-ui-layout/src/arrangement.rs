//! Placement of measured chips along a row

use unimail_ui_graphics::TextDirection;

use crate::chips::total_width;

/// Places chips of known widths inside the horizontal span `[start, end]`.
///
/// Left-to-right rows hug the trailing edge: the last chip ends at `end`.
/// Right-to-left rows mirror that: the first chip sits at
/// `start + total_width` and following chips walk towards `start`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipArrangement {
    pub gap: f32,
    pub direction: TextDirection,
}

impl ChipArrangement {
    pub fn new(gap: f32, direction: TextDirection) -> Self {
        Self { gap, direction }
    }

    /// Writes the left edge of every chip into `out_positions`.
    pub fn arrange(&self, start: f32, end: f32, widths: &[f32], out_positions: &mut [f32]) {
        debug_assert_eq!(widths.len(), out_positions.len());
        if widths.is_empty() {
            return;
        }

        let row_width = total_width(widths, self.gap);
        match self.direction {
            TextDirection::Ltr => {
                let mut cursor = end - row_width;
                for (width, position) in widths.iter().zip(out_positions.iter_mut()) {
                    *position = cursor;
                    cursor += width + self.gap;
                }
            }
            TextDirection::Rtl => {
                let mut cursor = start + row_width;
                for (width, position) in widths.iter().zip(out_positions.iter_mut()) {
                    *position = cursor - width;
                    cursor -= width + self.gap;
                }
            }
        }
    }

    pub fn positions(&self, start: f32, end: f32, widths: &[f32]) -> Vec<f32> {
        let mut positions = vec![0.0; widths.len()];
        self.arrange(start, end, widths, &mut positions);
        positions
    }
}

#[cfg(test)]
#[path = "tests/arrangement_tests.rs"]
mod tests;
