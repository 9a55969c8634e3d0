//! Folder chip measurement.
//!
//! Chips share one horizontal budget. Every chip starts from the same fair
//! share; narrow chips lend their unused width forward to the next chip that
//! overflows, and an overflowing chip left short is repaid by the following
//! chip if that one turns out to have slack. Granted widths never exceed
//! [`ChipConstraints::max_cell_width`], but the row sum can exceed
//! [`ChipConstraints::max_layout_width`] when many chips overflow.

use smallvec::SmallVec;
use unimail_ui_graphics::Color;

use crate::constraints::ChipConstraints;
use crate::error::LayoutError;

/// Widths granted to each chip, in input order.
pub type ChipWidths = SmallVec<[f32; 4]>;

/// One folder to be shown as a chip.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
pub struct FolderLabel {
    pub name: String,
    /// Text color; `None` uses the style default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub foreground: Option<Color>,
    /// Fill color; `None` uses the style default.
    #[cfg_attr(feature = "serde", serde(default))]
    pub background: Option<Color>,
}

impl FolderLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            foreground: None,
            background: None,
        }
    }

    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground = Some(foreground);
        self.background = Some(background);
        self
    }
}

/// Computes the width of every chip that fits in `constraints.max_chip_count`.
///
/// `text_width` returns the rendered width of a label for the active font.
pub fn measure_chips<F>(
    labels: &[FolderLabel],
    constraints: &ChipConstraints,
    text_width: F,
) -> Result<ChipWidths, LayoutError>
where
    F: Fn(&str) -> f32,
{
    constraints.validate()?;

    let count = constraints.max_chip_count.min(labels.len());
    let mut widths = ChipWidths::with_capacity(count);
    if count == 0 {
        return Ok(widths);
    }

    let fair_share = constraints.fair_share(count);
    let max_cell = constraints.max_cell_width;
    let padding = 2.0 * constraints.inner_text_padding;

    let mut carry_deficit = 0.0f32;
    let mut carry_surplus = 0.0f32;

    for label in &labels[..count] {
        let needed = text_width(&label.name) + padding;

        if needed > fair_share {
            let borrow = (needed - fair_share).min(max_cell - fair_share);
            if carry_surplus >= borrow {
                widths.push(needed.min(max_cell));
                carry_surplus -= borrow;
                carry_deficit = 0.0;
            } else {
                widths.push(fair_share + carry_surplus);
                carry_deficit = borrow - carry_surplus;
                carry_surplus = 0.0;
            }
        } else {
            let mut extra = fair_share - needed;
            if carry_deficit > 0.0 {
                let repaid = extra.min(carry_deficit);
                if let Some(previous) = widths.last_mut() {
                    *previous += repaid;
                }
                extra -= repaid;
            }
            widths.push(needed);
            carry_surplus = extra;
            carry_deficit = 0.0;
        }
    }

    log::debug!(
        "measured {} folder chips (fair share {fair_share}): {:?}",
        widths.len(),
        widths.as_slice()
    );
    Ok(widths)
}

/// Total width of a chip row including the gaps between chips.
pub fn total_width(widths: &[f32], inter_chip_gap: f32) -> f32 {
    if widths.is_empty() {
        return 0.0;
    }
    widths.iter().sum::<f32>() + (widths.len() - 1) as f32 * inter_chip_gap
}

#[cfg(test)]
#[path = "tests/chips_tests.rs"]
mod tests;
