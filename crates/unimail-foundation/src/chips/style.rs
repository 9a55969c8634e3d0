use unimail_ui_graphics::{Color, Dp};
use unimail_ui_layout::ChipConstraints;

const DEFAULT_CORNER_RADIUS: Dp = Dp(2.0);
const DEFAULT_OVERFLOW_GRADIENT_PADDING: Dp = Dp(16.0);
const DEFAULT_HORIZONTAL_PADDING: Dp = Dp(4.0);
const DEFAULT_INTER_CHIP_GAP: Dp = Dp(4.0);
const DEFAULT_FONT_SIZE: Dp = Dp(12.0);
const DEFAULT_VERTICAL_OFFSET: Dp = Dp(0.0);

/// Visual constants for folder chips.
///
/// Built once by the host and passed by reference to layout and drawing.
/// Lengths are in pixels; [`FolderChipStyle::default`] is expressed at
/// density 1.0, use [`FolderChipStyle::scaled`] for other densities.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FolderChipStyle {
    pub default_foreground: Color,
    pub default_background: Color,
    pub corner_radius: f32,
    /// Width of the fade applied to clipped label text.
    pub overflow_gradient_padding: f32,
    /// Padding between chip edge and text, on each side.
    pub horizontal_padding: f32,
    pub inter_chip_gap: f32,
    pub font_size: f32,
    /// Shift applied to the text box relative to the chip top.
    pub vertical_offset: f32,
}

impl Default for FolderChipStyle {
    fn default() -> Self {
        Self {
            default_foreground: Color::from_argb(0xFF5F6368),
            default_background: Color::from_argb(0xFFE8EAED),
            corner_radius: DEFAULT_CORNER_RADIUS.0,
            overflow_gradient_padding: DEFAULT_OVERFLOW_GRADIENT_PADDING.0,
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING.0,
            inter_chip_gap: DEFAULT_INTER_CHIP_GAP.0,
            font_size: DEFAULT_FONT_SIZE.0,
            vertical_offset: DEFAULT_VERTICAL_OFFSET.0,
        }
    }
}

impl FolderChipStyle {
    /// Treats every length as dp and converts it to pixels at `density`.
    pub fn scaled(self, density: f32) -> Self {
        Self {
            corner_radius: Dp(self.corner_radius).to_px(density),
            overflow_gradient_padding: Dp(self.overflow_gradient_padding).to_px(density),
            horizontal_padding: Dp(self.horizontal_padding).to_px(density),
            inter_chip_gap: Dp(self.inter_chip_gap).to_px(density),
            font_size: Dp(self.font_size).to_px(density),
            vertical_offset: Dp(self.vertical_offset).to_px(density),
            ..self
        }
    }

    /// Row constraints using this style's gap and padding.
    pub fn constraints(
        &self,
        max_cell_width: f32,
        max_layout_width: f32,
        max_chip_count: usize,
    ) -> ChipConstraints {
        ChipConstraints::new(max_cell_width, max_layout_width)
            .with_gap(self.inter_chip_gap)
            .with_padding(self.horizontal_padding)
            .with_max_chip_count(max_chip_count)
    }
}
