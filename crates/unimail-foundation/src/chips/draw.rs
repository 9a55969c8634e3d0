//! Chip painting.
//!
//! A chip is a filled rounded rect with its label inset by the horizontal
//! padding. Text that does not fit is clipped and faded out over
//! `overflow_gradient_padding` pixels at its trailing edge, which is the left
//! edge for right-to-left labels.

use unimail_ui_graphics::{Brush, DrawScope, Rect, RoundedCornerShape, TextDirection};
use unimail_ui_layout::{
    measure_chips, ChipArrangement, ChipWidths, FolderLabel, LayoutError, TextMeasurer,
};

use super::style::FolderChipStyle;

/// Where a chip row goes and which way it reads.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChipRowGeometry {
    /// Leading edge of the available span.
    pub start: f32,
    /// Trailing edge of the available span.
    pub end: f32,
    pub top: f32,
    pub height: f32,
    pub direction: TextDirection,
}

/// Paints one chip into `rect`. `text_width` is the measured width of the
/// label's full text.
pub fn draw_folder_chip<S>(
    scope: &mut S,
    rect: Rect,
    label: &FolderLabel,
    style: &FolderChipStyle,
    text_width: f32,
) where
    S: DrawScope + ?Sized,
{
    let background = label.background.unwrap_or(style.default_background);
    let foreground = label.foreground.unwrap_or(style.default_foreground);
    let radii = RoundedCornerShape::uniform(style.corner_radius).resolve(rect.width, rect.height);
    scope.draw_round_rect_at(rect, Brush::solid(background), radii);

    let direction = TextDirection::detect(&label.name);
    let text_rect = rect
        .inset_horizontal(style.horizontal_padding)
        .translate(0.0, style.vertical_offset);

    let brush = if text_width > rect.width - 2.0 * style.horizontal_padding {
        let fade = style.overflow_gradient_padding.min(text_rect.width);
        let y = text_rect.top() + text_rect.height / 2.0;
        match direction {
            TextDirection::Ltr => {
                Brush::horizontal_fade(foreground, text_rect.right() - fade, text_rect.right(), y)
            }
            TextDirection::Rtl => {
                Brush::horizontal_fade(foreground, text_rect.left() + fade, text_rect.left(), y)
            }
        }
    } else {
        Brush::solid(foreground)
    };

    scope.draw_text(
        text_rect,
        &label.name,
        brush,
        style.font_size,
        direction.start_align(),
    );
}

/// Paints already measured chips along a row and returns their rects in
/// label order. Labels beyond `widths.len()` are skipped.
pub fn draw_folder_chip_row<S, M>(
    scope: &mut S,
    labels: &[FolderLabel],
    widths: &[f32],
    geometry: ChipRowGeometry,
    style: &FolderChipStyle,
    measurer: &M,
) -> Vec<Rect>
where
    S: DrawScope + ?Sized,
    M: TextMeasurer + ?Sized,
{
    let count = widths.len().min(labels.len());
    let widths = &widths[..count];
    let arrangement = ChipArrangement::new(style.inter_chip_gap, geometry.direction);
    let positions = arrangement.positions(geometry.start, geometry.end, widths);

    labels
        .iter()
        .zip(widths.iter().zip(positions))
        .map(|(label, (width, x))| {
            let rect = Rect::new(x, geometry.top, *width, geometry.height);
            draw_folder_chip(&mut *scope, rect, label, style, measurer.text_width(&label.name));
            rect
        })
        .collect()
}

/// Measures `labels` with `style`'s spacing and paints the resulting row.
pub fn layout_and_draw_folder_chips<S, M>(
    scope: &mut S,
    labels: &[FolderLabel],
    max_cell_width: f32,
    max_chip_count: usize,
    geometry: ChipRowGeometry,
    style: &FolderChipStyle,
    measurer: &M,
) -> Result<ChipWidths, LayoutError>
where
    S: DrawScope + ?Sized,
    M: TextMeasurer + ?Sized,
{
    let constraints = style.constraints(
        max_cell_width,
        (geometry.end - geometry.start).max(0.0),
        max_chip_count,
    );
    let widths = measure_chips(labels, &constraints, |text| measurer.text_width(text))?;
    draw_folder_chip_row(scope, labels, &widths, geometry, style, measurer);
    Ok(widths)
}

#[cfg(test)]
#[path = "../tests/chip_draw_tests.rs"]
mod tests;
