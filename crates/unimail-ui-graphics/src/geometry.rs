//! Geometric primitives and the recording draw scope

use crate::typography::TextAlign;
use crate::Brush;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            width: self.width,
            height: self.height,
        }
    }

    /// Shrinks the rect horizontally by `inset` on both sides, never below
    /// zero width.
    pub fn inset_horizontal(&self, inset: f32) -> Self {
        Self {
            x: self.x + inset,
            y: self.y,
            width: (self.width - 2.0 * inset).max(0.0),
            height: self.height,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CornerRadii {
    pub top_left: f32,
    pub top_right: f32,
    pub bottom_right: f32,
    pub bottom_left: f32,
}

impl CornerRadii {
    pub fn uniform(radius: f32) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundedCornerShape {
    radii: CornerRadii,
}

impl RoundedCornerShape {
    pub fn uniform(radius: f32) -> Self {
        Self {
            radii: CornerRadii::uniform(radius),
        }
    }

    /// Clamps every radius to half of the shorter side.
    pub fn resolve(&self, width: f32, height: f32) -> CornerRadii {
        let mut resolved = self.radii;
        let max_width = (width / 2.0).max(0.0);
        let max_height = (height / 2.0).max(0.0);
        resolved.top_left = resolved.top_left.clamp(0.0, max_width).min(max_height);
        resolved.top_right = resolved.top_right.clamp(0.0, max_width).min(max_height);
        resolved.bottom_right = resolved.bottom_right.clamp(0.0, max_width).min(max_height);
        resolved.bottom_left = resolved.bottom_left.clamp(0.0, max_width).min(max_height);
        resolved
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawPrimitive {
    RoundRect {
        rect: Rect,
        brush: Brush,
        radii: CornerRadii,
    },
    /// A single line of text clipped to `rect`.
    Text {
        rect: Rect,
        text: String,
        brush: Brush,
        font_size: f32,
        align: TextAlign,
    },
}

pub trait DrawScope {
    fn draw_round_rect_at(&mut self, rect: Rect, brush: Brush, radii: CornerRadii);
    fn draw_text(&mut self, rect: Rect, text: &str, brush: Brush, font_size: f32, align: TextAlign);
}

/// Draw scope that records primitives instead of rasterizing them.
#[derive(Default)]
pub struct DrawScopeDefault {
    primitives: Vec<DrawPrimitive>,
}

impl DrawScopeDefault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[DrawPrimitive] {
        &self.primitives
    }

    pub fn into_primitives(self) -> Vec<DrawPrimitive> {
        self.primitives
    }
}

impl DrawScope for DrawScopeDefault {
    fn draw_round_rect_at(&mut self, rect: Rect, brush: Brush, radii: CornerRadii) {
        self.primitives
            .push(DrawPrimitive::RoundRect { rect, brush, radii });
    }

    fn draw_text(&mut self, rect: Rect, text: &str, brush: Brush, font_size: f32, align: TextAlign) {
        self.primitives.push(DrawPrimitive::Text {
            rect,
            text: text.to_owned(),
            brush,
            font_size,
            align,
        });
    }
}
