//! Brush definitions for painting (solid colors and linear fades)

use crate::color::Color;
use crate::geometry::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    /// Colors spread evenly between `start` and `end`; outside that segment
    /// the nearest end color is repeated.
    LinearGradient {
        colors: Vec<Color>,
        start: Point,
        end: Point,
    },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Brush::Solid(color)
    }

    /// Horizontal fade from `color` at `from_x` to fully transparent at `to_x`.
    ///
    /// `to_x` may sit left of `from_x` to fade towards the leading edge.
    pub fn horizontal_fade(color: Color, from_x: f32, to_x: f32, y: f32) -> Self {
        Brush::LinearGradient {
            colors: vec![color, color.with_alpha(0.0)],
            start: Point::new(from_x, y),
            end: Point::new(to_x, y),
        }
    }

    /// The color used at the gradient origin, or the solid color.
    pub fn primary_color(&self) -> Option<Color> {
        match self {
            Brush::Solid(color) => Some(*color),
            Brush::LinearGradient { colors, .. } => colors.first().copied(),
        }
    }
}
