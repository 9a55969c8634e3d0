//! Pure math/data for drawing & units in Unimail
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! text direction and unit types shared by the layout and foundation crates.

mod brush;
mod color;
mod geometry;
mod typography;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use typography::*;
pub use unit::*;

pub mod prelude {
    pub use crate::brush::Brush;
    pub use crate::color::Color;
    pub use crate::geometry::{
        CornerRadii, DrawPrimitive, DrawScope, Point, Rect, RoundedCornerShape,
    };
    pub use crate::typography::{TextAlign, TextDirection};
    pub use crate::unit::Dp;
}
