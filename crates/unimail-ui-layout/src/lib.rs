//! Folder chip measurement & row placement for Unimail

mod arrangement;
mod chips;
mod constraints;
mod error;
mod text;

pub use arrangement::*;
pub use chips::*;
pub use constraints::*;
pub use error::*;
pub use text::*;

pub mod prelude {
    pub use crate::arrangement::ChipArrangement;
    pub use crate::chips::{measure_chips, total_width, ChipWidths, FolderLabel};
    pub use crate::constraints::ChipConstraints;
    pub use crate::error::LayoutError;
    pub use crate::text::{MonospacedTextMeasurer, TextMeasurer};
}
