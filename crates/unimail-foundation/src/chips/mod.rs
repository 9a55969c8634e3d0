//! Folder chips shown on conversation rows.

mod draw;
mod style;

pub use draw::{draw_folder_chip, draw_folder_chip_row, layout_and_draw_folder_chips, ChipRowGeometry};
pub use style::FolderChipStyle;
