//! Gesture recognition and folder chip rendering for Unimail.

pub mod chips;
pub mod nodes;
pub mod velocity_tracker;
pub mod view_configuration;

pub use chips::*;
pub use nodes::input::{
    DirectionalDragGesture, DragDirection, DragGesturePhase, DragListener, DragPhase, DragSample,
};
pub use velocity_tracker::{VelocityEstimator, VelocityTracker1D};
pub use view_configuration::ViewConfiguration;

pub use unimail_ui_graphics as graphics;
pub use unimail_ui_layout as layout;

pub mod prelude {
    pub use crate::chips::{ChipRowGeometry, FolderChipStyle};
    pub use crate::nodes::input::prelude::*;
    pub use crate::velocity_tracker::VelocityTracker1D;
    pub use crate::view_configuration::ViewConfiguration;
    pub use unimail_ui_layout::prelude::*;
}
