pub mod gestures;
pub mod types;

pub use gestures::{DirectionalDragGesture, DragDirection, DragGesturePhase, DragListener};
pub use types::{DragPhase, DragSample};

pub mod prelude {
    pub use super::gestures::{DirectionalDragGesture, DragDirection, DragListener};
    pub use super::types::{DragPhase, DragSample};
}
