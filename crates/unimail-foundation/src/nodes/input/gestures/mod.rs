pub mod drag;

pub use drag::{DirectionalDragGesture, DragDirection, DragGesturePhase, DragListener};
