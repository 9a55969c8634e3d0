#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One pointer sample as delivered by the host's input dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSample {
    pub x: f32,
    pub y: f32,
    pub timestamp_ms: i64,
    pub phase: DragPhase,
}

impl DragSample {
    pub fn new(phase: DragPhase, x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self {
            x,
            y,
            timestamp_ms,
            phase,
        }
    }

    pub fn down(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self::new(DragPhase::Down, x, y, timestamp_ms)
    }

    pub fn moved(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self::new(DragPhase::Move, x, y, timestamp_ms)
    }

    pub fn up(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self::new(DragPhase::Up, x, y, timestamp_ms)
    }

    pub fn cancel(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self::new(DragPhase::Cancel, x, y, timestamp_ms)
    }
}
