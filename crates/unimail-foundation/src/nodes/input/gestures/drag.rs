//! Horizontal drag recogniser for swipeable rows and drawers.
//!
//! A gesture is armed on `Down`, becomes a drag once the pointer has moved
//! past the touch slop in the configured direction (and past the optional
//! activation coordinate), and reports its release velocity on `Up`.

use crate::nodes::input::types::{DragPhase, DragSample};
use crate::velocity_tracker::{VelocityEstimator, VelocityTracker1D};
use crate::view_configuration::ViewConfiguration;

/// Direction in which a drag is allowed to start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DragDirection {
    LeftToRight,
    RightToLeft,
}

impl DragDirection {
    /// Whether moving from `from` to `to` travels in this direction.
    fn is_forward(self, from: f32, to: f32) -> bool {
        match self {
            DragDirection::LeftToRight => to > from,
            DragDirection::RightToLeft => to < from,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DragGesturePhase {
    #[default]
    Idle,
    /// Pointer is down but has not yet qualified as a drag.
    Armed,
    Dragging,
}

/// Receives drag callbacks. Deltas are relative to the x where dragging began.
pub trait DragListener {
    fn on_drag_start(&mut self);
    fn on_drag(&mut self, delta_x: f32);
    fn on_drag_end(&mut self, total_delta_x: f32, velocity_x: f32, is_fling: bool);
}

/// Per touch-stream drag state machine.
///
/// Owned by the view receiving the stream; feed it every sample in
/// `Down, Move*, (Up | Cancel)` order. Samples outside that order are ignored.
#[derive(Clone, Debug)]
pub struct DirectionalDragGesture<V = VelocityTracker1D> {
    direction: DragDirection,
    activation_threshold: Option<f32>,
    config: ViewConfiguration,
    phase: DragGesturePhase,
    initial_x: f32,
    initial_y: f32,
    drag_start_x: f32,
    last_x: f32,
    velocity: V,
}

impl DirectionalDragGesture<VelocityTracker1D> {
    pub fn new(direction: DragDirection, config: ViewConfiguration) -> Self {
        Self::with_velocity_estimator(direction, config, VelocityTracker1D::new())
    }
}

impl<V: VelocityEstimator> DirectionalDragGesture<V> {
    pub fn with_velocity_estimator(
        direction: DragDirection,
        config: ViewConfiguration,
        velocity: V,
    ) -> Self {
        Self {
            direction,
            activation_threshold: None,
            config,
            phase: DragGesturePhase::Idle,
            initial_x: 0.0,
            initial_y: 0.0,
            drag_start_x: 0.0,
            last_x: 0.0,
            velocity,
        }
    }

    /// Only allows a drag to start once the pointer has crossed `x`.
    pub fn with_activation_threshold(mut self, x: f32) -> Self {
        self.activation_threshold = Some(x);
        self
    }

    pub fn set_activation_threshold(&mut self, threshold: Option<f32>) {
        self.activation_threshold = threshold;
    }

    pub fn set_direction(&mut self, direction: DragDirection) {
        self.direction = direction;
    }

    pub fn direction(&self) -> DragDirection {
        self.direction
    }

    pub fn phase(&self) -> DragGesturePhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragGesturePhase::Dragging
    }

    /// Handles one sample and returns whether a drag is in progress afterwards.
    ///
    /// Callers use the result to decide whether to intercept the stream.
    pub fn process<L>(&mut self, sample: DragSample, listener: &mut L) -> bool
    where
        L: DragListener + ?Sized,
    {
        match (self.phase, sample.phase) {
            (phase, DragPhase::Down) => {
                if phase == DragGesturePhase::Dragging {
                    log::debug!("down while dragging; ending previous drag as cancelled");
                    listener.on_drag_end(self.last_x - self.drag_start_x, 0.0, false);
                }
                self.arm(sample);
            }
            (DragGesturePhase::Idle, phase) => {
                log::trace!("ignoring {phase:?} without a preceding down");
            }
            (DragGesturePhase::Armed, DragPhase::Move) => {
                self.track(sample);
                if self.should_activate(&sample) {
                    self.phase = DragGesturePhase::Dragging;
                    self.drag_start_x = sample.x;
                    log::trace!("drag started at x={}", sample.x);
                    listener.on_drag_start();
                }
            }
            (DragGesturePhase::Dragging, DragPhase::Move) => {
                self.track(sample);
                listener.on_drag(sample.x - self.drag_start_x);
            }
            (DragGesturePhase::Dragging, DragPhase::Up) => {
                self.track(sample);
                let velocity_x = self.velocity.velocity_with_max(self.config.max_fling_velocity);
                let is_fling = velocity_x.abs() > self.config.min_fling_velocity;
                let total = sample.x - self.drag_start_x;
                log::trace!("drag ended: delta={total} velocity={velocity_x} fling={is_fling}");
                listener.on_drag_end(total, velocity_x, is_fling);
                self.finish();
            }
            (DragGesturePhase::Dragging, DragPhase::Cancel) => {
                log::trace!("drag cancelled");
                listener.on_drag_end(sample.x - self.drag_start_x, 0.0, false);
                self.finish();
            }
            (DragGesturePhase::Armed, DragPhase::Up | DragPhase::Cancel) => {
                self.finish();
            }
        }

        self.is_dragging()
    }

    /// Drops any in-flight gesture without callbacks.
    pub fn reset(&mut self) {
        self.finish();
    }

    fn arm(&mut self, sample: DragSample) {
        self.phase = DragGesturePhase::Armed;
        self.initial_x = sample.x;
        self.initial_y = sample.y;
        self.velocity.reset();
        self.track(sample);
    }

    fn track(&mut self, sample: DragSample) {
        self.last_x = sample.x;
        self.velocity.add_sample(sample.timestamp_ms, sample.x);
    }

    fn should_activate(&self, sample: &DragSample) -> bool {
        if !self.direction.is_forward(self.initial_x, sample.x) {
            return false;
        }
        if let Some(threshold) = self.activation_threshold {
            if !self.direction.is_forward(threshold, sample.x) {
                return false;
            }
        }

        let dx = (sample.x - self.initial_x).abs();
        let dy = (sample.y - self.initial_y).abs();
        dx >= self.config.touch_slop && dx >= dy
    }

    fn finish(&mut self) {
        self.velocity.reset();
        self.phase = DragGesturePhase::Idle;
    }
}

#[cfg(test)]
#[path = "../../../tests/drag_gesture_tests.rs"]
mod tests;
