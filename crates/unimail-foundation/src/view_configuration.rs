//! Platform gesture constants.
//!
//! Values are in logical pixels. Hosts on high-density screens should pass
//! [`ViewConfiguration::scaled`] with the device density.

/// Touch slop in logical pixels.
///
/// A pointer has to travel at least this far from its press position before
/// a drag is recognised. Matches the usual 8dp platform touch slop.
pub const DRAG_THRESHOLD: f32 = 8.0;

/// Minimum release velocity, in logical pixels per second, that counts as a fling.
pub const MIN_FLING_VELOCITY: f32 = 50.0;

/// Maximum fling velocity in logical pixels per second.
///
/// Release velocities are clamped to this before being reported.
pub const MAX_FLING_VELOCITY: f32 = 8_000.0;

/// Gesture thresholds supplied by the host platform.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ViewConfiguration {
    pub touch_slop: f32,
    pub min_fling_velocity: f32,
    pub max_fling_velocity: f32,
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self {
            touch_slop: DRAG_THRESHOLD,
            min_fling_velocity: MIN_FLING_VELOCITY,
            max_fling_velocity: MAX_FLING_VELOCITY,
        }
    }
}

impl ViewConfiguration {
    pub fn with_touch_slop(self, touch_slop: f32) -> Self {
        Self { touch_slop, ..self }
    }

    pub fn with_min_fling_velocity(self, min_fling_velocity: f32) -> Self {
        Self {
            min_fling_velocity,
            ..self
        }
    }

    /// Converts every threshold from logical to physical pixels.
    pub fn scaled(self, density: f32) -> Self {
        Self {
            touch_slop: self.touch_slop * density,
            min_fling_velocity: self.min_fling_velocity * density,
            max_fling_velocity: self.max_fling_velocity * density,
        }
    }
}
