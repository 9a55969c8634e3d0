//! Velocity estimation for drag release and fling classification.
//!
//! [`VelocityTracker1D`] uses the impulse strategy: velocity is derived from
//! the kinetic energy the pointer imparts over the recent samples.

/// Ring buffer size for velocity tracking samples.
const HISTORY_SIZE: usize = 20;

/// Only samples within the last 100ms contribute to the velocity.
const HORIZON_MS: i64 = 100;

/// If no movement for this duration, assume the pointer has stopped.
pub const ASSUME_STOPPED_MS: i64 = 40;

/// Source of release velocity for drag gestures.
///
/// Samples are absolute positions along one axis with millisecond
/// timestamps; velocity is reported in units per second.
pub trait VelocityEstimator {
    fn add_sample(&mut self, time_ms: i64, position: f32);
    fn velocity(&self) -> f32;
    fn reset(&mut self);

    /// [`velocity`](Self::velocity) clamped to `[-max_velocity, max_velocity]`.
    ///
    /// Non-finite estimates report 0. A non-positive `max_velocity` disables
    /// the clamp.
    fn velocity_with_max(&self, max_velocity: f32) -> f32 {
        let velocity = self.velocity();
        if !velocity.is_finite() {
            return 0.0;
        }
        if max_velocity > 0.0 {
            velocity.clamp(-max_velocity, max_velocity)
        } else {
            velocity
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: i64,
    position: f32,
}

/// 1D velocity tracker over absolute positions.
///
/// # Usage
/// ```
/// use unimail_foundation::VelocityTracker1D;
///
/// let mut tracker = VelocityTracker1D::new();
/// tracker.add_data_point(0, 0.0);
/// tracker.add_data_point(10, 100.0);
/// tracker.add_data_point(20, 200.0);
/// assert!(tracker.calculate_velocity() > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    /// Slot of the newest sample.
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    pub fn add_data_point(&mut self, time_ms: i64, position: f32) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Velocity in units/second, or 0.0 with fewer than two usable samples.
    pub fn calculate_velocity(&self) -> f32 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        // Newest first; `times` holds negative ages in milliseconds.
        let mut positions = [0.0f32; HISTORY_SIZE];
        let mut times = [0.0f32; HISTORY_SIZE];
        let mut count = 0;
        let mut slot = self.index;
        let mut newer = newest;

        while let Some(sample) = self.samples[slot] {
            let age = newest.time_ms - sample.time_ms;
            let gap = (newer.time_ms - sample.time_ms).abs();
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }

            positions[count] = sample.position;
            times[count] = -(age as f32);
            newer = sample;
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            slot = (slot + HISTORY_SIZE - 1) % HISTORY_SIZE;
        }

        if count < 2 {
            return 0.0;
        }

        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

impl VelocityEstimator for VelocityTracker1D {
    fn add_sample(&mut self, time_ms: i64, position: f32) {
        self.add_data_point(time_ms, position);
    }

    fn velocity(&self) -> f32 {
        self.calculate_velocity()
    }

    fn reset(&mut self) {
        VelocityTracker1D::reset(self);
    }
}

/// Walks samples from oldest to newest accumulating work, in units/ms.
fn impulse_velocity(positions: &[f32], times: &[f32]) -> f32 {
    let oldest = positions.len() - 1;
    let mut work = 0.0f32;

    for i in (1..=oldest).rev() {
        let (older_time, newer_time) = (times[i], times[i - 1]);
        if older_time == newer_time {
            continue;
        }

        let v_curr = (positions[i - 1] - positions[i]) / (newer_time - older_time);
        let v_prev = kinetic_energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    kinetic_energy_to_velocity(work)
}

/// E = 0.5 * m * v^2 with m = 1.
#[inline]
fn kinetic_energy_to_velocity(kinetic_energy: f32) -> f32 {
    kinetic_energy.signum() * (2.0 * kinetic_energy.abs()).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tracker_returns_zero() {
        let tracker = VelocityTracker1D::new();
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn single_point_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn constant_velocity() {
        let mut tracker = VelocityTracker1D::new();
        // 100 px per 10ms = 10000 px/s
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(10, 100.0);
        tracker.add_data_point(20, 200.0);
        tracker.add_data_point(30, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10000.0).abs() < 1000.0,
            "Expected ~10000, got {}",
            velocity
        );
    }

    #[test]
    fn leftward_motion_is_negative() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 300.0);
        tracker.add_data_point(10, 200.0);
        tracker.add_data_point(20, 100.0);

        let velocity = tracker.calculate_velocity();
        assert!(velocity < 0.0, "Expected negative velocity, got {}", velocity);
    }

    #[test]
    fn velocity_is_capped() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(1, 10_000.0);
        assert_eq!(tracker.velocity_with_max(8_000.0), 8_000.0);

        tracker.reset();
        tracker.add_data_point(0, 10_000.0);
        tracker.add_data_point(1, 0.0);
        assert_eq!(tracker.velocity_with_max(8_000.0), -8_000.0);
        assert!(tracker.velocity_with_max(0.0) < -8_000.0);
    }

    struct Diverging;

    impl VelocityEstimator for Diverging {
        fn add_sample(&mut self, _time_ms: i64, _position: f32) {}

        fn velocity(&self) -> f32 {
            f32::INFINITY
        }

        fn reset(&mut self) {}
    }

    #[test]
    fn non_finite_estimate_reports_zero() {
        assert_eq!(Diverging.velocity_with_max(8_000.0), 0.0);
        assert_eq!(Diverging.velocity_with_max(f32::INFINITY), 0.0);
    }

    #[test]
    fn samples_outside_horizon_are_ignored() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(150, 100.0);
        tracker.add_data_point(160, 200.0);
        tracker.add_data_point(170, 300.0);

        let velocity = tracker.calculate_velocity();
        assert!(
            (velocity - 10000.0).abs() < 1000.0,
            "Expected ~10000 from recent samples, got {}",
            velocity
        );
    }

    #[test]
    fn gap_over_stopped_threshold_returns_zero() {
        let mut tracker = VelocityTracker1D::new();
        tracker.add_data_point(0, 0.0);
        tracker.add_data_point(ASSUME_STOPPED_MS + 1, 100.0);
        assert_eq!(tracker.calculate_velocity(), 0.0);
    }

    #[test]
    fn ring_buffer_wraps() {
        let mut tracker = VelocityTracker1D::new();
        for step in 0..(HISTORY_SIZE as i64 * 3) {
            tracker.add_data_point(step * 4, step as f32 * 8.0);
        }
        let velocity = tracker.calculate_velocity();
        assert!((velocity - 2000.0).abs() < 200.0, "got {}", velocity);
    }

    #[test]
    fn estimator_trait_matches_tracker() {
        let mut tracker = VelocityTracker1D::new();
        for (time, x) in [(0, 0.0), (8, 40.0), (16, 80.0), (24, 120.0)] {
            VelocityEstimator::add_sample(&mut tracker, time, x);
        }
        assert_eq!(tracker.velocity(), tracker.calculate_velocity());

        VelocityEstimator::reset(&mut tracker);
        assert_eq!(tracker.velocity(), 0.0);
    }
}
