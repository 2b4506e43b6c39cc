//! Pose and kinematic model
//!
//! Pure state transitions for speed and heading. Translation deliberately
//! holds the height axis fixed: rotation math must never climb or sink the
//! bike.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::{MAX_ROLL, MAX_VELOCITY};
use crate::forward_vector;

/// Steering direction for a single tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SteerDirection {
    Left,
    Right,
}

/// Position plus orientation of a bike body.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    /// Yaw (radians)
    pub heading: f32,
    /// Banking tilt (radians), kept inside the anti-tip clamp
    pub roll: f32,
}

impl Pose {
    pub fn new(position: Vec3, heading: f32) -> Self {
        Self {
            position,
            heading,
            roll: 0.0,
        }
    }

    /// A point offset from the nose along the bike's body.
    ///
    /// Positive amounts are ahead of the nose, negative behind it.
    pub fn nose_offset(&self, amount: f32) -> Vec3 {
        self.position + forward_vector(self.heading) * amount
    }

    /// Rotate the heading and bank into the turn.
    ///
    /// Roll moves a half-amount opposite the turn and is clamped to
    /// `[-MAX_ROLL, MAX_ROLL]` so the bike cannot tip over.
    pub fn steer(&mut self, direction: SteerDirection, amount: f32) {
        let sign = match direction {
            SteerDirection::Left => 1.0,
            SteerDirection::Right => -1.0,
        };
        self.heading += amount * sign;
        self.roll = (self.roll - amount * sign / 2.0).clamp(-MAX_ROLL, MAX_ROLL);
    }

    /// Advance along the heading, holding height fixed (axis lock).
    pub fn translate(&mut self, distance: f32) {
        let height = self.position.y;
        self.position += forward_vector(self.heading) * distance;
        self.position.y = height;
    }
}

/// Forward speed state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct KinematicState {
    velocity: f32,
}

impl KinematicState {
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Change speed by `delta`, clamped to `[0, MAX_VELOCITY]`.
    pub fn accelerate(&mut self, delta: f32) {
        self.velocity = (self.velocity + delta).clamp(0.0, MAX_VELOCITY);
    }

    /// One friction step toward zero.
    pub fn decay(&mut self, step: f32) {
        self.velocity = decay(self.velocity, step);
    }
}

/// Friction decay toward zero without sign overshoot.
///
/// Settles to exactly zero once the remaining speed is within one step,
/// so repeated application converges instead of oscillating around zero.
#[inline]
pub fn decay(velocity: f32, step: f32) -> f32 {
    if velocity.abs() <= step {
        0.0
    } else {
        velocity - step.copysign(velocity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::{FRICTION_STEP, STEER_STEP};
    use proptest::prelude::*;

    #[test]
    fn test_accelerate_clamps_to_range() {
        let mut k = KinematicState::default();
        k.accelerate(MAX_VELOCITY * 2.0);
        assert_eq!(k.velocity(), MAX_VELOCITY);
        k.accelerate(-MAX_VELOCITY * 3.0);
        assert_eq!(k.velocity(), 0.0);
    }

    #[test]
    fn test_decay_settles_exactly_at_zero() {
        // 0.0025 needs ceil(0.0025 / 0.001) = 3 applications
        let mut v = 0.0025;
        for _ in 0..3 {
            v = decay(v, FRICTION_STEP);
            assert!(v >= 0.0);
        }
        assert_eq!(v, 0.0);
        // settled speed stays settled
        assert_eq!(decay(v, FRICTION_STEP), 0.0);
    }

    #[test]
    fn test_translate_locks_height() {
        let mut pose = Pose::new(Vec3::new(0.0, 1.0, 0.0), 0.7);
        pose.translate(5.0);
        assert_eq!(pose.position.y, 1.0);
        assert!(pose.position.distance(Vec3::new(0.0, 1.0, 0.0)) > 4.9);
    }

    #[test]
    fn test_nose_offset_direction() {
        let pose = Pose::new(Vec3::ZERO, 0.0);
        let ahead = pose.nose_offset(2.0);
        let behind = pose.nose_offset(-2.0);
        assert!((ahead.x - 2.0).abs() < 1e-6);
        assert!((behind.x + 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_steer_banks_opposite_turn() {
        let mut pose = Pose::new(Vec3::ZERO, 0.0);
        pose.steer(SteerDirection::Left, STEER_STEP);
        assert!(pose.heading > 0.0);
        assert!(pose.roll < 0.0);
    }

    proptest! {
        // Exact-arithmetic friction steps (dyadic) so the convergence count
        // is provable: ceil(v / step) applications reach exactly zero.
        #[test]
        fn decay_converges_without_overshoot(
            v in 0.0f32..=MAX_VELOCITY,
            exp in 1i32..=4,
        ) {
            let step = 0.5f32.powi(exp);
            let applications = (v / step).ceil() as u32;
            let mut velocity = v;
            for _ in 0..applications {
                let next = decay(velocity, step);
                prop_assert!(next >= 0.0);
                prop_assert!(next <= velocity);
                velocity = next;
            }
            prop_assert_eq!(velocity, 0.0);
        }

        #[test]
        fn roll_stays_inside_clamp(turns in prop::collection::vec(prop::bool::ANY, 0..256)) {
            let mut pose = Pose::new(Vec3::ZERO, 0.0);
            for left in turns {
                let dir = if left { SteerDirection::Left } else { SteerDirection::Right };
                pose.steer(dir, STEER_STEP);
                prop_assert!(pose.roll.abs() <= MAX_ROLL);
            }
        }
    }
}
