//! Control intents and steering
//!
//! The two bike variants differ only in how they produce a per-tick intent:
//! the player maps the input layer's pressed-control set, the enemy aims at
//! a pursuit point just ahead of the player's nose.

use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::consts::{ACCELERATION_STEP, PURSUIT_LEAD_OFFSET};
use crate::sim::kinematics::{Pose, SteerDirection};
use crate::sim::session::TickInput;

/// What a bike wants to do this tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct Intent {
    /// Signed speed change to apply
    pub throttle: f32,
    /// Steering input, if any
    pub steer: Option<SteerDirection>,
    /// Heading to snap to before moving (pursuit steering)
    pub face: Option<f32>,
}

/// Per-bike intent source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Controller {
    /// Intents come from the input layer
    Player,
    /// Pursuit steering toward the opponent, always at full throttle
    Pursuit,
}

impl Controller {
    /// Produce this tick's intent.
    ///
    /// `target` is the pursuit point just ahead of the player's nose; the
    /// player controller ignores it.
    pub fn produce_intent(&self, input: &TickInput, own: &Pose, target: Vec3) -> Intent {
        match self {
            Controller::Player => Intent {
                throttle: f32::from(input.throttle.signum()) * ACCELERATION_STEP,
                steer: input.steer,
                face: None,
            },
            Controller::Pursuit => Intent {
                throttle: ACCELERATION_STEP,
                steer: None,
                face: Some(pursuit_heading(own.position, target)),
            },
        }
    }
}

/// Pure pursuit heading: aim straight at the target point.
///
/// The trailing `-π/2` corrects for the body model's forward-axis
/// convention. Memoryless: the result does not depend on the current
/// heading, and callers snap to it with no turn-rate limit.
#[inline]
pub fn pursuit_heading(from: Vec3, target: Vec3) -> f32 {
    let delta = target - from;
    -delta.z.atan2(delta.x) - FRAC_PI_2
}

/// The pursuit point: a fixed lead distance ahead of a target pose's nose.
pub fn pursuit_point(target: &Pose) -> Vec3 {
    target.nose_offset(PURSUIT_LEAD_OFFSET)
}
