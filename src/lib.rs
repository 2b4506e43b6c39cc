//! Grid Rider - a light-cycle arena duel
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, trails, collision, session)
//! - `render`: Write-only boundary traits for the external render/HUD layer
//! - `config`: Data-driven arena and spawn configuration

pub mod config;
pub mod render;
pub mod sim;

pub use config::SimConfig;
pub use render::{GeometrySink, HudSink, NullSink, TraceSink};

use glam::Vec3;

/// Simulation constants
pub mod consts {
    /// Speed gained per accelerating tick
    pub const ACCELERATION_STEP: f32 = 0.005;
    /// Forward speed cap
    pub const MAX_VELOCITY: f32 = 2.0;
    /// Speed lost per coasting tick
    pub const FRICTION_STEP: f32 = 0.001;
    /// Banking tilt clamp, keeps the bike from tipping over
    pub const MAX_ROLL: f32 = std::f32::consts::FRAC_PI_6;
    /// Heading change per steering tick
    pub const STEER_STEP: f32 = 0.025;

    /// Trail anchor distance behind the nose
    pub const TRAIL_HITCH_OFFSET: f32 = 4.0;
    /// Minimum spacing between recorded trail samples
    pub const MIN_SAMPLE_SPACING: f32 = 0.01;
    /// Vertical half-height of the trail ribbon
    pub const TRAIL_HALF_HEIGHT: f32 = 1.0;

    /// How far ahead of the player's nose the pursuit point sits
    pub const PURSUIT_LEAD_OFFSET: f32 = 1.0;
    /// Newest own-trail samples ignored by the self-collision check
    pub const SELF_TRAIL_EXCLUSION: usize = 10;
}

/// Unit forward vector for a heading angle.
///
/// The bike's nose points along its local X axis; with yaw applied the world
/// forward direction is `(cos(-heading), 0, sin(-heading))`.
#[inline]
pub fn forward_vector(heading: f32) -> Vec3 {
    Vec3::new((-heading).cos(), 0.0, (-heading).sin())
}
