//! Boundary traits for the excluded render and HUD layers
//!
//! The simulation only ever writes through these; it never reads geometry
//! back. The real implementations (scene graph, ribbon meshes, camera, HUD
//! text) live outside this crate.

use glam::Vec3;
use log::trace;

use crate::sim::{BikeId, Pose};

/// Receives ribbon and body geometry updates.
pub trait GeometrySink {
    /// Called after each successful trail append with both edge point
    /// sequences, oldest sample first.
    fn ribbon_rebuilt(&mut self, id: BikeId, bottom: &[Vec3], top: &[Vec3]);

    /// Called after every bike update with the new pose.
    fn body_moved(&mut self, id: BikeId, pose: &Pose);
}

/// Receives the player's pose and speed each playing tick.
pub trait HudSink {
    fn frame(&mut self, pose: &Pose, speed: f32);
}

/// Discards everything. For tests and headless runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl GeometrySink for NullSink {
    fn ribbon_rebuilt(&mut self, _id: BikeId, _bottom: &[Vec3], _top: &[Vec3]) {}
    fn body_moved(&mut self, _id: BikeId, _pose: &Pose) {}
}

impl HudSink for NullSink {
    fn frame(&mut self, _pose: &Pose, _speed: f32) {}
}

/// Logs geometry traffic through `log` at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TraceSink;

impl GeometrySink for TraceSink {
    fn ribbon_rebuilt(&mut self, id: BikeId, bottom: &[Vec3], _top: &[Vec3]) {
        trace!("bike {id:?}: ribbon rebuilt with {} samples", bottom.len());
    }

    fn body_moved(&mut self, id: BikeId, pose: &Pose) {
        trace!("bike {id:?}: body at {}", pose.position);
    }
}

impl HudSink for TraceSink {
    fn frame(&mut self, pose: &Pose, speed: f32) {
        trace!("hud: {speed:.2} m/s at {}", pose.position);
    }
}
