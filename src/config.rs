//! Arena and spawn configuration
//!
//! Everything the session needs that is scene data rather than a model
//! invariant: arena extents, trail capacity, spawn poses, body size.
//! Physical constants of the kinematic model live in [`crate::consts`].

use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_4;

use crate::sim::ArenaBounds;

/// Runtime simulation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    /// Arena wall half-extent on X and Z, centered on the origin
    pub arena_half_extent: f32,
    /// Maximum trail sample pairs kept per bike
    pub trail_capacity: usize,
    /// Bike body box half-extents
    pub body_half_extents: Vec3,
    /// Player spawn position
    pub player_spawn: Vec3,
    /// Player spawn heading (radians)
    pub player_heading: f32,
    /// Enemy spawn position
    pub enemy_spawn: Vec3,
    /// Enemy spawn heading (radians)
    pub enemy_heading: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        // spawns face each other across the arena diagonal
        Self {
            arena_half_extent: 40.0,
            trail_capacity: 500,
            body_half_extents: Vec3::new(2.0, 1.0, 1.0),
            player_spawn: Vec3::new(-32.0, 1.0, -32.0),
            player_heading: -FRAC_PI_4,
            enemy_spawn: Vec3::new(32.0, 1.0, 32.0),
            enemy_heading: 3.0 * FRAC_PI_4,
        }
    }
}

impl SimConfig {
    /// Arena wall rectangle for this configuration.
    pub fn bounds(&self) -> ArenaBounds {
        ArenaBounds::centered(self.arena_half_extent)
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward_vector;

    #[test]
    fn test_default_spawns_face_each_other() {
        let config = SimConfig::default();
        let to_enemy = (config.enemy_spawn - config.player_spawn).normalize();
        let player_forward = forward_vector(config.player_heading);
        assert!(player_forward.dot(to_enemy) > 0.99);

        let enemy_forward = forward_vector(config.enemy_heading);
        assert!(enemy_forward.dot(-to_enemy) > 0.99);
    }

    #[test]
    fn test_from_json_round_trip() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed = SimConfig::from_json(&json).unwrap();
        assert_eq!(parsed.trail_capacity, config.trail_capacity);
        assert_eq!(parsed.player_spawn, config.player_spawn);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(SimConfig::from_json("not json").is_err());
    }
}
