//! Collision decisions
//!
//! The detector's job is choosing which pairs to test each tick; the
//! geometric predicates themselves are confined to [`BodyVolume`] and
//! [`ArenaBounds`] and go no further than point/volume intersection.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::consts::SELF_TRAIL_EXCLUSION;
use crate::sim::trail::TrailRibbon;

/// Arena wall rectangle on the XZ plane.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ArenaBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_z: f32,
    pub max_z: f32,
}

impl ArenaBounds {
    /// Square arena centered on the origin.
    pub fn centered(half_extent: f32) -> Self {
        Self {
            min_x: -half_extent,
            max_x: half_extent,
            min_z: -half_extent,
            max_z: half_extent,
        }
    }

    /// Whether a body stays strictly inside the walls. Touching a wall
    /// counts as out.
    pub fn contains(&self, body: &BodyVolume) -> bool {
        body.center.x - body.half_extents.x > self.min_x
            && body.center.x + body.half_extents.x < self.max_x
            && body.center.z - body.half_extents.z > self.min_z
            && body.center.z + body.half_extents.z < self.max_z
    }
}

/// Axis-aligned body box around a bike's position.
#[derive(Debug, Clone, Copy)]
pub struct BodyVolume {
    pub center: Vec3,
    pub half_extents: Vec3,
}

impl BodyVolume {
    #[inline]
    pub fn contains_point(&self, p: Vec3) -> bool {
        (p.x - self.center.x).abs() <= self.half_extents.x
            && (p.y - self.center.y).abs() <= self.half_extents.y
            && (p.z - self.center.z).abs() <= self.half_extents.z
    }

    #[inline]
    pub fn intersects(&self, other: &BodyVolume) -> bool {
        (self.center.x - other.center.x).abs() <= self.half_extents.x + other.half_extents.x
            && (self.center.y - other.center.y).abs() <= self.half_extents.y + other.half_extents.y
            && (self.center.z - other.center.z).abs() <= self.half_extents.z + other.half_extents.z
    }
}

/// Decide whether a bike is dead this tick.
///
/// Tests, in order: the arena walls, the opponent's body, the opponent's
/// trail top edge, and the bike's own trail top edge with the newest
/// samples excluded (a bike must not collide with the ribbon it is still
/// laying down).
pub fn is_dead(
    body: &BodyVolume,
    own_trail: &TrailRibbon,
    opponent_body: Option<&BodyVolume>,
    opponent_trail: &TrailRibbon,
    bounds: &ArenaBounds,
) -> bool {
    if !bounds.contains(body) {
        return true;
    }
    if let Some(other) = opponent_body {
        if body.intersects(other) {
            return true;
        }
    }
    if opponent_trail
        .collision_points(0)
        .any(|p| body.contains_point(p))
    {
        return true;
    }
    own_trail
        .collision_points(SELF_TRAIL_EXCLUSION)
        .any(|p| body.contains_point(p))
}
