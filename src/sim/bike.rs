//! Bike actors
//!
//! A bike composes the kinematic model, its trail ribbon, and the collision
//! check into one per-tick update. Player and enemy run the same update;
//! the variants differ only in their controller.

use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};

use crate::consts::{FRICTION_STEP, STEER_STEP, TRAIL_HITCH_OFFSET};
use crate::render::GeometrySink;
use crate::sim::collision::{self, ArenaBounds, BodyVolume};
use crate::sim::kinematics::{KinematicState, Pose};
use crate::sim::steering::{Controller, Intent};
use crate::sim::trail::TrailRibbon;

/// Session-scoped bike identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BikeId(pub u32);

/// A steerable actor with a pose, speed, and trailing ribbon.
#[derive(Debug)]
pub struct Bike {
    pub id: BikeId,
    pub pose: Pose,
    pub kinematics: KinematicState,
    pub trail: TrailRibbon,
    pub alive: bool,
    controller: Controller,
    body_half_extents: Vec3,
}

impl Bike {
    pub fn new(
        id: BikeId,
        pose: Pose,
        controller: Controller,
        trail_capacity: usize,
        body_half_extents: Vec3,
    ) -> Self {
        Self {
            id,
            pose,
            kinematics: KinematicState::default(),
            trail: TrailRibbon::new(trail_capacity),
            alive: true,
            controller,
            body_half_extents,
        }
    }

    pub fn controller(&self) -> Controller {
        self.controller
    }

    /// Current body volume for collision queries.
    pub fn body(&self) -> BodyVolume {
        BodyVolume {
            center: self.pose.position,
            half_extents: self.body_half_extents,
        }
    }

    /// Advance one tick: apply the intent, integrate speed, translate with
    /// the height axis locked, decay, grow the trail, then check for death.
    ///
    /// A dead bike is inert; it neither moves nor grows its trail again.
    pub fn update(
        &mut self,
        intent: Intent,
        opponent_body: &BodyVolume,
        opponent_trail: &TrailRibbon,
        bounds: &ArenaBounds,
        sink: &mut dyn GeometrySink,
    ) {
        if !self.alive {
            return;
        }

        if let Some(heading) = intent.face {
            self.pose.heading = heading;
        }
        if let Some(direction) = intent.steer {
            self.pose.steer(direction, STEER_STEP);
        }
        self.kinematics.accelerate(intent.throttle);

        self.pose.translate(self.kinematics.velocity());
        self.kinematics.decay(FRICTION_STEP);

        let anchor = self.pose.nose_offset(-TRAIL_HITCH_OFFSET);
        if self.trail.record(anchor) {
            let (bottom, top) = self.trail.edges();
            sink.ribbon_rebuilt(self.id, &bottom, &top);
        }
        sink.body_moved(self.id, &self.pose);

        if collision::is_dead(
            &self.body(),
            &self.trail,
            Some(opponent_body),
            opponent_trail,
            bounds,
        ) {
            self.alive = false;
            info!("bike {:?} destroyed at {}", self.id, self.pose.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::ACCELERATION_STEP;
    use crate::render::NullSink;

    fn test_bike(x: f32, z: f32, heading: f32) -> Bike {
        Bike::new(
            BikeId(1),
            Pose::new(Vec3::new(x, 1.0, z), heading),
            Controller::Player,
            32,
            Vec3::new(2.0, 1.0, 1.0),
        )
    }

    fn far_opponent() -> Bike {
        test_bike(500.0, 500.0, 0.0)
    }

    #[test]
    fn test_update_moves_and_records_trail() {
        let bounds = ArenaBounds::centered(1000.0);
        let mut bike = test_bike(0.0, 0.0, 0.0);
        let opponent = far_opponent();
        let intent = Intent {
            throttle: ACCELERATION_STEP,
            ..Intent::default()
        };

        let mut sink = NullSink;
        for _ in 0..20 {
            bike.update(
                intent,
                &opponent.body(),
                &opponent.trail,
                &bounds,
                &mut sink,
            );
        }
        assert!(bike.alive);
        assert!(bike.pose.position.x > 0.0);
        assert_eq!(bike.pose.position.y, 1.0);
        assert!(bike.trail.len() > 1);
    }

    #[test]
    fn test_throttle_outruns_friction() {
        let bounds = ArenaBounds::centered(1000.0);
        let mut bike = test_bike(0.0, 0.0, 0.0);
        let opponent = far_opponent();
        let mut sink = NullSink;
        bike.update(
            Intent {
                throttle: ACCELERATION_STEP,
                ..Intent::default()
            },
            &opponent.body(),
            &opponent.trail,
            &bounds,
            &mut sink,
        );
        let net = ACCELERATION_STEP - FRICTION_STEP;
        assert!((bike.kinematics.velocity() - net).abs() < 1e-6);
    }

    #[test]
    fn test_wall_kills_and_death_is_permanent() {
        let bounds = ArenaBounds::centered(10.0);
        let mut bike = test_bike(9.5, 0.0, 0.0);
        let opponent = far_opponent();
        let mut sink = NullSink;
        bike.update(
            Intent::default(),
            &opponent.body(),
            &opponent.trail,
            &bounds,
            &mut sink,
        );
        assert!(!bike.alive);

        // inert afterwards: no movement, no trail growth
        let pos = bike.pose.position;
        let trail_len = bike.trail.len();
        bike.update(
            Intent {
                throttle: ACCELERATION_STEP,
                ..Intent::default()
            },
            &opponent.body(),
            &opponent.trail,
            &bounds,
            &mut sink,
        );
        assert!(!bike.alive);
        assert_eq!(bike.pose.position, pos);
        assert_eq!(bike.trail.len(), trail_len);
    }

    #[test]
    fn test_heading_snap_applies_before_translation() {
        let bounds = ArenaBounds::centered(1000.0);
        let mut bike = test_bike(0.0, 0.0, 0.0);
        bike.kinematics.accelerate(1.0);
        let opponent = far_opponent();
        let mut sink = NullSink;
        let snapped = 0.9;
        bike.update(
            Intent {
                throttle: 0.0,
                steer: None,
                face: Some(snapped),
            },
            &opponent.body(),
            &opponent.trail,
            &bounds,
            &mut sink,
        );
        assert_eq!(bike.pose.heading, snapped);
        let expected = Vec3::new(0.0, 1.0, 0.0) + crate::forward_vector(snapped) * 1.0;
        assert!(bike.pose.position.distance(expected) < 1e-5);
    }
}
