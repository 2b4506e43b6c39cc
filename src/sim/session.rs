//! Game session and state machine
//!
//! Owns both bikes, drives the per-tick update order, and holds the
//! idle → playing → game-over lifecycle. A finished session is not
//! reusable; restarting means building a new one.

use glam::Vec3;
use log::info;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::render::{GeometrySink, HudSink};
use crate::sim::bike::{Bike, BikeId};
use crate::sim::collision::ArenaBounds;
use crate::sim::kinematics::{Pose, SteerDirection};
use crate::sim::steering::{pursuit_point, Controller};

/// Session lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for a start trigger; the simulation does not advance
    Idle,
    /// Both bikes update every tick
    Playing,
    /// Terminal; no further updates
    GameOver,
}

/// Input commands for a single tick, polled from the input layer
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// +1 accelerate, -1 brake, 0 coast
    pub throttle: i8,
    /// Steering input, if any
    pub steer: Option<SteerDirection>,
    /// Start trigger (latched once on the idle → playing edge)
    pub start_trigger: bool,
}

/// Sequential bike id generator owned by the session.
#[derive(Debug, Default)]
struct IdGen(u32);

impl IdGen {
    fn next(&mut self) -> BikeId {
        self.0 += 1;
        BikeId(self.0)
    }
}

/// The arena duel: one player bike, one pursuit bike, shared bounds.
#[derive(Debug)]
pub struct GameSession {
    phase: Phase,
    player: Bike,
    enemy: Bike,
    bounds: ArenaBounds,
}

impl GameSession {
    pub fn new(config: &SimConfig) -> Self {
        let mut ids = IdGen::default();
        let player = Bike::new(
            ids.next(),
            Pose::new(config.player_spawn, config.player_heading),
            Controller::Player,
            config.trail_capacity,
            config.body_half_extents,
        );
        let enemy = Bike::new(
            ids.next(),
            Pose::new(config.enemy_spawn, config.enemy_heading),
            Controller::Pursuit,
            config.trail_capacity,
            config.body_half_extents,
        );
        Self {
            phase: Phase::Idle,
            player,
            enemy,
            bounds: config.bounds(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn player(&self) -> &Bike {
        &self.player
    }

    pub fn enemy(&self) -> &Bike {
        &self.enemy
    }

    /// Advance one frame.
    ///
    /// Update order is strict: the player moves first, so the enemy's
    /// collision check sees the player's trail as of this tick while the
    /// player sees the enemy's as of the previous one.
    pub fn tick(
        &mut self,
        input: &TickInput,
        geometry: &mut dyn GeometrySink,
        hud: &mut dyn HudSink,
    ) {
        match self.phase {
            Phase::Idle => {
                if input.start_trigger {
                    info!("session started");
                    self.phase = Phase::Playing;
                }
            }
            Phase::Playing => self.play_tick(input, geometry, hud),
            Phase::GameOver => {}
        }
    }

    fn play_tick(
        &mut self,
        input: &TickInput,
        geometry: &mut dyn GeometrySink,
        hud: &mut dyn HudSink,
    ) {
        // a death observed here was found after this tick's updates already
        // stopped, or was forced from outside; either way, no one moves
        if !self.player.alive || !self.enemy.alive {
            self.finish();
            return;
        }

        // the player controller ignores the pursuit target
        let player_intent =
            self.player
                .controller()
                .produce_intent(input, &self.player.pose, Vec3::ZERO);
        {
            let (player, enemy) = (&mut self.player, &self.enemy);
            player.update(player_intent, &enemy.body(), &enemy.trail, &self.bounds, geometry);
        }
        hud.frame(&self.player.pose, self.player.kinematics.velocity());

        if !self.player.alive {
            // the enemy does not advance past the death tick
            self.finish();
            return;
        }

        // pursuit aims at the player's freshly-updated nose
        let lead = pursuit_point(&self.player.pose);
        let enemy_intent = self
            .enemy
            .controller()
            .produce_intent(input, &self.enemy.pose, lead);
        {
            let (enemy, player) = (&mut self.enemy, &self.player);
            enemy.update(enemy_intent, &player.body(), &player.trail, &self.bounds, geometry);
        }

        if !self.enemy.alive {
            self.finish();
        }
    }

    fn finish(&mut self) {
        info!(
            "game over: player alive={}, enemy alive={}",
            self.player.alive, self.enemy.alive
        );
        self.phase = Phase::GameOver;
    }
}
