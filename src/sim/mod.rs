//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Driven one tick per rendered frame by an external loop
//! - Stable update order (player before enemy)
//! - No rendering or platform dependencies

pub mod bike;
pub mod collision;
pub mod kinematics;
pub mod session;
pub mod steering;
pub mod trail;

pub use bike::{Bike, BikeId};
pub use collision::{is_dead, ArenaBounds, BodyVolume};
pub use kinematics::{decay, KinematicState, Pose, SteerDirection};
pub use session::{GameSession, Phase, TickInput};
pub use steering::{pursuit_heading, pursuit_point, Controller, Intent};
pub use trail::{TrailRibbon, TrailSample};
