//! Grid Rider entry point
//!
//! Stands in for the excluded render-loop driver: runs a headless session
//! with scripted inputs and logs the outcome. The real game wires this loop
//! to a renderer and an input device instead.

use grid_rider::sim::{GameSession, Phase, SteerDirection, TickInput};
use grid_rider::{SimConfig, TraceSink};

/// Safety stop for the headless loop
const MAX_TICKS: u32 = 100_000;

fn main() {
    env_logger::init();

    let config = SimConfig::default();
    let mut session = GameSession::new(&config);
    let mut geometry = TraceSink;
    let mut hud = TraceSink;

    // one trigger press starts the duel
    let start = TickInput {
        start_trigger: true,
        ..TickInput::default()
    };
    session.tick(&start, &mut geometry, &mut hud);

    // hold the throttle and weave until someone crashes
    let mut ticks = 0;
    while session.phase() == Phase::Playing && ticks < MAX_TICKS {
        let steer = match (ticks / 240) % 4 {
            0 => Some(SteerDirection::Left),
            2 => Some(SteerDirection::Right),
            _ => None,
        };
        let input = TickInput {
            throttle: 1,
            steer,
            start_trigger: false,
        };
        session.tick(&input, &mut geometry, &mut hud);
        ticks += 1;
    }

    log::info!(
        "finished after {ticks} ticks: player alive={}, enemy alive={}",
        session.player().alive,
        session.enemy().alive
    );
}
