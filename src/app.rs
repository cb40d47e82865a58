/*
 * Application Module
 *
 * This module defines the main application model and the host loop glue for
 * the flow-field simulation. It handles window creation and the
 * fixed-timestep scheduling that decouples simulation ticks from the render
 * frame rate.
 *
 * Simulation ticks and rendering share one thread: an accumulator measured
 * against a monotonic clock decides how many fixed ticks to run each loop
 * iteration, so the render path never observes a half-updated population.
 */

use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::{Duration, Instant};

use crate::debug::DebugInfo;
use crate::input;
use crate::params::SimulationParams;
use crate::renderer;
use crate::sim::Simulation;

// Main model for the application
pub struct Model {
    pub params: SimulationParams,
    pub sim: Simulation,
    pub rng: StdRng,
    pub debug_info: DebugInfo,
    // Fixed timestep scheduling
    pub tick_interval: Duration,
    pub tick_accumulator: Duration,
    pub last_update_time: Instant,
}

// Initialize the model. Window or surface creation failure is fatal and
// aborts startup before the loop runs.
pub fn model(app: &App) -> Model {
    let params = SimulationParams::default();

    println!("seed {}", params.noise_seed);

    app.new_window()
        .title("FlowField")
        .size(params.world_width, params.world_height)
        .view(renderer::view)
        .key_released(input::key_released)
        .build()
        .unwrap();

    // One seed drives both the noise field and the spawn randomness, so a
    // run is reproducible end to end.
    let mut rng = StdRng::seed_from_u64(params.noise_seed as u64);
    let sim = Simulation::new(&params, &mut rng)
        .expect("world must be at least one field cell in each dimension");

    let tick_interval = Duration::from_secs_f32(1.0 / params.fixed_tick_hz);

    Model {
        params,
        sim,
        rng,
        debug_info: DebugInfo::default(),
        tick_interval,
        tick_accumulator: Duration::ZERO,
        last_update_time: Instant::now(),
    }
}

// Update the model: run as many fixed ticks as wall time owes us
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let now = Instant::now();
    model.tick_accumulator += now.duration_since(model.last_update_time);
    model.last_update_time = now;

    let mut ticks = 0;
    while model.tick_accumulator >= model.tick_interval {
        model.sim.step(&mut model.rng, &model.params);
        model.tick_accumulator -= model.tick_interval;
        ticks += 1;
    }
    model.debug_info.ticks_this_frame = ticks;
}
