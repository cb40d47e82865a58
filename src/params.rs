/*
 * Simulation Parameters Module
 *
 * This module defines the SimulationParams struct that contains all the
 * tunables for the flow-field simulation. Parameters are fixed at startup;
 * there is no runtime configuration surface.
 */

use crate::renderer::RenderMode;

pub struct SimulationParams {
    // World dimensions in pixels; also the window size
    pub world_width: u32,
    pub world_height: u32,
    // Side length of one field cell in pixels
    pub cell_size: u32,
    pub num_particles: usize,
    // Lifetime of a particle in fixed ticks
    pub max_age: u32,
    // Divisor applied to cell coordinates before sampling the noise;
    // larger values give smoother fields
    pub noise_factor: f64,
    // Side length of the drawn particle quad in pixels
    pub particle_size: f32,
    pub noise_seed: u32,
    // Fixed simulation tick rate, independent of the render frame rate
    pub fixed_tick_hz: f32,
    // Alpha of the black veil drawn over the retained frame each render;
    // 0 disables decay and trails accumulate until overdrawn
    pub trail_fade: f32,
    pub render_mode: RenderMode,
    pub show_debug: bool,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            world_width: 1280,
            world_height: 960,
            cell_size: 4,
            num_particles: 2048,
            max_age: 120, // two seconds of ticks at 60 Hz
            noise_factor: 50.0,
            particle_size: 2.0,
            noise_seed: 0,
            fixed_tick_hz: 60.0,
            trail_fade: 0.0,
            render_mode: RenderMode::ParticleTrails,
            show_debug: false,
        }
    }
}
