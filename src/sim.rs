/*
 * Simulation Module
 *
 * This module owns the flow field and the particle population and advances
 * them one fixed tick at a time. Each tick a particle ages, and either
 * respawns (when its age passes max_age) or is advected: the field vector
 * under it is added to its position and the result is clamped to the world.
 *
 * The simulation has exactly two modes, Running and Paused, toggled by a
 * single external signal. Paused ticks mutate nothing.
 */

use rand::Rng;

use crate::error::FieldError;
use crate::field::FlowField;
use crate::params::SimulationParams;
use crate::particle::Particle;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Running,
    Paused,
}

pub struct Simulation {
    field: FlowField,
    particles: Vec<Particle>,
    mode: Mode,
}

impl Simulation {
    // Generate the field and spawn the full population. Runs once at
    // startup; the particle count never changes afterwards.
    pub fn new(params: &SimulationParams, rng: &mut impl Rng) -> Result<Self, FieldError> {
        let field = FlowField::generate(
            params.world_width,
            params.world_height,
            params.cell_size,
            params.noise_factor,
            params.noise_seed,
        )?;
        let particles = (0..params.num_particles)
            .map(|_| Particle::spawn(rng, params))
            .collect();
        Ok(Self {
            field,
            particles,
            mode: Mode::Running,
        })
    }

    pub fn field(&self) -> &FlowField {
        &self.field
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn toggle_pause(&mut self) {
        self.mode = match self.mode {
            Mode::Running => Mode::Paused,
            Mode::Paused => Mode::Running,
        };
    }

    // Advance the simulation by one fixed tick
    pub fn step(&mut self, rng: &mut impl Rng, params: &SimulationParams) {
        if self.mode == Mode::Paused {
            return;
        }

        let cell = self.field.cell_size() as f64;
        let max_x = params.world_width as f64 - 1.0;
        let max_y = params.world_height as f64 - 1.0;

        for p in &mut self.particles {
            p.age += 1;
            if p.age > params.max_age {
                // die; the slot is reused for a fresh particle and
                // movement is skipped this tick
                *p = Particle::spawn(rng, params);
                continue;
            }

            // The world clamp can leave a particle in a partial fringe
            // cell when cell_size does not divide the world evenly, so
            // the derived index is clamped onto the grid as well.
            let cx = ((p.pos.x / cell) as u32).min(self.field.cols() - 1);
            let cy = ((p.pos.y / cell) as u32).min(self.field.rows() - 1);
            let fv = self.field.get(cx, cy);

            // The field vector is the per-tick displacement; there is no
            // separate velocity state.
            p.pos = p.pos + fv;
            p.pos.x = p.pos.x.clamp(0.0, max_x);
            p.pos.y = p.pos.y.clamp(0.0, max_y);
        }
    }
}
