/*
 * Particle Module
 *
 * A particle is a position plus an age in ticks. The population has a fixed
 * size for the life of the process: a particle that outlives max_age is
 * overwritten in place by a fresh spawn, never removed.
 */

use rand::Rng;

use crate::params::SimulationParams;
use crate::vec2::Vec2;

#[derive(Clone, Copy, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub age: u32,
}

impl Particle {
    // Spawn at a uniform-random position with a uniform-random starting
    // age in [0, max_age). The randomized age desynchronizes lifecycles
    // so the population does not respawn in visible unison.
    pub fn spawn(rng: &mut impl Rng, params: &SimulationParams) -> Self {
        Self {
            age: rng.gen_range(0..params.max_age),
            pos: Vec2::new(
                rng.gen_range(0.0..params.world_width as f64),
                rng.gen_range(0.0..params.world_height as f64),
            ),
        }
    }

    // Fraction of the lifecycle spent, in [0, 1]; drives the draw color
    pub fn lifecycle(&self, max_age: u32) -> f64 {
        self.age as f64 / max_age as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn spawn_stays_inside_world_bounds_with_age_below_max() {
        let params = SimulationParams::default();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let p = Particle::spawn(&mut rng, &params);
            assert!(p.pos.x >= 0.0 && p.pos.x < params.world_width as f64);
            assert!(p.pos.y >= 0.0 && p.pos.y < params.world_height as f64);
            assert!(p.age < params.max_age);
        }
    }

    #[test]
    fn lifecycle_is_age_over_max_age() {
        let p = Particle {
            pos: Vec2::zero(),
            age: 30,
        };
        assert!((p.lifecycle(120) - 0.25).abs() < f64::EPSILON);
    }
}
