/*
 * Flow Field Particle Visualization
 *
 * A fixed population of particles is advected through a static 2D vector
 * field derived from OpenSimplex noise. Fixed-rate simulation ticks are
 * decoupled from the render frame rate, and particle draws accumulate into
 * a trail. Press P to pause the simulation and Q to quit.
 */

use flowfield::app;

fn main() {
    nannou::app(app::model).update(app::update).run();
}
