/*
 * Input Module
 *
 * This module handles keyboard input for the flow-field simulation. The
 * whole contract is two keys, acted on at release:
 * - Q requests application quit
 * - P toggles the simulation between running and paused
 * Any other key is a no-op.
 */

use nannou::prelude::*;

use crate::app::Model;

// Key released event handler
pub fn key_released(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Q => app.quit(),
        Key::P => model.sim.toggle_pause(),
        _ => {}
    }
}
