/*
 * Renderer Module
 *
 * This module draws the simulation once per displayed frame, independent of
 * the fixed tick cadence. Three strategies are available, selected by the
 * startup configuration:
 * - ParticleTrails: the flow-field visualization itself. nannou retains the
 *   frame texture between frames, so the window doubles as the accumulation
 *   surface: it is cleared once, and every frame's particle quads pile on
 *   top of older ones to form trails.
 * - FieldVectors: one green line per field cell, for inspecting the grid.
 * - TestPattern: three lines at decreasing alpha, for checking blending.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::params::SimulationParams;
use crate::vec2::Vec2;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderMode {
    ParticleTrails,
    FieldVectors,
    TestPattern,
}

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();

    match model.params.render_mode {
        RenderMode::ParticleTrails => draw_particle_trails(&draw, model, &frame),
        RenderMode::FieldVectors => draw_field_vectors(&draw, model),
        RenderMode::TestPattern => draw_test_pattern(&draw, model),
    }

    if model.params.show_debug {
        draw_debug_info(&draw, model, app.window_rect());
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();
}

// Map a world-space point (top-left origin, y down) to nannou's centered,
// y-up screen space
fn world_to_screen(pos: Vec2, params: &SimulationParams) -> Point2 {
    pt2(
        pos.x as f32 - params.world_width as f32 / 2.0,
        params.world_height as f32 / 2.0 - pos.y as f32,
    )
}

fn lerp(a: f64, b: f64, w: f64) -> f64 {
    (b - a) * w + a
}

fn draw_particle_trails(draw: &Draw, model: &Model, frame: &Frame) {
    let params = &model.params;

    // Clear only the very first frame; afterwards the retained texture
    // keeps earlier strokes and produces the trails.
    if frame.nth() == 0 {
        draw.background().color(BLACK);
    }

    // Optional decay: a translucent black veil over the whole accumulation
    // surface fades old trails instead of letting them persist forever
    if params.trail_fade > 0.0 {
        draw.rect()
            .w_h(params.world_width as f32, params.world_height as f32)
            .color(rgba(0.0, 0.0, 0.0, params.trail_fade));
    }

    for p in model.sim.particles() {
        // Color runs from (0, 255, 255) at spawn to (255, 0, 255) at the
        // end of the lifecycle
        let delta = lerp(0.0, 255.0, p.lifecycle(params.max_age)) as u8;
        let screen = world_to_screen(p.pos, params);

        // Quads are centered on their position; offset by half a quad so
        // the particle position is the top-left corner of the drawn rect
        let half = params.particle_size / 2.0;
        draw.rect()
            .x_y(screen.x + half, screen.y - half)
            .w_h(params.particle_size, params.particle_size)
            .color(rgba8(delta, 255 - delta, 255, 255));
    }
}

fn draw_field_vectors(draw: &Draw, model: &Model) {
    draw.background().color(BLACK);

    let field = model.sim.field();
    let half_cell = (field.cell_size() / 2) as f64;

    for cy in 0..field.rows() {
        for cx in 0..field.cols() {
            let (px, py) = field.cell_center(cx, cy);
            let center = Vec2::new(px as f64, py as f64);
            let end = center + field.get(cx, cy) * half_cell;

            draw.line()
                .start(world_to_screen(center, &model.params))
                .end(world_to_screen(end, &model.params))
                .color(GREEN);
        }
    }
}

fn draw_test_pattern(draw: &Draw, model: &Model) {
    draw.background().color(BLACK);

    // Same line at three alphas; if blending works they fade left to right
    for (i, alpha) in [100u8, 50, 10].into_iter().enumerate() {
        let x0 = i as f64 * 100.0;
        draw.line()
            .start(world_to_screen(Vec2::new(x0, 0.0), &model.params))
            .end(world_to_screen(Vec2::new(x0 + 100.0, 100.0), &model.params))
            .color(rgba8(0, 255, 255, alpha));
    }
}

const DEBUG_PANEL_MARGIN: f32 = 20.0;
const DEBUG_LINE_HEIGHT: f32 = 20.0;
const DEBUG_PANEL_WIDTH: f32 = 220.0;

// Panel backing the debug overlay, anchored in the top-left corner. It
// sits inside the retained trail texture, so it must enclose every text
// row it carries; the opaque repaint below is what keeps last frame's
// overlay from smearing into the trails.
fn debug_panel_rect(window_rect: Rect, line_count: usize) -> Rect {
    let panel_height = DEBUG_LINE_HEIGHT * line_count as f32 + DEBUG_PANEL_MARGIN;
    Rect::from_x_y_w_h(
        window_rect.left() + DEBUG_PANEL_WIDTH / 2.0,
        window_rect.top() - panel_height / 2.0,
        DEBUG_PANEL_WIDTH,
        panel_height,
    )
}

// Anchor point of the i-th overlay text row
fn debug_text_anchor(window_rect: Rect, line: usize) -> Point2 {
    pt2(
        window_rect.left() + DEBUG_PANEL_MARGIN + 70.0,
        window_rect.top() - DEBUG_PANEL_MARGIN - line as f32 * DEBUG_LINE_HEIGHT,
    )
}

// Draw debug information on the screen
fn draw_debug_info(draw: &Draw, model: &Model, window_rect: Rect) {
    let debug_texts = [
        format!("FPS: {:.1}", model.debug_info.fps),
        format!(
            "Frame time: {:.2} ms",
            model.debug_info.frame_time.as_secs_f64() * 1000.0
        ),
        format!("Ticks this frame: {}", model.debug_info.ticks_this_frame),
        format!("Particles: {}", model.sim.particles().len()),
        format!("Mode: {:?}", model.sim.mode()),
    ];

    let panel = debug_panel_rect(window_rect, debug_texts.len());

    // Opaque background panel, repainted in full every frame
    draw.rect().xy(panel.xy()).wh(panel.wh()).color(BLACK);

    for (i, text) in debug_texts.iter().enumerate() {
        let anchor = debug_text_anchor(window_rect, i);
        draw.text(text)
            .x_y(anchor.x, anchor.y)
            .color(WHITE)
            .font_size(14);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panel_encloses_every_overlay_text_row() {
        // The panel is the opaque region repainted each frame; any text
        // row outside it would leave stale pixels in the trail texture.
        let window_rect = Rect::from_w_h(1280.0, 960.0);
        let line_count = 5;
        let panel = debug_panel_rect(window_rect, line_count);
        for line in 0..line_count {
            let anchor = debug_text_anchor(window_rect, line);
            let top = pt2(anchor.x, anchor.y + DEBUG_LINE_HEIGHT / 2.0);
            let bottom = pt2(anchor.x, anchor.y - DEBUG_LINE_HEIGHT / 2.0);
            assert!(panel.contains(top), "row {line} pokes above the panel");
            assert!(panel.contains(bottom), "row {line} pokes below the panel");
        }
    }

    #[test]
    fn panel_hugs_the_top_left_corner() {
        let window_rect = Rect::from_w_h(1280.0, 960.0);
        let panel = debug_panel_rect(window_rect, 5);
        assert_eq!(panel.left(), window_rect.left());
        assert_eq!(panel.top(), window_rect.top());
    }
}
