/*
 * Renderer Module
 *
 * This module handles the rendering of the flocking simulation.
 * It draws the boid glyphs and the debug overlays.
 *
 * Simulation coordinates span [0, width] x [0, height] with the origin at
 * the lower-left corner of the window; nannou's coordinate system is
 * centred on the window, so positions are shifted by half the canvas.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::boid::Boid;
use crate::params::SimulationParams;
use crate::ui;
use crate::vector::Vector2D;
use crate::{BOID_SIZE, GLYPH_SPREAD};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    // Begin drawing
    let draw = app.draw();

    // Clear the background
    draw.background().color(BLACK);

    let params = &model.sim.params;

    // Draw each boid
    for boid in &model.boids {
        draw_boid(&draw, boid, params);
    }

    // Draw debug visualization if enabled
    if params.show_debug {
        draw_debug_overlays(&draw, model, app.window_rect());
    }

    // Finish drawing
    draw.to_frame(app, &frame).unwrap();

    // Draw the egui UI on top
    model.egui.draw_to_frame(&frame).unwrap();
}

// Convert a canvas position to nannou's centred window coordinates
fn to_screen(position: Vector2D, params: &SimulationParams) -> Point2 {
    pt2(
        position.x - params.canvas_width / 2.0,
        position.y - params.canvas_height / 2.0,
    )
}

// Draw a single boid as a triangle pointing along its heading
fn draw_boid(draw: &Draw, boid: &Boid, params: &SimulationParams) {
    // The apex sits on the heading; the rear vertices are rotated away from
    // it by the glyph spread, all on a circle of BOID_SIZE radius
    let (sin, cos) = GLYPH_SPREAD.sin_cos();
    let points = [
        pt2(BOID_SIZE, 0.0),
        pt2(BOID_SIZE * cos, BOID_SIZE * sin),
        pt2(BOID_SIZE * cos, -BOID_SIZE * sin),
    ];

    draw.polygon()
        .color(WHITE)
        .points(points)
        .xy(to_screen(boid.position, params))
        .rotate(boid.heading());
}

// Draw the perception circles and velocity arrow for the first boid plus
// the text panel
fn draw_debug_overlays(draw: &Draw, model: &Model, window_rect: Rect) {
    let params = &model.sim.params;

    if let Some(first_boid) = model.boids.first() {
        let screen_pos = to_screen(first_boid.position, params);

        // Perception radius
        draw.ellipse()
            .xy(screen_pos)
            .radius(params.perception_radius)
            .no_fill()
            .stroke(GREEN)
            .stroke_weight(1.0);

        // Separation radius
        draw.ellipse()
            .xy(screen_pos)
            .radius(params.separation_radius())
            .no_fill()
            .stroke(RED)
            .stroke_weight(1.0);

        // Velocity vector
        draw.arrow()
            .start(screen_pos)
            .end(pt2(
                screen_pos.x + first_boid.velocity.x * 5.0,
                screen_pos.y + first_boid.velocity.y * 5.0,
            ))
            .color(YELLOW)
            .stroke_weight(2.0);
    }

    // Draw debug info
    ui::draw_debug_info(draw, &model.debug_info, window_rect, model.boids.len());
}
