/*
 * Application Module
 *
 * This module defines the main application model and logic for the flocking
 * simulation. It creates the window, spawns the initial flock, runs one
 * simulation tick per frame and reacts to UI and keyboard input.
 */

use nannou::prelude::*;
use nannou_egui::Egui;

use crate::boid::Boid;
use crate::debug::DebugInfo;
use crate::flock::FlockSimulator;
use crate::params::SimulationParams;
use crate::renderer;
use crate::ui;
use crate::TARGET_FPS;

// Main model for the application
pub struct Model {
    pub boids: Vec<Boid>,
    pub sim: FlockSimulator,
    pub egui: Egui,
    pub debug_info: DebugInfo,
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let params = SimulationParams::default();

    // One simulation tick per frame
    app.set_loop_mode(LoopMode::rate_fps(TARGET_FPS));

    // Create the main window sized to the canvas
    let window_id = app
        .new_window()
        .title("Boids")
        .size(params.canvas_width as u32, params.canvas_height as u32)
        .view(renderer::view)
        .key_pressed(key_pressed)
        .raw_event(raw_window_event)
        .build()
        .unwrap();

    // Get the window
    let window = app.window(window_id).unwrap();

    // Create the UI
    let egui = Egui::from_window(&window);

    // Spawn the initial flock
    let mut rng = rand::thread_rng();
    let boids: Vec<Boid> = (0..params.num_boids)
        .map(|_| Boid::spawn_random(&mut rng, params.canvas_width, params.canvas_height))
        .collect();

    log::info!(
        "spawned {} boids on a {}x{} canvas",
        boids.len(),
        params.canvas_width,
        params.canvas_height
    );

    Model {
        boids,
        sim: FlockSimulator::new(params),
        egui,
        debug_info: DebugInfo::default(),
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    // Update debug info
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    // Update UI and check if boids need to be reset
    let (should_reset_boids, num_boids_changed, _ui_changed) =
        ui::update_ui(&mut model.egui, &mut model.sim.params, &model.debug_info);

    if should_reset_boids || num_boids_changed {
        reset_boids(model);
    }

    // Advance the simulation unless paused
    if !model.sim.params.pause_simulation {
        model.sim.step(&mut model.boids);
        model.debug_info.ticks += 1;
    }
}

// Re-spawn the flock at the configured population
pub fn reset_boids(model: &mut Model) {
    let count = model.sim.params.num_boids;
    let width = model.sim.params.canvas_width;
    let height = model.sim.params.canvas_height;

    let mut rng = rand::thread_rng();
    model.boids.clear();
    model
        .boids
        .resize_with(count, || Boid::spawn_random(&mut rng, width, height));

    log::debug!("flock reset to {} boids", model.boids.len());
}

// Keyboard shortcuts for the common controls
pub fn key_pressed(app: &App, model: &mut Model, key: Key) {
    match key {
        Key::Space => {
            model.sim.params.pause_simulation = !model.sim.params.pause_simulation;
        }
        Key::D => {
            model.sim.params.show_debug = !model.sim.params.show_debug;
        }
        Key::R => reset_boids(model),
        Key::Escape => app.quit(),
        _ => {}
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &nannou::winit::event::WindowEvent) {
    // Pass events to egui
    model.egui.handle_raw_event(event);
}
