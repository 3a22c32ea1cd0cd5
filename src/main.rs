/*
 * Boid Flocking Simulation
 *
 * This application simulates the flocking behavior of birds (boids) based on
 * three steering rules:
 * 1. Alignment: Steer towards the average heading of neighbors
 * 2. Cohesion: Steer towards the average position of neighbors
 * 3. Separation: Avoid crowding the closest neighbors
 *
 * The simulation includes interactive sliders to adjust parameters in
 * real-time and an optional debug overlay.
 */

use flocking::app;

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    nannou::app(app::model).update(app::update).run();
}
