/*
 * Boid Flocking Simulation - Module Definitions
 *
 * This file defines the module structure for the flocking simulation.
 * The steering rules and integration live in `flock`, the value types in
 * `vector` and `boid`, and the nannou front end in `app`, `renderer` and `ui`.
 */

// Re-export key components for easier access
pub use app::Model;
pub use boid::Boid;
pub use debug::DebugInfo;
pub use flock::FlockSimulator;
pub use params::SimulationParams;
pub use vector::Vector2D;

// Define modules
pub mod app;
pub mod boid;
pub mod debug;
pub mod flock;
pub mod params;
pub mod renderer;
pub mod ui;
pub mod vector;

// Constants
pub const BOID_SIZE: f32 = 5.0;
// Angular offset of the two rear glyph vertices from the heading, in radians
pub const GLYPH_SPREAD: f32 = 2.5;
pub const TARGET_FPS: f64 = 60.0;
